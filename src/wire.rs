// Wire format: every update is an array of 16-bit words, one word per entry.
//
//   SetPieces entry:  bit 11 = color, bits 10..8 = kind, bits 7..4 = q, bits 3..0 = r
//   Move entry:       bits 15..8 = piece index, bits 7..4 = q, bits 3..0 = r
//   Promote entry:    bits 15..8 = new kind, bits 7..0 = piece index
//   Highlight entry:  bits 15..8 = effect mask, bits 7..4 = q, bits 3..0 = r
//
// Note the asymmetry: move entries carry the piece index in the high byte,
// promote entries in the low byte. This matches the sender; do not unify.

use crate::color::Color;
use crate::coord::HexCoord;
use crate::effect::{EffectSet, Highlight};
use crate::piece::{Piece, PieceKind};


const COLOR_BIT: u16 = 11;
const KIND_SHIFT: u16 = 8;
const KIND_MASK: u16 = 0x7;
const BYTE_SHIFT: u16 = 8;
const BYTE_MASK: u16 = 0xff;

// Returns `None` for the two unassigned 3-bit kind codes; the sender is
// trusted to follow up with a consistent full update.
pub fn decode_piece(word: u16) -> Option<Piece> {
    let color = Color::from_wire((word >> COLOR_BIT) & 1);
    let kind = PieceKind::from_wire((word >> KIND_SHIFT) & KIND_MASK)?;
    Some(Piece::new(kind, color, HexCoord::from_nibbles(word)))
}

pub fn encode_piece(piece: &Piece) -> u16 {
    (piece.color.to_wire() << COLOR_BIT)
        | (piece.kind.to_wire() << KIND_SHIFT)
        | piece.pos.to_nibbles()
}

pub fn decode_move(word: u16) -> (usize, HexCoord) {
    ((word >> BYTE_SHIFT) as usize, HexCoord::from_nibbles(word))
}

pub fn encode_move(index: u8, pos: HexCoord) -> u16 {
    ((index as u16) << BYTE_SHIFT) | pos.to_nibbles()
}

// The kind occupies the full high byte here; values above the 3-bit range are
// just as unassigned as codes 6 and 7.
pub fn decode_promotion(word: u16) -> (Option<PieceKind>, usize) {
    (PieceKind::from_wire(word >> BYTE_SHIFT), (word & BYTE_MASK) as usize)
}

pub fn encode_promotion(kind: PieceKind, index: u8) -> u16 {
    (kind.to_wire() << BYTE_SHIFT) | index as u16
}

// `None` iff the mask byte is zero: such an entry decorates nothing and is
// never stored. A mask with only unknown bits set is kept (it round-trips),
// it just draws nothing.
pub fn decode_highlight(word: u16) -> Option<Highlight> {
    let mask = (word >> BYTE_SHIFT) as u8;
    if mask == 0 {
        return None;
    }
    Some(Highlight {
        pos: HexCoord::from_nibbles(word),
        effects: EffectSet::from_bits(mask),
    })
}

pub fn encode_highlight(highlight: &Highlight) -> u16 {
    ((highlight.effects.bits() as u16) << BYTE_SHIFT) | highlight.pos.to_nibbles()
}
