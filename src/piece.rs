use derive_new::new;
use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter};

use crate::color::Color;
use crate::coord::HexCoord;


// Wire codes are the declaration order: King = 0 ... Pawn = 5. Codes 6 and 7
// fit in the 3-bit field but are unassigned.
#[derive(
    Clone, Copy, PartialEq, Eq, Hash, Debug, EnumCount, EnumIter, Serialize, Deserialize,
)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    pub fn to_wire(self) -> u16 {
        match self {
            PieceKind::King => 0,
            PieceKind::Queen => 1,
            PieceKind::Rook => 2,
            PieceKind::Bishop => 3,
            PieceKind::Knight => 4,
            PieceKind::Pawn => 5,
        }
    }

    pub fn from_wire(code: u16) -> Option<Self> {
        match code {
            0 => Some(PieceKind::King),
            1 => Some(PieceKind::Queen),
            2 => Some(PieceKind::Rook),
            3 => Some(PieceKind::Bishop),
            4 => Some(PieceKind::Knight),
            5 => Some(PieceKind::Pawn),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, new, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub pos: HexCoord,
}

pub fn piece_to_pictogram(piece_kind: PieceKind, color: Color) -> char {
    use self::Color::*;
    use self::PieceKind::*;
    match (color, piece_kind) {
        (Light, Pawn) => '♙',
        (Light, Knight) => '♘',
        (Light, Bishop) => '♗',
        (Light, Rook) => '♖',
        (Light, Queen) => '♕',
        (Light, King) => '♔',
        (Dark, Pawn) => '♟',
        (Dark, Knight) => '♞',
        (Dark, Bishop) => '♝',
        (Dark, Rook) => '♜',
        (Dark, Queen) => '♛',
        (Dark, King) => '♚',
    }
}
