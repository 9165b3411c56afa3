use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::coord::HexCoord;
use crate::piece::PieceKind;


// The promotion surface is a fixed 2x2 square grid; each cell holds one
// candidate kind. Cell addressing reuses (q, r).
pub const PROMOTION_CHOICES: [(PieceKind, HexCoord); 4] = [
    (PieceKind::Queen, HexCoord::new(0, 0)),
    (PieceKind::Bishop, HexCoord::new(0, 1)),
    (PieceKind::Rook, HexCoord::new(1, 0)),
    (PieceKind::Knight, HexCoord::new(1, 1)),
];

pub fn candidate_at(pos: HexCoord) -> Option<PieceKind> {
    PROMOTION_CHOICES
        .iter()
        .find(|(_, candidate_pos)| *candidate_pos == pos)
        .map(|(kind, _)| *kind)
}


// There is deliberately no cancel transition: the prompt stays up until a
// candidate is picked or the surrounding system issues a new prompt.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum PromotionState {
    Idle,
    AwaitingSelection { color: Color, pos: HexCoord },
}

impl PromotionState {
    pub fn is_idle(self) -> bool { matches!(self, PromotionState::Idle) }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_layout() {
        assert_eq!(candidate_at(HexCoord::new(0, 0)), Some(PieceKind::Queen));
        assert_eq!(candidate_at(HexCoord::new(1, 1)), Some(PieceKind::Knight));
        assert_eq!(candidate_at(HexCoord::new(2, 0)), None);
    }
}
