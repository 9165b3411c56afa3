use serde::{Deserialize, Serialize};

use crate::piece::Piece;


// Stable piece handle. The wire protocol addresses pieces by their position in
// the most recent full piece list; those positional indices are translated
// into `PieceId`s at the decode boundary (`by_wire_index`) and die with the
// list they came from: `replace_all` bumps the generation, so a handle issued
// before it can never match again, even if the slot is reoccupied.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct PieceId {
    slot: u32,
    generation: u32,
}

// Slots are `Option` so that an undecodable entry in a full piece update
// still occupies its position: wire indices of the entries after it must not
// shift. A vacant slot renders nothing and ignores moves and promotions.
#[derive(Clone, Debug)]
pub struct PieceRegistry {
    slots: Vec<Option<Piece>>,
    generation: u32,
}

impl PieceRegistry {
    pub fn new() -> Self {
        PieceRegistry { slots: Vec::new(), generation: 0 }
    }

    // Replaces the whole piece list. Slot order is wire order.
    pub fn replace_all(&mut self, pieces: impl IntoIterator<Item = Option<Piece>>) {
        self.generation += 1;
        self.slots.clear();
        self.slots.extend(pieces);
    }

    pub fn by_wire_index(&self, index: usize) -> Option<PieceId> {
        (index < self.slots.len()).then(|| PieceId {
            slot: index as u32,
            generation: self.generation,
        })
    }

    pub fn get(&self, id: PieceId) -> Option<&Piece> {
        if id.generation != self.generation {
            return None;
        }
        self.slots.get(id.slot as usize)?.as_ref()
    }

    pub fn get_mut(&mut self, id: PieceId) -> Option<&mut Piece> {
        if id.generation != self.generation {
            return None;
        }
        self.slots.get_mut(id.slot as usize)?.as_mut()
    }

    pub fn slots(&self) -> &[Option<Piece>] { &self.slots }

    pub fn iter(&self) -> impl Iterator<Item = &Piece> { self.slots.iter().flatten() }

    pub fn len(&self) -> usize { self.slots.len() }
    pub fn is_empty(&self) -> bool { self.slots.is_empty() }
}

impl Default for PieceRegistry {
    fn default() -> Self { PieceRegistry::new() }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::coord::HexCoord;
    use crate::piece::PieceKind;

    fn pawn(q: u8, r: u8) -> Option<Piece> {
        Some(Piece::new(PieceKind::Pawn, Color::Light, HexCoord::new(q, r)))
    }

    #[test]
    fn wire_index_resolution() {
        let mut registry = PieceRegistry::new();
        registry.replace_all([pawn(0, 0), pawn(1, 1)]);
        let id = registry.by_wire_index(1).unwrap();
        assert_eq!(registry.get(id).unwrap().pos, HexCoord::new(1, 1));
        assert_eq!(registry.by_wire_index(2), None);
    }

    #[test]
    fn vacant_slots_keep_positions() {
        let mut registry = PieceRegistry::new();
        registry.replace_all([pawn(0, 0), None, pawn(2, 2)]);
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.iter().count(), 2);
        let vacant = registry.by_wire_index(1).unwrap();
        assert_eq!(registry.get(vacant), None);
        let third = registry.by_wire_index(2).unwrap();
        assert_eq!(registry.get(third).unwrap().pos, HexCoord::new(2, 2));
    }

    #[test]
    fn stale_handles_die_with_their_generation() {
        let mut registry = PieceRegistry::new();
        registry.replace_all([pawn(0, 0)]);
        let stale = registry.by_wire_index(0).unwrap();
        registry.replace_all([pawn(5, 5)]);
        // The slot is reoccupied, but the old handle must not resolve to it.
        assert_eq!(registry.get(stale), None);
        let fresh = registry.by_wire_index(0).unwrap();
        assert_eq!(registry.get(fresh).unwrap().pos, HexCoord::new(5, 5));
    }
}
