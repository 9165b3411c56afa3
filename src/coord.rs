use std::fmt;

use serde::{Deserialize, Serialize};


// Coordinates occupy a nibble each on the wire.
pub const COORD_LIMIT: u8 = 16;


// Axial coordinates of a cell. Which (q, r) pairs form a valid board is the
// surface's business (`Layer::contains`); this type only enforces the wire range.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HexCoord {
    q: u8,
    r: u8,
}

impl HexCoord {
    pub const fn new(q: u8, r: u8) -> Self {
        assert!(q < COORD_LIMIT && r < COORD_LIMIT);
        HexCoord { q, r }
    }

    pub const fn q(self) -> u8 { self.q }
    pub const fn r(self) -> u8 { self.r }

    // Packs into the low byte of a wire word: q in bits 7..4, r in bits 3..0.
    pub const fn to_nibbles(self) -> u16 { ((self.q as u16) << 4) | self.r as u16 }

    pub const fn from_nibbles(word: u16) -> Self {
        HexCoord {
            q: ((word & 0xf0) >> 4) as u8,
            r: (word & 0xf) as u8,
        }
    }

    pub fn all() -> impl Iterator<Item = Self> + Clone {
        (0..COORD_LIMIT)
            .flat_map(|q| (0..COORD_LIMIT).map(move |r| HexCoord::new(q, r)))
    }
}

impl fmt::Debug for HexCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HexCoord({}, {})", self.q, self.r)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nibble_packing() {
        let pos = HexCoord::new(0xa, 0x3);
        assert_eq!(pos.to_nibbles(), 0xa3);
        assert_eq!(HexCoord::from_nibbles(0xa3), pos);
        // High bits do not leak into the coordinate.
        assert_eq!(HexCoord::from_nibbles(0xffa3), pos);
    }
}
