use serde::{Deserialize, Serialize};
use static_assertions::const_assert;
use strum::{EnumCount, EnumIter, IntoEnumIterator};

use crate::coord::HexCoord;


// Highlight decorations a cell can carry. Bit index in the wire mask is the
// declaration order. The mask byte has room for three more tags.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, EnumCount, EnumIter, Serialize, Deserialize)]
pub enum Effect {
    Selected,
    MoveTarget,
    Capture,
    LastMove,
    Check,
}

const_assert!(Effect::COUNT <= 8);

impl Effect {
    pub fn bit(self) -> u8 { 1 << (self as u8) }
}


// The raw 8-bit effect mask from the wire. Unknown high bits are preserved
// bit-exact (and survive re-encoding) but never show up as tags: a sender
// newer than us produces no visual effect rather than an error.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug, Serialize, Deserialize)]
pub struct EffectSet {
    bits: u8,
}

impl EffectSet {
    pub fn new() -> Self { EffectSet { bits: 0 } }
    pub fn from_bits(bits: u8) -> Self { EffectSet { bits } }
    pub fn bits(self) -> u8 { self.bits }

    // Empty means the raw mask is zero, not "no known tags".
    pub fn is_empty(self) -> bool { self.bits == 0 }

    pub fn contains(self, effect: Effect) -> bool { self.bits & effect.bit() != 0 }

    pub fn with(mut self, effect: Effect) -> Self {
        self.bits |= effect.bit();
        self
    }

    pub fn iter(self) -> impl Iterator<Item = Effect> {
        Effect::iter().filter(move |e| self.contains(*e))
    }
}

impl FromIterator<Effect> for EffectSet {
    fn from_iter<I: IntoIterator<Item = Effect>>(iter: I) -> Self {
        iter.into_iter().fold(EffectSet::new(), EffectSet::with)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Highlight {
    pub pos: HexCoord,
    pub effects: EffectSet,
}


#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn known_tags_round_trip() {
        let set: EffectSet = [Effect::Selected, Effect::Check].into_iter().collect();
        assert!(set.contains(Effect::Selected));
        assert!(set.contains(Effect::Check));
        assert!(!set.contains(Effect::Capture));
        assert_eq!(set.iter().collect_vec(), vec![Effect::Selected, Effect::Check]);
    }

    #[test]
    fn unknown_bits_are_kept_but_invisible() {
        let set = EffectSet::from_bits(0b1010_0000);
        assert!(!set.is_empty());
        assert_eq!(set.iter().count(), 0);
        assert_eq!(set.bits(), 0b1010_0000);
    }
}
