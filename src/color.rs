use enum_map::Enum;
use serde::{Deserialize, Serialize};
use strum::EnumIter;


#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Enum, EnumIter, Serialize, Deserialize,
)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    pub fn to_wire(self) -> u16 {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    pub fn from_wire(bit: u16) -> Color {
        if bit == 0 { Color::Light } else { Color::Dark }
    }
}
