#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

pub mod board;
pub mod color;
pub mod coord;
pub mod dirty;
pub mod effect;
pub mod event;
pub mod layer;
pub mod piece;
pub mod promotion;
pub mod registry;
pub mod test_util;
pub mod timer;
pub mod wire;
