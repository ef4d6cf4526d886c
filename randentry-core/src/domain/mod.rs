//! Domain types: bars, sides, exposure, position snapshots, stop marks.

pub mod bar;
pub mod position;

pub use bar::Bar;
pub use position::{Exposure, PositionSnapshot, Side, StopMark};
