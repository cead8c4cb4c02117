//! Value objects

mod coordinates;

pub use coordinates::Coordinates;
