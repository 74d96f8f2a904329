/// Simple point structure.
pub mod point;

pub use point::Point;
