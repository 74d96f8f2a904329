pub mod point;
pub use point::*;

/// Re-exports under the name the binding crates use for native types.
pub mod rust {
    pub use super::point::Point;
}
