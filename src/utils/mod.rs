//! Various unsorted geometrical and logical operators.

pub use self::point_welder::PointWelder;

pub mod hashmap;
pub mod hashset;
mod point_welder;
