pub use self::split::SplitResult;
pub use self::split_triangle::split_triangle;

mod split;
mod split_triangle;
mod split_trimesh;
