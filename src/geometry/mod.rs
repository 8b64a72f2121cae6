pub mod transform;
pub mod triangle;

pub use transform::RigidTransform;
pub use triangle::{ThirdVertex, Triangle, local_frame};
