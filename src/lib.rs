pub mod types {
    // The submodules live in src/types/*.rs
    pub mod matrix;
    pub mod traits;
    pub mod vector;
}

pub use types::matrix::Matrix4x4;
pub use types::traits::FloatingPoint;
pub use types::vector::Vector3;
