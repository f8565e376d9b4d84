pub mod limits;
pub mod material;

pub use material::{Material, MaterialProperties};
