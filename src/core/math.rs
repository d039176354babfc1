pub mod interpolation;
pub mod pose;
pub mod transform;
