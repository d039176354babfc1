pub mod framebuffer;
pub mod math;
pub mod rasterizer;
