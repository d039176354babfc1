use image::{Rgb, RgbImage};
use nalgebra::Vector3;
use std::cell::UnsafeCell;
use std::cmp::Ordering as CmpOrdering;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};

/// Color and depth storage for a single render call.
///
/// Colors are kept as unclamped `f32` channels in the 0..255 scale and only
/// quantized when the frame is read out. Depth is stored as atomic `f32`
/// bits so pixel rows can be shaded in parallel.
pub struct FrameBuffer {
    pub width: usize,
    pub height: usize,

    /// One cell per pixel. A cell is only written while holding the stripe
    /// lock for its index, and only read through `&mut self`.
    color_buffer: Vec<UnsafeCell<Vector3<f32>>>,

    /// Depth buffer stored as atomic bits of f32.
    depth_buffer: Vec<AtomicU32>,

    /// Striped locks protecting color writes.
    locks: Vec<Mutex<()>>,
}

// Shared access only writes colors under the stripe lock of the pixel's
// index; depth goes through atomics.
unsafe impl Sync for FrameBuffer {}

const LOCK_COUNT: usize = 1024;

impl FrameBuffer {
    /// Creates a buffer filled with `background` and depth `+inf`.
    pub fn new(width: usize, height: usize, background: [u8; 3]) -> Self {
        let size = width * height;

        let inf_bits = f32::INFINITY.to_bits();
        let depth_buffer = (0..size).map(|_| AtomicU32::new(inf_bits)).collect();
        let locks = (0..LOCK_COUNT).map(|_| Mutex::new(())).collect();

        Self {
            width,
            height,
            color_buffer: (0..size)
                .map(|_| UnsafeCell::new(to_linear(background)))
                .collect(),
            depth_buffer,
            locks,
        }
    }

    #[inline(always)]
    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    #[inline(always)]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Thread-safe depth test and update.
    ///
    /// Passes only when `new_depth` is strictly less than the stored value, so
    /// NaN never passes. On success the depth buffer already holds `new_depth`.
    #[inline]
    pub fn depth_test_and_update(&self, x: usize, y: usize, new_depth: f32) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        let idx = self.index(x, y);
        let new_bits = new_depth.to_bits();
        let depth_atomic = &self.depth_buffer[idx];

        let mut current_bits = depth_atomic.load(Ordering::Relaxed);
        loop {
            let current_depth = f32::from_bits(current_bits);
            if new_depth.partial_cmp(&current_depth) != Some(CmpOrdering::Less) {
                return false;
            }

            match depth_atomic.compare_exchange_weak(
                current_bits,
                new_bits,
                Ordering::Acquire,
                Ordering::Relaxed,
            ) {
                Ok(_) => return true,
                Err(updated_bits) => current_bits = updated_bits,
            }
        }
    }

    /// Thread-safe pixel write. No depth test.
    #[inline]
    pub fn set_pixel(&self, x: usize, y: usize, color: Vector3<f32>) {
        if self.in_bounds(x, y) {
            let idx = self.index(x, y);

            let lock_idx = idx % self.locks.len();
            // A poisoned stripe only means another writer panicked mid-store.
            let _guard = self.locks[lock_idx]
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());

            // SAFETY: every writer of this cell holds the same stripe lock,
            // and readers need `&mut self`.
            unsafe {
                *self.color_buffer[idx].get() = color;
            }
        }
    }

    pub fn get_depth(&self, x: usize, y: usize) -> Option<f32> {
        if !self.in_bounds(x, y) {
            return None;
        }
        let bits = self.depth_buffer[self.index(x, y)].load(Ordering::Relaxed);
        Some(f32::from_bits(bits))
    }

    /// Quantizes the color buffer: channels clamped to 0..=255, then truncated.
    ///
    /// Takes `&mut self` so no write can be in flight while reading.
    pub fn to_image(&mut self) -> RgbImage {
        let width = self.width;
        let mut image = RgbImage::new(width as u32, self.height as u32);
        for (idx, cell) in self.color_buffer.iter_mut().enumerate() {
            let c = *cell.get_mut();
            let (x, y) = ((idx % width) as u32, (idx / width) as u32);
            image.put_pixel(x, y, Rgb([quantize(c.x), quantize(c.y), quantize(c.z)]));
        }
        image
    }
}

#[inline(always)]
fn to_linear(color: [u8; 3]) -> Vector3<f32> {
    Vector3::new(color[0] as f32, color[1] as f32, color[2] as f32)
}

#[inline(always)]
fn quantize(channel: f32) -> u8 {
    // `as` maps NaN to 0.
    channel.clamp(0.0, 255.0) as u8
}
