//! The in-memory frame for the matrix and the strip it is flushed to.

use palette::Srgb;

use crate::grid::CELL_COUNT;

/// One LED colour.
pub type Pixel = Srgb<u8>;

/// A whole matrix worth of pixels, in strip address order.
pub type Frame = [Pixel; CELL_COUNT];

/// All channels off.
pub const OFF: Pixel = Srgb::new(0, 0, 0);

/// Shifts a frame out to the physical LEDs.
///
/// Implementations must preserve call order and leave the line quiet long
/// enough after each frame for the strip to latch it.
#[allow(async_fn_in_trait)]
pub trait StripTransmitter {
    async fn transmit(&mut self, frame: &Frame);
}

/// Framebuffer for the next frame plus the transmitter that emits it.
///
/// Nothing reaches the LEDs until [`flush`](DisplaySurface::flush).
pub struct DisplaySurface<T> {
    transmitter: T,
    framebuffer: Frame,
}

impl<T: StripTransmitter> DisplaySurface<T> {
    pub const fn new(transmitter: T) -> Self {
        Self {
            transmitter,
            framebuffer: [OFF; CELL_COUNT],
        }
    }

    /// Set a single LED by strip address.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below [`CELL_COUNT`].
    pub const fn set(&mut self, index: usize, color: Pixel) {
        self.framebuffer[index] = color;
    }

    /// Fill all LEDs with one colour.
    pub fn fill(&mut self, color: Pixel) {
        self.framebuffer.fill(color);
    }

    /// Turn all LEDs off.
    pub fn clear(&mut self) {
        self.fill(OFF);
    }

    /// Send the framebuffer to the strip. Blocks the caller until the strip
    /// has latched it.
    pub async fn flush(&mut self) {
        self.transmitter.transmit(&self.framebuffer).await;
    }

    pub const fn frame(&self) -> &Frame {
        &self.framebuffer
    }
}
