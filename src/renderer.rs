//! Paints symbols and the countdown sweep onto the display surface.

use crate::{
    config::Palette,
    display::{
        DisplaySurface,
        Pixel,
        StripTransmitter,
    },
    glyphs::{
        Symbol,
        glyph_cells,
    },
    grid::{
        CELL_COUNT,
        address,
    },
};

/// Every paint call starts from a cleared frame, so the frame after a paint
/// depends only on that paint call.
pub struct Renderer<T> {
    surface: DisplaySurface<T>,
    palette: Palette,
}

impl<T: StripTransmitter> Renderer<T> {
    pub const fn new(surface: DisplaySurface<T>, palette: Palette) -> Self {
        Self { surface, palette }
    }

    /// Set every cell to the palette's off colour. Does not flush.
    pub fn clear(&mut self) {
        self.surface.fill(self.palette.off);
    }

    /// Clear, then light the cells of `symbol` in `color`.
    pub fn paint_symbol(&mut self, symbol: Symbol, color: Pixel) {
        self.clear();
        for &(col, row) in glyph_cells(symbol) {
            self.surface.set(address(col, row), color);
        }
    }

    /// Clear, then light the first `percent` of cells in strip order.
    ///
    /// # Panics
    ///
    /// Panics if `percent` is above 100.
    pub fn paint_progress(&mut self, percent: u8) {
        assert!(percent <= 100, "progress above 100%");
        self.clear();
        let lit = usize::from(percent) * CELL_COUNT / 100;
        for index in 0..lit {
            self.surface.set(index, self.palette.progress);
        }
    }

    /// Emit the current frame. Cannot be interrupted once started.
    pub async fn flush(&mut self) {
        self.surface.flush().await;
    }

    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    pub const fn surface(&self) -> &DisplaySurface<T> {
        &self.surface
    }
}

#[cfg(test)]
mod tests {
    use embassy_futures::block_on;

    use super::*;
    use crate::{
        display::OFF,
        sequence::Direction,
        sim::RecordingStrip,
    };

    fn renderer() -> (Renderer<RecordingStrip>, RecordingStrip) {
        let strip = RecordingStrip::default();
        (
            Renderer::new(DisplaySurface::new(strip.clone()), Palette::DIM),
            strip,
        )
    }

    fn lit(renderer: &Renderer<RecordingStrip>) -> usize {
        renderer.surface().frame().iter().filter(|&&p| p != OFF).count()
    }

    #[test]
    fn symbol_lights_exactly_its_glyph() {
        let (mut renderer, _) = renderer();
        let red = Palette::DIM.color_one;
        renderer.paint_symbol(Symbol::Arrow(Direction::Up), red);

        let frame = renderer.surface().frame();
        assert_eq!(lit(&renderer), 7);
        assert_eq!(frame[address(2, 0)], red);
        assert_eq!(frame[address(2, 4)], red);
        assert_eq!(frame[address(0, 0)], OFF);
    }

    #[test]
    fn painting_twice_gives_the_same_frame() {
        let (mut renderer, _) = renderer();
        let color = Palette::DIM.color_two;

        renderer.paint_symbol(Symbol::Digit(8), color);
        let first = *renderer.surface().frame();
        renderer.paint_symbol(Symbol::Digit(8), color);
        assert_eq!(*renderer.surface().frame(), first);
    }

    #[test]
    fn new_symbol_replaces_the_old_one() {
        let (mut renderer, _) = renderer();
        renderer.paint_symbol(Symbol::Digit(8), Palette::DIM.level_digit);
        renderer.paint_symbol(Symbol::Checkmark, Palette::DIM.checkmark);
        assert_eq!(lit(&renderer), 5);
    }

    #[test]
    fn progress_fills_a_prefix_in_strip_order() {
        let (mut renderer, _) = renderer();
        for (percent, expected) in [(0, 0), (3, 0), (4, 1), (50, 12), (99, 24), (100, 25)] {
            renderer.paint_progress(percent);
            let frame = renderer.surface().frame();
            assert_eq!(lit(&renderer), expected, "{percent}%");
            assert!(frame[..expected].iter().all(|&p| p == Palette::DIM.progress));
        }
    }

    #[test]
    #[should_panic(expected = "progress above 100%")]
    fn progress_past_full_panics() {
        let (mut renderer, _) = renderer();
        renderer.paint_progress(101);
    }

    #[test]
    fn nothing_is_sent_until_flush() {
        let (mut renderer, strip) = renderer();
        renderer.paint_symbol(Symbol::Checkmark, Palette::DIM.checkmark);
        assert!(strip.frames().is_empty());

        block_on(renderer.flush());
        assert_eq!(strip.frames(), [*renderer.surface().frame()]);
    }
}
