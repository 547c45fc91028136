//! Grid coordinates to strip addresses.
//!
//! The 25 LEDs are wired as one serpentine strip. Even rows run
//! left-to-right, odd rows right-to-left, and the strip's first LED sits at
//! the bottom-right corner, so grid cell (0, 0) is the *last* address.

/// Cells along one side of the matrix.
pub const GRID_SIZE: usize = 5;

/// Total number of LEDs in the matrix.
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Strip address of the cell at column `col`, row `row` (row 0 is the top).
///
/// # Panics
///
/// Panics if either coordinate is outside the 5×5 grid.
pub const fn address(col: u8, row: u8) -> usize {
    let (x, y) = (col as usize, row as usize);
    assert!(x < GRID_SIZE && y < GRID_SIZE, "grid cell out of range");

    let scan = if y % 2 == 0 {
        y * GRID_SIZE + x
    } else {
        y * GRID_SIZE + (GRID_SIZE - 1 - x)
    };
    CELL_COUNT - 1 - scan
}
