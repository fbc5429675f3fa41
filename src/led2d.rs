//! The 5×5 digit panel: its serpentine wiring and the glyphs drawn on it.
//!
//! The panel's first LED sits in the bottom-right corner. Even rows (counting from the top)
//! run right-to-left in LED order, odd rows left-to-right:
//!
//! ```text
//!   x:   0   1   2   3   4
//! y=0:  24  23  22  21  20
//! y=1:  15  16  17  18  19
//! y=2:  14  13  12  11  10
//! y=3:   5   6   7   8   9
//! y=4:   4   3   2   1   0
//! ```
//!
//! See [`render_digit`] for drawing a digit.

pub mod layout;

use crate::led_strip::{LedStrip, LedWire, Rgb};
use crate::{Error, Result};
use layout::LedLayout;

/// Number of columns on the panel.
pub const PANEL_WIDTH: usize = 5;
/// Number of rows on the panel.
pub const PANEL_HEIGHT: usize = 5;
/// Number of LEDs on the panel.
pub const PANEL_LEN: usize = PANEL_WIDTH * PANEL_HEIGHT;

/// LED index wired to column `x`, row `y` of the panel.
///
/// Only meaningful for `x, y < 5`; use [`PANEL_LAYOUT`] for a checked lookup.
///
/// ```rust
/// use digit_matrix::led2d::serpentine_index;
///
/// assert_eq!(serpentine_index(0, 0), 24);
/// assert_eq!(serpentine_index(0, 1), 15);
/// ```
#[must_use]
pub const fn serpentine_index(x: usize, y: usize) -> usize {
    if y % 2 == 0 {
        PANEL_LEN - 1 - (y * PANEL_WIDTH + x)
    } else {
        PANEL_LEN - 1 - (y * PANEL_WIDTH + (PANEL_WIDTH - 1 - x))
    }
}

/// The panel's wiring: a row serpentine whose chain starts at the bottom-right corner.
pub const PANEL_LAYOUT: LedLayout<PANEL_LEN, PANEL_WIDTH, PANEL_HEIGHT> =
    LedLayout::serpentine_row_major().rotate_180();

// The layout and the closed-form index must agree on every cell.
const _: () = {
    let mut y_index = 0;
    while y_index < PANEL_HEIGHT {
        let mut x_index = 0;
        while x_index < PANEL_WIDTH {
            let matches = match PANEL_LAYOUT.index(x_index, y_index) {
                Some(index) => index == serpentine_index(x_index, y_index),
                None => false,
            };
            assert!(matches, "PANEL_LAYOUT disagrees with serpentine_index");
            x_index += 1;
        }
        y_index += 1;
    }
};

// ============================================================================
// Glyphs
// ============================================================================

/// A 5×5 color bitmap, indexed `[col][row]`.
pub type Glyph = [[Rgb; PANEL_HEIGHT]; PANEL_WIDTH];

const ON: Rgb = Rgb::new(243, 7, 7);
const OFF: Rgb = Rgb::new(0, 0, 0);

const DIGIT_0: Glyph = [
    [OFF, ON, ON, ON, OFF],
    [ON, OFF, OFF, OFF, ON],
    [ON, OFF, OFF, OFF, ON],
    [ON, OFF, OFF, OFF, ON],
    [OFF, ON, ON, ON, OFF],
];

const DIGIT_1: Glyph = [
    [OFF, OFF, ON, OFF, OFF],
    [OFF, ON, ON, OFF, OFF],
    [OFF, ON, ON, OFF, OFF],
    [OFF, ON, ON, OFF, OFF],
    [OFF, ON, ON, OFF, OFF],
];

/// Glyph for `digit`.
///
/// Only 0 and 1 have bitmaps; every other digit is unsupported.
///
/// # Errors
///
/// Returns [`Error::GlyphUndefined`] for digits without a bitmap.
pub const fn glyph(digit: u8) -> Result<&'static Glyph> {
    match digit {
        0 => Ok(&DIGIT_0),
        1 => Ok(&DIGIT_1),
        _ => Err(Error::GlyphUndefined { digit }),
    }
}

/// Draw `digit` into the strip's buffer and send one frame.
///
/// The mapper is called with `x = row`, `y = col` while the glyph is read as
/// `glyph[col][row]`; that pairing is what makes the bitmaps above appear upright on the
/// panel.
///
/// # Errors
///
/// Returns [`Error::GlyphUndefined`] for digits without a bitmap. Nothing is written to the
/// buffer or the wire in that case.
pub async fn render_digit<W: LedWire>(
    led_strip: &mut LedStrip<W, PANEL_LEN>,
    digit: u8,
) -> Result<()> {
    let glyph = glyph(digit)?;
    info!("render_digit: {}", digit);

    for row in 0..PANEL_HEIGHT {
        for (col, column) in glyph.iter().enumerate() {
            let (Some(position), Some(&color)) = (PANEL_LAYOUT.index(row, col), column.get(row))
            else {
                continue;
            };
            debug!(
                "LED {=usize} (row {=usize}, col {=usize}) = RGB({=u8}, {=u8}, {=u8})",
                position,
                row,
                col,
                color.r,
                color.g,
                color.b
            );
            led_strip.set_pixel(position, color)?;
        }
    }

    led_strip.write().await;
    Ok(())
}
