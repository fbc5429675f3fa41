//! Panel wiring described as data: which grid cell each LED on the chain lights.
//!
//! See [`LedLayout`].

/// Wiring of a `W`×`H` panel whose `N` LEDs form one serial chain.
///
/// Cells are addressed `(x, y)` with `(0, 0)` at the top left, `x` growing to the right and
/// `y` growing downward. A layout is built from the chain's point of view (LED `i` sits at
/// cell `cells[i]`) and answers the renderer's question the other way round
/// ([`index`](Self::index)).
///
/// Every constructor is a `const fn` that panics unless each cell is lit by exactly one LED,
/// so a layout held in a `const` is checked when the crate compiles.
///
/// # Example
///
/// A 3×2 panel whose chain starts in the bottom-right corner:
///
/// ```rust
/// use digit_matrix::led2d::layout::LedLayout;
///
/// // LED3  LED4  LED5
/// // LED2  LED1  LED0
/// const FROM_BOTTOM_RIGHT: LedLayout<6, 3, 2> = LedLayout::serpentine_row_major().rotate_180();
///
/// assert_eq!(FROM_BOTTOM_RIGHT.index(2, 1), Some(0));
/// assert_eq!(FROM_BOTTOM_RIGHT.index(0, 0), Some(3));
/// assert_eq!(FROM_BOTTOM_RIGHT.index(3, 0), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LedLayout<const N: usize, const W: usize, const H: usize> {
    cells: [(u16, u16); N],
    leds: [u16; N],
}

impl<const N: usize, const W: usize, const H: usize> LedLayout<N, W, H> {
    /// Build a layout from the cell of each LED, in chain order.
    ///
    /// # Panics
    ///
    /// If `W * H != N`, if a cell lies outside the panel, or if a cell is lit twice (and
    /// therefore another not at all).
    ///
    /// ```rust
    /// use digit_matrix::led2d::layout::LedLayout;
    ///
    /// // A 2×2 ring: top row left to right, then bottom row right to left.
    /// const RING: LedLayout<4, 2, 2> = LedLayout::new([(0, 0), (1, 0), (1, 1), (0, 1)]);
    /// assert_eq!(RING.index(0, 1), Some(3));
    /// ```
    #[must_use]
    pub const fn new(cells: [(u16, u16); N]) -> Self {
        assert!(W > 0 && H > 0, "W and H must be positive");
        assert!(W * H == N, "W*H must equal N");
        assert!(N <= u16::MAX as usize, "total LEDs must fit in u16");

        // `u16::MAX` marks a cell no LED has claimed yet.
        let mut leds = [u16::MAX; N];
        let mut led = 0;
        while led < N {
            let (x, y) = cells[led];
            assert!((x as usize) < W, "column out of bounds");
            assert!((y as usize) < H, "row out of bounds");
            let slot = &mut leds[y as usize * W + x as usize];
            assert!(*slot == u16::MAX, "duplicate (col,row) in mapping");
            *slot = led as u16;
            led += 1;
        }

        Self { cells, leds }
    }

    /// Chain that snakes across rows: the top row left to right, the next right to left,
    /// and so on.
    ///
    /// ```text
    /// LED0  LED1  LED2
    /// LED5  LED4  LED3
    /// ```
    #[must_use]
    pub const fn serpentine_row_major() -> Self {
        assert!(W > 0 && W * H == N, "W*H must equal N");

        let mut cells = [(0_u16, 0_u16); N];
        let mut led = 0;
        while led < N {
            let y = led / W;
            let step = led % W;
            let x = if y % 2 == 0 { step } else { W - 1 - step };
            cells[led] = (x as u16, y as u16);
            led += 1;
        }
        Self::new(cells)
    }

    /// The same chain viewed with the panel turned upside down.
    #[must_use]
    pub const fn rotate_180(self) -> Self {
        let mut cells = self.cells;
        let mut led = 0;
        while led < N {
            let (x, y) = cells[led];
            cells[led] = (W as u16 - 1 - x, H as u16 - 1 - y);
            led += 1;
        }
        Self::new(cells)
    }

    /// Chain index of the LED at `(x, y)`, or `None` off the panel.
    #[must_use]
    pub const fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x < W && y < H {
            Some(self.leds[y * W + x] as usize)
        } else {
            None
        }
    }
}
