//! Buttons: debouncing of raw press edges into single logical presses.
//!
//! Edges come from [`edge::button_edge_loop`] (one task per button on the Pico). Each edge is
//! offered to a shared [`Debouncer`], which keeps one [`DebounceState`] per button. The
//! control loop later consumes presses with [`Debouncer::take_pending`].
//!
//! ```text
//! button task --register_edge--> pending flag --take_pending--> control loop
//! ```
//!
//! Presses that arrive between two `take_pending` calls coalesce into one.

use core::cell::Cell;

use critical_section::Mutex;
use embassy_time::{Duration, Instant};
use portable_atomic::{AtomicBool, Ordering};

#[cfg(not(feature = "host"))]
pub mod edge;

// ============================================================================
// Constants
// ============================================================================

/// Minimum time between two accepted edges on the same button.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_micros(200_000);

// ============================================================================
// PressedTo - How the button is wired
// ============================================================================

/// Describes how the button is physically wired.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PressedTo {
    /// Button connects pin to voltage (3.3V) when pressed.
    /// Uses internal pull-down resistor. A press is a rising edge.
    ///
    /// Note: The original Pico 2 (RP2350) has a known silicon bug with pull-down resistors
    /// that can cause pins to stay HIGH after button release. Use Ground instead.
    Voltage,

    /// Button connects pin to ground (GND) when pressed.
    /// Uses internal pull-up resistor. A press is a falling edge.
    Ground,
}

// ============================================================================
// ButtonId
// ============================================================================

/// The two counter buttons.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonId {
    /// Increments the digit. Checked first when both are pending.
    A,
    /// Decrements the digit.
    B,
}

// ============================================================================
// DebounceState
// ============================================================================

/// Debounce bookkeeping for one button.
///
/// `pending` has a single writer (the edge source) and a single reader that clears it (the
/// control loop); both sides touch it only through atomic operations. `last_edge` is only
/// read and written inside a critical section.
pub struct DebounceState {
    pending: AtomicBool,
    last_edge: Mutex<Cell<Option<Instant>>>,
}

impl DebounceState {
    /// A state with no pending press and no edge seen yet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pending: AtomicBool::new(false),
            last_edge: Mutex::new(Cell::new(None)),
        }
    }

    fn register_edge(&self, now: Instant) -> bool {
        let accepted = critical_section::with(|cs| {
            let last_edge = self.last_edge.borrow(cs);
            let accepted = last_edge.get().is_none_or(|last| {
                now.checked_duration_since(last)
                    .is_some_and(|elapsed| elapsed > DEBOUNCE_WINDOW)
            });
            if accepted {
                last_edge.set(Some(now));
            }
            accepted
        });
        if accepted {
            self.pending.store(true, Ordering::Release);
        }
        accepted
    }

    fn take_pending(&self) -> bool {
        self.pending.swap(false, Ordering::AcqRel)
    }

    fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }
}

impl Default for DebounceState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Debouncer
// ============================================================================

/// Debounce engine shared between the button edge sources and the control loop.
///
/// Usually a `static`, since edge sources run in their own tasks.
///
/// # Example
///
/// ```rust
/// use digit_matrix::button::{ButtonId, Debouncer};
/// use embassy_time::Instant;
///
/// static DEBOUNCER: Debouncer = Debouncer::new();
///
/// assert!(DEBOUNCER.register_edge(ButtonId::A, Instant::from_micros(0)));
/// assert!(!DEBOUNCER.register_edge(ButtonId::A, Instant::from_micros(100_000))); // bounce
///
/// assert!(DEBOUNCER.take_pending(ButtonId::A));
/// assert!(!DEBOUNCER.take_pending(ButtonId::A));
/// ```
pub struct Debouncer {
    button_a: DebounceState,
    button_b: DebounceState,
}

impl Debouncer {
    /// Create a debouncer with nothing pending.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            button_a: DebounceState::new(),
            button_b: DebounceState::new(),
        }
    }

    const fn state(&self, button: ButtonId) -> &DebounceState {
        match button {
            ButtonId::A => &self.button_a,
            ButtonId::B => &self.button_b,
        }
    }

    /// Offer a raw press edge seen at `now`.
    ///
    /// The edge is accepted if it is the first on this button or more than
    /// [`DEBOUNCE_WINDOW`] after the last accepted one; acceptance marks the button pending
    /// and returns `true`. Other edges are bounce and are dropped.
    ///
    /// Safe to call from interrupt or task context concurrently with
    /// [`take_pending`](Self::take_pending).
    pub fn register_edge(&self, button: ButtonId, now: Instant) -> bool {
        self.state(button).register_edge(now)
    }

    /// Read and clear the button's pending flag in one atomic step.
    pub fn take_pending(&self, button: ButtonId) -> bool {
        self.state(button).take_pending()
    }

    /// Whether a press is waiting, without consuming it.
    #[must_use]
    pub fn is_pending(&self, button: ButtonId) -> bool {
        self.state(button).is_pending()
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new()
    }
}
