//! Single-item carousel navigation with swipe gesture interpretation.
//!
//! One `Carousel` instance backs every "browse one record at a time" surface
//! in the console: order/customer/job browsers, the KPI and chart carousels
//! on the analytics page, and the settings tab strip. The carousel owns only
//! its cursor and transient gesture state; the item sequence itself stays
//! with the caller, which reports length changes via [`Carousel::set_len`].

// ============================================================================
// Configuration
// ============================================================================

/// What happens when navigation runs past either end of the sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavPolicy {
    /// Stop at the first/last index. Used by record browsers, where wrapping
    /// from the last of 500 orders back to the first would be disorienting.
    Clamp,
    /// Cycle to the opposite end. Used by fixed small carousels (KPI cards,
    /// chart panels, settings tabs).
    Wrap,
}

/// When a pointer interaction starts counting as a drag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StartMode {
    /// The gesture is a drag from the moment the pointer goes down. For
    /// surfaces with no competing vertical scroll affordance.
    #[default]
    Optimistic,
    /// The gesture only becomes a drag once horizontal movement dominates
    /// vertical movement. For carousels embedded in a scrollable page, so
    /// vertical pans keep scrolling normally.
    Confirmed,
}

/// Gesture interpretation parameters for one carousel instance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    /// Minimum horizontal displacement (px) for a release to count as a
    /// swipe rather than a tap.
    pub threshold: f64,
    pub start: StartMode,
}

impl GestureConfig {
    pub fn optimistic(threshold: f64) -> Self {
        Self {
            threshold,
            start: StartMode::Optimistic,
        }
    }

    pub fn confirmed(threshold: f64) -> Self {
        Self {
            threshold,
            start: StartMode::Confirmed,
        }
    }
}

/// Navigation produced by a completed swipe gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Swipe {
    /// Leftward swipe: advance to the next item.
    Next,
    /// Rightward swipe: go back to the previous item.
    Previous,
}

// ============================================================================
// Gesture state machine
// ============================================================================

/// Transient per-gesture state. Lives only between pointer-down and
/// pointer-up; a stale end with no matching start finds `Idle` and does
/// nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
enum GesturePhase {
    #[default]
    Idle,
    /// Confirmed mode only: pointer is down, but horizontal dominance has
    /// not been established yet. Vertical movement stays with the page.
    Armed { start_x: f64, start_y: f64 },
    Dragging { start_x: f64 },
}

// ============================================================================
// Carousel
// ============================================================================

/// Cursor over an externally owned item sequence, navigable by explicit
/// `next`/`previous` calls or by interpreted swipe gestures.
///
/// Every operation is total: an empty sequence makes navigation a no-op,
/// clamping saturates, and wraparound guards its modulo. Nothing here
/// panics or performs I/O.
#[derive(Clone, Copy, Debug)]
pub struct Carousel {
    index: usize,
    len: usize,
    policy: NavPolicy,
    gesture: GestureConfig,
    phase: GesturePhase,
}

impl Carousel {
    /// Creates a carousel over an initially empty sequence.
    pub fn new(policy: NavPolicy, gesture: GestureConfig) -> Self {
        Self {
            index: 0,
            len: 0,
            policy,
            gesture,
            phase: GesturePhase::Idle,
        }
    }

    /// Creates a carousel over a sequence of known length (fixed carousels
    /// like the settings tab strip).
    pub fn with_len(policy: NavPolicy, gesture: GestureConfig, len: usize) -> Self {
        let mut carousel = Self::new(policy, gesture);
        carousel.len = len;
        carousel
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether an active drag is in progress (used for css state).
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, GesturePhase::Dragging { .. })
    }

    /// Resets the cursor to the first item. Callers must invoke this (after
    /// [`Carousel::set_len`]) whenever they replace their filtered item
    /// sequence with a new one.
    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Updates the sequence length, pulling the cursor back in range if the
    /// sequence shrank underneath it.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        if len == 0 {
            self.index = 0;
        } else if self.index >= len {
            self.index = len - 1;
        }
    }

    /// Jumps straight to an index (tab headers). Out-of-range targets are
    /// ignored.
    pub fn jump_to(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }

    /// Advances the cursor by one item under the configured policy.
    pub fn next(&mut self) {
        if self.len == 0 {
            return;
        }
        self.index = match self.policy {
            NavPolicy::Clamp => (self.index + 1).min(self.len - 1),
            NavPolicy::Wrap => (self.index + 1) % self.len,
        };
    }

    /// Moves the cursor back by one item under the configured policy.
    pub fn previous(&mut self) {
        if self.len == 0 {
            return;
        }
        self.index = match self.policy {
            NavPolicy::Clamp => self.index.saturating_sub(1),
            NavPolicy::Wrap => {
                if self.index == 0 {
                    self.len - 1
                } else {
                    self.index - 1
                }
            }
        };
    }

    // ------------------------------------------------------------------
    // Gesture handling
    // ------------------------------------------------------------------

    /// Begins a pointer interaction at the given coordinates.
    pub fn gesture_start(&mut self, x: f64, y: f64) {
        self.phase = match self.gesture.start {
            StartMode::Optimistic => GesturePhase::Dragging { start_x: x },
            StartMode::Confirmed => GesturePhase::Armed {
                start_x: x,
                start_y: y,
            },
        };
    }

    /// Tracks pointer movement. Returns `true` when the caller should
    /// suppress native scrolling for the rest of this pointer session, which
    /// happens once a confirmed-mode gesture establishes horizontal
    /// dominance (`|dx| > |dy|`).
    pub fn gesture_move(&mut self, x: f64, y: f64) -> bool {
        match self.phase {
            GesturePhase::Armed { start_x, start_y } => {
                let dx = x - start_x;
                let dy = y - start_y;
                if dx.abs() > dy.abs() {
                    self.phase = GesturePhase::Dragging { start_x };
                    true
                } else {
                    false
                }
            }
            // Once dragging, the whole session stays claimed.
            GesturePhase::Dragging { .. } => self.gesture.start == StartMode::Confirmed,
            GesturePhase::Idle => false,
        }
    }

    /// Ends a pointer interaction at the given coordinates, navigating if
    /// the horizontal displacement crossed the threshold. The gesture state
    /// always returns to idle, whatever the outcome. An end with no matching
    /// start (or one already consumed) is a no-op.
    pub fn gesture_end(&mut self, x: f64) -> Option<Swipe> {
        let phase = std::mem::take(&mut self.phase);
        let GesturePhase::Dragging { start_x } = phase else {
            return None;
        };

        let dx = x - start_x;
        if dx <= -self.gesture.threshold {
            self.next();
            Some(Swipe::Next)
        } else if dx >= self.gesture.threshold {
            self.previous();
            Some(Swipe::Previous)
        } else {
            None
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn clamped(len: usize) -> Carousel {
        Carousel::with_len(NavPolicy::Clamp, GestureConfig::confirmed(50.0), len)
    }

    fn wrapping(len: usize) -> Carousel {
        Carousel::with_len(NavPolicy::Wrap, GestureConfig::optimistic(40.0), len)
    }

    #[test]
    fn test_new_is_empty() {
        let carousel = Carousel::new(NavPolicy::Clamp, GestureConfig::confirmed(50.0));
        assert!(carousel.is_empty());
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_clamp_next_then_previous_round_trips() {
        let mut carousel = clamped(5);
        carousel.next();
        carousel.previous();
        assert_eq!(carousel.index(), 0);

        carousel.next();
        carousel.next();
        carousel.previous();
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn test_clamp_next_at_last_index_is_idempotent() {
        let mut carousel = clamped(2);
        carousel.next();
        assert_eq!(carousel.index(), 1);
        carousel.next();
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn test_clamp_previous_at_zero_is_noop() {
        let mut carousel = clamped(3);
        carousel.previous();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_wrap_full_cycle_returns_to_start() {
        let mut carousel = wrapping(4);
        carousel.next();
        assert_eq!(carousel.index(), 1);
        for _ in 0..4 {
            carousel.next();
        }
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn test_wrap_previous_from_zero() {
        let mut carousel = wrapping(3);
        carousel.previous();
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn test_empty_navigation_never_moves() {
        let mut carousel = wrapping(0);
        carousel.next();
        carousel.previous();
        assert_eq!(carousel.index(), 0);

        let mut carousel = clamped(0);
        carousel.next();
        carousel.previous();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_empty_gestures_never_move() {
        let mut carousel = wrapping(0);
        carousel.gesture_start(100.0, 10.0);
        carousel.gesture_move(20.0, 10.0);
        carousel.gesture_end(20.0);
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_set_len_clamps_out_of_range_cursor() {
        let mut carousel = clamped(10);
        for _ in 0..7 {
            carousel.next();
        }
        assert_eq!(carousel.index(), 7);
        carousel.set_len(3);
        assert_eq!(carousel.index(), 2);
        carousel.set_len(0);
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_reset_returns_cursor_to_zero() {
        let mut carousel = wrapping(5);
        carousel.next();
        carousel.next();
        carousel.reset();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_jump_to_ignores_out_of_range() {
        let mut carousel = wrapping(3);
        carousel.jump_to(2);
        assert_eq!(carousel.index(), 2);
        carousel.jump_to(3);
        assert_eq!(carousel.index(), 2);

        let mut empty = wrapping(0);
        empty.jump_to(0);
        assert_eq!(empty.index(), 0);
    }

    #[test]
    fn test_swipe_left_advances() {
        // items = [A, B, C], wraparound, threshold 40: 100 -> 50 is dx = -50.
        let mut carousel = wrapping(3);
        carousel.gesture_start(100.0, 0.0);
        assert_eq!(carousel.gesture_end(50.0), Some(Swipe::Next));
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn test_below_threshold_is_a_tap() {
        let mut carousel = wrapping(3);
        carousel.next();
        carousel.gesture_start(50.0, 0.0);
        assert_eq!(carousel.gesture_end(55.0), None);
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn test_swipe_right_goes_back() {
        let mut carousel = wrapping(3);
        carousel.next();
        carousel.gesture_start(50.0, 0.0);
        assert_eq!(carousel.gesture_end(120.0), Some(Swipe::Previous));
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_exact_threshold_counts_as_swipe() {
        let mut carousel = wrapping(3);
        carousel.gesture_start(100.0, 0.0);
        assert_eq!(carousel.gesture_end(60.0), Some(Swipe::Next));
    }

    #[test]
    fn test_stale_gesture_end_is_noop() {
        let mut carousel = wrapping(3);
        assert_eq!(carousel.gesture_end(0.0), None);
        assert_eq!(carousel.index(), 0);

        // An end consumes the gesture; a second end finds nothing.
        carousel.gesture_start(100.0, 0.0);
        carousel.gesture_end(10.0);
        assert_eq!(carousel.index(), 1);
        assert_eq!(carousel.gesture_end(300.0), None);
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn test_confirmed_requires_horizontal_dominance() {
        let mut carousel = clamped(3);
        carousel.gesture_start(100.0, 100.0);
        assert!(!carousel.is_dragging());

        // Mostly vertical movement: stays with the page scroll.
        assert!(!carousel.gesture_move(105.0, 160.0));
        assert!(!carousel.is_dragging());

        // A vertical pan that never confirms navigates nowhere on release.
        assert_eq!(carousel.gesture_end(105.0), None);
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_confirmed_claims_session_once_horizontal() {
        let mut carousel = clamped(3);
        carousel.gesture_start(100.0, 100.0);
        assert!(carousel.gesture_move(130.0, 110.0));
        assert!(carousel.is_dragging());
        // Subsequent moves keep the session claimed.
        assert!(carousel.gesture_move(20.0, 140.0));

        assert_eq!(carousel.gesture_end(30.0), Some(Swipe::Next));
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn test_optimistic_ignores_moves() {
        let mut carousel = wrapping(3);
        carousel.gesture_start(100.0, 0.0);
        assert!(carousel.is_dragging());
        assert!(!carousel.gesture_move(10.0, 0.0));

        // Only the end delta matters: ends back near the origin.
        assert_eq!(carousel.gesture_end(95.0), None);
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_gesture_end_resets_phase_without_navigation() {
        let mut carousel = wrapping(3);
        carousel.gesture_start(100.0, 0.0);
        carousel.gesture_end(101.0);
        assert!(!carousel.is_dragging());
    }

    #[test]
    fn test_clamp_swipe_at_boundary_stays_put() {
        let mut carousel = clamped(2);
        carousel.next();
        assert_eq!(carousel.index(), 1);

        carousel.gesture_start(200.0, 0.0);
        carousel.gesture_move(140.0, 10.0);
        assert_eq!(carousel.gesture_end(140.0), Some(Swipe::Next));
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn test_wrap_single_item_swipes_in_place() {
        let mut carousel = wrapping(1);
        carousel.gesture_start(100.0, 0.0);
        carousel.gesture_end(10.0);
        assert_eq!(carousel.index(), 0);
    }
}
