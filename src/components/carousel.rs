//! Carousel hook binding the core navigator to DOM pointer events.
//!
//! Wraps one [`Carousel`] in a signal and exposes ready-made touch and mouse
//! handlers for the carousel's interactive surface. Every call to
//! [`use_carousel`] creates a fully independent instance, so a page can host
//! several carousels (the analytics screen runs two) without shared state.

use leptos::prelude::*;

use crate::core::{Carousel, GestureConfig, NavPolicy};

/// Reactive handle for one carousel instance.
///
/// `Copy` because the only field is a Leptos signal; pass it freely into
/// closures and child components.
#[derive(Clone, Copy)]
pub struct UseCarousel {
    state: RwSignal<Carousel>,
}

/// Creates a carousel over an initially empty sequence. The owning page
/// reports its (filtered) item count through [`UseCarousel::sync_len`].
pub fn use_carousel(policy: NavPolicy, gesture: GestureConfig) -> UseCarousel {
    UseCarousel {
        state: RwSignal::new(Carousel::new(policy, gesture)),
    }
}

/// Creates a carousel over a fixed-length sequence (tab strips and other
/// carousels whose item count never changes).
pub fn use_carousel_with_len(policy: NavPolicy, gesture: GestureConfig, len: usize) -> UseCarousel {
    UseCarousel {
        state: RwSignal::new(Carousel::with_len(policy, gesture, len)),
    }
}

impl UseCarousel {
    /// Index of the currently shown item.
    pub fn index(&self) -> Signal<usize> {
        let state = self.state;
        Signal::derive(move || state.with(|c| c.index()))
    }

    /// Whether a drag is in progress (for css state on the surface).
    pub fn dragging(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|c| c.is_dragging()))
    }

    pub fn next(&self) {
        self.state.update(|c| c.next());
    }

    pub fn previous(&self) {
        self.state.update(|c| c.previous());
    }

    /// Resets the cursor to the first item. Pages call this whenever their
    /// filtered item sequence changes identity.
    pub fn reset(&self) {
        self.state.update(|c| c.reset());
    }

    /// Reports the current item count to the navigator.
    pub fn sync_len(&self, len: usize) {
        self.state.update(|c| c.set_len(len));
    }

    /// Jumps straight to an index (tab headers).
    pub fn jump_to(&self, index: usize) {
        self.state.update(|c| c.jump_to(index));
    }

    // ------------------------------------------------------------------
    // Event handlers
    // ------------------------------------------------------------------

    /// Handler for `on:touchstart`.
    pub fn on_touch_start(self) -> impl Fn(leptos::ev::TouchEvent) {
        let state = self.state;
        move |event| {
            if let Some(touch) = event.touches().get(0) {
                state.update(|c| c.gesture_start(touch.client_x() as f64, touch.client_y() as f64));
            }
        }
    }

    /// Handler for `on:touchmove`. Suppresses native scrolling once a
    /// confirmed-mode gesture claims the pointer session.
    pub fn on_touch_move(self) -> impl Fn(leptos::ev::TouchEvent) {
        let state = self.state;
        move |event| {
            let Some(touch) = event.touches().get(0) else {
                return;
            };
            let (x, y) = (touch.client_x() as f64, touch.client_y() as f64);
            let suppress_scroll = state.try_update(|c| c.gesture_move(x, y)).unwrap_or(false);
            if suppress_scroll {
                event.prevent_default();
            }
        }
    }

    /// Handler for `on:touchend`. The ended touch is only present in
    /// `changed_touches`.
    pub fn on_touch_end(self) -> impl Fn(leptos::ev::TouchEvent) {
        let state = self.state;
        move |event| {
            if let Some(touch) = event.changed_touches().get(0) {
                state.update(|c| {
                    c.gesture_end(touch.client_x() as f64);
                });
            }
        }
    }

    /// Handler for `on:mousedown` (desktop drag emulation).
    pub fn on_mouse_down(self) -> impl Fn(leptos::ev::MouseEvent) {
        let state = self.state;
        move |event| {
            event.prevent_default();
            state.update(|c| c.gesture_start(event.client_x() as f64, event.client_y() as f64));
        }
    }

    /// Handler for `on:mousemove`.
    pub fn on_mouse_move(self) -> impl Fn(leptos::ev::MouseEvent) {
        let state = self.state;
        move |event| {
            let (x, y) = (event.client_x() as f64, event.client_y() as f64);
            state.update(|c| {
                c.gesture_move(x, y);
            });
        }
    }

    /// Handler for `on:mouseup`.
    pub fn on_mouse_up(self) -> impl Fn(leptos::ev::MouseEvent) {
        let state = self.state;
        move |event| {
            state.update(|c| {
                c.gesture_end(event.client_x() as f64);
            });
        }
    }

    /// Handler for `on:mouseleave`. Leaving the surface ends the drag at the
    /// exit coordinates, same as releasing the button there.
    pub fn on_mouse_leave(self) -> impl Fn(leptos::ev::MouseEvent) {
        let state = self.state;
        move |event| {
            state.update(|c| {
                c.gesture_end(event.client_x() as f64);
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::gesture::SWIPE_THRESHOLD_CONFIRMED;

    // The hook is Copy and the handler factories take it by value, so the
    // closures they return own their state handle and can be moved into a
    // view long after the local binding is gone.
    #[test]
    fn handlers_outlive_their_local_binding() {
        let (touch_start, touch_move, mouse_up) = {
            let carousel = use_carousel(
                NavPolicy::Clamp,
                GestureConfig::confirmed(SWIPE_THRESHOLD_CONFIRMED),
            );
            (
                carousel.on_touch_start(),
                carousel.on_touch_move(),
                carousel.on_mouse_up(),
            )
        };
        let _ = (touch_start, touch_move, mouse_up);
    }

    #[test]
    fn hook_routes_navigation_through_the_shared_signal() {
        let carousel = use_carousel(
            NavPolicy::Clamp,
            GestureConfig::confirmed(SWIPE_THRESHOLD_CONFIRMED),
        );
        carousel.sync_len(3);
        carousel.next();
        assert_eq!(carousel.index().get_untracked(), 1);
        carousel.reset();
        assert_eq!(carousel.index().get_untracked(), 0);
    }
}
