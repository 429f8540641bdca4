//! Shared record-browser frame.
//!
//! Every record page (orders, customers, jobs, runs, shipments, warehouses)
//! is the same interaction: filter a fetched list, then browse it one card
//! at a time with buttons or swipes. This component owns that frame once —
//! toolbar with filter box and position indicator, the gesture surface, and
//! prev/next controls — and delegates only the card body to the caller.
//!
//! Record browsers clamp at both ends (wrapping through a long customer
//! list would be disorienting) and use the confirmed gesture start mode so
//! vertical pans keep scrolling the page.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::carousel::use_carousel;
use crate::components::icons as ic;
use crate::config::gesture::SWIPE_THRESHOLD_CONFIRMED;
use crate::core::{FetchError, GestureConfig, NavPolicy, TextFilter, filter_by_text};
use crate::utils::format::format_position;

stylance::import_crate_style!(css, "src/components/browser.module.css");

/// Fetch-then-browse scaffold used by every record page: loading and error
/// branches for the API call, then a [`RecordBrowser`] over the result.
#[component]
pub fn FetchBrowser<T, IV>(
    /// Resource holding the page's API call.
    resource: LocalResource<Result<Vec<T>, FetchError>>,
    /// Placeholder text for the filter box.
    placeholder: &'static str,
    /// Message shown when the filter matches nothing.
    empty_message: &'static str,
    /// Renders the card body for one record.
    render: fn(T) -> IV,
) -> impl IntoView
where
    T: TextFilter + Clone + Send + Sync + 'static,
    IV: IntoView + 'static,
{
    view! {
        <Suspense fallback=move || view! { <div class=css::loading>"Loading..."</div> }>
            {move || resource.get().map(|result| match result {
                Ok(items) => view! {
                    <RecordBrowser
                        items=items
                        placeholder=placeholder
                        empty_message=empty_message
                        render=render
                    />
                }
                .into_any(),
                Err(err) => view! {
                    <div class=css::error>
                        <p>"Failed to load data"</p>
                        <p class=css::errorDetail>{err.to_string()}</p>
                    </div>
                }
                .into_any(),
            })}
        </Suspense>
    }
}

/// One-record-at-a-time browser over a filtered list.
///
/// `render` receives the currently shown record and produces the card body;
/// everything else (filtering, cursor, gestures, reset-on-filter-change) is
/// handled here.
#[component]
pub fn RecordBrowser<T, IV>(
    /// Records fetched by the page, in API order.
    items: Vec<T>,
    /// Placeholder text for the filter box.
    placeholder: &'static str,
    /// Message shown when the filter matches nothing.
    empty_message: &'static str,
    /// Renders the card body for one record.
    render: fn(T) -> IV,
) -> impl IntoView
where
    T: TextFilter + Clone + Send + Sync + 'static,
    IV: IntoView + 'static,
{
    let filter = RwSignal::new(String::new());
    let items = StoredValue::new(items);

    let filtered = Signal::derive(move || {
        let query = filter.get();
        items.with_value(|all| filter_by_text(all, &query))
    });

    let carousel = use_carousel(
        NavPolicy::Clamp,
        GestureConfig::confirmed(SWIPE_THRESHOLD_CONFIRMED),
    );
    let index = carousel.index();
    let len = Signal::derive(move || filtered.with(|f| f.len()));

    // Keep the navigator sized to the filtered sequence.
    Effect::new(move |_| {
        carousel.sync_len(len.get());
    });

    // The filtered sequence changes identity with every filter edit; the
    // cursor goes back to the first match.
    Effect::new(move |prev: Option<String>| {
        let query = filter.get();
        if let Some(prev) = prev
            && prev != query
        {
            carousel.reset();
        }
        query
    });

    let surface_class = move || {
        if carousel.dragging().get() {
            format!("{} {}", css::surface, css::surfaceDragging)
        } else {
            css::surface.to_string()
        }
    };

    view! {
        <div class=css::browser>
            <div class=css::toolbar>
                <span class=css::searchIcon aria-hidden="true"><Icon icon=ic::SEARCH /></span>
                <input
                    class=css::filterInput
                    type="text"
                    placeholder=placeholder
                    prop:value=move || filter.get()
                    on:input=move |ev| filter.set(event_target_value(&ev))
                    aria-label="Filter records"
                />
                <span class=css::position>
                    {move || format_position(index.get(), len.get())}
                </span>
            </div>

            <div
                class=surface_class
                on:touchstart=carousel.on_touch_start()
                on:touchmove=carousel.on_touch_move()
                on:touchend=carousel.on_touch_end()
                on:mousedown=carousel.on_mouse_down()
                on:mousemove=carousel.on_mouse_move()
                on:mouseup=carousel.on_mouse_up()
                on:mouseleave=carousel.on_mouse_leave()
            >
                {move || {
                    let idx = index.get();
                    match filtered.with(|f| f.get(idx).cloned()) {
                        Some(record) => render(record).into_any(),
                        None => view! {
                            <div class=css::empty>{empty_message}</div>
                        }.into_any(),
                    }
                }}
            </div>

            <div class=css::navRow>
                <button
                    class=css::navButton
                    on:click=move |_| carousel.previous()
                    disabled=move || index.get() == 0
                    aria-label="Previous record"
                >
                    <Icon icon=ic::CHEVRON_LEFT />
                </button>
                <button
                    class=css::navButton
                    on:click=move |_| carousel.next()
                    disabled=move || next_disabled(index.get(), len.get())
                    aria-label="Next record"
                >
                    <Icon icon=ic::CHEVRON_RIGHT />
                </button>
            </div>
        </div>
    }
}

/// The clamped browser greys out "next" at the last record, and both
/// buttons when the filter matches nothing.
fn next_disabled(index: usize, len: usize) -> bool {
    len == 0 || index + 1 >= len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_greys_out_at_last_record() {
        assert!(!next_disabled(0, 3));
        assert!(!next_disabled(1, 3));
        assert!(next_disabled(2, 3));
    }

    #[test]
    fn next_greys_out_on_empty_match() {
        assert!(next_disabled(0, 0));
    }
}
