//! Settings page: a tab strip browsed like any other fixed carousel.

use leptos::prelude::*;

use crate::components::carousel::use_carousel_with_len;
use crate::config::gesture::SWIPE_THRESHOLD_OPTIMISTIC;
use crate::core::{GestureConfig, NavPolicy};

stylance::import_crate_style!(css, "src/components/settings.module.css");
stylance::import_crate_style!(page_css, "src/components/page.module.css");

const TABS: &[&str] = &["Company", "Units", "Notifications"];

#[component]
pub fn SettingsPage() -> impl IntoView {
    let carousel = use_carousel_with_len(
        NavPolicy::Wrap,
        GestureConfig::optimistic(SWIPE_THRESHOLD_OPTIMISTIC),
        TABS.len(),
    );
    let index = carousel.index();

    view! {
        <section class=page_css::page>
            <h2 class=page_css::pageTitle>"Settings"</h2>

            <div class=css::tabStrip role="tablist">
                {TABS
                    .iter()
                    .enumerate()
                    .map(|(i, label)| {
                        let tab_class = move || {
                            if index.get() == i {
                                format!("{} {}", css::tab, css::tabActive)
                            } else {
                                css::tab.to_string()
                            }
                        };
                        view! {
                            <button
                                class=tab_class
                                role="tab"
                                aria-selected=move || index.get() == i
                                on:click=move |_| carousel.jump_to(i)
                            >
                                {*label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div
                class=css::tabPanel
                role="tabpanel"
                on:touchstart=carousel.on_touch_start()
                on:touchmove=carousel.on_touch_move()
                on:touchend=carousel.on_touch_end()
                on:mousedown=carousel.on_mouse_down()
                on:mousemove=carousel.on_mouse_move()
                on:mouseup=carousel.on_mouse_up()
                on:mouseleave=carousel.on_mouse_leave()
            >
                {move || match index.get() {
                    0 => view! { <CompanyTab /> }.into_any(),
                    1 => view! { <UnitsTab /> }.into_any(),
                    _ => view! { <NotificationsTab /> }.into_any(),
                }}
            </div>
        </section>
    }
}

#[component]
fn CompanyTab() -> impl IntoView {
    view! {
        <div class=css::form>
            <label class=css::formRow>
                <span class=css::formLabel>"Company name"</span>
                <input class=css::formInput type="text" placeholder="Cascade Metalworks LLC" />
            </label>
            <label class=css::formRow>
                <span class=css::formLabel>"Tax ID"</span>
                <input class=css::formInput type="text" placeholder="91-0000000" />
            </label>
            <label class=css::formRow>
                <span class=css::formLabel>"Address"</span>
                <input class=css::formInput type="text" placeholder="4410 Industry Way, Tacoma, WA" />
            </label>
        </div>
    }
}

#[component]
fn UnitsTab() -> impl IntoView {
    view! {
        <div class=css::form>
            <label class=css::formRow>
                <span class=css::formLabel>"Measurement system"</span>
                <select class=css::formInput>
                    <option>"Metric"</option>
                    <option>"Imperial"</option>
                </select>
            </label>
            <label class=css::formRow>
                <span class=css::formLabel>"Currency"</span>
                <select class=css::formInput>
                    <option>"USD"</option>
                    <option>"EUR"</option>
                    <option>"CAD"</option>
                </select>
            </label>
        </div>
    }
}

#[component]
fn NotificationsTab() -> impl IntoView {
    view! {
        <div class=css::form>
            <label class=css::checkRow>
                <input type="checkbox" checked=true />
                <span>"Email me when a shipment is delivered"</span>
            </label>
            <label class=css::checkRow>
                <input type="checkbox" checked=true />
                <span>"Email me when a production job fails quality check"</span>
            </label>
            <label class=css::checkRow>
                <input type="checkbox" />
                <span>"Weekly analytics digest"</span>
            </label>
        </div>
    }
}
