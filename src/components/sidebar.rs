//! Sidebar navigation between console pages.

use icondata::Icon as IconData;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{APP_NAME, APP_VERSION};
use crate::models::ActivePage;

stylance::import_crate_style!(css, "src/components/sidebar.module.css");

fn page_icon(page: ActivePage) -> IconData {
    match page {
        ActivePage::Analytics => ic::ANALYTICS,
        ActivePage::Orders => ic::ORDERS,
        ActivePage::Customers => ic::CUSTOMERS,
        ActivePage::Production => ic::PRODUCTION,
        ActivePage::Packaging => ic::PACKAGING,
        ActivePage::Shipments => ic::SHIPMENTS,
        ActivePage::Warehouses => ic::WAREHOUSES,
        ActivePage::Settings => ic::SETTINGS,
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let active = ctx.active_page;

    view! {
        <nav class=css::sidebar aria-label="Console navigation">
            <div class=css::header>
                <span class=css::appName>{APP_NAME}</span>
                <span class=css::appVersion>{format!("v{}", APP_VERSION)}</span>
            </div>
            <ul class=css::pageList>
                {ActivePage::all()
                    .iter()
                    .copied()
                    .map(|page| {
                        let item_class = move || {
                            if active.get() == page {
                                format!("{} {}", css::pageItem, css::pageItemActive)
                            } else {
                                css::pageItem.to_string()
                            }
                        };
                        view! {
                            <li>
                                <button
                                    class=item_class
                                    on:click=move |_| active.set(page)
                                    aria-current=move || (active.get() == page).then_some("page")
                                >
                                    <Icon icon=page_icon(page) />
                                    <span>{page.label()}</span>
                                </button>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
