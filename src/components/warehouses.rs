//! Warehouses page: browse storage sites one at a time.

use leptos::prelude::*;

use crate::components::browser::FetchBrowser;
use crate::components::record_card::{Field, RecordCard};
use crate::config::api;
use crate::models::{BadgeTone, Warehouse};
use crate::utils::fetch_json;

stylance::import_crate_style!(css, "src/components/warehouses.module.css");
stylance::import_crate_style!(page_css, "src/components/page.module.css");

#[component]
pub fn WarehousesPage() -> impl IntoView {
    let warehouses =
        LocalResource::new(|| async { fetch_json::<Vec<Warehouse>>(&api::warehouses()).await });

    view! {
        <section class=page_css::page>
            <h2 class=page_css::pageTitle>"Warehouses"</h2>
            <FetchBrowser
                resource=warehouses
                placeholder="Filter by name, city, or manager"
                empty_message="No warehouses match the current filter"
                render=warehouse_card
            />
        </section>
    }
}

fn warehouse_card(warehouse: Warehouse) -> impl IntoView {
    let pct = warehouse.utilization_pct();
    let badge = if warehouse.active {
        Some(("Active", BadgeTone::Success))
    } else {
        Some(("Offline", BadgeTone::Neutral))
    };

    view! {
        <RecordCard
            title=warehouse.name
            subtitle=Some(format!("{}, {}", warehouse.city, warehouse.country))
            badge=badge
        >
            <Field label="Manager" value=warehouse.manager />
            <Field
                label="Capacity"
                value=format!("{} / {} pallets", warehouse.used_units, warehouse.capacity_units)
            />
            <div class=css::meterWrapper>
                <span class=css::meterLabel>{format!("{}% occupied", pct)}</span>
                <div class=css::meter>
                    <div class=css::meterFill style=format!("width: {}%;", pct)></div>
                </div>
            </div>
        </RecordCard>
    }
}
