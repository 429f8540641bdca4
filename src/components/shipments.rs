//! Shipments page: browse outbound shipments one at a time.

use leptos::prelude::*;

use crate::components::browser::FetchBrowser;
use crate::components::record_card::{Field, RecordCard};
use crate::config::api;
use crate::models::Shipment;
use crate::utils::fetch_json;
use crate::utils::format::format_date;

stylance::import_crate_style!(css, "src/components/page.module.css");

#[component]
pub fn ShipmentsPage() -> impl IntoView {
    let shipments =
        LocalResource::new(|| async { fetch_json::<Vec<Shipment>>(&api::shipments()).await });

    view! {
        <section class=css::page>
            <h2 class=css::pageTitle>"Shipments"</h2>
            <FetchBrowser
                resource=shipments
                placeholder="Filter by tracking number, carrier, or destination"
                empty_message="No shipments match the current filter"
                render=shipment_card
            />
        </section>
    }
}

fn shipment_card(shipment: Shipment) -> impl IntoView {
    view! {
        <RecordCard
            title=shipment.tracking_number
            subtitle=Some(format!(
                "{} to {}, {}",
                shipment.carrier, shipment.destination_city, shipment.destination_country
            ))
            badge=Some((shipment.status.label(), shipment.status.tone()))
        >
            <Field label="Order" value=shipment.order_reference />
            <Field label="Shipped" value=format_date(shipment.shipped_at.as_deref()) />
            <Field label="ETA" value=format_date(shipment.eta.as_deref()) />
        </RecordCard>
    }
}
