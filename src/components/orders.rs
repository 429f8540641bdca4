//! Orders page: browse sales orders one at a time.

use leptos::prelude::*;

use crate::components::browser::FetchBrowser;
use crate::components::record_card::{Field, RecordCard};
use crate::config::api;
use crate::models::Order;
use crate::utils::fetch_json;
use crate::utils::format::{format_cents, format_date};

stylance::import_crate_style!(css, "src/components/page.module.css");

#[component]
pub fn OrdersPage() -> impl IntoView {
    let orders = LocalResource::new(|| async { fetch_json::<Vec<Order>>(&api::orders()).await });

    view! {
        <section class=css::page>
            <h2 class=css::pageTitle>"Orders"</h2>
            <FetchBrowser
                resource=orders
                placeholder="Filter by reference, customer, or status"
                empty_message="No orders match the current filter"
                render=order_card
            />
        </section>
    }
}

fn order_card(order: Order) -> impl IntoView {
    view! {
        <RecordCard
            title=order.reference
            subtitle=Some(order.customer_name)
            badge=Some((order.status.label(), order.status.tone()))
        >
            <Field label="Total" value=format_cents(order.total_cents) />
            <Field label="Placed" value=order.placed_at />
            <Field label="Due" value=format_date(order.due_date.as_deref()) />
            <Field label="Lines" value=order.line_count.to_string() />
        </RecordCard>
    }
}
