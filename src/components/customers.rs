//! Customers page: browse customer accounts one at a time.

use leptos::prelude::*;

use crate::components::browser::FetchBrowser;
use crate::components::record_card::{Field, RecordCard};
use crate::config::api;
use crate::models::{BadgeTone, Customer};
use crate::utils::fetch_json;
use crate::utils::format::format_cents;

stylance::import_crate_style!(css, "src/components/page.module.css");

#[component]
pub fn CustomersPage() -> impl IntoView {
    let customers =
        LocalResource::new(|| async { fetch_json::<Vec<Customer>>(&api::customers()).await });

    view! {
        <section class=css::page>
            <h2 class=css::pageTitle>"Customers"</h2>
            <FetchBrowser
                resource=customers
                placeholder="Filter by name, contact, or city"
                empty_message="No customers match the current filter"
                render=customer_card
            />
        </section>
    }
}

fn customer_card(customer: Customer) -> impl IntoView {
    let badge = if !customer.active {
        Some(("Inactive", BadgeTone::Neutral))
    } else if customer.has_outstanding() {
        Some(("Balance due", BadgeTone::Warning))
    } else {
        Some(("Active", BadgeTone::Success))
    };

    view! {
        <RecordCard
            title=customer.name
            subtitle=Some(format!("{}, {}", customer.city, customer.country))
            badge=badge
        >
            <Field label="Contact" value=customer.contact_name />
            <Field label="Email" value=customer.email />
            <Field label="Phone" value=customer.phone.unwrap_or_else(|| "—".into()) />
            <Field label="Outstanding" value=format_cents(customer.outstanding_cents) />
        </RecordCard>
    }
}
