//! Packaging page: browse packaging runs one at a time.

use leptos::prelude::*;

use crate::components::browser::FetchBrowser;
use crate::components::record_card::{Field, RecordCard};
use crate::config::api;
use crate::models::PackagingRun;
use crate::utils::fetch_json;
use crate::utils::format::format_date;

stylance::import_crate_style!(css, "src/components/page.module.css");

#[component]
pub fn PackagingPage() -> impl IntoView {
    let runs = LocalResource::new(|| async {
        fetch_json::<Vec<PackagingRun>>(&api::packaging_runs()).await
    });

    view! {
        <section class=css::page>
            <h2 class=css::pageTitle>"Packaging"</h2>
            <FetchBrowser
                resource=runs
                placeholder="Filter by code or order reference"
                empty_message="No packaging runs match the current filter"
                render=run_card
            />
        </section>
    }
}

fn run_card(run: PackagingRun) -> impl IntoView {
    view! {
        <RecordCard
            title=run.code
            subtitle=Some(format!("for {}", run.order_reference))
            badge=Some((run.status.label(), run.status.tone()))
        >
            <Field label="Packages" value=run.package_count.to_string() />
            <Field label="Pallets" value=run.pallet_count.to_string() />
            <Field label="Packed" value=format_date(run.packed_at.as_deref()) />
        </RecordCard>
    }
}
