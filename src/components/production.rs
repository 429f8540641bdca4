//! Production page: browse shop-floor jobs one at a time.

use leptos::prelude::*;

use crate::components::browser::FetchBrowser;
use crate::components::record_card::{Field, RecordCard};
use crate::config::api;
use crate::models::ProductionJob;
use crate::utils::fetch_json;
use crate::utils::format::{format_date, format_quantity};

stylance::import_crate_style!(css, "src/components/page.module.css");

#[component]
pub fn ProductionPage() -> impl IntoView {
    let jobs = LocalResource::new(|| async {
        fetch_json::<Vec<ProductionJob>>(&api::production_jobs()).await
    });

    view! {
        <section class=css::page>
            <h2 class=css::pageTitle>"Production"</h2>
            <FetchBrowser
                resource=jobs
                placeholder="Filter by code, product, or work center"
                empty_message="No jobs match the current filter"
                render=job_card
            />
        </section>
    }
}

fn job_card(job: ProductionJob) -> impl IntoView {
    view! {
        <RecordCard
            title=job.code
            subtitle=Some(job.product_name)
            badge=Some((job.status.label(), job.status.tone()))
        >
            <Field label="Quantity" value=format_quantity(job.quantity, &job.unit) />
            <Field label="Work center" value=job.work_center />
            <Field label="Started" value=format_date(job.started_at.as_deref()) />
            <Field label="Due" value=format_date(job.due_date.as_deref()) />
        </RecordCard>
    }
}
