//! Analytics page: KPI card and chart panel carousels.
//!
//! Both carousels wrap around and start dragging optimistically, since the
//! dashboard has no competing vertical scroll. They are fully independent
//! instances; swiping one never moves the other.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::carousel::{UseCarousel, use_carousel_with_len};
use crate::components::icons as ic;
use crate::config::api;
use crate::config::gesture::SWIPE_THRESHOLD_OPTIMISTIC;
use crate::core::{FetchError, GestureConfig, NavPolicy};
use crate::models::{ChartSeries, KpiCard};
use crate::utils::fetch_json;
use crate::utils::format::format_delta_pct;

stylance::import_crate_style!(css, "src/components/analytics.module.css");
stylance::import_crate_style!(page_css, "src/components/page.module.css");

fn wrap_carousel(len: usize) -> UseCarousel {
    use_carousel_with_len(
        NavPolicy::Wrap,
        GestureConfig::optimistic(SWIPE_THRESHOLD_OPTIMISTIC),
        len,
    )
}

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    let kpis = LocalResource::new(|| async {
        fetch_json::<Vec<KpiCard>>(&api::analytics_kpis()).await
    });
    let charts = LocalResource::new(|| async {
        fetch_json::<Vec<ChartSeries>>(&api::analytics_charts()).await
    });

    view! {
        <section class=page_css::page>
            <h2 class=page_css::pageTitle>"Analytics"</h2>

            <Suspense fallback=move || view! { <div class=css::loading>"Loading KPIs..."</div> }>
                {move || kpis.get().map(|result| match result {
                    Ok(cards) => view! { <KpiCarousel cards=cards /> }.into_any(),
                    Err(err) => view! { <LoadError what="KPIs" err=err /> }.into_any(),
                })}
            </Suspense>

            <Suspense fallback=move || view! { <div class=css::loading>"Loading charts..."</div> }>
                {move || charts.get().map(|result| match result {
                    Ok(series) => view! { <ChartCarousel series=series /> }.into_any(),
                    Err(err) => view! { <LoadError what="charts" err=err /> }.into_any(),
                })}
            </Suspense>
        </section>
    }
}

#[component]
fn LoadError(what: &'static str, err: FetchError) -> impl IntoView {
    view! {
        <div class=css::error>
            <p>{format!("Failed to load {}", what)}</p>
            <p class=css::errorDetail>{err.to_string()}</p>
        </div>
    }
}

/// Dot indicators under a fixed carousel.
#[component]
fn Dots(len: usize, index: Signal<usize>) -> impl IntoView {
    view! {
        <div class=css::dots aria-hidden="true">
            {(0..len)
                .map(|i| {
                    let dot_class = move || {
                        if index.get() == i {
                            format!("{} {}", css::dot, css::dotActive)
                        } else {
                            css::dot.to_string()
                        }
                    };
                    view! { <span class=dot_class></span> }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn KpiCarousel(cards: Vec<KpiCard>) -> impl IntoView {
    let carousel = wrap_carousel(cards.len());
    let index = carousel.index();
    let len = cards.len();
    let cards = StoredValue::new(cards);

    view! {
        <div class=css::carousel>
            <button
                class=css::arrowButton
                on:click=move |_| carousel.previous()
                aria-label="Previous KPI"
            >
                <Icon icon=ic::CHEVRON_LEFT />
            </button>
            <div
                class=css::kpiSurface
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
                    cards.with_value(|c| c.get(idx).cloned()).map(|kpi| {
                        let trend_class = if kpi.trending_up() {
                            css::trendUp
                        } else {
                            css::trendDown
                        };
                        let trend_icon = if kpi.trending_up() {
                            ic::TREND_UP
                        } else {
                            ic::TREND_DOWN
                        };
                        view! {
                            <div class=css::kpiCard>
                                <span class=css::kpiTitle>{kpi.title}</span>
                                <span class=css::kpiValue>{kpi.value}</span>
                                <span class=trend_class>
                                    <Icon icon=trend_icon />
                                    {format_delta_pct(kpi.delta_pct)}
                                    <span class=css::kpiPeriod>{kpi.period}</span>
                                </span>
                            </div>
                        }
                    })
                }}
            </div>
            <button
                class=css::arrowButton
                on:click=move |_| carousel.next()
                aria-label="Next KPI"
            >
                <Icon icon=ic::CHEVRON_RIGHT />
            </button>
        </div>
        <Dots len=len index=index />
    }
}

#[component]
fn ChartCarousel(series: Vec<ChartSeries>) -> impl IntoView {
    let carousel = wrap_carousel(series.len());
    let index = carousel.index();
    let len = series.len();
    let series = StoredValue::new(series);

    view! {
        <div class=css::carousel>
            <button
                class=css::arrowButton
                on:click=move |_| carousel.previous()
                aria-label="Previous chart"
            >
                <Icon icon=ic::CHEVRON_LEFT />
            </button>
            <div
                class=css::chartSurface
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
                    series.with_value(|s| s.get(idx).cloned()).map(|chart| {
                        let max = chart.max_value();
                        view! {
                            <div class=css::chartPanel>
                                <div class=css::chartHeader>
                                    <span class=css::chartTitle>{chart.title}</span>
                                    <span class=css::chartUnit>{chart.unit}</span>
                                </div>
                                <div class=css::chartBars>
                                    {chart.points.into_iter().map(|point| view! {
                                        <div class=css::barColumn>
                                            <div
                                                class=css::bar
                                                style=format!(
                                                    "height: {:.0}%;",
                                                    point.value / max * 100.0
                                                )
                                            ></div>
                                            <span class=css::barLabel>{point.label}</span>
                                        </div>
                                    }).collect_view()}
                                </div>
                            </div>
                        }
                    })
                }}
            </div>
            <button
                class=css::arrowButton
                on:click=move |_| carousel.next()
                aria-label="Next chart"
            >
                <Icon icon=ic::CHEVRON_RIGHT />
            </button>
        </div>
        <Dots len=len index=index />
    }
}
