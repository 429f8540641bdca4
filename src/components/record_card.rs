//! Shared card building blocks for record pages.

use leptos::prelude::*;

use crate::models::BadgeTone;

stylance::import_crate_style!(css, "src/components/record_card.module.css");

/// Colored status pill shown in a card header.
#[component]
pub fn StatusBadge(label: &'static str, tone: BadgeTone) -> impl IntoView {
    let tone_class = match tone {
        BadgeTone::Neutral => css::badgeNeutral,
        BadgeTone::Info => css::badgeInfo,
        BadgeTone::Warning => css::badgeWarning,
        BadgeTone::Success => css::badgeSuccess,
        BadgeTone::Danger => css::badgeDanger,
    };
    view! {
        <span class=format!("{} {}", css::badge, tone_class)>{label}</span>
    }
}

/// Card frame for one record: header with title/subtitle/badge, then a grid
/// of fields supplied by the page.
#[component]
pub fn RecordCard(
    title: String,
    #[prop(optional_no_strip)] subtitle: Option<String>,
    #[prop(optional_no_strip)] badge: Option<(&'static str, BadgeTone)>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=css::card>
            <div class=css::cardHeader>
                <div>
                    <h3 class=css::cardTitle>{title}</h3>
                    {subtitle.map(|s| view! { <p class=css::cardSubtitle>{s}</p> })}
                </div>
                {badge.map(|(label, tone)| view! { <StatusBadge label=label tone=tone /> })}
            </div>
            <div class=css::fieldGrid>{children()}</div>
        </div>
    }
}

/// One label/value pair in the card's field grid.
#[component]
pub fn Field(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class=css::field>
            <span class=css::fieldLabel>{label}</span>
            <span class=css::fieldValue>{value}</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Pages compute `subtitle` and `badge` as Option values from record
    // state and hand them to the builder as-is.
    #[test]
    fn card_props_accept_computed_options() {
        let badge: Option<(&'static str, BadgeTone)> = Some(("Active", BadgeTone::Success));
        let props = RecordCardProps::builder()
            .title("ACME Fittings".to_string())
            .subtitle(Some("Rotterdam, Netherlands".to_string()))
            .badge(badge)
            .children(Box::new(|| ().into_any()))
            .build();
        assert_eq!(props.subtitle.as_deref(), Some("Rotterdam, Netherlands"));
        assert!(props.badge.is_some());
    }

    #[test]
    fn card_props_default_to_no_subtitle_or_badge() {
        let props = RecordCardProps::builder()
            .title("WH-North".to_string())
            .children(Box::new(|| ().into_any()))
            .build();
        assert!(props.subtitle.is_none());
        assert!(props.badge.is_none());
    }
}
