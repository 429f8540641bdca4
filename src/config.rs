//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the console.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the sidebar header.
pub const APP_NAME: &str = "plantdesk";

/// Application version.
pub const APP_VERSION: &str = "0.1.0";

// =============================================================================
// Network Configuration
// =============================================================================

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

/// Backend REST API endpoints. The console is read-only against these; all
/// business logic lives behind them.
pub mod api {
    /// Base URL of the backend API (same-origin deployment).
    pub const BASE_URL: &str = "/api";

    pub fn orders() -> String {
        format!("{}/orders", BASE_URL)
    }

    pub fn customers() -> String {
        format!("{}/customers", BASE_URL)
    }

    pub fn production_jobs() -> String {
        format!("{}/production/jobs", BASE_URL)
    }

    pub fn packaging_runs() -> String {
        format!("{}/packaging/runs", BASE_URL)
    }

    pub fn shipments() -> String {
        format!("{}/shipments", BASE_URL)
    }

    pub fn warehouses() -> String {
        format!("{}/warehouses", BASE_URL)
    }

    pub fn analytics_kpis() -> String {
        format!("{}/analytics/kpis", BASE_URL)
    }

    pub fn analytics_charts() -> String {
        format!("{}/analytics/charts", BASE_URL)
    }
}

// =============================================================================
// Gesture Configuration
// =============================================================================

/// Swipe thresholds in pixels. Two families exist and must stay distinct:
/// fixed carousels (KPI cards, chart panels, settings tabs) react a little
/// earlier than record browsers embedded in a scrollable page.
pub mod gesture {
    /// Threshold for optimistic-start carousels (fixed card/tab strips).
    pub const SWIPE_THRESHOLD_OPTIMISTIC: f64 = 40.0;

    /// Threshold for confirmed-start carousels (record browsers).
    pub const SWIPE_THRESHOLD_CONFIRMED: f64 = 50.0;
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
