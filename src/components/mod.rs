//! UI components built with Leptos.
//!
//! - [`carousel`] - `use_carousel` hook binding the core navigator to DOM events
//! - [`browser`] - Shared fetch/filter/browse frame for record pages
//! - [`record_card`] - Card, field, and status-badge building blocks
//! - [`sidebar`] - Page navigation
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - One module per console page: [`analytics`], [`orders`], [`customers`],
//!   [`production`], [`packaging`], [`shipments`], [`warehouses`], [`settings`]

pub mod analytics;
pub mod browser;
pub mod carousel;
pub mod customers;
pub mod icons;
pub mod orders;
pub mod packaging;
pub mod production;
pub mod record_card;
pub mod settings;
pub mod shipments;
pub mod sidebar;
pub mod warehouses;

pub use analytics::AnalyticsPage;
pub use customers::CustomersPage;
pub use orders::OrdersPage;
pub use packaging::PackagingPage;
pub use production::ProductionPage;
pub use settings::SettingsPage;
pub use shipments::ShipmentsPage;
pub use sidebar::Sidebar;
pub use warehouses::WarehousesPage;
