//! Data models and types for the application.
//!
//! Contains wire types for each console domain:
//! - [`Order`] - Sales orders and their status lifecycle
//! - [`Customer`] - Customer accounts
//! - [`ProductionJob`] - Shop-floor jobs
//! - [`PackagingRun`] - Packaging runs
//! - [`Shipment`] - Outbound shipments
//! - [`Warehouse`] - Storage sites
//! - [`KpiCard`], [`ChartSeries`] - Analytics dashboard data
//! - [`ActivePage`] - Sidebar page selection
//! - [`BadgeTone`] - Status badge color tones

mod analytics;
mod customer;
mod order;
mod packaging;
mod page;
mod production;
mod shipment;
mod status;
mod warehouse;

pub use analytics::{ChartSeries, KpiCard};
pub use customer::Customer;
pub use order::Order;
pub use packaging::PackagingRun;
pub use page::ActivePage;
pub use production::ProductionJob;
pub use shipment::Shipment;
pub use status::BadgeTone;
pub use warehouse::Warehouse;
