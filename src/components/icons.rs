//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuActivity as Analytics, LuChevronLeft as ChevronLeft, LuChevronRight as ChevronRight,
        LuFactory as Production, LuPackage as Packaging, LuSearch as Search,
        LuSettings as Settings, LuShoppingCart as Orders, LuTrendingDown as TrendDown,
        LuTrendingUp as TrendUp, LuTruck as Shipments, LuUsers as Customers,
        LuWarehouse as Warehouses,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowDownRight as TrendDown, BsArrowUpRight as TrendUp, BsBoxSeam as Packaging,
        BsBuilding as Warehouses, BsCart as Orders, BsChevronLeft as ChevronLeft,
        BsChevronRight as ChevronRight, BsGear as Production, BsGraphUp as Analytics,
        BsPeople as Customers, BsSearch as Search, BsSliders as Settings, BsTruck as Shipments,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_LEFT, ChevronLeft);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(SEARCH, Search);
themed_icon!(ANALYTICS, Analytics);
themed_icon!(ORDERS, Orders);
themed_icon!(CUSTOMERS, Customers);
themed_icon!(PRODUCTION, Production);
themed_icon!(PACKAGING, Packaging);
themed_icon!(SHIPMENTS, Shipments);
themed_icon!(WAREHOUSES, Warehouses);
themed_icon!(SETTINGS, Settings);
themed_icon!(TREND_UP, TrendUp);
themed_icon!(TREND_DOWN, TrendDown);
