//! Console page selection.

/// Which console page is currently shown. Driven by the sidebar; plain
/// signal state rather than URL routing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActivePage {
    #[default]
    Analytics,
    Orders,
    Customers,
    Production,
    Packaging,
    Shipments,
    Warehouses,
    Settings,
}

impl ActivePage {
    /// Sidebar / heading label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Analytics => "Analytics",
            Self::Orders => "Orders",
            Self::Customers => "Customers",
            Self::Production => "Production",
            Self::Packaging => "Packaging",
            Self::Shipments => "Shipments",
            Self::Warehouses => "Warehouses",
            Self::Settings => "Settings",
        }
    }

    /// All pages in sidebar order.
    pub fn all() -> &'static [ActivePage] {
        &[
            Self::Analytics,
            Self::Orders,
            Self::Customers,
            Self::Production,
            Self::Packaging,
            Self::Shipments,
            Self::Warehouses,
            Self::Settings,
        ]
    }
}
