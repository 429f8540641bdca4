//! Root application module.
//!
//! Contains the main App component and AppContext definition following
//! Leptos conventions.

use leptos::prelude::*;

use crate::components::{
    AnalyticsPage, CustomersPage, OrdersPage, PackagingPage, ProductionPage, SettingsPage,
    ShipmentsPage, Sidebar, WarehousesPage,
};
use crate::models::ActivePage;

stylance::import_crate_style!(css, "src/app.module.css");

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from any child
/// component with `use_context::<AppContext>()`.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Which console page is currently shown.
    pub active_page: RwSignal<ActivePage>,
}

impl AppContext {
    /// Creates a new application context on the default page.
    pub fn new() -> Self {
        Self {
            active_page: RwSignal::new(ActivePage::default()),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// App
// ============================================================================

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Wraps the console in an ErrorBoundary for graceful error handling
/// - Renders the sidebar and the active page
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div class=css::crash>
                    <h1 class=css::crashTitle>"Something went wrong"</h1>
                    <p class=css::crashHint>
                        "An unexpected error occurred. Please try reloading the page."
                    </p>
                    <ul class=css::crashList>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        class=css::crashReload
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <div class=css::shell>
                <Sidebar />
                <main class=css::content>
                    {move || match ctx.active_page.get() {
                        ActivePage::Analytics => view! { <AnalyticsPage /> }.into_any(),
                        ActivePage::Orders => view! { <OrdersPage /> }.into_any(),
                        ActivePage::Customers => view! { <CustomersPage /> }.into_any(),
                        ActivePage::Production => view! { <ProductionPage /> }.into_any(),
                        ActivePage::Packaging => view! { <PackagingPage /> }.into_any(),
                        ActivePage::Shipments => view! { <ShipmentsPage /> }.into_any(),
                        ActivePage::Warehouses => view! { <WarehousesPage /> }.into_any(),
                        ActivePage::Settings => view! { <SettingsPage /> }.into_any(),
                    }}
                </main>
            </div>
        </ErrorBoundary>
    }
}
