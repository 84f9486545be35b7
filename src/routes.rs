// View path constants - single source of truth for all client-side paths

pub const DASHBOARD: &str = "/";
pub const TEMPORAL_ANALYSIS: &str = "/temporal";
pub const CUSTOMER_ANALYSIS: &str = "/customers";
pub const PRODUCT_ANALYSIS: &str = "/products";
pub const RECOMMENDATIONS: &str = "/recommendations";

/// Stable identifier of every navigable view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewName {
    Dashboard,
    TemporalAnalysis,
    CustomerAnalysis,
    ProductAnalysis,
    Recommendations,
}

impl ViewName {
    /// Every view, in navigation order.
    pub const ALL: [ViewName; 5] = [
        ViewName::Dashboard,
        ViewName::TemporalAnalysis,
        ViewName::CustomerAnalysis,
        ViewName::ProductAnalysis,
        ViewName::Recommendations,
    ];

    /// Name as it appears in navigation state and history entries.
    pub fn as_str(self) -> &'static str {
        match self {
            ViewName::Dashboard => "Dashboard",
            ViewName::TemporalAnalysis => "TemporalAnalysis",
            ViewName::CustomerAnalysis => "CustomerAnalysis",
            ViewName::ProductAnalysis => "ProductAnalysis",
            ViewName::Recommendations => "Recommendations",
        }
    }

    /// Path the view is mounted on.
    pub fn path(self) -> &'static str {
        match self {
            ViewName::Dashboard => DASHBOARD,
            ViewName::TemporalAnalysis => TEMPORAL_ANALYSIS,
            ViewName::CustomerAnalysis => CUSTOMER_ANALYSIS,
            ViewName::ProductAnalysis => PRODUCT_ANALYSIS,
            ViewName::Recommendations => RECOMMENDATIONS,
        }
    }
}

/// One entry in the route table.
#[derive(Debug, Clone)]
pub struct Route<V> {
    pub path: &'static str,
    pub name: ViewName,
    pub view: V,
}

/// The view to mount for each navigable path. The router never inspects
/// these; they only travel from registration to resolution.
#[derive(Debug, Clone)]
pub struct Views<V> {
    pub dashboard: V,
    pub temporal: V,
    pub customers: V,
    pub products: V,
    pub recommendations: V,
}

/// Client-side route table, fixed at construction.
#[derive(Debug, Clone)]
pub struct Router<V> {
    routes: [Route<V>; 5],
}

impl<V> Router<V> {
    /// Build the route table, one route per view.
    pub fn new(views: Views<V>) -> Self {
        Router {
            routes: [
                Route {
                    path: DASHBOARD,
                    name: ViewName::Dashboard,
                    view: views.dashboard,
                },
                Route {
                    path: TEMPORAL_ANALYSIS,
                    name: ViewName::TemporalAnalysis,
                    view: views.temporal,
                },
                Route {
                    path: CUSTOMER_ANALYSIS,
                    name: ViewName::CustomerAnalysis,
                    view: views.customers,
                },
                Route {
                    path: PRODUCT_ANALYSIS,
                    name: ViewName::ProductAnalysis,
                    view: views.products,
                },
                Route {
                    path: RECOMMENDATIONS,
                    name: ViewName::Recommendations,
                    view: views.recommendations,
                },
            ],
        }
    }

    /// All routes in declaration order.
    pub fn routes(&self) -> &[Route<V>] {
        &self.routes
    }

    /// Look up the route mounted exactly at `path`.
    ///
    /// Matching is literal: case sensitive, no trailing-slash normalization,
    /// no prefix matching.
    pub fn resolve(&self, path: &str) -> Option<&Route<V>> {
        self.routes.iter().find(|route| route.path == path)
    }

    /// Path for a view name. Total: every name has exactly one route.
    pub fn path_for(&self, name: ViewName) -> &'static str {
        name.path()
    }
}
