//! Route table shared by the client and the local proxy.
//!
//! Each [`Route`] has a local path (served by `charter-proxy` under `/api`)
//! and the backend path it forwards to.

/// Which side of the proxy a client talks to.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum RouteSet {
    /// Local pass-through routes (`/api/...`)
    #[default]
    Local,
    /// Backend routes, called directly
    Backend,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Route {
    Catalog,
    Price,
    PriceMl,
    OptimizerRun,
    QuotePdf,
    MlTrain,
}

impl Route {
    pub const ALL: [Route; 6] = [
        Route::Catalog,
        Route::Price,
        Route::PriceMl,
        Route::OptimizerRun,
        Route::QuotePdf,
        Route::MlTrain,
    ];

    /// Pricing endpoint for the selected mode.
    pub fn price(use_ml: bool) -> Route {
        if use_ml {
            Route::PriceMl
        } else {
            Route::Price
        }
    }

    pub fn local_path(self) -> &'static str {
        match self {
            Route::Catalog => "/api/catalog",
            Route::Price => "/api/price",
            Route::PriceMl => "/api/price-ml",
            Route::OptimizerRun => "/api/optimizer/run",
            Route::QuotePdf => "/api/quote-pdf",
            Route::MlTrain => "/api/ml/train",
        }
    }

    pub fn backend_path(self) -> &'static str {
        match self {
            Route::Catalog => "/catalog",
            Route::Price => "/price",
            Route::PriceMl => "/price-ml",
            Route::OptimizerRun => "/optimizer/run",
            Route::QuotePdf => "/quote.pdf",
            Route::MlTrain => "/ml/train",
        }
    }

    pub fn path(self, set: RouteSet) -> &'static str {
        match set {
            RouteSet::Local => self.local_path(),
            RouteSet::Backend => self.backend_path(),
        }
    }
}

/// A base address plus the route set to resolve against it.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Endpoints {
    base: String,
    set: RouteSet,
}

impl Endpoints {
    pub fn new(base: &str, set: RouteSet) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
            set,
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn set(&self) -> RouteSet {
        self.set
    }

    pub fn url(&self, route: Route) -> String {
        format!("{}{}", self.base, route.path(self.set))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_route_follows_mode() {
        assert_eq!(Route::price(true), Route::PriceMl);
        assert_eq!(Route::price(false), Route::Price);
    }

    #[test]
    fn local_routes_all_live_under_api() {
        for route in Route::ALL {
            assert!(route.local_path().starts_with("/api/"), "{:?}", route);
            assert!(!route.backend_path().starts_with("/api/"), "{:?}", route);
        }
        assert_eq!(Route::QuotePdf.backend_path(), "/quote.pdf");
    }

    #[test]
    fn endpoints_strip_trailing_slash() {
        let local = Endpoints::new("http://127.0.0.1:3000/", RouteSet::Local);
        assert_eq!(local.url(Route::Catalog), "http://127.0.0.1:3000/api/catalog");

        let backend = Endpoints::new("http://127.0.0.1:8000/api", RouteSet::Backend);
        assert_eq!(
            backend.url(Route::OptimizerRun),
            "http://127.0.0.1:8000/api/optimizer/run"
        );
    }
}
