//! Path-routed HTTP gateway library.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::{GatewayConfig, ReservedSet, RouteBinding, RoutesConfig};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::RouteStore;
