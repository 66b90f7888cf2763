//! Logging infrastructure: structured route logging.
//!
//! Provides [`JsonlRouteLogger`], a JSONL file writer that implements
//! the [`RouteLogger`](taskmate_application::RouteLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlRouteLogger;
