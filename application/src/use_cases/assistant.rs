//! One request/response turn: resolve → log → dispatch

use super::dispatch::Dispatcher;
use crate::ports::intent_resolver::IntentResolver;
use crate::ports::record_store::RecordStore;
use crate::ports::route_logger::{NoRouteLog, RouteEvent, RouteLogger};
use std::sync::Arc;
use tracing::info;

pub struct Assistant<S> {
    resolver: Arc<dyn IntentResolver>,
    dispatcher: Dispatcher<S>,
    route_log: Arc<dyn RouteLogger>,
}

impl<S: RecordStore> Assistant<S> {
    pub fn new(resolver: Arc<dyn IntentResolver>, dispatcher: Dispatcher<S>) -> Self {
        Self {
            resolver,
            dispatcher,
            route_log: Arc::new(NoRouteLog),
        }
    }

    pub fn with_route_log(mut self, route_log: Arc<dyn RouteLogger>) -> Self {
        self.route_log = route_log;
        self
    }

    /// Name of the active resolver
    pub fn resolver_name(&self) -> &'static str {
        self.resolver.name()
    }

    /// Handle one input line and return the message for the user.
    pub async fn handle(&self, input: &str) -> String {
        let candidate = self.resolver.resolve(input).await;
        info!(
            resolver = self.resolver.name(),
            plugin = candidate.plugin().unwrap_or("-"),
            function = candidate.function().unwrap_or("-"),
            "Routed input"
        );

        let message = self.dispatcher.execute(&candidate).await;
        self.route_log
            .log(RouteEvent::new(self.resolver.name(), input, candidate));
        message
    }
}
