//! Application state for the shift ledger API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::source::{InMemoryTimesheet, TimesheetSource};

/// Shared application state.
///
/// Contains the loaded policy configuration and the timesheet store that
/// month pages are read from.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    source: Arc<dyn TimesheetSource>,
}

impl AppState {
    /// Creates a new application state with the given configuration and store.
    pub fn new(config: ConfigLoader, source: Arc<dyn TimesheetSource>) -> Self {
        Self {
            config: Arc::new(config),
            source,
        }
    }

    /// Creates a state backed by an empty in-memory store.
    pub fn with_empty_source(config: ConfigLoader) -> Self {
        Self::new(config, Arc::new(InMemoryTimesheet::new()))
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the timesheet store.
    pub fn source(&self) -> &dyn TimesheetSource {
        self.source.as_ref()
    }
}
