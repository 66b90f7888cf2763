//! Record store adapters
//!
//! Provides [`JsonFileStore`], the flat-file implementation of the
//! [`RecordStore`](taskmate_application::RecordStore) port.

mod json_store;

pub use json_store::JsonFileStore;
