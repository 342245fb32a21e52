//! Integration tests for the UI configuration store

mod dispatch_named;
mod settings_files;
mod store_lifecycle;
