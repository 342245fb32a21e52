//! uiconfig: runtime UI configuration store
//!
//! Holds feature-flag-like settings for a UI component library (tenancy
//! mode, role flags, per-page toggles) that a host application overrides at
//! runtime through dispatched actions. Partial updates deep-merge into the
//! current state; the user role list is only ever replaced or cleared whole.

pub mod action;
pub mod config;
pub mod error;
pub mod events;
pub mod logging;
pub mod patch;
pub mod reducer;
pub mod registry;
pub mod roles;
pub mod state;
pub mod store;

pub use action::{ActionKind, UiConfigAction};
pub use config::{SettingsLoader, StoreSettings};
pub use error::UiConfigError;
pub use events::DispatchEnvelope;
pub use patch::UiConfigPatch;
pub use state::UiConfigState;
pub use store::{ConfigStore, StateView};
