//! Store Settings
//!
//! Host-supplied settings for a store: the logging section and the initial
//! overrides applied through `update` right after the default state is built.
//! Settings are TOML. The `overrides` table keeps the host's field names and
//! is decoded with `toml`; the other sections are read through the `config`
//! crate on top of its defaults. Several files can be layered, later files
//! winning field by field.

use crate::error::UiConfigError;
use crate::logging::LoggingConfig;
use crate::patch::UiConfigPatch;
use serde::{Deserialize, Serialize};
use std::path::Path;

mod merge_policy;
mod sources;

/// Settings consumed by [`crate::store::ConfigStore::create`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreSettings {
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Applied to the default state when the store is created.
    #[serde(default)]
    pub overrides: UiConfigPatch,
}

impl StoreSettings {
    pub fn with_overrides(overrides: UiConfigPatch) -> Self {
        Self {
            overrides,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), UiConfigError> {
        self.logging.validate().map_err(|e| match e {
            UiConfigError::LoggingError(message) => {
                UiConfigError::ConfigError(format!("logging: {}", message))
            }
            other => other,
        })
    }

    /// Render the effective settings as a TOML document.
    pub fn to_toml_string(&self) -> Result<String, UiConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// One settings document as written, before defaults are filled in.
///
/// `overrides` is decoded with `toml` directly so the host's camelCase field
/// names survive; the `config` crate folds keys to lowercase. The remaining
/// sections go through `config` on top of the merge-policy defaults.
#[derive(Debug, Default)]
struct SettingsLayer {
    logging: Option<LoggingConfig>,
    overrides: Option<UiConfigPatch>,
}

/// Everything except `overrides`, as seen through the `config` crate.
#[derive(Debug, Deserialize)]
struct SectionsDocument {
    #[serde(default)]
    logging: LoggingConfig,
}

impl SettingsLayer {
    fn parse(contents: &str) -> Result<Self, UiConfigError> {
        let mut document: toml::Table = toml::from_str(contents)?;

        let overrides = document
            .remove("overrides")
            .map(|value| value.try_into::<UiConfigPatch>())
            .transpose()?;

        let logging = if document.contains_key("logging") {
            let remainder = toml::to_string(&document)?;
            let sections: SectionsDocument =
                sources::add_str(merge_policy::builder_with_defaults()?, &remainder)
                    .build()?
                    .try_deserialize()?;
            Some(sections.logging)
        } else {
            None
        };

        Ok(Self { logging, overrides })
    }
}

pub struct SettingsLoader;

impl SettingsLoader {
    /// Load settings from a single TOML file.
    pub fn load_from_file(path: &Path) -> Result<StoreSettings, UiConfigError> {
        Self::load_layered(&[path])
    }

    /// Parse settings from a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<StoreSettings, UiConfigError> {
        let layer = SettingsLayer::parse(contents)?;
        let settings = StoreSettings {
            logging: layer.logging.unwrap_or_default(),
            overrides: layer.overrides.unwrap_or_default(),
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Load several files in order. A later file's `logging` section replaces
    /// an earlier one; `overrides` are folded with [`UiConfigPatch::merge`].
    pub fn load_layered(paths: &[&Path]) -> Result<StoreSettings, UiConfigError> {
        let mut settings = StoreSettings::default();

        for path in paths {
            let layer = SettingsLayer::parse(&sources::read_file(path)?)?;
            if let Some(logging) = layer.logging {
                settings.logging = logging;
            }
            if let Some(overrides) = layer.overrides {
                settings.overrides = std::mem::take(&mut settings.overrides).merge(overrides);
            }
        }

        settings.validate()?;
        Ok(settings)
    }
}
