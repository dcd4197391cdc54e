//! Configuration types for fretboard rendering.
//!
//! [`AppConfig`] is the root of a configuration file: the default instrument
//! and a [`StyleOverride`] applied to every diagram. It implements
//! [`serde::Deserialize`], and unknown keys are rejected.
//!
//! # Example
//!
//! ```
//! # use fretboard::{Instrument, config::AppConfig};
//! let config: AppConfig = toml::from_str(
//!     r#"
//!     instrument = "ukulele"
//!
//!     [style.drawing]
//!     width = 240
//!     "#,
//! )
//! .unwrap();
//! assert_eq!(config.instrument(), Instrument::Ukulele);
//! ```

use serde::Deserialize;

use crate::{instrument::Instrument, style::StyleOverride};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Instrument used when none is given explicitly.
    instrument: Instrument,

    /// Style override applied on top of the built-in defaults.
    style: StyleOverride,
}

impl AppConfig {
    pub fn new(instrument: Instrument, style: StyleOverride) -> Self {
        Self { instrument, style }
    }

    pub fn instrument(&self) -> Instrument {
        self.instrument
    }

    pub fn style(&self) -> &StyleOverride {
        &self.style
    }
}
