//! Bundled configuration for every entry point
//!
//! Each component owns its config type next to its implementation;
//! [`NoteConfig`] groups them so hosts can load one JSON document.

use serde::{Deserialize, Serialize};

use crate::error::ConfigResult;
use crate::extract::ExtractionConfig;
use crate::parser::ClassifierConfig;
use crate::render::RenderOptions;
use crate::transcript::TranscriptMarkers;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, uniffi::Record)]
#[serde(default)]
pub struct NoteConfig {
    pub classifier: ClassifierConfig,
    pub extraction: ExtractionConfig,
    pub markers: TranscriptMarkers,
    pub render: RenderOptions,
}

impl NoteConfig {
    /// Validate every component config
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`](crate::error::ConfigError) found.
    pub fn validate(&self) -> ConfigResult<()> {
        self.classifier.validate()?;
        self.extraction.validate()?;
        self.markers.validate()?;
        Ok(())
    }

    /// Default config with HTML escaping switched on
    #[must_use]
    pub fn escaped() -> Self {
        Self {
            render: RenderOptions::escaped(),
            ..Self::default()
        }
    }
}
