//! `[info]` configuration: the heading shown in the site's info box.

use crate::config::ConfigDiagnostics;
use macros::Config;
use serde::{Deserialize, Serialize};

/// Info box heading and its note line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "info")]
pub struct InfoConfig {
    /// Heading text.
    pub title: String,

    /// Small line under the heading.
    pub note: String,
}

impl InfoConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.title.is_empty() && !self.note.is_empty() {
            diag.warn(Self::FIELDS.note, "set without info.title, it will not be shown");
        }
    }
}
