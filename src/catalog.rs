// SPDX-License-Identifier: MPL-2.0
//! Showcase catalog: the rows of chips the marquee displays.
//!
//! A catalog is a small TOML document listing rows, each with a set of
//! chip labels, a scroll heading, and an optional speed override. The
//! default catalog ships embedded in the binary; a custom one can be
//! supplied via the `--catalog` flag or the config file.

use crate::config;
use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(RustEmbed)]
#[folder = "assets/"]
#[include = "catalog.toml"]
struct Assets;

const EMBEDDED_CATALOG: &str = "catalog.toml";

/// Scroll heading of a row's automatic motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Heading {
    /// Content drifts leftward (the usual marquee direction).
    #[default]
    Leftward,
    /// Content drifts rightward.
    Rightward,
}

impl Heading {
    /// Signed velocity for this heading at the given speed.
    #[must_use]
    pub fn velocity(self, speed_px_per_sec: f32) -> f32 {
        match self {
            Heading::Leftward => -speed_px_per_sec,
            Heading::Rightward => speed_px_per_sec,
        }
    }
}

/// One showcase row: a titled set of chip labels and its motion.
#[derive(Debug, Clone, Deserialize)]
pub struct RowSpec {
    /// Optional heading text shown above the row.
    #[serde(default)]
    pub title: Option<String>,
    /// Chip labels, in display order.
    #[serde(default)]
    pub entries: Vec<String>,
    /// Scroll heading for the automatic motion.
    #[serde(default)]
    pub heading: Heading,
    /// Auto-scroll speed override in px/sec; the configured default
    /// applies when absent. Clamped on use.
    #[serde(default)]
    pub speed: Option<f32>,
}

impl RowSpec {
    /// Effective auto-scroll speed for this row, clamped into range.
    #[must_use]
    pub fn effective_speed(&self, default_speed: f32) -> f32 {
        config::clamp_scroll_speed(self.speed.unwrap_or(default_speed))
    }
}

/// A full showcase catalog.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub rows: Vec<RowSpec>,
}

impl Catalog {
    /// Parses a catalog from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::Catalog(e.to_string()))
    }

    /// Loads a catalog from a file on disk.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    /// Loads the catalog embedded in the binary.
    pub fn embedded() -> Result<Self> {
        let file = Assets::get(EMBEDDED_CATALOG)
            .ok_or_else(|| Error::Catalog("embedded catalog missing".to_string()))?;
        let text = std::str::from_utf8(file.data.as_ref())
            .map_err(|e| Error::Catalog(e.to_string()))?;
        Self::from_toml(text)
    }

    /// Rows that can actually be installed: rows with no entries are
    /// skipped silently and do not affect their siblings.
    pub fn installable_rows(&self) -> impl Iterator<Item = &RowSpec> {
        self.rows.iter().filter(|row| !row.entries.is_empty())
    }

    /// Whether the catalog has any installable row at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.installable_rows().next().is_none()
    }
}
