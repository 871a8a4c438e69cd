// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Start-up configuration for the set layout.
//!
//! Describes the slot grid, the sets to create with their names and
//! patterns, and which set starts as the play-screen. YAML and TOML files
//! are both accepted.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::sets::slot::DEFAULT_LENGTH_TICKS;
use crate::sets::{
    is_valid_geometry, is_valid_set, Pattern, SetError, SetManager, SetNumber, DEFAULT_COLUMNS,
    DEFAULT_ROWS,
};

/// Root configuration for the set layout
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SetsConfig {
    /// Slot rows per set
    #[serde(default = "default_rows")]
    pub rows: i32,
    /// Slot columns per set
    #[serde(default = "default_columns")]
    pub columns: i32,
    /// Set that starts as the play-screen
    #[serde(default)]
    pub playscreen: SetNumber,
    /// Sets to create
    #[serde(default)]
    pub sets: Vec<SetConfig>,
}

fn default_rows() -> i32 {
    DEFAULT_ROWS
}
fn default_columns() -> i32 {
    DEFAULT_COLUMNS
}
fn default_length_ticks() -> u64 {
    DEFAULT_LENGTH_TICKS
}
fn default_channel() -> u8 {
    1
}

impl Default for SetsConfig {
    fn default() -> Self {
        Self {
            rows: default_rows(),
            columns: default_columns(),
            playscreen: 0,
            sets: Vec::new(),
        }
    }
}

/// One set in the layout
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SetConfig {
    /// Set number
    pub number: SetNumber,
    /// Set name
    #[serde(default)]
    pub name: Option<String>,
    /// Patterns placed in the set
    #[serde(default)]
    pub patterns: Vec<PatternConfig>,
}

/// A pattern placed in a slot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatternConfig {
    /// Slot index within the set (column-major)
    pub slot: usize,
    /// Pattern name
    pub name: String,
    /// Loop length in ticks
    #[serde(default = "default_length_ticks")]
    pub length_ticks: u64,
    /// MIDI channel (1-16)
    #[serde(default = "default_channel")]
    pub channel: u8,
    /// Start armed
    #[serde(default)]
    pub armed: bool,
}

/// Layout validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Geometry, set number or slot index problem
    #[error(transparent)]
    Set(#[from] SetError),
    /// Same set listed twice
    #[error("set {0} is listed more than once")]
    DuplicateSet(SetNumber),
    /// Same slot filled twice
    #[error("slot {slot} of set {set} is filled more than once")]
    DuplicateSlot { set: SetNumber, slot: usize },
    /// Channel outside 1-16
    #[error("pattern in slot {slot} of set {set} has invalid channel {channel}")]
    InvalidChannel { set: SetNumber, slot: usize, channel: u8 },
}

impl SetsConfig {
    /// Load a layout from a `.toml` file, or YAML for any other extension
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml(&contents),
            _ => Self::from_yaml(&contents),
        }
    }

    /// Parse a layout from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse YAML configuration")
    }

    /// Parse a layout from a TOML string
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse TOML configuration")
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize configuration to YAML")
    }

    /// Save the layout to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = self.to_yaml()?;
        fs::write(path.as_ref(), yaml)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))
    }

    /// Check the layout before building a manager from it
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_valid_geometry(self.rows, self.columns) {
            return Err(SetError::InvalidGeometry {
                rows: self.rows,
                columns: self.columns,
            }
            .into());
        }
        if !is_valid_set(self.playscreen) {
            return Err(SetError::InvalidSet(self.playscreen).into());
        }

        let set_size = (self.rows * self.columns) as usize;
        let mut numbers = HashSet::new();
        for set in &self.sets {
            if !is_valid_set(set.number) {
                return Err(SetError::InvalidSet(set.number).into());
            }
            if !numbers.insert(set.number) {
                return Err(ConfigError::DuplicateSet(set.number));
            }

            let mut slots = HashSet::new();
            for pattern in &set.patterns {
                if pattern.slot >= set_size {
                    return Err(SetError::SlotOutOfRange {
                        set: set.number,
                        index: pattern.slot,
                    }
                    .into());
                }
                if !slots.insert(pattern.slot) {
                    return Err(ConfigError::DuplicateSlot {
                        set: set.number,
                        slot: pattern.slot,
                    });
                }
                if !(1..=16).contains(&pattern.channel) {
                    return Err(ConfigError::InvalidChannel {
                        set: set.number,
                        slot: pattern.slot,
                        channel: pattern.channel,
                    });
                }
            }
        }
        Ok(())
    }

    /// Build a manager holding the configured sets and play-screen
    pub fn build(&self) -> Result<SetManager> {
        self.validate().context("Invalid set layout")?;
        let mut manager = SetManager::with_geometry(self.rows, self.columns)?;

        for set_config in &self.sets {
            let set = manager
                .add_set(set_config.number)
                .ok_or(SetError::InvalidSet(set_config.number))?;
            if let Some(name) = &set_config.name {
                set.set_name(name.as_str());
            }
            for p in &set_config.patterns {
                let pattern = Pattern::new(p.name.as_str())
                    .with_length(p.length_ticks)
                    .with_channel(p.channel);
                set.add_pattern(p.slot, pattern)?;
                if let Some(slot) = set.slot_mut(p.slot) {
                    slot.set_armed(p.armed);
                }
            }
        }

        if !manager.set_playscreen(self.playscreen) {
            return Err(SetError::InvalidSet(self.playscreen).into());
        }
        debug!(
            sets = manager.screenset_count(),
            playscreen = self.playscreen,
            "built set layout"
        );
        Ok(manager)
    }
}
