// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Screen-set management for live pattern looping.
//!
//! This crate provides:
//! - Screensets: fixed grids of pattern slots with their own set number
//! - A set manager that keeps exactly one play-screen active
//! - Visitor entry points for bulk operations over sets and slots
//! - A YAML/TOML start-up configuration for the set layout

pub mod config;
pub mod sets;

pub use config::SetsConfig;
pub use sets::{
    Pattern, Screenset, SetError, SetManager, SetNumber, SeqNumber, Slot, SET_LIMIT,
};
