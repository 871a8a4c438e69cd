// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Set manager: the ordered collection of screensets and the play-screen.
//!
//! Sets are stored by key in ascending order. A swap exchanges the contents
//! of two entries and never re-keys them, so a set's own number can differ
//! from its storage key. Lookups by displayed number go through
//! [`SetManager::find_by_value`].
//!
//! The manager does no locking. Handlers run on the caller's stack and must
//! not add sets while a visit is in progress (the borrow checker enforces
//! this for the handlers taken here).

use std::collections::BTreeMap;
use std::fmt::Write;

use tracing::{debug, trace, warn};

use super::screenset::Screenset;
use super::slot::Slot;
use super::{
    is_valid_geometry, is_valid_set, SetError, SetNumber, DEFAULT_COLUMNS, DEFAULT_ROWS,
    SET_LIMIT,
};

/// Manages all screensets and the single active play-screen
#[derive(Debug, Clone)]
pub struct SetManager {
    /// Slot rows for every set
    rows: i32,
    /// Slot columns for every set
    columns: i32,
    /// Sets by storage key
    container: BTreeMap<SetNumber, Screenset>,
    /// Storage key of the play-screen
    playscreen: SetNumber,
}

impl SetManager {
    /// Create a manager with the default 4×8 grid, holding set 0 as the
    /// play-screen plus the dummy set
    pub fn new() -> Self {
        let mut manager = Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            container: BTreeMap::new(),
            playscreen: 0,
        };
        manager.reset();
        manager
    }

    /// Create a manager with a custom grid
    pub fn with_geometry(rows: i32, columns: i32) -> Result<Self, SetError> {
        if !is_valid_geometry(rows, columns) {
            return Err(SetError::InvalidGeometry { rows, columns });
        }
        let mut manager = Self {
            rows,
            columns,
            container: BTreeMap::new(),
            playscreen: 0,
        };
        manager.reset();
        Ok(manager)
    }

    /// Drop every set, then recreate set 0 as the play-screen and the dummy
    pub fn reset(&mut self) {
        self.container.clear();
        self.add_set(0);
        self.set_playscreen(0);
        self.add_set(SET_LIMIT);
        debug!(rows = self.rows, columns = self.columns, "screensets reset");
    }

    /// Get row count
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Get column count
    pub fn columns(&self) -> i32 {
        self.columns
    }

    /// Slots per set
    pub fn set_size(&self) -> usize {
        (self.rows * self.columns) as usize
    }

    /// Set number for a position in the set grid (column-major).
    /// Out-of-range positions give set 0.
    pub fn calculate_set(&self, row: i32, column: i32) -> SetNumber {
        if row < 0 || row >= self.rows || column < 0 || column >= self.columns {
            0
        } else {
            self.rows * column + row
        }
    }

    /// Add a set if its key is free and return it. Keys above the dummy
    /// or below zero are refused.
    pub fn add_set(&mut self, setno: SetNumber) -> Option<&mut Screenset> {
        if !(0..=SET_LIMIT).contains(&setno) {
            warn!(setno, "refusing to add set outside the set range");
            return None;
        }
        let (rows, columns) = (self.rows, self.columns);
        let set = self.container.entry(setno).or_insert_with(|| {
            debug!(setno, "adding screenset");
            Screenset::new(setno, rows, columns)
        });
        Some(set)
    }

    /// Number of real (non-dummy) sets
    pub fn screenset_count(&self) -> usize {
        self.container.range(..SET_LIMIT).count()
    }

    /// Highest real set key
    pub fn highest_set(&self) -> Option<SetNumber> {
        self.container.range(..SET_LIMIT).next_back().map(|(k, _)| *k)
    }

    /// Iterate sets in ascending key order
    pub fn iter(&self) -> impl Iterator<Item = (SetNumber, &Screenset)> {
        self.container.iter().map(|(k, s)| (*k, s))
    }

    /// Get set by storage key
    pub fn screen(&self, key: SetNumber) -> Option<&Screenset> {
        self.container.get(&key)
    }

    /// Get mutable set by storage key
    pub fn screen_mut(&mut self, key: SetNumber) -> Option<&mut Screenset> {
        self.container.get_mut(&key)
    }

    /// Check if a set is stored under the key
    pub fn is_screenset_available(&self, key: SetNumber) -> bool {
        self.container.contains_key(&key)
    }

    /// Check if a usable set with at least one pattern is stored under the key
    pub fn is_screenset_active(&self, key: SetNumber) -> bool {
        self.container
            .get(&key)
            .map_or(false, |s| s.usable() && !s.is_empty())
    }

    /// Rename the set stored under the key
    pub fn set_name(&mut self, key: SetNumber, name: impl Into<String>) -> bool {
        match self.container.get_mut(&key) {
            Some(set) => {
                set.set_name(name);
                true
            }
            None => false,
        }
    }

    /// Ordinal position, in key order, of the set whose own number matches
    pub fn screenset_index(&self, setno: SetNumber) -> Option<usize> {
        self.container
            .values()
            .position(|s| s.set_number() == setno)
    }

    /// Storage key of the set whose own number matches
    pub fn find_key_by_value(&self, setno: SetNumber) -> Option<SetNumber> {
        self.container
            .iter()
            .find(|(_, s)| s.set_number() == setno)
            .map(|(k, _)| *k)
    }

    /// Set whose own number matches, regardless of its key
    pub fn find_by_value(&self, setno: SetNumber) -> Option<&Screenset> {
        self.container.values().find(|s| s.set_number() == setno)
    }

    /// Mutable set whose own number matches, regardless of its key
    pub fn find_by_value_mut(&mut self, setno: SetNumber) -> Option<&mut Screenset> {
        self.container.values_mut().find(|s| s.set_number() == setno)
    }

    /// Exchange the contents of the sets numbered `set0` and `set1`.
    ///
    /// The storage keys stay put: the entry stored where `set0` was found
    /// now holds the contents numbered `set1`, and vice versa. Nothing
    /// changes unless both sets are found. The dummy cannot be swapped.
    pub fn swap_sets(&mut self, set0: SetNumber, set1: SetNumber) -> bool {
        if !is_valid_set(set0) || !is_valid_set(set1) {
            warn!(set0, set1, "cannot swap a set outside the set range");
            return false;
        }
        let (key0, key1) = match (self.find_key_by_value(set0), self.find_key_by_value(set1)) {
            (Some(key0), Some(key1)) => (key0, key1),
            _ => {
                warn!(set0, set1, "swap failed, set not found");
                return false;
            }
        };
        if key0 == key1 {
            return true;
        }

        let mut pair = self
            .container
            .iter_mut()
            .filter(|(k, _)| **k == key0 || **k == key1)
            .map(|(_, s)| s);
        if let (Some(low), Some(high)) = (pair.next(), pair.next()) {
            std::mem::swap(low, high);
        }
        if let Some(set) = self.container.get_mut(&key0) {
            set.change_set_number(set1);
        }
        if let Some(set) = self.container.get_mut(&key1) {
            set.change_set_number(set0);
        }

        // The active flag moved with the contents.
        if self.playscreen == key0 {
            self.playscreen = key1;
        } else if self.playscreen == key1 {
            self.playscreen = key0;
        }
        debug!(set0, set1, key0, key1, "swapped screensets");
        true
    }

    /// Storage key of the play-screen
    pub fn playscreen_number(&self) -> SetNumber {
        self.playscreen
    }

    /// Get the play-screen
    pub fn playscreen(&self) -> Option<&Screenset> {
        self.container.get(&self.playscreen)
    }

    /// Get the mutable play-screen
    pub fn playscreen_mut(&mut self) -> Option<&mut Screenset> {
        self.container.get_mut(&self.playscreen)
    }

    /// Make the set stored under `setno` the only play-screen, creating it
    /// if needed. Numbers outside [0, SET_LIMIT) are refused and leave the
    /// current play-screen alone.
    pub fn set_playscreen(&mut self, setno: SetNumber) -> bool {
        if !is_valid_set(setno) {
            warn!(setno, "play-screen out of range");
            return false;
        }
        if !self.container.contains_key(&setno) {
            self.add_set(setno);
        }
        let result = self.activate(setno);
        if !result {
            self.fallback_playscreen();
        }
        result
    }

    fn activate(&mut self, setno: SetNumber) -> bool {
        if !self.container.contains_key(&setno) {
            return false;
        }
        if let Some(old) = self.container.get_mut(&self.playscreen) {
            old.set_is_playscreen(false);
        }
        match self.container.get_mut(&setno) {
            Some(set) => {
                set.set_is_playscreen(true);
                self.playscreen = setno;
                debug!(setno, "play-screen changed");
                true
            }
            None => false,
        }
    }

    /// Recover from a failed activation by making set 0 the play-screen.
    fn fallback_playscreen(&mut self) {
        warn!("play-screen activation failed, falling back to set 0");
        for set in self.container.values_mut() {
            set.set_is_playscreen(false);
        }
        let (rows, columns) = (self.rows, self.columns);
        self.container
            .entry(0)
            .or_insert_with(|| Screenset::new(0, rows, columns))
            .set_is_playscreen(true);
        self.playscreen = 0;
    }

    /// Run a set handler on each usable set, passing 0, 1, 2, ... as the
    /// index. Stops at the first handler failure. Returns false if nothing
    /// was visited.
    pub fn set_function<S>(&mut self, mut set_handler: S) -> bool
    where
        S: FnMut(&mut Screenset, SetNumber) -> bool,
    {
        let mut result = false;
        let mut index: SetNumber = 0;
        for set in self.container.values_mut().filter(|s| s.usable()) {
            result = set.set_function(&mut set_handler, index);
            index += 1;
            if !result {
                trace!(setno = set.set_number(), "set handler stopped the visit");
                break;
            }
        }
        result
    }

    /// Run a set handler and then a slot handler per slot on each usable set.
    pub fn set_and_slot_function<S, P>(&mut self, mut set_handler: S, mut slot_handler: P) -> bool
    where
        S: FnMut(&mut Screenset, SetNumber) -> bool,
        P: FnMut(&mut Slot) -> bool,
    {
        let mut result = false;
        for set in self.container.values_mut().filter(|s| s.usable()) {
            result = set.set_and_slot_function(&mut set_handler, &mut slot_handler);
            if !result {
                trace!(setno = set.set_number(), "set/slot handler stopped the visit");
                break;
            }
        }
        result
    }

    /// Run a slot handler on every slot of each usable set.
    pub fn slot_function<P>(&mut self, mut slot_handler: P) -> bool
    where
        P: FnMut(&mut Slot) -> bool,
    {
        let mut result = false;
        for set in self.container.values_mut().filter(|s| s.usable()) {
            result = set.slot_function(&mut slot_handler);
            if !result {
                trace!(setno = set.set_number(), "slot handler stopped the visit");
                break;
            }
        }
        result
    }

    /// Report of every set below the dummy key
    pub fn sets_to_string(&self, show_patterns: bool) -> String {
        let mut result = String::from(if show_patterns {
            "Sets and Sequences:\n"
        } else {
            "Sets:\n"
        });
        for (key, set) in self.container.range(..SET_LIMIT) {
            let _ = write!(result, "  Key {}: ", key);
            if set.usable() {
                result.push_str(&set.describe(show_patterns));
            } else {
                result.push('\n');
            }
        }
        result
    }

    /// Print the set report to stdout
    pub fn show(&self, show_patterns: bool) {
        print!("{}", self.sets_to_string(show_patterns));
    }
}

impl Default for SetManager {
    fn default() -> Self {
        Self::new()
    }
}
