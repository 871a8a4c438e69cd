// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Screenset: one page of pattern slots.
//!
//! A screenset owns `rows × columns` slots. Slot `i` of set `n` carries the
//! global sequence number `n * set_size + i`, so renumbering the set also
//! renumbers its slots.

use std::fmt::Write;

use super::slot::{Pattern, Slot};
use super::{SeqNumber, SetError, SetNumber, SET_LIMIT};

/// A page of pattern slots with its own set number
#[derive(Debug, Clone, PartialEq)]
pub struct Screenset {
    /// Own set number (changed only by swaps)
    set_number: SetNumber,
    /// Set name
    name: String,
    /// Slot rows
    rows: i32,
    /// Slot columns
    columns: i32,
    /// Whether this is the play-screen
    is_playscreen: bool,
    /// Slots in column-major order
    slots: Vec<Slot>,
}

impl Screenset {
    /// Create an empty screenset
    pub fn new(set_number: SetNumber, rows: i32, columns: i32) -> Self {
        let set_size = (rows.max(0) * columns.max(0)) as usize;
        let offset = set_number.saturating_mul(set_size as SeqNumber);
        let slots = (0..set_size)
            .map(|i| Slot::new(offset.saturating_add(i as SeqNumber)))
            .collect();

        Self {
            set_number,
            name: String::new(),
            rows,
            columns,
            is_playscreen: false,
            slots,
        }
    }

    /// Builder: set name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Get own set number
    pub fn set_number(&self) -> SetNumber {
        self.set_number
    }

    /// Give the set a new number and renumber its slots. Only swaps
    /// renumber, so own numbers stay unique within a manager.
    pub(crate) fn change_set_number(&mut self, set_number: SetNumber) {
        self.set_number = set_number;
        let offset = self.seq_offset();
        for (i, slot) in self.slots.iter_mut().enumerate() {
            slot.set_seq_number(offset.saturating_add(i as SeqNumber));
        }
    }

    /// Get set name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set set name
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Get row count
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Get column count
    pub fn columns(&self) -> i32 {
        self.columns
    }

    /// Number of slots
    pub fn set_size(&self) -> usize {
        self.slots.len()
    }

    /// Sequence number of the first slot
    pub fn seq_offset(&self) -> SeqNumber {
        self.set_number.saturating_mul(self.set_size() as SeqNumber)
    }

    /// False only for the dummy set
    pub fn usable(&self) -> bool {
        self.set_number != SET_LIMIT
    }

    /// Check if this is the play-screen
    pub fn is_playscreen(&self) -> bool {
        self.is_playscreen
    }

    /// Mark or unmark as the play-screen
    pub(crate) fn set_is_playscreen(&mut self, flag: bool) {
        self.is_playscreen = flag;
    }

    /// Get slot by grid index
    pub fn slot(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    /// Get mutable slot by grid index
    pub fn slot_mut(&mut self, index: usize) -> Option<&mut Slot> {
        self.slots.get_mut(index)
    }

    /// Get all slots
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Place a pattern, replacing any pattern already in the slot
    pub fn add_pattern(&mut self, index: usize, pattern: Pattern) -> Result<Option<Pattern>, SetError> {
        let set = self.set_number;
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(SetError::SlotOutOfRange { set, index })?;
        Ok(slot.set_pattern(pattern))
    }

    /// Remove the pattern at a grid index
    pub fn remove_pattern(&mut self, index: usize) -> Option<Pattern> {
        self.slots.get_mut(index).and_then(Slot::take_pattern)
    }

    /// Number of slots holding a pattern
    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_active()).count()
    }

    /// Check if no slot holds a pattern
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|s| !s.is_active())
    }

    /// Run a set handler with an externally supplied index
    pub fn set_function<S>(&mut self, mut set_handler: S, index: SetNumber) -> bool
    where
        S: FnMut(&mut Screenset, SetNumber) -> bool,
    {
        set_handler(self, index)
    }

    /// Run a set handler with the own set number, then a slot handler per slot
    pub fn set_and_slot_function<S, P>(&mut self, mut set_handler: S, slot_handler: P) -> bool
    where
        S: FnMut(&mut Screenset, SetNumber) -> bool,
        P: FnMut(&mut Slot) -> bool,
    {
        let number = self.set_number;
        set_handler(self, number) && self.slot_function(slot_handler)
    }

    /// Run a slot handler for each slot, stopping at the first failure
    pub fn slot_function<P>(&mut self, mut slot_handler: P) -> bool
    where
        P: FnMut(&mut Slot) -> bool,
    {
        self.slots.iter_mut().all(|slot| slot_handler(slot))
    }

    /// Render the set as a report line, optionally listing its patterns
    pub fn describe(&self, show_patterns: bool) -> String {
        let mut result = String::new();
        let _ = write!(
            result,
            "[{}] '{}' {}/{} patterns",
            self.set_number,
            self.name,
            self.active_count(),
            self.set_size()
        );
        if self.is_playscreen {
            result.push_str(" (play-screen)");
        }
        result.push('\n');

        if show_patterns {
            for slot in &self.slots {
                if let Some(pattern) = slot.pattern() {
                    let _ = write!(result, "    Seq {}: {}", slot.seq_number(), pattern);
                    if slot.armed() {
                        result.push_str(" armed");
                    }
                    result.push('\n');
                }
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screenset_creation() {
        let set = Screenset::new(2, 4, 8);
        assert_eq!(set.set_number(), 2);
        assert_eq!(set.set_size(), 32);
        assert_eq!(set.seq_offset(), 64);
        assert_eq!(set.slot(0).unwrap().seq_number(), 64);
        assert_eq!(set.slot(31).unwrap().seq_number(), 95);
        assert!(set.usable());
        assert!(set.is_empty());
        assert!(!set.is_playscreen());
    }

    #[test]
    fn test_huge_set_number_saturates() {
        let set = Screenset::new(i32::MAX, 4, 8);
        assert_eq!(set.seq_offset(), i32::MAX);
        assert_eq!(set.slot(31).unwrap().seq_number(), i32::MAX);

        let set = Screenset::new(i32::MIN, 2, 2);
        assert_eq!(set.seq_offset(), i32::MIN);
        assert_eq!(set.slot(3).unwrap().seq_number(), i32::MIN + 3);
    }

    #[test]
    fn test_dummy_not_usable() {
        let set = Screenset::new(SET_LIMIT, 4, 8);
        assert!(!set.usable());
    }

    #[test]
    fn test_change_set_number_renumbers_slots() {
        let mut set = Screenset::new(1, 4, 8);
        set.change_set_number(3);
        assert_eq!(set.set_number(), 3);
        assert_eq!(set.slot(0).unwrap().seq_number(), 96);
        assert_eq!(set.slot(5).unwrap().seq_number(), 101);
    }

    #[test]
    fn test_add_and_remove_pattern() {
        let mut set = Screenset::new(0, 4, 8);
        assert_eq!(set.add_pattern(5, Pattern::new("Lead")), Ok(None));
        assert_eq!(set.active_count(), 1);
        assert!(!set.is_empty());

        let err = set.add_pattern(32, Pattern::new("Nope")).unwrap_err();
        assert_eq!(err, SetError::SlotOutOfRange { set: 0, index: 32 });

        assert_eq!(set.remove_pattern(5).unwrap().name(), "Lead");
        assert!(set.remove_pattern(5).is_none());
        assert!(set.is_empty());
    }

    #[test]
    fn test_set_function_passes_index() {
        let mut set = Screenset::new(9, 2, 2);
        let mut seen = None;
        assert!(set.set_function(
            |s, index| {
                seen = Some((s.set_number(), index));
                true
            },
            4
        ));
        assert_eq!(seen, Some((9, 4)));
    }

    #[test]
    fn test_slot_function_stops_on_failure() {
        let mut set = Screenset::new(0, 2, 4);
        let mut visited = 0;
        let result = set.slot_function(|slot| {
            visited += 1;
            slot.seq_number() < 2
        });
        assert!(!result);
        assert_eq!(visited, 3);
    }

    #[test]
    fn test_set_and_slot_function() {
        let mut set = Screenset::new(1, 2, 2);
        set.add_pattern(0, Pattern::new("A")).unwrap();
        set.add_pattern(3, Pattern::new("B")).unwrap();

        let mut set_calls = Vec::new();
        let result = set.set_and_slot_function(
            |s, number| {
                set_calls.push(number);
                s.set_name("armed");
                true
            },
            |slot| {
                slot.set_armed(true);
                true
            },
        );
        assert!(result);
        assert_eq!(set_calls, vec![1]);
        assert_eq!(set.name(), "armed");
        assert!(set.slot(0).unwrap().armed());
        assert!(!set.slot(1).unwrap().armed());
        assert!(set.slot(3).unwrap().armed());
    }

    #[test]
    fn test_set_handler_failure_skips_slots() {
        let mut set = Screenset::new(0, 2, 2);
        let mut slot_calls = 0;
        let result = set.set_and_slot_function(
            |_, _| false,
            |_| {
                slot_calls += 1;
                true
            },
        );
        assert!(!result);
        assert_eq!(slot_calls, 0);
    }

    #[test]
    fn test_describe() {
        let mut set = Screenset::new(1, 2, 2).with_name("Drums");
        set.add_pattern(2, Pattern::new("Kick")).unwrap();
        set.slot_mut(2).unwrap().set_armed(true);
        set.set_is_playscreen(true);

        assert_eq!(set.describe(false), "[1] 'Drums' 1/4 patterns (play-screen)\n");
        assert_eq!(
            set.describe(true),
            "[1] 'Drums' 1/4 patterns (play-screen)\n    Seq 6: 'Kick' 96 ticks ch 1 armed\n"
        );
    }
}
