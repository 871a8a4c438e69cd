// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Pattern slots within a screenset.

use std::fmt;

use super::SeqNumber;

/// Default pattern length: one 4/4 bar at 24 PPQN
pub const DEFAULT_LENGTH_TICKS: u64 = 96;

/// A loopable pattern occupying a slot
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    /// Pattern name
    name: String,
    /// Loop length in ticks
    length_ticks: u64,
    /// MIDI channel (1-16)
    channel: u8,
}

impl Pattern {
    /// Create a one-bar pattern on channel 1
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            length_ticks: DEFAULT_LENGTH_TICKS,
            channel: 1,
        }
    }

    /// Builder: set length in ticks
    pub fn with_length(mut self, length_ticks: u64) -> Self {
        self.length_ticks = length_ticks.max(1);
        self
    }

    /// Builder: set MIDI channel
    pub fn with_channel(mut self, channel: u8) -> Self {
        self.channel = channel.clamp(1, 16);
        self
    }

    /// Get pattern name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set pattern name
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Get length in ticks
    pub fn length_ticks(&self) -> u64 {
        self.length_ticks
    }

    /// Get MIDI channel
    pub fn channel(&self) -> u8 {
        self.channel
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' {} ticks ch {}", self.name, self.length_ticks, self.channel)
    }
}

/// One cell of a screenset grid
#[derive(Debug, Clone, PartialEq)]
pub struct Slot {
    /// Global sequence number of this slot
    seq_number: SeqNumber,
    /// Pattern in the slot, if any
    pattern: Option<Pattern>,
    /// Whether the pattern is armed (unmuted)
    armed: bool,
}

impl Slot {
    /// Create an empty slot
    pub fn new(seq_number: SeqNumber) -> Self {
        Self {
            seq_number,
            pattern: None,
            armed: false,
        }
    }

    /// Get sequence number
    pub fn seq_number(&self) -> SeqNumber {
        self.seq_number
    }

    pub(crate) fn set_seq_number(&mut self, seq_number: SeqNumber) {
        self.seq_number = seq_number;
    }

    /// Get pattern
    pub fn pattern(&self) -> Option<&Pattern> {
        self.pattern.as_ref()
    }

    /// Get mutable pattern
    pub fn pattern_mut(&mut self) -> Option<&mut Pattern> {
        self.pattern.as_mut()
    }

    /// Put a pattern in the slot, returning the one it displaces
    pub fn set_pattern(&mut self, pattern: Pattern) -> Option<Pattern> {
        self.pattern.replace(pattern)
    }

    /// Remove the pattern; the slot is disarmed
    pub fn take_pattern(&mut self) -> Option<Pattern> {
        self.armed = false;
        self.pattern.take()
    }

    /// Check if the slot holds a pattern
    pub fn is_active(&self) -> bool {
        self.pattern.is_some()
    }

    /// Check if armed
    pub fn armed(&self) -> bool {
        self.armed
    }

    /// Arm or mute the pattern. Empty slots stay unarmed.
    pub fn set_armed(&mut self, armed: bool) -> bool {
        if self.is_active() {
            self.armed = armed;
            true
        } else {
            false
        }
    }

    /// Toggle the armed state
    pub fn toggle_armed(&mut self) -> bool {
        let armed = !self.armed;
        self.set_armed(armed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_builder() {
        let pattern = Pattern::new("Bass").with_length(192).with_channel(20);
        assert_eq!(pattern.name(), "Bass");
        assert_eq!(pattern.length_ticks(), 192);
        assert_eq!(pattern.channel(), 16);
        assert_eq!(pattern.to_string(), "'Bass' 192 ticks ch 16");
    }

    #[test]
    fn test_zero_length_clamped() {
        let pattern = Pattern::new("Blip").with_length(0);
        assert_eq!(pattern.length_ticks(), 1);
    }

    #[test]
    fn test_empty_slot_cannot_arm() {
        let mut slot = Slot::new(7);
        assert!(!slot.is_active());
        assert!(!slot.set_armed(true));
        assert!(!slot.armed());
        assert!(!slot.toggle_armed());
    }

    #[test]
    fn test_slot_pattern_lifecycle() {
        let mut slot = Slot::new(3);
        assert!(slot.set_pattern(Pattern::new("A")).is_none());
        assert!(slot.toggle_armed());
        assert!(slot.armed());

        let old = slot.set_pattern(Pattern::new("B"));
        assert_eq!(old.map(|p| p.name().to_string()), Some("A".to_string()));
        assert!(slot.armed());

        let taken = slot.take_pattern();
        assert_eq!(taken.unwrap().name(), "B");
        assert!(!slot.is_active());
        assert!(!slot.armed());
        assert_eq!(slot.seq_number(), 3);
    }
}
