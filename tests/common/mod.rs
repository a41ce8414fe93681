//! Shared test infrastructure for charge-panel integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use charge_panel::{ButtonPin, TimeDuration, TimeInstant, TimeSource};
use core::cell::Cell;

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }

    fn checked_duration_since(&self, earlier: Self) -> Option<Self::Duration> {
        self.0.checked_sub(earlier.0).map(TestDuration)
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given duration
    pub fn advance(&self, duration: TestDuration) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + duration.0));
    }

    pub fn set_time(&self, time: TestInstant) {
        self.current_time.set(time);
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Button Pin
// ============================================================================

/// Mock pin whose level is scripted through a shared cell
pub struct ScriptedPin<'a> {
    level: &'a Cell<bool>,
}

impl<'a> ScriptedPin<'a> {
    pub fn new(level: &'a Cell<bool>) -> Self {
        Self { level }
    }
}

impl ButtonPin for ScriptedPin<'_> {
    fn is_pressed(&mut self) -> bool {
        self.level.get()
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// The poll cadence the original unit uses, in milliseconds
pub const POLL_MS: u64 = 5;

/// Compare two readings with floating-point tolerance
pub fn approx_eq(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() < epsilon
}
