// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application.

// ==========================================================================
// Story Section Defaults
// ==========================================================================

/// Fraction of a story section that must be on screen before it is revealed.
pub const DEFAULT_REVEAL_THRESHOLD: f32 = 0.3;

/// Smallest accepted reveal threshold (any intersection reveals).
pub const MIN_REVEAL_THRESHOLD: f32 = 0.0;

/// Largest accepted reveal threshold (section must be fully visible).
pub const MAX_REVEAL_THRESHOLD: f32 = 1.0;

// ==========================================================================
// Locale Defaults
// ==========================================================================

/// Locale used when neither the CLI, the config nor the OS yields a match.
pub const DEFAULT_LOCALE: &str = "en-US";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_REVEAL_THRESHOLD <= DEFAULT_REVEAL_THRESHOLD);
    assert!(DEFAULT_REVEAL_THRESHOLD <= MAX_REVEAL_THRESHOLD);
};
