//! Common types used throughout the ashcam client
//!
//! Scalar encodings the upstream API uses in place of JSON booleans and enums.

use serde::{Serialize, Serializer};
use std::fmt;

// ============================================================================
// Tri-state Indicator
// ============================================================================

/// A yes/no flag that upstream may omit or extend
///
/// Decoding never fails: anything other than `"Y"` or `"N"` is `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TriState {
    Yes,
    No,
    #[default]
    Unknown,
}

impl TriState {
    /// Decode from the upstream single-letter code
    pub fn from_code(code: &str) -> Self {
        match code {
            "Y" => TriState::Yes,
            "N" => TriState::No,
            _ => TriState::Unknown,
        }
    }

    /// The upstream single-letter code
    pub fn as_code(self) -> &'static str {
        match self {
            TriState::Yes => "Y",
            TriState::No => "N",
            TriState::Unknown => "U",
        }
    }
}

impl From<bool> for TriState {
    fn from(value: bool) -> Self {
        if value {
            TriState::Yes
        } else {
            TriState::No
        }
    }
}

impl fmt::Display for TriState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

impl Serialize for TriState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_code())
    }
}

// ============================================================================
// Interesting Code
// ============================================================================

/// Whether an image shows volcanic activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InterestingCode {
    VolcanicActivity,
    NoVolcanicActivity,
    #[default]
    Unknown,
}

impl InterestingCode {
    /// Decode from the upstream code; unrecognized codes are `Unknown`
    pub fn from_code(code: &str) -> Self {
        match code {
            "V" => InterestingCode::VolcanicActivity,
            "N" => InterestingCode::NoVolcanicActivity,
            _ => InterestingCode::Unknown,
        }
    }

    pub fn as_code(self) -> &'static str {
        match self {
            InterestingCode::VolcanicActivity => "V",
            InterestingCode::NoVolcanicActivity => "N",
            InterestingCode::Unknown => "U",
        }
    }

    /// True only when volcanic activity was observed
    pub fn is_interesting(self) -> bool {
        self == InterestingCode::VolcanicActivity
    }
}

impl fmt::Display for InterestingCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

impl Serialize for InterestingCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_code())
    }
}

// ============================================================================
// Image Ordering
// ============================================================================

/// Sort order of an image listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    #[default]
    NewestFirst,
    OldestFirst,
}

impl Order {
    /// The path segment upstream expects
    pub fn as_segment(self) -> &'static str {
        match self {
            Order::NewestFirst => "newestFirst",
            Order::OldestFirst => "oldestFirst",
        }
    }
}

impl From<bool> for Order {
    /// `true` means newest first
    fn from(newest_first: bool) -> Self {
        if newest_first {
            Order::NewestFirst
        } else {
            Order::OldestFirst
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_segment())
    }
}
