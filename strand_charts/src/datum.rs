// Copyright 2025 the Strand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scalar values carried by chart points.

extern crate alloc;

use alloc::string::String;
use core::cmp::Ordering;
use core::fmt;

/// A single x or y value: either a number or a category label.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Datum {
    /// A continuous numeric value.
    Number(f64),
    /// A discrete category label.
    Category(String),
}

impl Datum {
    /// Returns the numeric value, if this is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            Self::Category(_) => None,
        }
    }

    /// Returns `true` for numeric values.
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    /// Returns the hashable identity of this value.
    pub fn key(&self) -> DatumKey {
        match self {
            // `-0.0` and `0.0` are the same position.
            Self::Number(v) if *v == 0.0 => DatumKey::Number(0.0_f64.to_bits()),
            Self::Number(v) => DatumKey::Number(v.to_bits()),
            Self::Category(s) => DatumKey::Category(s.clone()),
        }
    }

    /// Ordering used for sorted discrete domains.
    ///
    /// Numbers sort ascending and come before categories; categories sort lexicographically.
    pub fn sorted_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Number(_), Self::Category(_)) => Ordering::Less,
            (Self::Category(_), Self::Number(_)) => Ordering::Greater,
            (Self::Category(a), Self::Category(b)) => a.cmp(b),
        }
    }
}

impl fmt::Display for Datum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(v) => write!(f, "{v}"),
            Self::Category(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Datum {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<f32> for Datum {
    fn from(value: f32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i32> for Datum {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for Datum {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for Datum {
    fn from(value: &str) -> Self {
        Self::Category(String::from(value))
    }
}

impl From<String> for Datum {
    fn from(value: String) -> Self {
        Self::Category(value)
    }
}

/// Hashable identity of a [`Datum`], used for discrete domains and stack positions.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum DatumKey {
    /// Bit pattern of a finite number.
    Number(u64),
    /// A category label.
    Category(String),
}
