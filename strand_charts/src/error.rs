// Copyright 2025 the Strand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised by the chart pipeline.

extern crate alloc;

use alloc::string::String;

/// Errors returned by scale building, line generation and curve lookup.
///
/// Every error is raised at the offending call; the pipeline never substitutes fallback
/// geometry for bad input.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ChartError {
    /// The dataset has no series, or none of its series has any points.
    #[error("dataset is empty")]
    EmptyDataset,
    /// The plot area is not a positive, finite extent.
    #[error("invalid plot dimensions {width}x{height}")]
    InvalidDimensions {
        /// Requested width in pixels.
        width: f64,
        /// Requested height in pixels.
        height: f64,
    },
    /// The curve name does not select a known interpolator.
    #[error("unknown curve `{0}`")]
    UnknownCurve(String),
    /// Two series share the same id.
    #[error("duplicate series id `{0}`")]
    DuplicateSeriesId(String),
    /// A numeric value is `NaN` or infinite.
    #[error("non-finite value in series `{series}` at point {index}")]
    NonFiniteValue {
        /// Offending series id.
        series: String,
        /// Point index within the series.
        index: usize,
    },
    /// A categorical y value was found while stacking.
    #[error("series `{series}` has a non-numeric y at point {index}; stacking needs numbers")]
    NonNumericStackValue {
        /// Offending series id.
        series: String,
        /// Point index within the series.
        index: usize,
    },
    /// A value is outside the domain of the scale it was mapped with.
    #[error("value in series `{series}` at point {index} is outside the scale domain")]
    UnmappedValue {
        /// Offending series id.
        series: String,
        /// Point index within the series.
        index: usize,
    },
}
