// Copyright 2025 the Strand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paint order of scene layers.
//!
//! Elements are emitted sorted by `(z, insertion order)`, so layers can be produced in any
//! order and still paint consistently.

/// Chart background fill.
pub const BACKGROUND: i32 = -100;
/// Gridlines drawn behind series.
pub const GRID_LINES: i32 = -50;
/// Axis tick marks and labels, below the series.
pub const AXES: i32 = -20;
/// Axis legends.
pub const AXIS_LEGENDS: i32 = -10;
/// Filled areas under the lines.
pub const SERIES_AREA: i32 = 0;
/// Series line paths.
pub const SERIES_STROKE: i32 = 10;
/// Point markers drawn above lines.
pub const SERIES_POINTS: i32 = 20;
/// Marker labels.
pub const POINT_LABELS: i32 = 25;
