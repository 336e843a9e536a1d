// Copyright 2025 the Strand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG scenes for `strand_charts` line charts.
//!
//! A [`LineSceneSpec`] runs the pipeline (or takes a finished [`strand_charts::LineChartFrame`])
//! and writes a standalone SVG document. Layers paint in a fixed order: gridlines, axes,
//! areas, line paths, then point markers and their labels.
//!
//! Text is written unshaped; the viewer's font stack decides the final layout.

mod axis;
mod format;
mod grid;
mod markers;
mod scene;
mod style;
mod svg;
pub mod z_order;

pub use axis::{AxisOrient, AxisSpec};
pub use markers::{InheritedColor, LabelField, MarkersSpec, Symbol};
pub use scene::{AreaSpec, LineSceneSpec};
pub use style::{AxisTheme, StrokeStyle, Theme};
