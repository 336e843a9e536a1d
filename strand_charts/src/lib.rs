// Copyright 2025 the Strand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scale derivation and line geometry for line charts.
//!
//! The pipeline has three pure stages:
//! - **Scales**: [`build_scales`] maps a [`Dataset`] onto a plot area, linear for numeric
//!   values and point scales for categories, optionally stacked.
//! - **Lines**: [`generate_lines`] maps every series through the scales into pixel space.
//! - **Curves**: [`interpolator_for`] / [`Curve`] turn point sequences into [`kurbo::BezPath`]s.
//!
//! [`compute_frame`] runs all three; [`LineChartMemo`] does the same but only recomputes the
//! stages whose inputs changed. Rendering is out of scope; see `strand_svg` for an SVG scene.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod color;
mod config;
mod curve;
mod dataset;
mod datum;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod frame;
mod lines;
mod memo;
mod scale;
mod stack;

pub use color::{ColorScheme, OrdinalColors};
pub use config::{DiscreteOrder, LineChartConfig, Margin, ScaleOptions};
pub use curve::{Curve, Interpolator, interpolator_for};
pub use dataset::{Dataset, Point, Series};
pub use datum::{Datum, DatumKey};
pub use error::ChartError;
pub use frame::{LineChartFrame, compute_frame};
pub use lines::{GeneratedLine, LinePoint, generate_lines};
pub use memo::{LineChartMemo, MemoStats};
pub use scale::{
    Scale, ScaleLinear, ScalePoint, Scales, Tick, build_scales, build_scales_with,
};
pub use stack::stacked_totals;
