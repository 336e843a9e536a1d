// Copyright 2025 the Strand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis generation.
//!
//! An axis is placed on one side of the plot area and draws a tick mark plus a label for
//! every tick of the scale it follows: x for top/bottom, y for left/right.

use strand_charts::Scale;

use crate::format::{format_datum, tick_step};
use crate::style::Theme;
use crate::svg::{self, Anchor, Baseline, SvgBuffer, TextStyle};
use crate::z_order;

/// Which side of the plot an axis sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisOrient {
    /// Above the plot, following the x scale.
    Top,
    /// Right of the plot, following the y scale.
    Right,
    /// Below the plot, following the x scale.
    Bottom,
    /// Left of the plot, following the y scale.
    Left,
}

impl AxisOrient {
    /// Returns `true` for axes that follow the x scale.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }
}

/// Options for one axis.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisSpec {
    /// Tick mark length in pixels.
    pub tick_size: f64,
    /// Gap between tick mark and label.
    pub tick_padding: f64,
    /// Label rotation in degrees.
    pub tick_rotation: f64,
    /// Desired tick count for continuous scales.
    pub tick_count: usize,
    /// Optional axis title.
    pub legend: Option<String>,
    /// Distance of the title from the plot edge.
    pub legend_offset: f64,
}

impl Default for AxisSpec {
    fn default() -> Self {
        Self {
            tick_size: 5.0,
            tick_padding: 5.0,
            tick_rotation: 0.0,
            tick_count: 5,
            legend: None,
            legend_offset: 32.0,
        }
    }
}

impl AxisSpec {
    /// Creates an axis with default ticks and no legend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title and its offset.
    pub fn with_legend(mut self, legend: impl Into<String>, offset: f64) -> Self {
        self.legend = Some(legend.into());
        self.legend_offset = offset;
        self
    }

    /// Sets the desired tick count.
    pub fn with_tick_count(mut self, count: usize) -> Self {
        self.tick_count = count;
        self
    }

    /// Sets tick length and label padding.
    pub fn with_tick_size(mut self, size: f64, padding: f64) -> Self {
        self.tick_size = size.max(0.0);
        self.tick_padding = padding.max(0.0);
        self
    }

    /// Sets the label rotation in degrees.
    pub fn with_tick_rotation(mut self, degrees: f64) -> Self {
        self.tick_rotation = degrees;
        self
    }
}

/// Emits the tick marks, labels and legend of one axis.
pub(crate) fn axis_elements(
    buf: &mut SvgBuffer,
    orient: AxisOrient,
    spec: &AxisSpec,
    scale: &Scale,
    width: f64,
    height: f64,
    theme: &Theme,
) {
    let ticks = scale.ticks(spec.tick_count);
    let step = tick_step(&ticks);
    let outer = spec.tick_size + spec.tick_padding;
    let (anchor, baseline) = match orient {
        AxisOrient::Top => (Anchor::Middle, Baseline::Alphabetic),
        AxisOrient::Bottom => (Anchor::Middle, Baseline::Hanging),
        AxisOrient::Left => (Anchor::End, Baseline::Middle),
        AxisOrient::Right => (Anchor::Start, Baseline::Middle),
    };
    let label_style = TextStyle {
        fill: theme.axis.text_color,
        font_size: theme.axis.font_size,
        font_family: theme.font_family,
        anchor,
        baseline,
        rotation: spec.tick_rotation,
    };

    for tick in &ticks {
        let p = tick.position;
        let (x0, y0, x1, y1, lx, ly) = match orient {
            AxisOrient::Top => (p, 0.0, p, -spec.tick_size, p, -outer),
            AxisOrient::Bottom => (p, height, p, height + spec.tick_size, p, height + outer),
            AxisOrient::Left => (0.0, p, -spec.tick_size, p, -outer, p),
            AxisOrient::Right => (width, p, width + spec.tick_size, p, width + outer, p),
        };
        buf.push(z_order::AXES, svg::line(x0, y0, x1, y1, &theme.axis.tick));
        let label = format_datum(&tick.value, step);
        buf.push(z_order::AXES, svg::text(lx, ly, &label, &label_style));
    }

    if let Some(legend) = &spec.legend {
        let off = spec.legend_offset;
        let (x, y, rotation) = match orient {
            AxisOrient::Top => (width / 2.0, -off, 0.0),
            AxisOrient::Bottom => (width / 2.0, height + off, 0.0),
            AxisOrient::Left => (-off, height / 2.0, -90.0),
            AxisOrient::Right => (width + off, height / 2.0, 90.0),
        };
        let style = TextStyle {
            fill: theme.axis.legend_color,
            font_size: theme.axis.legend_font_size,
            font_family: theme.font_family,
            anchor: Anchor::Middle,
            baseline: Baseline::Middle,
            rotation,
        };
        buf.push(z_order::AXIS_LEGENDS, svg::text(x, y, legend, &style));
    }

    log::trace!("{orient:?} axis: {} ticks", ticks.len());
}

#[cfg(test)]
mod tests {
    use strand_charts::{Datum, ScaleLinear, ScalePoint};

    use super::*;

    fn render(orient: AxisOrient, spec: &AxisSpec, scale: &Scale) -> String {
        let mut buf = SvgBuffer::default();
        axis_elements(&mut buf, orient, spec, scale, 200.0, 100.0, &Theme::default());
        let mut out = String::new();
        buf.write_into(&mut out);
        out
    }

    #[test]
    fn bottom_axis_labels_every_category() {
        let scale = Scale::Point(ScalePoint::new(
            vec![Datum::from("mon"), Datum::from("tue"), Datum::from("wed")],
            (0.0, 200.0),
        ));
        let out = render(AxisOrient::Bottom, &AxisSpec::new(), &scale);
        assert_eq!(out.matches("<line").count(), 3);
        assert!(out.contains(r#"<line x1="100" y1="100" x2="100" y2="105""#), "{out}");
        assert!(out.contains(">tue</text>"));
    }

    #[test]
    fn left_axis_uses_nice_numeric_ticks_and_rotated_legend() {
        let scale = Scale::Linear(ScaleLinear::new((0.0, 10.0), (100.0, 0.0)));
        let spec = AxisSpec::new().with_legend("count", 40.0);
        let out = render(AxisOrient::Left, &spec, &scale);
        for label in [">0<", ">2<", ">4<", ">6<", ">8<", ">10<"] {
            assert!(out.contains(label), "missing {label} in {out}");
        }
        assert!(out.contains(r#"rotate(-90 -40 50)"#), "{out}");
        assert!(out.ends_with(">count</text>\n"), "legend paints last: {out}");
    }
}
