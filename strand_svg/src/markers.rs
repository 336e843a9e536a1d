// Copyright 2025 the Strand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point markers drawn on top of the line paths.

use kurbo::{BezPath, Circle, Shape};
use peniko::Color;
use strand_charts::{Datum, GeneratedLine};

use crate::format::format_datum;
use crate::style::{StrokeStyle, Theme};
use crate::svg::{self, Anchor, Baseline, SvgBuffer, TextStyle};
use crate::z_order;

/// Marker shapes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// A circle.
    #[default]
    Circle,
    /// An axis-aligned square.
    Square,
}

impl Symbol {
    /// Returns a path for this symbol centered at `cx, cy`, using `size` as the diameter/side.
    pub fn path(self, cx: f64, cy: f64, size: f64) -> BezPath {
        match self {
            Self::Square => square_path(cx, cy, size),
            Self::Circle => circle_path(cx, cy, size),
        }
    }
}

fn square_path(cx: f64, cy: f64, size: f64) -> BezPath {
    let half = size * 0.5;
    let mut p = BezPath::new();
    p.move_to((cx - half, cy - half));
    p.line_to((cx + half, cy - half));
    p.line_to((cx + half, cy + half));
    p.line_to((cx - half, cy + half));
    p.close_path();
    p
}

fn circle_path(cx: f64, cy: f64, size: f64) -> BezPath {
    Circle::new((cx, cy), size * 0.5).path_elements(0.1).collect()
}

/// A color that is either fixed or taken from the series.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum InheritedColor {
    /// Use the series color.
    #[default]
    Inherit,
    /// Use this color.
    Fixed(Color),
}

impl InheritedColor {
    /// Resolves against the series color.
    pub fn resolve(self, series: Color) -> Color {
        match self {
            Self::Inherit => series,
            Self::Fixed(c) => c,
        }
    }
}

/// Which data field a marker label shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LabelField {
    /// The x value.
    X,
    /// The y value.
    #[default]
    Y,
}

/// Point marker options.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkersSpec {
    /// Marker shape.
    pub symbol: Symbol,
    /// Marker diameter or side length.
    pub size: f64,
    /// Marker fill.
    pub color: InheritedColor,
    /// Border width; zero disables the border.
    pub border_width: f64,
    /// Border color.
    pub border_color: InheritedColor,
    /// Draw a text label above each marker.
    pub enable_label: bool,
    /// Which value the label shows.
    pub label: LabelField,
    /// Vertical label offset from the marker center.
    pub label_y_offset: f64,
}

impl Default for MarkersSpec {
    fn default() -> Self {
        Self {
            symbol: Symbol::Circle,
            size: 6.0,
            color: InheritedColor::Inherit,
            border_width: 0.0,
            border_color: InheritedColor::Inherit,
            enable_label: false,
            label: LabelField::Y,
            label_y_offset: -12.0,
        }
    }
}

impl MarkersSpec {
    /// Sets the marker shape and size.
    pub fn with_symbol(mut self, symbol: Symbol, size: f64) -> Self {
        self.symbol = symbol;
        self.size = size.max(0.0);
        self
    }

    /// Sets the marker fill.
    pub fn with_color(mut self, color: InheritedColor) -> Self {
        self.color = color;
        self
    }

    /// Sets the border.
    pub fn with_border(mut self, width: f64, color: InheritedColor) -> Self {
        self.border_width = width.max(0.0);
        self.border_color = color;
        self
    }

    /// Enables labels showing `field`.
    pub fn with_label(mut self, field: LabelField, y_offset: f64) -> Self {
        self.enable_label = true;
        self.label = field;
        self.label_y_offset = y_offset;
        self
    }
}

/// Emits one marker per generated point, plus labels when enabled.
pub(crate) fn marker_elements(
    buf: &mut SvgBuffer,
    lines: &[GeneratedLine],
    spec: &MarkersSpec,
    theme: &Theme,
) {
    let label_style = TextStyle {
        fill: theme.marker_label_color,
        font_size: theme.marker_label_font_size,
        font_family: theme.font_family,
        anchor: Anchor::Middle,
        baseline: Baseline::Alphabetic,
        rotation: 0.0,
    };
    for line in lines {
        let fill = spec.color.resolve(line.color);
        let border = StrokeStyle::solid(spec.border_color.resolve(line.color), spec.border_width);
        for p in &line.points {
            let shape = spec.symbol.path(p.x, p.y, spec.size);
            buf.push(z_order::SERIES_POINTS, svg::path(&shape, Some(fill), &border));
            if spec.enable_label {
                let value: &Datum = match spec.label {
                    LabelField::X => &p.data.x,
                    LabelField::Y => &p.data.y,
                };
                let text = format_datum(value, f64::NAN);
                buf.push(
                    z_order::POINT_LABELS,
                    svg::text(p.x, p.y + spec.label_y_offset, &text, &label_style),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use peniko::color::palette::css;
    use strand_charts::{LinePoint, Point};

    use super::*;

    fn line() -> GeneratedLine {
        GeneratedLine {
            id: "a".into(),
            color: css::RED,
            points: vec![
                LinePoint {
                    x: 10.0,
                    y: 20.0,
                    baseline: None,
                    data: Point::new(1, 2.5),
                },
                LinePoint {
                    x: 30.0,
                    y: 40.0,
                    baseline: None,
                    data: Point::new(2, 7),
                },
            ],
        }
    }

    fn render(spec: &MarkersSpec) -> String {
        let mut buf = SvgBuffer::default();
        marker_elements(&mut buf, &[line()], spec, &Theme::default());
        let mut out = String::new();
        buf.write_into(&mut out);
        out
    }

    #[test]
    fn square_symbol_is_centered() {
        let p = Symbol::Square.path(10.0, 10.0, 4.0);
        assert_eq!(p.to_svg(), "M8,8 L12,8 L12,12 L8,12 Z");
    }

    #[test]
    fn markers_inherit_the_series_color_without_border() {
        let out = render(&MarkersSpec::default());
        assert_eq!(out.matches("<path").count(), 2);
        assert!(out.contains(r##"fill="#ff0000""##));
        assert!(!out.contains("stroke="));
        assert!(!out.contains("<text"));
    }

    #[test]
    fn labels_sit_above_markers_and_paint_last() {
        let spec = MarkersSpec::default()
            .with_border(2.0, InheritedColor::Fixed(css::WHITE))
            .with_label(LabelField::Y, -12.0);
        let out = render(&spec);
        assert!(out.contains(r##"stroke="#ffffff" stroke-width="2""##), "{out}");
        assert!(out.contains(r#"<text x="10" y="8""#), "{out}");
        assert!(out.contains(">2.5</text>"));
        assert!(out.contains(">7</text>"));
        let last_path = out.rfind("<path").unwrap_or(0);
        let first_text = out.find("<text").unwrap_or(0);
        assert!(first_text > last_path);
    }
}
