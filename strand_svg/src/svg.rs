// Copyright 2025 the Strand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A minimal SVG element buffer.

use std::fmt::Write as _;

use kurbo::BezPath;
use peniko::Color;

use crate::style::StrokeStyle;

/// Collects SVG elements tagged with a z-order and writes them out in paint order.
#[derive(Debug, Default)]
pub(crate) struct SvgBuffer {
    elements: Vec<(i32, String)>,
}

impl SvgBuffer {
    pub(crate) fn push(&mut self, z: i32, markup: String) {
        self.elements.push((z, markup));
    }

    pub(crate) fn len(&self) -> usize {
        self.elements.len()
    }

    /// Writes the elements sorted by z; equal z keeps insertion order.
    pub(crate) fn write_into(mut self, out: &mut String) {
        self.elements.sort_by_key(|(z, _)| *z);
        for (_z, markup) in self.elements {
            out.push_str(&markup);
            out.push('\n');
        }
    }
}

fn svg_paint(color: Color) -> (String, Option<f64>) {
    let rgba = color.to_rgba8();
    let value = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
    let opacity = if rgba.a == 255 {
        None
    } else {
        Some(f64::from(rgba.a) / 255.0)
    };
    (value, opacity)
}

pub(crate) fn write_paint_attr(out: &mut String, name: &str, color: Color) {
    let (value, opacity) = svg_paint(color);
    let _ = write!(out, r#" {name}="{value}""#);
    if let Some(o) = opacity {
        let _ = write!(out, r#" {name}-opacity="{o}""#);
    }
}

pub(crate) fn write_stroke_attrs(out: &mut String, stroke: &StrokeStyle) {
    if stroke.width > 0.0 {
        write_paint_attr(out, "stroke", stroke.color);
        let _ = write!(out, r#" stroke-width="{}""#, stroke.width);
    }
}

pub(crate) fn line(x0: f64, y0: f64, x1: f64, y1: f64, stroke: &StrokeStyle) -> String {
    let mut out = format!(r#"<line x1="{x0}" y1="{y0}" x2="{x1}" y2="{y1}""#);
    write_stroke_attrs(&mut out, stroke);
    out.push_str("/>");
    out
}

/// A path element; `fill: None` writes `fill="none"`.
pub(crate) fn path(d: &BezPath, fill: Option<Color>, stroke: &StrokeStyle) -> String {
    let mut out = format!(r#"<path d="{}""#, d.to_svg());
    match fill {
        Some(color) => write_paint_attr(&mut out, "fill", color),
        None => out.push_str(r#" fill="none""#),
    }
    write_stroke_attrs(&mut out, stroke);
    out.push_str("/>");
    out
}

/// Text anchoring for [`text`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Anchor {
    Start,
    Middle,
    End,
}

/// Vertical alignment for [`text`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Baseline {
    Alphabetic,
    Middle,
    Hanging,
}

pub(crate) struct TextStyle<'a> {
    pub(crate) fill: Color,
    pub(crate) font_size: f64,
    pub(crate) font_family: &'a str,
    pub(crate) anchor: Anchor,
    pub(crate) baseline: Baseline,
    pub(crate) rotation: f64,
}

pub(crate) fn text(x: f64, y: f64, content: &str, style: &TextStyle<'_>) -> String {
    let baseline = match style.baseline {
        Baseline::Alphabetic => "alphabetic",
        Baseline::Middle => "central",
        Baseline::Hanging => "hanging",
    };
    let anchor = match style.anchor {
        Anchor::Start => "start",
        Anchor::Middle => "middle",
        Anchor::End => "end",
    };
    let mut out = format!(
        r#"<text x="{x}" y="{y}" font-size="{}" font-family="{}" text-anchor="{anchor}" dominant-baseline="{baseline}""#,
        style.font_size,
        escape_xml(style.font_family),
    );
    if style.rotation != 0.0 {
        let _ = write!(out, r#" transform="rotate({} {x} {y})""#, style.rotation);
    }
    write_paint_attr(&mut out, "fill", style.fill);
    out.push('>');
    out.push_str(&escape_xml(content));
    out.push_str("</text>");
    out
}

pub(crate) fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
