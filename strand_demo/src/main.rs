// Copyright 2025 the Strand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line chart demos for `strand_charts`.
//!
//! Usage: `strand_demo [dataset.json] [out_dir]`. The dataset uses the
//! `[{"id": "...", "data": [{"x": .., "y": ..}]}]` shape; without one a built-in sample is used.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use peniko::Color;
use strand_charts::{
    ColorScheme, Curve, Dataset, LineChartConfig, LineChartMemo, Margin, Series, stacked_totals,
};
use strand_svg::{
    AreaSpec, AxisOrient, AxisSpec, InheritedColor, LabelField, LineSceneSpec, MarkersSpec, Theme,
};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args_os().skip(1);
    let dataset = match args.next() {
        Some(path) => load_dataset(Path::new(&path))?,
        None => sample_dataset(),
    };
    let out_dir = args.next().map_or_else(|| PathBuf::from("."), PathBuf::from);
    log::info!(
        "{} series, {} points",
        dataset.len(),
        dataset.point_count()
    );

    write_svg(&out_dir, "strand_lines.svg", &lines_scene().render(&dataset)?)?;
    write_svg(&out_dir, "strand_stacked.svg", &stacked_scene().render(&dataset)?)?;

    // Re-render every curve through one memo: scales and lines are built once.
    let mut memo = LineChartMemo::new();
    for curve in Curve::ALL {
        let scene = curve_scene(curve);
        let svg = scene.render_memo(&mut memo, &dataset)?;
        write_svg(&out_dir, &format!("strand_curve_{}.svg", curve.name()), &svg)?;
    }
    log::info!("curve gallery: {:?}", memo.stats());

    match stacked_totals(&dataset) {
        Ok(totals) => {
            for (x, total) in totals {
                println!("{x}\t{total}");
            }
        }
        Err(err) => log::warn!("no stacked totals: {err}"),
    }
    Ok(())
}

fn load_dataset(path: &Path) -> anyhow::Result<Dataset> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let dataset: Dataset =
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    dataset.validate()?;
    Ok(dataset)
}

fn sample_dataset() -> Dataset {
    let days = ["mon", "tue", "wed", "thu", "fri", "sat", "sun"];
    [
        ("japan", [12, 31, 27, 40, 22, 35, 18]),
        ("france", [8, 14, 19, 11, 26, 21, 30]),
        ("us", [20, 17, 24, 29, 15, 12, 22]),
    ]
    .into_iter()
    .map(|(id, values)| Series::from_pairs(id, days.into_iter().zip(values)))
    .collect()
}

fn chart() -> LineChartConfig {
    LineChartConfig::new(520.0, 320.0).with_margin(Margin::new(40.0, 30.0, 50.0, 60.0))
}

fn white_theme() -> Theme {
    Theme {
        background: Some(Color::WHITE),
        ..Theme::default()
    }
}

fn lines_scene() -> LineSceneSpec {
    LineSceneSpec::new(chart())
        .with_axis(
            AxisOrient::Bottom,
            Some(AxisSpec::new().with_legend("day", 36.0)),
        )
        .with_axis(
            AxisOrient::Left,
            Some(AxisSpec::new().with_legend("count", 44.0)),
        )
        .with_markers(Some(
            MarkersSpec::default()
                .with_border(2.0, InheritedColor::Fixed(Color::WHITE))
                .with_label(LabelField::Y, -12.0),
        ))
        .with_theme(white_theme())
}

fn stacked_scene() -> LineSceneSpec {
    let chart = chart()
        .with_stacked(true)
        .with_curve(Curve::MonotoneX)
        .with_colors(ColorScheme::Category10);
    LineSceneSpec::new(chart)
        .with_axis(
            AxisOrient::Bottom,
            Some(AxisSpec::new().with_tick_rotation(-30.0)),
        )
        .with_area(Some(AreaSpec::default()))
        .with_markers(Some(MarkersSpec::default()))
        .with_theme(white_theme())
}

fn curve_scene(curve: Curve) -> LineSceneSpec {
    LineSceneSpec::new(chart().with_curve(curve))
        .with_axis(
            AxisOrient::Top,
            Some(AxisSpec::new().with_legend(curve.name(), 24.0)),
        )
        .with_theme(white_theme())
}

fn write_svg(dir: &Path, name: &str, svg: &str) -> anyhow::Result<()> {
    let path = dir.join(name);
    std::fs::write(&path, svg).with_context(|| format!("writing {}", path.display()))?;
    println!("wrote {}", path.display());
    Ok(())
}
