// Copyright 2025 the Strand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Call-site memoization of the pipeline.
//!
//! The pipeline functions are pure and never cache. [`LineChartMemo`] keeps the last frame
//! and recomputes only the stages whose inputs changed:
//! - scales (and everything after) when the dataset, plot size, stacking or scale options change,
//! - lines and paths when the color scheme changes,
//! - paths alone when the curve changes.

use crate::ChartError;
use crate::color::ColorScheme;
use crate::config::{LineChartConfig, ScaleOptions};
use crate::curve::Curve;
use crate::dataset::Dataset;
use crate::frame::{LineChartFrame, compute_frame, lines_for, paths_for};

#[derive(Clone, Debug)]
struct ScalesKey {
    dataset: Dataset,
    width: f64,
    height: f64,
    stacked: bool,
    options: ScaleOptions,
}

impl ScalesKey {
    fn matches(&self, dataset: &Dataset, config: &LineChartConfig) -> bool {
        self.width == config.inner_width()
            && self.height == config.inner_height()
            && self.stacked == config.stacked
            && self.options == config.scale
            && self.dataset == *dataset
    }
}

/// How many times each stage has been computed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MemoStats {
    /// Scale builds.
    pub scale_builds: usize,
    /// Line generations.
    pub line_builds: usize,
    /// Path interpolations.
    pub path_builds: usize,
}

/// Caches the last [`LineChartFrame`] keyed on its inputs.
#[derive(Debug, Default)]
pub struct LineChartMemo {
    scales_key: Option<ScalesKey>,
    colors: Option<ColorScheme>,
    curve: Option<Curve>,
    frame: Option<LineChartFrame>,
    stats: MemoStats,
}

impl LineChartMemo {
    /// Creates an empty memo.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recompute counters.
    pub fn stats(&self) -> MemoStats {
        self.stats
    }

    /// Returns the cached frame, if any.
    pub fn frame(&self) -> Option<&LineChartFrame> {
        self.frame.as_ref()
    }

    /// Drops the cached frame.
    pub fn clear(&mut self) {
        self.scales_key = None;
        self.colors = None;
        self.curve = None;
        self.frame = None;
    }

    /// Returns a frame for `dataset` and `config`, recomputing only stale stages.
    ///
    /// Any error clears the cache, so [`Self::frame`] returns `None` and the next call
    /// recomputes from scratch.
    pub fn update(
        &mut self,
        dataset: &Dataset,
        config: &LineChartConfig,
    ) -> Result<&LineChartFrame, ChartError> {
        let key = self
            .scales_key
            .take()
            .filter(|k| k.matches(dataset, config));
        let cached = self.frame.take();

        let (key, mut frame) = match (key, cached) {
            (Some(key), Some(frame)) => (key, frame),
            _ => {
                let frame = compute_frame(dataset, config)?;
                log::debug!("memo: rebuilt scales for {} series", dataset.len());
                self.stats.scale_builds += 1;
                self.stats.line_builds += 1;
                self.stats.path_builds += 1;
                self.colors = Some(config.colors);
                self.curve = Some(config.curve);
                let key = ScalesKey {
                    dataset: dataset.clone(),
                    width: frame.width,
                    height: frame.height,
                    stacked: config.stacked,
                    options: config.scale,
                };
                (key, frame)
            }
        };

        if self.colors != Some(config.colors) {
            frame.lines = lines_for(dataset, &frame.scales, config)?;
            frame.paths = paths_for(&frame.lines, config.curve);
            log::debug!("memo: recolored {} lines", frame.lines.len());
            self.stats.line_builds += 1;
            self.stats.path_builds += 1;
            self.colors = Some(config.colors);
            self.curve = Some(config.curve);
        } else if self.curve != Some(config.curve) {
            frame.paths = paths_for(&frame.lines, config.curve);
            log::debug!("memo: re-interpolated paths with `{}`", config.curve);
            self.stats.path_builds += 1;
            self.curve = Some(config.curve);
        }

        self.scales_key = Some(key);
        Ok(self.frame.insert(frame))
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;
    use crate::dataset::Series;

    fn dataset() -> Dataset {
        Dataset::new(vec![
            Series::from_pairs("a", [(0, 1), (1, 3), (2, 2)]),
            Series::from_pairs("b", [(0, 2), (1, 1), (2, 4)]),
        ])
    }

    #[test]
    fn unchanged_inputs_reuse_the_frame() {
        let mut memo = LineChartMemo::new();
        let ds = dataset();
        let config = LineChartConfig::new(200.0, 100.0);
        let first = memo.update(&ds, &config).unwrap().clone();
        let second = memo.update(&ds, &config).unwrap().clone();
        assert_eq!(first, second);
        assert_eq!(
            memo.stats(),
            MemoStats {
                scale_builds: 1,
                line_builds: 1,
                path_builds: 1
            }
        );
    }

    #[test]
    fn curve_change_only_reinterpolates() {
        let mut memo = LineChartMemo::new();
        let ds = dataset();
        let config = LineChartConfig::new(200.0, 100.0);
        memo.update(&ds, &config).unwrap();
        memo.update(&ds, &config.with_curve(Curve::MonotoneX)).unwrap();
        assert_eq!(
            memo.stats(),
            MemoStats {
                scale_builds: 1,
                line_builds: 1,
                path_builds: 2
            }
        );
    }

    #[test]
    fn color_change_regenerates_lines() {
        let mut memo = LineChartMemo::new();
        let ds = dataset();
        let config = LineChartConfig::new(200.0, 100.0);
        let before = memo.update(&ds, &config).unwrap().lines[0].color;
        let after = memo
            .update(&ds, &config.with_colors(ColorScheme::Category10))
            .unwrap()
            .lines[0]
            .color;
        assert_ne!(before, after);
        assert_eq!(memo.stats().scale_builds, 1);
        assert_eq!(memo.stats().line_builds, 2);
    }

    #[test]
    fn stacking_or_data_change_rebuilds_scales() {
        let mut memo = LineChartMemo::new();
        let mut ds = dataset();
        let config = LineChartConfig::new(200.0, 100.0);
        memo.update(&ds, &config).unwrap();
        memo.update(&ds, &config.with_stacked(true)).unwrap();
        ds = Dataset::new(vec![Series::from_pairs("c", [(0, 9)])]);
        let frame = memo.update(&ds, &config.with_stacked(true)).unwrap();
        assert_eq!(frame.lines.len(), 1);
        assert_eq!(memo.stats().scale_builds, 3);
    }

    #[test]
    fn failed_update_clears_the_cache_and_forces_a_rebuild() {
        let mut memo = LineChartMemo::new();
        let config = LineChartConfig::new(200.0, 100.0);
        memo.update(&dataset(), &config).unwrap();
        assert_eq!(
            memo.update(&Dataset::default(), &config).err(),
            Some(ChartError::EmptyDataset)
        );
        assert!(memo.frame().is_none());
        memo.update(&dataset(), &config).unwrap();
        assert_eq!(memo.stats().scale_builds, 2);
    }

    #[test]
    fn reverting_to_an_earlier_config_after_an_error_rebuilds() {
        let mut memo = LineChartMemo::new();
        let ds = dataset();
        let config = LineChartConfig::new(200.0, 100.0);
        memo.update(&ds, &config).unwrap();
        let tiny = LineChartConfig::new(0.0, 100.0);
        assert!(matches!(
            memo.update(&ds, &tiny),
            Err(ChartError::InvalidDimensions { .. })
        ));
        let frame = memo.update(&ds, &config).unwrap();
        assert_eq!(frame.width, 200.0);
        assert_eq!(memo.stats().scale_builds, 2);
    }
}
