//! 折线图渲染

use std::ops::Range;
use std::path::PathBuf;

use plotters::prelude::*;
use tracing::info;

use super::table::{Column, ContentionTable, GroupBy, Series};
use crate::{Error, Result};

/// 一张按类别分组的折线图
#[derive(Debug, Clone, PartialEq)]
pub struct LinePlotSpec {
    pub x: Column,
    pub y: Column,
    pub group_by: GroupBy,
    pub output: PathBuf,
}

/// 图表渲染协作者
pub trait ChartRenderer {
    fn render_line_plot(&mut self, table: &ContentionTable, spec: &LinePlotSpec) -> Result<()>;
}

/// 基于 plotters 的 PNG 渲染
#[derive(Debug, Clone, Copy)]
pub struct PlottersRenderer {
    pub width: u32,
    pub height: u32,
}

impl Default for PlottersRenderer {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}

/// 只有编译了字体后端（`ttf` feature）时才绘制坐标轴标签与图例；
/// plotters 的内置回退字体只能估算文字尺寸，绘制时会直接 panic。
const DRAW_TEXT: bool = cfg!(feature = "ttf");

fn render_err<E: std::fmt::Display>(err: E) -> Error {
    Error::Render(err.to_string())
}

impl ChartRenderer for PlottersRenderer {
    #[tracing::instrument(skip(self, table), fields(rows = table.len()))]
    fn render_line_plot(&mut self, table: &ContentionTable, spec: &LinePlotSpec) -> Result<()> {
        let series = table.series(spec.x, spec.y, spec.group_by);
        let (x_range, y_range) = axis_ranges(&series);

        let root = BitMapBackend::new(spec.output.as_path(), (self.width, self.height))
            .into_drawing_area();
        root.fill(&WHITE).map_err(render_err)?;

        // 没有字体后端时标签区为 0：plotters 不会为坐标轴分配标签区域，也就不会绘制任何文字
        let (x_label_area, y_label_area) = if DRAW_TEXT { (40, 60) } else { (0, 0) };
        let mut chart = ChartBuilder::on(&root)
            .margin(10)
            .x_label_area_size(x_label_area)
            .y_label_area_size(y_label_area)
            .build_cartesian_2d(x_range, y_range)
            .map_err(render_err)?;

        chart
            .configure_mesh()
            .x_desc(spec.x.name())
            .y_desc(spec.y.name())
            .draw()
            .map_err(render_err)?;

        for (i, s) in series.iter().enumerate() {
            let color = Palette99::pick(i).to_rgba();
            let anno = chart
                .draw_series(LineSeries::new(s.points.iter().copied(), color.stroke_width(2)))
                .map_err(render_err)?;
            if DRAW_TEXT {
                anno.label(format!("{}={}", spec.group_by.name(), s.label))
                    .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
            }
        }

        if DRAW_TEXT {
            chart
                .configure_series_labels()
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK)
                .draw()
                .map_err(render_err)?;
        }

        root.present().map_err(render_err)?;
        info!(output = %spec.output.display(), series = series.len(), "图表已保存");
        Ok(())
    }
}

/// 所有折线的包围盒，上下各留 5% 余量；空表或退化区间回退到可绘制的范围。
fn axis_ranges(series: &[Series]) -> (Range<f64>, Range<f64>) {
    let points = series.iter().flat_map(|s| s.points.iter());
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for &(x, y) in points {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }
    (pad(x_min, x_max), pad(y_min, y_max))
}

fn pad(min: f64, max: f64) -> Range<f64> {
    if !min.is_finite() || !max.is_finite() {
        return 0.0..1.0;
    }
    if min == max {
        return (min - 1.0)..(max + 1.0);
    }
    let margin = (max - min) * 0.05;
    (min - margin)..(max + margin)
}
