//! Field consumers.
//!
//! A [`Renderer`] receives a decoded grid. Two are provided:
//! [`SummaryRenderer`] logs [`FieldStats`], and [`SvgQuiver`] draws an
//! arrow plot. Cell `(row, col)` is placed at the same normalized
//! coordinate it was sampled at: `x = row / 127` runs left to right and
//! `y = col / 127` runs bottom to top. Only the x/y components are drawn.

use std::io::{self, Write};

use advect_core::{FieldStats, Grid, GRID_DIM};
use advect_gen::MeshGrid;
use tracing::{info, warn};

use crate::config::RenderConfig;

/// A consumer of decoded fields.
pub trait Renderer {
    /// Render one grid.
    fn render(&mut self, grid: &Grid) -> io::Result<()>;
}

/// Logs magnitude statistics and warns about non-finite vectors.
#[derive(Default)]
pub struct SummaryRenderer {
    last: Option<FieldStats>,
}

impl SummaryRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Statistics of the most recently rendered grid.
    pub fn last(&self) -> Option<&FieldStats> {
        self.last.as_ref()
    }
}

impl Renderer for SummaryRenderer {
    fn render(&mut self, grid: &Grid) -> io::Result<()> {
        let stats = FieldStats::compute(grid);
        info!(
            min = ?stats.min_magnitude,
            max = ?stats.max_magnitude,
            mean = ?stats.mean_magnitude,
            zero = stats.zero,
            "field magnitude"
        );
        if let Some((row, col)) = stats.first_non_finite {
            warn!(
                count = stats.non_finite,
                first_row = row,
                first_col = col,
                "field contains non-finite vectors"
            );
        }
        self.last = Some(stats);
        Ok(())
    }
}

/// Writes an SVG quiver plot to any `Write` sink.
pub struct SvgQuiver<W: Write> {
    out: W,
    config: RenderConfig,
    mesh: MeshGrid,
    arrows: usize,
    skipped: usize,
}

impl<W: Write> SvgQuiver<W> {
    pub fn new(out: W, config: RenderConfig) -> Self {
        Self {
            out,
            config,
            mesh: MeshGrid::new(),
            arrows: 0,
            skipped: 0,
        }
    }

    /// Arrows drawn by the last render.
    pub fn arrows(&self) -> usize {
        self.arrows
    }

    /// Sampled cells left out of the last render because a component was
    /// non-finite.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Flush and return the underlying sink.
    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }

    fn sampled(&self) -> impl Iterator<Item = (usize, usize)> {
        let stride = self.config.stride;
        (0..GRID_DIM)
            .step_by(stride)
            .flat_map(move |row| (0..GRID_DIM).step_by(stride).map(move |col| (row, col)))
    }
}

impl<W: Write> Renderer for SvgQuiver<W> {
    fn render(&mut self, grid: &Grid) -> io::Result<()> {
        self.arrows = 0;
        self.skipped = 0;

        let size = f64::from(self.config.size);
        let margin = (size / 20.0).round();
        let side = size - 2.0 * margin;
        let spacing = side * self.config.stride as f64 / (GRID_DIM - 1) as f64;

        let planar = |row: usize, col: usize| {
            grid.get(row, col)
                .map(|v| (f64::from(v.x), f64::from(v.y)))
                .filter(|(vx, vy)| vx.is_finite() && vy.is_finite())
        };
        let longest = self
            .sampled()
            .filter_map(|(row, col)| planar(row, col))
            .map(|(vx, vy)| vx.hypot(vy))
            .filter(|len| len.is_finite())
            .fold(0.0f64, f64::max);
        let scale = if longest > 0.0 {
            spacing * self.config.arrow_scale / longest
        } else {
            0.0
        };

        writeln!(self.out, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            self.out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#
        )?;
        writeln!(
            self.out,
            r##"  <defs><marker id="head" markerWidth="6" markerHeight="6" refX="5" refY="3" orient="auto"><path d="M0,0 L6,3 L0,6 z" fill="#1f4e79"/></marker></defs>"##
        )?;
        writeln!(
            self.out,
            r##"  <rect width="{size}" height="{size}" fill="#ffffff"/>"##
        )?;
        writeln!(
            self.out,
            r##"  <rect x="{margin}" y="{margin}" width="{side}" height="{side}" fill="none" stroke="#cccccc"/>"##
        )?;
        writeln!(
            self.out,
            r##"  <g stroke="#1f4e79" stroke-width="1" marker-end="url(#head)">"##
        )?;

        let cells: Vec<(usize, usize)> = self.sampled().collect();
        for (row, col) in cells {
            let Some((vx, vy)) = planar(row, col) else {
                self.skipped += 1;
                continue;
            };
            let x1 = margin + self.mesh.x(row, col) * side;
            let y1 = margin + (1.0 - self.mesh.y(row, col)) * side;
            let x2 = x1 + vx * scale;
            let y2 = y1 - vy * scale;
            if !(x2.is_finite() && y2.is_finite()) || (x1 == x2 && y1 == y2) {
                continue;
            }
            writeln!(
                self.out,
                r#"    <line x1="{x1:.2}" y1="{y1:.2}" x2="{x2:.2}" y2="{y2:.2}"/>"#
            )?;
            self.arrows += 1;
        }

        writeln!(self.out, "  </g>")?;
        writeln!(self.out, "</svg>")?;
        Ok(())
    }
}
