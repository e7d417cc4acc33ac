use std::path::{Path, PathBuf};

use logit_core::{Float, LogitError, Result};
use plotters::prelude::*;
use tracing::info;

/// Something that can draw a cost-vs-iteration curve.
pub trait CostVisualizer {
    /// Draws `costs[i]` against iteration index `i`.
    ///
    /// `iterations` must equal `costs.len()`.
    fn render(&self, costs: &[Float], iterations: usize) -> Result<()>;
}

/// Writes the cost curve as an SVG line chart.
#[derive(Debug, Clone)]
pub struct SvgCostChart {
    path: PathBuf,
    width: u32,
    height: u32,
}

impl SvgCostChart {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            width: 1200,
            height: 800,
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CostVisualizer for SvgCostChart {
    fn render(&self, costs: &[Float], iterations: usize) -> Result<()> {
        if costs.len() != iterations {
            return Err(LogitError::ShapeMismatch {
                expected: format!("Expected {} costs", iterations),
                got: format!("Got {}", costs.len()),
            });
        }
        let (lo, hi) = y_range(costs)?;

        let root = SVGBackend::new(&self.path, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE).map_err(plot_error)?;

        let mut chart = ChartBuilder::on(&root)
            .caption("Cost vs Iterations", ("sans-serif", 28))
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(70)
            .build_cartesian_2d(0..iterations.max(1), lo..hi)
            .map_err(plot_error)?;

        chart
            .configure_mesh()
            .x_desc("Iterations")
            .y_desc("Cost")
            .bold_line_style(BLUE.mix(0.3))
            .light_line_style(BLUE.mix(0.1))
            .draw()
            .map_err(plot_error)?;

        chart
            .draw_series(LineSeries::new(
                costs.iter().enumerate().map(|(i, &c)| (i, c)),
                &RED,
            ))
            .map_err(plot_error)?;

        root.present().map_err(plot_error)?;

        info!(path = %self.path.display(), points = costs.len(), "cost chart written");
        Ok(())
    }
}

/// Padded vertical range covering every cost, `0..1` for an empty trace.
fn y_range(costs: &[Float]) -> Result<(Float, Float)> {
    if costs.is_empty() {
        return Ok((0.0, 1.0));
    }
    let mut lo = Float::INFINITY;
    let mut hi = Float::NEG_INFINITY;
    for &c in costs {
        if !c.is_finite() {
            return Err(LogitError::InvalidValue {
                message: format!("Cannot plot non-finite cost {}", c),
            });
        }
        lo = lo.min(c);
        hi = hi.max(c);
    }

    let span = hi - lo;
    let pad = if span > 0.0 { span * 0.05 } else { lo.abs().max(1.0) * 0.05 };
    Ok((lo - pad, hi + pad))
}

fn plot_error<E: std::fmt::Display>(err: E) -> LogitError {
    LogitError::Plot(err.to_string())
}
