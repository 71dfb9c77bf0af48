use advect_gen::Preset;
use clap::Parser;
use std::path::PathBuf;

use crate::config::RenderConfig;

#[derive(Parser, Debug)]
#[command(name = "advect")]
#[command(author, version, about = "Generate and plot .advect vector-field files")]
pub struct Cli {
    /// Field file: read when plotting, overwritten when generating
    pub path: PathBuf,

    /// Generate from an expression over x and y yielding 2 or 3 values,
    /// e.g. "-(y - 0.5), x - 0.5"
    #[arg(short, long, allow_hyphen_values = true, conflicts_with = "preset")]
    pub expr: Option<String>,

    /// Generate a built-in field (zero, uniform, vortex, source, sink,
    /// shear, saddle, fountain)
    #[arg(short, long)]
    pub preset: Option<Preset>,

    /// Where to write the SVG plot [default: PATH with ".svg" appended]
    #[arg(long, value_name = "OUT")]
    pub svg: Option<PathBuf>,

    /// Load and summarize the field without writing a plot
    #[arg(long, conflicts_with = "svg")]
    pub no_render: bool,

    /// Draw an arrow for every N-th row and column
    #[arg(long, default_value_t = RenderConfig::DEFAULT_STRIDE)]
    pub stride: usize,

    /// Arrow length multiplier
    #[arg(long, default_value_t = RenderConfig::DEFAULT_ARROW_SCALE)]
    pub arrow_scale: f64,

    /// Plot width and height in pixels
    #[arg(long, default_value_t = RenderConfig::DEFAULT_SIZE)]
    pub size: u32,
}

impl Cli {
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            stride: self.stride,
            arrow_scale: self.arrow_scale,
            size: self.size,
        }
    }
}
