//! The generate → save → load → render pipeline behind the binary.

use std::ffi::OsString;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use advect_codec::{load, save};
use advect_expr::Expression;
use advect_gen::{generate, Preset, Sample, SampleFunction};
use anyhow::{anyhow, Context, Result};
use tracing::{debug, info};

use crate::cli::Cli;
use crate::render::{Renderer, SummaryRenderer, SvgQuiver};

/// Where a generated field comes from.
enum FieldSource {
    Expression(Expression),
    Preset(Preset),
}

impl FieldSource {
    fn from_cli(cli: &Cli) -> Result<Option<Self>> {
        if let Some(src) = &cli.expr {
            let expr = Expression::parse(src)
                .map_err(|e| anyhow!("invalid expression: {}", e.with_source(src)))?;
            return Ok(Some(Self::Expression(expr)));
        }
        Ok(cli.preset.map(Self::Preset))
    }

    fn describe(&self) -> String {
        match self {
            Self::Expression(expr) => format!("expression \"{expr}\""),
            Self::Preset(preset) => format!("preset {preset}"),
        }
    }
}

impl SampleFunction for FieldSource {
    fn sample(&self, x: f64, y: f64) -> Sample {
        match self {
            Self::Expression(expr) => expr.sample(x, y),
            Self::Preset(preset) => preset.sample(x, y),
        }
    }
}

/// Default plot location: the field path with `.svg` appended.
fn default_svg_path(path: &Path) -> PathBuf {
    let mut s: OsString = path.as_os_str().to_owned();
    s.push(".svg");
    PathBuf::from(s)
}

pub fn run(cli: &Cli) -> Result<()> {
    let config = cli.render_config();
    config.validate().context("invalid plot options")?;

    if let Some(source) = FieldSource::from_cli(cli)? {
        let grid = generate(&source)
            .with_context(|| format!("failed to generate field from {}", source.describe()))?;
        save(&cli.path, &grid)
            .with_context(|| format!("failed to write {}", cli.path.display()))?;
        info!(path = %cli.path.display(), source = %source.describe(), "wrote field");
    }

    let grid = load(&cli.path).with_context(|| format!("failed to read {}", cli.path.display()))?;
    SummaryRenderer::new().render(&grid)?;

    if cli.no_render {
        debug!("plot disabled");
        return Ok(());
    }

    let out = cli
        .svg
        .clone()
        .unwrap_or_else(|| default_svg_path(&cli.path));
    let file = File::create(&out).with_context(|| format!("failed to create {}", out.display()))?;
    let mut quiver = SvgQuiver::new(BufWriter::new(file), config);
    quiver
        .render(&grid)
        .with_context(|| format!("failed to write {}", out.display()))?;
    let (arrows, skipped) = (quiver.arrows(), quiver.skipped());
    quiver
        .finish()
        .with_context(|| format!("failed to write {}", out.display()))?;
    info!(path = %out.display(), arrows, skipped, "wrote plot");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use advect_core::{Grid, Vector3, FILE_SIZE};
    use clap::Parser;
    use tempfile::tempdir;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("advect").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn svg_path_appends_extension() {
        assert_eq!(
            default_svg_path(Path::new("out/wind.advect")),
            PathBuf::from("out/wind.advect.svg")
        );
    }

    #[test]
    fn generate_writes_field_and_plot() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("vortex.advect");
        let p = path.to_str().unwrap();

        run(&cli(&[p, "--preset", "vortex"])).unwrap();

        assert_eq!(std::fs::metadata(&path).unwrap().len(), FILE_SIZE as u64);
        assert_eq!(load(&path).unwrap(), generate(&Preset::Vortex).unwrap());
        let svg = std::fs::read_to_string(dir.path().join("vortex.advect.svg")).unwrap();
        assert!(svg.contains("<line"));
    }

    #[test]
    fn expression_writes_expected_field() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("f.advect");
        let svg = dir.path().join("plot.svg");

        run(&cli(&[
            path.to_str().unwrap(),
            "-e",
            "x, y, 1",
            "--svg",
            svg.to_str().unwrap(),
        ]))
        .unwrap();

        let grid = load(&path).unwrap();
        assert_eq!(grid.get(127, 0), Some(Vector3::new(1.0, 0.0, 1.0)));
        assert!(svg.exists());
        assert!(!dir.path().join("f.advect.svg").exists());
    }

    #[test]
    fn plots_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("existing.advect");
        save(&path, &Grid::filled(Vector3::from_xy(1.0, 1.0))).unwrap();

        run(&cli(&[path.to_str().unwrap()])).unwrap();
        assert!(dir.path().join("existing.advect.svg").exists());
    }

    #[test]
    fn missing_file_fails_without_plot() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.advect");

        let err = run(&cli(&[path.to_str().unwrap()])).unwrap_err();
        assert!(err.to_string().contains("failed to read"), "{err:#}");
        assert!(!dir.path().join("absent.advect.svg").exists());
    }

    #[test]
    fn bad_expression_writes_nothing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.advect");

        let err = run(&cli(&[path.to_str().unwrap(), "-e", "x, z"])).unwrap_err();
        assert!(err.to_string().contains("invalid expression"), "{err:#}");
        assert!(!path.exists());
    }

    #[test]
    fn wrong_arity_writes_nothing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scalar.advect");

        let err = run(&cli(&[path.to_str().unwrap(), "-e", "x * y"])).unwrap_err();
        assert!(format!("{err:#}").contains("failed to generate"), "{err:#}");
        assert!(!path.exists());
    }

    #[test]
    fn no_render_skips_plot() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("quiet.advect");

        run(&cli(&[path.to_str().unwrap(), "-p", "zero", "--no-render"])).unwrap();
        assert!(path.exists());
        assert!(!dir.path().join("quiet.advect.svg").exists());
    }

    #[test]
    fn invalid_options_fail_before_writing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("never.advect");

        let err = run(&cli(&[path.to_str().unwrap(), "-p", "sink", "--stride", "0"])).unwrap_err();
        assert!(err.to_string().contains("invalid plot options"), "{err:#}");
        assert!(!path.exists());
    }
}
