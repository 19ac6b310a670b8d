use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use crossline_core::geom::{Point, Segment};
use crossline_core::input::Script;
use crossline_core::intersect::intersect;
use crossline_core::report::{ReportConfig, Session, SessionReport};
use crossline_core::surface::{DrawCommand, RecordingSurface};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "crossline")]
#[command(about = "Replay click sequences into segments and report where their lines cross.")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Feed a click script (.json or line-based text) through the segment controller.
    Replay {
        script: PathBuf,
        #[arg(long)]
        report: Option<PathBuf>,
        /// Include every draw command issued during the replay.
        #[arg(long)]
        trace: bool,
        #[arg(long, default_value_t = 1.0)]
        stroke_tolerance: f64,
    },
    /// Intersect the lines through (x1,y1)-(x2,y2) and (x3,y3)-(x4,y4).
    #[command(allow_negative_numbers = true)]
    Intersect {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x3: f64,
        y3: f64,
        x4: f64,
        y4: f64,
    },
}

#[derive(Serialize)]
struct ReplayOutput<'a> {
    #[serde(flatten)]
    report: &'a SessionReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    draw_commands: Option<&'a [DrawCommand]>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Replay {
            script,
            report,
            trace,
            stroke_tolerance,
        } => replay(&script, report.as_deref(), trace, stroke_tolerance),
        Command::Intersect {
            x1,
            y1,
            x2,
            y2,
            x3,
            y3,
            x4,
            y4,
        } => {
            let a = Segment::new(Point::new(x1, y1), Point::new(x2, y2));
            let b = Segment::new(Point::new(x3, y3), Point::new(x4, y4));
            let p = intersect(&a, &b).with_context(|| format!("intersect {a:?} with {b:?}"))?;
            println!("{}", serde_json::to_string(&p).context("serialize point")?);
            Ok(())
        }
    }
}

fn replay(input: &Path, report: Option<&Path>, trace: bool, stroke_tolerance: f64) -> Result<()> {
    ensure_input_file(input)?;
    if !(stroke_tolerance.is_finite() && stroke_tolerance >= 0.0) {
        bail!("--stroke-tolerance must be a non-negative number, got {stroke_tolerance}");
    }

    let src = std::fs::read_to_string(input).with_context(|| format!("read script: {input:?}"))?;
    let ext = input
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    let script = match ext.as_str() {
        "json" => Script::from_json(&src),
        _ => Script::from_text(&src),
    }
    .with_context(|| format!("parse script: {input:?}"))?;
    info!(events = script.len(), path = %input.display(), "loaded script");

    let mut session = Session::new();
    let mut surface = RecordingSurface::new();
    session.replay(&script, &mut surface);

    let cfg = ReportConfig { stroke_tolerance };
    let report_data = session.report(&cfg);
    let output = ReplayOutput {
        report: &report_data,
        draw_commands: trace.then_some(surface.commands.as_slice()),
    };
    let json = serde_json::to_string_pretty(&output).context("serialize report")?;

    if let Some(path) = report {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).ok();
        }
        std::fs::write(path, &json).with_context(|| format!("write report: {path:?}"))?;
        info!(path = %path.display(), "wrote report");
    } else {
        println!("{json}");
    }

    Ok(())
}

fn ensure_input_file(input: &Path) -> Result<()> {
    match std::fs::metadata(input) {
        Ok(meta) => {
            if meta.is_file() {
                Ok(())
            } else {
                bail!("input is not a file: {input:?}");
            }
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            bail!("input not found: {input:?} (cwd: {cwd:?}).");
        }
        Err(err) => Err(err).with_context(|| format!("stat input: {input:?}")),
    }
}
