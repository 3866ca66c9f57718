//! GESTURA Replay - feed a landmark recording through the gesture pipeline
//!
//! Prints the gesture and displayed transform after every detector frame.
//! With `--structure`, pointing gestures are resolved against the structure's
//! atoms and the hovered atom is reported.

mod recording;
mod report;

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use gestura_core::FrameTime;
use gestura_runtime::telemetry::{self, LogFormat, TelemetryConfig};
use gestura_runtime::{GesturePipeline, PipelineConfig};
use gestura_select::{resolve_pointer, AtomPicker, Camera, HoverTracker};
use gestura_structure::{parse_pdb, Structure};
use tracing::info;

use crate::recording::{frame_interval, read_recording};
use crate::report::FrameReport;

#[derive(Parser, Debug)]
#[command(version, about = "Replay recorded hand landmarks through the gesture pipeline")]
struct Args {
    /// JSON-lines recording, one landmark frame per line ("-" for stdin)
    input: PathBuf,

    /// Pipeline configuration (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// PDB file to resolve pointing gestures against
    #[arg(short, long)]
    structure: Option<PathBuf>,

    /// Render ticks per detector frame
    #[arg(long, default_value_t = 2)]
    renders_per_frame: u32,

    /// Detector rate assumed for frames without timestamps
    #[arg(long, default_value_t = 30.0)]
    fps: f64,

    /// Viewport width / height for pointer rays
    #[arg(long, default_value_t = 16.0 / 9.0)]
    aspect: f32,

    /// Emit one JSON object per frame instead of text
    #[arg(long)]
    json: bool,

    /// Structured JSON logs on stderr
    #[arg(long)]
    log_json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut telemetry_config = TelemetryConfig::from_env().with_default_filter("warn,gestura=info");
    if args.log_json {
        telemetry_config.format = LogFormat::Json;
    }
    telemetry::init(&telemetry_config)?;

    let config = match &args.config {
        Some(path) => PipelineConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => PipelineConfig::default(),
    };
    let structure = args.structure.as_deref().map(load_structure).transpose()?;
    let frames = read_recording(&args.input)?;

    info!(
        frames = frames.len(),
        atoms = structure.as_ref().map_or(0, Structure::len),
        "gestura-replay v{} starting",
        env!("CARGO_PKG_VERSION")
    );

    let mut pipeline = GesturePipeline::with_config(config)?;
    let picker = structure.as_ref().map(AtomPicker::new);
    let camera = Camera::default().with_aspect(args.aspect);
    let mut hover = HoverTracker::new();

    let renders = args.renders_per_frame.max(1);
    let nominal = Duration::from_secs_f64(1.0 / args.fps.max(1.0));
    let mut previous: Option<FrameTime> = None;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    for (index, frame) in frames.iter().enumerate() {
        let dt = frame_interval(previous, frame.timestamp, nominal);
        previous = frame.timestamp.or(previous);

        let state = pipeline.ingest(frame);
        let mut transform = pipeline.transform();
        for _ in 0..renders {
            transform = pipeline.render_tick_for(dt / renders);
        }

        let selection = picker
            .as_ref()
            .and_then(|p| resolve_pointer(&state, &camera, &transform, p));
        let hovered = selection.and_then(|s| picker.as_ref()?.label(&s));
        if hover.update(selection) {
            if let Some(label) = &hovered {
                info!(frame = index, "hovering {}", label);
            }
        }

        let report = FrameReport::new(index, &state, &transform, hovered.map(|l| l.to_string()));
        if args.json {
            serde_json::to_writer(&mut out, &report)?;
            writeln!(out)?;
        } else {
            writeln!(out, "{}", report)?;
        }
    }

    let stats = pipeline.stats();
    info!(
        frames = stats.frames_ingested,
        render_ticks = stats.render_ticks,
        grip = stats.grip_frames,
        pinch_zoom = stats.pinch_zoom_frames,
        point = stats.point_frames,
        malformed = stats.malformed_frames,
        hand_losses = stats.hand_losses,
        "replay finished"
    );
    Ok(())
}

fn load_structure(path: &std::path::Path) -> Result<Structure> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let structure = parse_pdb(&text).with_context(|| format!("parsing {}", path.display()))?;
    info!(
        atoms = structure.len(),
        radius = structure.bounding_radius(),
        "structure loaded"
    );
    Ok(structure)
}
