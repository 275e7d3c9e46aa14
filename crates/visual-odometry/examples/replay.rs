//! Example: replay an image sequence through `VisualOdometry`.
//!
//! Reads every PNG/JPEG in a directory in lexical file-name order, feeds the
//! frames to one odometry instance and prints per-frame speed and turn rate.
//! Results are written to a JSON file; the last line of stdout is a
//! dead-reckoned summary obtained by integrating both rates over `1 / hz`.
//!
//! Run from the workspace root:
//!   cargo run -p visual-odometry --example replay -- --help
//!   RUST_LOG=vo_odometry=trace cargo run -p visual-odometry --example replay -- --input frames/

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use image::ImageReader;
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use visual_odometry::{FrameView, Motion, OdometryConfig, PixelFormat, VisualOdometry};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(about = "Estimate speed and turn rate over a directory of frames")]
struct Args {
    /// Directory holding the frame images
    #[arg(long)]
    input: PathBuf,

    /// JSON odometry config; missing fields use built-in defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Decode frames as 8-bit greyscale instead of RGB
    #[arg(long, default_value_t = false)]
    greyscale: bool,

    /// Stop after this many frames
    #[arg(long)]
    max_frames: Option<usize>,

    /// Output JSON path (default: <input>/odometry.json)
    #[arg(long)]
    out: Option<PathBuf>,
}

// ── JSON DTOs ─────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct FrameResult {
    frame: usize,
    file: String,
    #[serde(flatten)]
    motion: Motion,
    /// Wall-clock time for this frame's odometry update, in milliseconds.
    elapsed_ms: f64,
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn list_frames(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).with_context(|| format!("reading {}", dir.display()))? {
        let path = entry?.path();
        let is_image = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| matches!(e.to_ascii_lowercase().as_str(), "png" | "jpg" | "jpeg"));
        if is_image {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn load_config(path: Option<&Path>) -> Result<OdometryConfig> {
    let Some(path) = path else {
        return Ok(OdometryConfig::default());
    };
    let text =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    OdometryConfig::from_json_str(&text).with_context(|| format!("parsing {}", path.display()))
}

/// Decoded frame bytes with their pixel size.
fn decode(path: &Path, format: PixelFormat) -> Result<(Vec<u8>, usize, usize)> {
    let img = ImageReader::open(path)
        .with_context(|| format!("opening {}", path.display()))?
        .decode()
        .with_context(|| format!("decoding {}", path.display()))?;
    let (w, h) = (img.width() as usize, img.height() as usize);
    let data = match format {
        PixelFormat::Grey => img.into_luma8().into_raw(),
        PixelFormat::Rgb => img.into_rgb8().into_raw(),
    };
    Ok((data, w, h))
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("replay=info,vo_odometry=info")),
        )
        .init();

    let args = Args::parse();
    let cfg = load_config(args.config.as_deref())?;
    let format = PixelFormat::from_greyscale(args.greyscale);

    let mut files = list_frames(&args.input)?;
    if let Some(n) = args.max_frames {
        files.truncate(n);
    }
    if files.is_empty() {
        bail!("no PNG/JPEG frames found in {}", args.input.display());
    }
    info!(frames = files.len(), ?format, "replaying {}", args.input.display());

    let (data, w, h) = decode(&files[0], format)?;
    let mut vo = VisualOdometry::new(&cfg, w, h).context("building visual odometry")?;
    info!(
        translation = ?vo.translation_region(),
        rotation = ?vo.rotation_region(),
        "config: fov={:.1} deg, hz={:.1}, scaling={:.1}, max={:.2}",
        cfg.calibration.camera_fov_deg,
        cfg.calibration.camera_hz,
        cfg.calibration.trans_scaling,
        cfg.calibration.trans_max
    );

    let dt = 1.0 / cfg.calibration.camera_hz;
    let mut heading = 0.0f64;
    let mut distance = 0.0f64;
    let mut results = Vec::with_capacity(files.len());
    let total_start = Instant::now();

    let mut first = Some((data, w, h));
    for (idx, path) in files.iter().enumerate() {
        let (data, fw, fh) = match first.take() {
            Some(decoded) => decoded,
            None => decode(path, format)?,
        };
        if !vo.fits_frame(fw, fh) {
            let (w, h) = vo.image_size();
            bail!(
                "{} is {fw}x{fh}, too small for the regions configured on the {w}x{h} stream",
                path.display()
            );
        }
        let frame = FrameView::new(&data, fw, fh, format)
            .with_context(|| format!("viewing {}", path.display()))?;

        let t0 = Instant::now();
        let motion = vo.on_image(&frame);
        let elapsed_ms = t0.elapsed().as_secs_f64() * 1e3;

        heading += motion.rot_rate * dt;
        distance += motion.trans_speed * dt;

        let file = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        println!(
            "  frame {idx:5} {file}: vtrans={:7.3} vrot={:+8.4} rad/s  ({elapsed_ms:.3} ms)",
            motion.trans_speed, motion.rot_rate
        );
        debug!(frame = idx, heading, distance, "integrated");

        results.push(FrameResult {
            frame: idx,
            file,
            motion,
            elapsed_ms,
        });
    }

    let total_ms = total_start.elapsed().as_secs_f64() * 1e3;
    println!(
        "{} frames in {total_ms:.1} ms: distance={distance:.3}, heading={:+.2} deg",
        results.len(),
        heading.to_degrees()
    );

    let out_path = args.out.unwrap_or_else(|| args.input.join("odometry.json"));
    let out_file = std::fs::File::create(&out_path)
        .with_context(|| format!("creating {}", out_path.display()))?;
    serde_json::to_writer_pretty(out_file, &results)
        .with_context(|| format!("writing JSON to {}", out_path.display()))?;

    info!("results written to {}", out_path.display());
    Ok(())
}
