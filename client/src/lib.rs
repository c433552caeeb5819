//! **client**
//!
//! Headless driver that replays pointer input against a scene and writes
//! the rendered frames to disk.
#![deny(
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces
)]


// Crates ---------------------------------------------------------------------
#[macro_use]
extern crate log;
#[macro_use]
extern crate anyhow;
extern crate clock_ticks;
extern crate env_logger;
extern crate engine;
extern crate renderer;
extern crate toml;


// STD Dependencies -----------------------------------------------------------
use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;


// External Dependencies ------------------------------------------------------
use anyhow::{Context, Result};


// Internal Dependencies ------------------------------------------------------
use engine::{InputSource, Scene, SceneConfig};
use renderer::Renderer;


// Modules --------------------------------------------------------------------
mod client;
mod logger;
mod script;


// Re-Exports -----------------------------------------------------------------
pub use self::client::*;
pub use self::logger::*;
pub use self::script::*;


// Options --------------------------------------------------------------------
#[derive(Debug, Clone)]
pub struct Options {
    /// Directory receiving `frame_NNNNN.png` files, nothing is written if unset.
    pub output: Option<PathBuf>,
    /// Write every n-th frame, the last frame is always written.
    pub every: u64,
    pub max_frames: Option<u64>,
    pub normals: bool,
    /// Sleep between frames to hold the configured frame rate.
    pub realtime: bool
}

impl Default for Options {
    fn default() -> Options {
        Options {
            output: None,
            every: 1,
            max_frames: None,
            normals: false,
            realtime: false
        }
    }
}


// Summary --------------------------------------------------------------------
#[derive(Debug, Clone, Default)]
pub struct Summary {
    pub frames: u64,
    pub hits: usize,
    pub regenerations: usize,
    /// Length of the replayed session at the configured frame rate.
    pub scene_time_ms: u64,
    pub written: Vec<PathBuf>
}


// Client Runner --------------------------------------------------------------
pub fn run<I: InputSource>(config: &SceneConfig, mut input: I, options: &Options) -> Result<Summary> {

    if options.every == 0 {
        bail!("--every must be at least 1");
    }

    let scene = Scene::new(config).context("Invalid scene configuration")?;
    let mut client = Client::new(scene, options.normals);
    let mut renderer = Renderer::new(config.width, config.height);

    if let Some(ref dir) = options.output {
        fs::create_dir_all(dir).with_context(|| {
            format!("Failed to create output directory {}", dir.display())
        })?;
    }

    let frame_ms = 1000.0 / f64::from(config.fps);
    info!(
        "[Client] Session started: {}x{} canvas, {} rays, max length {}, {} fps.",
        config.width, config.height, config.ray_count, config.max_ray_length, config.fps
    );

    let mut summary = Summary::default();
    let mut pending: Option<u64> = None;
    loop {

        if let Some(max) = options.max_frames {
            if summary.frames >= max {
                break;
            }
        }

        let pointer = match input.poll() {
            Some(pointer) => pointer,
            None => break
        };

        let t = clock_ticks::precise_time_ms();
        client.update(&pointer);

        renderer.begin();
        client.render(&mut renderer);
        renderer.end();

        let hits = client.frame().hit_count();
        summary.hits += hits;
        let elapsed = clock_ticks::precise_time_ms() - t;
        debug!(
            "[Client] Frame #{} at {}ms evaluated in {}ms, rendered in {}ms ({} hits).",
            summary.frames,
            scene_time_ms(summary.frames, frame_ms),
            client.last_update_ms(),
            elapsed,
            hits
        );

        if options.output.is_some() {
            if summary.frames % options.every == 0 {
                summary.written.push(save_frame(&renderer, options, summary.frames)?);
                pending = None;

            } else {
                pending = Some(summary.frames);
            }
        }

        summary.frames += 1;

        if options.realtime {
            let budget = frame_ms.round() as u64;
            let spent = clock_ticks::precise_time_ms() - t;
            if spent < budget {
                thread::sleep(Duration::from_millis(budget - spent));
            }
        }

    }

    // The last frame is always on disk
    if let Some(frame) = pending {
        summary.written.push(save_frame(&renderer, options, frame)?);
    }

    summary.regenerations = client.scene().regenerations();
    summary.scene_time_ms = scene_time_ms(summary.frames, frame_ms);
    info!(
        "[Client] Session ended after {} frames ({}ms at {} fps), {} hits, {} field regenerations, {} frames written.",
        summary.frames, summary.scene_time_ms, config.fps, summary.hits,
        summary.regenerations, summary.written.len()
    );

    Ok(summary)

}

pub fn frame_path(dir: &Path, frame: u64) -> PathBuf {
    dir.join(format!("frame_{:05}.png", frame))
}

pub fn load_config(path: &Path) -> Result<SceneConfig> {
    let text = fs::read_to_string(path).with_context(|| {
        format!("Failed to read config {}", path.display())
    })?;
    SceneConfig::from_toml(&text).with_context(|| {
        format!("Failed to parse config {}", path.display())
    })
}

pub fn load_script(path: &Path) -> Result<ScriptedInput> {
    let text = fs::read_to_string(path).with_context(|| {
        format!("Failed to read script {}", path.display())
    })?;
    ScriptedInput::from_toml(&text).with_context(|| {
        format!("Failed to parse script {}", path.display())
    })
}


// Helpers --------------------------------------------------------------------
fn scene_time_ms(frames: u64, frame_ms: f64) -> u64 {
    (frames as f64 * frame_ms).round() as u64
}

fn save_frame(renderer: &Renderer, options: &Options, frame: u64) -> Result<PathBuf> {
    let dir = options.output.as_ref().ok_or_else(|| anyhow!("No output directory"))?;
    let path = frame_path(dir, frame);
    renderer.save(&path).with_context(|| {
        format!("Failed to write frame {}", path.display())
    })?;
    info!("[Client] Wrote {}.", path.display());
    Ok(path)
}

