//! Rendering planned frames, sequentially or on a thread pool.

use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::config::{RenderThreading, RunConfig};
use crate::data::table::read_records_path;
use crate::foundation::error::{HeatmapError, HeatmapResult};
use crate::map::MapContext;
use crate::render::label::LabelRenderer;
use crate::sequence::frames::{FrameIndex, FramePlan};

/// Draw one planned frame onto a fresh canvas and write it to `plan.path`.
///
/// The caption goes down first; cells are filled on top of it in record order. Records
/// without a color are skipped.
pub fn render_frame(
    map: &MapContext,
    labels: &LabelRenderer,
    plan: &FramePlan<'_>,
) -> HeatmapResult<PathBuf> {
    let frame = plan.frame;
    tracing::info!("image: {} label: {}", plan.seq, frame.label().unwrap_or("null"));

    let mut canvas = map.new_canvas()?;
    if let Some(label) = frame.label() {
        canvas.add_label(labels, label)?;
    }
    for record in frame.records() {
        if let Some(color) = record.color {
            canvas.fill_cell(
                map.projection(),
                record.latitude,
                record.longitude,
                record.width,
                color,
            );
        }
    }

    tracing::info!("writing {}", plan.path.display());
    canvas.write(&plan.path)?;
    Ok(plan.path.clone())
}

/// Render every frame of `index` into `out_dir`, in key order.
///
/// Returns the written paths in frame order, whether or not frames were rendered in parallel.
pub fn render_all(
    index: &FrameIndex,
    map: &MapContext,
    labels: &LabelRenderer,
    out_dir: &Path,
    threading: &RenderThreading,
) -> HeatmapResult<Vec<PathBuf>> {
    let plan = index.plan(out_dir);
    if plan.is_empty() {
        tracing::warn!("data table has no rows; no frames written");
        return Ok(Vec::new());
    }

    if !threading.parallel {
        return plan
            .iter()
            .map(|p| render_frame(map, labels, p))
            .collect();
    }

    let pool = build_thread_pool(threading.threads)?;
    tracing::debug!(threads = pool.current_num_threads(), "rendering frames in parallel");
    // Stops handing out frames at the first error; results keep plan order.
    pool.install(|| {
        plan.par_iter()
            .map(|p| render_frame(map, labels, p))
            .collect::<HeatmapResult<Vec<_>>>()
    })
}

/// Load the table, group it into frames, and render them all.
pub fn run(config: &RunConfig) -> HeatmapResult<Vec<PathBuf>> {
    config.validate()?;

    let records = read_records_path(&config.data_path, &config.color_scale)?;
    let index = FrameIndex::load(records)?;
    tracing::info!(frames = index.len(), naming = ?index.naming(), "loaded data table");

    let map = MapContext::open(&config.map_path, config.bounds)?;
    let labels = LabelRenderer::new(config.label.clone())?;

    std::fs::create_dir_all(&config.out_dir).map_err(|e| {
        HeatmapError::image_write(format!(
            "create output dir '{}': {e}",
            config.out_dir.display()
        ))
    })?;

    render_all(&index, &map, &labels, &config.out_dir, &config.threading)
}

fn build_thread_pool(threads: Option<usize>) -> HeatmapResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(HeatmapError::config("thread count must be >= 1 when set"));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| HeatmapError::render(format!("failed to build rayon thread pool: {e}")))
}
