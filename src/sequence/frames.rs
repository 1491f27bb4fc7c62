//! Grouping records into frames and naming their output files.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::path::{Path, PathBuf};

use crate::data::record::{FileName, Record};
use crate::foundation::error::{HeatmapError, HeatmapResult};

/// Records sharing one frame key, in source order.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    key: String,
    records: Vec<Record>,
}

impl Frame {
    /// Frame key (explicit file name, or label in `auto` mode).
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Records in insertion order; this is also the draw order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Caption taken from the first record.
    pub fn label(&self) -> Option<&str> {
        self.records.first().and_then(|r| r.label.as_deref())
    }

    fn file_name(&self) -> Option<&str> {
        match self.records.first().map(|r| &r.file_name) {
            Some(FileName::Explicit(name)) => Some(name),
            _ => None,
        }
    }
}

/// How output files are named for a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameNaming {
    /// Each frame is written to its explicit file name.
    Explicit,
    /// Frames are written as `0000.png`, `0001.png`, ... in key order.
    AutoNumbered,
}

/// One frame scheduled for rendering.
#[derive(Clone, Debug)]
pub struct FramePlan<'a> {
    /// 0-based position in the animation.
    pub seq: usize,
    /// The frame's records.
    pub frame: &'a Frame,
    /// Output file path.
    pub path: PathBuf,
}

/// Frames keyed by frame key, iterated in lexicographic key order.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameIndex {
    frames: BTreeMap<String, Frame>,
    naming: FrameNaming,
}

impl FrameIndex {
    /// Group records into frames.
    ///
    /// Fails with a config error when explicit and `auto` file names are mixed.
    pub fn load(records: impl IntoIterator<Item = Record>) -> HeatmapResult<Self> {
        let mut frames = BTreeMap::<String, Frame>::new();
        let mut naming: Option<FrameNaming> = None;

        for record in records {
            let this = if record.file_name.is_auto() {
                FrameNaming::AutoNumbered
            } else {
                FrameNaming::Explicit
            };
            match naming {
                None => naming = Some(this),
                Some(prev) if prev != this => {
                    return Err(HeatmapError::config(
                        "cannot mix 'auto' and explicit file names in one data file",
                    ));
                }
                Some(_) => {}
            }

            let key = record.frame_key().to_string();
            match frames.entry(key) {
                Entry::Occupied(mut e) => e.get_mut().records.push(record),
                Entry::Vacant(e) => {
                    let key = e.key().clone();
                    e.insert(Frame {
                        key,
                        records: vec![record],
                    });
                }
            }
        }

        Ok(Self {
            frames,
            naming: naming.unwrap_or(FrameNaming::Explicit),
        })
    }

    /// Naming mode resolved from the records.
    pub fn naming(&self) -> FrameNaming {
        self.naming
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// `true` when there are no frames.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Frames in key order.
    pub fn frames(&self) -> impl Iterator<Item = &Frame> {
        self.frames.values()
    }

    /// Look up one frame by key.
    pub fn get(&self, key: &str) -> Option<&Frame> {
        self.frames.get(key)
    }

    /// Assign sequence numbers and output paths under `out_dir`.
    pub fn plan(&self, out_dir: &Path) -> Vec<FramePlan<'_>> {
        self.frames()
            .enumerate()
            .map(|(seq, frame)| {
                let name = match (self.naming, frame.file_name()) {
                    (FrameNaming::Explicit, Some(name)) => name.to_string(),
                    _ => auto_file_name(seq),
                };
                FramePlan {
                    seq,
                    frame,
                    path: out_dir.join(name),
                }
            })
            .collect()
    }
}

/// Zero-padded sequence file name, e.g. `0007.png`.
pub fn auto_file_name(seq: usize) -> String {
    format!("{seq:04}.png")
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/frames.rs"]
mod tests;
