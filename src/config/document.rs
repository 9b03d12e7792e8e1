use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::core::FrameSize;
use crate::foundation::error::{RoiError, RoiResult};
use crate::plan::planner::{RegionPlan, RegionPlanner};
use crate::region::model::RegionEntry;
use crate::region::transform::StaticTransforms;

/// Overlay opacity used when a document does not set one.
pub const DEFAULT_OPACITY: u32 = 50;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Persisted region configuration for every scene.
///
/// This is the JSON-facing, human-edited representation. Scene lists are ordered front-most
/// first; that order carries through planning.
pub struct RegionDocument {
    /// Master switch for attaching regions to encoders.
    #[serde(default)]
    pub enabled: bool,
    /// Leave recording and replay-buffer encoders untouched.
    #[serde(default)]
    pub ignore_recording_encoder: bool,
    /// Attach to every video encoder instead of the active outputs only.
    #[serde(default)]
    pub enumerate_all_encoders: bool,
    /// Overlay opacity in percent.
    #[serde(default = "default_opacity")]
    pub opacity: u32,
    /// Region lists keyed by scene id.
    #[serde(default)]
    pub scenes: BTreeMap<String, Vec<RegionEntry>>,
    /// Optional item placements for item-following regions.
    #[serde(default, skip_serializing_if = "StaticTransforms::is_empty")]
    pub items: StaticTransforms,
}

fn default_opacity() -> u32 {
    DEFAULT_OPACITY
}

impl Default for RegionDocument {
    fn default() -> Self {
        Self {
            enabled: false,
            ignore_recording_encoder: false,
            enumerate_all_encoders: false,
            opacity: DEFAULT_OPACITY,
            scenes: BTreeMap::new(),
            items: StaticTransforms::default(),
        }
    }
}

impl RegionDocument {
    /// Parse a document from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> RoiResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| RoiError::serde(format!("parse region document JSON: {e}")))
    }

    /// Parse a document from a JSON string.
    pub fn from_json_str(s: &str) -> RoiResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| RoiError::serde(format!("parse region document JSON: {e}")))
    }

    /// Parse a document from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> RoiResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            RoiError::validation(format!("open region document '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> RoiResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| RoiError::serde(format!("serialize region document: {e}")))
    }

    /// Check ranges that the JSON schema alone cannot express.
    pub fn validate(&self) -> RoiResult<()> {
        if self.opacity > 100 {
            return Err(RoiError::validation(format!(
                "opacity must be within [0, 100], got {}",
                self.opacity
            )));
        }
        for (scene, entries) in &self.scenes {
            for (idx, entry) in entries.iter().enumerate() {
                entry.region.validate().map_err(|e| {
                    RoiError::validation(format!("scene '{scene}' region {idx}: {e}"))
                })?;
            }
        }
        Ok(())
    }

    /// Regions of `scene`, or an empty slice for unknown scenes.
    pub fn regions(&self, scene: &str) -> &[RegionEntry] {
        self.scenes.get(scene).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Plan `scene` using this document's item table for item-following regions.
    pub fn plan_scene(&self, planner: &RegionPlanner, scene: &str, frame: FrameSize) -> RegionPlan {
        planner.plan(scene, self.regions(scene), frame, &self.items)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/document.rs"]
mod tests;
