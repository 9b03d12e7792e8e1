//! roiplan turns operator-authored regions of interest into the weighted rectangle lists that
//! block-based video encoders consume for rate control.
//!
//! # Pipeline overview
//!
//! 1. **Describe**: a [`RegionDocument`] (or any caller-owned list of [`RegionEntry`]) holds
//!    manual rectangles, transform- or item-following rectangles, and center-focus ring sets.
//! 2. **Plan**: [`RegionPlanner::plan`] resolves every enabled entry, in order, into a flat
//!    [`RegionPlan`] of [`WeightedRect`]s: quad bounding boxes, feathering, and block-aligned
//!    rings with interpolated priority.
//! 3. **Attach**: [`attach_plan`] replaces the regions of each [`RoiSink`] (encoder) with the plan.
//! 4. **Preview** (optional): [`render_overlay`] draws the plan on the encoder block grid.
//!
//! Planning is pure and deterministic: degenerate geometry contributes no rectangles instead
//! of failing, and earlier rectangles take precedence over later overlapping ones.
#![forbid(unsafe_code)]

mod attach;
mod config;
mod foundation;
mod overlay;
mod plan;
mod region;

pub use attach::cell::PlanCell;
pub use attach::sink::{AttachStats, InMemoryRoiSink, RoiSink, attach_plan};
pub use config::document::{DEFAULT_OPACITY, RegionDocument};
pub use foundation::core::{
    Affine, DEFAULT_MIN_BLOCK, FrameSize, ItemTransform, MAX_COORD, MAX_RECOMMENDED_REGIONS,
    Point, Vec2,
};
pub use foundation::error::{RoiError, RoiResult};
pub use overlay::blocks::BlockMap;
pub use overlay::raster::{
    OverlaySettings, PREVIEW_BLOCK_SIZES, priority_color, render_overlay, save_overlay_png,
    upscale_to_frame,
};
pub use plan::bounds::{is_degenerate_bounds, resolve_quad_bounds};
pub use plan::planner::{RegionPlan, RegionPlanner};
pub use plan::quantize::{RingInterval, quantize_rings};
pub use plan::rings::{build_inner_rings, build_outer_rings};
pub use plan::smooth::{MAX_OUTSIDE_STEPS, max_feather_steps, smooth_region};
pub use region::model::{
    CenterFocusRegion, CenterPoint, ItemRegion, ManualRegion, RegionDescriptor, RegionEntry,
    RingSpec, SmoothingMode, SmoothingSpec, TransformRegion,
};
pub use region::rect::{OverlapRule, WeightedRect};
pub use region::transform::{
    ItemPlacement, ItemState, NoTransforms, StaticTransforms, TransformProvider,
};
