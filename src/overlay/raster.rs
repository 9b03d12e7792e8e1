use std::path::Path;

use image::{Rgba, RgbaImage, imageops};

use crate::foundation::core::FrameSize;
use crate::foundation::error::{RoiError, RoiResult};
use crate::overlay::blocks::BlockMap;
use crate::region::rect::{OverlapRule, WeightedRect};

/// Block sizes the overlay can preview.
pub const PREVIEW_BLOCK_SIZES: [u32; 4] = [16, 32, 64, 128];

/// Settings for the translucent priority overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct OverlaySettings {
    /// Preview block size in pixels; one of [`PREVIEW_BLOCK_SIZES`].
    pub block_size: u32,
    /// Opacity in percent, `0..=100`.
    pub opacity: u32,
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            block_size: 16,
            opacity: 50,
        }
    }
}

impl OverlaySettings {
    pub fn validate(&self) -> RoiResult<()> {
        if !PREVIEW_BLOCK_SIZES.contains(&self.block_size) {
            return Err(RoiError::validation(format!(
                "overlay block size must be one of {PREVIEW_BLOCK_SIZES:?}, got {}",
                self.block_size
            )));
        }
        if self.opacity > 100 {
            return Err(RoiError::validation(format!(
                "overlay opacity must be within [0, 100], got {}",
                self.opacity
            )));
        }
        Ok(())
    }

    fn alpha(&self) -> u8 {
        unit_to_u8(self.opacity as f32 / 100.0)
    }
}

fn unit_to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Overlay colour for a priority: red for negative, green for positive, blue towards neutral.
pub fn priority_color(priority: f32, alpha: u8) -> Rgba<u8> {
    let red = if priority < 0.0 { -priority } else { 0.0 };
    let green = if priority > 0.0 { priority } else { 0.0 };
    let blue = (0.5 - priority.abs()).max(0.0);
    Rgba([unit_to_u8(red), unit_to_u8(green), unit_to_u8(blue), alpha])
}

/// Draw the plan as one pixel per encoder block.
///
/// Uncovered blocks keep the background, black at the overlay opacity, which darkens the
/// underlying frame for contrast.
#[tracing::instrument(skip(rects))]
pub fn render_overlay(
    rects: &[WeightedRect],
    frame: FrameSize,
    settings: OverlaySettings,
) -> RoiResult<RgbaImage> {
    settings.validate()?;
    if frame.width == 0 || frame.height == 0 {
        return Err(RoiError::render("overlay frame must not be empty"));
    }

    let alpha = settings.alpha();
    let map = BlockMap::rasterize(rects, frame, settings.block_size, OverlapRule::FirstWins);
    let background = Rgba([0, 0, 0, alpha]);
    let img = RgbaImage::from_fn(map.cols(), map.rows(), |col, row| {
        map.get(col, row)
            .map_or(background, |p| priority_color(p, alpha))
    });
    Ok(img)
}

/// Scale a block-resolution overlay back up to frame pixels with nearest-neighbour sampling.
pub fn upscale_to_frame(overlay: &RgbaImage, frame: FrameSize, block_size: u32) -> RgbaImage {
    let block_size = block_size.max(1);
    let full = imageops::resize(
        overlay,
        overlay.width() * block_size,
        overlay.height() * block_size,
        imageops::FilterType::Nearest,
    );
    let width = frame.width.min(full.width());
    let height = frame.height.min(full.height());
    imageops::crop_imm(&full, 0, 0, width, height).to_image()
}

/// Write an overlay image as PNG, creating parent directories.
pub fn save_overlay_png(img: &RgbaImage, path: impl AsRef<Path>) -> RoiResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            RoiError::render(format!("create output dir '{}': {e}", parent.display()))
        })?;
    }
    img.save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| RoiError::render(format!("write png '{}': {e}", path.display())))
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/raster.rs"]
mod tests;
