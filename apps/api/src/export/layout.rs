//! A4 placement of a captured raster.
//!
//! The image spans the page width minus the margins; its height follows from
//! the aspect ratio. If that height would overflow the page it is clamped to
//! the printable height and the width shrinks with it, so the aspect ratio is
//! always kept.

use serde::Serialize;

use crate::export::ExportError;

pub const A4_WIDTH_MM: f64 = 210.0;
pub const A4_HEIGHT_MM: f64 = 297.0;
pub const MARGIN_MM: f64 = 10.0;

const POINTS_PER_MM: f64 = 72.0 / 25.4;

pub const A4_WIDTH_PT: f64 = A4_WIDTH_MM * POINTS_PER_MM;
pub const A4_HEIGHT_PT: f64 = A4_HEIGHT_MM * POINTS_PER_MM;

/// Image rectangle on the page in millimetres, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Placement {
    pub x_mm: f64,
    pub y_mm: f64,
    pub width_mm: f64,
    pub height_mm: f64,
}

impl Placement {
    /// PDF user-space rectangle `(x, y, width, height)` in points, origin at
    /// the bottom-left corner.
    pub fn to_points(&self) -> (f64, f64, f64, f64) {
        let width = self.width_mm * POINTS_PER_MM;
        let height = self.height_mm * POINTS_PER_MM;
        let x = self.x_mm * POINTS_PER_MM;
        let y = A4_HEIGHT_PT - self.y_mm * POINTS_PER_MM - height;
        (x, y, width, height)
    }
}

/// Places a `width_px` × `height_px` image on a single A4 page.
pub fn fit_to_page(width_px: u32, height_px: u32) -> Result<Placement, ExportError> {
    if width_px == 0 || height_px == 0 {
        return Err(ExportError::EmptyImage);
    }

    let ratio = width_px as f64 / height_px as f64;
    let max_width = A4_WIDTH_MM - 2.0 * MARGIN_MM;
    let max_height = A4_HEIGHT_MM - 2.0 * MARGIN_MM;

    let mut width_mm = max_width;
    let mut height_mm = width_mm / ratio;
    if height_mm > max_height {
        height_mm = max_height;
        width_mm = height_mm * ratio;
    }

    Ok(Placement {
        x_mm: MARGIN_MM,
        y_mm: MARGIN_MM,
        width_mm,
        height_mm,
    })
}
