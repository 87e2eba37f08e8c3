//! PNG raster of lattice occupancy with transparent vacancies

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::io::configuration::{PNG_OCCUPIED_COLOR, PNG_SITE_PIXELS};
use crate::io::error::{MisError, Result};
use crate::lattice::grid::LatticeGrid;

/// Draw each occupied site as a square block, leaving a one pixel gap
///
/// Row `x` of the lattice maps to image column `x`, matching the SVG layout.
pub fn render_occupancy(grid: &LatticeGrid) -> RgbaImage {
    let side = grid.side() as u32;
    let extent = side * PNG_SITE_PIXELS;
    let fill = Rgba(PNG_OCCUPIED_COLOR);

    ImageBuffer::from_fn(extent, extent, |px, py| {
        let x = (px / PNG_SITE_PIXELS) as usize;
        let y = (py / PNG_SITE_PIXELS) as usize;
        let inset = px % PNG_SITE_PIXELS == 0 || py % PNG_SITE_PIXELS == 0;
        if !inset && grid.site(x, y).is_occupied() {
            fill
        } else {
            Rgba([0, 0, 0, 0])
        }
    })
}

/// Write the occupancy raster as a PNG file
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(grid: &LatticeGrid, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| MisError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    render_occupancy(grid)
        .save(output_path)
        .map_err(|e| MisError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
