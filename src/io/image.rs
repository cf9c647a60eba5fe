//! PNG export of composed pictures with highlighted motif matches

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::algorithm::compositor::Picture;
use crate::analysis::matcher::MatchReport;
use crate::io::configuration::{ACTIVE_COLOR, INACTIVE_COLOR, MOTIF_COLOR};
use crate::io::error::{Result, StitchError, invalid_parameter};

/// Render a picture as one pixel per cell
///
/// Cells covered by a match in `report` use [`MOTIF_COLOR`], other active
/// cells [`ACTIVE_COLOR`], and inactive cells [`INACTIVE_COLOR`].
///
/// # Errors
///
/// Returns an invalid parameter error if the picture is too large for image
/// coordinates
pub fn render_picture(picture: &Picture, report: Option<&MatchReport>) -> Result<RgbaImage> {
    let width = u32::try_from(picture.cols())
        .map_err(|error| invalid_parameter("width", &picture.cols(), &error))?;
    let height = u32::try_from(picture.rows())
        .map_err(|error| invalid_parameter("height", &picture.rows(), &error))?;

    let mut img = ImageBuffer::new(width, height);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let (row, col) = (y as usize, x as usize);
        let color = if report.is_some_and(|report| report.is_covered(row, col)) {
            MOTIF_COLOR
        } else if picture.is_active(row, col) {
            ACTIVE_COLOR
        } else {
            INACTIVE_COLOR
        };
        *pixel = Rgba(color);
    }
    Ok(img)
}

/// Export a picture as a PNG file
///
/// # Errors
///
/// Returns an error if:
/// - The picture is too large for image coordinates
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_picture_png(
    picture: &Picture,
    report: Option<&MatchReport>,
    output_path: &Path,
) -> Result<()> {
    let img = render_picture(picture, report)?;

    if let Some(parent) = output_path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| StitchError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| StitchError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
