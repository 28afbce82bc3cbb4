// PDF export: file naming, A4 placement and single-page image embedding.
// The raster itself is produced by the client; this module only places it.

pub mod filename;
pub mod handlers;
pub mod layout;
pub mod pdf;

use thiserror::Error;

pub use filename::pdf_file_name;
pub use pdf::render_image_pdf;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("image could not be decoded: {0}")]
    Image(#[from] image::ImageError),

    #[error("image has zero width or height")]
    EmptyImage,

    #[error("PDF assembly failed: {0}")]
    Pdf(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
