//! Axum route handler for PDF export.

use axum::{
    body::Bytes,
    extract::Multipart,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::info;

use crate::errors::{AppError, FieldErrors};
use crate::export::{pdf_file_name, render_image_pdf};

/// Upper bound for the uploaded raster.
pub const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

#[derive(Debug, Default)]
struct ExportForm {
    image: Option<Bytes>,
    document_type: String,
    primary_name: String,
    month: String,
    year: String,
}

impl ExportForm {
    async fn read(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = ExportForm::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BadRequest(format!("Malformed multipart body: {e}")))?
        {
            let name = field.name().unwrap_or_default().to_string();
            let read_err = |e: axum::extract::multipart::MultipartError| {
                AppError::BadRequest(format!("Could not read field '{name}': {e}"))
            };
            match name.as_str() {
                "image" => form.image = Some(field.bytes().await.map_err(read_err)?),
                "documentType" => form.document_type = field.text().await.map_err(read_err)?,
                "primaryName" => form.primary_name = field.text().await.map_err(read_err)?,
                "month" => form.month = field.text().await.map_err(read_err)?,
                "year" => form.year = field.text().await.map_err(read_err)?,
                _ => {}
            }
        }

        Ok(form)
    }

    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.image.as_ref().map_or(true, |bytes| bytes.is_empty()) {
            errors.add("image", "A PNG or JPEG capture is required");
        }
        if self.document_type.trim().is_empty() {
            errors.add("documentType", "Document type is required");
        }
        if self.primary_name.trim().is_empty() {
            errors.add("primaryName", "Name is required");
        }
        errors.into_result()
    }
}

/// POST /api/v1/exports/pdf
///
/// Multipart fields: `image` (PNG/JPEG bytes), `documentType`, `primaryName`,
/// optional `month` and `year`. Responds with the PDF as an attachment.
pub async fn handle_export_pdf(multipart: Multipart) -> Result<Response, AppError> {
    let form = ExportForm::read(multipart).await?;
    form.validate()?;

    let file_name = pdf_file_name(
        &form.document_type,
        &form.primary_name,
        Some((form.month.as_str(), form.year.as_str())),
    );

    let image = form.image.unwrap_or_default();
    let image_len = image.len();
    let pdf = tokio::task::spawn_blocking(move || render_image_pdf(&image))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("PDF render task failed: {e}")))??;

    info!(
        "Exported {} ({} byte image → {} byte PDF)",
        file_name,
        image_len,
        pdf.len()
    );

    let disposition = format!("attachment; filename=\"{}\"", file_name.replace('"', "'"));
    let disposition = HeaderValue::from_str(&disposition)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid file name header: {e}")))?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("application/pdf")),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        pdf,
    )
        .into_response())
}
