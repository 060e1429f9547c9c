//! PDF quote export.
//!
//! The retained request bytes of a successful quote are posted to the
//! document endpoint. The answer is only accepted when the status is ok and
//! the declared content type is PDF; anything else is read as text and
//! reported as [`ExportError::Rejected`], separate from the pricing error.
//!
//! A received artifact is written to a scoped temporary file, previewed and
//! copied to the download directory. The temporary file is removed when its
//! handle drops, whichever step fails.

use crate::pricing::PricedQuote;
use charter_core::routes::Route;
use charter_core::transport::{status_line, TransportClient, TransportError};
use log::{debug, info, warn};
use reqwest::header::CONTENT_TYPE;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

pub const PDF_CONTENT_TYPE: &str = "application/pdf";
pub const QUOTE_FILE_NAME: &str = "quote.pdf";

#[derive(Debug, Error)]
pub enum ExportError {
    /// Non-ok status or non-PDF answer; the body text as received.
    #[error("{0}")]
    Rejected(String),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

fn is_pdf(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .map(|mime| mime.trim().eq_ignore_ascii_case(PDF_CONTENT_TYPE))
        .unwrap_or(false)
}

/// A received PDF quote.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportArtifact {
    bytes: Vec<u8>,
    content_type: String,
}

impl ExportArtifact {
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Preview and download the artifact through one scoped temporary file.
    ///
    /// A failed preview is logged and the download still happens.
    pub fn deliver(
        &self,
        download_dir: &Path,
        viewer: &dyn ArtifactViewer,
    ) -> Result<PathBuf, ExportError> {
        let handle = ArtifactHandle::acquire(&self.bytes)?;
        if let Err(e) = viewer.preview(handle.path()) {
            warn!("Preview of {} failed: {}", handle.path().display(), e);
        }
        let destination = download_dir.join(QUOTE_FILE_NAME);
        let copied = fs::copy(handle.path(), &destination);
        drop(handle);
        copied?;
        info!("Saved quote to {}", destination.display());
        Ok(destination)
    }
}

/// Something that can show a document at a path.
pub trait ArtifactViewer {
    fn preview(&self, path: &Path) -> io::Result<()>;
}

/// Opens the document with the platform's default application.
pub struct SystemViewer;

impl ArtifactViewer for SystemViewer {
    fn preview(&self, path: &Path) -> io::Result<()> {
        open::that(path)
    }
}

/// Skips the preview step.
pub struct NoPreview;

impl ArtifactViewer for NoPreview {
    fn preview(&self, _path: &Path) -> io::Result<()> {
        Ok(())
    }
}

/// Locally addressable copy of an artifact, removed on drop.
struct ArtifactHandle {
    file: NamedTempFile,
}

impl ArtifactHandle {
    fn acquire(bytes: &[u8]) -> io::Result<ArtifactHandle> {
        let mut file = tempfile::Builder::new()
            .prefix("quote-")
            .suffix(".pdf")
            .tempfile()?;
        file.write_all(bytes)?;
        file.flush()?;
        debug!("Acquired artifact handle {}", file.path().display());
        Ok(ArtifactHandle { file })
    }

    fn path(&self) -> &Path {
        self.file.path()
    }
}

impl Drop for ArtifactHandle {
    fn drop(&mut self) {
        debug!("Releasing artifact handle {}", self.file.path().display());
    }
}

/// Post the quote's retained request to the document endpoint.
pub async fn request_pdf(
    client: &TransportClient,
    quote: &PricedQuote,
) -> Result<ExportArtifact, ExportError> {
    let response = client
        .send_json_bytes(Route::QuotePdf, quote.request_body().to_vec())
        .await?;
    let status = response.status();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();

    if !status.is_success() || !is_pdf(&content_type) {
        let text = response.text().await.map_err(TransportError::from)?;
        let message = if text.trim().is_empty() {
            status_line(
                status.as_u16(),
                status.canonical_reason().unwrap_or_default(),
            )
        } else {
            text
        };
        warn!("Quote export rejected ({}, {:?}): {}", status, content_type, message);
        return Err(ExportError::Rejected(message));
    }

    let bytes = response.bytes().await.map_err(TransportError::from)?;
    debug!("Received {} byte quote", bytes.len());
    Ok(ExportArtifact {
        bytes: bytes.to_vec(),
        content_type,
    })
}
