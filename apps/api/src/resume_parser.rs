//! Resume text extraction — turns an uploaded PDF into plain text for prompting.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("PDF parse error: {0}")]
    Pdf(#[from] pdf_extract::OutputError),

    #[error("PDF extraction task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Resume extraction seam. Carried in `AppState` as `Arc<dyn ResumeExtractor>`.
#[async_trait]
pub trait ResumeExtractor: Send + Sync {
    async fn extract_text(&self, pdf: Bytes) -> Result<String, ExtractionError>;
}

/// `pdf-extract` backed extractor. Parsing runs on the blocking pool, so a
/// panic inside the PDF library surfaces as `ExtractionError::Task`.
pub struct PdfResumeExtractor;

#[async_trait]
impl ResumeExtractor for PdfResumeExtractor {
    async fn extract_text(&self, pdf: Bytes) -> Result<String, ExtractionError> {
        let size = pdf.len();
        let pages = tokio::task::spawn_blocking(move || {
            pdf_extract::extract_text_from_mem_by_pages(&pdf)
        })
        .await??;

        let text = join_pages(&pages);
        debug!(
            "Extracted {} chars of resume text from {} byte PDF",
            text.len(),
            size
        );
        Ok(text)
    }
}

/// Joins page texts with `\n`, dropping pages that yield no text.
fn join_pages(pages: &[String]) -> String {
    pages
        .iter()
        .map(|page| page.trim())
        .filter(|page| !page.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
