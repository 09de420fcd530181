//! The extraction fallback engine.

use std::fs;
use std::path::Path;

use log::{debug, info, warn};

use crate::error::Error;
use crate::model::{ExtractionMode, ExtractionOutcome, PageRecord, PageTextResult};
use crate::pdf::images::write_page_image;
use crate::pdf::{PageSource, PdfExtractOptions};
use crate::quality::{is_usable_document_text, valid_char_ratio, TextCleaner};

/// Resolution of the in-process per-page fallback renderer.
const FALLBACK_RENDER_DPI: u32 = 200;

/// Orchestrates per-page text extraction, the whole-document accept/reject
/// decision, and image fallback for one PDF at a time.
///
/// The extractor holds no per-document state; reuse one instance across a
/// batch. Failures never escape [`PdfExtractor::extract`]: they come back
/// as an [`ExtractionOutcome`] with `success: false`, so a batch caller
/// just moves on to the next document.
pub struct PdfExtractor {
    options: PdfExtractOptions,
    cleaner: TextCleaner,
}

impl PdfExtractor {
    /// Create an extractor with the given options.
    pub fn new(options: PdfExtractOptions) -> Self {
        Self {
            options,
            cleaner: TextCleaner::new(),
        }
    }

    /// The options this extractor runs under.
    pub fn options(&self) -> &PdfExtractOptions {
        &self.options
    }

    /// Process one document. `source_file` names the document in the
    /// outcome record; `output_dir` receives the `images/` subdirectory
    /// when page images are generated.
    pub fn extract(
        &self,
        source: &dyn PageSource,
        source_file: &str,
        output_dir: &Path,
    ) -> ExtractionOutcome {
        let mode = self.options.mode;
        let total_pages = match source.page_count() {
            Ok(n) => n,
            Err(e) => {
                warn!("{}: cannot determine page count: {}", source_file, e);
                return ExtractionOutcome::failure(source_file, mode, e.to_string());
            }
        };

        info!("{}: {} pages, mode={}", source_file, total_pages, mode);
        let mut outcome = ExtractionOutcome::new(source_file, total_pages, mode);

        let need_text = matches!(mode, ExtractionMode::Text | ExtractionMode::Both);
        let mut need_images =
            matches!(mode, ExtractionMode::Images | ExtractionMode::Both) || self.options.force_images;

        // Accept/Reject: one decision for the whole document, even though
        // ratios are recorded per page for diagnostics.
        let mut text_usable = false;
        if need_text {
            match self.extract_page_texts(source, total_pages) {
                Ok((pages_info, candidate)) => {
                    if is_usable_document_text(&candidate, self.options.min_text_chars) {
                        text_usable = true;
                        outcome.full_text_length = candidate.chars().count();
                        outcome.full_text = Some(candidate);
                        for info in &pages_info {
                            outcome.pages.push(PageRecord::from_text(info, total_pages));
                        }
                    } else {
                        warn!(
                            "{}: text not usable ({} chars), falling back to images",
                            source_file,
                            candidate.chars().count()
                        );
                    }
                }
                Err(e) => {
                    warn!("{}: text extraction failed: {}", source_file, e);
                }
            }
            if !text_usable && mode == ExtractionMode::Text {
                need_images = true;
            }
        }

        if need_images {
            if let Err(e) = self.generate_images(source, source_file, output_dir, &mut outcome) {
                outcome.success = false;
                outcome.error = Some(e.to_string());
            }
        }

        outcome.sort_pages();

        if !text_usable && outcome.image_count() == 0 {
            outcome.success = false;
            if outcome.error.is_none() {
                outcome.error = Some("no usable text and no page images produced".to_string());
            }
        }

        outcome
    }

    /// Pull raw text for every page in ascending order, record per-page
    /// diagnostics, and build the whole-document candidate: raw texts
    /// joined by single spaces, then cleaned.
    fn extract_page_texts(
        &self,
        source: &dyn PageSource,
        total_pages: u32,
    ) -> crate::error::Result<(Vec<PageTextResult>, String)> {
        let mut pages_info = Vec::with_capacity(total_pages as usize);
        let mut raw_texts = Vec::with_capacity(total_pages as usize);

        for page_number in 1..=total_pages {
            let raw = source.page_text(page_number)?;
            let cleaned = self.cleaner.clean_aggressive(&raw);
            let ratio = if cleaned.is_empty() {
                0.0
            } else {
                valid_char_ratio(&cleaned)
            };
            debug!(
                "page {}: {} chars, ratio={:.2}",
                page_number,
                cleaned.chars().count(),
                ratio
            );
            pages_info.push(PageTextResult {
                page_number,
                raw_length: raw.chars().count(),
                clean_length: cleaned.chars().count(),
                valid_ratio: ratio,
                text: cleaned,
            });
            raw_texts.push(raw);
        }

        let candidate = self.cleaner.clean_aggressive(&raw_texts.join(" "));
        Ok((pages_info, candidate))
    }

    /// Render every page to an image under `output_dir/images`. Prefers the
    /// source's batch rasterizer; on typed unavailability or failure falls
    /// back to per-page rendering at 200 DPI. Already-produced pages are
    /// retained when later pages fail.
    fn generate_images(
        &self,
        source: &dyn PageSource,
        source_file: &str,
        output_dir: &Path,
        outcome: &mut ExtractionOutcome,
    ) -> crate::error::Result<()> {
        let images_dir = output_dir.join("images");
        fs::create_dir_all(&images_dir)?;
        outcome.images_dir = Some(images_dir.to_string_lossy().into_owned());

        let stem = Path::new(source_file)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document".to_string());

        let mut failed_pages = 0u32;
        match source.rasterize_all(self.options.dpi) {
            Ok(images) => {
                for (idx, image) in images.iter().enumerate() {
                    let page_number = idx as u32 + 1;
                    match write_page_image(
                        image,
                        &images_dir,
                        &stem,
                        page_number,
                        self.options.grayscale,
                        self.options.target_image_kb,
                    ) {
                        Ok(path) => {
                            outcome.attach_image(page_number, path.to_string_lossy().into_owned())
                        }
                        Err(e) => {
                            warn!("{}: page {} image write failed: {}", source_file, page_number, e);
                            failed_pages += 1;
                        }
                    }
                }
            }
            Err(Error::CapabilityUnavailable(what)) => {
                debug!("{}: {} unavailable, rendering page by page", source_file, what);
                failed_pages = self.render_pages_individually(source, &images_dir, &stem, outcome);
            }
            Err(e) => {
                warn!(
                    "{}: batch rasterization failed ({}), rendering page by page",
                    source_file, e
                );
                failed_pages = self.render_pages_individually(source, &images_dir, &stem, outcome);
            }
        }

        if failed_pages > 0 {
            return Err(Error::Render(format!(
                "{} of {} pages failed to render",
                failed_pages, outcome.total_pages
            )));
        }
        Ok(())
    }

    fn render_pages_individually(
        &self,
        source: &dyn PageSource,
        images_dir: &Path,
        stem: &str,
        outcome: &mut ExtractionOutcome,
    ) -> u32 {
        let mut failed_pages = 0u32;
        for page_number in 1..=outcome.total_pages {
            let written = source
                .render_page(page_number, FALLBACK_RENDER_DPI)
                .and_then(|image| {
                    write_page_image(
                        &image,
                        images_dir,
                        stem,
                        page_number,
                        self.options.grayscale,
                        self.options.target_image_kb,
                    )
                });
            match written {
                Ok(path) => outcome.attach_image(page_number, path.to_string_lossy().into_owned()),
                Err(e) => {
                    warn!("page {} render failed: {}", page_number, e);
                    failed_pages += 1;
                }
            }
        }
        failed_pages
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new(PdfExtractOptions::default())
    }
}
