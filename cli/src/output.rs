//! Output file writers for extraction results.

use std::fs;
use std::path::{Path, PathBuf};

use undoc::{ExtractedDocument, ExtractionOutcome};

/// Minimum page text length worth a standalone per-page file.
const PAGE_TEXT_FILE_MIN_CHARS: usize = 10;

fn stem_of(source_file: &str) -> String {
    Path::new(source_file)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string())
}

/// Write the office-extraction artifacts: a `{stem}_extracted.json` record
/// and a human-readable `{stem}_body.txt`. Returns the JSON path.
pub fn write_office_outputs(
    doc: &ExtractedDocument,
    output_dir: &Path,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    fs::create_dir_all(output_dir)?;
    let stem = stem_of(&doc.source_file);

    let json_path = output_dir.join(format!("{}_extracted.json", stem));
    fs::write(&json_path, serde_json::to_string_pretty(doc)?)?;

    let mut body = String::new();
    body.push_str(&format!("File: {}\n", doc.source_file));
    body.push_str(&format!("Format: {}\n", doc.format));
    if doc.is_transcript {
        body.push_str("Type: meeting transcript\n");
        if let Some(ref t) = doc.transcript {
            body.push_str(&format!(
                "Messages: {} | Participants: {}\n",
                t.summary.total_messages, t.summary.participants_count
            ));
        }
    }
    body.push_str(&format!("Size: {:.1} KB\n", doc.file_size_kb));
    body.push_str(&format!("{}\n\n", "=".repeat(60)));
    body.push_str(&doc.extracted_text);
    body.push('\n');

    let body_path = output_dir.join(format!("{}_body.txt", stem));
    fs::write(&body_path, body)?;

    Ok(json_path)
}

/// Write the PDF-extraction artifacts next to any page images already
/// generated by the engine: the full text, per-page text files for pages
/// with substantial text, and (optionally) a metadata JSON.
pub fn write_pdf_outputs(
    outcome: &mut ExtractionOutcome,
    output_dir: &Path,
    write_metadata: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    fs::create_dir_all(output_dir)?;
    let stem = stem_of(&outcome.source_file);

    if let Some(ref full_text) = outcome.full_text {
        let text_path = output_dir.join(format!("{}_text.txt", stem));
        fs::write(&text_path, full_text)?;
        outcome.text_file = Some(text_path.to_string_lossy().into_owned());
    }

    for page in &outcome.pages {
        if let Some(ref text) = page.text {
            if text.chars().count() > PAGE_TEXT_FILE_MIN_CHARS {
                let page_path =
                    output_dir.join(format!("{}_page_{}_text.txt", stem, page.page_number));
                fs::write(&page_path, text)?;
            }
        }
    }

    if write_metadata {
        let meta_path = output_dir.join(format!("{}_metadata.json", stem));
        fs::write(&meta_path, serde_json::to_string_pretty(outcome)?)?;
    }

    Ok(())
}
