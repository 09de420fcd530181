//! Poppler-backed page source.
//!
//! Shells out to the Poppler utilities: `pdfinfo` for the page count,
//! `pdftotext -layout` for per-page text, and `pdftoppm` for rasterization.
//! Missing binaries surface as typed capability-unavailable errors so the
//! engine can pick another path.

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use image::DynamicImage;
use log::debug;
use tempfile::TempDir;

use crate::error::{Error, Result};
use crate::pdf::PageSource;

/// A PDF document read through the Poppler command-line tools.
#[derive(Debug)]
pub struct PopplerPdf {
    path: PathBuf,
    page_count: u32,
}

impl PopplerPdf {
    /// Open a PDF and read its page count via `pdfinfo`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.is_file() {
            return Err(Error::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("file does not exist: {}", path.display()),
            )));
        }

        let output = run_tool("pdfinfo", |cmd| {
            cmd.arg(&path);
        })?;
        let stdout = String::from_utf8_lossy(&output.stdout);
        let page_count = stdout
            .lines()
            .find_map(|line| line.strip_prefix("Pages:"))
            .and_then(|rest| rest.trim().parse::<u32>().ok())
            .ok_or_else(|| Error::Adapter(format!("pdfinfo reported no page count for {}", path.display())))?;

        debug!("{}: {} pages via pdfinfo", path.display(), page_count);
        Ok(Self { path, page_count })
    }

    /// Path of the underlying file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Collect the page images `pdftoppm` wrote under `prefix`, in
    /// filename order (pdftoppm zero-pads page numbers uniformly).
    fn collect_rendered(dir: &Path) -> Result<Vec<DynamicImage>> {
        let mut files: Vec<PathBuf> = std::fs::read_dir(dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.extension().map(|e| e == "png").unwrap_or(false))
            .collect();
        files.sort();

        let mut images = Vec::with_capacity(files.len());
        for file in files {
            images.push(image::open(&file).map_err(|e| Error::Render(e.to_string()))?);
        }
        Ok(images)
    }
}

impl PageSource for PopplerPdf {
    fn page_count(&self) -> Result<u32> {
        Ok(self.page_count)
    }

    fn page_text(&self, page_number: u32) -> Result<String> {
        let page = page_number.to_string();
        let output = run_tool("pdftotext", |cmd| {
            cmd.args(["-f", &page, "-l", &page, "-layout"])
                .arg(&self.path)
                .arg("-");
        })?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn render_page(&self, page_number: u32, dpi: u32) -> Result<DynamicImage> {
        let scratch = TempDir::new()?;
        let prefix = scratch.path().join("page");
        let page = page_number.to_string();
        run_tool("pdftoppm", |cmd| {
            cmd.args(["-png", "-r", &dpi.to_string(), "-f", &page, "-l", &page])
                .arg(&self.path)
                .arg(&prefix);
        })?;

        let mut images = Self::collect_rendered(scratch.path())?;
        images
            .pop()
            .ok_or_else(|| Error::Render(format!("pdftoppm produced no image for page {}", page_number)))
    }

    fn rasterize_all(&self, dpi: u32) -> Result<Vec<DynamicImage>> {
        let scratch = TempDir::new()?;
        let prefix = scratch.path().join("page");
        run_tool("pdftoppm", |cmd| {
            cmd.args(["-png", "-r", &dpi.to_string()])
                .arg(&self.path)
                .arg(&prefix);
        })?;

        let images = Self::collect_rendered(scratch.path())?;
        if images.len() as u32 != self.page_count {
            return Err(Error::Render(format!(
                "pdftoppm produced {} images for {} pages",
                images.len(),
                self.page_count
            )));
        }
        Ok(images)
    }
}

/// Run one Poppler tool. A missing binary is a typed capability gap,
/// anything else unsuccessful is an adapter failure.
fn run_tool(tool: &'static str, configure: impl FnOnce(&mut Command)) -> Result<Output> {
    let mut cmd = Command::new(tool);
    configure(&mut cmd);
    let output = cmd.output().map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            Error::CapabilityUnavailable(tool)
        } else {
            Error::Io(e)
        }
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::Adapter(format!("{} failed: {}", tool, stderr.trim())));
    }
    Ok(output)
}
