//! Resume text acquisition.
//!
//! Plain text files are read as-is. PDFs are converted by the external
//! `pdftotext` tool (poppler-utils); all matching happens on the text.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;
use std::process::Command;
use tracing::debug;

const PDF_CONVERTER: &str = "pdftotext";

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

fn extract_pdf_text(path: &Path) -> Result<String> {
    let output = Command::new(PDF_CONVERTER)
        .arg("-layout")
        .arg(path)
        .arg("-")
        .output()
        .with_context(|| {
            format!(
                "Failed to run {} for {}. Is poppler-utils installed?",
                PDF_CONVERTER,
                path.display()
            )
        })?;

    if !output.status.success() {
        bail!(
            "{} failed for {}: {}",
            PDF_CONVERTER,
            path.display(),
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Load the resume at `path` as plain text.
///
/// # Errors
///
/// Returns an error if the file is missing or unreadable, the PDF converter
/// fails, or the extracted text is empty.
pub fn load_resume_text(path: &Path) -> Result<String> {
    if !path.exists() {
        bail!("Resume not found at {}", path.display());
    }

    let text = if is_pdf(path) {
        extract_pdf_text(path)?
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read resume at {}", path.display()))?
    };

    if text.trim().is_empty() {
        bail!("Resume at {} contains no text", path.display());
    }

    debug!(path = %path.display(), chars = text.chars().count(), "loaded resume");
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("job-bro-{}-{}", std::process::id(), name));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_is_pdf_case_insensitive() {
        assert!(is_pdf(Path::new("cv.PDF")));
        assert!(is_pdf(Path::new("dir/cv.pdf")));
        assert!(!is_pdf(Path::new("cv.txt")));
        assert!(!is_pdf(Path::new("pdf")));
    }

    #[test]
    fn test_load_text_resume() {
        let path = temp_file("resume.txt", "Python developer, recent graduate");
        let text = load_resume_text(&path).unwrap();
        assert_eq!(text, "Python developer, recent graduate");
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_empty_resume_is_error() {
        let path = temp_file("blank.txt", "  \n ");
        let err = load_resume_text(&path).unwrap_err();
        assert!(err.to_string().contains("contains no text"));
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_resume_is_error() {
        let err = load_resume_text(Path::new("/no/such/resume.txt")).unwrap_err();
        assert!(err.to_string().contains("Resume not found"));
    }
}
