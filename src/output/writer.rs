use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::io::Write;
use std::path::Path;

/// Write rendered output to `path` atomically: readers see either the old
/// file or the complete new one.
pub fn write_output(path: &Path, content: &str) -> Result<()> {
    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open {} for writing", path.display()))?;
    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write {}", path.display()))?;
    if !content.ends_with('\n') {
        file.write_all(b"\n")
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }
    file.commit()
        .with_context(|| format!("Failed to save {}", path.display()))?;
    Ok(())
}
