use std::fs;
use std::io::Write;
use std::path::Path;

/// Read the whole file as UTF-8 text.
pub fn read_text(path: &Path) -> std::io::Result<String> {
    fs::read_to_string(path)
}

/// Atomic file write: tempfile + fsync + rename.
///
/// Either the full write succeeds or the original file is left in place.
/// A symlinked target is written through: the link stays and the file it
/// points at receives the new content.
pub fn atomic_write(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let resolved = if path.exists() {
        fs::canonicalize(path)?
    } else {
        path.to_path_buf()
    };
    let path = resolved.as_path();

    // Bare file names have an empty parent; use the working directory.
    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut temp = tempfile::NamedTempFile::new_in(parent)?;
    if let Ok(meta) = fs::metadata(path) {
        temp.as_file().set_permissions(meta.permissions())?;
    }
    temp.write_all(content)?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| e.error)?;

    Ok(())
}
