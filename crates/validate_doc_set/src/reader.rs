// crates/validate_doc_set/src/reader.rs

use std::fs;
use std::io;
use std::path::Path;

/// File access needed by the doc-set validator.
pub trait DocReader {
    /// Fails if `root` is missing or is not a readable directory.
    fn check_root(&self, root: &Path) -> io::Result<()>;

    /// Reads one document. `Ok(None)` means the file does not exist; every
    /// other failure is returned as an error.
    fn read_doc(&self, path: &Path) -> io::Result<Option<String>>;
}

/// Reads documents from the local filesystem.
pub struct DefaultDocReader;

impl DocReader for DefaultDocReader {
    fn check_root(&self, root: &Path) -> io::Result<()> {
        let metadata = fs::metadata(root)?;
        if !metadata.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} is not a directory", root.display()),
            ));
        }
        fs::read_dir(root).map(drop)
    }

    fn read_doc(&self, path: &Path) -> io::Result<Option<String>> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }
}
