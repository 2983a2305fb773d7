//! File access for generated artifacts.
//!
//! Generators never touch `std::fs` directly; they go through
//! [`ArtifactFs`] so the pipeline can run against an in-memory store in
//! tests and count what it wrote.

use std::{fs, io, path::Path};

/// Read/write/exists over artifact paths.
pub trait ArtifactFs {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;
    fn exists(&self, path: &Path) -> bool;

    /// Read a file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let bytes = self.read(path)?;
        String::from_utf8(bytes).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
    }
}

/// The real file system. Parent directories are created on write.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiskFs;

impl ArtifactFs for DiskFs {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, contents)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

#[cfg(test)]
pub use memory::MemoryFs;
