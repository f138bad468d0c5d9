//! ZIP container abstraction for presentation archives.

use crate::error::{Error, Result};
use std::cell::RefCell;
use std::fs;
use std::io::{Cursor, Read, Seek};
use std::path::Path;

/// A presentation package opened for random-access entry reading.
///
/// Entries are listed up front (names only, in central-directory order) and
/// decompressed on demand; the archive is never mutated.
pub struct PptxContainer {
    archive: RefCell<zip::ZipArchive<Cursor<Vec<u8>>>>,
    entries: Vec<String>,
}

impl PptxContainer {
    /// Open a presentation archive from a file path.
    ///
    /// Fails with [`Error::ArchiveOpen`] if the path does not exist or the
    /// file is not a valid ZIP container.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use deckcheck::container::PptxContainer;
    ///
    /// let container = PptxContainer::open("talk.pptx")?;
    /// # Ok::<(), deckcheck::Error>(())
    /// ```
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path)
            .map_err(|e| Error::ArchiveOpen(format!("{}: {}", path.display(), e)))?;
        Self::from_bytes(data)
    }

    /// Create a container from a byte vector.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let cursor = Cursor::new(data);
        let mut archive =
            zip::ZipArchive::new(cursor).map_err(|e| Error::ArchiveOpen(e.to_string()))?;

        // Cache entry names by index so iteration order is the central
        // directory order, not a hash map's.
        let mut entries = Vec::with_capacity(archive.len());
        for i in 0..archive.len() {
            let file = archive
                .by_index(i)
                .map_err(|e| Error::ArchiveOpen(e.to_string()))?;
            entries.push(file.name().to_string());
        }

        Ok(Self {
            archive: RefCell::new(archive),
            entries,
        })
    }

    /// Create a container from a reader.
    pub fn from_reader<R: Read + Seek>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(data)
    }

    /// Entry paths in archive iteration order.
    pub fn entry_names(&self) -> &[String] {
        &self.entries
    }

    /// Check if an entry exists in the archive.
    pub fn exists(&self, path: &str) -> bool {
        self.entries.iter().any(|n| n == path)
    }

    /// Read one entry's raw bytes, decompressing on demand.
    pub fn read_bytes(&self, path: &str) -> Result<Vec<u8>> {
        let mut archive = self.archive.borrow_mut();
        let mut file = archive.by_name(path).map_err(|e| Error::EntryRead {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        let mut data = Vec::new();
        file.read_to_end(&mut data).map_err(|e| Error::EntryRead {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        Ok(data)
    }

    /// Read an entry and decode it as XML text.
    ///
    /// Slide parts are UTF-8 in practice; a UTF-8 BOM is tolerated and
    /// anything undecodable falls back to lossy conversion.
    pub fn read_xml(&self, path: &str) -> Result<String> {
        let bytes = self.read_bytes(path)?;
        Ok(decode_xml_bytes(&bytes))
    }
}

/// Decode XML bytes, skipping a UTF-8 BOM if present.
pub fn decode_xml_bytes(bytes: &[u8]) -> String {
    let bytes = match bytes {
        [0xEF, 0xBB, 0xBF, rest @ ..] => rest,
        other => other,
    };
    String::from_utf8_lossy(bytes).into_owned()
}

impl std::fmt::Debug for PptxContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PptxContainer")
            .field("entries", &self.entries.len())
            .finish()
    }
}
