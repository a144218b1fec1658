use std::{fmt, path::Path};

use log::debug;

use crate::UploadError;

/// A file the user has selected: its name, contents and MIME type.
///
/// Handles are never edited in place. Selecting a different file produces a
/// new handle which replaces the old one wholesale.
#[derive(Clone, PartialEq, Eq)]
pub struct FileHandle {
    name: String,
    content: Vec<u8>,
    mime_type: String,
}

impl FileHandle {
    pub fn new<N, M>(name: N, content: Vec<u8>, mime_type: M) -> Self
    where
        N: Into<String>,
        M: Into<String>,
    {
        Self {
            name: name.into(),
            content,
            mime_type: mime_type.into(),
        }
    }

    /// Reads a whole file into memory. The MIME type is guessed from the
    /// extension and falls back to `application/octet-stream`.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, UploadError> {
        let path = path.as_ref();
        let content = std::fs::read(path).map_err(|source| UploadError::ReadFile {
            path: path.to_owned(),
            source,
        })?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mime_type = mime_guess::from_path(path).first_or_octet_stream();
        debug!("Selected {name:?} ({mime_type}, {} bytes)", content.len());

        Ok(Self::new(name, content, mime_type.essence_str()))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Splits the handle into name, contents and MIME type.
    pub(crate) fn into_parts(self) -> (String, Vec<u8>, String) {
        (self.name, self.content, self.mime_type)
    }
}

// The contents can be large, so Debug only shows their length.
impl fmt::Debug for FileHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileHandle")
            .field("name", &self.name)
            .field("mime_type", &self.mime_type)
            .field("len", &self.content.len())
            .finish()
    }
}
