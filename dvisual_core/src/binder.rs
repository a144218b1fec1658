//! Binds file-input controls to the variables of an [`UploadDraft`].
//!
//! Each [`FileInput`] is attached to exactly one variable, named by a
//! [`FileModel`]. Whenever the selection on the control changes, the first
//! selected file is written into that variable and nothing else is touched.

use std::{fmt::Display, str::FromStr};

use log::debug;

use crate::{file_handle::FileHandle, UploadError};

/// The names of the variables a file input can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileModel {
    MyFile,
    MyFile2,
}

impl FileModel {
    /// All models, in the order their files are submitted.
    pub const ALL: [FileModel; 2] = [FileModel::MyFile, FileModel::MyFile2];

    pub fn as_str(self) -> &'static str {
        match self {
            FileModel::MyFile => "myFile",
            FileModel::MyFile2 => "myFile2",
        }
    }
}

impl Display for FileModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FileModel {
    type Err = UploadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "myFile" => Ok(FileModel::MyFile),
            "myFile2" => Ok(FileModel::MyFile2),
            _ => Err(UploadError::UnknownFileModel(s.to_string())),
        }
    }
}

/// The files chosen so far, one slot per [`FileModel`]. Passed explicitly to
/// the submit handler rather than living in shared state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadDraft {
    my_file: Option<FileHandle>,
    my_file2: Option<FileHandle>,
}

impl UploadDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, model: FileModel) -> Option<&FileHandle> {
        self.slot(model).as_ref()
    }

    /// Overwrites the variable named by `model`.
    pub fn set(&mut self, model: FileModel, file: Option<FileHandle>) {
        *self.slot_mut(model) = file;
    }

    /// The slots in submission order. Unset slots are `None`.
    pub fn handles(&self) -> Vec<Option<FileHandle>> {
        FileModel::ALL
            .iter()
            .map(|m| self.get(*m).cloned())
            .collect()
    }

    fn slot(&self, model: FileModel) -> &Option<FileHandle> {
        match model {
            FileModel::MyFile => &self.my_file,
            FileModel::MyFile2 => &self.my_file2,
        }
    }

    fn slot_mut(&mut self, model: FileModel) -> &mut Option<FileHandle> {
        match model {
            FileModel::MyFile => &mut self.my_file,
            FileModel::MyFile2 => &mut self.my_file2,
        }
    }
}

/// A file-input control bound to one variable of the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileInput {
    model: FileModel,
}

impl FileInput {
    pub fn bind(model: FileModel) -> Self {
        Self { model }
    }

    /// Binds to a variable given by name, e.g. `"myFile2"`.
    pub fn bind_named(name: &str) -> Result<Self, UploadError> {
        Ok(Self::bind(name.parse()?))
    }

    pub fn model(&self) -> FileModel {
        self.model
    }

    /// Called on every change of the control's selection. Only the first
    /// selected file is kept; an empty selection leaves the variable unset.
    pub fn on_change<I>(&self, draft: &mut UploadDraft, selected: I)
    where
        I: IntoIterator<Item = FileHandle>,
    {
        let first = selected.into_iter().next();
        debug!("{} <- {:?}", self.model, first);
        draft.set(self.model, first);
    }
}
