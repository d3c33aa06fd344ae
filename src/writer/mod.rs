//! Writers that turn property and command metadata into documentation files.
//!
//! Every writer opens all of its output files up front through a [`FileGroup`]
//! and releases them together. On success the group is finished explicitly and
//! the first flush failure is reported; on any early return the group's `Drop`
//! flushes what it can and logs failures instead of raising them, so the error
//! the caller sees is always the one that stopped the pass.

pub mod command_doc;
pub mod csv;
pub mod yml;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, error};

pub use command_doc::write_command_docs;
pub use csv::{write_csv_files, CSV_FILE_HEADER};
pub use yml::write_yml_files;

#[derive(Debug, Error)]
pub enum DocError {
    #[error("output directory does not exist: {}", path.display())]
    MissingDirectory { path: PathBuf },

    #[error("failed to create {}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} was opened twice in one pass", path.display())]
    AlreadyOpen { path: PathBuf },

    #[error("command name '{name}' is not a plain file name")]
    InvalidCommandName { name: String },
}

/// Writers never create directories; the layout must exist beforehand.
pub(crate) fn ensure_dir(dir: &Path) -> Result<(), DocError> {
    if dir.is_dir() {
        Ok(())
    } else {
        Err(DocError::MissingDirectory {
            path: dir.to_path_buf(),
        })
    }
}

struct OpenFile {
    path: PathBuf,
    writer: BufWriter<File>,
}

/// Handle to a file registered in a [`FileGroup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FileId(usize);

/// A set of output files opened for one writer pass, all released together.
pub(crate) struct FileGroup {
    what: &'static str,
    files: Vec<OpenFile>,
}

impl FileGroup {
    /// `what` names the artifacts in log messages, e.g. "Property Key CSV".
    pub fn new(what: &'static str) -> Self {
        Self {
            what,
            files: Vec::new(),
        }
    }

    /// Create (truncating) the file at `path` and add it to the group.
    pub fn open(&mut self, path: PathBuf) -> Result<FileId, DocError> {
        if self.files.iter().any(|open| open.path == path) {
            return Err(DocError::AlreadyOpen { path });
        }
        let file = File::create(&path).map_err(|source| DocError::Create {
            path: path.clone(),
            source,
        })?;
        debug!("Opened {}", path.display());
        self.files.push(OpenFile {
            path,
            writer: BufWriter::new(file),
        });
        Ok(FileId(self.files.len() - 1))
    }

    pub fn append(&mut self, id: FileId, text: &str) -> Result<(), DocError> {
        let open = &mut self.files[id.0];
        open.writer
            .write_all(text.as_bytes())
            .map_err(|source| DocError::Write {
                path: open.path.clone(),
                source,
            })
    }

    /// Flush and close every file. The first failure is returned; any later
    /// ones are logged.
    pub fn finish(mut self) -> Result<usize, DocError> {
        let files = std::mem::take(&mut self.files);
        let count = files.len();
        let mut first_error = None;
        for mut open in files {
            if let Err(source) = open.writer.flush() {
                let err = DocError::Write {
                    path: open.path,
                    source,
                };
                if first_error.is_none() {
                    first_error = Some(err);
                } else {
                    error!(
                        "Error while flushing/closing {} files: {}",
                        self.what, err
                    );
                }
            }
        }
        match first_error {
            Some(err) => Err(err),
            None => Ok(count),
        }
    }
}

impl Drop for FileGroup {
    fn drop(&mut self) {
        for mut open in std::mem::take(&mut self.files) {
            if let Err(e) = open.writer.flush() {
                error!(
                    "Error while flushing/closing {} file {}: {}",
                    self.what,
                    open.path.display(),
                    e
                );
            }
        }
    }
}
