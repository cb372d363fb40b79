use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::clipboard::ClipboardError;

#[derive(Debug, Error)]
pub enum DeskError {
    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("could not open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}

pub type Result<T, E = DeskError> = std::result::Result<T, E>;
