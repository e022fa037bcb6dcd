use std::path::PathBuf;
use thiserror::Error;
use crate::pitch::{ParseStats, Series};
use crate::types::RequestId;
/// Why an upload was refused. Shown to the user as-is.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("unsupported file type for {file}; expected .txt or .csv")]
    UnsupportedExtension { file: String },
    #[error("no valid time/pitch rows in {file}")]
    NoValidRows { file: String },
    #[error("failed to read {file}: {message}")]
    Read { file: String, message: String },
}
/// A successfully parsed upload.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadedFile {
    pub name: String,
    pub path: PathBuf,
    pub series: Series,
    pub stats: ParseStats,
}
/// Upload lifecycle of one slot.
///
/// Transitions consume the old state and return the new one. A completion
/// is applied only if it answers the request currently being read, so a
/// slow read that finishes after a newer one was started is discarded. A
/// failed upload keeps the previously loaded file.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum UploadState {
    #[default]
    Idle,
    Reading {
        request: RequestId,
        path: PathBuf,
        previous: Option<LoadedFile>,
    },
    Ready(LoadedFile),
    Rejected {
        reason: UploadError,
        previous: Option<LoadedFile>,
    },
}
impl UploadState {
    /// File currently backing the slot, if any.
    pub fn current(&self) -> Option<&LoadedFile> {
        match self {
            UploadState::Idle => None,
            UploadState::Ready(file) => Some(file),
            UploadState::Reading { previous, .. } | UploadState::Rejected { previous, .. } => {
                previous.as_ref()
            }
        }
    }
    pub fn is_reading(&self) -> bool {
        matches!(self, UploadState::Reading { .. })
    }
    fn into_current(self) -> Option<LoadedFile> {
        match self {
            UploadState::Idle => None,
            UploadState::Ready(file) => Some(file),
            UploadState::Reading { previous, .. } | UploadState::Rejected { previous, .. } => {
                previous
            }
        }
    }
    pub fn begin(self, request: RequestId, path: PathBuf) -> Self {
        UploadState::Reading {
            request,
            path,
            previous: self.into_current(),
        }
    }
    /// Refuses an upload without reading it.
    pub fn reject(self, reason: UploadError) -> Self {
        UploadState::Rejected {
            reason,
            previous: self.into_current(),
        }
    }
    /// Applies a finished read. Returns the new state and whether it was applied.
    pub fn complete(
        self,
        request: RequestId,
        outcome: Result<LoadedFile, UploadError>,
    ) -> (Self, bool) {
        match self {
            UploadState::Reading {
                request: pending,
                previous,
                ..
            } if pending == request => {
                let next = match outcome {
                    Ok(file) => UploadState::Ready(file),
                    Err(reason) => UploadState::Rejected { reason, previous },
                };
                (next, true)
            }
            other => (other, false),
        }
    }
}
