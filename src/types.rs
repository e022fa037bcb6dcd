// src/types.rs
use std::fmt;
use std::path::PathBuf;

use crate::upload::{LoadedFile, UploadError};

// Stable card identity; never reused within a session
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(pub u64);

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "card-{}", self.0)
    }
}

// Monotonic upload request number; the newest one per slot wins
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(pub u64);

// Which upload slot a file goes to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SlotTarget {
    Shared,
    Card(CardId),
}

// GUI -> loader thread
#[derive(Clone, Debug, PartialEq)]
pub enum LoaderCommand {
    Read {
        target: SlotTarget,
        request: RequestId,
        path: PathBuf,
    },
    Shutdown,
}

// Loader thread -> GUI
#[derive(Clone, Debug, PartialEq)]
pub enum LoaderMessage {
    Loaded {
        target: SlotTarget,
        request: RequestId,
        outcome: Result<LoadedFile, UploadError>,
    },
}
