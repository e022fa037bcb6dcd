// src/loader.rs
use std::path::Path;
use std::sync::mpsc::{Receiver, Sender};
use std::thread::{self, JoinHandle};

use crate::pitch::parse_with_stats;
use crate::types::{LoaderCommand, LoaderMessage};
use crate::upload::{LoadedFile, UploadError};

/// File extensions accepted for upload, compared case-insensitively.
pub const ACCEPTED_EXTENSIONS: [&str; 2] = ["txt", "csv"];

/// Display name used in messages: the file name, or the whole path if it has none.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Rejects paths that are not `.txt` / `.csv` before anything is read.
pub fn check_extension(path: &Path) -> Result<(), UploadError> {
    let accepted = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            ACCEPTED_EXTENSIONS
                .iter()
                .any(|ok| ext.eq_ignore_ascii_case(ok))
        })
        .unwrap_or(false);
    if accepted {
        Ok(())
    } else {
        Err(UploadError::UnsupportedExtension {
            file: display_name(path),
        })
    }
}

/// Parses already-read text; zero valid rows is a rejected upload.
pub fn load_text(path: &Path, text: &str) -> Result<LoadedFile, UploadError> {
    let name = display_name(path);
    let (series, stats) = parse_with_stats(text);
    if series.is_empty() {
        return Err(UploadError::NoValidRows { file: name });
    }
    Ok(LoadedFile {
        name,
        path: path.to_path_buf(),
        series,
        stats,
    })
}

/// Checks, reads and parses one pitch file.
pub fn read_pitch_file(path: &Path) -> Result<LoadedFile, UploadError> {
    check_extension(path)?;
    let text = std::fs::read_to_string(path).map_err(|err| UploadError::Read {
        file: display_name(path),
        message: err.to_string(),
    })?;
    load_text(path, &text)
}

/// Starts the background reader.
///
/// Each `Read` command is answered with exactly one `Loaded` message, in
/// command order. `notify` runs after every message so the GUI can repaint.
/// The thread exits on `Shutdown` or when either channel closes.
pub fn spawn_thread(
    tx: Sender<LoaderMessage>,
    rx_cmd: Receiver<LoaderCommand>,
    notify: impl Fn() + Send + 'static,
) -> JoinHandle<()> {
    thread::spawn(move || {
        log::debug!("loader thread started");
        while let Ok(cmd) = rx_cmd.recv() {
            match cmd {
                LoaderCommand::Read {
                    target,
                    request,
                    path,
                } => {
                    let outcome = read_pitch_file(&path);
                    match &outcome {
                        Ok(file) => log::info!(
                            "read {}: {} samples ({} rows dropped)",
                            file.name,
                            file.stats.accepted,
                            file.stats.dropped
                        ),
                        Err(err) => log::warn!("upload rejected: {err}"),
                    }
                    let msg = LoaderMessage::Loaded {
                        target,
                        request,
                        outcome,
                    };
                    if tx.send(msg).is_err() {
                        break;
                    }
                    notify();
                }
                LoaderCommand::Shutdown => break,
            }
        }
        log::debug!("loader thread stopped");
    })
}
