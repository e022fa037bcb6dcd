// Adapter module to surface the pitch pipeline crate under `pitch-rs/`.
// The sources are compiled in directly so the app and the crate share one copy.
#[path = "pitch-rs/src/lib.rs"]
mod pitch_rs;

pub use pitch_rs::*;
