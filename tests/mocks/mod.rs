//! Test doubles shared by the integration tests.

mod memory_directory_store;
mod recording_display;

#[allow(unused_imports)]
pub use memory_directory_store::MemoryDirectoryStore;
#[allow(unused_imports)]
pub use recording_display::{RecordingDisplay, Shown};
