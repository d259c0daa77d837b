//! Controllers for the editor page.
//!
//! Everything the page does (hosting the editor, toggling vim mode,
//! running and sharing snippets, resetting) lives here, written against
//! small capability traits instead of a browser. The rendered page script
//! in `templates::page` follows the same behavior.
//!
//! ## Module Structure
//!
//! - `editor` - editor host wrapping an `EditorWidget`
//! - `settings` - persisted key-value settings
//! - `modal` - vim mode state machine over a `ModalLayer`
//! - `client` - the `PlaygroundApi` used to compile and share
//! - `execution` - rendering of run output
//! - `sharing` - share field text and clipboard
//! - `view` - visible state of panels, labels and notes
//! - `wiring` - the `Page` tying it all together

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

mod client;
mod editor;
mod execution;
mod modal;
mod settings;
mod sharing;
mod view;
mod wiring;


pub use client::{HttpPlaygroundApi, PlaygroundApi, DEFAULT_BASE_URL};
pub use editor::{EditorHost, EditorOptions, EditorWidget, MemoryWidget};
pub use execution::{render_compile_result, render_run_failure, COMMAND_LINE, COMPILING_TEXT, RUN_FAILURE};
pub use modal::{
    ExFuture, ExHandler, ModalLayer, ModalSession, ModalState, ModalToggle, DISABLE_LABEL,
    ENABLE_LABEL, WRITE_COMMAND,
};
pub use settings::{read_flag, MemorySettings, SettingsStore, VI_MODE_KEY};
pub use sharing::{share_field_text, Clipboard, MemoryClipboard, SHARE_ERROR, TOOLTIP_DURATION};
pub use view::PageView;
pub use wiring::{Button, Capabilities, Page};

/// Snippet the editor starts with and returns to on reset.
pub const DEFAULT_SNIPPET: &str = r#"package main

import "fmt"

func main() {
    fmt.Println("Hello, Go!")
}"#;

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server answered with status {0}")]
    Status(u16),
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("clipboard unavailable: {0}")]
    Clipboard(String),
}

/// Monotonic request counter. Only the newest request may render.
#[derive(Debug, Default)]
pub(crate) struct RequestGeneration(AtomicU64);

impl RequestGeneration {
    pub(crate) fn next(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub(crate) fn is_current(&self, generation: u64) -> bool {
        self.0.load(Ordering::SeqCst) == generation
    }
}

/// Lock a mutex, recovering the data if a previous holder panicked.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
