//! # roadmap-shell
//!
//! Window shell and main-loop integration layer for a terminal navigation
//! app. The terminal is the toolkit: crossterm supplies the native event
//! stream, the alternate screen is the window, and the shell's pump is the
//! single-threaded event loop everything else runs on.
//!
//! ## Architecture
//!
//! The shell bridges a callback-oriented application onto that loop:
//!
//! ```text
//! OS signal      → SignalBridge  → orderly shutdown
//! timer deadline → TimerPool     → CallbackHandle → application logic
//! toolkit key    → KeyTranslator → key-input callback → application logic
//! ```
//!
//! One channel feeds the pump. A dedicated reader thread forwards toolkit
//! events, and the signal bridge's watcher thread forwards wake-ups from
//! its self-pipe; nothing else ever touches shell state off-thread. Timers
//! share a fixed pool of 64 slots keyed by callback identity, so defensive
//! re-registration can never leak resources or double-fire.
//!
//! ## Modules
//!
//! - [`callback`] - Identity and invocation for bare application callbacks
//! - [`timer`] - Fixed-capacity periodic callback table
//! - [`signal`] - OS signals delivered into the event loop
//! - [`input`] - Key translation and the toolkit event reader
//! - [`shell`] - The window shell, chrome models and the pump
//! - [`config`] - Ambient shell configuration
//! - [`types`] - Errors, chrome flags, toolbar orientation

pub mod callback;
pub mod config;
pub mod input;
pub mod shell;
pub mod signal;
pub mod timer;
pub mod types;

// Re-export commonly used items
pub use callback::{CallbackHandle, ShellCallback};
pub use config::ShellConfig;
pub use input::{EventReader, KeyInputCallback, KeyTranslator, ShellEvent};
pub use shell::{
    AppHooks, Canvas, ContactsDialog, ContactsProps, Popup, WindowShell,
};
pub use shell::menu::{Menu, MenuBar, MenuEntry, MenuId, MenuItem, Tool, ToolBar, ToolEntry};
pub use signal::SignalBridge;
pub use timer::{TimerPool, MAX_TIMERS};
pub use types::{ChromeFlags, ShellError, ToolbarOrientation};
