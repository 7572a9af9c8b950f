//! Event Reader - Toolkit events fed into the shell channel
//!
//! Reads crossterm events in a dedicated thread and forwards them to the
//! event-loop channel, where they share a single receiver with the signal
//! bridge's wake messages. Uses polled reads with a short timeout so the
//! thread notices a shutdown request without needing one final keypress.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossterm::event::{self, Event};

/// How long each poll waits before re-checking the running flag.
const POLL_TICK: Duration = Duration::from_millis(100);

// =============================================================================
// SHELL EVENT
// =============================================================================

/// Everything the event loop can be woken by.
pub enum ShellEvent {
    /// A toolkit event: key, resize, focus, mouse.
    Input(Event),
    /// The signal bridge has a pending signal number.
    Signal,
    /// The toolkit event stream ended or failed.
    Closed,
}

// =============================================================================
// EVENT READER
// =============================================================================

/// Dedicated toolkit-event reader thread.
pub struct EventReader {
    handle: Option<JoinHandle<()>>,
    running: Arc<AtomicBool>,
}

impl EventReader {
    /// Spawn the reader thread feeding `tx`.
    pub fn spawn(tx: Sender<ShellEvent>) -> io::Result<Self> {
        let running = Arc::new(AtomicBool::new(true));
        let running_clone = running.clone();

        let handle = thread::Builder::new()
            .name("shell-input".to_string())
            .spawn(move || {
                Self::read_loop(running_clone, tx);
            })?;

        Ok(Self {
            handle: Some(handle),
            running,
        })
    }

    fn read_loop(running: Arc<AtomicBool>, tx: Sender<ShellEvent>) {
        while running.load(Ordering::SeqCst) {
            match event::poll(POLL_TICK) {
                Ok(false) => continue,
                Ok(true) => match event::read() {
                    Ok(ev) => {
                        if tx.send(ShellEvent::Input(ev)).is_err() {
                            break; // Channel closed, loop gone
                        }
                    }
                    Err(err) => {
                        if err.kind() == io::ErrorKind::Interrupted {
                            continue;
                        }
                        let _ = tx.send(ShellEvent::Closed);
                        break;
                    }
                },
                Err(err) => {
                    if err.kind() == io::ErrorKind::Interrupted {
                        continue;
                    }
                    let _ = tx.send(ShellEvent::Closed);
                    break;
                }
            }
        }
    }

    /// Ask the reader to stop and wait for it.
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }
}

impl Drop for EventReader {
    fn drop(&mut self) {
        self.stop();
    }
}
