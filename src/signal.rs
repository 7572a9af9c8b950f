//! Signal Bridge - OS signals delivered into the event loop
//!
//! Converts asynchronous signal delivery (SIGINT, SIGTERM, SIGHUP, SIGQUIT)
//! into an orderly, single-threaded shutdown notification. The handler
//! context is allowed exactly two operations, both async-signal-safe: store
//! the signal number into a last-write-wins atomic slot and write one byte
//! into a self-pipe. A watcher thread blocks on the pipe's read end and
//! forwards each wake as a [`ShellEvent::Signal`] message on the shell
//! channel; everything else happens on the event-loop thread.
//!
//! Two signals arriving before the loop drains the first coalesce into a
//! single notification carrying the later number. The only consumer action
//! is shutdown, which is idempotent, so the coalescing loses nothing.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::mpsc;
//! use roadmap_shell::signal::{self, SignalBridge};
//!
//! let (tx, _rx) = mpsc::channel();
//! let _bridge = SignalBridge::install(tx).unwrap();
//! // ... event loop receives ShellEvent::Signal, then:
//! if let Some(signum) = signal::take() {
//!     eprintln!("shutting down on {}", signal::signal_name(signum).unwrap_or("?"));
//! }
//! ```

use std::sync::atomic::{AtomicI32, Ordering};

// =============================================================================
// PENDING-SIGNAL SLOT
// =============================================================================

/// Last-delivered signal number; 0 means none pending.
///
/// Written from handler context, consumed by the event loop via [`take`].
/// A newer delivery overwrites an unconsumed older one.
static PENDING_SIGNAL: AtomicI32 = AtomicI32::new(0);

/// Record a signal delivery and wake the event loop.
///
/// This is the single crossing point between handler context and the event
/// loop: one atomic store plus one self-pipe byte, nothing else. It is also
/// callable from ordinary code to simulate a delivery.
pub fn notify(signum: i32) {
    PENDING_SIGNAL.store(signum, Ordering::SeqCst);
    #[cfg(unix)]
    unix::wake();
}

/// Consume the pending signal number, if any.
///
/// Clears the slot; a second call before another delivery returns `None`.
pub fn take() -> Option<i32> {
    match PENDING_SIGNAL.swap(0, Ordering::SeqCst) {
        0 => None,
        signum => Some(signum),
    }
}

/// Human-readable name for the recognized shutdown signals.
///
/// Signals outside the recognized set have no name assigned; callers log
/// the raw number instead. Delivery of such a signal still shuts down.
pub fn signal_name(signum: i32) -> Option<&'static str> {
    #[cfg(unix)]
    {
        match signum {
            libc::SIGINT => Some("SIGINT"),
            libc::SIGTERM => Some("SIGTERM"),
            libc::SIGHUP => Some("SIGHUP"),
            libc::SIGQUIT => Some("SIGQUIT"),
            _ => None,
        }
    }
    #[cfg(not(unix))]
    {
        let _ = signum;
        None
    }
}

pub use imp::SignalBridge;

// =============================================================================
// UNIX IMPLEMENTATION
// =============================================================================

#[cfg(unix)]
mod unix {
    use std::io;
    use std::ptr;
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::mpsc::Sender;
    use std::thread::{self, JoinHandle};

    use crate::input::reader::ShellEvent;

    /// The four recognized shutdown signals.
    const SHUTDOWN_SIGNALS: [libc::c_int; 4] =
        [libc::SIGINT, libc::SIGTERM, libc::SIGHUP, libc::SIGQUIT];

    /// Write end of the self-pipe; -1 while no bridge is installed.
    static WAKE_FD: AtomicI32 = AtomicI32::new(-1);

    /// Write one byte into the self-pipe, if a bridge is installed.
    ///
    /// Async-signal-safe: a raw `write` on a non-blocking fd. A full pipe
    /// means a wake is already pending, so the lost byte is harmless.
    pub(super) fn wake() {
        let fd = WAKE_FD.load(Ordering::SeqCst);
        if fd >= 0 {
            let byte = [1u8];
            unsafe {
                libc::write(fd, byte.as_ptr() as *const libc::c_void, 1);
            }
        }
    }

    /// Handler-context entry point. Store-and-wake, nothing more.
    extern "C" fn on_signal(signum: libc::c_int) {
        super::notify(signum);
    }

    /// Installed signal handlers plus the self-pipe and its watcher thread.
    pub struct SignalBridge {
        read_fd: libc::c_int,
        write_fd: libc::c_int,
        watcher: Option<JoinHandle<()>>,
    }

    impl SignalBridge {
        /// Create the self-pipe, intercept the shutdown signals and spawn
        /// the watcher thread feeding `tx`.
        pub fn install(tx: Sender<ShellEvent>) -> io::Result<Self> {
            let (read_fd, write_fd) = Self::self_pipe()?;
            WAKE_FD.store(write_fd, Ordering::SeqCst);

            unsafe {
                let mut action: libc::sigaction = std::mem::zeroed();
                libc::sigemptyset(&mut action.sa_mask);
                let handler: extern "C" fn(libc::c_int) = on_signal;
                action.sa_sigaction = handler as libc::sighandler_t;
                action.sa_flags = libc::SA_RESTART;
                for signum in SHUTDOWN_SIGNALS {
                    libc::sigaction(signum, &action, ptr::null_mut());
                }
            }

            let watcher = thread::Builder::new()
                .name("shell-signal".to_string())
                .spawn(move || watch_loop(read_fd, tx))?;

            Ok(Self {
                read_fd,
                write_fd,
                watcher: Some(watcher),
            })
        }

        /// A pipe whose write end never blocks (handler context must not
        /// stall) and whose ends do not leak across exec.
        fn self_pipe() -> io::Result<(libc::c_int, libc::c_int)> {
            let mut fds: [libc::c_int; 2] = [0; 2];
            if unsafe { libc::pipe(fds.as_mut_ptr()) } != 0 {
                return Err(io::Error::last_os_error());
            }
            unsafe {
                for fd in fds {
                    libc::fcntl(fd, libc::F_SETFD, libc::FD_CLOEXEC);
                }
                let flags = libc::fcntl(fds[1], libc::F_GETFL);
                libc::fcntl(fds[1], libc::F_SETFL, flags | libc::O_NONBLOCK);
            }
            Ok((fds[0], fds[1]))
        }
    }

    impl Drop for SignalBridge {
        fn drop(&mut self) {
            // Stop handler-context writes, then put the default
            // dispositions back so a late signal takes the normal path.
            WAKE_FD.store(-1, Ordering::SeqCst);
            unsafe {
                for signum in SHUTDOWN_SIGNALS {
                    libc::signal(signum, libc::SIG_DFL);
                }
                // Closing the only write end gives the watcher EOF.
                libc::close(self.write_fd);
            }
            if let Some(watcher) = self.watcher.take() {
                let _ = watcher.join();
            }
            unsafe {
                libc::close(self.read_fd);
            }
        }
    }

    /// Block on the pipe and forward each wake into the shell channel.
    ///
    /// A batch of coalesced wake bytes becomes a single message. EOF or a
    /// closed channel ends the thread.
    fn watch_loop(read_fd: libc::c_int, tx: Sender<ShellEvent>) {
        let mut buf = [0u8; 16];
        loop {
            let n = unsafe { libc::read(read_fd, buf.as_mut_ptr() as *mut libc::c_void, buf.len()) };
            if n > 0 {
                if tx.send(ShellEvent::Signal).is_err() {
                    break;
                }
            } else if n == 0 {
                break; // Pipe closed on teardown
            } else {
                let err = io::Error::last_os_error();
                if err.kind() == io::ErrorKind::Interrupted {
                    continue;
                }
                break;
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use std::sync::mpsc;
        use std::time::Duration;

        #[test]
        fn test_watcher_forwards_wake() {
            let mut fds: [libc::c_int; 2] = [0; 2];
            assert_eq!(unsafe { libc::pipe(fds.as_mut_ptr()) }, 0);
            let (read_fd, write_fd) = (fds[0], fds[1]);

            let (tx, rx) = mpsc::channel();
            let watcher = thread::spawn(move || watch_loop(read_fd, tx));

            let byte = [1u8];
            unsafe {
                libc::write(write_fd, byte.as_ptr() as *const libc::c_void, 1);
            }
            assert!(matches!(
                rx.recv_timeout(Duration::from_secs(2)),
                Ok(ShellEvent::Signal)
            ));

            // EOF ends the thread.
            unsafe {
                libc::close(write_fd);
            }
            watcher.join().unwrap();
            unsafe {
                libc::close(read_fd);
            }
        }
    }
}

// =============================================================================
// NON-UNIX STUB
// =============================================================================

#[cfg(not(unix))]
mod imp_stub {
    use std::io;
    use std::sync::mpsc::Sender;

    use crate::input::reader::ShellEvent;

    /// No signal interception on this platform; the close path is the only
    /// shutdown trigger.
    pub struct SignalBridge;

    impl SignalBridge {
        pub fn install(tx: Sender<ShellEvent>) -> io::Result<Self> {
            let _ = tx;
            Ok(Self)
        }
    }
}

#[cfg(unix)]
use unix as imp;
#[cfg(not(unix))]
use imp_stub as imp;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial(pending_signal)]
    fn test_last_write_wins_coalescing() {
        take(); // Start clean

        notify(2);
        notify(15);

        // One pending delivery carrying the later identity, then nothing.
        assert_eq!(take(), Some(15));
        assert_eq!(take(), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_recognized_signal_names() {
        assert_eq!(signal_name(libc::SIGINT), Some("SIGINT"));
        assert_eq!(signal_name(libc::SIGTERM), Some("SIGTERM"));
        assert_eq!(signal_name(libc::SIGHUP), Some("SIGHUP"));
        assert_eq!(signal_name(libc::SIGQUIT), Some("SIGQUIT"));
    }

    #[test]
    fn test_unrecognized_signal_has_no_name() {
        assert_eq!(signal_name(64), None);
        assert_eq!(signal_name(0), None);
    }
}
