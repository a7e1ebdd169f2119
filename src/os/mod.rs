// file: src/os/mod.rs
// version: 1.1.0
// guid: ab07e5d4-2c63-48f1-9b28-50d9e4f1c76a

//! OS facade: one method per POSIX primitive the command layer touches.
//!
//! Commands never call libc directly; they go through [`OsFacade`] so tests
//! can substitute a fake. Process-global state (the one-shot timer, the
//! scheduling priority, the file-creation mask) is genuinely process-wide:
//! a mutation by one command is visible to every later one, and the OS
//! primitive itself is the synchronization boundary.

pub mod real;
pub mod resolver;

pub use real::RealOs;

use crate::Result;
use std::os::unix::io::RawFd;

/// Everything a name-service lookup knows about one host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostRecord {
    /// IPv4 addresses as dotted-quad strings, in resolver order
    pub addresses: Vec<String>,
    /// The primary name the resolver associates with the host
    pub canonical_name: String,
    /// Alias names, in resolver order
    pub aliases: Vec<String>,
}

/// Facade over the POSIX primitives used by the command layer
pub trait OsFacade {
    /// Arm the one-shot real-time timer for `seconds` (0 cancels); returns
    /// the previous remaining delay in seconds
    fn set_alarm(&self, seconds: f64) -> Result<f64>;

    /// Create a hard link at `dest` pointing to `src`
    fn hard_link(&self, src: &str, dest: &str) -> Result<()>;

    /// Create a symbolic link at `dest` pointing to `src`
    fn sym_link(&self, src: &str, dest: &str) -> Result<()>;

    /// Current scheduling priority of the calling process
    fn get_priority(&self) -> Result<i32>;

    /// Adjust the scheduling priority by a signed increment; returns the
    /// new absolute priority
    fn adjust_priority(&self, delta: i32) -> Result<i32>;

    /// Suspend the calling process; returns the unslept remainder if the
    /// sleep was cut short by a signal
    fn sleep(&self, seconds: u32) -> u32;

    /// Schedule all filesystem buffers for writing; cannot fail
    fn sync_all(&self);

    /// Commit one descriptor's data to stable storage
    fn fsync(&self, fd: RawFd) -> Result<()>;

    /// Run a command line through the shell, stdio inherited, and wait;
    /// returns the child's exit code
    fn run_shell(&self, command: &str) -> Result<i32>;

    /// Set the file-creation mask; returns the prior mask
    fn set_umask(&self, mask: u32) -> u32;

    /// Resolve a host name or dotted-quad address
    fn lookup_host(&self, host: &str) -> Result<HostRecord>;
}

#[cfg(test)]
pub(crate) mod testing {
    //! Recording fake for driving command handlers without touching the OS.

    use super::{HostRecord, OsFacade};
    use crate::error::{CommandError, ResolverError, ResolverErrorKind};
    use crate::Result;
    use std::os::unix::io::RawFd;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct FakeOs {
        pub alarm_remaining: Mutex<f64>,
        pub priority: Mutex<i32>,
        pub priority_denied: bool,
        pub umask: Mutex<u32>,
        pub links: Mutex<Vec<(String, String, bool)>>,
        pub slept: Mutex<Vec<u32>>,
        pub sync_calls: Mutex<u32>,
        pub fsynced: Mutex<Vec<RawFd>>,
        pub shell_commands: Mutex<Vec<String>>,
        pub shell_exit: i32,
        pub host: Option<HostRecord>,
        pub resolver_failure: Option<ResolverErrorKind>,
    }

    impl FakeOs {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_host(host: HostRecord) -> Self {
            Self {
                host: Some(host),
                ..Self::default()
            }
        }
    }

    impl OsFacade for FakeOs {
        fn set_alarm(&self, seconds: f64) -> Result<f64> {
            let mut remaining = self.alarm_remaining.lock().unwrap();
            Ok(std::mem::replace(&mut *remaining, seconds))
        }

        fn hard_link(&self, src: &str, dest: &str) -> Result<()> {
            self.links
                .lock()
                .unwrap()
                .push((src.to_string(), dest.to_string(), false));
            Ok(())
        }

        fn sym_link(&self, src: &str, dest: &str) -> Result<()> {
            self.links
                .lock()
                .unwrap()
                .push((src.to_string(), dest.to_string(), true));
            Ok(())
        }

        fn get_priority(&self) -> Result<i32> {
            Ok(*self.priority.lock().unwrap())
        }

        fn adjust_priority(&self, delta: i32) -> Result<i32> {
            if self.priority_denied {
                return Err(CommandError::os(
                    "setpriority",
                    std::io::Error::from_raw_os_error(libc::EACCES),
                ));
            }
            let mut priority = self.priority.lock().unwrap();
            *priority += delta;
            Ok(*priority)
        }

        fn sleep(&self, seconds: u32) -> u32 {
            self.slept.lock().unwrap().push(seconds);
            0
        }

        fn sync_all(&self) {
            *self.sync_calls.lock().unwrap() += 1;
        }

        fn fsync(&self, fd: RawFd) -> Result<()> {
            self.fsynced.lock().unwrap().push(fd);
            Ok(())
        }

        fn run_shell(&self, command: &str) -> Result<i32> {
            self.shell_commands.lock().unwrap().push(command.to_string());
            Ok(self.shell_exit)
        }

        fn set_umask(&self, mask: u32) -> u32 {
            let mut current = self.umask.lock().unwrap();
            std::mem::replace(&mut *current, mask)
        }

        fn lookup_host(&self, host: &str) -> Result<HostRecord> {
            if let Some(kind) = self.resolver_failure {
                return Err(ResolverError::new(host, kind).into());
            }
            self.host
                .clone()
                .ok_or_else(|| ResolverError::new(host, ResolverErrorKind::HostNotFound).into())
        }
    }
}
