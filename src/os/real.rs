// file: src/os/real.rs
// version: 1.2.1
// guid: 5d94c0f7-1ea8-4b36-a1c2-8e67f2d315b9

//! Production [`OsFacade`] backed by libc and std::process.

use super::{resolver, HostRecord, OsFacade};
use crate::{CommandError, Result};
use std::os::unix::io::RawFd;
use std::os::unix::process::ExitStatusExt;
use std::process::Command;
use tracing::debug;

/// Exit status the shell reports when the command could not be found
const SHELL_NOT_FOUND: i32 = 127;

#[cfg(target_os = "linux")]
fn errno_ptr() -> *mut libc::c_int {
    unsafe { libc::__errno_location() }
}

#[cfg(target_os = "macos")]
fn errno_ptr() -> *mut libc::c_int {
    unsafe { libc::__error() }
}

/// The real operating system
#[derive(Debug, Default, Clone, Copy)]
pub struct RealOs;

impl RealOs {
    pub fn new() -> Self {
        Self
    }
}

impl OsFacade for RealOs {
    fn set_alarm(&self, seconds: f64) -> Result<f64> {
        let mut new: libc::itimerval = unsafe { std::mem::zeroed() };
        new.it_value.tv_sec = seconds.trunc() as libc::time_t;
        new.it_value.tv_usec = (seconds.fract() * 1_000_000.0).round() as libc::suseconds_t;

        let mut old: libc::itimerval = unsafe { std::mem::zeroed() };
        debug!("arming one-shot timer for {seconds}s");
        if unsafe { libc::setitimer(libc::ITIMER_REAL, &new, &mut old) } != 0 {
            return Err(CommandError::last_os("setitimer"));
        }
        Ok(old.it_value.tv_sec as f64 + old.it_value.tv_usec as f64 / 1_000_000.0)
    }

    fn hard_link(&self, src: &str, dest: &str) -> Result<()> {
        std::fs::hard_link(src, dest).map_err(|e| CommandError::os("link", e))
    }

    fn sym_link(&self, src: &str, dest: &str) -> Result<()> {
        std::os::unix::fs::symlink(src, dest).map_err(|e| CommandError::os("link", e))
    }

    fn get_priority(&self) -> Result<i32> {
        // -1 is a legal priority, so errno must be cleared first to tell a
        // result of -1 from a failure
        unsafe { *errno_ptr() = 0 };
        let priority = unsafe { libc::getpriority(libc::PRIO_PROCESS as _, 0) };
        if priority == -1 {
            let err = std::io::Error::last_os_error();
            if err.raw_os_error().unwrap_or(0) != 0 {
                return Err(CommandError::os("getpriority", err));
            }
        }
        Ok(priority)
    }

    fn adjust_priority(&self, delta: i32) -> Result<i32> {
        let target = self.get_priority()? + delta;
        if unsafe { libc::setpriority(libc::PRIO_PROCESS as _, 0, target) } != 0 {
            return Err(CommandError::last_os("setpriority"));
        }
        Ok(target)
    }

    fn sleep(&self, seconds: u32) -> u32 {
        // Returns early if a signal interrupts the sleep; the remainder is
        // reported, not retried
        unsafe { libc::sleep(seconds) }
    }

    fn sync_all(&self) {
        unsafe { libc::sync() }
    }

    fn fsync(&self, fd: RawFd) -> Result<()> {
        if unsafe { libc::fsync(fd) } != 0 {
            return Err(CommandError::last_os("fsync"));
        }
        Ok(())
    }

    fn run_shell(&self, command: &str) -> Result<i32> {
        debug!("running shell command: {command}");
        let status = Command::new("/bin/sh")
            .arg("-c")
            .arg(command)
            .status()
            .map_err(|e| CommandError::os("system", e))?;

        match status.code() {
            Some(SHELL_NOT_FOUND) => Err(CommandError::os(
                "system",
                std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("shell could not run \"{command}\": command not found"),
                ),
            )),
            Some(code) => Ok(code),
            None => {
                let signal = status.signal().unwrap_or(0);
                Err(CommandError::os(
                    "system",
                    std::io::Error::new(
                        std::io::ErrorKind::Interrupted,
                        format!("child process terminated by signal {signal}"),
                    ),
                ))
            }
        }
    }

    fn set_umask(&self, mask: u32) -> u32 {
        (unsafe { libc::umask(mask as libc::mode_t) }) as u32
    }

    fn lookup_host(&self, host: &str) -> Result<HostRecord> {
        resolver::lookup(host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::os::unix::fs::PermissionsExt;
    use std::os::unix::io::AsRawFd;

    #[test]
    fn test_set_alarm_zero_cancels_and_reports_remaining() {
        let os = RealOs::new();
        let previous = os.set_alarm(0.0).unwrap();
        assert!(previous >= 0.0);
    }

    #[test]
    fn test_sleep_zero_returns_promptly() {
        let os = RealOs::new();
        assert_eq!(os.sleep(0), 0);
    }

    #[test]
    fn test_get_priority_succeeds() {
        let os = RealOs::new();
        let priority = os.get_priority().unwrap();
        assert!((-20..=19).contains(&priority));
    }

    #[test]
    fn test_run_shell_reports_exit_code() {
        let os = RealOs::new();
        assert_eq!(os.run_shell("exit 7").unwrap(), 7);
        assert_eq!(os.run_shell("true").unwrap(), 0);
    }

    #[test]
    fn test_run_shell_command_not_found_is_an_error() {
        let os = RealOs::new();
        let err = os.run_shell("nosuchprogram123").unwrap_err();
        assert!(err.to_string().contains("command not found"));
    }

    #[test]
    fn test_hard_link_then_duplicate_destination_fails() {
        let os = RealOs::new();
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src");
        let dest = dir.path().join("dest");
        std::fs::write(&src, b"data").unwrap();

        os.hard_link(src.to_str().unwrap(), dest.to_str().unwrap())
            .unwrap();
        assert!(dest.exists());

        let err = os
            .hard_link(src.to_str().unwrap(), dest.to_str().unwrap())
            .unwrap_err();
        assert_eq!(err.os_code(), Some(libc::EEXIST));
    }

    #[test]
    fn test_sym_link_points_at_source() {
        let os = RealOs::new();
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("target");
        let dest = dir.path().join("sym");
        std::fs::write(&src, b"data").unwrap();

        os.sym_link(src.to_str().unwrap(), dest.to_str().unwrap())
            .unwrap();
        assert_eq!(std::fs::read_link(&dest).unwrap(), src);
    }

    #[test]
    fn test_fsync_open_descriptor() {
        let os = RealOs::new();
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        tmp.write_all(b"contents").unwrap();
        os.fsync(tmp.as_file().as_raw_fd()).unwrap();
    }

    #[test]
    fn test_umask_round_trip_and_file_mode() {
        let os = RealOs::new();
        let prior = os.set_umask(0o022);
        assert_eq!(os.set_umask(0o022), 0o022);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("masked");
        std::fs::File::create(&path).unwrap();
        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o666 & !0o022);

        os.set_umask(prior);
    }

    #[test]
    fn test_lookup_loopback_by_address() {
        let os = RealOs::new();
        let record = os.lookup_host("127.0.0.1").unwrap();
        assert!(record.addresses.contains(&"127.0.0.1".to_string()));
        assert!(!record.canonical_name.is_empty());
    }
}
