// file: src/interp/channels.rs
// version: 1.0.1
// guid: c4d19a72-85e0-4f2b-9317-6ab0de52f984

//! Open-channel registry.
//!
//! An embedding interpreter registers its open streams here under handle
//! names; commands that take a file handle (currently only `sync`) look the
//! handle up and require the right direction before touching the OS.

use crate::{CommandError, Result};
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::os::unix::io::{AsRawFd, RawFd};

/// Direction a channel was opened in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelDirection {
    Read,
    Write,
    ReadWrite,
}

impl ChannelDirection {
    pub fn writable(&self) -> bool {
        matches!(self, ChannelDirection::Write | ChannelDirection::ReadWrite)
    }
}

/// A registered stream: a buffered writer for writable channels, a bare
/// file for read-only ones
#[derive(Debug)]
enum ChannelStream {
    Writer(BufWriter<File>),
    Reader(File),
}

/// One open channel known to the registry
#[derive(Debug)]
pub struct Channel {
    direction: ChannelDirection,
    stream: ChannelStream,
}

impl Channel {
    pub fn direction(&self) -> ChannelDirection {
        self.direction
    }

    /// Flush the interpreter-level output buffer
    pub fn flush(&mut self) -> io::Result<()> {
        match &mut self.stream {
            ChannelStream::Writer(w) => w.flush(),
            ChannelStream::Reader(_) => Ok(()),
        }
    }

    /// The underlying OS file descriptor
    pub fn raw_fd(&self) -> RawFd {
        match &self.stream {
            ChannelStream::Writer(w) => w.get_ref().as_raw_fd(),
            ChannelStream::Reader(f) => f.as_raw_fd(),
        }
    }

    /// Write through the channel's buffer (test and embedder convenience)
    pub fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        match &mut self.stream {
            ChannelStream::Writer(w) => w.write_all(buf),
            ChannelStream::Reader(_) => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "channel not opened for writing",
            )),
        }
    }
}

/// Registry mapping handle names to open channels
#[derive(Default)]
pub struct ChannelRegistry {
    channels: HashMap<String, Channel>,
}

impl ChannelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a writable channel under a handle name
    pub fn register_writer(&mut self, handle: impl Into<String>, file: File) {
        self.channels.insert(
            handle.into(),
            Channel {
                direction: ChannelDirection::Write,
                stream: ChannelStream::Writer(BufWriter::new(file)),
            },
        );
    }

    /// Register a read-only channel under a handle name
    pub fn register_reader(&mut self, handle: impl Into<String>, file: File) {
        self.channels.insert(
            handle.into(),
            Channel {
                direction: ChannelDirection::Read,
                stream: ChannelStream::Reader(file),
            },
        );
    }

    /// Look up a channel that must be open for writing
    pub fn writable(&mut self, handle: &str) -> Result<&mut Channel> {
        match self.channels.get_mut(handle) {
            None => Err(CommandError::channel(format!(
                "can not find channel named \"{handle}\""
            ))),
            Some(c) if !c.direction.writable() => Err(CommandError::channel(format!(
                "channel \"{handle}\" wasn't opened for writing"
            ))),
            Some(c) => Ok(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn test_unknown_handle() {
        let mut registry = ChannelRegistry::new();
        let err = registry.writable("file3").unwrap_err();
        assert_eq!(err.to_string(), "can not find channel named \"file3\"");
    }

    #[test]
    fn test_read_only_handle_rejected_for_writing() {
        let mut registry = ChannelRegistry::new();
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let file = File::open(tmp.path()).unwrap();
        registry.register_reader("file1", file);

        let err = registry.writable("file1").unwrap_err();
        assert_eq!(
            err.to_string(),
            "channel \"file1\" wasn't opened for writing"
        );
    }

    #[test]
    fn test_flush_pushes_buffered_bytes_to_file() {
        let mut registry = ChannelRegistry::new();
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let file = File::create(tmp.path()).unwrap();
        registry.register_writer("file2", file);

        let chan = registry.writable("file2").unwrap();
        chan.write_all(b"buffered").unwrap();
        chan.flush().unwrap();

        let mut contents = String::new();
        File::open(tmp.path())
            .unwrap()
            .read_to_string(&mut contents)
            .unwrap();
        assert_eq!(contents, "buffered");
    }
}
