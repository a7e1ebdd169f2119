// file: src/os/resolver.rs
// version: 1.0.2
// guid: e28a64b1-9f05-4dc7-b833-417cf6a90d52

//! Host lookups over the C resolver.
//!
//! A dotted-quad argument is resolved by address (reverse lookup), anything
//! else by name. `gethostbyname`/`gethostbyaddr` hand back a static buffer
//! and are not thread-safe; this surface runs one lookup at a time per the
//! single-threaded process model.

use super::HostRecord;
use crate::error::{ResolverError, ResolverErrorKind};
use crate::Result;
use std::ffi::CStr;
use std::ffi::CString;
use std::net::Ipv4Addr;
use tracing::debug;

// Resolver entry points from <netdb.h>; recent libc releases removed these
// deprecated bindings, so declare them directly.
extern "C" {
    fn gethostbyname(name: *const libc::c_char) -> *mut libc::hostent;
    fn gethostbyaddr(
        addr: *const libc::c_void,
        len: libc::socklen_t,
        family: libc::c_int,
    ) -> *mut libc::hostent;
}

// h_errno values from <netdb.h>; the libc crate does not export them
const HOST_NOT_FOUND: libc::c_int = 1;
const TRY_AGAIN: libc::c_int = 2;
const NO_RECOVERY: libc::c_int = 3;
const NO_DATA: libc::c_int = 4;

#[cfg(target_os = "linux")]
fn h_errno() -> libc::c_int {
    extern "C" {
        fn __h_errno_location() -> *mut libc::c_int;
    }
    unsafe { *__h_errno_location() }
}

#[cfg(not(target_os = "linux"))]
fn h_errno() -> libc::c_int {
    HOST_NOT_FOUND
}

/// Mapping table from the platform's h_errno codes to the closed error set
fn failure_kind(code: libc::c_int) -> ResolverErrorKind {
    match code {
        HOST_NOT_FOUND => ResolverErrorKind::HostNotFound,
        TRY_AGAIN => ResolverErrorKind::TryAgain,
        NO_RECOVERY => ResolverErrorKind::NoRecovery,
        NO_DATA => ResolverErrorKind::NoData,
        _ => ResolverErrorKind::NoRecovery,
    }
}

/// Resolve a host name or dotted-quad address to its record
pub fn lookup(host: &str) -> Result<HostRecord> {
    debug!("resolving host: {host}");
    let entry = if let Ok(addr) = host.parse::<Ipv4Addr>() {
        // octets are already in network byte order
        let in_addr = libc::in_addr {
            s_addr: u32::from_ne_bytes(addr.octets()),
        };
        unsafe {
            gethostbyaddr(
                &in_addr as *const libc::in_addr as *const libc::c_void,
                std::mem::size_of::<libc::in_addr>() as libc::socklen_t,
                libc::AF_INET,
            )
        }
    } else {
        let c_host = CString::new(host)
            .map_err(|_| ResolverError::new(host, ResolverErrorKind::HostNotFound))?;
        unsafe { gethostbyname(c_host.as_ptr()) }
    };

    if entry.is_null() {
        return Err(ResolverError::new(host, failure_kind(h_errno())).into());
    }
    Ok(unsafe { record_from_hostent(&*entry) })
}

/// Copy the resolver's static hostent into an owned record.
///
/// Safety: `entry` must point at a hostent freshly returned by the resolver,
/// with its name/alias/address lists intact.
unsafe fn record_from_hostent(entry: &libc::hostent) -> HostRecord {
    let canonical_name = CStr::from_ptr(entry.h_name).to_string_lossy().into_owned();

    let mut addresses = Vec::new();
    if entry.h_addrtype == libc::AF_INET && entry.h_length == 4 {
        let mut list = entry.h_addr_list;
        while !(*list).is_null() {
            let octets = *(*list as *const [u8; 4]);
            addresses.push(Ipv4Addr::from(octets).to_string());
            list = list.add(1);
        }
    }

    let mut aliases = Vec::new();
    let mut list = entry.h_aliases;
    while !(*list).is_null() {
        aliases.push(CStr::from_ptr(*list).to_string_lossy().into_owned());
        list = list.add(1);
    }

    HostRecord {
        addresses,
        canonical_name,
        aliases,
    }
}
