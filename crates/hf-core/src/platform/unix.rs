//! Portable POSIX wrappers: uname, gethostname, passwd lookup, and
//! interface enumeration.
//!
//! Each wrapper owns its buffers for the duration of one call and converts
//! failure into `None`; no errno handling leaks to callers.

use std::ffi::CStr;
use std::net::Ipv4Addr;

/// Fields of interest from `uname(2)`.
#[derive(Debug, Clone)]
pub struct UnameInfo {
    /// Kernel release, e.g. `6.8.0-45-generic`.
    pub release: String,

    /// Machine architecture, e.g. `x86_64`.
    pub machine: String,
}

/// Kernel release and machine architecture.
pub fn uname_info() -> Option<UnameInfo> {
    let mut name: libc::utsname = unsafe { std::mem::zeroed() };
    if unsafe { libc::uname(&mut name) } != 0 {
        return None;
    }
    Some(UnameInfo {
        release: fixed_cstr(&name.release),
        machine: fixed_cstr(&name.machine),
    })
}

/// The system hostname.
pub fn hostname() -> Option<String> {
    let mut buf = [0 as libc::c_char; 256];
    if unsafe { libc::gethostname(buf.as_mut_ptr(), buf.len() - 1) } != 0 {
        return None;
    }
    let name = fixed_cstr(&buf);
    (!name.is_empty()).then_some(name)
}

/// Login name for the effective uid via the passwd database.
pub fn username() -> Option<String> {
    let uid = unsafe { libc::geteuid() };
    let mut pwd: libc::passwd = unsafe { std::mem::zeroed() };
    let mut buf = [0 as libc::c_char; 4096];
    let mut result: *mut libc::passwd = std::ptr::null_mut();

    let rc = unsafe { libc::getpwuid_r(uid, &mut pwd, buf.as_mut_ptr(), buf.len(), &mut result) };
    if rc != 0 || result.is_null() || pwd.pw_name.is_null() {
        return None;
    }

    let name = unsafe { CStr::from_ptr(pwd.pw_name) }
        .to_string_lossy()
        .into_owned();
    (!name.is_empty()).then_some(name)
}

/// First non-loopback IPv4 address in OS-reported interface order.
pub fn first_external_ipv4() -> Option<Ipv4Addr> {
    let mut ifap: *mut libc::ifaddrs = std::ptr::null_mut();
    if unsafe { libc::getifaddrs(&mut ifap) } != 0 {
        return None;
    }

    let mut found = None;
    let mut cursor = ifap;
    while !cursor.is_null() {
        let ifa = unsafe { &*cursor };
        cursor = ifa.ifa_next;

        if ifa.ifa_addr.is_null() {
            continue;
        }
        if unsafe { (*ifa.ifa_addr).sa_family } != libc::AF_INET as libc::sa_family_t {
            continue;
        }
        let sin = unsafe { &*(ifa.ifa_addr as *const libc::sockaddr_in) };
        let addr = Ipv4Addr::from(u32::from_be(sin.sin_addr.s_addr));
        if !addr.is_loopback() {
            found = Some(addr);
            break;
        }
    }

    unsafe { libc::freeifaddrs(ifap) };
    found
}

/// Decode a fixed-size, nul-terminated C string field.
fn fixed_cstr(field: &[libc::c_char]) -> String {
    let bytes: Vec<u8> = field
        .iter()
        .take_while(|&&c| c != 0)
        .map(|&c| c as u8)
        .collect();
    String::from_utf8_lossy(&bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uname_info_on_live_system() {
        let info = uname_info().expect("uname should succeed");
        assert!(!info.release.is_empty());
        assert!(!info.machine.is_empty());
    }

    #[test]
    fn test_hostname_on_live_system() {
        let name = hostname().expect("gethostname should succeed");
        assert!(!name.is_empty());
    }

    #[test]
    fn test_username_when_passwd_entry_exists() {
        // Minimal containers may lack a passwd entry for the current uid;
        // only assert shape when a value comes back.
        if let Some(name) = username() {
            assert!(!name.is_empty());
        }
    }

    #[test]
    fn test_first_external_ipv4_never_loopback() {
        if let Some(addr) = first_external_ipv4() {
            assert!(!addr.is_loopback());
        }
    }
}
