//! OS-level metadata extraction: ownership and permission triads.
//!
//! Everything here is normalized before it reaches a `FileRecord`, so the
//! engine never branches on platform type.

use std::fs::Metadata;

#[derive(Debug, Default)]
pub struct Ownership {
    pub uid: u32,
    pub gid: u32,
    pub user_name: String,
    pub group_name: String,
}

#[cfg(unix)]
pub fn ownership_of(meta: &Metadata) -> Ownership {
    use std::os::unix::fs::MetadataExt;

    let uid = meta.uid();
    let gid = meta.gid();

    Ownership {
        uid,
        gid,
        user_name: user_name_of(uid).unwrap_or_default(),
        group_name: group_name_of(gid).unwrap_or_default(),
    }
}

#[cfg(not(unix))]
pub fn ownership_of(_meta: &Metadata) -> Ownership {
    Ownership::default()
}

/// Owner/group/other triads from the entry's mode bits.
#[cfg(unix)]
pub fn permission_triads(meta: &Metadata) -> (String, String, String) {
    use std::os::unix::fs::MetadataExt;

    let mode = meta.mode();
    (triad(mode >> 6), triad(mode >> 3), triad(mode))
}

#[cfg(not(unix))]
pub fn permission_triads(meta: &Metadata) -> (String, String, String) {
    // Closest normalization available without unix mode bits.
    let owner = if meta.permissions().readonly() {
        "r--"
    } else {
        "rw-"
    };
    (owner.to_owned(), "---".to_owned(), "---".to_owned())
}

#[cfg(unix)]
fn triad(bits: u32) -> String {
    let mut s = String::with_capacity(3);
    s.push(if bits & 0o4 != 0 { 'r' } else { '-' });
    s.push(if bits & 0o2 != 0 { 'w' } else { '-' });
    s.push(if bits & 0o1 != 0 { 'x' } else { '-' });
    s
}

/// Resolve a uid to a user name via getpwuid_r. None on any failure;
/// callers downgrade that to an empty string.
#[cfg(unix)]
fn user_name_of(uid: u32) -> Option<String> {
    use std::ffi::CStr;

    let mut buf = vec![0 as libc::c_char; 1024];

    loop {
        let mut pwd: libc::passwd = unsafe { std::mem::zeroed() };
        let mut result: *mut libc::passwd = std::ptr::null_mut();

        let rc = unsafe {
            libc::getpwuid_r(uid, &mut pwd, buf.as_mut_ptr(), buf.len(), &mut result)
        };

        if rc == libc::ERANGE {
            // Entry larger than the buffer; retry with more room.
            if buf.len() >= 1 << 16 {
                return None;
            }
            buf.resize(buf.len() * 2, 0);
            continue;
        }

        if rc != 0 || result.is_null() {
            return None;
        }

        let name = unsafe { CStr::from_ptr(pwd.pw_name) };
        return name.to_str().ok().map(str::to_owned);
    }
}

/// Resolve a gid to a group name via getgrgid_r.
#[cfg(unix)]
fn group_name_of(gid: u32) -> Option<String> {
    use std::ffi::CStr;

    let mut buf = vec![0 as libc::c_char; 1024];

    loop {
        let mut grp: libc::group = unsafe { std::mem::zeroed() };
        let mut result: *mut libc::group = std::ptr::null_mut();

        let rc = unsafe {
            libc::getgrgid_r(gid, &mut grp, buf.as_mut_ptr(), buf.len(), &mut result)
        };

        if rc == libc::ERANGE {
            if buf.len() >= 1 << 16 {
                return None;
            }
            buf.resize(buf.len() * 2, 0);
            continue;
        }

        if rc != 0 || result.is_null() {
            return None;
        }

        let name = unsafe { CStr::from_ptr(grp.gr_name) };
        return name.to_str().ok().map(str::to_owned);
    }
}

#[cfg(test)]
#[path = "meta_tests.rs"]
mod tests;
