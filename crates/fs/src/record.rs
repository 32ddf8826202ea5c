use std::path::PathBuf;

/// One filesystem entry's metadata snapshot. One row of the store.
#[derive(Debug, Clone)]
pub struct FileRecord {
    /// Absolute path of the entry
    pub path: PathBuf,
    /// Base name only
    pub name: String,
    /// Size in bytes
    pub size: u64,
    /// Distance from the search root (root itself = 0)
    pub depth: usize,
    /// True iff the entry is a regular file
    pub is_regular: bool,
    /// True iff the entry is a directory.
    /// Symlinks and special files carry false for both flags.
    pub is_dir: bool,
    /// Numeric owner/group ids (0 where the platform has none)
    pub uid: u32,
    pub gid: u32,
    /// Resolved owner/group names; empty string when lookup fails
    pub user_name: String,
    pub group_name: String,
    /// rwx-style permission triads, e.g. "rw-"
    pub perm_owner: String,
    pub perm_group: String,
    pub perm_other: String,
    /// Timestamps as unix seconds; 0 when the platform reports none
    pub atime_secs: u64,
    pub ctime_secs: u64,
    pub mtime_secs: u64,
}
