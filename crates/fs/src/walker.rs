use std::{
    fs::{self, Metadata, read_dir},
    io::Result,
    path::Path,
    time::{SystemTime, UNIX_EPOCH},
};

use crossbeam::channel::Sender;
use log::warn;

use crate::{
    config::BATCH_SIZE,
    meta::{ownership_of, permission_triads},
    record::FileRecord,
};

#[derive(Debug, Clone, Copy)]
pub struct WalkOptions {
    /// Entries deeper than this (root = 0) are silently skipped.
    pub max_depth: usize,
}

/// Walk the tree under `root` in deterministic preorder, sending batched
/// records to `tx`.
///
/// Directory entries are visited sorted by name, so for a fixed tree the
/// record sequence is identical across runs. The root entry itself is the
/// first record, at depth 0. Entries beyond `max_depth` are never submitted,
/// and recursion stops where nothing deeper could qualify.
///
/// Unreadable directories and entries are logged and skipped; only a missing
/// or unreadable root is an error.
pub fn walk(root: &Path, opts: WalkOptions, tx: &Sender<Vec<FileRecord>>) -> Result<()> {
    let mut batch = Vec::with_capacity(BATCH_SIZE);

    let root_meta = fs::symlink_metadata(root)?;
    let recurse = root_meta.is_dir();

    if let Some(record) = build_record(root, &root_meta, 0) {
        push_record(record, &mut batch, tx);
    }

    if recurse && opts.max_depth > 0 {
        scan_dir(root, 1, opts.max_depth, &mut batch, tx);
    }

    if !batch.is_empty() {
        let _ = tx.send(batch);
    }

    Ok(())
}

/// Scan one directory at `depth`, recursing into subdirectories.
fn scan_dir(
    dir: &Path,
    depth: usize,
    max_depth: usize,
    batch: &mut Vec<FileRecord>,
    tx: &Sender<Vec<FileRecord>>,
) {
    let rd = match read_dir(dir) {
        Ok(rd) => rd,
        Err(e) => {
            warn!("[walk] read_dir({:?}) failed: {e}", dir);
            return;
        }
    };

    // Sort by name so traversal order is stable run to run.
    let mut entries: Vec<fs::DirEntry> = Vec::new();
    for entry_res in rd {
        match entry_res {
            Ok(e) => entries.push(e),
            Err(e) => {
                warn!("[walk] error reading entry in {:?}: {e}", dir);
            }
        }
    }
    entries.sort_by_key(|e| e.file_name());

    for entry in entries {
        // DirEntry::metadata does not follow symlinks, matching the
        // false/false row contract for links.
        let metadata = match entry.metadata() {
            Ok(m) => m,
            Err(e) => {
                warn!("[walk] metadata({:?}) failed: {e}", entry.path());
                continue;
            }
        };

        let path = entry.path();
        if let Some(record) = build_record(&path, &metadata, depth) {
            let is_dir = record.is_dir;
            push_record(record, batch, tx);

            if is_dir && depth < max_depth {
                scan_dir(&path, depth + 1, max_depth, batch, tx);
            }
        }
    }
}

fn push_record(record: FileRecord, batch: &mut Vec<FileRecord>, tx: &Sender<Vec<FileRecord>>) {
    batch.push(record);
    if batch.len() >= BATCH_SIZE {
        let to_send = std::mem::take(batch);
        // A closed receiver means the run is over; nothing useful to do here.
        let _ = tx.send(to_send);
    }
}

/// Build the record for one entry. Returns None for names that are not
/// valid UTF-8; such entries are not representable in the store's schema.
fn build_record(path: &Path, metadata: &Metadata, depth: usize) -> Option<FileRecord> {
    let name = match path.file_name() {
        Some(os) => os.to_str()?.to_owned(),
        // Paths like "/" have no base name component.
        None => path.to_str()?.to_owned(),
    };

    let file_type = metadata.file_type();
    let is_regular = file_type.is_file();
    let is_dir = file_type.is_dir();

    let ownership = ownership_of(metadata);
    let (perm_owner, perm_group, perm_other) = permission_triads(metadata);

    Some(FileRecord {
        path: path.to_path_buf(),
        name,
        size: metadata.len(),
        depth,
        is_regular,
        is_dir,
        uid: ownership.uid,
        gid: ownership.gid,
        user_name: ownership.user_name,
        group_name: ownership.group_name,
        perm_owner,
        perm_group,
        perm_other,
        atime_secs: to_unix_secs(metadata.accessed().ok()),
        ctime_secs: to_unix_secs(metadata.created().ok()),
        mtime_secs: to_unix_secs(metadata.modified().ok()),
    })
}

fn to_unix_secs(t: Option<SystemTime>) -> u64 {
    t.and_then(|tt| tt.duration_since(UNIX_EPOCH).ok())
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
