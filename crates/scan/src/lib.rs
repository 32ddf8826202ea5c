use std::{path::Path, thread};

use anyhow::{Context, Error, Result};
use crossbeam::channel;
use log::info;

use sift_engine::Store;
use sift_fs::{FileRecord, WalkOptions, walk};

/// Walk the tree under `root` and return a store populated with one record
/// per visited entry.
///
/// The walker runs on its own thread and sends batches over a channel; this
/// function's receive loop is the single writer, so store order is exactly
/// the order records were committed.
pub fn populate_store(root: &Path, max_depth: usize) -> Result<Store> {
    let root = root
        .canonicalize()
        .with_context(|| format!("cannot resolve search root {}", root.display()))?;

    info!("[scan] absolute path is {}", root.display());

    let (record_tx, record_rx) = channel::unbounded::<Vec<FileRecord>>();

    let walker_handle = {
        let root = root.clone();
        thread::spawn(move || walk(&root, WalkOptions { max_depth }, &record_tx))
    };

    let mut store = Store::new();
    while let Ok(batch) = record_rx.recv() {
        for record in batch {
            store.insert(record);
        }
    }

    let walk_result = walker_handle
        .join()
        .map_err(|_| Error::msg("filesystem walker thread panicked"))?;
    walk_result.with_context(|| format!("walk of {} failed", root.display()))?;

    info!("[scan] {} entries inserted", store.len());

    Ok(store)
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
