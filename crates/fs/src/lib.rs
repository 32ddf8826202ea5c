mod config;
mod meta;
mod record;
mod walker;

pub use config::BATCH_SIZE;
pub use record::FileRecord;
pub use walker::{WalkOptions, walk};
