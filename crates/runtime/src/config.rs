pub const PROGRAM_NAME: &str = "sift";
pub const PROGRAM_LOG_LEVEL: &str = "SIFT_LOG_LEVEL";
