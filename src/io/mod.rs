//! File output for completed runs.

pub mod export;
