//! Domain types for job-posting extraction.

pub mod job;

pub use job::JobRecord;
