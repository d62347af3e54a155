//! Result output.
//!
//! Profiles are written as whitespace-separated text, one interior cell per
//! row, with the run metadata in a commented header.

mod profile;

pub use profile::{OutputError, RunLabel, write_profile, write_profile_file};
