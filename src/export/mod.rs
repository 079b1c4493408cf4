//! Dataset output: CSV serialization and the console preview.

pub mod csv;
pub mod preview;
