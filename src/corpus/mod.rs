//! Corpus assembly: per-file record building and labeled-folder loading.

pub mod builder;
pub mod loader;
