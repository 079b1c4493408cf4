//! `mailcorpus` — build tabular datasets from labeled email folders.
//!
//! This crate ingests a corpus of email files stored in two labeled
//! directories (spam, ham), extracts a normalized plain-text view of each
//! message's subject and body, and writes the result as a CSV dataset for
//! downstream classification.

pub mod config;
pub mod corpus;
pub mod error;
pub mod export;
pub mod extract;
pub mod model;
pub mod parser;
