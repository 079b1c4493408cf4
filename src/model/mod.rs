//! Core data model types for parsed messages and output records.

pub mod message;
pub mod record;
