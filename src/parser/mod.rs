//! Message parsing: the `mail-parser` adapter and lenient byte recovery.

pub mod mime;
