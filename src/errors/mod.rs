//! Error types for the front end.
//!
//! Syntax errors are recoverable: the parser records each one as a
//! diagnostic and keeps going. This module defines:
//!
//! - Error structures with the source offset of the offending token
//! - The error variants and their diagnostic texts
//! - Presentation helpers (name and tip) for the read-loop

pub mod errors;
