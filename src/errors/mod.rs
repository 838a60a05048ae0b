//! Error types for the lexer.
//!
//! - Error structures with source position information
//! - The unrecognised-character failure raised by the driver
//! - Keyword table validation errors
//! - Names and tips used by the diagnostic renderer

pub mod errors;
