//! Error types and error reporting for the parser.
//!
//! This module defines:
//!
//! - Error structures carrying the failing token's position
//! - Specific error variants for each structural failure
//! - Source excerpt rendering with the offending character marked

pub mod errors;
pub mod report;
