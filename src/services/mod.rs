//! Service modules.
//!
//! Access to the verse resource lives here so the parser stays free of I/O
//! details and can be tested against in-memory text.

pub mod source;
