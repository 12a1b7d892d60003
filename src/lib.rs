//! `daily-proverbs` - the day's chapter of Proverbs from a plain-text verse file.
//!
//! A day of the month selects one chapter (or, on the last day of a short
//! month, every remaining chapter up to 31). The verse file is filtered down
//! to those chapters and handed to a terminal renderer.

// Re-export public modules for use in integration tests and as a library
pub mod bible;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod render;
pub mod services;
pub mod style;
