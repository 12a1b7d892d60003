//! Application constants.
//!
//! Centralizes magic numbers and configuration values for better maintainability.

/// Reading plan constants.
pub mod reading {
    /// Highest chapter in Proverbs; one chapter per day of a 31-day month.
    pub const LAST_CHAPTER: u32 = 31;

    /// Book name used in headings.
    pub const BOOK_NAME: &str = "Proverbs";

    /// File name of the verse resource.
    pub const RESOURCE_FILE: &str = "Proverbs.txt";

    /// Message carried by the sentinel verse when the resource cannot be read.
    pub const MISSING_RESOURCE_MESSAGE: &str = "Verse file Proverbs.txt is missing";
}

/// Environment variable names read by the configuration layer.
pub mod env {
    /// Path to the verse resource file.
    pub const RESOURCE_PATH: &str = "PROVERBS_PATH";

    /// Default text colour (a palette name or `mixed`).
    pub const COLOR: &str = "PROVERBS_COLOR";
}

/// Logging constants.
pub mod logging {
    /// Filter used when `RUST_LOG` is unset.
    pub const DEFAULT_FILTER: &str = "warn";
}
