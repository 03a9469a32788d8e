//! Defaults for addressing a Sanity dataset.

/// Dataset queried when none is configured.
pub const DEFAULT_DATASET: &str = "production";

/// Dated API version pinned for queries and mutations.
pub const DEFAULT_API_VERSION: &str = "2024-01-01";
