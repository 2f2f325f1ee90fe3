//! Explicit admin-layer configuration.
//!
//! Threaded through the filter builder and operations as a value; nothing
//! in the crate reads ambient global state.

/// Locale, pagination and export settings shared by listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminConfig {
    /// Locale used to scope translated-attribute lookups.
    pub locale: String,
    /// Locales offered for translated editing.
    pub available_locales: Vec<String>,
    /// Page size when the caller supplies none.
    pub default_per_page: u64,
    /// Page sizes offered by listing screens.
    pub per_page_options: Vec<u64>,
    /// Row cap for streaming exports.
    pub export_row_limit: u64,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
            available_locales: vec!["en".to_string()],
            default_per_page: 20,
            per_page_options: vec![20, 30, 50, 100, 150],
            export_row_limit: 5000,
        }
    }
}
