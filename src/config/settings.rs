//! Scaffold settings
//!
//! Holds the page set a run generates. The defaults reproduce the stock
//! layout: a `Search` page and an `Experiments` page.

use serde::{Deserialize, Serialize};

use crate::error::ScaffoldError;

/// Pages generated when the caller supplies none
pub const DEFAULT_PAGES: [&str; 2] = ["Search", "Experiments"];

/// File stems Windows refuses to create, regardless of extension
const RESERVED_FILE_STEMS: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7",
    "COM8", "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// Settings for one scaffold run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaffoldSettings {
    /// Page component names, written in order
    pub pages: Vec<String>,
}

impl Default for ScaffoldSettings {
    fn default() -> Self {
        Self {
            pages: DEFAULT_PAGES.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl ScaffoldSettings {
    /// Build settings from caller-supplied page names
    ///
    /// An empty list falls back to the default pages.
    pub fn with_pages<I, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let pages: Vec<String> = pages.into_iter().map(Into::into).collect();
        if pages.is_empty() {
            Self::default()
        } else {
            Self { pages }
        }
    }

    /// Check every page name before anything touches the filesystem
    pub fn validate(&self) -> Result<(), ScaffoldError> {
        if self.pages.is_empty() {
            return Err(ScaffoldError::Validation(
                "At least one page name is required".into(),
            ));
        }

        for (i, page) in self.pages.iter().enumerate() {
            validate_page_name(page)?;

            // `Search` and `SEARCH` land on the same file on case-insensitive filesystems
            if self.pages[..i].iter().any(|p| p.eq_ignore_ascii_case(page)) {
                return Err(ScaffoldError::Validation(format!(
                    "Duplicate page name '{}'",
                    page
                )));
            }
        }

        Ok(())
    }
}

/// Validate that a page name can be interpolated into a component identifier
pub fn validate_page_name(name: &str) -> Result<(), ScaffoldError> {
    let mut chars = name.chars();

    let first = chars.next().ok_or_else(|| {
        ScaffoldError::Validation("Page name cannot be empty".into())
    })?;

    if !first.is_ascii_uppercase() {
        return Err(ScaffoldError::Validation(format!(
            "Invalid page name '{}' - must start with an uppercase letter (e.g. Search)",
            name
        )));
    }

    if let Some(bad) = chars.find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '$')) {
        return Err(ScaffoldError::Validation(format!(
            "Invalid page name '{}' - character {:?} is not allowed in an identifier",
            name, bad
        )));
    }

    // An upper-case first letter keeps `<Name>Page` clear of JS keywords;
    // the name is still a file stem, though.
    if RESERVED_FILE_STEMS
        .iter()
        .any(|stem| stem.eq_ignore_ascii_case(name))
    {
        return Err(ScaffoldError::Validation(format!(
            "Invalid page name '{}' - reserved file name",
            name
        )));
    }

    Ok(())
}
