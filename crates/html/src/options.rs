//! Options for the HTML adapter.

use serde::{Deserialize, Serialize};
use typeset_core::{TypesetError, TypesetOptions};

/// Elements whose whole subtree is left verbatim by default.
pub const DEFAULT_IGNORED_ELEMENTS: &[&str] = &["script", "style", "pre", "code"];

/// Stage options plus the set of elements the adapter must not enter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HtmlOptions {
    /// Stages to run on eligible text.
    #[serde(flatten)]
    pub typeset: TypesetOptions,
    /// Element names whose content is never rewritten.
    #[serde(default = "default_ignored_elements")]
    pub ignored_elements: Vec<String>,
}

impl HtmlOptions {
    /// Parses options from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, TypesetError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Lowercased ignored element names, rejecting anything that is not a
    /// plain tag name.
    pub fn ignored_tag_names(&self) -> Result<Vec<String>, TypesetError> {
        self.ignored_elements
            .iter()
            .map(|name| {
                let valid = !name.is_empty()
                    && name.starts_with(|c: char| c.is_ascii_alphabetic())
                    && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');
                if valid {
                    Ok(name.to_ascii_lowercase())
                } else {
                    Err(TypesetError::InvalidOptions(format!(
                        "`{name}` is not an element name"
                    )))
                }
            })
            .collect()
    }
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            typeset: TypesetOptions::default(),
            ignored_elements: default_ignored_elements(),
        }
    }
}

impl From<TypesetOptions> for HtmlOptions {
    fn from(typeset: TypesetOptions) -> Self {
        Self {
            typeset,
            ..Self::default()
        }
    }
}

fn default_ignored_elements() -> Vec<String> {
    DEFAULT_IGNORED_ELEMENTS
        .iter()
        .map(|name| name.to_string())
        .collect()
}
