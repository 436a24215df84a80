//! Stage configuration for the typesetting pipeline.
//!
//! Each stage is either disabled (`None`) or enabled with its own options.
//! When deserializing, a stage accepts `true`, `false`, `null` or an options
//! object; a missing key means "enabled with defaults".

use crate::TypesetError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// How runs of hyphens become dashes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmDashReplacement {
    /// `--` becomes an em dash.
    #[default]
    Double,
    /// `---` becomes an em dash and `--` becomes an en dash.
    Triple,
}

/// Whether en dashes in numeric ranges keep (hair) spaces around them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnDashSpacing {
    /// Pad the dash with hair spaces.
    #[default]
    Open,
    /// Join the dash directly to both numbers.
    Closed,
}

/// Options for the quote stage. There are currently no knobs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotesOptions {}

/// Options for the punctuation stage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PunctuationOptions {
    /// Hyphen run handling.
    #[serde(default, alias = "em-dash-replacement")]
    pub em_dash_replacement: EmDashReplacement,
}

/// Options for the spacing stage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacesOptions {
    /// En dash padding in numeric ranges.
    #[serde(default, alias = "en-dash-spacing")]
    pub en_dash_spacing: EnDashSpacing,
}

/// Which stages run, and how.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypesetOptions {
    /// Quote disambiguation.
    #[serde(
        default = "enabled",
        deserialize_with = "deserialize_stage",
        serialize_with = "serialize_stage"
    )]
    pub quotes: Option<QuotesOptions>,
    /// Dash, ellipsis and non-breaking space normalization.
    #[serde(
        default = "enabled",
        deserialize_with = "deserialize_stage",
        serialize_with = "serialize_stage"
    )]
    pub punctuation: Option<PunctuationOptions>,
    /// Hair-space padding around dashes and operators.
    #[serde(
        default = "enabled",
        deserialize_with = "deserialize_stage",
        serialize_with = "serialize_stage"
    )]
    pub spaces: Option<SpacesOptions>,
}

impl TypesetOptions {
    /// Options with every stage disabled.
    pub const fn disabled() -> Self {
        Self {
            quotes: None,
            punctuation: None,
            spaces: None,
        }
    }

    /// Parses options from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, TypesetError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Returns true when no stage would run.
    pub fn is_noop(&self) -> bool {
        self.quotes.is_none() && self.punctuation.is_none() && self.spaces.is_none()
    }
}

impl Default for TypesetOptions {
    fn default() -> Self {
        Self {
            quotes: enabled(),
            punctuation: enabled(),
            spaces: enabled(),
        }
    }
}

fn enabled<T: Default>() -> Option<T> {
    Some(T::default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Stage<T> {
    Flag(bool),
    Options(T),
}

fn deserialize_stage<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(match Option::<Stage<T>>::deserialize(deserializer)? {
        None | Some(Stage::Flag(false)) => None,
        Some(Stage::Flag(true)) => Some(T::default()),
        Some(Stage::Options(options)) => Some(options),
    })
}

fn serialize_stage<S, T>(stage: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Serialize,
{
    match stage {
        Some(options) => options.serialize(serializer),
        None => serializer.serialize_bool(false),
    }
}
