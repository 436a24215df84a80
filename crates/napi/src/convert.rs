use crate::types::TypesetConfig;
use typeset_core::{
    EmDashReplacement, EnDashSpacing, PunctuationOptions, QuotesOptions, SpacesOptions,
    TypesetError, TypesetOptions,
};
use typeset_html::HtmlOptions;

/// Converts `TypesetConfig` to `HtmlOptions`.
pub fn to_html_options(config: Option<TypesetConfig>) -> napi::Result<HtmlOptions> {
    let Some(config) = config else {
        return Ok(HtmlOptions::default());
    };

    let em_dash_replacement = match config.em_dash_replacement.as_deref() {
        None | Some("double") => EmDashReplacement::Double,
        Some("triple") => EmDashReplacement::Triple,
        Some(other) => return Err(invalid(format!("unknown emDashReplacement `{other}`"))),
    };
    let en_dash_spacing = match config.en_dash_spacing.as_deref() {
        None | Some("open") => EnDashSpacing::Open,
        Some("closed") => EnDashSpacing::Closed,
        Some(other) => return Err(invalid(format!("unknown enDashSpacing `{other}`"))),
    };

    let enabled = |flag: Option<bool>| flag.unwrap_or(true);
    let typeset = TypesetOptions {
        quotes: enabled(config.quotes).then(QuotesOptions::default),
        punctuation: enabled(config.punctuation).then_some(PunctuationOptions {
            em_dash_replacement,
        }),
        spaces: enabled(config.spaces).then_some(SpacesOptions { en_dash_spacing }),
    };

    let mut options = HtmlOptions::from(typeset);
    if let Some(ignored_elements) = config.ignored_elements {
        options.ignored_elements = ignored_elements;
    }
    Ok(options)
}

/// Converts a core error into a JS-facing error.
pub fn to_napi_error(err: TypesetError) -> napi::Error {
    napi::Error::from_reason(err.to_string())
}

fn invalid(message: String) -> napi::Error {
    to_napi_error(TypesetError::InvalidOptions(message))
}
