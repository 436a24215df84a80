//! The typesetting pipeline: ordered text transforms built from options.

use crate::options::TypesetOptions;
use crate::punctuation::Punctuation;
use crate::quotes::Quotes;
use crate::spaces::Spaces;
use regex::{Regex, Replacer};
use std::borrow::Cow;

/// A pure string rewrite.
pub trait TextTransform {
    /// Transform the input text, returning an owned or borrowed string.
    fn transform<'a>(&self, input: &'a str) -> Cow<'a, str>;
}

impl<F> TextTransform for F
where
    F: for<'a> Fn(&'a str) -> Cow<'a, str>,
{
    fn transform<'a>(&self, input: &'a str) -> Cow<'a, str> {
        (self)(input)
    }
}

/// Runs the enabled stages, in order, over text fragments.
///
/// Built once from [`TypesetOptions`] and shareable across threads.
pub struct Typesetter {
    stages: Vec<(&'static str, Box<dyn TextTransform + Send + Sync>)>,
}

impl Typesetter {
    /// Create a typesetter running the stages enabled in `options`.
    pub fn new(options: &TypesetOptions) -> Self {
        let mut typesetter = Self { stages: Vec::new() };
        if options.quotes.is_some() {
            typesetter.add_stage("quotes", Quotes);
        }
        if let Some(punctuation) = &options.punctuation {
            typesetter.add_stage("punctuation", Punctuation::new(punctuation.clone()));
        }
        if let Some(spaces) = &options.spaces {
            typesetter.add_stage("spaces", Spaces::new(spaces.clone()));
        }
        typesetter
    }

    /// Append a stage that runs after the existing ones.
    pub fn add_stage<T>(&mut self, name: &'static str, stage: T)
    where
        T: TextTransform + Send + Sync + 'static,
    {
        self.stages.push((name, Box::new(stage)));
    }

    /// Names of the stages that will run, in order.
    pub fn stage_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.stages.iter().map(|(name, _)| *name)
    }

    /// Transform one text fragment. Never fails.
    pub fn transform(&self, fragment: &str) -> String {
        self.transform_cow(fragment).into_owned()
    }

    /// Like [`Typesetter::transform`], but borrows when nothing changed.
    pub fn transform_cow<'a>(&self, fragment: &'a str) -> Cow<'a, str> {
        let mut current = Cow::Borrowed(fragment);
        for (name, stage) in &self.stages {
            let next = match stage.transform(&current) {
                Cow::Borrowed(_) => continue,
                Cow::Owned(next) => next,
            };
            log::trace!("{name} rewrote {} bytes", current.len());
            current = Cow::Owned(next);
        }
        current
    }
}

impl Default for Typesetter {
    fn default() -> Self {
        Self::new(&TypesetOptions::default())
    }
}

impl std::fmt::Debug for Typesetter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Typesetter")
            .field("stages", &self.stage_names().collect::<Vec<_>>())
            .finish()
    }
}

/// Replaces every match of `re`, keeping the borrow when nothing matched.
pub(crate) fn replace_all<'a>(text: Cow<'a, str>, re: &Regex, rep: impl Replacer) -> Cow<'a, str> {
    let replaced = match re.replace_all(&text, rep) {
        Cow::Borrowed(_) => None,
        Cow::Owned(replaced) => Some(replaced),
    };
    replaced.map_or(text, Cow::Owned)
}

/// Replaces every occurrence of `from`, keeping the borrow when absent.
pub(crate) fn replace_literal<'a>(text: Cow<'a, str>, from: &str, to: &str) -> Cow<'a, str> {
    if text.contains(from) {
        Cow::Owned(text.replace(from, to))
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{EnDashSpacing, SpacesOptions};

    #[test]
    fn default_runs_all_stages_in_order() {
        let typesetter = Typesetter::default();
        assert_eq!(
            typesetter.stage_names().collect::<Vec<_>>(),
            ["quotes", "punctuation", "spaces"]
        );
    }

    #[test]
    fn disabled_stages_are_skipped() {
        let options = TypesetOptions {
            quotes: None,
            ..TypesetOptions::default()
        };
        let typesetter = Typesetter::new(&options);
        assert_eq!(typesetter.transform("\"a\" -- b"), "\"a\"\u{200A}—\u{200A}b");
    }

    #[test]
    fn noop_pipeline_returns_input() {
        let typesetter = Typesetter::new(&TypesetOptions::disabled());
        assert_eq!(typesetter.transform("\"x\" -- ..."), "\"x\" -- ...");
    }

    #[test]
    fn closed_spacing_joins_ranges() {
        let options = TypesetOptions {
            spaces: Some(SpacesOptions {
                en_dash_spacing: EnDashSpacing::Closed,
            }),
            ..TypesetOptions::default()
        };
        assert_eq!(Typesetter::new(&options).transform("1880 - 1912"), "1880–1912");
    }

    #[test]
    fn custom_stages_run_last() {
        fn shout(input: &str) -> Cow<'_, str> {
            Cow::Owned(input.to_uppercase())
        }

        let mut typesetter = Typesetter::new(&TypesetOptions::disabled());
        typesetter.add_stage("shout", shout);
        assert_eq!(typesetter.transform("quiet"), "QUIET");
    }

    #[test]
    fn unchanged_text_is_borrowed() {
        let typesetter = Typesetter::default();
        assert!(matches!(
            typesetter.transform_cow("nothing to do"),
            Cow::Borrowed(_)
        ));
    }
}
