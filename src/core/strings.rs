//! Locale-aware title casing
//!
//! Words are found with the Unicode default word boundaries (UAX #29):
//!
//! - an apostrophe, `.` or `:` between two letters stays inside the word
//!   (`o'brien` -> `O'brien`, `hello.world` -> `Hello.world`,
//!   `foo:bar` -> `Foo:bar`, `e.g.` -> `E.g.`)
//! - letters and digits in one run are one word (`3rd` stays `3rd`)
//! - `_` joins words (`snake_case` -> `Snake_case`)
//! - whitespace, hyphens and other punctuation start a new word
//!   (`north-east` -> `North-East`)

use crate::core::locale::CasingLocale;
use std::borrow::Cow;
use unicode_segmentation::UnicodeSegmentation;

/// Title-case an optional text value
///
/// `None` stays `None` and an empty string is handed back as the same borrowed
/// slice. Everything else is lower-cased under `locale` and then has the first
/// letter of each word title-cased under the same locale.
pub fn to_title_case<'a>(input: Option<&'a str>, locale: &CasingLocale) -> Option<Cow<'a, str>> {
    input.map(|s| title_case(s, locale))
}

/// Title-case a present text value
pub fn title_case<'a>(input: &'a str, locale: &CasingLocale) -> Cow<'a, str> {
    if input.is_empty() {
        return Cow::Borrowed(input);
    }
    log::trace!("Title-casing {} bytes with locale {}", input.len(), locale);

    let lowered = locale.to_lowercase(input);
    Cow::Owned(
        lowered
            .split_word_bounds()
            .map(|w| locale.titlecase_first(w))
            .collect(),
    )
}

/// Method-call form of [`to_title_case`] and [`title_case`]
pub trait ToTitleCase {
    type Output;

    fn to_title_case(self, locale: &CasingLocale) -> Self::Output;
}

impl<'a> ToTitleCase for &'a str {
    type Output = Cow<'a, str>;

    fn to_title_case(self, locale: &CasingLocale) -> Self::Output {
        title_case(self, locale)
    }
}

impl<'a> ToTitleCase for Option<&'a str> {
    type Output = Option<Cow<'a, str>>;

    fn to_title_case(self, locale: &CasingLocale) -> Self::Output {
        to_title_case(self, locale)
    }
}
