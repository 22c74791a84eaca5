//! Explicit casing-rule context
//!
//! A [`CasingLocale`] carries the language identifier whose casing rules apply
//! to a conversion. It is passed to the converter as a plain argument; nothing
//! in this module reads or writes process-wide locale state except
//! [`resolve_locale`], which consults the host locale once on request.
//!
//! Unicode default case mappings come from the standard library. The only
//! tailorings layered on top are the language-conditional rows of Unicode
//! SpecialCasing (Turkic, Lithuanian) and the Dutch `IJ` titlecase digraph.

use crate::core::version;
use std::fmt;
use std::str::FromStr;
use unic_langid::LanguageIdentifier;
use unicode_segmentation::UnicodeSegmentation;

const COMBINING_DOT_ABOVE: char = '\u{0307}';

/// Errors raised while building a casing locale
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocaleError {
    #[error("Locale identifier is empty")]
    Empty,
    #[error("Invalid locale identifier '{value}'")]
    InvalidIdentifier { value: String },
}

/// Which language-specific tailoring applies on top of the Unicode defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CasingRules {
    /// Unicode default full case mappings
    #[default]
    Default,
    /// Turkish and Azerbaijani dotted/dotless i
    Turkic,
    /// Dutch `ij` digraph capitalised as a unit
    Dutch,
    /// Lithuanian retention of the dot above soft-dotted letters
    Lithuanian,
}

impl CasingRules {
    /// Select the tailoring for a language identifier
    pub fn for_language(langid: &LanguageIdentifier) -> Self {
        match langid.language.as_str() {
            "tr" | "az" => CasingRules::Turkic,
            "nl" => CasingRules::Dutch,
            "lt" => CasingRules::Lithuanian,
            _ => CasingRules::Default,
        }
    }
}

/// Casing-rule context for a single language
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CasingLocale {
    langid: LanguageIdentifier,
    rules: CasingRules,
}

impl Default for CasingLocale {
    fn default() -> Self {
        Self::invariant()
    }
}

impl CasingLocale {
    /// Locale-neutral rules (`und`)
    pub fn invariant() -> Self {
        Self {
            langid: LanguageIdentifier::default(),
            rules: CasingRules::Default,
        }
    }

    pub fn new(langid: LanguageIdentifier) -> Self {
        let rules = CasingRules::for_language(&langid);
        Self { langid, rules }
    }

    pub fn language_id(&self) -> &LanguageIdentifier {
        &self.langid
    }

    pub fn rules(&self) -> CasingRules {
        self.rules
    }

    pub fn is_invariant(&self) -> bool {
        self.langid == LanguageIdentifier::default()
    }

    /// Lower-case a whole text under this locale
    ///
    /// Context-sensitive default rules such as the Greek final sigma are kept
    /// by delegating the final pass to [`str::to_lowercase`].
    pub fn to_lowercase(&self, text: &str) -> String {
        match self.rules {
            CasingRules::Turkic => turkic_pre_lower(text).to_lowercase(),
            CasingRules::Lithuanian => lithuanian_pre_lower(text).to_lowercase(),
            CasingRules::Default | CasingRules::Dutch => text.to_lowercase(),
        }
    }

    /// Title-case the first grapheme of an already lower-cased word
    ///
    /// The rest of the word is copied unchanged. Segments that start with
    /// whitespace, punctuation or digits come back as they went in.
    pub fn titlecase_first(&self, word: &str) -> String {
        if self.rules == CasingRules::Dutch {
            if let Some(rest) = word.strip_prefix("ij") {
                return format!("IJ{}", rest);
            }
        }

        let mut graphemes = word.graphemes(true);
        match graphemes.next() {
            Some(first) => {
                let mut out = String::with_capacity(word.len());
                self.titlecase_grapheme(first, &mut out);
                out.push_str(graphemes.as_str());
                out
            }
            None => String::new(),
        }
    }

    fn titlecase_grapheme(&self, grapheme: &str, out: &mut String) {
        let mut chars = grapheme.chars().peekable();
        let Some(base) = chars.next() else {
            return;
        };

        match self.rules {
            CasingRules::Turkic if base == 'i' => out.push('\u{0130}'),
            CasingRules::Lithuanian if is_soft_dotted(base) => {
                titlecase_char(base, out);
                // The explicit dot is dropped once the letter is capitalised
                if chars.peek() == Some(&COMBINING_DOT_ABOVE) {
                    chars.next();
                }
            }
            _ => titlecase_char(base, out),
        }
        out.extend(chars);
    }
}

impl fmt::Display for CasingLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.langid)
    }
}

impl From<LanguageIdentifier> for CasingLocale {
    fn from(langid: LanguageIdentifier) -> Self {
        Self::new(langid)
    }
}

impl FromStr for CasingLocale {
    type Err = LocaleError;

    /// Accepts BCP 47 tags (`tr-TR`) as well as POSIX locale names
    /// (`en_US.UTF-8`, `de_DE@euro`, `C`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(LocaleError::Empty);
        }
        if trimmed.eq_ignore_ascii_case("invariant") || trimmed == "C" || trimmed == "POSIX" {
            return Ok(Self::invariant());
        }

        let tag = trimmed
            .split(['.', '@'])
            .next()
            .unwrap_or(trimmed)
            .replace('_', "-");

        tag.parse::<LanguageIdentifier>()
            .map(Self::new)
            .map_err(|_| LocaleError::InvalidIdentifier {
                value: trimmed.to_string(),
            })
    }
}

/// Pick the casing locale for a run
///
/// Order: explicit CLI value, configuration value, host locale, build default.
/// Explicit values that fail to parse are errors; an unusable host locale is
/// skipped with a warning.
pub fn resolve_locale(
    cli_locale: Option<&str>,
    config_locale: Option<&str>,
) -> Result<CasingLocale, LocaleError> {
    resolve_locale_with_host(cli_locale, config_locale, sys_locale::get_locale())
}

/// [`resolve_locale`] with the host locale supplied by the caller
pub fn resolve_locale_with_host(
    cli_locale: Option<&str>,
    config_locale: Option<&str>,
    host_locale: Option<String>,
) -> Result<CasingLocale, LocaleError> {
    if let Some(tag) = cli_locale {
        log::debug!("Using locale '{}' from command line", tag);
        return tag.parse();
    }
    if let Some(tag) = config_locale {
        log::debug!("Using locale '{}' from configuration", tag);
        return tag.parse();
    }
    if let Some(host) = host_locale {
        match host.parse::<CasingLocale>() {
            Ok(locale) => {
                log::debug!("Using host locale '{}'", locale);
                return Ok(locale);
            }
            Err(e) => log::warn!("Ignoring host locale: {}", e),
        }
    }

    log::debug!("Using build default locale '{}'", version::DEFAULT_LOCALE);
    version::DEFAULT_LOCALE.parse()
}

// Unicode titlecase mappings that differ from the uppercase mapping
fn titlecase_char(c: char, out: &mut String) {
    match c {
        '\u{01C4}'..='\u{01C6}' => out.push('\u{01C5}'),
        '\u{01C7}'..='\u{01C9}' => out.push('\u{01C8}'),
        '\u{01CA}'..='\u{01CC}' => out.push('\u{01CB}'),
        '\u{01F1}'..='\u{01F3}' => out.push('\u{01F2}'),
        'ß' => out.push_str("Ss"),
        'ﬀ' => out.push_str("Ff"),
        'ﬁ' => out.push_str("Fi"),
        'ﬂ' => out.push_str("Fl"),
        'ﬃ' => out.push_str("Ffi"),
        'ﬄ' => out.push_str("Ffl"),
        'ﬅ' | 'ﬆ' => out.push_str("St"),
        'և' => out.push_str("Եւ"),
        'ﬓ' => out.push_str("Մն"),
        'ﬔ' => out.push_str("Մե"),
        'ﬕ' => out.push_str("Մի"),
        'ﬖ' => out.push_str("Վն"),
        'ﬗ' => out.push_str("Մխ"),
        // Greek with ypogegrammeni: titlecase keeps the subscript
        '\u{1F80}'..='\u{1F87}' | '\u{1F90}'..='\u{1F97}' | '\u{1FA0}'..='\u{1FA7}' => {
            out.push(char::from_u32(c as u32 + 8).unwrap_or(c))
        }
        '\u{1FB3}' => out.push('\u{1FBC}'),
        '\u{1FC3}' => out.push('\u{1FCC}'),
        '\u{1FF3}' => out.push('\u{1FFC}'),
        '\u{1FB2}' => out.push_str("\u{1FBA}\u{0345}"),
        '\u{1FB4}' => out.push_str("\u{0386}\u{0345}"),
        '\u{1FB7}' => out.push_str("\u{0391}\u{0342}\u{0345}"),
        '\u{1FC2}' => out.push_str("\u{1FCA}\u{0345}"),
        '\u{1FC4}' => out.push_str("\u{0389}\u{0345}"),
        '\u{1FC7}' => out.push_str("\u{0397}\u{0342}\u{0345}"),
        '\u{1FF2}' => out.push_str("\u{1FFA}\u{0345}"),
        '\u{1FF4}' => out.push_str("\u{038F}\u{0345}"),
        '\u{1FF7}' => out.push_str("\u{03A9}\u{0342}\u{0345}"),
        // Already titlecase: uppercase would split off a capital iota
        '\u{1F88}'..='\u{1F8F}'
        | '\u{1F98}'..='\u{1F9F}'
        | '\u{1FA8}'..='\u{1FAF}'
        | '\u{1FBC}'
        | '\u{1FCC}'
        | '\u{1FFC}' => out.push(c),
        // Georgian Mkhedruli titlecases to itself, not to Mtavruli
        '\u{10D0}'..='\u{10FA}' | '\u{10FD}'..='\u{10FF}' => out.push(c),
        _ => out.extend(c.to_uppercase()),
    }
}

fn is_soft_dotted(c: char) -> bool {
    matches!(c, 'i' | 'j' | '\u{012F}')
}

// Combining marks of class 230 (above) in the Combining Diacritical Marks block
fn is_combining_above(c: char) -> bool {
    matches!(
        c as u32,
        0x0300..=0x0314
            | 0x033D..=0x0344
            | 0x0346
            | 0x034A..=0x034C
            | 0x0350..=0x0352
            | 0x0357
            | 0x035B
            | 0x0363..=0x036F
    )
}

// Turkic rows of SpecialCasing: İ -> i, I+dot -> i, I -> ı
fn turkic_pre_lower(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\u{0130}' => out.push('i'),
            'I' if chars.peek() == Some(&COMBINING_DOT_ABOVE) => {
                chars.next();
                out.push('i');
            }
            'I' => out.push('\u{0131}'),
            _ => out.push(c),
        }
    }
    out
}

// Lithuanian rows of SpecialCasing: keep the dot when another accent follows
fn lithuanian_pre_lower(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        let more_above = chars.peek().is_some_and(|&next| is_combining_above(next));
        match c {
            'I' if more_above => out.push_str("i\u{0307}"),
            'J' if more_above => out.push_str("j\u{0307}"),
            '\u{012E}' if more_above => out.push_str("\u{012F}\u{0307}"),
            '\u{00CC}' => out.push_str("i\u{0307}\u{0300}"),
            '\u{00CD}' => out.push_str("i\u{0307}\u{0301}"),
            '\u{0128}' => out.push_str("i\u{0307}\u{0303}"),
            _ => out.push(c),
        }
    }
    out
}
