//! Locale-aware title casing.
//!
//! ```
//! use titlecase::core::locale::CasingLocale;
//! use titlecase::core::strings::to_title_case;
//!
//! let locale = CasingLocale::invariant();
//! assert_eq!(to_title_case(Some("hello world"), &locale).as_deref(), Some("Hello World"));
//! assert_eq!(to_title_case(None, &locale), None);
//! ```

pub mod app;
pub mod core;
