//! Core conversion and infrastructure

pub mod error_handling;
pub mod locale;
pub mod logging;
pub mod strings;
pub mod version;
