//! Filters used by `base.html`.
//!
//! Askama filters receive the piped value as their first argument. These two
//! ignore it: the layout pipes an empty string in to read a value that no page
//! template carries in its own context.

use std::fmt::Display;

use chrono::Datelike;

/// Year printed in the page footer: `{{ ""|footer_year }}`.
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn footer_year(_unused: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    Ok(chrono::Local::now().year())
}

/// Fingerprint of `static/css/main.css`, fixed when the crate is compiled.
///
/// Empty if the build script found no stylesheet.
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn stylesheet_hash(
    _unused: impl Display,
    _env: &dyn askama::Values,
) -> askama::Result<&'static str> {
    Ok(STYLESHEET_HASH)
}

const STYLESHEET_HASH: &str = env!("GREENTHUMB_CSS_HASH");
