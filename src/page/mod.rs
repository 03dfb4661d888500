//! HTML transformations applied to upstream pages before they are republished.

use std::borrow::Cow;

pub mod extract;
pub mod sanitise;

pub use extract::{Article, extract_articles};
pub use sanitise::sanitise;

/// Resolves root-relative (`/x`) and protocol-relative (`//x`) URLs.
///
/// Protocol-relative URLs always become `https:`; root-relative ones are
/// appended to `base_origin`. Everything else, absolute URLs included, is
/// returned untouched.
pub fn absolutize<'a>(value: &'a str, base_origin: &str) -> Cow<'a, str> {
	if value.starts_with("//") {
		Cow::Owned(format!("https:{value}"))
	} else if value.starts_with('/') {
		Cow::Owned(format!("{base_origin}{value}"))
	} else {
		Cow::Borrowed(value)
	}
}
