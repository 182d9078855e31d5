//! `{...}` placeholder substitution for URL templates and header formats.
//!
//! Only the position of a placeholder matters; whatever sits between the
//! braces is ignored, and `{}` counts as a placeholder too.

use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::error::Error;

lazy_static! {
    pub(crate) static ref PLACEHOLDER: Regex = Regex::new(r"\{[^{}]*\}").unwrap();
}

/// Number of placeholders in `template`.
pub fn count_placeholders(template: &str) -> usize {
    PLACEHOLDER.find_iter(template).count()
}

/// Fill placeholders left-to-right from `parameters`.
///
/// A template without placeholders is returned as-is, whatever the
/// parameters. Otherwise the number of parameters must equal the number of
/// placeholders.
pub fn substitute<'a, S: AsRef<str>>(
    template: &'a str,
    parameters: &[S],
) -> Result<Cow<'a, str>, Error> {
    let placeholders = count_placeholders(template);
    if placeholders == 0 {
        return Ok(Cow::Borrowed(template));
    }
    if placeholders != parameters.len() {
        return Err(Error::ParameterCountMismatch {
            placeholders,
            parameters: parameters.len(),
        });
    }

    let mut next = parameters.iter();
    Ok(PLACEHOLDER.replace_all(template, |_: &Captures| {
        next.next().map(|p| p.as_ref().to_string()).unwrap_or_default()
    }))
}

/// Replace every placeholder in `template` with the same `value`.
pub fn fill_all<'a>(template: &'a str, value: &str) -> Cow<'a, str> {
    PLACEHOLDER.replace_all(template, regex::NoExpand(value))
}
