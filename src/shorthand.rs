// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

//! Free functions for opening a pattern chain without spelling out
//! `Pattern::new()`, mainly useful for building the sub-expressions
//! passed to `group`, `any_of` and the quantifiers:
//!
//! ```
//! use regex_compose::{shorthand::*, Pattern};
//!
//! let pattern = Pattern::new()
//!     .group("hours", digit().digit())?
//!     .text(":")
//!     .group("minutes", digit().digit())?;
//!
//! assert_eq!(pattern.as_str(), r"(\d\d):(\d\d)");
//! # Ok::<(), regex_compose::ComposeError>(())
//! ```

use crate::{fragment::Fragment, ComposeError, Pattern};

pub fn text(s: &str) -> Pattern {
    Pattern::new().text(s)
}

pub fn range(bounds: &[(&str, &str)]) -> Result<Pattern, ComposeError> {
    Pattern::new().range(bounds)
}

pub fn one_of(set: impl Fragment) -> Result<Pattern, ComposeError> {
    Pattern::new().one_of(set)
}

pub fn not_one_of(set: impl Fragment) -> Result<Pattern, ComposeError> {
    Pattern::new().not_one_of(set)
}

pub fn optional(fragment: impl Fragment) -> Result<Pattern, ComposeError> {
    Pattern::new().optional(fragment)
}

pub fn zero_or_more(fragment: impl Fragment) -> Result<Pattern, ComposeError> {
    Pattern::new().zero_or_more(fragment)
}

pub fn one_or_more(fragment: impl Fragment) -> Result<Pattern, ComposeError> {
    Pattern::new().one_or_more(fragment)
}

pub fn occurs(times: usize, fragment: impl Fragment) -> Result<Pattern, ComposeError> {
    Pattern::new().occurs(times, fragment)
}

pub fn occurs_at_least(times: usize, fragment: impl Fragment) -> Result<Pattern, ComposeError> {
    Pattern::new().occurs_at_least(times, fragment)
}

pub fn occurs_between(
    min_times: usize,
    max_times: usize,
    fragment: impl Fragment,
) -> Result<Pattern, ComposeError> {
    Pattern::new().occurs_between(min_times, max_times, fragment)
}

pub fn any_of<F: Fragment>(options: impl IntoIterator<Item = F>) -> Result<Pattern, ComposeError> {
    Pattern::new().any_of(options)
}

pub fn group(name: &str, fragment: impl Fragment) -> Result<Pattern, ComposeError> {
    Pattern::new().group(name, fragment)
}

pub fn capture(fragment: impl Fragment) -> Result<Pattern, ComposeError> {
    Pattern::new().capture(fragment)
}

pub fn any_char() -> Pattern {
    Pattern::new().any_char()
}

pub fn digit() -> Pattern {
    Pattern::new().digit()
}

pub fn non_digit() -> Pattern {
    Pattern::new().non_digit()
}

pub fn whitespace() -> Pattern {
    Pattern::new().whitespace()
}

pub fn non_whitespace() -> Pattern {
    Pattern::new().non_whitespace()
}

pub fn word_char() -> Pattern {
    Pattern::new().word_char()
}

pub fn non_word_char() -> Pattern {
    Pattern::new().non_word_char()
}

pub fn word_boundary() -> Pattern {
    Pattern::new().word_boundary()
}

pub fn non_word_boundary() -> Pattern {
    Pattern::new().non_word_boundary()
}

pub fn start_of_line() -> Pattern {
    Pattern::new().start_of_line()
}

pub fn end_of_line() -> Pattern {
    Pattern::new().end_of_line()
}

pub fn tab() -> Pattern {
    Pattern::new().tab()
}

pub fn carriage_return() -> Pattern {
    Pattern::new().carriage_return()
}

pub fn line_feed() -> Pattern {
    Pattern::new().line_feed()
}

#[cfg(test)]
mod tests {
    use super::{digit, group, optional, start_of_line};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_shorthands_open_a_chain() {
        let pattern = start_of_line().text("id=").group("id", digit()).unwrap();
        assert_eq!(pattern.as_str(), r"^id=(\d)");

        let pattern = optional(digit().digit()).unwrap();
        assert_eq!(pattern.as_str(), r"(?:\d\d)?");

        let pattern = group("g", "a+b").unwrap();
        assert_eq!(pattern.as_str(), r"(a\+b)");
    }
}
