// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use fancy_regex::{Captures, Regex};

use crate::ComposeError;

/// A find cursor over one subject text.
///
/// [`find`](Matcher::find) walks the subject left to right, advancing an
/// internal position past each match; [`matches`](Matcher::matches) tests
/// the entire input at once. The cursor also implements `Iterator`, so
/// matches can be counted or collected directly.
pub struct Matcher<'t> {
    regex: Regex,
    entire: Regex,
    text: &'t str,
    last_position: usize,
}

impl<'t> Matcher<'t> {
    pub(crate) fn new(pattern: &str, text: &'t str) -> Result<Self, ComposeError> {
        let regex = Regex::new(pattern)?;

        // the anchored variant backs `matches`; the non-capturing wrapper
        // keeps the capture numbering (and backreferences) intact
        let entire = Regex::new(&format!(r"\A(?:{})\z", pattern))?;

        Ok(Matcher {
            regex,
            entire,
            text,
            last_position: 0,
        })
    }

    /// Find the next match and advance past it.
    ///
    /// Engine runtime failures (e.g. the backtracking limit) end the scan.
    pub fn find(&mut self) -> Option<Captures<'t>> {
        if self.last_position > self.text.len() {
            return None;
        }

        let captures = self
            .regex
            .captures_from_pos(self.text, self.last_position)
            .ok()
            .flatten()?;

        let whole = captures.get(0)?;
        self.last_position = if whole.end() == whole.start() {
            // an empty match would otherwise loop in place
            match self.text[whole.end()..].chars().next() {
                Some(c) => whole.end() + c.len_utf8(),
                None => self.text.len() + 1,
            }
        } else {
            whole.end()
        };

        Some(captures)
    }

    /// Whether the pattern matches the entire subject text.
    pub fn matches(&self) -> bool {
        self.entire.is_match(self.text).unwrap_or(false)
    }

    /// Rewind the cursor to the start of the subject text.
    pub fn reset(&mut self) {
        self.last_position = 0;
    }

    pub fn text(&self) -> &'t str {
        self.text
    }
}

impl<'t> Iterator for Matcher<'t> {
    type Item = Captures<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        self.find()
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        shorthand::{digit, one_or_more, text},
        Pattern,
    };
    use pretty_assertions::assert_eq;

    #[test]
    fn test_find_walks_left_to_right() {
        let pattern = text("ab");
        let mut matcher = pattern.matcher("xabyab").unwrap();

        let first = matcher.find().unwrap();
        let whole = first.get(0).unwrap();
        assert_eq!((whole.start(), whole.end()), (1, 3));

        let second = matcher.find().unwrap();
        assert_eq!(second.get(0).unwrap().start(), 4);

        assert!(matcher.find().is_none());
    }

    #[test]
    fn test_empty_matches_advance() {
        let pattern = Pattern::new().zero_or_more("a").unwrap();
        assert_eq!(pattern.as_str(), "a*");

        // "a*" matches at every position of "ba": empty, "a", empty
        let matcher = pattern.matcher("ba").unwrap();
        assert_eq!(matcher.count(), 3);
    }

    #[test]
    fn test_matches_requires_entire_input() {
        let pattern = one_or_more(digit()).unwrap();

        assert!(pattern.matcher("123").unwrap().matches());
        assert!(!pattern.matcher("123a").unwrap().matches());
        assert!(!pattern.matcher("").unwrap().matches());
    }

    #[test]
    fn test_reset() {
        let pattern = digit();
        let mut matcher = pattern.matcher("12").unwrap();

        assert_eq!(matcher.by_ref().count(), 2);
        assert!(matcher.find().is_none());

        matcher.reset();
        assert_eq!(matcher.count(), 2);
    }
}
