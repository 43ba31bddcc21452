// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::fmt::Display;

use crate::{
    escape::{escape_char_into, escape_literal},
    fragment::{Fragment, Part},
    matcher::Matcher,
    ComposeError,
};

/// A regular expression pattern under construction.
///
/// Every operation appends to an internal buffer and keeps three pieces of
/// bookkeeping in sync with it:
///
/// - the number of top-level atoms, which decides whether a quantifier has
///   to wrap its operand in a non-capturing group,
/// - the number of capturing groups opened so far, and
/// - the name registry, which maps each named group to the 1-based index
///   the matching engine will assign to it (all capturing groups count,
///   named or not, left to right).
///
/// Methods consume the builder and hand it back, so calls chain with a
/// single owner threading through:
///
/// ```
/// use regex_compose::{shorthand::digit, Pattern};
///
/// let pattern = Pattern::new()
///     .group("year", digit().digit().digit().digit())?
///     .text("-")
///     .group("month", digit().digit())?;
///
/// assert_eq!(pattern.as_str(), r"(\d\d\d\d)-(\d\d)");
/// assert_eq!(pattern.index_of("month")?, 2);
/// # Ok::<(), regex_compose::ComposeError>(())
/// ```
///
/// An operation either fully applies or fails without appending anything;
/// the buffer is well-formed pattern syntax after every successful call.
#[derive(Debug, Clone, Default)]
pub struct Pattern {
    buffer: String,
    atoms: usize,
    captures: usize,
    names: Vec<(String, usize)>,
}

impl Pattern {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // literal and character class primitives

    /// Append `s` as literal text, escaping every character that is
    /// special to the pattern language.
    pub fn text(mut self, s: &str) -> Self {
        self.buffer.push_str(&escape_literal(s));
        self.atoms += s.chars().count();
        self
    }

    /// Append a bracket expression of character ranges, e.g.
    /// `range(&[("0", "9"), ("a", "z")])` appends `[0-9a-z]`.
    ///
    /// Every bound must be exactly one character.
    pub fn range(mut self, bounds: &[(&str, &str)]) -> Result<Self, ComposeError> {
        if bounds.is_empty() {
            return Err(ComposeError::InvalidArgument(
                "range requires at least one pair of bounds".to_owned(),
            ));
        }

        let mut body = String::new();
        for (from, to) in bounds {
            escape_char_into(single_char(from)?, &mut body);
            body.push('-');
            escape_char_into(single_char(to)?, &mut body);
        }

        self.buffer.push('[');
        self.buffer.push_str(&body);
        self.buffer.push(']');
        self.atoms += 1;
        Ok(self)
    }

    /// Append `[...]`, matching any one character of `set`.
    ///
    /// A string is escaped; a sub-pattern is embedded verbatim, so
    /// composed classes such as `word_char().text(":/")` keep their
    /// shorthand escapes.
    pub fn one_of(self, set: impl Fragment) -> Result<Self, ComposeError> {
        self.bracketed(set, false)
    }

    /// Append `[^...]`, matching any one character not in `set`.
    pub fn not_one_of(self, set: impl Fragment) -> Result<Self, ComposeError> {
        self.bracketed(set, true)
    }

    fn bracketed(mut self, set: impl Fragment, negative: bool) -> Result<Self, ComposeError> {
        let part = set.into_part()?;

        // parentheses are ordinary characters inside a bracket expression,
        // so the fragment's capture bookkeeping does not apply here
        self.buffer.push('[');
        if negative {
            self.buffer.push('^');
        }
        self.buffer.push_str(&part.text);
        self.buffer.push(']');
        self.atoms += 1;
        Ok(self)
    }

    /// Append `.`, matching any character.
    pub fn any_char(self) -> Self {
        self.token(".")
    }

    /// Any digit, short for `[0-9]`.
    pub fn digit(self) -> Self {
        self.token(r"\d")
    }

    /// Any non-digit, short for `[^0-9]`.
    pub fn non_digit(self) -> Self {
        self.token(r"\D")
    }

    /// Any whitespace character.
    pub fn whitespace(self) -> Self {
        self.token(r"\s")
    }

    /// Any non-whitespace character.
    pub fn non_whitespace(self) -> Self {
        self.token(r"\S")
    }

    /// Any word character, short for `[a-zA-Z_0-9]`.
    pub fn word_char(self) -> Self {
        self.token(r"\w")
    }

    /// Any non-word character.
    pub fn non_word_char(self) -> Self {
        self.token(r"\W")
    }

    pub fn word_boundary(self) -> Self {
        self.token(r"\b")
    }

    pub fn non_word_boundary(self) -> Self {
        self.token(r"\B")
    }

    pub fn start_of_line(self) -> Self {
        self.token("^")
    }

    pub fn end_of_line(self) -> Self {
        self.token("$")
    }

    pub fn tab(self) -> Self {
        self.token(r"\t")
    }

    pub fn carriage_return(self) -> Self {
        self.token(r"\r")
    }

    pub fn line_feed(self) -> Self {
        self.token(r"\n")
    }

    // ------------------------------------------------------------------
    // readability connectives, they do not change the pattern

    pub fn and(self) -> Self {
        self
    }

    pub fn followed_by(self) -> Self {
        self
    }

    // ------------------------------------------------------------------
    // quantifiers

    /// Append `fragment` followed by `?`.
    pub fn optional(self, fragment: impl Fragment) -> Result<Self, ComposeError> {
        self.quantified(fragment, "?")
    }

    /// Append `fragment` followed by `*`.
    pub fn zero_or_more(self, fragment: impl Fragment) -> Result<Self, ComposeError> {
        self.quantified(fragment, "*")
    }

    /// Append `fragment` followed by `+`.
    pub fn one_or_more(self, fragment: impl Fragment) -> Result<Self, ComposeError> {
        self.quantified(fragment, "+")
    }

    /// Append `fragment` followed by `{times}`.
    pub fn occurs(self, times: usize, fragment: impl Fragment) -> Result<Self, ComposeError> {
        self.quantified(fragment, &format!("{{{}}}", times))
    }

    /// Append `fragment` followed by `{times,}`.
    pub fn occurs_at_least(
        self,
        times: usize,
        fragment: impl Fragment,
    ) -> Result<Self, ComposeError> {
        self.quantified(fragment, &format!("{{{},}}", times))
    }

    /// Append `fragment` followed by `{min_times,max_times}`.
    pub fn occurs_between(
        self,
        min_times: usize,
        max_times: usize,
        fragment: impl Fragment,
    ) -> Result<Self, ComposeError> {
        self.quantified(fragment, &format!("{{{},{}}}", min_times, max_times))
    }

    fn quantified(mut self, fragment: impl Fragment, suffix: &str) -> Result<Self, ComposeError> {
        let part = fragment.into_part()?;
        self.check_incoming_names(&part.names, None)?;

        let base = self.captures;
        self.adopt_names(part.names, base);
        self.captures += part.captures;

        if part.atoms == 1 {
            self.buffer.push_str(&part.text);
        } else {
            // a bare multi-atom fragment followed by a quantifier would
            // only repeat its last atom
            self.buffer.push_str("(?:");
            self.buffer.push_str(&part.text);
            self.buffer.push(')');
        }
        self.buffer.push_str(suffix);
        self.atoms += 1;
        Ok(self)
    }

    // ------------------------------------------------------------------
    // alternation and groups

    /// Join the options with `|` and wrap the union in one capturing
    /// group: `(option1|option2|...)`.
    ///
    /// The wrapping group occupies a capture index like any other.
    pub fn any_of<F: Fragment>(
        mut self,
        options: impl IntoIterator<Item = F>,
    ) -> Result<Self, ComposeError> {
        let mut parts = Vec::new();
        for option in options {
            parts.push(option.into_part()?);
        }
        if parts.is_empty() {
            return Err(ComposeError::InvalidArgument(
                "any_of requires at least one alternative".to_owned(),
            ));
        }

        // check every incoming name before mutating anything
        {
            let mut seen: Vec<&str> = Vec::new();
            for part in &parts {
                for (name, _) in &part.names {
                    if self.name_in_use(name) || seen.contains(&name.as_str()) {
                        return Err(ComposeError::DuplicateName(name.clone()));
                    }
                    seen.push(name.as_str());
                }
            }
        }

        self.captures += 1;
        self.buffer.push('(');
        for (i, part) in parts.into_iter().enumerate() {
            if i > 0 {
                self.buffer.push('|');
            }
            let base = self.captures;
            self.adopt_names(part.names, base);
            self.captures += part.captures;
            self.buffer.push_str(&part.text);
        }
        self.buffer.push(')');
        self.atoms += 1;
        Ok(self)
    }

    /// Open a named capturing group around `fragment`.
    ///
    /// The group receives the next free 1-based index, taken at the
    /// moment it opens: groups inside `fragment` number after it. A name
    /// can be registered at most once per builder.
    pub fn group(mut self, name: &str, fragment: impl Fragment) -> Result<Self, ComposeError> {
        let part = fragment.into_part()?;
        if self.name_in_use(name) {
            return Err(ComposeError::DuplicateName(name.to_owned()));
        }
        self.check_incoming_names(&part.names, Some(name))?;

        self.captures += 1;
        let base = self.captures;
        self.names.push((name.to_owned(), base));
        self.adopt_names(part.names, base);
        self.captures += part.captures;

        self.buffer.push('(');
        self.buffer.push_str(&part.text);
        self.buffer.push(')');
        self.atoms += 1;
        Ok(self)
    }

    /// Open an unnamed capturing group around `fragment`. It still
    /// occupies a capture index and shifts the numbering of every group
    /// that opens afterwards.
    pub fn capture(mut self, fragment: impl Fragment) -> Result<Self, ComposeError> {
        let part = fragment.into_part()?;
        self.check_incoming_names(&part.names, None)?;

        self.captures += 1;
        let base = self.captures;
        self.adopt_names(part.names, base);
        self.captures += part.captures;

        self.buffer.push('(');
        self.buffer.push_str(&part.text);
        self.buffer.push(')');
        self.atoms += 1;
        Ok(self)
    }

    /// Append a backreference to a previously registered group,
    /// e.g. `\1`.
    pub fn refer_to_group(mut self, name: &str) -> Result<Self, ComposeError> {
        let index = self.index_of(name)?;
        self.buffer.push('\\');
        self.buffer.push_str(&index.to_string());
        self.atoms += 1;
        Ok(self)
    }

    /// The 1-based capture index the matching engine assigns to the
    /// named group. Pure lookup, never mutates.
    pub fn index_of(&self, name: &str) -> Result<usize, ComposeError> {
        self.names
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, index)| *index)
            .ok_or_else(|| ComposeError::UnknownName(name.to_owned()))
    }

    // ------------------------------------------------------------------
    // terminal operations, delegating to the matching engine

    /// The pattern text accumulated so far.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Hand the accumulated text to the matching engine.
    pub fn compile(&self) -> Result<fancy_regex::Regex, ComposeError> {
        fancy_regex::Regex::new(&self.buffer).map_err(ComposeError::from)
    }

    /// Compile and return a find cursor over `text`.
    pub fn matcher<'t>(&self, text: &'t str) -> Result<Matcher<'t>, ComposeError> {
        Matcher::new(&self.buffer, text)
    }

    // ------------------------------------------------------------------
    // internal helpers

    fn token(mut self, s: &str) -> Self {
        self.buffer.push_str(s);
        self.atoms += 1;
        self
    }

    fn name_in_use(&self, name: &str) -> bool {
        self.names.iter().any(|(existing, _)| existing == name)
    }

    fn check_incoming_names(
        &self,
        incoming: &[(String, usize)],
        reserved: Option<&str>,
    ) -> Result<(), ComposeError> {
        for (i, (name, _)) in incoming.iter().enumerate() {
            let taken = self.name_in_use(name)
                || reserved == Some(name.as_str())
                || incoming[..i].iter().any(|(prior, _)| prior == name);
            if taken {
                return Err(ComposeError::DuplicateName(name.clone()));
            }
        }
        Ok(())
    }

    // `base` is the index of the last group opened before the fragment;
    // the fragment's own indices are 1-based relative to it.
    fn adopt_names(&mut self, incoming: Vec<(String, usize)>, base: usize) {
        for (name, index) in incoming {
            self.names.push((name, base + index));
        }
    }

    pub(crate) fn into_raw_part(self) -> Part {
        Part {
            text: self.buffer,
            atoms: self.atoms,
            captures: self.captures,
            names: self.names,
        }
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.buffer)
    }
}

fn single_char(bound: &str) -> Result<char, ComposeError> {
    let mut chars = bound.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ComposeError::InvalidArgument(format!(
            "range bound must be exactly one character, got \"{}\"",
            bound
        ))),
    }
}
