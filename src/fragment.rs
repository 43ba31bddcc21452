// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use crate::{escape::escape_literal, pattern::Pattern, ComposeError};

/// A rendered piece of pattern text, together with the bookkeeping the
/// builder needs to embed it:
///
/// - `atoms`: the number of top-level atoms, which decides whether a
///   quantifier has to wrap the text in a non-capturing group.
/// - `captures`: how many capturing groups open inside the text. They
///   shift the numbering of every group that opens afterwards.
/// - `names`: the named groups of the text, with indices relative to the
///   text itself (1-based, left to right).
pub struct Part {
    pub(crate) text: String,
    pub(crate) atoms: usize,
    pub(crate) captures: usize,
    pub(crate) names: Vec<(String, usize)>,
}

/// Anything that can be embedded into a pattern under construction.
///
/// Plain strings and characters are literal text: every special character
/// is escaped. A [`Pattern`] is raw pattern syntax: it is embedded as-is,
/// and its capture groups are merged into the numbering of the receiving
/// builder.
///
/// `Result<Pattern, ComposeError>` also implements this trait, so a
/// fallible sub-chain can be passed directly to `group`, `any_of` or a
/// quantifier and its error propagates from the outer call.
pub trait Fragment {
    fn into_part(self) -> Result<Part, ComposeError>;
}

impl Fragment for &str {
    fn into_part(self) -> Result<Part, ComposeError> {
        Ok(Part {
            text: escape_literal(self),
            atoms: self.chars().count(),
            captures: 0,
            names: Vec::new(),
        })
    }
}

impl Fragment for String {
    fn into_part(self) -> Result<Part, ComposeError> {
        self.as_str().into_part()
    }
}

impl Fragment for char {
    fn into_part(self) -> Result<Part, ComposeError> {
        let mut text = String::new();
        crate::escape::escape_char_into(self, &mut text);
        Ok(Part {
            text,
            atoms: 1,
            captures: 0,
            names: Vec::new(),
        })
    }
}

impl Fragment for Pattern {
    fn into_part(self) -> Result<Part, ComposeError> {
        Ok(self.into_raw_part())
    }
}

impl Fragment for Result<Pattern, ComposeError> {
    fn into_part(self) -> Result<Part, ComposeError> {
        self?.into_part()
    }
}
