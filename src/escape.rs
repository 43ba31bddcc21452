// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

// The escaping policy for literal text.
//
// Only the characters that open a construct (or are quantifiers) are
// escaped: `\ ^ $ . * + ( [ {`. The closing characters `) ] }` and the
// metacharacters `| ?` are deliberately left alone. This asymmetric set is
// part of the public contract, do not extend it.

/// Append `c` to `out`, backslash-prefixed if it is special to the
/// pattern language.
pub fn escape_char_into(c: char, out: &mut String) {
    match c {
        '\\' | '^' | '$' | '.' | '*' | '+' | '(' | '[' | '{' => {
            out.push('\\');
            out.push(c);
        }
        _ => out.push(c),
    }
}

/// Escape every special character of `s`.
pub fn escape_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        escape_char_into(c, &mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::escape_literal;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_escape_special_characters() {
        assert_eq!(escape_literal(r"\"), r"\\");
        assert_eq!(escape_literal("^foo"), r"\^foo");
        assert_eq!(escape_literal("$1.50"), r"\$1\.50");
        assert_eq!(escape_literal("a*b+c"), r"a\*b\+c");
        assert_eq!(escape_literal("(x["), r"\(x\[");
        assert_eq!(escape_literal("{2}"), r"\{2}");
    }

    #[test]
    fn test_escape_leaves_closing_characters_alone() {
        // the asymmetric set: ') ] }' and '| ?' pass through unchanged
        assert_eq!(escape_literal(")]}"), ")]}");
        assert_eq!(escape_literal("a|b?"), "a|b?");
    }

    #[test]
    fn test_escape_plain_text() {
        assert_eq!(escape_literal("abc"), "abc");
        assert_eq!(escape_literal(""), "");
        assert_eq!(escape_literal("文字"), "文字");
    }
}
