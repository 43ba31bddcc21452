// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use regex_compose::{
    shorthand::{one_or_more, word_char},
    Pattern,
};

pub fn main() {
    // find doubled words, e.g. "the the"
    let pattern = Pattern::new()
        .group("word", one_or_more(word_char()))
        .unwrap()
        .whitespace()
        .refer_to_group("word")
        .unwrap();

    println!("pattern: {}", pattern);

    let text = "She said the the word word is is repeated.";
    let word = pattern.index_of("word").unwrap();

    for captures in pattern.matcher(text).unwrap() {
        println!(
            "doubled: \"{}\" at {}..{}",
            captures.get(word).unwrap().as_str(),
            captures.get(0).unwrap().start(),
            captures.get(0).unwrap().end()
        );
    }
}
