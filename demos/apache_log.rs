// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use regex_compose::{
    shorthand::{digit, non_whitespace, one_of, one_or_more, word_char},
    Pattern,
};

pub fn main() {
    let pattern = Pattern::new()
        .start_of_line()
        .group("ip", one_or_more(non_whitespace()))
        .unwrap()
        .text(" ")
        .group("client", one_or_more(non_whitespace()))
        .unwrap()
        .text(" ")
        .group("user", one_or_more(non_whitespace()))
        .unwrap()
        .text(" [")
        .group("datetime", one_or_more(one_of(word_char().text(":/"))))
        .unwrap()
        .text(" ")
        .group("offset", one_of("+-").unwrap().occurs(4, digit()))
        .unwrap()
        .text("] \"")
        .group("method", one_or_more(non_whitespace()))
        .unwrap()
        .text(" ")
        .group("url", one_or_more(non_whitespace()))
        .unwrap()
        .text(" ")
        .group("http", one_or_more(non_whitespace()))
        .unwrap()
        .text("\" ")
        .group("status", one_or_more(digit()))
        .unwrap()
        .whitespace()
        .group("size", one_or_more(digit()))
        .unwrap()
        .end_of_line();

    println!("pattern: {}", pattern);

    let log_line =
        "127.0.0.1 - - [21/Jul/2014:9:55:27 -0800] \"GET /home.html HTTP/1.1\" 200 2048";

    let mut matcher = pattern.matcher(log_line).unwrap();
    if let Some(captures) = matcher.find() {
        for name in [
            "ip", "client", "user", "datetime", "offset", "method", "url", "http", "status",
            "size",
        ] {
            let index = pattern.index_of(name).unwrap();
            println!("{}: {}", name, captures.get(index).unwrap().as_str());
        }
    } else {
        println!("No match found");
    }
}
