// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

mod error;
mod escape;
mod fragment;
mod matcher;
mod pattern;

pub mod shorthand;

pub use error::ComposeError;
pub use fragment::{Fragment, Part};
pub use matcher::Matcher;
pub use pattern::Pattern;

// the matching engine's capture types, as returned by `Matcher::find`
pub use fancy_regex::{Captures, Match};
