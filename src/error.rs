// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::fmt::Display;

/// All failures are programmer-error class: they surface immediately at
/// the call site and are never retried internally.
#[derive(Debug)]
pub enum ComposeError {
    /// A capture group name was registered twice on one builder.
    DuplicateName(String),

    /// A capture group name was looked up before being registered.
    UnknownName(String),

    /// A malformed argument, e.g. a character range bound that is not
    /// exactly one character.
    InvalidArgument(String),

    /// The accumulated text was rejected by the matching engine.
    /// This can only happen from dialect differences or from raw text
    /// that bypassed the builder's own escaping.
    Syntax(fancy_regex::Error),
}

impl Display for ComposeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComposeError::DuplicateName(name) => {
                write!(f, "Capture group \"{}\" already exists.", name)
            }
            ComposeError::UnknownName(name) => {
                write!(f, "Capture group \"{}\" does not exist.", name)
            }
            ComposeError::InvalidArgument(message) => {
                write!(f, "Invalid argument: {}.", message)
            }
            ComposeError::Syntax(e) => {
                write!(f, "Pattern syntax error: {}", e)
            }
        }
    }
}

impl std::error::Error for ComposeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ComposeError::Syntax(e) => Some(e),
            _ => None,
        }
    }
}

impl From<fancy_regex::Error> for ComposeError {
    fn from(e: fancy_regex::Error) -> Self {
        ComposeError::Syntax(e)
    }
}
