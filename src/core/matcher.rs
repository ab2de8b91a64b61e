// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! src/core/matcher.rs
//!
//! Directive matcher for bind lines
//!
//! Recognises the shape
//!
//! ```text
//! [ws] [#] [ws] bind[lertm]* [ws] = [ws] MODS , [ws] KEY , [ws] REMAINDER
//! ```
//!
//! where MODS and KEY contain no comma and REMAINDER runs to the end of the
//! line. The remainder is a dispatcher with arguments, so it may contain
//! any number of further commas.
//!
//! # Architecture
//! Each piece of the shape is its own nom parser so the edge cases (empty
//! fields, commas in the payload, stray comment markers) can be tested in
//! isolation. `match_directive` chains them and applies the validity gate.

use nom::{
    bytes::complete::{tag, take_till, take_while},
    character::complete::char,
    combinator::{map_opt, opt},
    sequence::terminated,
    IResult, Parser,
};

use crate::core::classifier::{COMMENT_MARKER, DIRECTIVE_KEYWORD};
use crate::core::types::{BindFlag, BindVariant};

const FIELD_SEPARATOR: char = ',';
const ASSIGNMENT: char = '=';

/// Fields captured from a directive line
///
/// `modifiers` is trimmed but may be empty. `key` and `remainder` are
/// trimmed and, once returned from [`match_directive`], never empty.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DirectiveMatch<'a> {
    pub commented: bool,
    pub variant: BindVariant,
    pub modifiers: &'a str,
    pub key: &'a str,
    pub remainder: &'a str,
}

/// Matches a full directive line and applies the validity gate
///
/// Returns `None` when the line does not have the directive shape, or when
/// the key or remainder is blank after trimming.
pub fn match_directive(line: &str) -> Option<DirectiveMatch<'_>> {
    let (_, directive) = parse_directive(line).ok()?;

    if directive.key.is_empty() || directive.remainder.is_empty() {
        return None;
    }

    Some(directive)
}

/// Structural parse of a directive line, without the validity gate
pub fn parse_directive(input: &str) -> IResult<&str, DirectiveMatch<'_>> {
    let (input, commented) = parse_comment_prefix(input)?;
    let (input, variant) = parse_bind_keyword(input)?;
    let (input, _) = (whitespace, char(ASSIGNMENT), whitespace).parse(input)?;
    let (input, modifiers) = parse_field(input)?;
    let (input, key) = parse_field(input)?;

    Ok((
        "",
        DirectiveMatch {
            commented,
            variant,
            modifiers: modifiers.trim(),
            key: key.trim(),
            remainder: input.trim(),
        },
    ))
}

/// Optional leading whitespace and `#`
///
/// Only a single comment marker is accepted; `## bind` is not a directive.
pub fn parse_comment_prefix(input: &str) -> IResult<&str, bool> {
    let (input, _) = whitespace(input)?;
    let (input, marker) = opt(char(COMMENT_MARKER)).parse(input)?;
    let (input, _) = whitespace(input)?;

    Ok((input, marker.is_some()))
}

/// The `bind` keyword followed by zero or more flag letters
///
/// Consumes only letters from the known flag set, so `bindings = ...`
/// leaves `ings` behind and fails at the assignment.
pub fn parse_bind_keyword(input: &str) -> IResult<&str, BindVariant> {
    let (input, _) = tag(DIRECTIVE_KEYWORD).parse(input)?;

    map_opt(
        take_while(|c: char| BindFlag::from_letter(c).is_some()),
        BindVariant::from_suffix,
    )
    .parse(input)
}

/// One comma-terminated field plus the whitespace after the comma
pub fn parse_field(input: &str) -> IResult<&str, &str> {
    terminated(
        take_till(|c: char| c == FIELD_SEPARATOR),
        (char(FIELD_SEPARATOR), whitespace),
    )
    .parse(input)
}

fn whitespace(input: &str) -> IResult<&str, &str> {
    take_while(char::is_whitespace).parse(input)
}
