// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Row-count message patterns
//!
//! Patterns use the positional message syntax with a single argument `0`:
//!
//! - `{0}` and `{0,number,integer}` render the number
//! - `{0,choice,0#none|0<{0} rows}` picks the last choice whose limit the
//!   argument reaches (`#` means at least, `<` means more than); choice text
//!   may itself contain elements
//!
//! Anything else is copied to the output unchanged.

/// Format a message pattern with one numeric argument
pub fn format_message(pattern: &str, argument: i64) -> String {
    let mut output = String::with_capacity(pattern.len());
    let mut rest = pattern;

    while let Some(start) = rest.find('{') {
        output.push_str(&rest[..start]);
        let inner = &rest[start + 1..];
        match closing_brace(inner) {
            Some(end) => {
                output.push_str(&format_element(&inner[..end], argument));
                rest = &inner[end + 1..];
            }
            None => {
                output.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    output.push_str(rest);
    output
}

/// Position of the brace closing an element whose opening brace was consumed
fn closing_brace(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in text.char_indices() {
        match c {
            '{' => depth += 1,
            '}' if depth == 0 => return Some(i),
            '}' => depth -= 1,
            _ => {}
        }
    }
    None
}

fn split_top_level(text: &str, separator: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in text.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => depth = depth.saturating_sub(1),
            c if c == separator && depth == 0 => {
                parts.push(&text[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(&text[start..]);
    parts
}

fn format_element(element: &str, argument: i64) -> String {
    let mut parts = element.splitn(3, ',');
    let index = parts.next().unwrap_or_default().trim();
    if index != "0" {
        return format!("{{{}}}", element);
    }

    match (parts.next().map(str::trim), parts.next()) {
        (None, _) | (Some("number"), _) => argument.to_string(),
        (Some("choice"), Some(choices)) => {
            format_message(select_choice(choices, argument), argument)
        }
        _ => format!("{{{}}}", element),
    }
}

/// Text of the last choice whose limit the argument reaches
///
/// An argument below every limit selects the first choice.
fn select_choice(choices: &str, argument: i64) -> &str {
    let value = argument as f64;
    let mut selected: Option<&str> = None;

    for choice in split_top_level(choices, '|') {
        let Some(position) = choice.find(|c: char| c == '#' || c == '<') else {
            continue;
        };
        let Ok(limit) = choice[..position].trim().parse::<f64>() else {
            continue;
        };
        let text = &choice[position + 1..];
        let reached = if choice[position..].starts_with('#') {
            value >= limit
        } else {
            value > limit
        };

        if reached || selected.is_none() {
            selected = Some(text);
        }
        if !reached {
            break;
        }
    }
    selected.unwrap_or_default()
}
