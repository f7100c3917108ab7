//! Named pattern rules, listed in precedence order per field.
//!
//! A rule's regex either captures the value directly (quoted string rules) or
//! ends right after the opening `[` of an array literal (array rules), in
//! which case the body is recovered by [`bracket_body`].

use regex::Regex;
use std::sync::LazyLock;

/// A single heuristic: a stable name for logs and tests plus its pattern.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub name: &'static str,
    pub pattern: &'static str,
}

// Single- or double-quoted, closed by the same quote character.
macro_rules! quoted {
    ($head:literal) => {
        concat!($head, r#"\s*(?:'([^']*)'|"([^"]*)")"#)
    };
}

pub const LABEL_RULES: &[FieldRule] = &[
    FieldRule {
        name: "label.assignment",
        pattern: quoted!(r"\blabel\s*="),
    },
    FieldRule {
        name: "label.name-key",
        pattern: quoted!(r"\bname\s*:"),
    },
];

pub const DESCRIPTION_RULES: &[FieldRule] = &[
    FieldRule {
        name: "description.assignment",
        pattern: quoted!(r"\bdescription\s*="),
    },
    FieldRule {
        name: "description.key",
        pattern: quoted!(r"\bdescription\s*:"),
    },
];

pub const INPUTS_RULES: &[FieldRule] = &[
    FieldRule {
        name: "inputs.qualified",
        pattern: r"[\w$]+\s*\.\s*inputs\s*=\s*\[",
    },
    FieldRule {
        name: "inputs.bare",
        pattern: r"\binputs\s*=\s*\[",
    },
];

pub const OUTPUTS_RULES: &[FieldRule] = &[
    FieldRule {
        name: "outputs.qualified",
        pattern: r"[\w$]+\s*\.\s*outputs\s*=\s*\[",
    },
    FieldRule {
        name: "outputs.bare",
        pattern: r"\boutputs\s*=\s*\[",
    },
];

/// Rules compiled once, tried in order.
pub struct RuleSet {
    rules: Vec<(FieldRule, Regex)>,
}

impl RuleSet {
    fn compile(rules: &[FieldRule]) -> Self {
        let rules = rules
            .iter()
            .map(|rule| {
                let regex = Regex::new(rule.pattern).expect("built-in rule pattern compiles");
                (*rule, regex)
            })
            .collect();
        Self { rules }
    }

    /// First quoted capture, with the name of the rule that produced it.
    /// Captures that are blank once trimmed count as a miss.
    pub fn first_quoted<'t>(&self, text: &'t str) -> Option<(&'static str, &'t str)> {
        self.rules.iter().find_map(|(rule, regex)| {
            let caps = regex.captures(text)?;
            let value = caps.iter().skip(1).flatten().next()?.as_str().trim();
            (!value.is_empty()).then_some((rule.name, value))
        })
    }

    /// Body of the first array literal introduced by one of the rules.
    pub fn first_array<'t>(&self, text: &'t str) -> Option<(&'static str, &'t str)> {
        self.rules.iter().find_map(|(rule, regex)| {
            let head = regex.find(text)?;
            bracket_body(text, head.end()).map(|body| (rule.name, body))
        })
    }
}

pub static LABEL: LazyLock<RuleSet> = LazyLock::new(|| RuleSet::compile(LABEL_RULES));
pub static DESCRIPTION: LazyLock<RuleSet> =
    LazyLock::new(|| RuleSet::compile(DESCRIPTION_RULES));
pub static INPUTS: LazyLock<RuleSet> = LazyLock::new(|| RuleSet::compile(INPUTS_RULES));
pub static OUTPUTS: LazyLock<RuleSet> = LazyLock::new(|| RuleSet::compile(OUTPUTS_RULES));

/// Text between the `[` that ends at `open` and its matching `]`.
///
/// Brackets inside string literals and comments do not count. If the literal
/// never balances (a stray quote, say), the body runs to the first `]`
/// instead; no `]` at all is a miss.
pub fn bracket_body(text: &str, open: usize) -> Option<&str> {
    balanced_end(text.as_bytes(), open)
        .or_else(|| text[open..].find(']').map(|offset| open + offset))
        .map(|close| &text[open..close])
}

fn balanced_end(bytes: &[u8], open: usize) -> Option<usize> {
    let mut depth = 1usize;
    let mut i = open;
    while i < bytes.len() {
        match bytes[i] {
            quote @ (b'\'' | b'"' | b'`') => {
                i = skip_string(bytes, i + 1, quote)?;
            }
            b'/' if bytes.get(i + 1) == Some(&b'/') => {
                i = bytes[i..]
                    .iter()
                    .position(|&b| b == b'\n')
                    .map_or(bytes.len(), |offset| i + offset);
            }
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                i = bytes[i + 2..]
                    .windows(2)
                    .position(|w| w == b"*/")
                    .map(|offset| i + 2 + offset + 1)?;
            }
            b'[' => depth += 1,
            b']' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}

// Index of the closing quote.
fn skip_string(bytes: &[u8], mut i: usize, quote: u8) -> Option<usize> {
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 1,
            b if b == quote => return Some(i),
            _ => {}
        }
        i += 1;
    }
    None
}
