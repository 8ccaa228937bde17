//! `patternProperties` keys compiled for the `regex` engine.
//!
//! Schema patterns are ECMA-262 regexes, which the `regex` crate does not
//! fully cover. A leading lookahead (`^(?!x-)...`, `^(?=a)...`) is split into
//! a guard and a remainder that are each compiled on their own. Any other
//! lookaround or a backreference cannot be expressed, and such a pattern
//! never matches.

use regex::Regex;

pub(crate) enum PropertyPattern {
    Plain(Regex),
    /// `^(?=guard)rest`, or `^(?!guard)rest` when `negated`.
    Guarded {
        guard: Regex,
        negated: bool,
        rest: Regex,
    },
    Unsupported,
}

impl PropertyPattern {
    /// Compile `pattern`. Fails only when the pattern is malformed, not when
    /// it merely uses syntax the engine lacks.
    pub(crate) fn compile(pattern: &str) -> Result<Self, regex::Error> {
        let err = match Regex::new(pattern) {
            Ok(re) => return Ok(PropertyPattern::Plain(re)),
            Err(err) => err,
        };
        if let Some(guarded) = leading_lookahead(pattern) {
            return Ok(guarded);
        }
        if uses_unsupported_syntax(pattern) {
            return Ok(PropertyPattern::Unsupported);
        }
        Err(err)
    }

    pub(crate) fn is_supported(&self) -> bool {
        !matches!(self, PropertyPattern::Unsupported)
    }

    pub(crate) fn is_match(&self, key: &str) -> bool {
        match self {
            PropertyPattern::Plain(re) => re.is_match(key),
            PropertyPattern::Guarded {
                guard,
                negated,
                rest,
            } => guard.is_match(key) != *negated && rest.is_match(key),
            PropertyPattern::Unsupported => false,
        }
    }
}

fn leading_lookahead(pattern: &str) -> Option<PropertyPattern> {
    let (negated, body) = if let Some(body) = pattern.strip_prefix("^(?!") {
        (true, body)
    } else if let Some(body) = pattern.strip_prefix("^(?=") {
        (false, body)
    } else {
        return None;
    };

    let close = group_end(body)?;
    let guard = Regex::new(&format!("^(?:{})", &body[..close])).ok()?;
    let rest = Regex::new(&format!("^(?:{})", &body[close + 1..])).ok()?;
    Some(PropertyPattern::Guarded {
        guard,
        negated,
        rest,
    })
}

/// Byte offset of the `)` closing a group whose `(` is already consumed.
fn group_end(body: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_class = false;
    let mut escaped = false;
    for (i, c) in body.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '[' if !in_class => in_class = true,
            ']' if in_class => in_class = false,
            '(' if !in_class => depth += 1,
            ')' if !in_class => {
                if depth == 0 {
                    return Some(i);
                }
                depth -= 1;
            }
            _ => {}
        }
    }
    None
}

fn uses_unsupported_syntax(pattern: &str) -> bool {
    let lookaround = ["(?=", "(?!", "(?<=", "(?<!"]
        .iter()
        .any(|open| pattern.contains(open));
    let backreference = pattern
        .as_bytes()
        .windows(2)
        .any(|w| w[0] == b'\\' && (b'1'..=b'9').contains(&w[1]));
    lookaround || backreference
}
