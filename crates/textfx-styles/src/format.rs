#![forbid(unsafe_code)]

//! Date/time pattern engine.
//!
//! Patterns use the field letters `yyyy`, `MM`, `dd`, `HH`, `mm`, `ss`,
//! `SSS`, `EEEE`, `EEE`. Single-quoted spans are literal, `''` is an escaped
//! apostrophe, and any other alphabetic character is a malformed pattern.
//! Parsing is a single left-to-right pass with longest match, so `EEEE` wins
//! over `EEE` and a stray fifth `E` makes the whole pattern invalid rather
//! than silently shifting meaning.
//!
//! A malformed pattern still renders: it produces `Invalid Format: <pattern>`
//! so the problem is visible on screen instead of raising mid-animation.

use std::fmt;

use chrono::{Datelike, Timelike, Weekday};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Year4,
    Month2,
    Day2,
    Hour2,
    Minute2,
    Second2,
    Millis3,
    WeekdayFull,
    WeekdayAbbr,
    Literal(String),
}

/// A parsed (possibly malformed) date/time pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    repr: String,
    /// `None` when the pattern is malformed.
    tokens: Option<Vec<Token>>,
}

impl Pattern {
    /// Parse `pattern`. Malformed patterns are kept and render as an error
    /// marker; see [`Pattern::render`].
    pub fn parse(pattern: &str) -> Self {
        Self {
            repr: pattern.to_string(),
            tokens: tokenize(pattern),
        }
    }

    /// Whether the pattern parsed cleanly.
    pub fn is_valid(&self) -> bool {
        self.tokens.is_some()
    }

    /// The original pattern text.
    pub fn as_str(&self) -> &str {
        &self.repr
    }

    /// Render the pattern against a point in time.
    pub fn render<T: Datelike + Timelike>(&self, t: &T) -> String {
        let Some(tokens) = &self.tokens else {
            return format!("Invalid Format: {}", self.repr);
        };
        let mut out = String::new();
        for token in tokens {
            match token {
                Token::Year4 => out.push_str(&format!("{:04}", t.year())),
                Token::Month2 => out.push_str(&format!("{:02}", t.month())),
                Token::Day2 => out.push_str(&format!("{:02}", t.day())),
                Token::Hour2 => out.push_str(&format!("{:02}", t.hour())),
                Token::Minute2 => out.push_str(&format!("{:02}", t.minute())),
                Token::Second2 => out.push_str(&format!("{:02}", t.second())),
                // A leap second reports nanos past 10^9; pin to 999.
                Token::Millis3 => {
                    out.push_str(&format!("{:03}", (t.nanosecond() / 1_000_000).min(999)))
                }
                Token::WeekdayFull => out.push_str(weekday_name(t.weekday()).0),
                Token::WeekdayAbbr => out.push_str(weekday_name(t.weekday()).1),
                Token::Literal(s) => out.push_str(s),
            }
        }
        out
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.repr)
    }
}

fn weekday_name(w: Weekday) -> (&'static str, &'static str) {
    match w {
        Weekday::Mon => ("Monday", "Mon"),
        Weekday::Tue => ("Tuesday", "Tue"),
        Weekday::Wed => ("Wednesday", "Wed"),
        Weekday::Thu => ("Thursday", "Thu"),
        Weekday::Fri => ("Friday", "Fri"),
        Weekday::Sat => ("Saturday", "Sat"),
        Weekday::Sun => ("Sunday", "Sun"),
    }
}

/// Longest-match field letters, checked in descending length.
const FIELDS: &[(&str, Token)] = &[
    ("EEEE", Token::WeekdayFull),
    ("yyyy", Token::Year4),
    ("EEE", Token::WeekdayAbbr),
    ("SSS", Token::Millis3),
    ("MM", Token::Month2),
    ("dd", Token::Day2),
    ("HH", Token::Hour2),
    ("mm", Token::Minute2),
    ("ss", Token::Second2),
];

fn tokenize(pattern: &str) -> Option<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let bytes = pattern.as_bytes();
    let mut i = 0;

    let flush = |literal: &mut String, tokens: &mut Vec<Token>| {
        if !literal.is_empty() {
            tokens.push(Token::Literal(std::mem::take(literal)));
        }
    };

    'outer: while i < pattern.len() {
        let rest = &pattern[i..];

        if rest.starts_with("''") {
            literal.push('\'');
            i += 2;
            continue;
        }
        if rest.starts_with('\'') {
            // Quoted span; '' inside is an escaped apostrophe.
            let mut j = i + 1;
            while j < pattern.len() {
                if bytes[j] == b'\'' {
                    if pattern[j + 1..].starts_with('\'') {
                        literal.push('\'');
                        j += 2;
                    } else {
                        i = j + 1;
                        continue 'outer;
                    }
                } else {
                    let ch = pattern[j..].chars().next()?;
                    literal.push(ch);
                    j += ch.len_utf8();
                }
            }
            // Unterminated quote.
            return None;
        }

        if let Some((field, token)) = FIELDS.iter().find(|(f, _)| rest.starts_with(f)) {
            flush(&mut literal, &mut tokens);
            tokens.push(token.clone());
            i += field.len();
            continue;
        }

        let ch = rest.chars().next()?;
        if ch.is_alphabetic() {
            return None;
        }
        literal.push(ch);
        i += ch.len_utf8();
    }

    flush(&mut literal, &mut tokens);
    Some(tokens)
}
