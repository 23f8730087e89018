//! HTS code patterns
//!
//! A pattern has exactly four dot-separated sections, mirroring the
//! `xxxx.xx.xx.xx` layout of a Harmonized Tariff Schedule code. Each section is
//! a sequence of tokens:
//!
//! | Token   | Matches                                             |
//! |---------|-----------------------------------------------------|
//! | `0`-`9` | that digit                                          |
//! | `{x-y}` | one digit between `x` and `y` inclusive             |
//! | `%d`    | any one digit                                       |
//! | `*`     | the whole section: 4 digits in the first, 2 elsewhere |
//!
//! `8471.{3-5}0.%d1.*` matches `8471.30.01.00` and `8471.50.91.99`.

use std::fmt;
use std::str::FromStr;

use regex::Regex;

use crate::error::ClaimError;

const SECTION_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Digit(char),
    Range(u8, u8),
    AnyDigit,
    Wildcard,
}

/// A compiled HTS code pattern
#[derive(Debug, Clone)]
pub struct HtsPattern {
    source: String,
    regex: Regex,
}

impl HtsPattern {
    /// Normalizes and compiles a single pattern
    pub fn parse(pattern: &str) -> Result<Self, ClaimError> {
        let source = normalize(pattern);
        let sections: Vec<&str> = source.split('.').collect();
        if sections.len() != SECTION_COUNT {
            return Err(ClaimError::invalid_pattern(
                &source,
                "must have exactly 4 sections (xxxx.xx.xx.xx)",
            ));
        }

        let mut parts = Vec::with_capacity(SECTION_COUNT);
        for (index, section) in sections.iter().enumerate() {
            let tokens = parse_section(section, index)
                .map_err(|reason| ClaimError::invalid_pattern(&source, reason))?;
            parts.push(section_regex(&tokens, index));
        }

        let regex = Regex::new(&format!("^{}$", parts.join(r"\.")))
            .map_err(|e| ClaimError::invalid_pattern(&source, e.to_string()))?;

        Ok(Self { source, regex })
    }

    /// Parses a comma-separated list of patterns, skipping empty entries
    pub fn parse_list(patterns: &str) -> Result<Vec<Self>, ClaimError> {
        patterns
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(Self::parse)
            .collect()
    }

    /// Returns true if the HTS code matches this pattern
    pub fn matches(&self, hts_code: &str) -> bool {
        self.regex.is_match(hts_code)
    }

    /// The normalized pattern text
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl FromStr for HtsPattern {
    type Err = ClaimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for HtsPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Trims and upper-cases a pattern, keeping the `%d` wildcard lowercase
pub fn normalize(pattern: &str) -> String {
    pattern.trim().to_uppercase().replace("%D", "%d")
}

fn parse_section(section: &str, index: usize) -> Result<Vec<Token>, String> {
    let chars: Vec<char> = section.chars().collect();
    if chars.is_empty() {
        return Err(format!("section {} is empty", index + 1));
    }

    let mut tokens = Vec::with_capacity(chars.len());
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '{' => {
                let close = chars[i + 1..]
                    .iter()
                    .position(|&c| c == '}')
                    .map(|offset| i + 1 + offset)
                    .ok_or_else(|| {
                        let rest: String = chars[i..].iter().collect();
                        format!("missing '}}' in range at \"{rest}\"")
                    })?;
                let inside: String = chars[i + 1..close].iter().collect();
                tokens.push(parse_range(&inside)?);
                i = close + 1;
            }
            '%' => {
                if chars.get(i + 1) != Some(&'d') {
                    return Err("incomplete wildcard '%', follow '%' with 'd'".to_string());
                }
                tokens.push(Token::AnyDigit);
                i += 2;
            }
            '*' => {
                if chars.len() != 1 {
                    return Err(format!("'*' must occupy the entire section: \"{section}\""));
                }
                tokens.push(Token::Wildcard);
                i += 1;
            }
            c if c.is_ascii_digit() => {
                tokens.push(Token::Digit(c));
                i += 1;
            }
            c => return Err(format!("invalid character '{c}' in section \"{section}\"")),
        }
    }
    Ok(tokens)
}

fn parse_range(inside: &str) -> Result<Token, String> {
    let (start, end) = match inside.split_once('-') {
        Some((start, end)) if !end.is_empty() => (start, end),
        _ => return Err(format!("invalid range syntax \"{{{inside}}}\", expected \"{{x-y}}\"")),
    };
    let (start, end) = match (start.parse::<u8>(), end.parse::<u8>()) {
        (Ok(start), Ok(end)) => (start, end),
        _ => return Err(format!("range \"{{{inside}}}\" must contain digits only")),
    };
    if start > end {
        return Err(format!("invalid range \"{{{inside}}}\": start cannot exceed end"));
    }
    if end > 9 {
        return Err(format!("range \"{{{inside}}}\" must be within 0-9"));
    }
    Ok(Token::Range(start, end))
}

fn section_regex(tokens: &[Token], index: usize) -> String {
    tokens
        .iter()
        .map(|token| match token {
            Token::Digit(c) => c.to_string(),
            Token::Range(start, end) => format!("[{start}-{end}]"),
            Token::AnyDigit => "[0-9]".to_string(),
            Token::Wildcard if index == 0 => "[0-9]{4}".to_string(),
            Token::Wildcard => "[0-9]{2}".to_string(),
        })
        .collect()
}
