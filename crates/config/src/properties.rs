//! Properties file parsing
//!
//! The agent's configuration is a flat `key=value` text file. Parsing follows
//! the conventional `.properties` rules: `#` and `!` comment lines, trailing
//! backslash line continuation, and backslash escapes. A backslash in front
//! of a character with no escape meaning is kept, so Windows paths written
//! with single backslashes survive unchanged.

use figment::{
    value::{Dict, Map, Value},
    Metadata, Profile, Provider,
};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Parsed key/value pairs, last occurrence of a key wins
pub type PropertyMap = BTreeMap<String, String>;

/// A parsed properties document, usable as a figment provider
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    entries: PropertyMap,
    source: Option<PathBuf>,
}

impl Properties {
    /// Parse properties text
    pub fn string(text: &str) -> Self {
        let mut entries = PropertyMap::new();
        for line in logical_lines(text) {
            let (key, value) = split_entry(&line);
            entries.insert(key, value);
        }
        Self {
            entries,
            source: None,
        }
    }

    /// Record the file the text was read from
    pub fn with_source(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = Some(path.into());
        self
    }

    /// Value stored under `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// All parsed entries, recognized or not
    pub fn entries(&self) -> &PropertyMap {
        &self.entries
    }

    /// Whether the text held no entries at all
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Provider for Properties {
    fn metadata(&self) -> Metadata {
        match &self.source {
            Some(path) => Metadata::named(format!("properties file `{}`", path.display())),
            None => Metadata::named("properties"),
        }
    }

    fn data(&self) -> Result<Map<Profile, Dict>, figment::Error> {
        let dict: Dict = self
            .entries
            .iter()
            .map(|(key, value)| (key.clone(), Value::from(value.clone())))
            .collect();

        let mut data = Map::new();
        data.insert(Profile::Default, dict);
        Ok(data)
    }
}

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0c')
}

/// Join continued lines and drop blanks and comments
fn logical_lines(text: &str) -> Vec<String> {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let mut lines = Vec::new();
    let mut pending: Option<String> = None;

    for physical in normalized.split('\n') {
        let trimmed = physical.trim_start_matches(is_blank);

        if pending.is_none() && (trimmed.is_empty() || trimmed.starts_with(['#', '!'])) {
            continue;
        }

        let trailing = trimmed.len() - trimmed.trim_end_matches('\\').len();
        let continues = trailing % 2 == 1;
        let body = if continues {
            &trimmed[..trimmed.len() - 1]
        } else {
            trimmed
        };

        pending.get_or_insert_with(String::new).push_str(body);

        if !continues {
            lines.extend(pending.take());
        }
    }

    // continuation on the final line
    lines.extend(pending);
    lines
}

/// Split a logical line at the first unescaped `=`
fn split_entry(line: &str) -> (String, String) {
    let mut escaped = false;
    let mut separator = None;

    for (index, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' => {
                separator = Some(index);
                break;
            }
            _ => {}
        }
    }

    let (raw_key, raw_value) = match separator {
        Some(index) => (&line[..index], &line[index + 1..]),
        None => (line, ""),
    };

    (
        unescape(raw_key.trim_end_matches(is_blank)),
        unescape(raw_value.trim_start_matches(is_blank)),
    )
}

fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }

        let decoded = match chars.peek().copied() {
            Some('\\') => Some('\\'),
            Some('t') => Some('\t'),
            Some('n') => Some('\n'),
            Some('r') => Some('\r'),
            Some('f') => Some('\x0c'),
            Some(literal @ ('=' | ':' | '#' | '!' | ' ')) => Some(literal),
            Some('u') => {
                let hex: String = chars.clone().skip(1).take(4).collect();
                let code = (hex.len() == 4 && hex.chars().all(|c| c.is_ascii_hexdigit()))
                    .then(|| u32::from_str_radix(&hex, 16).ok())
                    .flatten()
                    .and_then(char::from_u32);
                if code.is_some() {
                    // skip `u` and three digits, the last digit goes below
                    chars.nth(3);
                }
                code
            }
            _ => None,
        };

        match decoded {
            Some(decoded) => {
                chars.next();
                out.push(decoded);
            }
            None => out.push('\\'),
        }
    }

    out
}
