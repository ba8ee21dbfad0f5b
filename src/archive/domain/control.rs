//! Reader for deb822 control paragraphs (`Sources`, `Packages`).

use thiserror::Error;

/// Structural error in a control file; `line` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {details}")]
pub struct ControlParseError {
    pub line: usize,
    pub details: String,
}

/// One stanza of `Field: value` lines.
///
/// Field lookup is case-insensitive. Multi-line values keep their line
/// breaks, with the leading whitespace of continuation lines removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlParagraph {
    fields: Vec<(String, String)>,
    start_line: usize,
}

impl ControlParagraph {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(field))
            .map(|(_, value)| value.as_str())
    }

    /// Line of the paragraph's first field.
    pub fn start_line(&self) -> usize {
        self.start_line
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Splits a control file into paragraphs.
pub fn parse_paragraphs(text: &str) -> Result<Vec<ControlParagraph>, ControlParseError> {
    let mut paragraphs = Vec::new();
    let mut current = ControlParagraph::default();

    for (idx, raw_line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw_line.trim_end_matches('\r');

        if line.trim().is_empty() {
            if !current.is_empty() {
                paragraphs.push(std::mem::take(&mut current));
            }
            continue;
        }
        if line.starts_with('#') {
            continue;
        }

        if line.starts_with(|c: char| c == ' ' || c == '\t') {
            let Some((_, value)) = current.fields.last_mut() else {
                return Err(ControlParseError {
                    line: line_no,
                    details: "continuation line before any field".to_string(),
                });
            };
            let continued = line.trim();
            if continued != "." {
                if !value.is_empty() {
                    value.push('\n');
                }
                value.push_str(continued);
            }
            continue;
        }

        let Some((name, value)) = line.split_once(':') else {
            return Err(ControlParseError {
                line: line_no,
                details: format!("expected 'Field: value', found '{}'", line),
            });
        };
        let name = name.trim();
        if name.is_empty() {
            return Err(ControlParseError {
                line: line_no,
                details: "empty field name".to_string(),
            });
        }
        if current.is_empty() {
            current.start_line = line_no;
        }
        current
            .fields
            .push((name.to_string(), value.trim().to_string()));
    }

    if !current.is_empty() {
        paragraphs.push(current);
    }
    Ok(paragraphs)
}

/// Splits a comma separated list field (`Binary`, `Provides`-style names).
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Splits an `Uploaders` field. Commas inside a display name
/// (`"Doe, Jane" <jane@example.org>`) do not end an entry; only a comma
/// after a closing `>` does.
pub fn split_people(value: &str) -> Vec<String> {
    let mut people = Vec::new();
    let mut current = String::new();
    let mut seen_address = false;

    for c in value.chars() {
        match c {
            ',' if seen_address => {
                push_person(&mut people, &current);
                current.clear();
                seen_address = false;
            }
            '>' => {
                seen_address = true;
                current.push(c);
            }
            _ => current.push(c),
        }
    }
    push_person(&mut people, &current);
    people
}

fn push_person(people: &mut Vec<String>, raw: &str) {
    let person = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if !person.is_empty() {
        people.push(person);
    }
}
