//! Reader for the INI dialect of instrument files.
//!
//! Supports `[name]` headers, `key = value` or `key: value` entries and
//! full-line `#`/`;` comments. Keys keep their case. Continuation lines and
//! interpolation are not supported.

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Section {
    pub name: String,
    pub line: usize,
    pub entries: Vec<Entry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Entry {
    pub key: String,
    pub value: String,
    pub line: usize,
}

pub(crate) fn read_sections(source: &str) -> Result<Vec<Section>> {
    let mut sections: Vec<Section> = Vec::new();

    for (idx, raw) in source.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with(';') {
            continue;
        }

        if let Some(header) = trimmed.strip_prefix('[') {
            let name = header.strip_suffix(']').ok_or_else(|| Error::Syntax {
                line,
                message: format!("unterminated section header {trimmed:?}"),
            })?;
            sections.push(Section {
                name: name.trim().to_string(),
                line,
                entries: Vec::new(),
            });
            continue;
        }

        let Some(section) = sections.last_mut() else {
            return Err(Error::Syntax {
                line,
                message: format!("entry {trimmed:?} appears before any section header"),
            });
        };

        let split_at = trimmed.find(['=', ':']).ok_or_else(|| Error::Syntax {
            line,
            message: format!("expected `key = value`, found {trimmed:?}"),
        })?;
        let key = trimmed[..split_at].trim_end();
        let value = trimmed[split_at + 1..].trim_start();

        if key.is_empty() {
            return Err(Error::Syntax {
                line,
                message: "empty key".to_string(),
            });
        }
        if section.entries.iter().any(|e| e.key == key) {
            return Err(Error::Syntax {
                line,
                message: format!("key {key:?} repeated in section [{}]", section.name),
            });
        }

        section.entries.push(Entry {
            key: key.to_string(),
            value: value.to_string(),
            line,
        });
    }

    Ok(sections)
}
