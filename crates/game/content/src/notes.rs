//! Note-field metadata.
//!
//! Editor records carry a free-form note. Tags inside it take two shapes:
//!
//! ```text
//! <magicAptitude1:1,1.4>   key with a value
//! <boss>                   bare flag
//! ```
//!
//! Keys may not contain `<`, `>` or `:`. Values run to the next `>`. A key
//! that runs into a `<` still makes a flag, swallowing text up to the next
//! `>`. A key seen twice keeps its last value.

use std::collections::BTreeMap;

use magic_core::env::{APTITUDE_SLOTS, AptitudeAnnotations};

/// Note keys mapped, in order, onto the aptitude slots.
pub const APTITUDE_KEYS: [&str; APTITUDE_SLOTS] =
    ["magicAptitude1", "magicAptitude2", "magicAptitude3"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NoteValue {
    Flag,
    Text(String),
}

/// Tags extracted from one note.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoteMeta {
    entries: BTreeMap<String, NoteValue>,
}

impl NoteMeta {
    pub fn parse(note: &str) -> Self {
        let mut entries = BTreeMap::new();
        let mut rest = note;
        while let Some(open) = rest.find('<') {
            rest = &rest[open + 1..];
            let Some(end) = rest.find(['<', '>', ':']) else {
                break;
            };
            let key = &rest[..end];
            if key.is_empty() {
                continue;
            }
            let (value, has_colon) = match rest.as_bytes()[end] {
                b':' => (&rest[end + 1..], true),
                _ => (&rest[end..], false),
            };
            // without a colon anything up to `>` is swallowed and the tag is a flag
            let Some(close) = value.find('>') else {
                break;
            };
            let entry = if has_colon {
                NoteValue::Text(value[..close].to_owned())
            } else {
                NoteValue::Flag
            };
            entries.insert(key.to_owned(), entry);
            rest = &value[close + 1..];
        }
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&NoteValue> {
        self.entries.get(key)
    }

    /// Value text of `key`. Flags and empty values count as absent.
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.entries.get(key)? {
            NoteValue::Text(value) if !value.is_empty() => Some(value),
            _ => None,
        }
    }

    pub fn has_flag(&self, key: &str) -> bool {
        matches!(self.entries.get(key), Some(NoteValue::Flag))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Aptitude slots filled from the `magicAptitude1..3` tags.
    ///
    /// A bare `<magicAptitude1>` flag fills its slot with an empty value, which
    /// fails as malformed when the multiplier is looked up.
    pub fn aptitudes(&self) -> AptitudeAnnotations {
        APTITUDE_KEYS
            .iter()
            .enumerate()
            .fold(AptitudeAnnotations::empty(), |annotations, (slot, key)| {
                match self.entries.get(*key) {
                    Some(NoteValue::Text(value)) if !value.is_empty() => {
                        annotations.with_slot(slot, value.as_str())
                    }
                    Some(NoteValue::Flag) => annotations.with_slot(slot, ""),
                    _ => annotations,
                }
            })
    }
}
