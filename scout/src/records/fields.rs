//! Field parser for the `key_value::key_value` micro-format.

use std::collections::BTreeMap;

/// Delimiter between segments of an encoded record
pub const SEGMENT_DELIMITER: &str = "::";

/// One decoded segment of an encoded record string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// `key_value`, split on the first underscore
    Field { key: &'a str, value: &'a str },
    /// A segment without any underscore; tolerated and ignored
    Skipped(&'a str),
}

impl<'a> Segment<'a> {
    fn decode(raw: &'a str) -> Self {
        match raw.split_once('_') {
            Some((key, value)) => Segment::Field { key, value },
            None => Segment::Skipped(raw),
        }
    }
}

/// Iterate over the segments of an encoded record string
pub fn segments(encoded: &str) -> impl Iterator<Item = Segment<'_>> {
    encoded.split(SEGMENT_DELIMITER).map(Segment::decode)
}

/// Decoded key/value fields of one record
///
/// Keys are not validated; unknown keys pass through unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFields {
    fields: BTreeMap<String, String>,
}

impl RecordFields {
    /// Look up a field value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate fields in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Re-encode as `key_value::key_value`, keys in sorted order
    pub fn encode(&self) -> String {
        self.iter()
            .map(|(key, value)| format!("{key}_{value}"))
            .collect::<Vec<_>>()
            .join(SEGMENT_DELIMITER)
    }
}

impl<'a> FromIterator<Segment<'a>> for RecordFields {
    fn from_iter<I: IntoIterator<Item = Segment<'a>>>(iter: I) -> Self {
        let mut fields = BTreeMap::new();
        for segment in iter {
            if let Segment::Field { key, value } = segment {
                // last occurrence wins
                fields.insert(key.to_string(), value.to_string());
            }
        }
        Self { fields }
    }
}

/// Decode an encoded record string into its fields
///
/// Segments without an underscore are dropped silently. The same routine
/// serves experience and education strings.
pub fn parse_record(encoded: &str) -> RecordFields {
    segments(encoded).collect()
}

/// Typed view of an experience record
/// (`yrs_..::title_..::company_..::start_..::end_..`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceRecord {
    fields: RecordFields,
}

impl ExperienceRecord {
    pub fn parse(encoded: &str) -> Self {
        Self {
            fields: parse_record(encoded),
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.fields.get("title")
    }

    pub fn company(&self) -> Option<&str> {
        self.fields.get("company")
    }

    /// Tenure bucket as written by the data source
    pub fn years_bucket(&self) -> Option<&str> {
        self.fields.get("yrs")
    }

    pub fn start(&self) -> Option<&str> {
        self.fields.get("start")
    }

    pub fn end(&self) -> Option<&str> {
        self.fields.get("end")
    }

    pub fn fields(&self) -> &RecordFields {
        &self.fields
    }
}

/// Typed view of an education record
/// (`yrs_..::school_..::degree_..::fos_..::start_..::end_..`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EducationRecord {
    fields: RecordFields,
}

impl EducationRecord {
    pub fn parse(encoded: &str) -> Self {
        Self {
            fields: parse_record(encoded),
        }
    }

    pub fn school(&self) -> Option<&str> {
        self.fields.get("school")
    }

    pub fn degree(&self) -> Option<&str> {
        self.fields.get("degree")
    }

    /// Field of study
    pub fn field_of_study(&self) -> Option<&str> {
        self.fields.get("fos")
    }

    pub fn years_bucket(&self) -> Option<&str> {
        self.fields.get("yrs")
    }

    pub fn start(&self) -> Option<&str> {
        self.fields.get("start")
    }

    pub fn end(&self) -> Option<&str> {
        self.fields.get("end")
    }

    pub fn fields(&self) -> &RecordFields {
        &self.fields
    }
}
