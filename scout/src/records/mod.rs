//! Encoded experience and education records.
//!
//! Candidate records carry their work history and schooling as compact
//! strings of the form `key_value::key_value::...`. This module decodes those
//! strings into field maps and typed views, and aggregates experience tenure.

mod experience;
mod fields;

pub use experience::{
    current_utc_year, parse_year, total_experience_years, total_experience_years_at,
};
pub use fields::{
    EducationRecord, ExperienceRecord, RecordFields, SEGMENT_DELIMITER, Segment, parse_record,
    segments,
};
