//! JSON artifacts exchanged between pipeline stages.
//!
//! - the candidate collection written by retrieval and read by reranking
//! - the ranking output (`{config_path, object_ids}`)
//! - the submission payload read back by evaluation

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::candidate::Candidate;
use crate::services::Submission;
use crate::{Result, ScoutError};

fn read_json(path: &Path) -> Result<Value> {
    let text = fs::read_to_string(path).map_err(|source| ScoutError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|e| ScoutError::MalformedInput {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Write a value as pretty-printed JSON, creating parent directories
pub fn write_json<T: Serialize + ?Sized>(path: impl AsRef<Path>, value: &T) -> Result<()> {
    let path = path.as_ref();
    let io_error = |source: std::io::Error| ScoutError::Io {
        path: path.display().to_string(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(io_error)?;
    }

    let mut text = serde_json::to_string_pretty(value)?;
    text.push('\n');
    fs::write(path, text).map_err(io_error)?;
    debug!(path = %path.display(), "Wrote artifact");
    Ok(())
}

/// Load a candidate collection
///
/// The file must hold a JSON array of objects. Anything else is fatal;
/// problems inside individual records are left to the scoring code, which
/// tolerates them.
pub fn load_candidates(path: impl AsRef<Path>) -> Result<Vec<Candidate>> {
    let path = path.as_ref();
    let malformed = |reason: String| ScoutError::MalformedInput {
        path: path.display().to_string(),
        reason,
    };

    let Value::Array(items) = read_json(path)? else {
        return Err(malformed("expected a JSON array of candidate records".to_string()));
    };

    let candidates = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            Candidate::try_from(item).map_err(|other| {
                malformed(format!(
                    "candidate #{} is not a JSON object (found {})",
                    index,
                    json_kind(&other)
                ))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(path = %path.display(), count = candidates.len(), "Loaded candidates");
    Ok(candidates)
}

/// Load a submission, normalizing the two accepted shapes
///
/// An object with `object_ids` supplies its own `config_path` (falling back
/// to `config_path`); a bare array is taken as the id list.
pub fn load_submission(path: impl AsRef<Path>, config_path: &str) -> Result<Submission> {
    let path = path.as_ref();
    submission_from_value(read_json(path)?, config_path).map_err(|reason| {
        ScoutError::MalformedInput {
            path: path.display().to_string(),
            reason,
        }
    })
}

fn submission_from_value(
    value: Value,
    config_path: &str,
) -> std::result::Result<Submission, String> {
    match value {
        Value::Object(mut map) if map.contains_key("object_ids") => {
            let object_ids = match map.remove("object_ids") {
                Some(Value::Array(ids)) => ids,
                Some(other) => {
                    return Err(format!(
                        "`object_ids` must be an array, found {}",
                        json_kind(&other)
                    ));
                }
                None => Vec::new(),
            };
            let config_path = match map.remove("config_path") {
                Some(Value::String(s)) => s,
                _ => config_path.to_string(),
            };
            Ok(Submission {
                config_path,
                object_ids,
            })
        }
        Value::Array(object_ids) => Ok(Submission {
            config_path: config_path.to_string(),
            object_ids,
        }),
        other => Err(format!(
            "expected an object with `object_ids` or an array of ids, found {}",
            json_kind(&other)
        )),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
