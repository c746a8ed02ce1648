use std::fs;
use std::path::Path;

use serde_json::Value;
use wallet_locale_core::TextOverrides;

use crate::error::AdapterError;

/// Parses a JSON object of `name -> text` pairs.
///
/// Unknown names are accepted here; flagging them is the provider's job.
pub fn parse_overrides(input: &str, limit: usize) -> Result<TextOverrides, AdapterError> {
    if input.len() > limit {
        return Err(AdapterError::TooLarge {
            size: input.len() as u64,
            limit,
        });
    }

    let Value::Object(entries) = serde_json::from_str::<Value>(input)? else {
        return Err(AdapterError::NotAnObject);
    };

    let mut overrides = TextOverrides::new();
    for (key, value) in entries {
        match value {
            Value::String(text) => overrides.set_name(key, text),
            _ => return Err(AdapterError::InvalidValue { key }),
        }
    }
    tracing::debug!(entries = overrides.len(), "parsed text overrides");
    Ok(overrides)
}

pub fn load_overrides_file(path: &Path, limit: usize) -> Result<TextOverrides, AdapterError> {
    let io_err = |source: std::io::Error| AdapterError::Io {
        path: path.to_path_buf(),
        source,
    };

    let size = fs::metadata(path).map_err(io_err)?.len();
    if size > limit as u64 {
        return Err(AdapterError::TooLarge { size, limit });
    }
    let input = fs::read_to_string(path).map_err(io_err)?;
    tracing::debug!(path = %path.display(), bytes = size, "loading text overrides");
    parse_overrides(&input, limit)
}
