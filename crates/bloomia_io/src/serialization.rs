//! JSON file helpers.

use crate::error::{IoError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Deserializes data from a JSON string. Blank input is a validation error.
pub fn from_json<T>(json: &str) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    if json.trim().is_empty() {
        return Err(IoError::validation("Empty JSON string"));
    }
    Ok(serde_json::from_str(json)?)
}

pub fn to_json_pretty<T>(data: &T) -> Result<String>
where
    T: Serialize,
{
    Ok(serde_json::to_string_pretty(data)?)
}

/// Reads and deserializes a JSON file.
pub fn read_json_file<T, P>(path: P) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if !path.exists() {
        return Err(IoError::not_found(path.display().to_string()));
    }
    let content = fs::read_to_string(path)?;
    from_json(&content).map_err(|e| e.with_context(format!("reading {}", path.display())))
}

/// Serializes data to a JSON file, creating parent directories as needed.
pub fn write_json_file<T, P>(path: P, data: &T) -> Result<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, to_json_pretty(data)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_blank_json_is_rejected() {
        let result: Result<BTreeMap<String, String>> = from_json("   ");
        assert!(matches!(result, Err(IoError::Validation(_))));
    }

    #[test]
    fn test_file_round_trip() {
        let dir = std::env::temp_dir().join(format!("bloomia_ser_{}", uuid::Uuid::new_v4()));
        let path = dir.join("nested").join("data.json");
        let mut data = BTreeMap::new();
        data.insert("k".to_string(), "v".to_string());

        write_json_file(&path, &data).unwrap();
        let back: BTreeMap<String, String> = read_json_file(&path).unwrap();
        assert_eq!(back, data);

        let missing: Result<BTreeMap<String, String>> = read_json_file(dir.join("nope.json"));
        assert!(matches!(missing, Err(IoError::NotFound(_))));
        let _ = fs::remove_dir_all(dir);
    }
}
