//! Build setting values.
//!
//! Values are carried through untouched; computing them is the job of the
//! build-settings phase.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single build setting value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BuildSetting {
    Bool(bool),
    String(String),
    Array(Vec<String>),
}

impl BuildSetting {
    /// The string value, if this is a string setting.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            BuildSetting::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for BuildSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildSetting::Bool(true) => f.write_str("YES"),
            BuildSetting::Bool(false) => f.write_str("NO"),
            BuildSetting::String(s) => f.write_str(s),
            BuildSetting::Array(values) => f.write_str(&values.join(" ")),
        }
    }
}

impl From<&str> for BuildSetting {
    fn from(s: &str) -> Self {
        BuildSetting::String(s.to_string())
    }
}

impl From<bool> for BuildSetting {
    fn from(b: bool) -> Self {
        BuildSetting::Bool(b)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn test_decode_mixed_settings() {
        let settings: BTreeMap<String, BuildSetting> = serde_json::from_str(
            r#"{
                "ENABLE_BITCODE": false,
                "PRODUCT_NAME": "App",
                "OTHER_LDFLAGS": ["-ObjC", "-lz"]
            }"#,
        )
        .unwrap();

        assert_eq!(settings["ENABLE_BITCODE"], BuildSetting::Bool(false));
        assert_eq!(settings["PRODUCT_NAME"].as_str(), Some("App"));
        assert_eq!(settings["OTHER_LDFLAGS"].to_string(), "-ObjC -lz");
    }

    #[test]
    fn test_decode_rejects_numbers() {
        assert!(serde_json::from_str::<BuildSetting>("42").is_err());
    }

    #[test]
    fn test_bool_display() {
        assert_eq!(BuildSetting::from(true).to_string(), "YES");
        assert_eq!(BuildSetting::from(false).to_string(), "NO");
    }
}
