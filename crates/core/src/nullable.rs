//! Serde helper for patch fields that distinguish "absent" from `null`.
//!
//! Use with `#[serde(default, deserialize_with = "wms_core::nullable::deserialize")]`
//! on an `Option<Option<T>>` field:
//! - field omitted -> `None` (keep current value)
//! - field `null`  -> `Some(None)` (clear)
//! - field value   -> `Some(Some(v))` (replace)

use serde::{Deserialize, Deserializer};

pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "super::deserialize")]
        assigned_to: Option<Option<String>>,
    }

    #[test]
    fn distinguishes_missing_null_and_value() {
        let missing: Patch = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.assigned_to, None);

        let null: Patch = serde_json::from_str(r#"{"assigned_to":null}"#).unwrap();
        assert_eq!(null.assigned_to, Some(None));

        let value: Patch = serde_json::from_str(r#"{"assigned_to":"Sam"}"#).unwrap();
        assert_eq!(value.assigned_to, Some(Some("Sam".to_string())));
    }
}
