//! Item records and request payloads

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single stored record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Server-assigned identifier, immutable once stored
    pub id: String,

    /// Free-form display name
    pub name: String,

    /// Free-form description
    pub description: String,
}

impl Item {
    /// Create an item with an explicit id (seeding and tests)
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Item {
            id: id.into(),
            name: name.into(),
            description: description.into(),
        }
    }

    /// Build a stored item from a payload and an assigned id
    pub(crate) fn from_payload(id: String, payload: ItemPayload) -> Self {
        Item {
            id,
            name: payload.name,
            description: payload.description,
        }
    }

    /// Overwrite the mutable fields, leaving the id alone
    pub(crate) fn apply(&mut self, payload: ItemPayload) {
        self.name = payload.name;
        self.description = payload.description;
    }

    /// Approximate heap footprint of the string fields
    pub fn memory_usage(&self) -> usize {
        self.id.len() + self.name.len() + self.description.len()
    }
}

/// Body accepted by create and update
///
/// Field names match without regard to ASCII case. Missing or `null`
/// fields decode as empty strings, unknown fields are skipped, and a
/// client-supplied `id` must be a string but is never read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemPayload {
    pub name: String,
    pub description: String,
}

impl ItemPayload {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        ItemPayload {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Decode the first JSON value of a request body
    ///
    /// Anything after that value is left unread. A bare `null` is an empty
    /// payload; an empty body is an error.
    pub fn from_body(body: &[u8]) -> serde_json::Result<Self> {
        let mut values =
            serde_json::Deserializer::from_slice(body).into_iter::<Option<ItemPayload>>();

        match values.next() {
            Some(value) => Ok(value?.unwrap_or_default()),
            None => Err(de::Error::custom("empty request body")),
        }
    }
}

impl<'de> Deserialize<'de> for ItemPayload {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(PayloadVisitor)
    }
}

struct PayloadVisitor;

impl<'de> Visitor<'de> for PayloadVisitor {
    type Value = ItemPayload;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an item object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<ItemPayload, A::Error> {
        let mut payload = ItemPayload::default();

        // Repeated keys: the last one wins.
        while let Some(key) = map.next_key::<String>()? {
            if key.eq_ignore_ascii_case("name") {
                payload.name = map.next_value::<Option<String>>()?.unwrap_or_default();
            } else if key.eq_ignore_ascii_case("description") {
                payload.description = map.next_value::<Option<String>>()?.unwrap_or_default();
            } else if key.eq_ignore_ascii_case("id") {
                map.next_value::<Option<String>>()?;
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }

        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_wire_shape() {
        let item = Item::new("1", "Mock Item 1", "First mock item");
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": "1",
                "name": "Mock Item 1",
                "description": "First mock item",
            })
        );
    }

    #[test]
    fn test_payload_ignores_id_and_unknown_fields() {
        let payload: ItemPayload = serde_json::from_str(
            r#"{"id":"42","name":"New Item","description":"A new test item","extra":true}"#,
        )
        .unwrap();

        assert_eq!(payload, ItemPayload::new("New Item", "A new test item"));
    }

    #[test]
    fn test_payload_missing_fields_default_to_empty() {
        let payload: ItemPayload = serde_json::from_str(r#"{"name":"Only name"}"#).unwrap();
        assert_eq!(payload.name, "Only name");
        assert_eq!(payload.description, "");
    }

    #[test]
    fn test_payload_field_names_ignore_case() {
        let payload: ItemPayload =
            serde_json::from_str(r#"{"Name":"x","DESCRIPTION":"y"}"#).unwrap();
        assert_eq!(payload, ItemPayload::new("x", "y"));
    }

    #[test]
    fn test_payload_null_fields_and_repeated_keys() {
        let payload: ItemPayload =
            serde_json::from_str(r#"{"name":null,"description":"a","description":"b"}"#).unwrap();
        assert_eq!(payload, ItemPayload::new("", "b"));
    }

    #[test]
    fn test_payload_rejects_non_objects_and_bad_types() {
        for body in [r#"["a","b"]"#, r#""text""#, r#"{"name":5}"#, r#"{"id":5}"#] {
            assert!(serde_json::from_str::<ItemPayload>(body).is_err(), "{}", body);
        }
    }

    #[test]
    fn test_from_body_reads_first_value_only() {
        let payload = ItemPayload::from_body(br#"{"name":"x"} {"name":"y"}"#).unwrap();
        assert_eq!(payload.name, "x");

        let payload = ItemPayload::from_body(br#"{"name":"x"}trailing"#).unwrap();
        assert_eq!(payload.name, "x");
    }

    #[test]
    fn test_from_body_null_is_empty_payload() {
        assert_eq!(ItemPayload::from_body(b"null").unwrap(), ItemPayload::default());
        assert_eq!(ItemPayload::from_body(b"  null  ").unwrap(), ItemPayload::default());
    }

    #[test]
    fn test_from_body_rejects_empty_and_malformed() {
        assert!(ItemPayload::from_body(b"").is_err());
        assert!(ItemPayload::from_body(b"   ").is_err());
        assert!(ItemPayload::from_body(br#"{"name":"Bad JSON", "description":}"#).is_err());
    }

    #[test]
    fn test_apply_keeps_id() {
        let mut item = Item::new("7", "old", "old desc");
        item.apply(ItemPayload::new("new", "new desc"));
        assert_eq!(item, Item::new("7", "new", "new desc"));
    }
}
