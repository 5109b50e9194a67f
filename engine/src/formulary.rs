//! Formulary types as returned by the form service after cleaning.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A published field after blank-name filtering and attribute cleaning.
///
/// Attributes the service adds beyond the known ones, and known ones whose
/// value has an unexpected JSON type, are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormularyField {
    /// Field type
    #[serde(rename = "field", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub name: String,
    /// Index assigned by the client that published the formulary
    pub index: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Ordered, cleaned field definitions of one form.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Formulary {
    fields: Vec<FormularyField>,
}

impl Formulary {
    pub fn from_fields(fields: Vec<FormularyField>) -> Self {
        Self { fields }
    }

    /// Fields in server order.
    pub fn fields(&self) -> &[FormularyField] {
        &self.fields
    }

    /// Look up a field by its stored index, not its list position.
    ///
    /// If several fields claim the same index the first one wins.
    pub fn field(&self, index: u32) -> Option<&FormularyField> {
        self.fields.iter().find(|field| field.index == index)
    }

    pub fn field_name(&self, index: u32) -> Option<&str> {
        self.field(index).map(|field| field.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn into_fields(self) -> Vec<FormularyField> {
        self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn field(name: &str, index: u32) -> FormularyField {
        serde_json::from_value(json!({"field": "text", "name": name, "index": index})).unwrap()
    }

    #[test]
    fn lookup_uses_stored_index() {
        // index 1 was dropped upstream; position 1 now holds index 2
        let formulary = Formulary::from_fields(vec![field("A", 0), field("C", 2)]);

        assert_eq!(formulary.field_name(0), Some("A"));
        assert_eq!(formulary.field_name(2), Some("C"));
        assert_eq!(formulary.field_name(1), None);
    }

    #[test]
    fn unknown_attributes_survive_round_trip() {
        let raw = json!({"field": "text", "name": "A", "index": 0, "placeholder": "..."});
        let parsed: FormularyField = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(parsed.extra.get("placeholder"), Some(&json!("...")));
        assert_eq!(serde_json::to_value(&parsed).unwrap(), raw);
    }

    #[test]
    fn serializes_as_plain_list() {
        let formulary = Formulary::from_fields(vec![field("A", 0)]);
        assert_eq!(
            serde_json::to_value(&formulary).unwrap(),
            json!([{"field": "text", "name": "A", "index": 0}])
        );
    }
}
