//! Reconciliation of raw service payloads into domain values.
//!
//! Both steps are pure: they take the decoded JSON the service returned
//! and produce either a cleaned [`Formulary`] or a list of
//! [`ReconciledAnswer`]s.
//!
//! # Algorithm
//!
//! Formulary processing:
//! 1. Keep records whose `name` is a string that is non-blank after trimming
//! 2. Strip attributes whose value is `""` or `null`
//! 3. Records without a usable `index` take their position in the raw list
//! 4. Known attributes of an unexpected type are kept as extra attributes
//! 5. Fail with [`Error::NoFieldsWithValues`] if nothing is left
//!
//! Answer processing:
//! 1. Fail with [`Error::NoAnswers`] on an absent or empty list
//! 2. Decode each record's `fields` (a JSON string, or an inline array)
//! 3. Take the first `{index, value}` pair
//! 4. Resolve the name through the field carrying that stored index

use crate::{error::Result, AnswerValue, Error, Formulary, FormularyField, ReconciledAnswer};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Clean and filter the `fields` of a get-formulary response.
pub fn process_formulary(raw: &Value) -> Result<Formulary> {
    let records = raw
        .get("fields")
        .and_then(Value::as_array)
        .ok_or_else(|| Error::InvalidPayload("expected an object with a `fields` array".into()))?;

    let mut fields = Vec::with_capacity(records.len());
    for (position, record) in records.iter().enumerate() {
        let Some(object) = record.as_object() else {
            continue;
        };
        if !has_name(object) {
            continue;
        }

        let cleaned = clean_attributes(object);
        if cleaned.is_empty() {
            continue;
        }
        fields.push(decode_field(cleaned, position)?);
    }

    if fields.is_empty() {
        return Err(Error::NoFieldsWithValues);
    }
    Ok(Formulary::from_fields(fields))
}

/// Resolve a get-answers response against a formulary.
pub fn process_answers(raw: &Value, formulary: &Formulary) -> Result<Vec<ReconciledAnswer>> {
    let records = match raw {
        Value::Null => return Err(Error::NoAnswers),
        Value::Array(records) => records,
        _ => return Err(Error::InvalidPayload("expected an array of answers".into())),
    };
    if records.is_empty() {
        return Err(Error::NoAnswers);
    }

    records
        .iter()
        .map(|record| reconcile_answer(record, formulary))
        .collect()
}

/// `fields` of a stored answer. The service stores what clients sent, which
/// is a JSON string; an inline array is accepted as well.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum EncodedFields {
    Json(String),
    Inline(Vec<AnswerValue>),
}

#[derive(Debug, Deserialize)]
struct StoredAnswer {
    fields: EncodedFields,
}

fn reconcile_answer(record: &Value, formulary: &Formulary) -> Result<ReconciledAnswer> {
    let stored = StoredAnswer::deserialize(record)?;
    let values = match stored.fields {
        EncodedFields::Json(encoded) => serde_json::from_str::<Vec<AnswerValue>>(&encoded)?,
        EncodedFields::Inline(values) => values,
    };

    let first = values
        .into_iter()
        .next()
        .ok_or_else(|| Error::InvalidPayload("answer record has no fields".into()))?;

    let name = formulary
        .field_name(first.index)
        .ok_or(Error::UnknownFieldIndex(first.index))?;

    Ok(ReconciledAnswer {
        field: name.to_string(),
        answer: first.value,
    })
}

/// Known attributes holding an unexpected JSON type are moved to `extra`
/// instead of rejecting the record. A missing or unusable `index` becomes
/// the record's raw position.
fn decode_field(mut attributes: Map<String, Value>, position: usize) -> Result<FormularyField> {
    let mut mismatched = Map::new();

    for key in ["field", "url", "email", "subject"] {
        if attributes.get(key).is_some_and(|value| !value.is_string()) {
            if let Some(value) = attributes.remove(key) {
                mismatched.insert(key.to_string(), value);
            }
        }
    }
    if attributes
        .get("options")
        .is_some_and(|value| !is_string_list(value))
    {
        if let Some(value) = attributes.remove("options") {
            mismatched.insert("options".to_string(), value);
        }
    }

    let index_usable = attributes
        .get("index")
        .and_then(Value::as_u64)
        .is_some_and(|index| u32::try_from(index).is_ok());
    if !index_usable {
        attributes.insert("index".to_string(), Value::from(position as u64));
    }

    let mut field: FormularyField = serde_json::from_value(Value::Object(attributes))?;
    field.extra.extend(mismatched);
    Ok(field)
}

fn is_string_list(value: &Value) -> bool {
    value
        .as_array()
        .is_some_and(|items| items.iter().all(Value::is_string))
}

fn has_name(object: &Map<String, Value>) -> bool {
    object
        .get("name")
        .and_then(Value::as_str)
        .is_some_and(|name| !name.trim().is_empty())
}

fn clean_attributes(object: &Map<String, Value>) -> Map<String, Value> {
    object
        .iter()
        .filter(|(_, value)| !is_blank_attribute(value))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

fn is_blank_attribute(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}
