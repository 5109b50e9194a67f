//! Answer types, both the submitted and the reconciled shapes.

use crate::{error::Result, Error, FormId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One `{index, value}` pair. `index` refers to a field index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerValue {
    pub index: u32,
    #[serde(default)]
    pub value: Value,
}

impl AnswerValue {
    pub fn new(index: u32, value: impl Into<Value>) -> Self {
        Self {
            index,
            value: value.into(),
        }
    }
}

/// Answers a respondent submits for one form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub uuid: FormId,
    pub fields: Vec<AnswerValue>,
}

impl AnswerRecord {
    pub fn new(uuid: impl Into<FormId>, fields: Vec<AnswerValue>) -> Self {
        Self {
            uuid: uuid.into(),
            fields,
        }
    }

    /// Record carrying a single answer.
    pub fn single(uuid: impl Into<FormId>, index: u32, value: impl Into<Value>) -> Self {
        Self::new(uuid, vec![AnswerValue::new(index, value)])
    }

    /// Build the body the service expects, with `fields` embedded as a
    /// JSON string. The record itself is left untouched.
    pub fn to_wire(&self) -> Result<WireAnswer> {
        let fields =
            serde_json::to_string(&self.fields).map_err(|e| Error::Encode(e.to_string()))?;
        Ok(WireAnswer {
            uuid: self.uuid.clone(),
            fields,
        })
    }
}

/// Wire body of a create-response request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireAnswer {
    pub uuid: FormId,
    /// JSON-encoded `[AnswerValue]`
    pub fields: String,
}

/// An answer resolved against the formulary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconciledAnswer {
    /// Field name
    pub field: String,
    pub answer: Value,
}
