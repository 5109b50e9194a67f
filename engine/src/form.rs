//! Form identity and the append-only field builder.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of one formulary instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormId(String);

impl FormId {
    /// Wrap an identifier supplied by the caller.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FormId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FormId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for FormId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for FormId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Input for [`FormBuilder::add_field`].
///
/// Optional attributes left empty are not carried into the descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    /// Field type, e.g. `text-field`
    #[serde(rename = "type")]
    pub kind: String,
    /// Display name
    pub name: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
}

impl FieldSpec {
    /// Create a spec with only the required attributes.
    pub fn new(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }
}

/// A field as sent to the server when publishing a formulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Field type
    #[serde(rename = "field")]
    pub kind: String,
    pub name: String,
    /// Position assigned at append time
    pub index: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Accumulates field descriptors with monotonically increasing indices.
#[derive(Debug, Clone, Default)]
pub struct FormBuilder {
    fields: Vec<FieldDescriptor>,
    next_index: u32,
}

impl FormBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field. The new descriptor takes the current counter as its
    /// index; the counter is then incremented and never goes back.
    pub fn add_field(&mut self, spec: FieldSpec) -> &mut Self {
        let index = self.next_index;
        self.next_index += 1;

        let options = if spec.options.is_empty() {
            None
        } else {
            Some(spec.options)
        };

        self.fields.push(FieldDescriptor {
            kind: spec.kind,
            name: spec.name,
            index,
            options,
            url: non_empty(spec.url),
            email: non_empty(spec.email),
            subject: non_empty(spec.subject),
        });
        self
    }

    /// Fields in append order.
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Index the next appended field will receive.
    pub fn next_index(&self) -> u32 {
        self.next_index
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
