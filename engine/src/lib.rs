//! # Dynaform Engine
//!
//! Field indexing and answer reconciliation for dynamic forms.
//!
//! This crate holds everything about a dynamic form that does not need a
//! network: building the ordered list of fields a form is published with,
//! cleaning the field definitions the service hands back, and resolving
//! index-keyed answers to field names.
//!
//! ## Core Concepts
//!
//! ### Fields
//!
//! A [`FormBuilder`] accumulates [`FieldDescriptor`]s. Each one receives a
//! zero-based index at append time; indices are never reused. Optional
//! attributes (`options`, `url`, `email`, `subject`) are only present when
//! they were given a non-empty value.
//!
//! ### Formularies
//!
//! The service returns the published fields of a form. [`process_formulary`]
//! drops blank-named records and strips empty attributes, producing a
//! [`Formulary`].
//!
//! ### Answers
//!
//! Answers only carry a field index. [`process_answers`] resolves each one
//! through the formulary's stored indices into a [`ReconciledAnswer`].
//!
//! ## Quick Start
//!
//! ```rust
//! use dynaform_engine::{process_answers, process_formulary, FieldSpec, FormBuilder};
//! use serde_json::json;
//!
//! // 1. Build the fields
//! let mut builder = FormBuilder::new();
//! builder
//!     .add_field(FieldSpec::new("text-field", "Nombre"))
//!     .add_field(FieldSpec::new("email-field", "Correo").email("info@example.com"));
//! assert_eq!(builder.fields()[1].index, 1);
//!
//! // 2. Clean what the service returns for the form
//! let published = serde_json::to_value(builder.fields()).unwrap();
//! let formulary = process_formulary(&json!({ "fields": published })).unwrap();
//!
//! // 3. Resolve answers
//! let raw = json!([{ "fields": "[{\"index\":0,\"value\":\"Ana\"}]" }]);
//! let answers = process_answers(&raw, &formulary).unwrap();
//! assert_eq!(answers[0].field, "Nombre");
//! ```

pub mod answer;
pub mod error;
pub mod form;
pub mod formulary;
pub mod reconcile;

// Re-export main types at crate root
pub use answer::{AnswerRecord, AnswerValue, ReconciledAnswer, WireAnswer};
pub use error::{Error, Result};
pub use form::{FieldDescriptor, FieldSpec, FormBuilder, FormId};
pub use formulary::{Formulary, FormularyField};
pub use reconcile::{process_answers, process_formulary};
