//! # Dynaform Client
//!
//! Client for the dynamic form service: publish a set of fields as a
//! formulary, read its field definitions back, and submit or collect
//! answers.
//!
//! [`DynamicForm`] is the entry point. It owns the fields built for one
//! form id and a [`Transport`] that performs the requests. The default
//! transport speaks HTTP through `reqwest`; tests and embedders can supply
//! their own.
//!
//! ```no_run
//! use dynaform_client::{Config, DynamicForm, FieldSpec};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let mut form = DynamicForm::from_config("my-form", &Config::default())?;
//! form.add_field(FieldSpec::new("text-field", "Nombre"))
//!     .add_field(FieldSpec::new("email-field", "Correo").email("info@example.com"));
//!
//! let url = form.create_formulary().await?;
//! println!("share {}", url);
//!
//! for answer in form.get_answers().await? {
//!     println!("{}: {}", answer.field, answer.answer);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod endpoints;
pub mod error;
pub mod form;
pub mod transport;

pub use config::{Config, ConfigError};
pub use endpoints::Endpoints;
pub use error::{FormError, Result, TransportError};
pub use form::DynamicForm;
pub use transport::{HttpTransport, Transport};

pub use dynaform_engine::{
    AnswerRecord, AnswerValue, FieldDescriptor, FieldSpec, FormId, Formulary, FormularyField,
    ReconciledAnswer,
};

/// Fresh random form identifier.
pub fn generate_form_id() -> FormId {
    FormId::new(uuid::Uuid::new_v4().to_string())
}
