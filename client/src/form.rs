//! The dynamic form gateway.
//!
//! [`DynamicForm`] turns builder state into requests and service payloads
//! into domain values. Network I/O goes through an injected [`Transport`];
//! payload processing is delegated to `dynaform-engine`.

use crate::config::Config;
use crate::endpoints::Endpoints;
use crate::error::{FormError, Result, TransportError};
use crate::transport::{HttpTransport, Transport};
use dynaform_engine::{
    AnswerRecord, FieldDescriptor, FieldSpec, FormBuilder, FormId, Formulary, ReconciledAnswer,
};
use futures::future::join_all;
use serde::Serialize;
use serde_json::Value;

/// Request body for publishing a formulary.
#[derive(Debug, Serialize)]
struct PublishRequest<'a> {
    uuid: &'a FormId,
    fields: &'a [FieldDescriptor],
}

/// One form on the remote service, plus the fields built for it locally.
#[derive(Debug)]
pub struct DynamicForm<T = HttpTransport> {
    id: FormId,
    builder: FormBuilder,
    endpoints: Endpoints,
    transport: T,
}

impl DynamicForm<HttpTransport> {
    /// Create a form talking HTTP to the configured service.
    pub fn from_config(
        id: impl Into<FormId>,
        config: &Config,
    ) -> std::result::Result<Self, TransportError> {
        let transport = HttpTransport::from_config(config)?;
        Ok(Self::new(id, transport, Endpoints::new(config)))
    }
}

impl<T: Transport> DynamicForm<T> {
    pub fn new(id: impl Into<FormId>, transport: T, endpoints: Endpoints) -> Self {
        Self {
            id: id.into(),
            builder: FormBuilder::new(),
            endpoints,
            transport,
        }
    }

    pub fn id(&self) -> &FormId {
        &self.id
    }

    /// Fields added so far, in index order.
    pub fn fields(&self) -> &[FieldDescriptor] {
        self.builder.fields()
    }

    pub fn add_field(&mut self, spec: FieldSpec) -> &mut Self {
        self.builder.add_field(spec);
        self
    }

    /// Publish the fields built so far and return the public form URL.
    ///
    /// The response body is ignored; the URL is derived from the form id.
    pub async fn create_formulary(&self) -> Result<String> {
        let url = self.endpoints.create_formulary();
        let body = serde_json::to_value(PublishRequest {
            uuid: &self.id,
            fields: self.builder.fields(),
        })
        .map_err(|e| FormError::CreateFormulary(e.to_string()))?;

        tracing::debug!(
            "Publishing formulary {} with {} fields",
            self.id,
            self.builder.len()
        );

        if let Err(e) = self.transport.send(&url, Some(&body)).await {
            tracing::warn!("Failed to publish formulary {}: {}", self.id, e);
            return Err(FormError::CreateFormulary(e.to_string()));
        }

        Ok(self.endpoints.public_form(&self.id))
    }

    /// Fetch and clean the published field definitions.
    pub async fn get_formulary(&self) -> Result<Formulary> {
        let url = self.endpoints.formulary(&self.id);
        tracing::debug!("Fetching formulary {}", self.id);

        let raw = self.transport.send(&url, None).await.map_err(|e| {
            tracing::warn!("Failed to fetch formulary {}: {}", self.id, e);
            FormError::GetFormulary(e.to_string())
        })?;

        dynaform_engine::process_formulary(&raw).map_err(|e| {
            tracing::warn!("Unusable formulary {}: {}", self.id, e);
            FormError::GetFormulary(e.to_string())
        })
    }

    /// Fetch answers and resolve each one to its field name.
    ///
    /// The formulary is fetched first; if that fails its error is returned
    /// as is.
    pub async fn get_answers(&self) -> Result<Vec<ReconciledAnswer>> {
        let formulary = self.get_formulary().await?;

        let url = self.endpoints.answers(&self.id);
        tracing::debug!("Fetching answers for {}", self.id);

        let raw = self.transport.send(&url, None).await.map_err(|e| {
            tracing::warn!("Failed to fetch answers for {}: {}", self.id, e);
            FormError::GetAnswers(e.to_string())
        })?;

        dynaform_engine::process_answers(&raw, &formulary).map_err(|e| match e {
            dynaform_engine::Error::NoAnswers => FormError::NoAnswers,
            other => {
                tracing::warn!("Failed to reconcile answers for {}: {}", self.id, other);
                FormError::GetAnswers(other.to_string())
            }
        })
    }

    /// Submit answer records, one request each, all dispatched at once.
    ///
    /// Waits for every request. Any failure fails the whole batch and no
    /// partial results are returned, even though sibling requests ran.
    pub async fn create_answers(&self, answers: &[AnswerRecord]) -> Result<Vec<Value>> {
        let bodies = answers
            .iter()
            .map(|record| -> std::result::Result<Value, String> {
                let wire = record.to_wire().map_err(|e| e.to_string())?;
                serde_json::to_value(wire).map_err(|e| e.to_string())
            })
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(FormError::CreateAnswers)?;

        let url = self.endpoints.create_response();
        tracing::debug!("Submitting {} answer records to {}", bodies.len(), url);

        let results = join_all(
            bodies
                .iter()
                .map(|body| self.transport.send(&url, Some(body))),
        )
        .await;

        results.into_iter().collect::<std::result::Result<Vec<_>, _>>().map_err(|e| {
            tracing::warn!("Failed to submit answers: {}", e);
            FormError::CreateAnswers(e.to_string())
        })
    }
}
