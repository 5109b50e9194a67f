//! Request URLs of the form service.

use crate::config::Config;
use dynaform_engine::FormId;
use reqwest::Url;

/// Derives every URL the gateway talks to from the configured bases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    api_url: String,
    public_url: String,
}

impl Endpoints {
    pub fn new(config: &Config) -> Self {
        Self {
            api_url: config.api_url.clone(),
            public_url: config.public_url.clone(),
        }
    }

    /// POST target for publishing a formulary.
    pub fn create_formulary(&self) -> String {
        format!("{}/formulary", self.api_url)
    }

    pub fn formulary(&self, id: &FormId) -> String {
        self.with_uuid("/", id)
    }

    pub fn answers(&self, id: &FormId) -> String {
        self.with_uuid("/answers", id)
    }

    /// POST target for submitting one answer record.
    pub fn create_response(&self) -> String {
        format!("{}/create-response", self.api_url)
    }

    /// Where respondents open the form. Never returned by the service.
    pub fn public_form(&self, id: &FormId) -> String {
        format!("{}/{}", self.public_url, id)
    }

    /// `path` under the API base with the id as an encoded `uuid` query.
    fn with_uuid(&self, path: &str, id: &FormId) -> String {
        let base = format!("{}{}", self.api_url, path);
        match Url::parse(&base) {
            Ok(mut url) => {
                url.query_pairs_mut().append_pair("uuid", id.as_str());
                url.to_string()
            }
            // unparsable base; the transport reports it when sending
            Err(_) => format!("{}?uuid={}", base, id),
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_urls() {
        let endpoints = Endpoints::default();
        let id = FormId::from("test-uuid");

        assert_eq!(
            endpoints.create_formulary(),
            "https://dynamic.backsoul.com.co/formulary"
        );
        assert_eq!(
            endpoints.formulary(&id),
            "https://dynamic.backsoul.com.co/?uuid=test-uuid"
        );
        assert_eq!(
            endpoints.answers(&id),
            "https://dynamic.backsoul.com.co/answers?uuid=test-uuid"
        );
        assert_eq!(
            endpoints.create_response(),
            "https://dynamic.backsoul.com.co/create-response"
        );
        assert_eq!(
            endpoints.public_form(&id),
            "https://www.dynamicform.site/test-uuid"
        );
    }

    #[test]
    fn form_id_is_encoded_in_queries() {
        let endpoints = Endpoints::default();
        let id = FormId::from("a b&c#d");

        assert_eq!(
            endpoints.formulary(&id),
            "https://dynamic.backsoul.com.co/?uuid=a+b%26c%23d"
        );
        assert_eq!(
            endpoints.answers(&id),
            "https://dynamic.backsoul.com.co/answers?uuid=a+b%26c%23d"
        );
    }

    #[test]
    fn custom_bases() {
        let config = Config::new("http://127.0.0.1:9000/", "http://forms.local/");
        let endpoints = Endpoints::new(&config);

        assert_eq!(
            endpoints.create_formulary(),
            "http://127.0.0.1:9000/formulary"
        );
        assert_eq!(
            endpoints.public_form(&FormId::from("abc")),
            "http://forms.local/abc"
        );
    }
}
