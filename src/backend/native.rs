use log::debug;
use reqwest::Client;

use super::{interpret_response, LogoBackend};
use crate::config::ClientConfig;
use crate::error::LogoError;
use crate::types::{GeneratedLogo, LogoRequest};

/// Native transport for the server side and the command line binary.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: Client,
    endpoint: String,
}

impl HttpBackend {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: &ClientConfig) -> Self {
        Self {
            client,
            endpoint: config.generate_logo_url(),
        }
    }
}

impl LogoBackend for HttpBackend {
    async fn generate(&self, request: &LogoRequest) -> Result<GeneratedLogo, LogoError> {
        debug!("POST {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| LogoError::transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| LogoError::transport(e.to_string()))?;

        interpret_response(status, &body)
    }
}
