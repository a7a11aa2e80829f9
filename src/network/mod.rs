use async_trait::async_trait;
use reqwest::Client;

use crate::errors::TransportError;

/// Issues GET requests and hands back the buffered body of a 2xx response.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, url: &str) -> Result<Vec<u8>, TransportError>;
}

pub struct NetworkService {
    client: Client,
}

impl NetworkService {
    pub fn new() -> Self {
        NetworkService {
            client: Client::new(),
        }
    }
}

impl Default for NetworkService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for NetworkService {
    async fn get(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        // Note: does not deal with streaming
        let body = response.bytes().await?.to_vec();
        Ok(body)
    }
}
