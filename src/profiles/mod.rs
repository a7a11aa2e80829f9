use std::sync::Arc;

use log::Level;
use serde::{Deserialize, Serialize};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::errors::{FetchError, ProfileError};
use crate::logging::Logger;
use crate::network::HttpTransport;

pub const PROFILES_URL: &str = "http://localhost:3001/profiles";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: i64,
    pub name: String,
    pub age: i64,
}

/// Requests the profile list and reports the outcome through the logger.
///
/// Holds no state beyond its injected capabilities, so clones share them and
/// every call is independent of the others.
#[derive(Clone)]
pub struct ProfileFetcher {
    transport: Arc<dyn HttpTransport>,
    logger: Arc<dyn Logger>,
    endpoint: String,
}

impl ProfileFetcher {
    pub fn new(transport: Arc<dyn HttpTransport>, logger: Arc<dyn Logger>) -> Self {
        Self::with_endpoint(transport, logger, PROFILES_URL)
    }

    pub fn with_endpoint(
        transport: Arc<dyn HttpTransport>,
        logger: Arc<dyn Logger>,
        endpoint: impl Into<String>,
    ) -> Self {
        ProfileFetcher {
            transport,
            logger,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fire-and-forget fetch. Both outcomes end in a log entry.
    ///
    /// Dropping the returned handle leaves the request running; awaiting it
    /// only waits for the logging to happen and never yields an error.
    /// Outside a tokio runtime nothing is sent: the failure is logged and
    /// `None` is returned.
    pub fn fetch_profiles(&self) -> Option<JoinHandle<()>> {
        let runtime = match Handle::try_current() {
            Ok(runtime) => runtime,
            Err(err) => {
                self.logger
                    .log(Level::Error, &format!("Error fetching profiles: {}", err));
                return None;
            }
        };

        let fetcher = self.clone();
        let task = runtime.spawn(async move {
            match fetcher.request_profiles().await {
                Ok(profiles) => fetcher
                    .logger
                    .log(Level::Info, &format!("Received profiles: {:?}", profiles)),
                // The mapping step has already logged the original error; this
                // second entry duplicates it with the generic message.
                Err(err) => fetcher
                    .logger
                    .log(Level::Error, &format!("Error fetching profiles: {}", err)),
            }
        });
        Some(task)
    }

    /// Performs the request and replaces any failure with `ProfileError::FetchFailed`.
    pub async fn request_profiles(&self) -> Result<Vec<Profile>, ProfileError> {
        self.load().await.map_err(|err| self.handle_error(err))
    }

    async fn load(&self) -> Result<Vec<Profile>, FetchError> {
        let body = self.transport.get(&self.endpoint).await?;
        let profiles = serde_json::from_slice(&body)?;
        Ok(profiles)
    }

    fn handle_error(&self, err: FetchError) -> ProfileError {
        self.logger
            .log(Level::Error, &format!("An error occurred: {}", err));
        ProfileError::FetchFailed
    }
}
