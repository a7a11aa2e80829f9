pub mod errors;
pub mod logging;
pub mod network;
pub mod profiles;

pub use errors::{FetchError, ProfileError, TransportError};
pub use logging::{ConsoleLogger, Logger};
pub use network::{HttpTransport, NetworkService};
pub use profiles::{Profile, ProfileFetcher, PROFILES_URL};
