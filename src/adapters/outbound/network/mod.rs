/// Network adapters for the formulae.brew.sh API
mod brew_api_client;

pub use brew_api_client::{BrewApiClient, DEFAULT_TIMEOUT_SECS};
