pub mod download;
pub mod extract;
pub mod registry;

use crate::error::InstallError;
use reqwest::blocking::Client;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub fn http_client() -> Result<Client, InstallError> {
    Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(|err| InstallError::TransferFailed(err.to_string()))
}

/// Maps transport errors to user-facing kinds: connectivity problems get the
/// "check your internet connection" treatment, everything else surfaces the
/// protocol error as-is.
pub fn classify_transport_error(err: reqwest::Error) -> InstallError {
    if err.is_connect() || err.is_timeout() {
        InstallError::NetworkUnreachable
    } else {
        InstallError::TransferFailed(err.to_string())
    }
}
