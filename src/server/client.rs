use crate::app_config::AppConfig;
use reqwest::Client;
use thiserror::Error;

pub fn new_client(config: &AppConfig) -> Result<Client, ServerClientError> {
    let client = Client::builder().danger_accept_invalid_certs(config.server().accept_invalid_certs()).build()?;
    Ok(client)
}

#[derive(Error, Debug)]
pub enum ServerClientError {
    #[error("request error: {0}")]
    RequestError(#[from] reqwest::Error),
}
