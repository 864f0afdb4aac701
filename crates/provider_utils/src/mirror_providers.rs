use reqwest::{Client, Error as ReqwestError, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

use crate::{enums::ENetwork, networks::network_config};

/// Errors for mirror node requests.
#[derive(Error, Debug)]
pub enum MirrorError {
    /// The route could not be joined onto the base url.
    #[error("invalid mirror route {route}: {err}")]
    InvalidRoute { route: String, err: url::ParseError },
    /// The request failed.
    #[error(transparent)]
    RequestError(#[from] ReqwestError),
    /// The mirror node has no such resource.
    #[error("not found: {route}")]
    NotFound { route: String },
    /// Any other non success status.
    #[error("mirror error {status}: {text}")]
    StatusError { status: StatusCode, text: String },
    /// The response could not be deserialized.
    #[error("Deserialization error: {err}. Response: {text}")]
    ResponseSerdeJson {
        err: serde_json::Error,
        text: String,
    },
}

/// Read-only REST client for a mirror node.
#[derive(Debug, Clone)]
pub struct MirrorNodeClient {
    client: Client,
    base_url: Url,
}

impl MirrorNodeClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves `route` (absolute path such as `/api/v1/tokens/0.0.1`, as
    /// returned in `links.next`) against the base url. Absolute routes replace
    /// the base url's path, so the base url must be a bare host.
    pub fn resolve(&self, route: &str) -> Result<Url, MirrorError> {
        self.base_url
            .join(route)
            .map_err(|err| MirrorError::InvalidRoute {
                route: route.to_string(),
                err,
            })
    }

    /// Sends a GET request and parses the JSON body.
    pub async fn get_json<R: DeserializeOwned>(&self, route: &str) -> Result<R, MirrorError> {
        let url = self.resolve(route)?;
        log::debug!("GET {}", url);

        let res = self.client.get(url).send().await?;
        let status = res.status();
        let text = res.text().await?;
        if status == StatusCode::NOT_FOUND {
            return Err(MirrorError::NotFound {
                route: route.to_string(),
            });
        }
        if !status.is_success() {
            return Err(MirrorError::StatusError { status, text });
        }

        serde_json::from_str(&text).map_err(|err| MirrorError::ResponseSerdeJson { err, text })
    }
}

pub struct MirrorProviders;

impl MirrorProviders {
    /// Mirror client for `network`, or for `url_override` when given.
    /// `url_override` must be a bare host such as `http://localhost:5551`, any
    /// path prefix is dropped when routes are resolved.
    pub fn get_provider(
        network: &ENetwork,
        url_override: Option<&str>,
    ) -> Result<MirrorNodeClient, url::ParseError> {
        let url = url_override.unwrap_or(network_config(network).mirror_url.as_str());
        Ok(MirrorNodeClient::new(Url::parse(url)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_next_links_against_host() {
        let provider = MirrorProviders::get_provider(&ENetwork::HederaMainnet, None).unwrap();
        let url = provider
            .resolve("/api/v1/tokens/0.0.111/nfts?limit=100&serialnumber=lt:42")
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://mainnet-public.mirrornode.hedera.com/api/v1/tokens/0.0.111/nfts?limit=100&serialnumber=lt:42"
        );
    }

    #[test]
    fn override_url_wins() {
        let provider =
            MirrorProviders::get_provider(&ENetwork::HederaMainnet, Some("http://localhost:5551"))
                .unwrap();
        assert_eq!(provider.base_url().as_str(), "http://localhost:5551/");
        assert!(MirrorProviders::get_provider(&ENetwork::HederaMainnet, Some("not a url")).is_err());
    }

    #[test]
    fn override_path_prefix_is_not_kept() {
        let provider =
            MirrorProviders::get_provider(&ENetwork::HederaMainnet, Some("https://proxy/mirror"))
                .unwrap();
        assert_eq!(
            provider.resolve("/api/v1/tokens/0.0.111").unwrap().as_str(),
            "https://proxy/api/v1/tokens/0.0.111"
        );
    }
}
