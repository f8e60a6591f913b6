#![allow(clippy::redundant_pub_crate)]
//! Fetch-backed [`SortTransport`].

use async_trait::async_trait;
use gloo_net::http::Request;
use tunesort_api_models::JSON_CONTENT_TYPE;

use crate::controller::{SortTransport, TransportResponse};
use crate::error::{ControllerError, ControllerResult};

/// Posts submissions with the browser `fetch` API.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct FetchTransport;

#[async_trait(?Send)]
impl SortTransport for FetchTransport {
    async fn post_json(&self, endpoint: &str, body: String) -> ControllerResult<TransportResponse> {
        let response = Request::post(endpoint)
            .header("Content-Type", JSON_CONTENT_TYPE)
            .body(body)
            .send()
            .await
            .map_err(|err| transport_error(&err))?;
        let status = response.status();
        let body = response.text().await.map_err(|err| transport_error(&err))?;
        Ok(TransportResponse::new(status, body))
    }
}

fn transport_error(err: &gloo_net::Error) -> ControllerError {
    ControllerError::Transport {
        detail: err.to_string(),
    }
}
