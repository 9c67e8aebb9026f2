//! The seam between the client and the network.
//!
//! [`HttpRequest`] and [`HttpResponse`] describe an exchange as plain data.
//! Anything that can turn one into the other implements [`Transport`]; the
//! default is `reqwest::Client`, tests plug in fakes.

use crate::error::TransportError;
use reqwest::{Method, Url};
use std::future::Future;

/// A fully built request, ready to be sent.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// A response with its body already read in full.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Executes a single request/response exchange.
///
/// Timeouts and cancellation are the implementor's business.
pub trait Transport {
    fn execute(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send;
}

impl Transport for reqwest::Client {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = self.request(request.method, request.url);
        for (name, value) in request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let resp = builder.send().await?;
        let status = resp.status().as_u16();
        // Reading the body to the end releases the connection back to the pool.
        let body = resp.text().await?;

        Ok(HttpResponse { status, body })
    }
}
