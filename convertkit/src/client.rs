use crate::{
    error::{BuildError, Error},
    models::ErrorResponse,
    params::{self, Params},
    transport::{HttpRequest, HttpResponse, Transport},
};
use reqwest::{Method, Url};
use serde::{de::DeserializeOwned, Serialize};
use std::{fmt, time::Duration};
use tracing::{debug, warn};

pub const DEFAULT_BASE_URL: &str = "https://api.convertkit.com/v3/";

/// A ConvertKit v3 API client.
///
/// The configuration is fixed at construction, so a client can be cloned and
/// shared between tasks freely (as long as its transport allows it).
#[derive(Clone)]
pub struct Client<T = reqwest::Client> {
    base_url: String,
    secret: String,
    transport: T,
}

impl Client {
    /// Initializes a client against the public API using a `reqwest` transport
    /// with a 10 second timeout.
    ///
    /// ## Example
    ///
    /// ```no_run
    /// use convertkit::Client;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), convertkit::Error> {
    ///     let client = Client::new("my-api-secret")?;
    ///     let account = client.account().await?;
    ///     println!("{} <{}>", account.name, account.primary_email);
    ///     Ok(())
    /// }
    /// ```
    pub fn new<S: Into<String>>(secret: S) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(BuildError::HttpClient)?;
        Ok(Self::with_transport(secret, http))
    }
}

impl<T: Transport> Client<T> {
    /// Initializes a client that sends every request through `transport`.
    pub fn with_transport<S: Into<String>>(secret: S, transport: T) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            secret: secret.into(),
            transport,
        }
    }

    /// Points the client at another API root. A trailing `/` is added if missing.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, Error> {
        self.base_url = normalize_base_url(base_url)?;
        Ok(self)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Performs an arbitrary API call.
    ///
    /// `params` is flattened and the API secret added to it. `GET` and `DELETE`
    /// send everything as query parameters, any other verb sends a JSON body.
    /// A 404 always turns into [`Error::NotFound`] without looking at the body,
    /// other statuses above 400 are decoded into [`Error::Api`] and anything
    /// else is decoded as `R`.
    ///
    /// Useful for endpoints this crate has no dedicated method for.
    pub async fn execute<P, R>(&self, method: Method, path: &str, params: &P) -> Result<R, Error>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let request = self.request(method.clone(), path, params)?;

        debug!(%method, path, "sending ConvertKit request");
        let response = self
            .transport
            .execute(request)
            .await
            .map_err(Error::Request)?;
        debug!(%method, path, status = response.status, "received ConvertKit response");

        if is_error_status(response.status) {
            if response.status == 404 {
                warn!(%method, path, "ConvertKit resource not found");
                return Err(Error::NotFound(ErrorResponse::not_found(&method, path)));
            }
            let err = decode_error(response)?;
            warn!(
                %method,
                path,
                status = err.status_code,
                error_type = %err.error_type,
                "ConvertKit returned an error"
            );
            return Err(Error::Api(err));
        }

        decode(response)
    }

    fn request<P>(&self, method: Method, path: &str, params: &P) -> Result<HttpRequest, BuildError>
    where
        P: Serialize + ?Sized,
    {
        let params = params::flatten(params, &self.secret)?;
        let mut url = self.url(path)?;

        if method == Method::GET || method == Method::DELETE {
            encode_query(&mut url, &params);
            return Ok(HttpRequest {
                method,
                url,
                headers: Vec::new(),
                body: None,
            });
        }

        let body = serde_json::to_string(&params).map_err(BuildError::Params)?;
        Ok(HttpRequest {
            method,
            url,
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    fn url(&self, path: &str) -> Result<Url, BuildError> {
        let raw = format!("{}{}", self.base_url, path);
        Url::parse(&raw).map_err(|source| BuildError::Url { url: raw, source })
    }
}

impl<T> fmt::Debug for Client<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .field("secret", &"<redacted>")
            .finish_non_exhaustive()
    }
}

fn normalize_base_url(base_url: &str) -> Result<String, BuildError> {
    let mut raw = base_url.to_string();
    if !raw.ends_with('/') {
        raw.push('/');
    }
    match Url::parse(&raw) {
        Ok(_) => Ok(raw),
        Err(source) => Err(BuildError::Url { url: raw, source }),
    }
}

fn encode_query(url: &mut Url, params: &Params) {
    let mut query = url.query_pairs_mut();
    for (key, value) in params {
        query.append_pair(key, &params::query_value(value));
    }
}

/// ConvertKit only treats statuses strictly above 400 as errors; a bare 400
/// goes through the regular decoder.
fn is_error_status(status: u16) -> bool {
    status > 400
}

fn decode<R: DeserializeOwned>(response: HttpResponse) -> Result<R, Error> {
    match serde_json::from_str(&response.body) {
        Ok(value) => Ok(value),
        Err(source) => Err(Error::Decode {
            status: response.status,
            body: response.body,
            source,
        }),
    }
}

fn decode_error(response: HttpResponse) -> Result<ErrorResponse, Error> {
    let mut err: ErrorResponse = decode(response.clone())?;
    err.status_code = response.status;
    err.raw_body = response.body;
    Ok(err)
}
