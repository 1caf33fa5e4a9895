use log::{debug, trace};

use crate::error::{Error, Result};
use crate::http_client::reqwest::{ReqwestRequestFactory, ReqwestTransport};
use crate::http_client::{ClientConfig, RequestFactory, Transport};
use crate::model::{Method, RequestOptions, RequestParams};
use crate::validate::{is_valid_url, redact_credentials};


/// Collects the URL, method and parameters of a request and sends it through
/// the injected [`Transport`].
///
/// Setters mutate in place and hand back the same builder so calls can be
/// chained. A rejected value never replaces the stored one. Configuration
/// needs `&mut self`, so one writer at a time is enforced by the borrow
/// checker; sharing a builder between threads takes external locking.
pub struct RequestBuilder<T, F> {
    transport: T,
    request_factory: F,
    method: Method,
    url: Option<String>,
    request_params: RequestParams,
}

impl RequestBuilder<ReqwestTransport, ReqwestRequestFactory> {
    pub fn with_reqwest(config: ClientConfig) -> anyhow::Result<Self> {
        Ok(RequestBuilder::new(
            ReqwestTransport::create(config)?,
            ReqwestRequestFactory,
        ))
    }
}

impl<T, F> RequestBuilder<T, F>
where
    T: Transport,
    F: RequestFactory<T::Request>,
{
    pub fn new(transport: T, request_factory: F) -> Self {
        RequestBuilder {
            transport,
            request_factory,
            method: Method::default(),
            url: None,
            request_params: RequestParams::new(),
        }
    }

    /// Replaces the parameters wholesale.
    pub fn set_request_params(&mut self, request_params: RequestParams) -> &mut Self {
        self.request_params = request_params;
        self
    }

    pub fn get_request_params(&self) -> &RequestParams {
        &self.request_params
    }

    /// Accepts `"GET"` or `"POST"`, case-sensitive.
    pub fn set_method(&mut self, method: &str) -> Result<&mut Self> {
        self.method = method.parse().map_err(|e| {
            trace!("Rejected request method {:?}", method);
            e
        })?;
        Ok(self)
    }

    pub fn get_method(&self) -> Method {
        self.method
    }

    /// Stores `url` verbatim once it passes [`is_valid_url`].
    pub fn set_url(&mut self, url: &str) -> Result<&mut Self> {
        if !is_valid_url(url) {
            trace!("Rejected request url {:?}", url);
            return Err(Error::InvalidArgument(format!("Invalid URL: {:?}", url)));
        }
        self.url = Some(url.to_string());
        Ok(self)
    }

    pub fn get_url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Builds a request from the current state and hands it to the transport.
    ///
    /// GET requests carry the parameters in the query string, POST requests
    /// as a form body. Whatever the transport returns comes back unchanged.
    pub fn send_request(&self) -> Result<T::Response> {
        let url = match self.get_url() {
            Some(url) if !url.is_empty() => url,
            _ => return Err(Error::Precondition("Request url is not set")),
        };

        let request = self
            .request_factory
            .get_request(self.method, url)
            .map_err(Error::Request)?;
        let options = RequestOptions::for_method(self.method, self.request_params.clone());

        debug!(
            "Sending {} {} with {} {} parameter(s)",
            self.method,
            redact_credentials(url),
            self.request_params.len(),
            options.key()
        );

        self.transport
            .send(request, options)
            .map_err(Error::Transport)
    }
}
