use std::time::Duration;

use reqwest::blocking::{Client, Request};
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::Url;

use crate::http_client::{ClientConfig, RequestFactory, Transport};
use crate::model::{Method, RequestOptions};
use crate::Response;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// [`Transport`] over a blocking reqwest client.
///
/// Query parameters replace any query string already present in the URL.
/// Form parameters become the body, overriding any body the request carried.
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn create(config: ClientConfig) -> anyhow::Result<ReqwestTransport> {
        let mut builder = Client::builder().danger_accept_invalid_certs(!config.ssl_check);
        if let Some(timeout) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(timeout));
        }
        if let Some(user_agent) = config.user_agent {
            builder = builder.user_agent(user_agent);
        }

        Ok(ReqwestTransport {
            client: builder.build()?,
        })
    }
}

impl Transport for ReqwestTransport {
    type Request = Request;
    type Response = Response;

    fn send(&self, mut request: Request, options: RequestOptions) -> anyhow::Result<Response> {
        attach_params(&mut request, &options);

        let response = self.client.execute(request)?;

        let mut response_builder = http::Response::builder()
            .version(response.version())
            .status(response.status());

        for (name, value) in response.headers() {
            response_builder = response_builder.header(name, value);
        }

        let body = response.text()?;
        let response = if !body.is_empty() {
            response_builder.body(Some(body))?
        } else {
            response_builder.body(None)?
        };

        Ok(response)
    }
}

pub(crate) fn attach_params(request: &mut Request, options: &RequestOptions) {
    match options {
        RequestOptions::Query(_) => {
            let query = options.encode();
            // an empty query would still leave a dangling `?`
            request
                .url_mut()
                .set_query(Some(query.as_str()).filter(|query| !query.is_empty()));
        }
        RequestOptions::Form(_) => {
            request
                .headers_mut()
                .insert(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE));
            *request.body_mut() = Some(options.encode().into());
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ReqwestRequestFactory;

impl RequestFactory<Request> for ReqwestRequestFactory {
    fn get_request(&self, method: Method, url: &str) -> anyhow::Result<Request> {
        Ok(Request::new(method.into(), Url::parse(url)?))
    }
}
