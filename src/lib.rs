//! # request-builder
//!
//! request-builder collects the URL, HTTP method and parameters of a request
//! and hands the actual network call to a transport you inject. It does the
//! checking up front, so a request that reaches the transport always has a
//! well-formed URL and a supported method.
//!
//! ## Usage
//!
//! ```no_run
//! use request_builder::{ClientConfig, RequestBuilder, RequestParams};
//! use serde_json::json;
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut builder = RequestBuilder::with_reqwest(ClientConfig::default())?;
//! let params: RequestParams = serde_json::from_value(json!({
//!     "module": "API",
//!     "method": "VisitsSummary.get",
//!     "idSite": 1,
//! }))?;
//!
//! let response = builder
//!     .set_url("https://demo.matomo.cloud/index.php")?
//!     .set_method("POST")?
//!     .set_request_params(params)
//!     .send_request()?;
//!
//! println!("{}", response.status());
//! # Ok(())
//! # }
//! ```
//!
//! ### Methods
//!
//! Only `GET` and `POST` are supported, spelled exactly that way. A `GET`
//! sends the parameters as a query string, a `POST` sends them as an
//! `application/x-www-form-urlencoded` body.
//!
//! ### URLs
//!
//! Any absolute URL with a scheme and a well-formed host is accepted, the
//! scheme is not restricted to HTTP. The URL is kept exactly as given.
//!
//! ### Bringing your own transport
//!
//! [`RequestBuilder::new`] takes any [`Transport`] and a matching
//! [`RequestFactory`]. The reqwest based pair in [`http_client::reqwest`] is
//! what [`RequestBuilder::with_reqwest`] wires up.
//!
//! ### Configuration
//!
//! [`ClientConfig`] can be built in code or read from JSON:
//!
//! ```text,no_run
//! {
//!     "ssl_check": true,
//!     "timeout_secs": 30,
//!     "user_agent": "reporting-client/1.0"
//! }
//! ```
//!
//! ## License
//! [Apache License 2.0](https://www.apache.org/licenses/LICENSE-2.0)

pub use crate::builder::RequestBuilder;
pub use crate::error::{Error, Result};
pub use crate::http_client::{ClientConfig, RequestFactory, Transport};
pub use crate::model::{Method, RequestOptions, RequestParams};
pub use crate::validate::is_valid_url;

mod builder;
mod error;
pub mod http_client;
mod model;
mod validate;

/// What the reqwest transport hands back: the status, headers and the body
/// as text, `None` when the body is empty.
pub type Response = http::Response<Option<String>>;
