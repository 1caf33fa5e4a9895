use std::collections::BTreeMap;
use std::fmt::Formatter;
use std::str::FromStr;

use serde_json::Value;
use url::form_urlencoded;

use crate::error::Error;

/// Parameters sent along with a request, keyed by name.
pub type RequestParams = BTreeMap<String, Value>;

/// The HTTP methods a [`RequestBuilder`](crate::RequestBuilder) can issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }

    /// The options key the parameters travel under for this method.
    pub fn params_key(&self) -> &'static str {
        match self {
            Method::Get => "query",
            Method::Post => "form_params",
        }
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(method: &str) -> Result<Self, Self::Err> {
        match method {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            _ => Err(Error::InvalidArgument(format!(
                "Only GET and POST requests are allowed, got {:?}",
                method
            ))),
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        }
    }
}

/// The parameter payload handed to a [`Transport`](crate::Transport), tagged
/// with how it has to be attached to the request.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestOptions {
    /// Appended to the URL as a query string.
    Query(RequestParams),
    /// Sent as an `application/x-www-form-urlencoded` body.
    Form(RequestParams),
}

impl RequestOptions {
    pub fn for_method(method: Method, params: RequestParams) -> Self {
        match method {
            Method::Get => RequestOptions::Query(params),
            Method::Post => RequestOptions::Form(params),
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            RequestOptions::Query(_) => Method::Get.params_key(),
            RequestOptions::Form(_) => Method::Post.params_key(),
        }
    }

    pub fn params(&self) -> &RequestParams {
        match self {
            RequestOptions::Query(params) | RequestOptions::Form(params) => params,
        }
    }

    /// Flattens the parameters into name/value pairs.
    ///
    /// Nested arrays and objects expand to bracketed names (`ids[0]`,
    /// `filter[name]`), booleans become `1`/`0` and `null` values are left out.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![];
        for (name, value) in self.params() {
            flatten(name.clone(), value, &mut pairs);
        }
        pairs
    }

    /// The url-encoded form of [`to_pairs`](Self::to_pairs).
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.to_pairs())
            .finish()
    }
}

fn flatten(name: String, value: &Value, pairs: &mut Vec<(String, String)>) {
    match value {
        Value::Null => {}
        Value::Bool(true) => pairs.push((name, "1".to_string())),
        Value::Bool(false) => pairs.push((name, "0".to_string())),
        Value::Number(number) => pairs.push((name, number.to_string())),
        Value::String(string) => pairs.push((name, string.clone())),
        Value::Array(values) => {
            for (index, value) in values.iter().enumerate() {
                flatten(format!("{}[{}]", name, index), value, pairs);
            }
        }
        Value::Object(values) => {
            for (key, value) in values {
                flatten(format!("{}[{}]", name, key), value, pairs);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn params(value: Value) -> RequestParams {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn method_from_str_is_exact() {
        assert_eq!(Method::Get, "GET".parse().unwrap());
        assert_eq!(Method::Post, "POST".parse().unwrap());
        for invalid in &["get", "post", "Get", "PUT", "DELETE", "", "0", " GET"] {
            let error = invalid.parse::<Method>().unwrap_err();
            assert!(error.is_invalid_argument(), "{:?} was accepted", invalid);
        }
    }

    #[test]
    fn options_follow_method() {
        let payload = params(json!({"foo": "bar"}));

        let query = RequestOptions::for_method(Method::Get, payload.clone());
        assert_eq!(query, RequestOptions::Query(payload.clone()));
        assert_eq!(query.key(), "query");

        let form = RequestOptions::for_method(Method::Post, payload.clone());
        assert_eq!(form, RequestOptions::Form(payload));
        assert_eq!(form.key(), "form_params");
    }

    #[test]
    fn nested_params_are_flattened() {
        let options = RequestOptions::Query(params(json!({
            "module": "API",
            "idSite": 3,
            "expanded": true,
            "flat": false,
            "segment": null,
            "ids": [1, 2],
            "filter": {"column": "label", "limit": 10}
        })));

        assert_eq!(
            options.to_pairs(),
            vec![
                ("expanded".to_string(), "1".to_string()),
                ("filter[column]".to_string(), "label".to_string()),
                ("filter[limit]".to_string(), "10".to_string()),
                ("flat".to_string(), "0".to_string()),
                ("idSite".to_string(), "3".to_string()),
                ("ids[0]".to_string(), "1".to_string()),
                ("ids[1]".to_string(), "2".to_string()),
                ("module".to_string(), "API".to_string()),
            ]
        );
    }

    #[test]
    fn encode_escapes_values() {
        let options = RequestOptions::Form(params(json!({"q": "a b&c", "ids": ["x"]})));
        assert_eq!(options.encode(), "ids%5B0%5D=x&q=a+b%26c");
    }
}
