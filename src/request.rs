//! Request construction.
//!
//! Joins a relative path onto the base URL, encodes parameters as a query
//! string (GET/DELETE) or JSON body (PUT/POST), and stamps the `Date` header
//! the signature is computed over.

use crate::error::{PaycorError, Result};
use crate::types::ApiRequest;
use chrono::{DateTime, Utc};
use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, DATE, HeaderValue};
use serde::Serialize;
use serde_json::{Map, Value};
use url::Url;

/// Format of the `Date` header (RFC 7231 IMF-fixdate).
const HTTP_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Format a timestamp the way it appears in the `Date` header.
pub fn http_date(date: DateTime<Utc>) -> String {
    date.format(HTTP_DATE_FORMAT).to_string()
}

/// Returns true for methods whose parameters travel in the body.
pub fn has_body(method: &Method) -> bool {
    *method == Method::PUT || *method == Method::POST
}

/// Builds unsigned requests against a fixed base URL.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    base_url: Url,
}

impl RequestBuilder {
    /// Create a builder. A missing trailing `/` is added so paths are
    /// appended to the base path instead of replacing its last segment.
    pub fn new(mut base_url: Url) -> Self {
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Self { base_url }
    }

    /// Parse and wrap a base URL string.
    pub fn parse(base_url: &str) -> Result<Self> {
        Ok(Self::new(Url::parse(base_url)?))
    }

    /// The base URL every path is joined onto.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build the absolute URL for `path` with `params` as the query string.
    ///
    /// `path` is expected without a leading `/`.
    pub fn url<P: Serialize + ?Sized>(&self, path: &str, params: &P) -> Result<Url> {
        let mut url = self.base_url.join(path)?;
        if let Some(map) = params_map(params)? {
            if !map.is_empty() {
                let mut pairs = url.query_pairs_mut();
                for (key, value) in &map {
                    append_query_value(&mut pairs, key, value);
                }
            }
        }
        Ok(url)
    }

    /// Build an unsigned request.
    ///
    /// GET and DELETE carry `params` in the query string; PUT and POST carry
    /// them as a JSON body, `{}` when there are none.
    pub fn build<P: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        params: &P,
        date: DateTime<Utc>,
    ) -> Result<ApiRequest> {
        let mut request = if has_body(&method) {
            let mut request = ApiRequest::new(method, self.base_url.join(path)?);
            let value = match serde_json::to_value(params)? {
                Value::Null => Value::Object(Map::new()),
                value => value,
            };
            request.body = Some(serde_json::to_string(&value)?);
            request
                .headers
                .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            request
        } else {
            let url = self.url(path, params)?;
            ApiRequest::new(method, url)
        };

        let date = HeaderValue::from_str(&http_date(date))
            .map_err(|e| PaycorError::InvalidParams(format!("invalid Date header: {e}")))?;
        request.headers.insert(DATE, date);

        Ok(request)
    }
}

fn params_map<P: Serialize + ?Sized>(params: &P) -> Result<Option<Map<String, Value>>> {
    match serde_json::to_value(params)? {
        Value::Null => Ok(None),
        Value::Object(map) => Ok(Some(map)),
        other => Err(PaycorError::InvalidParams(format!(
            "query parameters must be a mapping, got {}",
            json_type(&other)
        ))),
    }
}

fn append_query_value(
    pairs: &mut url::form_urlencoded::Serializer<'_, url::UrlQuery<'_>>,
    key: &str,
    value: &Value,
) {
    match value {
        Value::Array(items) => {
            for item in items {
                pairs.append_pair(key, &scalar_text(item));
            }
        }
        other => {
            pairs.append_pair(key, &scalar_text(other));
        }
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;
    use std::collections::HashMap;

    fn builder() -> RequestBuilder {
        RequestBuilder::parse("https://secure.paycor.com/").unwrap()
    }

    fn date() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2015, 10, 21, 7, 28, 0).unwrap()
    }

    #[test]
    fn test_http_date() {
        assert_eq!(http_date(date()), "Wed, 21 Oct 2015 07:28:00 GMT");
    }

    #[test]
    fn test_url_without_params() {
        let url = builder().url("api/v1/employees", &json!({})).unwrap();
        assert_eq!(url.as_str(), "https://secure.paycor.com/api/v1/employees");

        let url = builder().url("api/v1/employees", &()).unwrap();
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let builder = RequestBuilder::parse("http://127.0.0.1:8080/api").unwrap();
        assert_eq!(builder.base_url().as_str(), "http://127.0.0.1:8080/api/");

        let url = builder.url("employees", &()).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/api/employees");
    }

    #[test]
    fn test_query_round_trip() {
        let mut params = HashMap::new();
        params.insert("name", "Ada Lovelace");
        params.insert("filter", "a&b=c");
        params.insert("page", "3");

        let url = builder().url("employees", &params).unwrap();
        let decoded: HashMap<String, String> = url.query_pairs().into_owned().collect();

        assert_eq!(decoded.len(), 3);
        for (key, value) in &params {
            assert_eq!(decoded.get(*key).map(String::as_str), Some(*value));
        }
    }

    #[test]
    fn test_query_value_encoding() {
        let url = builder()
            .url(
                "employees",
                &json!({"active": true, "page": 2, "ids": [1, 2], "note": null}),
            )
            .unwrap();
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();

        assert!(pairs.contains(&("active".to_string(), "true".to_string())));
        assert!(pairs.contains(&("page".to_string(), "2".to_string())));
        assert!(pairs.contains(&("ids".to_string(), "1".to_string())));
        assert!(pairs.contains(&("ids".to_string(), "2".to_string())));
        assert!(pairs.contains(&("note".to_string(), String::new())));
    }

    #[test]
    fn test_query_rejects_non_mapping() {
        let err = builder().url("employees", &json!([1, 2])).unwrap_err();
        assert!(matches!(err, PaycorError::InvalidParams(_)));
    }

    #[test]
    fn test_build_get() {
        let request = builder()
            .build(Method::GET, "employees", &json!({"page": 1}), date())
            .unwrap();

        assert_eq!(request.method, Method::GET);
        assert_eq!(request.url.as_str(), "https://secure.paycor.com/employees?page=1");
        assert_eq!(request.header("Date"), Some("Wed, 21 Oct 2015 07:28:00 GMT"));
        assert_eq!(request.header("Content-Type"), None);
        assert!(request.body.is_none());
    }

    #[test]
    fn test_build_post_body() {
        let params = json!({"firstName": "Ada", "tags": ["a", "b"], "nested": {"x": 1}});
        let request = builder()
            .build(Method::POST, "employees", &params, date())
            .unwrap();

        assert_eq!(request.url.as_str(), "https://secure.paycor.com/employees");
        assert_eq!(request.header("Content-Type"), Some("application/json"));
        let body: Value = serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, params);
    }

    #[test]
    fn test_build_put_without_params() {
        let request = builder()
            .build(Method::PUT, "employees/1", &(), date())
            .unwrap();

        assert_eq!(request.body.as_deref(), Some("{}"));
        assert_eq!(request.header("Content-Type"), Some("application/json"));
    }
}
