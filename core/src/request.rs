//! Compiled request handed to a transport.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde_json::Value as JsonValue;

use crate::headers::HeaderPairs;
use crate::query::Method;
use crate::serialize::QueryPairs;

/// Characters left readable in query strings; PostgREST syntax relies on them.
const QUERY: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b',')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'!')
    .remove(b':');

/// Everything needed to issue one PostgREST call.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: Method,
    /// Resource path, e.g. `/users`
    pub path: String,
    pub query: QueryPairs,
    pub headers: HeaderPairs,
    pub body: Option<JsonValue>,
}

impl Request {
    pub fn new(
        method: Method,
        path: impl Into<String>,
        query: QueryPairs,
        headers: HeaderPairs,
        body: Option<JsonValue>,
    ) -> Self {
        let request = Self {
            method,
            path: path.into(),
            query,
            headers,
            body,
        };
        crate::pgrest_trace_compile!(request.method, request.path, request.query.len());
        request
    }

    /// First value of query parameter `key`
    pub fn param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Header value, name compared case-insensitively
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Percent-encoded `key=value&...` without a leading `?`
    pub fn query_string(&self) -> String {
        let mut out = String::new();
        for (i, (key, value)) in self.query.iter().enumerate() {
            if i > 0 {
                out.push('&');
            }
            out.extend(utf8_percent_encode(key, QUERY));
            out.push('=');
            out.extend(utf8_percent_encode(value, QUERY));
        }
        out
    }

    /// Full URL below `base`
    pub fn url(&self, base: &str) -> String {
        let mut url = format!("{}{}", base.trim_end_matches('/'), self.path);
        if !self.query.is_empty() {
            url.push('?');
            url.push_str(&self.query_string());
        }
        url
    }
}
