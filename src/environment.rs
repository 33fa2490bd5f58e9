use crate::constants::{key, scheme};
use crate::factory::EnvironmentFactory;
use crate::port::Port;
use crate::protocol::Protocol;
use crate::source::CgiProcess;
use crate::util::strip_query;
use crate::value::{Cookies, Fields, Value};
use serde::Serialize;
use std::borrow::Cow;

/// Normalized snapshot of a single request's server metadata.
///
/// Built through [`EnvironmentFactory`]; read-only afterwards. Derived facts
/// (protocol, host, port, URL) are recomputed from the stored fields on every
/// call, so a shared instance needs no synchronization.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Environment {
    fields: Fields,
}

impl Environment {
    pub(crate) fn from_fields(fields: Fields) -> Self {
        Self { fields }
    }

    /// Builds an environment from explicit request data using the default filter.
    pub fn factory<S, K, V, C, CK, CV>(server: S, cookies: C) -> Self
    where
        S: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
        C: IntoIterator<Item = (CK, CV)>,
        CK: Into<String>,
        CV: Into<Value>,
    {
        EnvironmentFactory::default().build(server, cookies)
    }

    /// Builds an environment from the CGI variables of the current process.
    pub fn from_process() -> Self {
        EnvironmentFactory::default().capture(&CgiProcess::capture())
    }

    /// Looks up a key, resolving `url` to the reconstructed request URL.
    pub fn get(&self, name: &str) -> Option<Cow<'_, Value>> {
        if name == key::URL {
            return match self.fields.get(key::URL) {
                Some(explicit) => Some(Cow::Borrowed(explicit)),
                None => self.url().map(|url| Cow::Owned(Value::Str(url.into_owned()))),
            };
        }

        self.fields.get(name).map(Cow::Borrowed)
    }

    /// Raw stored value, with no derived keys.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    /// Shallow copy of every stored field.
    pub fn as_map(&self) -> Fields {
        self.fields.clone()
    }

    pub fn into_fields(self) -> Fields {
        self.fields
    }

    pub fn cookies(&self) -> Option<&Cookies> {
        self.fields.get(key::COOKIE_HASH).and_then(Value::as_map)
    }

    pub fn protocol(&self) -> Protocol {
        Protocol::detect(self.fields.get(key::HTTPS))
    }

    pub fn is_secure(&self) -> bool {
        self.protocol().is_secure()
    }

    /// Non-empty `HTTP_HOST`, otherwise whatever `SERVER_NAME` holds.
    pub fn host(&self) -> Option<Cow<'_, str>> {
        self.non_empty_text(key::HTTP_HOST)
            .or_else(|| self.present_text(key::SERVER_NAME))
    }

    pub fn port(&self) -> Port<'_> {
        match self.present_text(key::SERVER_PORT) {
            Some(text) => Port::Server(text),
            None => Port::Default(self.protocol().default_port()),
        }
    }

    pub fn is_non_standard_port(&self) -> bool {
        self.port().number() != Some(self.protocol().default_port())
    }

    /// Full request URL.
    ///
    /// A caller-supplied `url` field is returned as is. Otherwise the URL is
    /// rebuilt from protocol, host, port, path and query string; without a host
    /// there is nothing to build from and `None` is returned.
    pub fn url(&self) -> Option<Cow<'_, str>> {
        if let Some(explicit) = self.fields.get(key::URL) {
            return explicit.to_text();
        }

        let host = self.host()?;
        let mut url = String::new();
        url.push_str(self.protocol().as_str());
        url.push_str(scheme::SEPARATOR);
        url.push_str(&host);

        if self.is_non_standard_port() {
            url.push(':');
            url.push_str(&self.port().as_text());
        }

        url.push_str(&self.path());

        if let Some(query) = self.non_empty_text(key::QUERY_STRING) {
            url.push('?');
            url.push_str(&query);
        }

        Some(Cow::Owned(url))
    }

    /// Request path without its query string.
    ///
    /// Falls back to `SCRIPT_NAME` + `PATH_INFO` when the server did not pass
    /// `REQUEST_URI`.
    pub fn path(&self) -> Cow<'_, str> {
        if let Some(uri) = self.present_text(key::REQUEST_URI) {
            return match uri {
                Cow::Borrowed(uri) => Cow::Borrowed(strip_query(uri)),
                Cow::Owned(uri) => Cow::Owned(strip_query(&uri).to_string()),
            };
        }

        match (
            self.present_text(key::SCRIPT_NAME),
            self.present_text(key::PATH_INFO),
        ) {
            (Some(script), Some(info)) => Cow::Owned(format!("{script}{info}")),
            (Some(script), None) => script,
            (None, Some(info)) => info,
            (None, None) => Cow::Borrowed(""),
        }
    }

    fn present_text(&self, name: &str) -> Option<Cow<'_, str>> {
        self.fields.get(name).and_then(Value::to_text)
    }

    fn non_empty_text(&self, name: &str) -> Option<Cow<'_, str>> {
        self.fields.get(name).and_then(Value::non_empty_text)
    }
}

#[cfg(test)]
#[path = "environment_test.rs"]
mod environment_test;
