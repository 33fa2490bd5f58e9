#![allow(dead_code)]

use request_environment::constants::key;
use request_environment::{
    Cookies, Environment, EnvironmentFactory, EnvironmentOptions, Fields, Value,
};

#[derive(Default)]
pub struct EnvironmentBuilder {
    server: Fields,
    cookies: Cookies,
    additional_keys: Vec<String>,
}

impl EnvironmentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn var(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.server.insert(name.into(), value.into());
        self
    }

    pub fn vars<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        self.server
            .extend(vars.into_iter().map(|(name, value)| (name.into(), value.into())));
        self
    }

    pub fn https(self, value: impl Into<Value>) -> Self {
        self.var(key::HTTPS, value)
    }

    pub fn http_host(self, value: impl Into<Value>) -> Self {
        self.var(key::HTTP_HOST, value)
    }

    pub fn server_name(self, value: impl Into<Value>) -> Self {
        self.var(key::SERVER_NAME, value)
    }

    pub fn server_port(self, value: impl Into<Value>) -> Self {
        self.var(key::SERVER_PORT, value)
    }

    pub fn request_uri(self, value: impl Into<Value>) -> Self {
        self.var(key::REQUEST_URI, value)
    }

    pub fn query_string(self, value: impl Into<Value>) -> Self {
        self.var(key::QUERY_STRING, value)
    }

    pub fn cookie(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.cookies.insert(name.into(), value.into());
        self
    }

    pub fn additional_key(mut self, name: impl Into<String>) -> Self {
        self.additional_keys.push(name.into());
        self
    }

    pub fn build(self) -> Environment {
        let factory = EnvironmentFactory::new(EnvironmentOptions {
            additional_keys: self.additional_keys,
        })
        .expect("valid environment options");

        factory.build(self.server, self.cookies)
    }
}

pub fn environment() -> EnvironmentBuilder {
    EnvironmentBuilder::new()
}

/// Request from the canonical URL examples; protocol and port are left to the caller.
pub fn example_request() -> EnvironmentBuilder {
    environment()
        .request_uri("/foo/bar/xyz?one=1&two=2&three=3")
        .var(key::SCRIPT_NAME, "/foo/index.php")
        .http_host("www.example.com")
        .query_string("one=1&two=2&three=3")
}
