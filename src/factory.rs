use crate::constants::key;
use crate::environment::Environment;
use crate::options::{EnvironmentOptions, ValidationError};
use crate::source::RequestSource;
use crate::value::{Cookies, Fields, Value};
use once_cell::sync::Lazy;
use std::collections::HashSet;
use tracing::{debug, trace};

static STANDARD_KEY_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| key::STANDARD_KEYS.into_iter().collect());

/// Builds [`Environment`]s from raw request metadata.
///
/// Only standard server keys, `HTTP_*` headers and injected keys survive; anything
/// else a host leaks into the request metadata (database URLs, salts, tokens) is
/// dropped before it can reach a report.
#[derive(Debug, Clone, Default)]
pub struct EnvironmentFactory {
    options: EnvironmentOptions,
}

impl EnvironmentFactory {
    pub fn new(options: EnvironmentOptions) -> Result<Self, ValidationError> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &EnvironmentOptions {
        &self.options
    }

    /// Whether a raw server key is kept in built environments.
    pub fn is_retained(&self, name: &str) -> bool {
        STANDARD_KEY_SET.contains(name)
            || name.starts_with(key::HTTP_HEADER_PREFIX)
            || key::INJECTED_KEYS.contains(&name)
            || self.options.retains(name)
    }

    pub fn build<S, K, V, C, CK, CV>(&self, server: S, cookies: C) -> Environment
    where
        S: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
        C: IntoIterator<Item = (CK, CV)>,
        CK: Into<String>,
        CV: Into<Value>,
    {
        let server = server.into_iter();
        let mut fields = Fields::with_capacity(server.size_hint().0 + 1);
        let mut dropped = 0usize;

        for (name, value) in server {
            let name = name.into();
            if self.is_retained(&name) {
                fields.insert(name, value.into());
            } else {
                dropped += 1;
                trace!(key = %name, "dropped server variable");
            }
        }

        let cookies: Cookies = cookies
            .into_iter()
            .map(|(name, value)| (name.into(), value.into()))
            .collect();

        debug!(
            kept = fields.len(),
            dropped,
            cookies = cookies.len(),
            "request environment built"
        );

        fields.insert(key::COOKIE_HASH.to_string(), Value::Map(cookies));
        Environment::from_fields(fields)
    }

    pub fn capture<R>(&self, source: &R) -> Environment
    where
        R: RequestSource + ?Sized,
    {
        self.build(source.server_variables(), source.cookie_variables())
    }
}

#[cfg(test)]
#[path = "factory_test.rs"]
mod factory_test;
