use crate::constants::key;
use crate::util::unquote;
use crate::value::{Cookies, Fields, Value};
use std::ffi::OsString;
use tracing::warn;

/// Supplies raw request metadata to an [`crate::EnvironmentFactory`].
pub trait RequestSource {
    /// Server variables, unfiltered.
    fn server_variables(&self) -> Fields;

    /// Cookie name to raw value.
    fn cookie_variables(&self) -> Cookies;
}

/// Request metadata held in memory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapSource {
    pub server: Fields,
    pub cookies: Cookies,
}

impl MapSource {
    pub fn new(server: Fields, cookies: Cookies) -> Self {
        Self { server, cookies }
    }
}

impl RequestSource for MapSource {
    fn server_variables(&self) -> Fields {
        self.server.clone()
    }

    fn cookie_variables(&self) -> Cookies {
        self.cookies.clone()
    }
}

/// Snapshot of the CGI variables a web server hands to the current process.
///
/// Cookies are read from the `HTTP_COOKIE` variable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CgiProcess {
    vars: Fields,
}

impl CgiProcess {
    pub fn capture() -> Self {
        Self::from_os_vars(std::env::vars_os())
    }

    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: vars
                .into_iter()
                .map(|(name, value)| (name.into(), Value::Str(value.into())))
                .collect(),
        }
    }

    fn from_os_vars<I>(vars: I) -> Self
    where
        I: IntoIterator<Item = (OsString, OsString)>,
    {
        let mut captured = Fields::new();

        for (name, value) in vars {
            match (name.into_string(), value.into_string()) {
                (Ok(name), Ok(value)) => {
                    captured.insert(name, Value::Str(value));
                }
                (Ok(name), Err(_)) => {
                    warn!(key = %name, "skipped server variable with non-unicode value");
                }
                (Err(name), _) => {
                    let name = name.to_string_lossy();
                    warn!(key = %name, "skipped server variable with non-unicode name");
                }
            }
        }

        Self { vars: captured }
    }

    pub fn vars(&self) -> &Fields {
        &self.vars
    }
}

impl RequestSource for CgiProcess {
    fn server_variables(&self) -> Fields {
        self.vars.clone()
    }

    fn cookie_variables(&self) -> Cookies {
        self.vars
            .get(key::HTTP_COOKIE)
            .and_then(Value::as_str)
            .map(parse_cookie_header)
            .unwrap_or_default()
    }
}

/// Parses a `Cookie` request header into name/value pairs.
///
/// Values are kept raw apart from surrounding double quotes. The first
/// occurrence of a repeated name wins; pairs without `=` or without a name
/// are skipped.
pub fn parse_cookie_header(header: &str) -> Cookies {
    let mut cookies = Cookies::new();

    for pair in header.split(';') {
        let Some((name, value)) = pair.split_once('=') else {
            continue;
        };

        let name = name.trim();
        if name.is_empty() || cookies.contains_key(name) {
            continue;
        }

        cookies.insert(name.to_string(), Value::from(unquote(value.trim())));
    }

    cookies
}

#[cfg(test)]
#[path = "source_test.rs"]
mod source_test;
