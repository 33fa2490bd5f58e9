use crate::constants::{port, scheme};
use crate::util::equals_ignore_case;
use crate::value::Value;
use std::fmt;

/// URL scheme the request arrived over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Protocol {
    #[default]
    Http,
    Https,
}

impl Protocol {
    /// Reads the conventional `HTTPS` server variable.
    ///
    /// Any non-empty string other than `off` (in any case) means https. Values
    /// that are not strings never mark a request as secure.
    pub fn detect(https: Option<&Value>) -> Self {
        match https.and_then(Value::as_str) {
            Some(flag) if !flag.is_empty() && !equals_ignore_case(flag, scheme::HTTPS_OFF) => {
                Self::Https
            }
            _ => Self::Http,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Http => scheme::HTTP,
            Self::Https => scheme::HTTPS,
        }
    }

    pub const fn default_port(self) -> u16 {
        match self {
            Self::Http => port::HTTP_DEFAULT,
            Self::Https => port::HTTPS_DEFAULT,
        }
    }

    pub const fn is_secure(self) -> bool {
        matches!(self, Self::Https)
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq<str> for Protocol {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Protocol {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

#[cfg(test)]
#[path = "protocol_test.rs"]
mod protocol_test;
