use std::borrow::Cow;
use std::fmt;

/// Effective port of a request.
#[derive(Debug, Clone)]
pub enum Port<'a> {
    /// Taken verbatim from `SERVER_PORT`.
    Server(Cow<'a, str>),
    /// No `SERVER_PORT`; the protocol's well-known port.
    Default(u16),
}

impl Port<'_> {
    /// Numeric port, if the server supplied something that parses as one.
    pub fn number(&self) -> Option<u16> {
        match self {
            Self::Server(text) => text.trim().parse().ok(),
            Self::Default(number) => Some(*number),
        }
    }

    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::Server(text) => Cow::Borrowed(text.as_ref()),
            Self::Default(number) => Cow::Owned(number.to_string()),
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, Self::Default(_))
    }

    pub fn into_owned(self) -> Port<'static> {
        match self {
            Self::Server(text) => Port::Server(Cow::Owned(text.into_owned())),
            Self::Default(number) => Port::Default(number),
        }
    }
}

impl fmt::Display for Port<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Server(text) => f.write_str(text),
            Self::Default(number) => write!(f, "{number}"),
        }
    }
}

impl<'b> PartialEq<Port<'b>> for Port<'_> {
    fn eq(&self, other: &Port<'b>) -> bool {
        match (self.number(), other.number()) {
            (Some(left), Some(right)) => left == right,
            _ => self.as_text() == other.as_text(),
        }
    }
}

impl PartialEq<u16> for Port<'_> {
    fn eq(&self, other: &u16) -> bool {
        self.number() == Some(*other)
    }
}

impl PartialEq<&str> for Port<'_> {
    fn eq(&self, other: &&str) -> bool {
        match self {
            Self::Server(text) => text.as_ref() == *other,
            Self::Default(number) => other.trim().parse::<u16>().ok() == Some(*number),
        }
    }
}

#[cfg(test)]
#[path = "port_test.rs"]
mod port_test;
