//! Normalized, filtered snapshots of CGI-style request metadata.
//!
//! An [`Environment`] keeps only conventional server variables, `HTTP_*`
//! headers and explicitly injected keys from raw request metadata, stores the
//! request cookies under [`constants::key::COOKIE_HASH`], and derives protocol,
//! host, port and URL from what is left.

pub mod constants;
mod environment;
mod factory;
mod options;
mod port;
mod protocol;
mod source;
mod util;
mod value;

pub use environment::Environment;
pub use factory::EnvironmentFactory;
pub use options::{EnvironmentOptions, ValidationError};
pub use port::Port;
pub use protocol::Protocol;
pub use source::{CgiProcess, MapSource, RequestSource, parse_cookie_header};
pub use value::{Cookies, Fields, Value};
