pub mod key {
    pub const PHP_SELF: &str = "PHP_SELF";
    pub const ARGV: &str = "argv";
    pub const ARGC: &str = "argc";
    pub const GATEWAY_INTERFACE: &str = "GATEWAY_INTERFACE";
    pub const SERVER_ADDR: &str = "SERVER_ADDR";
    pub const SERVER_NAME: &str = "SERVER_NAME";
    pub const SERVER_SOFTWARE: &str = "SERVER_SOFTWARE";
    pub const SERVER_PROTOCOL: &str = "SERVER_PROTOCOL";
    pub const REQUEST_METHOD: &str = "REQUEST_METHOD";
    pub const REQUEST_TIME: &str = "REQUEST_TIME";
    pub const REQUEST_TIME_FLOAT: &str = "REQUEST_TIME_FLOAT";
    pub const QUERY_STRING: &str = "QUERY_STRING";
    pub const DOCUMENT_ROOT: &str = "DOCUMENT_ROOT";
    pub const HTTPS: &str = "HTTPS";
    pub const REMOTE_ADDR: &str = "REMOTE_ADDR";
    pub const REMOTE_HOST: &str = "REMOTE_HOST";
    pub const REMOTE_PORT: &str = "REMOTE_PORT";
    pub const REMOTE_USER: &str = "REMOTE_USER";
    pub const REDIRECT_REMOTE_USER: &str = "REDIRECT_REMOTE_USER";
    pub const SCRIPT_FILENAME: &str = "SCRIPT_FILENAME";
    pub const SERVER_ADMIN: &str = "SERVER_ADMIN";
    pub const SERVER_PORT: &str = "SERVER_PORT";
    pub const SERVER_SIGNATURE: &str = "SERVER_SIGNATURE";
    pub const PATH_TRANSLATED: &str = "PATH_TRANSLATED";
    pub const SCRIPT_NAME: &str = "SCRIPT_NAME";
    pub const REQUEST_URI: &str = "REQUEST_URI";
    pub const PHP_AUTH_DIGEST: &str = "PHP_AUTH_DIGEST";
    pub const PHP_AUTH_USER: &str = "PHP_AUTH_USER";
    pub const PHP_AUTH_PW: &str = "PHP_AUTH_PW";
    pub const AUTH_TYPE: &str = "AUTH_TYPE";
    pub const PATH_INFO: &str = "PATH_INFO";
    pub const ORIG_PATH_INFO: &str = "ORIG_PATH_INFO";

    pub const HTTP_HOST: &str = "HTTP_HOST";
    pub const HTTP_COOKIE: &str = "HTTP_COOKIE";

    /// Caller-supplied, precomputed request URL.
    pub const URL: &str = "url";
    /// Cookie mapping, always present in a built environment.
    pub const COOKIE_HASH: &str = "rack.request.cookie_hash";

    /// Prefix the host uses for forwarded request headers.
    pub const HTTP_HEADER_PREFIX: &str = "HTTP_";

    /// Server keys retained from raw request metadata. Kept in sync with the
    /// conventional CGI/PHP server variable names; do not extend at runtime.
    pub const STANDARD_KEYS: [&str; 32] = [
        PHP_SELF,
        ARGV,
        ARGC,
        GATEWAY_INTERFACE,
        SERVER_ADDR,
        SERVER_NAME,
        SERVER_SOFTWARE,
        SERVER_PROTOCOL,
        REQUEST_METHOD,
        REQUEST_TIME,
        REQUEST_TIME_FLOAT,
        QUERY_STRING,
        DOCUMENT_ROOT,
        HTTPS,
        REMOTE_ADDR,
        REMOTE_HOST,
        REMOTE_PORT,
        REMOTE_USER,
        REDIRECT_REMOTE_USER,
        SCRIPT_FILENAME,
        SERVER_ADMIN,
        SERVER_PORT,
        SERVER_SIGNATURE,
        PATH_TRANSLATED,
        SCRIPT_NAME,
        REQUEST_URI,
        PHP_AUTH_DIGEST,
        PHP_AUTH_USER,
        PHP_AUTH_PW,
        AUTH_TYPE,
        PATH_INFO,
        ORIG_PATH_INFO,
    ];

    /// Keys a caller may inject alongside raw metadata.
    pub const INJECTED_KEYS: [&str; 1] = [URL];
}

pub mod scheme {
    pub const HTTP: &str = "http";
    pub const HTTPS: &str = "https";
    pub const SEPARATOR: &str = "://";

    /// `HTTPS` value servers use to signal a plain connection.
    pub const HTTPS_OFF: &str = "off";
}

pub mod port {
    pub const HTTP_DEFAULT: u16 = 80;
    pub const HTTPS_DEFAULT: u16 = 443;
}
