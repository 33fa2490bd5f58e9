#![allow(dead_code)]

use request_environment::Environment;
use request_environment::constants::key;

pub fn is_allowed_key(name: &str) -> bool {
    key::STANDARD_KEYS.contains(&name)
        || name.starts_with(key::HTTP_HEADER_PREFIX)
        || key::INJECTED_KEYS.contains(&name)
        || name == key::COOKIE_HASH
}

pub fn assert_only_allowed_keys(env: &Environment) {
    for name in env.fields().keys() {
        assert!(is_allowed_key(name), "unexpected key retained: {name}");
    }
}

pub fn assert_url(env: &Environment, expected: &str) {
    assert_eq!(env.url().as_deref(), Some(expected));
}
