// src/utils/validation.rs
use regex::Regex;
use url::Url;

const MAX_HOST_LENGTH: usize = 253 + 6; // hostname plus ":65535"

lazy_static::lazy_static! {
    static ref REFERRAL_CODE_REGEX: Regex = Regex::new(r"^[1-9][0-9]{5}$").unwrap();
    static ref HOST_REGEX: Regex =
        Regex::new(r"^(\[[0-9a-fA-F:.]+\]|[a-zA-Z0-9]([a-zA-Z0-9.-]*[a-zA-Z0-9])?)(:[0-9]{1,5})?$").unwrap();
}

/// A code this site generates: six digits, no leading zero.
pub fn validate_referral_code(code: &str) -> bool {
    REFERRAL_CODE_REGEX.is_match(code)
}

/// Validates a `Host`-style value (`name[:port]` or `[v6][:port]`).
pub fn validate_host(host: &str) -> bool {
    !host.is_empty() && host.len() <= MAX_HOST_LENGTH && HOST_REGEX.is_match(host)
}

/// Reduces a configured origin such as `https://example.com/` to
/// `https://example.com`. Only http(s) origins without path, query or
/// credentials are accepted.
pub fn normalize_origin(raw: &str) -> Result<String, &'static str> {
    let url = Url::parse(raw.trim()).map_err(|_| "Origin is not a valid URL")?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err("Origin must use http or https");
    }

    if url.host_str().is_none() {
        return Err("Origin must include a host");
    }

    if !url.username().is_empty() || url.password().is_some() {
        return Err("Origin must not contain credentials");
    }

    if url.path() != "/" || url.query().is_some() || url.fragment().is_some() {
        return Err("Origin must not contain a path, query or fragment");
    }

    Ok(url.origin().ascii_serialization())
}
