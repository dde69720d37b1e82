// src/referral.rs
use rand::Rng;
use std::fmt;

use crate::utils::validation::validate_referral_code;

/// Lowest code `generate` can return.
pub const MIN_CODE: u32 = 100_000;
/// Highest code `generate` can return.
pub const MAX_CODE: u32 = 999_999;

/// Query parameter carrying an inbound referral code.
pub const REFERRAL_PARAM: &str = "r";

/// A 6-digit referral code. Not registered anywhere and not guaranteed unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferralCode(String);

impl ReferralCode {
    pub fn generate() -> Self {
        let n = rand::thread_rng().gen_range(MIN_CODE..=MAX_CODE);
        Self(n.to_string())
    }

    /// Recognises a code this site could have generated.
    pub fn parse(s: &str) -> Option<Self> {
        validate_referral_code(s).then(|| Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReferralCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Builds `<origin>/?r=<code>`.
pub fn referral_link(origin: &str, code: &ReferralCode) -> String {
    format!(
        "{}/?{}={}",
        origin.trim_end_matches('/'),
        REFERRAL_PARAM,
        code
    )
}

/// Raw referral value captured from the page URL. Never validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundReferral(String);

impl InboundReferral {
    /// Reads the first `r` parameter of a raw query string, decoded like
    /// `URLSearchParams.get`. Absent or empty values yield `None`.
    pub fn from_query(raw_query: Option<&str>) -> Option<Self> {
        let query = raw_query?;
        url::form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == REFERRAL_PARAM)
            .map(|(_, value)| value.into_owned())
            .filter(|value| !value.is_empty())
            .map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_codes_are_six_digits_in_range() {
        for _ in 0..10_000 {
            let code = ReferralCode::generate();
            let s = code.as_str();
            assert_eq!(s.len(), 6);
            assert!(s.bytes().all(|b| b.is_ascii_digit()));
            let n: u32 = s.parse().unwrap();
            assert!((MIN_CODE..=MAX_CODE).contains(&n));
        }
    }

    #[test]
    fn test_generate_replaces_previous_code() {
        // 900k possible values; a hundred draws all colliding would mean a broken rng
        let first = ReferralCode::generate();
        assert!((0..100).any(|_| ReferralCode::generate() != first));
    }

    #[test]
    fn test_parse() {
        assert_eq!(ReferralCode::parse("123456").unwrap().as_str(), "123456");
        assert!(ReferralCode::parse("012345").is_none());
        assert!(ReferralCode::parse("12345").is_none());
        assert!(ReferralCode::parse("1234567").is_none());
        assert!(ReferralCode::parse("ABC123").is_none());
        assert!(ReferralCode::parse("").is_none());
    }

    #[test]
    fn test_referral_link() {
        let code = ReferralCode::parse("654321").unwrap();
        assert_eq!(
            referral_link("https://example.com", &code),
            "https://example.com/?r=654321"
        );
        assert_eq!(
            referral_link("http://localhost:3000/", &code),
            "http://localhost:3000/?r=654321"
        );
    }

    #[test]
    fn test_inbound_referral_is_kept_verbatim() {
        let inbound = InboundReferral::from_query(Some("r=ABC123")).unwrap();
        assert_eq!(inbound.as_str(), "ABC123");

        let inbound = InboundReferral::from_query(Some("utm=x&r=not%20a%20code&r=second")).unwrap();
        assert_eq!(inbound.as_str(), "not a code");

        let inbound = InboundReferral::from_query(Some("r=%3Cb%3E")).unwrap();
        assert_eq!(inbound.as_str(), "<b>");
    }

    #[test]
    fn test_inbound_referral_absent_or_empty() {
        assert!(InboundReferral::from_query(None).is_none());
        assert!(InboundReferral::from_query(Some("")).is_none());
        assert!(InboundReferral::from_query(Some("generate=1")).is_none());
        assert!(InboundReferral::from_query(Some("r=")).is_none());
        assert!(InboundReferral::from_query(Some("ref=123456")).is_none());
    }
}
