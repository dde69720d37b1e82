// src/templates/landing.rs
use askama::Template;

use crate::content::{
    DocSection, Feature, FooterColumn, SocialLink, Step, ADVANTAGES, COPYRIGHT, DOC_SECTIONS,
    FEATURES, FOOTER_COLUMNS, MISSION, NOTICE, SITE_NAME, SOCIAL_LINKS, STEPS,
};
use crate::referral::{referral_link, InboundReferral, ReferralCode};

/// Pre-filled referral link card, rendered when the code was generated
/// on the server.
pub struct LinkCard {
    pub code: String,
    pub link: String,
}

impl LinkCard {
    pub fn new(origin: &str, code: &ReferralCode) -> Self {
        Self {
            code: code.to_string(),
            link: referral_link(origin, code),
        }
    }
}

#[derive(Template)]
#[template(path = "landing.html")]
struct LandingTemplate {
    site_name: &'static str,
    footer_columns: &'static [FooterColumn],
    social_links: &'static [SocialLink],
    copyright: &'static str,
    inbound_referrer: Option<String>,
    link_card: Option<LinkCard>,
    features: &'static [Feature],
    mission: &'static str,
    advantages: &'static [&'static str],
    steps: &'static [Step],
    notice: &'static str,
    doc_sections: &'static [DocSection],
}

pub fn render(
    inbound: Option<&InboundReferral>,
    link_card: Option<LinkCard>,
) -> askama::Result<String> {
    LandingTemplate {
        site_name: SITE_NAME,
        footer_columns: &FOOTER_COLUMNS,
        social_links: &SOCIAL_LINKS,
        copyright: COPYRIGHT,
        inbound_referrer: inbound.map(|r| r.as_str().to_string()),
        link_card,
        features: &FEATURES,
        mission: MISSION,
        advantages: &ADVANTAGES,
        steps: &STEPS,
        notice: NOTICE,
        doc_sections: &DOC_SECTIONS,
    }
    .render()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_every_section() {
        let html = render(None, None).unwrap();
        assert!(html.contains("<title>Майнинг РУБЛЯ - RubleMining</title>"));
        assert!(html.contains("Начни зарабатывать сегодня"));
        for feature in &FEATURES {
            assert!(html.contains(feature.title));
        }
        assert!(html.contains(r#"id="how-it-works""#));
        for step in &STEPS {
            assert!(html.contains(step.title));
        }
        for section in &DOC_SECTIONS {
            assert!(html.contains(&format!(r#"id="doc-{}""#, section.id)));
        }
        assert!(html.contains("Сколько можно заработать?"));
        assert!(html.contains(COPYRIGHT));
        assert!(html.contains("/static/js/landing.js"));
    }

    #[test]
    fn test_link_card_hidden_without_code() {
        let html = render(None, None).unwrap();
        assert!(html.contains(r#"id="referral-card" class="card link-card" hidden"#));
        assert!(!html.contains("data-code="));
    }

    #[test]
    fn test_link_card_filled_with_code() {
        let code = ReferralCode::parse("482913").unwrap();
        let html = render(None, Some(LinkCard::new("http://localhost:3000", &code))).unwrap();
        assert!(!html.contains(r#"link-card" hidden"#));
        assert!(html.contains(r#"data-code="482913""#));
        assert!(html.contains(r#"<strong id="referral-code" class="accent">482913</strong>"#));
        assert!(html.contains("?r=482913"));
    }

    #[test]
    fn test_inbound_referrer_attribute() {
        let inbound = InboundReferral::from_query(Some("r=ABC123")).unwrap();
        let html = render(Some(&inbound), None).unwrap();
        assert!(html.contains(r#"<body data-referrer="ABC123">"#));

        let html = render(None, None).unwrap();
        assert!(html.contains("<body>"));
        assert!(!html.contains("data-referrer"));
    }

    #[test]
    fn test_inbound_referrer_is_escaped() {
        let inbound = InboundReferral::from_query(Some("r=%22%3E%3Cscript%3Ealert(1)%3C")).unwrap();
        let html = render(Some(&inbound), None).unwrap();
        assert!(!html.contains("<script>alert(1)"));
        assert!(html.contains("&lt;script&gt;alert(1)"));
    }
}
