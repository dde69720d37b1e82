// src/templates/not_found.rs
use askama::Template;

use crate::content::{FooterColumn, SocialLink, COPYRIGHT, FOOTER_COLUMNS, SITE_NAME, SOCIAL_LINKS};

#[derive(Template)]
#[template(path = "not_found.html")]
struct NotFoundTemplate<'a> {
    site_name: &'static str,
    footer_columns: &'static [FooterColumn],
    social_links: &'static [SocialLink],
    copyright: &'static str,
    path: &'a str,
}

pub fn render(path: &str) -> askama::Result<String> {
    NotFoundTemplate {
        site_name: SITE_NAME,
        footer_columns: &FOOTER_COLUMNS,
        social_links: &SOCIAL_LINKS,
        copyright: COPYRIGHT,
        path,
    }
    .render()
}
