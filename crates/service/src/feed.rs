//! Atom rendering of the recent asides.

use asides_core::{Aside, FEED_AUTHOR, FEED_TITLE, SiteUrls, rfc3339_seconds};
use chrono::{DateTime, Utc};

use crate::xml::XmlWriter;

const ATOM_NS: &str = "http://www.w3.org/2005/Atom";

/// Rendered feed plus the value for the `Last-Modified` header.
#[derive(Debug, Clone)]
pub struct Feed {
    pub xml: String,
    /// Newest `updated_at`; `None` when there are no asides.
    pub last_modified: Option<DateTime<Utc>>,
}

impl Feed {
    #[must_use]
    pub fn build(asides: &[Aside], urls: &SiteUrls, now: DateTime<Utc>) -> Self {
        Self { xml: render_atom(asides, urls, now), last_modified: last_modified(asides) }
    }
}

/// Newest `updated_at` among `asides`, if any.
#[must_use]
pub fn last_modified(asides: &[Aside]) -> Option<DateTime<Utc>> {
    asides.iter().map(|a| a.updated_at).max()
}

/// Renders an Atom document. The feed's `updated` falls back to `now` when empty.
#[must_use]
pub fn render_atom(asides: &[Aside], urls: &SiteUrls, now: DateTime<Utc>) -> String {
    let base = urls.base();
    let feed_url = urls.feed_url();
    let updated = last_modified(asides).unwrap_or(now);

    let mut xml = XmlWriter::new();
    xml.open("feed", &[("xml:lang", "en-US"), ("xmlns", ATOM_NS)]);
    xml.element("id", &[], base);
    xml.empty("link", &[("type", "text/html"), ("href", base), ("rel", "alternate")]);
    xml.empty("link", &[("type", "application/atom+xml"), ("href", &feed_url), ("rel", "self")]);
    xml.element("title", &[], FEED_TITLE);
    xml.element("updated", &[], &rfc3339_seconds(updated));

    for aside in asides {
        let url = urls.aside_url(aside.id);
        xml.open("entry", &[]);
        xml.element("id", &[], &url);
        xml.empty("link", &[("type", "text/html"), ("href", &url), ("rel", "alternate")]);
        xml.element("updated", &[], &rfc3339_seconds(aside.updated_at));
        xml.element("title", &[], &url);
        xml.open("author", &[]);
        xml.element("name", &[], FEED_AUTHOR);
        xml.close("author");
        xml.element("content", &[], &aside.body);
        xml.close("entry");
    }

    xml.close("feed");
    xml.finish()
}
