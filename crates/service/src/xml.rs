//! Minimal indented XML writer for the record and feed representations.

use std::borrow::Cow;
use std::fmt::Write as _;

use asides_core::{Aside, rfc3339_seconds};

const DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Escapes the five XML special characters. Borrows when nothing needs escaping.
#[must_use]
pub fn escape_xml(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}

pub(crate) struct XmlWriter {
    out: String,
    depth: usize,
}

impl XmlWriter {
    pub(crate) fn new() -> Self {
        let mut out = String::from(DECLARATION);
        out.push('\n');
        Self { out, depth: 0 }
    }

    fn start_tag(&mut self, name: &str, attrs: &[(&str, &str)]) {
        self.out.push_str(&"  ".repeat(self.depth));
        self.out.push('<');
        self.out.push_str(name);
        for (key, value) in attrs {
            let _ = write!(self.out, r#" {key}="{}""#, escape_xml(value));
        }
    }

    pub(crate) fn open(&mut self, name: &str, attrs: &[(&str, &str)]) {
        self.start_tag(name, attrs);
        self.out.push_str(">\n");
        self.depth += 1;
    }

    pub(crate) fn close(&mut self, name: &str) {
        self.depth = self.depth.saturating_sub(1);
        self.out.push_str(&"  ".repeat(self.depth));
        let _ = writeln!(self.out, "</{name}>");
    }

    pub(crate) fn element(&mut self, name: &str, attrs: &[(&str, &str)], text: &str) {
        self.start_tag(name, attrs);
        let _ = writeln!(self.out, ">{}</{name}>", escape_xml(text));
    }

    pub(crate) fn empty(&mut self, name: &str, attrs: &[(&str, &str)]) {
        self.start_tag(name, attrs);
        self.out.push_str("/>\n");
    }

    pub(crate) fn finish(self) -> String {
        self.out
    }
}

/// Record XML for a single aside, with typed fields and dasherized names.
#[must_use]
pub fn render_aside_xml(aside: &Aside) -> String {
    let mut xml = XmlWriter::new();
    xml.open("aside", &[]);
    xml.element("id", &[("type", "integer")], &aside.id.to_string());
    xml.element("body", &[], &aside.body);
    xml.element("created-at", &[("type", "datetime")], &rfc3339_seconds(aside.created_at));
    xml.element("updated-at", &[("type", "datetime")], &rfc3339_seconds(aside.updated_at));
    xml.close("aside");
    xml.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn escape_borrows_plain_text() {
        assert!(matches!(escape_xml("plain"), Cow::Borrowed("plain")));
    }

    #[test]
    fn escape_replaces_specials() {
        assert_eq!(escape_xml(r#"<a href="x">&'</a>"#), "&lt;a href=&quot;x&quot;&gt;&amp;&apos;&lt;/a&gt;");
    }

    #[test]
    fn aside_xml_has_typed_fields() {
        let ts = Utc.with_ymd_and_hms(2009, 1, 1, 0, 0, 0).unwrap();
        let aside = Aside::new(1, "fish & chips".to_owned(), ts, ts);
        let xml = render_aside_xml(&aside);
        let expected = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
                        <aside>\n  \
                        <id type=\"integer\">1</id>\n  \
                        <body>fish &amp; chips</body>\n  \
                        <created-at type=\"datetime\">2009-01-01T00:00:00Z</created-at>\n  \
                        <updated-at type=\"datetime\">2009-01-01T00:00:00Z</updated-at>\n\
                        </aside>\n";
        assert_eq!(xml, expected);
    }
}
