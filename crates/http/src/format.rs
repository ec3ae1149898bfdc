//! Representation selection for `/asides/{id}.{format}`.

/// Requested representation of a single aside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AsideFormat {
    #[default]
    Json,
    Xml,
}

impl AsideFormat {
    /// `xml` selects XML; anything else, including no suffix, is JSON.
    #[must_use]
    pub fn from_extension(ext: Option<&str>) -> Self {
        match ext {
            Some(e) if e.eq_ignore_ascii_case("xml") => Self::Xml,
            _ => Self::Json,
        }
    }

    #[must_use]
    pub const fn content_type(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Xml => "application/xml",
        }
    }
}

/// Splits the last path segment into a numeric id and a format suffix.
///
/// `"1.xml"` → `(1, Xml)`, `"1"` → `(1, Json)`. A non-numeric id yields `None`.
#[must_use]
pub fn parse_aside_path(segment: &str) -> Option<(i64, AsideFormat)> {
    let (id, ext) = match segment.split_once('.') {
        Some((id, ext)) => (id, Some(ext)),
        None => (segment, None),
    };
    let id = id.parse::<i64>().ok()?;
    Some((id, AsideFormat::from_extension(ext)))
}
