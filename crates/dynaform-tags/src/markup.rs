//! Trusted markup fragments.

use std::fmt;

/// A fragment of HTML that is already escaped.
///
/// Builders escape user-provided text when they create a `Markup`;
/// concatenating fragments never escapes again.
///
/// ```
/// use dynaform_tags::Markup;
///
/// let text = Markup::escape("Fish & Chips");
/// let html = Markup::trusted("<b>").concat(text).concat(Markup::trusted("</b>"));
/// assert_eq!(html.as_str(), "<b>Fish &amp; Chips</b>");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Markup(String);

impl Markup {
    /// Creates an empty fragment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps HTML that is known to be safe.
    pub fn trusted(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    /// Escapes plain text.
    pub fn escape(text: &str) -> Self {
        Self(html_escape(text))
    }

    /// Appends another fragment.
    #[must_use]
    pub fn concat(mut self, other: Self) -> Self {
        self.0.push_str(&other.0);
        self
    }

    /// Joins fragments with a trusted separator.
    pub fn join(parts: impl IntoIterator<Item = Self>, separator: &str) -> Self {
        let parts: Vec<String> = parts.into_iter().map(|part| part.0).collect();
        Self(parts.join(separator))
    }

    /// Returns the HTML.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns whether the fragment is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the fragment, returning the HTML.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Markup {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Markup> for String {
    fn from(markup: Markup) -> Self {
        markup.0
    }
}

impl FromIterator<Markup> for Markup {
    fn from_iter<I: IntoIterator<Item = Markup>>(iter: I) -> Self {
        Self::join(iter, "")
    }
}

/// Escapes HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("<script>"), "&lt;script&gt;");
        assert_eq!(html_escape("\"test\""), "&quot;test&quot;");
        assert_eq!(html_escape("a & b"), "a &amp; b");
        assert_eq!(html_escape("can't"), "can&#x27;t");
    }

    #[test]
    fn test_trusted_is_not_escaped() {
        let markup = Markup::trusted("<br />");
        assert_eq!(markup.to_string(), "<br />");
    }

    #[test]
    fn test_collect_and_join() {
        let parts = vec![Markup::trusted("<p>a</p>"), Markup::trusted("<p>b</p>")];
        let joined = Markup::join(parts.clone(), "\n");
        assert_eq!(joined.as_str(), "<p>a</p>\n<p>b</p>");

        let collected: Markup = parts.into_iter().collect();
        assert_eq!(collected.as_str(), "<p>a</p><p>b</p>");
        assert!(Markup::new().is_empty());
    }
}
