//! Title extraction for the supported legislation XML dialects.
//!
//! Each dialect tries an ordered list of candidate locations and returns
//! `None` when nothing usable is present. Malformed XML is absorbed as
//! `None` as well: a bad file must never abort the scan of its siblings.

use roxmltree::Document;

use crate::config::{DUBLIN_CORE_NS, LONG_TITLE_MAX_CHARS, UK_LEGISLATION_NS};
use crate::xml::{find_descendant, find_descendant_ns, nonempty_text};

/// Extract a title from Canadian legislation XML.
///
/// Prefers the `ShortTitle` element; falls back to `LongTitle`, truncated
/// to [`LONG_TITLE_MAX_CHARS`] characters since long titles can run to
/// whole paragraphs. Element matching ignores namespaces.
pub fn extract_canada_title(xml: &str) -> Option<String> {
    let doc = Document::parse(xml).ok()?;

    if let Some(title) = find_descendant(&doc, "ShortTitle").and_then(nonempty_text) {
        return Some(title);
    }

    find_descendant(&doc, "LongTitle")
        .and_then(nonempty_text)
        .map(|title| truncate_chars(&title, LONG_TITLE_MAX_CHARS))
}

/// Extract a title from UK legislation XML.
///
/// Tries the `Title` element in the legislation namespace, then the
/// Dublin Core `title` element in the document metadata.
pub fn extract_uk_title(xml: &str) -> Option<String> {
    let doc = Document::parse(xml).ok()?;

    if let Some(title) = find_descendant_ns(&doc, UK_LEGISLATION_NS, "Title").and_then(nonempty_text)
    {
        return Some(title);
    }

    find_descendant_ns(&doc, DUBLIN_CORE_NS, "title").and_then(nonempty_text)
}

/// Truncate to a maximum number of characters on a char boundary.
fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canada_short_title_preferred() {
        let xml = r#"<Statute>
            <Identification>
                <LongTitle>An Act respecting income taxes and various other things</LongTitle>
                <ShortTitle>Income Tax Act</ShortTitle>
            </Identification>
        </Statute>"#;
        assert_eq!(
            extract_canada_title(xml),
            Some("Income Tax Act".to_string())
        );
    }

    #[test]
    fn test_canada_long_title_fallback_truncated() {
        let long = "An Act ".repeat(30);
        let xml = format!("<Statute><LongTitle>{long}</LongTitle></Statute>");
        let title = extract_canada_title(&xml).unwrap();
        assert_eq!(title.chars().count(), LONG_TITLE_MAX_CHARS);
        assert!(title.starts_with("An Act"));
    }

    #[test]
    fn test_canada_short_title_not_truncated() {
        let xml = "<Statute><ShortTitle>Income Tax Act</ShortTitle></Statute>";
        assert_eq!(
            extract_canada_title(xml),
            Some("Income Tax Act".to_string())
        );
    }

    #[test]
    fn test_canada_whitespace_trimmed() {
        let xml = "<Statute><ShortTitle>  Income Tax Act  </ShortTitle></Statute>";
        assert_eq!(
            extract_canada_title(xml),
            Some("Income Tax Act".to_string())
        );
    }

    #[test]
    fn test_canada_no_title_elements() {
        let xml = "<Statute><Body/></Statute>";
        assert_eq!(extract_canada_title(xml), None);
    }

    #[test]
    fn test_canada_empty_short_title_falls_back() {
        let xml = "<Statute><ShortTitle>  </ShortTitle><LongTitle>An Act</LongTitle></Statute>";
        assert_eq!(extract_canada_title(xml), Some("An Act".to_string()));
    }

    #[test]
    fn test_canada_malformed_xml_absorbed() {
        assert_eq!(extract_canada_title("<Statute><ShortTitle>Broken"), None);
        assert_eq!(extract_canada_title("not xml at all"), None);
    }

    #[test]
    fn test_uk_legislation_title() {
        let xml = r#"<Legislation xmlns:leg="http://www.legislation.gov.uk/namespaces/legislation">
            <leg:Title>Tax Credits Act 2002</leg:Title>
        </Legislation>"#;
        assert_eq!(
            extract_uk_title(xml),
            Some("Tax Credits Act 2002".to_string())
        );
    }

    #[test]
    fn test_uk_dc_title_fallback() {
        let xml = r#"<Legislation xmlns:dc="http://purl.org/dc/elements/1.1/">
            <Metadata><dc:title>Tax Credits Act 2002</dc:title></Metadata>
        </Legislation>"#;
        assert_eq!(
            extract_uk_title(xml),
            Some("Tax Credits Act 2002".to_string())
        );
    }

    #[test]
    fn test_uk_wrong_namespace_ignored() {
        let xml = r#"<Legislation xmlns:x="http://example.com">
            <x:Title>Not a legislation title</x:Title>
        </Legislation>"#;
        assert_eq!(extract_uk_title(xml), None);
    }

    #[test]
    fn test_uk_malformed_xml_absorbed() {
        assert_eq!(extract_uk_title("<Legislation"), None);
    }

    #[test]
    fn test_truncate_chars_multibyte_safe() {
        assert_eq!(truncate_chars("ééééé", 3), "ééé");
        assert_eq!(truncate_chars("abc", 10), "abc");
    }
}
