//! Legal citation synthesis.

/// Build a USC citation from extension-stripped path segments.
///
/// Segment 0 is the title number, segment 1 the section, and any further
/// segments are subsection components rendered as successive parenthesized
/// groups (`26/32/a/1` becomes `26 USC § 32(a)(1)`). With fewer than two
/// segments there is not enough structure to synthesize a citation and the
/// segments are simply joined back into a path.
#[must_use]
pub fn usc_citation(segments: &[String]) -> String {
    if segments.len() < 2 {
        return segments.join("/");
    }

    let title = &segments[0];
    let section = &segments[1];
    let subsection = segments[2..].join("/");

    if subsection.is_empty() {
        format!("{title} USC § {section}")
    } else {
        format!("{title} USC § {section}({})", subsection.replace('/', ")("))
    }
}

/// Citation for a Canadian consolidated act.
#[must_use]
pub fn canada_citation(code: &str) -> String {
    format!("RSC {code}")
}

/// Citation for a UK public general act.
#[must_use]
pub fn uk_citation(year: &str, chapter: &str) -> String {
    format!("c.{chapter} ({year})")
}
