use quotery_core::NewQuote;
use scraper::{ElementRef, Html, Selector};

/// Class selector marking one quotation container on the listing page.
/// Also used by the pipeline as its page-readiness probe.
pub const QUOTE_SELECTOR: &str = ".quote";

const TEXT_SELECTOR: &str = ".text";
const AUTHOR_SELECTOR: &str = ".author";
const TAG_SELECTOR: &str = ".tag";

/// Decorative glyphs stripped from both ends of a quotation body.
const DECORATIVE_GLYPHS: &[char] = &['\u{201C}', '\u{201D}', ' '];

/// Parse one rendered listing page into candidate quotes.
///
/// Pure function of the DOM snapshot. Yields one candidate per `.quote`
/// container: the body from `.text` with surrounding decorative quotation
/// glyphs removed, the author from `.author` verbatim, and all `.tag`
/// labels joined with `", "` in DOM order. A page without the expected
/// structure yields no candidates; a container missing its text or author
/// sub-element is skipped.
pub fn extract_quotes(html: &str) -> Vec<NewQuote> {
    let (Ok(quote_sel), Ok(text_sel), Ok(author_sel), Ok(tag_sel)) = (
        Selector::parse(QUOTE_SELECTOR),
        Selector::parse(TEXT_SELECTOR),
        Selector::parse(AUTHOR_SELECTOR),
        Selector::parse(TAG_SELECTOR),
    ) else {
        return Vec::new();
    };

    let document = Html::parse_document(html);

    document
        .select(&quote_sel)
        .filter_map(|container| {
            let Some(text) = container.select(&text_sel).next().map(element_text) else {
                tracing::warn!("Quote container without a .text sub-element; skipping");
                return None;
            };
            let Some(author) = container.select(&author_sel).next().map(element_text) else {
                tracing::warn!("Quote container without an .author sub-element; skipping");
                return None;
            };

            let tags = container
                .select(&tag_sel)
                .map(element_text)
                .collect::<Vec<_>>()
                .join(", ");

            Some(NewQuote {
                text: text.trim_matches(DECORATIVE_GLYPHS).to_string(),
                author,
                tags,
            })
        })
        .collect()
}

/// Concatenated text content of an element, whitespace-trimmed.
fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}
