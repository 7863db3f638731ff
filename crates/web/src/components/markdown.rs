//! Markdown bodies

use maud::{Markup, PreEscaped};
use pulldown_cmark::{Options, Parser, html as md_html};

/// Render a publication body to HTML.
///
/// Bodies are authored by the site operators and imported from the content
/// directory, so embedded HTML passes through.
pub(crate) fn render(source: &str) -> Markup {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_SMART_PUNCTUATION;

    let mut body = String::with_capacity(source.len() * 3 / 2);
    md_html::push_html(&mut body, Parser::new_ext(source, options));

    PreEscaped(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings_and_emphasis() {
        let html = render("# Ashwagandha\n\nA *calming* root.").into_string();

        assert!(html.contains("<h1>Ashwagandha</h1>"), "{html}");
        assert!(html.contains("<em>calming</em>"), "{html}");
    }

    #[test]
    fn tables_are_enabled() {
        let html = render("| Dosha | Element |\n|---|---|\n| Vata | Air |").into_string();

        assert!(html.contains("<table>"), "{html}");
    }
}
