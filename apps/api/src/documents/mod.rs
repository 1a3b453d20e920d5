// Display support for generated documents: Markdown rendering and the
// print-ready page the browser prints to PDF with its native dialog.
// Edit state lives in the page; the server only ever sees the current text.

pub mod handlers;
pub mod markdown;

use crate::documents::markdown::{escape_html, render_markdown};

const PRINT_STYLES: &str = r#"
  body { font-family: Georgia, "Times New Roman", serif; font-size: 11pt; line-height: 1.45; color: #111; max-width: 7.5in; margin: 0 auto; padding: 0.5in; }
  h1 { font-size: 20pt; margin: 0 0 6pt; }
  h2 { font-size: 13pt; margin: 14pt 0 4pt; border-bottom: 1px solid #999; }
  h3, h4, h5, h6 { font-size: 11.5pt; margin: 10pt 0 2pt; }
  p { margin: 0 0 8pt; }
  ul { margin: 0 0 8pt 18pt; padding: 0; }
  li { margin-bottom: 2pt; }
  hr { border: 0; border-top: 1px solid #bbb; margin: 10pt 0; }
  @page { size: letter; margin: 0.5in; }
  @media print { body { padding: 0; } }
"#;

/// Full standalone HTML document for one generated document.
pub fn render_print_page(title: &str, markdown: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>{}</style>\n</head>\n<body>\n{}</body>\n</html>\n",
        escape_html(title),
        PRINT_STYLES,
        render_markdown(markdown)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_page_wraps_rendered_body() {
        let page = render_print_page("Cover <Letter>", "Dear team,\n\n**Thanks**");
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Cover &lt;Letter&gt;</title>"));
        assert!(page.contains("<p>Dear team,</p>"));
        assert!(page.contains("<strong>Thanks</strong>"));
        assert!(page.contains("@media print"));
    }
}
