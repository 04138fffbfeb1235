use scraper::{ElementRef, Html, Selector};
use serde::Serialize;

pub const DEFAULT_TITLE: &str = "Earnings Call Transcript";

/// Elements that never carry transcript text.
const STRIPPED_TAGS: &str = "script, style, noscript, svg, form, nav, header, footer";

/// Title and body text pulled from a transcript page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transcript {
    pub title: String,
    pub body: String,
}

impl Transcript {
    pub fn to_markdown(&self, url: &str) -> String {
        format!("# {}\n\nSource: {}\n\n{}\n", self.title, url, self.body)
    }

    pub fn to_text(&self, url: &str) -> String {
        format!("{}\n\nSource: {}\n\n{}\n", self.title, url, self.body)
    }
}

/// Extract the title and article body from raw HTML.
///
/// Title: first `<h1>`, then `og:title`, then `<title>`, then a fixed default.
/// Body: paragraphs of the first `<article>`, `<main>` or `<body>` with
/// non-editorial elements removed; if the container has no non-empty
/// paragraphs, its raw text one line per text node.
pub fn extract_transcript(html: &str) -> Transcript {
    let mut document = Html::parse_document(html);
    let title = find_title(&document).unwrap_or_else(|| DEFAULT_TITLE.to_string());
    let body = find_body(&mut document).unwrap_or_default();
    Transcript { title, body }
}

fn find_title(document: &Html) -> Option<String> {
    let h1_sel = Selector::parse("h1").ok()?;
    let og_title_sel = Selector::parse(r#"meta[property="og:title"]"#).ok()?;
    let title_sel = Selector::parse("title").ok()?;

    if let Some(h1) = document.select(&h1_sel).next() {
        let text = normalized_text(h1);
        if !text.is_empty() {
            return Some(text);
        }
    }

    let og_title = document
        .select(&og_title_sel)
        .next()
        .and_then(|meta| meta.value().attr("content"))
        .map(collapse_whitespace)
        .filter(|content| !content.is_empty());
    if og_title.is_some() {
        return og_title;
    }

    document
        .select(&title_sel)
        .next()
        .map(normalized_text)
        .filter(|text| !text.is_empty())
}

fn find_body(document: &mut Html) -> Option<String> {
    let paragraph_sel = Selector::parse("p").ok()?;
    let stripped_sel = Selector::parse(STRIPPED_TAGS).ok()?;

    let mut container_id = None;
    for css in ["article", "main", "body"] {
        let sel = Selector::parse(css).ok()?;
        if let Some(element) = document.select(&sel).next() {
            container_id = Some(element.id());
            break;
        }
    }
    let container_id = container_id?;

    // Detach script/style/navigation subtrees below the container.
    let doomed: Vec<_> = document
        .tree
        .get(container_id)
        .and_then(ElementRef::wrap)?
        .select(&stripped_sel)
        .map(|el| el.id())
        .collect();
    for id in doomed {
        if let Some(mut node) = document.tree.get_mut(id) {
            node.detach();
        }
    }

    let container = document.tree.get(container_id).and_then(ElementRef::wrap)?;

    let paragraphs: Vec<String> = container
        .select(&paragraph_sel)
        .map(normalized_text)
        .filter(|text| !text.is_empty())
        .collect();

    if !paragraphs.is_empty() {
        return Some(paragraphs.join("\n\n"));
    }

    Some(
        container
            .text()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join("\n"),
    )
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Element text with whitespace runs collapsed to single spaces.
fn normalized_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}
