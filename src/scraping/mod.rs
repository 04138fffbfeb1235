// HTML scraping for transcript pages
// Uses the scraper crate (html5ever) to locate the title and article body

pub mod transcript;

pub use transcript::{extract_transcript, Transcript, DEFAULT_TITLE};
