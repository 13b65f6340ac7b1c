//! Web scraping module for headline and article extraction.
//!
//! Uses reqwest for fetching and scraper for HTML parsing. Extraction is a
//! fixed sequence of CSS-selector lookups coupled to the current NOS.nl
//! markup; it fails with [`ScraperError::Structure`] when the layout no
//! longer matches.

use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use std::time::Duration;
use thiserror::Error;

/// Site origin, prefixed onto relative article links
pub const ORIGIN: &str = "https://nos.nl";

/// User-Agent string identifying this scraper
const USER_AGENT: &str = concat!("laatste/", env!("CARGO_PKG_VERSION"), " (https://github.com/cladam/laatste)");

/// Default timeout for HTTP requests
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Error, Debug)]
pub enum ScraperError {
    #[error("failed to fetch URL: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("request for {url} returned {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("expected page structure missing: {0}")]
    Structure(&'static str),
}

/// One listing entry on a NOS overview page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Headline {
    /// Article title
    pub title: String,
    /// Relative timestamp as displayed on the page (e.g. "2 uur geleden")
    pub relative_date: String,
    /// Absolute article URL
    pub url: String,
}

impl Headline {
    /// Display form used in the list view
    pub fn display_title(&self) -> String {
        format!("{} ({})", self.title, self.relative_date)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Paragraph,
    Heading,
}

/// One paragraph or subheading of an article body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBlock {
    pub kind: BlockKind,
    pub text: String,
}

/// Create a configured HTTP client for scraping
fn create_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .build()
}

/// GET a page and return its body, failing on transport errors and non-2xx
async fn get_page(url: &str) -> Result<String, ScraperError> {
    let client = create_client()?;
    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        return Err(ScraperError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }
    Ok(response.text().await?)
}

/// Fetch the headlines of a NOS overview page (e.g. category "laatste")
pub async fn fetch_headlines(category: &str) -> Result<Vec<Headline>, ScraperError> {
    let html = get_page(&format!("{}/nieuws/{}", ORIGIN, category)).await?;
    parse_headlines(&html)
}

/// Fetch the text blocks of a single article
pub async fn fetch_article(url: &str) -> Result<Vec<TextBlock>, ScraperError> {
    let html = get_page(url).await?;
    parse_article(&html)
}

/// Extract headlines from overview-page HTML, in document order.
///
/// Items missing their title or link are skipped; a page yielding no items
/// at all means the site layout changed and is an error.
pub fn parse_headlines(html: &str) -> Result<Vec<Headline>, ScraperError> {
    let document = Html::parse_document(html);

    let item_selector = Selector::parse("section > ul > li").unwrap();
    let title_selector = Selector::parse("h2").unwrap();
    let link_selector = Selector::parse("a").unwrap();
    let time_selector = Selector::parse("time").unwrap();

    let mut headlines = Vec::new();

    for item in document.select(&item_selector) {
        let title = match item.select(&title_selector).next().map(element_text) {
            Some(title) if !title.is_empty() => title,
            _ => continue,
        };
        let href = match item
            .select(&link_selector)
            .next()
            .and_then(|a| a.value().attr("href"))
        {
            Some(href) => href,
            None => continue,
        };
        let relative_date = item
            .select(&time_selector)
            .next()
            .map(element_text)
            .unwrap_or_default();

        headlines.push(Headline {
            title,
            relative_date,
            url: absolute_url(href),
        });
    }

    if headlines.is_empty() {
        return Err(ScraperError::Structure(
            "no listing items under section > ul > li",
        ));
    }
    Ok(headlines)
}

/// Extract the text blocks of an article page, in document order.
///
/// Only the direct-child paragraphs and subheadings of the `main > div`
/// containers count; text nested in deeper wrappers is ignored.
pub fn parse_article(html: &str) -> Result<Vec<TextBlock>, ScraperError> {
    let document = Html::parse_document(html);

    let block_selector = Selector::parse("main > div > p, main > div > h2").unwrap();

    let mut blocks = Vec::new();

    for element in document.select(&block_selector) {
        let text = element_text(element);
        if text.is_empty() {
            continue;
        }
        let kind = if element.value().name() == "h2" {
            BlockKind::Heading
        } else {
            BlockKind::Paragraph
        };
        blocks.push(TextBlock { kind, text });
    }

    if blocks.is_empty() {
        return Err(ScraperError::Structure("no article text under main > div"));
    }
    Ok(blocks)
}

/// Collapse an element's text nodes into one whitespace-normalised string
fn element_text(element: ElementRef) -> String {
    let text: String = element.text().collect::<Vec<_>>().join(" ");
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Prefix relative hrefs with the site origin; pass absolute ones through
fn absolute_url(href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        href.to_string()
    } else {
        format!("{}{}", ORIGIN, href)
    }
}
