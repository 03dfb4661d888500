use std::sync::LazyLock;

use scraper::{Html, Selector};
use serde::Serialize;

use super::absolutize;
use crate::config::ExtractConfig;

static HEADINGS: LazyLock<Selector> =
	LazyLock::new(|| Selector::parse("h2, h3").expect("hardcoded heading selector"));
static ANCHOR: LazyLock<Selector> =
	LazyLock::new(|| Selector::parse("a").expect("hardcoded anchor selector"));

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Article {
	pub title: String,
	pub url: String,
}

/// Collects headline links from the first `max_headings` `h2`/`h3` elements.
///
/// Each heading contributes its first anchor, if any. Titles of
/// `min_title_chars` characters or fewer are dropped and at most
/// `max_articles` are returned, in document order.
#[tracing::instrument(name = "extract", skip(html, limits), fields(bytes = html.len()))]
pub fn extract_articles(html: &str, base_origin: &str, limits: &ExtractConfig) -> Vec<Article> {
	let document = Html::parse_document(html);

	let articles: Vec<Article> = document
		.select(&HEADINGS)
		.take(limits.max_headings)
		.filter_map(|heading| heading.select(&ANCHOR).next())
		.map(|anchor| Article {
			title: anchor.text().collect::<String>().trim().to_string(),
			url: absolutize(anchor.value().attr("href").unwrap_or_default(), base_origin)
				.into_owned(),
		})
		.filter(|article| article.title.chars().count() > limits.min_title_chars)
		.take(limits.max_articles)
		.collect();

	tracing::debug!(count = articles.len(), "extracted articles");
	articles
}
