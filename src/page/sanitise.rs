use std::borrow::Cow;

use scraper::{ElementRef, Html, Node, node::Element};

use super::absolutize;

/// Drops `script` and `iframe` subtrees and absolutizes `img[src]`, `a[href]` and
/// stylesheet `link[href]` against `base_origin`.
///
/// Edits are collected in one walk and applied afterwards, so the tree is never
/// mutated while it is being iterated. Everything else, foreign content and
/// namespaced attributes included, goes back out through the parser's own
/// serialiser untouched.
#[tracing::instrument(name = "sanitise", skip(html), fields(bytes = html.len()))]
pub fn sanitise(html: &str, base_origin: &str) -> String {
	let mut document = Html::parse_document(html);

	let mut removed = Vec::new();
	let mut rewrites = Vec::new();

	for element in document.tree.root().descendants().filter_map(ElementRef::wrap) {
		let value = element.value();
		let attr = match value.name() {
			"script" | "iframe" => {
				removed.push(element.id());
				continue;
			}
			"img" => "src",
			"a" => "href",
			"link" if is_stylesheet(value) => "href",
			_ => continue,
		};

		let Some(index) = plain_attr(value, attr) else {
			continue;
		};

		if let Cow::Owned(url) = absolutize(&value.attrs[index].1, base_origin) {
			rewrites.push((element.id(), index, url));
		}
	}

	tracing::debug!(
		removed = removed.len(),
		rewritten = rewrites.len(),
		"collected edits"
	);

	for (id, index, url) in rewrites {
		if let Some(mut node) = document.tree.get_mut(id) {
			if let Node::Element(element) = node.value() {
				element.attrs[index].1 = url.into();
			}
		}
	}

	for id in removed {
		if let Some(mut node) = document.tree.get_mut(id) {
			node.detach();
		}
	}

	document.html()
}

/// Position of an attribute outside any namespace, so `xlink:href` never
/// stands in for `href`.
fn plain_attr(element: &Element, name: &str) -> Option<usize> {
	element
		.attrs
		.iter()
		.position(|(key, _)| key.ns.is_empty() && &*key.local == name)
}

fn is_stylesheet(link: &Element) -> bool {
	plain_attr(link, "rel").is_some_and(|index| {
		link.attrs[index]
			.1
			.split_ascii_whitespace()
			.any(|token| token.eq_ignore_ascii_case("stylesheet"))
	})
}
