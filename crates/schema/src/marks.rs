//! Mark specs for the default document schema.

use serde_json::Value;
use vellum_primitives::Attrs;

use crate::dom::{DomOutput, ParseRule};
use crate::{AttrSpec, MarkSpec};

/// Mark specs for the CommonMark data model, plus the writer marks
/// (index, highlight, reference, footnote anchor, bibliography).
pub fn commonmark_marks() -> Vec<MarkSpec> {
	vec![
		MarkSpec {
			name: "em",
			group: Some("textformatting"),
			attrs: Vec::new(),
			inclusive: true,
			excludes: None,
			parse_dom: vec![
				ParseRule::tag("i"),
				ParseRule::tag("em"),
				ParseRule::style("font-style", |value| value == "italic"),
			],
			to_dom: |_| DomOutput::element("em"),
		},
		MarkSpec {
			name: "strong",
			group: Some("textformatting"),
			attrs: Vec::new(),
			inclusive: true,
			excludes: None,
			parse_dom: vec![
				ParseRule::tag("b"),
				ParseRule::tag("strong"),
				ParseRule::style("font-weight", bold_weight),
			],
			to_dom: |_| DomOutput::element("strong"),
		},
		MarkSpec {
			name: "link",
			group: None,
			attrs: vec![
				AttrSpec::required("href"),
				AttrSpec::with_default("title", Value::Null),
			],
			inclusive: false,
			excludes: None,
			parse_dom: vec![ParseRule::tag_with("a[href]", link_attrs)],
			to_dom: link_dom,
		},
		MarkSpec {
			name: "code",
			group: Some("textformatting"),
			attrs: Vec::new(),
			inclusive: true,
			excludes: None,
			parse_dom: vec![ParseRule::tag("code")],
			to_dom: |_| DomOutput::element("code"),
		},
		writer_mark("index", vec![ParseRule::tag("index")], |_| DomOutput::element("index")),
		writer_mark("mark", vec![ParseRule::tag("mark")], |_| DomOutput::element("mark")),
		writer_mark("reference", vec![ParseRule::tag("reference")], |_| {
			DomOutput::element("reference")
		}),
		writer_mark("fn", vec![ParseRule::tag("fn")], |_| DomOutput::element("fn")),
		MarkSpec {
			name: "bibliography",
			group: None,
			attrs: vec![
				AttrSpec::required("reference"),
				AttrSpec::required("pre"),
				AttrSpec::required("post"),
			],
			inclusive: false,
			excludes: None,
			parse_dom: vec![ParseRule::tag_with("bibliography", bibliography_attrs)],
			to_dom: bibliography_dom,
		},
	]
}

/// Writer marks share a shape: a bare custom element, exclusive with every
/// other mark, not extended when typing at their edge.
fn writer_mark(
	name: &'static str,
	parse_dom: Vec<ParseRule>,
	to_dom: fn(&Attrs) -> DomOutput,
) -> MarkSpec {
	MarkSpec {
		name,
		group: Some("writer"),
		attrs: Vec::new(),
		inclusive: false,
		excludes: Some("_"),
		parse_dom,
		to_dom,
	}
}

/// Accepts the font weights that imply strong emphasis: the `bold` keywords
/// and numeric weights of 500 and above.
fn bold_weight(value: &str) -> bool {
	if value == "bold" || value == "bolder" {
		return true;
	}
	value.len() >= 3 && value.parse::<u32>().is_ok_and(|weight| weight >= 500)
}

fn link_attrs(dom: &Attrs) -> Option<Attrs> {
	let href = dom.get("href").and_then(Value::as_str)?;
	let mut attrs = Attrs::new();
	attrs.insert("href".to_string(), Value::String(href.to_string()));
	attrs.insert(
		"title".to_string(),
		dom.get("title").cloned().unwrap_or(Value::Null),
	);
	Some(attrs)
}

fn link_dom(attrs: &Attrs) -> DomOutput {
	let attr_str = |key: &str| attrs.get(key).and_then(Value::as_str).map(str::to_string);
	DomOutput::element("a")
		.attr_opt("href", attr_str("href"))
		.attr_opt("title", attr_str("title"))
}

fn bibliography_attrs(dom: &Attrs) -> Option<Attrs> {
	let mut attrs = Attrs::new();
	for key in ["reference", "pre", "post"] {
		attrs.insert(key.to_string(), dom.get(key).cloned().unwrap_or(Value::Null));
	}
	Some(attrs)
}

fn bibliography_dom(attrs: &Attrs) -> DomOutput {
	let attr_str = |key: &str| attrs.get(key).and_then(Value::as_str).map(str::to_string);
	DomOutput::element("bibliography")
		.attr_opt("reference", attr_str("reference"))
		.attr_opt("pre", attr_str("pre"))
		.attr_opt("post", attr_str("post"))
}
