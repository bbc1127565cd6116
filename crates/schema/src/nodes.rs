//! Node specs for the default document schema.

use serde_json::{Value, json};
use vellum_primitives::Attrs;

use crate::dom::{DomOutput, ParseRule};
use crate::{AttrSpec, NodeSpec};

/// Node specs for the CommonMark data model, plus the writer extensions
/// (footnotes, comments, latex blocks, language containers).
pub fn commonmark_nodes() -> Vec<NodeSpec> {
	vec![
		NodeSpec {
			content: Some("block+"),
			..NodeSpec::leaf("doc")
		},
		NodeSpec {
			content: Some("inline*"),
			parse_dom: vec![ParseRule::tag("p")],
			to_dom: Some(|_| DomOutput::content_element("p")),
			..NodeSpec::block("paragraph")
		},
		NodeSpec {
			content: Some("block+"),
			parse_dom: vec![ParseRule::tag("blockquote")],
			to_dom: Some(|_| DomOutput::content_element("blockquote")),
			..NodeSpec::block("blockquote")
		},
		NodeSpec {
			parse_dom: vec![ParseRule::tag("hr")],
			to_dom: Some(|_| DomOutput::element("div").child(DomOutput::element("hr"))),
			..NodeSpec::block("horizontal_rule")
		},
		NodeSpec {
			content: Some("(text | image)*"),
			attrs: vec![AttrSpec::with_default("level", json!(1))],
			defining: true,
			parse_dom: heading_rules(),
			to_dom: Some(heading_dom),
			..NodeSpec::block("heading")
		},
		NodeSpec {
			content: Some("text*"),
			defining: true,
			code: true,
			marks: Some(""),
			attrs: vec![AttrSpec::with_default("params", json!(""))],
			parse_dom: vec![ParseRule::Tag {
				tag: "pre",
				attrs: None,
				get_attrs: Some(code_block_attrs),
				preserve_whitespace: true,
			}],
			to_dom: Some(code_block_dom),
			..NodeSpec::block("code_block")
		},
		NodeSpec {
			content: Some("list_item+"),
			attrs: vec![
				AttrSpec::with_default("order", json!(1)),
				AttrSpec::with_default("tight", json!(false)),
			],
			parse_dom: vec![ParseRule::tag_with("ol", ordered_list_attrs)],
			to_dom: Some(ordered_list_dom),
			..NodeSpec::block("ordered_list")
		},
		NodeSpec {
			content: Some("list_item+"),
			attrs: vec![AttrSpec::with_default("tight", json!(false))],
			parse_dom: vec![ParseRule::tag_with("ul", bullet_list_attrs)],
			to_dom: Some(bullet_list_dom),
			..NodeSpec::block("bullet_list")
		},
		NodeSpec {
			content: Some("paragraph block*"),
			defining: true,
			parse_dom: vec![ParseRule::tag("li")],
			to_dom: Some(|_| DomOutput::content_element("li")),
			..NodeSpec::leaf("list_item")
		},
		NodeSpec {
			content: Some("(description_term description_value)+"),
			defining: true,
			parse_dom: vec![ParseRule::tag("dl")],
			to_dom: Some(|_| DomOutput::content_element("dl")),
			..NodeSpec::block("description_list")
		},
		NodeSpec {
			content: Some("inline*"),
			defining: true,
			parse_dom: vec![ParseRule::tag("dt")],
			to_dom: Some(|_| DomOutput::content_element("dt")),
			..NodeSpec::leaf("description_term")
		},
		NodeSpec {
			content: Some("inline*"),
			defining: true,
			parse_dom: vec![ParseRule::tag("dd")],
			to_dom: Some(|_| DomOutput::content_element("dd")),
			..NodeSpec::leaf("description_value")
		},
		NodeSpec {
			group: Some("inline"),
			..NodeSpec::leaf("text")
		},
		NodeSpec {
			inline: true,
			group: Some("inline"),
			draggable: true,
			attrs: vec![
				AttrSpec::required("src"),
				AttrSpec::with_default("alt", Value::Null),
				AttrSpec::with_default("title", Value::Null),
			],
			parse_dom: vec![ParseRule::tag_with("img[src]", image_attrs)],
			to_dom: Some(image_dom),
			..NodeSpec::leaf("image")
		},
		NodeSpec {
			inline: true,
			group: Some("inline"),
			selectable: false,
			parse_dom: vec![ParseRule::tag("br")],
			to_dom: Some(|_| DomOutput::element("br")),
			..NodeSpec::leaf("hard_break")
		},
		NodeSpec {
			content: Some("paragraph+"),
			draggable: true,
			parse_dom: vec![ParseRule::tag("footnote")],
			to_dom: Some(|_| DomOutput::content_element("footnote")),
			..NodeSpec::block("footnote")
		},
		NodeSpec {
			content: Some("paragraph+"),
			draggable: true,
			parse_dom: vec![ParseRule::tag("comment")],
			to_dom: Some(|_| DomOutput::content_element("comment")),
			..NodeSpec::block("comment")
		},
		NodeSpec {
			content: Some("paragraph+"),
			draggable: true,
			code: true,
			parse_dom: vec![ParseRule::tag("latex")],
			to_dom: Some(|_| DomOutput::content_element("latex")),
			..NodeSpec::block("latex")
		},
		NodeSpec {
			content: Some("block+"),
			draggable: true,
			parse_dom: vec![ParseRule::tag("paragraphalternate")],
			to_dom: Some(|_| DomOutput::content_element("paragraphalternate")),
			..NodeSpec::block("paragraphalternate")
		},
		NodeSpec {
			content: Some("block+"),
			attrs: vec![AttrSpec::required("language")],
			atom: true,
			parse_dom: vec![ParseRule::tag_with("language", language_attrs)],
			to_dom: Some(language_dom),
			..NodeSpec::block("language")
		},
	]
}

fn heading_rules() -> Vec<ParseRule> {
	(1u64..=6)
		.map(|level| {
			let mut attrs = Attrs::new();
			attrs.insert("level".to_string(), json!(level));
			ParseRule::tag_with_attrs(heading_tag(level), attrs)
		})
		.collect()
}

fn heading_tag(level: u64) -> &'static str {
	match level {
		1 => "h1",
		2 => "h2",
		3 => "h3",
		4 => "h4",
		5 => "h5",
		_ => "h6",
	}
}

fn heading_dom(attrs: &Attrs) -> DomOutput {
	let level = attrs.get("level").and_then(Value::as_u64).unwrap_or(1);
	DomOutput::content_element(heading_tag(level))
}

fn code_block_attrs(dom: &Attrs) -> Option<Attrs> {
	let params = dom.get("data-params").and_then(Value::as_str).unwrap_or("");
	let mut attrs = Attrs::new();
	attrs.insert("params".to_string(), json!(params));
	Some(attrs)
}

fn code_block_dom(attrs: &Attrs) -> DomOutput {
	let params = attrs.get("params").and_then(Value::as_str).unwrap_or("");
	DomOutput::element("pre")
		.attr_opt("data-params", (!params.is_empty()).then(|| params.to_string()))
		.child(DomOutput::content_element("code"))
}

fn ordered_list_attrs(dom: &Attrs) -> Option<Attrs> {
	let order = dom
		.get("start")
		.and_then(Value::as_str)
		.and_then(|start| start.parse::<u64>().ok())
		.unwrap_or(1);
	let mut attrs = Attrs::new();
	attrs.insert("order".to_string(), json!(order));
	attrs.insert("tight".to_string(), json!(dom.contains_key("data-tight")));
	Some(attrs)
}

fn ordered_list_dom(attrs: &Attrs) -> DomOutput {
	let order = attrs.get("order").and_then(Value::as_u64).unwrap_or(1);
	let tight = attrs.get("tight").and_then(Value::as_bool).unwrap_or(false);
	DomOutput::element("ol")
		.attr_opt("start", (order != 1).then(|| order.to_string()))
		.attr_opt("data-tight", tight.then(|| "true".to_string()))
		.child(DomOutput::Hole)
}

fn bullet_list_attrs(dom: &Attrs) -> Option<Attrs> {
	let mut attrs = Attrs::new();
	attrs.insert("tight".to_string(), json!(dom.contains_key("data-tight")));
	Some(attrs)
}

fn bullet_list_dom(attrs: &Attrs) -> DomOutput {
	let tight = attrs.get("tight").and_then(Value::as_bool).unwrap_or(false);
	DomOutput::element("ul")
		.attr_opt("data-tight", tight.then(|| "true".to_string()))
		.child(DomOutput::Hole)
}

fn image_attrs(dom: &Attrs) -> Option<Attrs> {
	let src = dom.get("src").and_then(Value::as_str)?;
	let mut attrs = Attrs::new();
	attrs.insert("src".to_string(), json!(src));
	attrs.insert(
		"title".to_string(),
		dom.get("title").cloned().unwrap_or(Value::Null),
	);
	attrs.insert(
		"alt".to_string(),
		dom.get("alt").cloned().unwrap_or(Value::Null),
	);
	Some(attrs)
}

fn image_dom(attrs: &Attrs) -> DomOutput {
	let attr_str = |key: &str| attrs.get(key).and_then(Value::as_str).map(str::to_string);
	DomOutput::element("img")
		.attr_opt("src", attr_str("src"))
		.attr_opt("alt", attr_str("alt"))
		.attr_opt("title", attr_str("title"))
}

fn language_attrs(dom: &Attrs) -> Option<Attrs> {
	let language = dom.get("language").and_then(Value::as_str)?;
	let mut attrs = Attrs::new();
	attrs.insert("language".to_string(), json!(language));
	Some(attrs)
}

fn language_dom(attrs: &Attrs) -> DomOutput {
	let language = attrs.get("language").and_then(Value::as_str).unwrap_or("");
	DomOutput::element("language")
		.attr("language", language)
		.child(DomOutput::Hole)
}
