//! Mermaid `classDiagram` generation from extracted structs.

use std::collections::HashMap;
use std::fmt::Write;

use super::types::{EdgeKind, RelationshipEdge, StructDescriptor};

#[cfg(test)]
#[path = "diagram_test.rs"]
mod diagram_test;

/// Name to index lookup. A redeclared name points at its last declaration.
/// Struct tags resolve to their typedef, but never shadow a typedef name.
fn index_by_name(structs: &[StructDescriptor]) -> HashMap<&str, usize> {
	let tags = structs
		.iter()
		.enumerate()
		.filter_map(|(i, s)| Some((s.tag.as_deref()?, i)));
	let names = structs.iter().enumerate().map(|(i, s)| (s.name.as_str(), i));
	tags.chain(names).collect()
}

/// Every field whose type names an analyzed struct, in struct then field order.
///
/// Self references are kept; a `node` holding `node* next` yields an edge from
/// `node` to itself.
pub fn relationships(structs: &[StructDescriptor]) -> Vec<RelationshipEdge> {
	let lookup = index_by_name(structs);
	let mut edges = Vec::new();
	for (from, decl) in structs.iter().enumerate() {
		for field in &decl.fields {
			let Some(&to) = lookup.get(field.type_name.as_str()) else {
				continue;
			};
			let kind = if field.is_pointer() {
				EdgeKind::Reference
			} else {
				EdgeKind::Composition
			};
			edges.push(RelationshipEdge {
				from,
				to,
				field: field.name.clone(),
				kind,
			});
		}
	}
	edges
}

/// Build the diagram description handed to the rendering engine.
pub fn build(structs: &[StructDescriptor]) -> String {
	let mut out = String::from("classDiagram\n");

	for decl in structs {
		let _ = writeln!(out, "  class {} {{", decl.name);
		for field in &decl.fields {
			let _ = writeln!(out, "    +{} : {}", field.name, field);
		}
		out.push_str("  }\n");
	}

	for edge in relationships(structs) {
		let (from, to) = (&structs[edge.from].name, &structs[edge.to].name);
		let _ = match edge.kind {
			EdgeKind::Reference => writeln!(out, "  {from} --> {to} : {} (pointer)", edge.field),
			EdgeKind::Composition => writeln!(out, "  {from} *-- {to} : {}", edge.field),
		};
	}

	out
}
