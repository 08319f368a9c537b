use pretty_assertions::assert_eq;

use super::*;
use crate::analysis::parser::extract;
use crate::analysis::types::{FieldDescriptor, FieldShape};

fn decl(name: &str, fields: Vec<FieldDescriptor>) -> StructDescriptor {
	StructDescriptor {
		name: name.to_owned(),
		tag: None,
		fields,
	}
}

#[test]
fn empty_input_is_a_bare_header() {
	assert_eq!(build(&[]), "classDiagram\n");
	assert!(relationships(&[]).is_empty());
}

#[test]
fn class_blocks_list_fields_in_declaration_order() {
	let structs = extract("typedef struct { int x; char name[20]; float* ptr; } point;");
	assert_eq!(
		build(&structs),
		"classDiagram\n\
		 \x20 class point {\n\
		 \x20   +x : int\n\
		 \x20   +name : char[20]\n\
		 \x20   +ptr : float*\n\
		 \x20 }\n"
	);
}

#[test]
fn composition_and_reference_edges() {
	let structs = extract(crate::pages::home::SAMPLE_CODE);
	let spec = build(&structs);
	assert!(spec.contains("  employeeInfo *-- name : empName\n"));
	assert!(spec.contains("  employeeRecord --> employeeInfo : employees (pointer)\n"));
	assert!(spec.contains("  companyRecord *-- employeeRecord : employeeList\n"));
	assert_eq!(relationships(&structs).len(), 3);
}

#[test]
fn self_reference_is_a_loop_not_dropped() {
	let structs = extract("typedef struct node { int value; struct node* next; } node;");
	let edges = relationships(&structs);
	assert_eq!(
		edges,
		vec![RelationshipEdge {
			from: 0,
			to: 0,
			field: "next".to_owned(),
			kind: EdgeKind::Reference,
		}]
	);
	assert!(build(&structs).ends_with("  node --> node : next (pointer)\n"));
}

#[test]
fn field_typed_by_struct_tag_links_to_its_typedef() {
	let structs = extract(
		"typedef struct node_s { int value; struct node_s *next; } node;
		 typedef struct { node_s head; } list;",
	);
	let edges = relationships(&structs);
	assert_eq!(
		edges,
		vec![
			RelationshipEdge {
				from: 0,
				to: 0,
				field: "next".to_owned(),
				kind: EdgeKind::Reference,
			},
			RelationshipEdge {
				from: 1,
				to: 0,
				field: "head".to_owned(),
				kind: EdgeKind::Composition,
			},
		]
	);
	let spec = build(&structs);
	assert!(spec.contains("    +next : node_s*\n"));
	assert!(spec.contains("  node --> node : next (pointer)\n"));
	assert!(spec.contains("  list *-- node : head\n"));
}

#[test]
fn typedef_name_wins_over_a_matching_tag() {
	let structs = vec![
		StructDescriptor {
			name: "a".to_owned(),
			tag: Some("b".to_owned()),
			fields: Vec::new(),
		},
		decl("b", Vec::new()),
		decl("c", vec![FieldDescriptor::new("b", "field", FieldShape::Plain)]),
	];
	assert_eq!(relationships(&structs)[0].to, 1);
}

#[test]
fn unknown_type_keeps_field_but_adds_no_edge() {
	let structs = vec![decl(
		"widget",
		vec![FieldDescriptor::new("gadget", "part", FieldShape::Plain)],
	)];
	assert!(relationships(&structs).is_empty());
	let spec = build(&structs);
	assert!(spec.contains("    +part : gadget\n"));
	assert!(!spec.contains("-->"));
	assert!(!spec.contains("*--"));
}

#[test]
fn arrays_of_structs_are_composition() {
	let structs = vec![
		decl("cell", vec![]),
		decl(
			"grid",
			vec![FieldDescriptor::new("cell", "cells", FieldShape::Array(9))],
		),
	];
	let edges = relationships(&structs);
	assert_eq!(edges.len(), 1);
	assert_eq!(edges[0].kind, EdgeKind::Composition);
	assert!(build(&structs).contains("  grid *-- cell : cells\n"));
}

#[test]
fn duplicate_names_render_every_block_but_link_to_last() {
	let structs = vec![
		decl("dup", vec![FieldDescriptor::new("int", "a", FieldShape::Plain)]),
		decl("dup", vec![FieldDescriptor::new("int", "b", FieldShape::Plain)]),
		decl(
			"holder",
			vec![FieldDescriptor::new("dup", "d", FieldShape::Pointer)],
		),
	];
	let spec = build(&structs);
	assert_eq!(spec.matches("  class dup {\n").count(), 2);

	let edges = relationships(&structs);
	assert_eq!(edges.len(), 1);
	assert_eq!(edges[0].from, 2);
	assert_eq!(edges[0].to, 1);
}

#[test]
fn build_is_deterministic() {
	let structs = extract(crate::pages::home::SAMPLE_CODE);
	assert_eq!(build(&structs), build(&structs));
}
