use std::fmt;

/// How a member is declared: by value, through a single pointer, or as a
/// fixed-size array.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldShape {
	Plain,
	Pointer,
	Array(usize),
}

/// One member of a struct, in declaration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
	/// Type specifier with qualifiers and tag keywords stripped (`struct node` is `node`).
	pub type_name: String,
	pub name: String,
	pub shape: FieldShape,
}

impl FieldDescriptor {
	pub fn new(type_name: impl Into<String>, name: impl Into<String>, shape: FieldShape) -> Self {
		Self {
			type_name: type_name.into(),
			name: name.into(),
			shape,
		}
	}

	pub fn is_pointer(&self) -> bool {
		self.shape == FieldShape::Pointer
	}

	pub fn is_array(&self) -> bool {
		matches!(self.shape, FieldShape::Array(_))
	}

	pub fn array_size(&self) -> Option<usize> {
		match self.shape {
			FieldShape::Array(size) => Some(size),
			_ => None,
		}
	}
}

/// Renders the member the way it appears inside a class block: `type`, `type*` or `type[n]`.
impl fmt::Display for FieldDescriptor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.shape {
			FieldShape::Plain => write!(f, "{}", self.type_name),
			FieldShape::Pointer => write!(f, "{}*", self.type_name),
			FieldShape::Array(size) => write!(f, "{}[{}]", self.type_name, size),
		}
	}
}

/// A `typedef struct { ... } name;` declaration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StructDescriptor {
	pub name: String,
	/// The tag in `typedef struct tag { ... } name;`, if one was given.
	pub tag: Option<String>,
	pub fields: Vec<FieldDescriptor>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeKind {
	/// The field embeds the target struct by value.
	Composition,
	/// The field points at the target struct.
	Reference,
}

/// A derived link between two structs, keyed by their positions in the analyzed slice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelationshipEdge {
	pub from: usize,
	pub to: usize,
	pub field: String,
	pub kind: EdgeKind,
}

/// Why a declaration or member was left out of the result.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SkipReason {
	#[error("`typedef struct` without a member list")]
	NotTypedefStruct,
	#[error("struct body is missing its typedef name or trailing `;`")]
	MissingTypedefName,
	#[error("struct body is never closed")]
	UnterminatedBody,
	#[error("nested struct or union bodies are not supported")]
	NestedBody,
	#[error("array size `{0}` is not a decimal literal")]
	NonLiteralArraySize(String),
	#[error("unsupported member declaration")]
	UnsupportedMember,
}

/// A skipped construct and the source line it started on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Skipped {
	pub reason: SkipReason,
	pub line: usize,
}

/// Full result of an extraction pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Extraction {
	pub structs: Vec<StructDescriptor>,
	pub skipped: Vec<Skipped>,
}
