mod code_editor;
mod struct_diagram;

pub use code_editor::CodeEditor;
pub use struct_diagram::StructDiagram;
