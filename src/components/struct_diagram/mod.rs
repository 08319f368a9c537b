mod component;

pub use component::StructDiagram;
