pub mod geom;
pub mod id;
pub mod painter;
pub mod runtime;
pub mod scroll;
pub mod style;
pub mod text;
#[path = "scene/tree.rs"]
pub mod tree;
#[path = "scene/widget.rs"]
pub mod widget;
