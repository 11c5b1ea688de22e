//! Graph documents (JSON) and Graphviz DOT rendering.

pub mod document;
pub mod dot;
pub mod reader;
pub mod writer;

pub use document::{EdgeRecord, GraphDocument};
pub use dot::{to_dot, DotOptions};
pub use reader::GraphReader;
pub use writer::GraphWriter;
