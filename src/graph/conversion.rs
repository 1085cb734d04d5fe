use super::definition::GraphDocument;
use crate::error::ConversionError;

/// A trait for custom document formats that can be converted into a `GraphDocument`.
///
/// This is the extension point for feeding the compiler from any editor or storage
/// format. The bundled editor JSON format implements it in [`crate::editor`].
///
/// # Example
///
/// ```rust,no_run
/// use kaiwa::prelude::*;
/// use kaiwa::error::ConversionError;
///
/// struct Line { id: String, text: String }
/// struct Script { lines: Vec<Line> }
///
/// impl IntoGraph for Script {
///     fn into_graph(self) -> std::result::Result<GraphDocument, ConversionError> {
///         let mut nodes = vec![Node::new("start", NodeKind::Start)];
///         let mut edges = Vec::new();
///         let mut previous = "start".to_string();
///         for line in self.lines {
///             edges.push(Edge::new(format!("e_{}", line.id), previous, line.id.clone()));
///             previous = line.id.clone();
///             nodes.push(Node::new(line.id, NodeKind::Action(vec![Action::show_text(line.text)])));
///         }
///         Ok(GraphDocument::new(nodes, edges))
///     }
/// }
/// ```
pub trait IntoGraph {
    /// Consumes the object and converts it into a compilable graph snapshot.
    fn into_graph(self) -> Result<GraphDocument, ConversionError>;
}

impl IntoGraph for GraphDocument {
    fn into_graph(self) -> Result<GraphDocument, ConversionError> {
        Ok(self)
    }
}
