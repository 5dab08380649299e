//! Named graph loaded from an edge-list file or reader.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use arbor_core::Graph;

use crate::{errors::EdgeListError, parse::parse_edge_list};

/// A parsed graph together with the name it was loaded under.
#[derive(Clone, Debug)]
pub struct EdgeListSource {
    name: String,
    graph: Graph,
}

impl EdgeListSource {
    /// Wraps an existing graph.
    #[must_use]
    pub fn new(name: impl Into<String>, graph: Graph) -> Self {
        Self {
            name: name.into(),
            graph,
        }
    }

    /// Parses an edge list from `reader`.
    ///
    /// # Errors
    /// Returns [`EdgeListError`] when parsing fails.
    ///
    /// # Examples
    /// ```
    /// use arbor_providers_text::EdgeListSource;
    ///
    /// let source = EdgeListSource::try_from_reader("demo", "2 1\n1 2 7\n".as_bytes())?;
    /// assert_eq!(source.name(), "demo");
    /// assert_eq!(source.graph().edge_count(), 1);
    /// # Ok::<(), arbor_providers_text::EdgeListError>(())
    /// ```
    pub fn try_from_reader(
        name: impl Into<String>,
        reader: impl BufRead,
    ) -> Result<Self, EdgeListError> {
        Ok(Self::new(name, parse_edge_list(reader)?))
    }

    /// Opens and parses the edge list at `path`.
    ///
    /// # Errors
    /// Returns [`EdgeListError::Io`] when the file cannot be opened or read,
    /// and any other [`EdgeListError`] when parsing fails.
    pub fn try_from_path(
        name: impl Into<String>,
        path: impl AsRef<Path>,
    ) -> Result<Self, EdgeListError> {
        let file = File::open(path)?;
        Self::try_from_reader(name, BufReader::new(file))
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the parsed graph.
    #[must_use]
    pub const fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Consumes the source and returns the graph.
    #[must_use]
    pub fn into_graph(self) -> Graph {
        self.graph
    }
}
