//! Registry of source files, handing out [`FileId`]s as files are loaded.
//!
//! The compiler only ever processes one file per invocation, but the
//! registry still exists as its own type (rather than a bare `String`)
//! so a [`Span`] can always be traced back to a name — `-` for stdin,
//! or the input path — without every stage needing to thread the name
//! through separately.

use std::sync::Arc;

use super::FileId;

/// A loaded source file: its display name and its content.
#[derive(Clone)]
pub struct SourceFile {
    id: FileId,
    name: Arc<str>,
    content: Arc<str>,
}

impl SourceFile {
    pub fn id(&self) -> FileId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Maps [`FileId`]s to their loaded [`SourceFile`].
///
/// # Examples
///
/// ```
/// use sanic_util::span::SourceMap;
///
/// let mut map = SourceMap::new();
/// let id = map.add("main.sy", "putchar('H');\n");
/// assert_eq!(map.get(id).unwrap().name(), "main.sy");
/// ```
#[derive(Default)]
pub struct SourceMap {
    files: Vec<SourceFile>,
}

impl SourceMap {
    pub fn new() -> Self {
        Self { files: Vec::new() }
    }

    /// Register a new source file and return its id.
    pub fn add(&mut self, name: impl Into<Arc<str>>, content: impl Into<Arc<str>>) -> FileId {
        let id = FileId::new(self.files.len());
        self.files.push(SourceFile { id, name: name.into(), content: content.into() });
        id
    }

    pub fn get(&self, id: FileId) -> Option<&SourceFile> {
        self.files.get(id.index())
    }
}
