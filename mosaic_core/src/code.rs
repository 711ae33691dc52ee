//! File-level descriptors exchanged with the writer pipeline.

use std::fmt;

/// Kind of source file a generator wants its output written as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FileType {
    /// Plain Objective-C (`.m`).
    ObjectiveC,
    /// Objective-C++ (`.mm`), for generated code that calls into C++.
    ObjectiveCpp,
}

impl FileType {
    /// Implementation-file extension for this file type.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::ObjectiveC => "m",
            Self::ObjectiveCpp => "mm",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// One file handed to the external writer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileWriteRequest {
    /// File name, extension included.
    pub name: String,
    /// Full file content.
    pub content: String,
}

impl FileWriteRequest {
    /// Create a write request.
    #[must_use]
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_type_extension() {
        assert_eq!(FileType::ObjectiveC.extension(), "m");
        assert_eq!(FileType::ObjectiveCpp.extension(), "mm");
    }

    #[test]
    fn test_file_type_display() {
        assert_eq!(FileType::ObjectiveC.to_string(), "m");
    }

    #[test]
    fn test_write_request_construction() {
        let request = FileWriteRequest::new("Shape.m", "// generated");
        assert_eq!(request.name, "Shape.m");
        assert_eq!(request.content, "// generated");
    }
}
