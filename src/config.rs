use std::path::PathBuf;

/// Output settings handed to the external renderer and persistence layer.
///
/// Carried on every document and preserved by copies. Nothing here is
/// validated against the renderer's capability list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Output format, e.g. "pdf", "svg", "png".
    pub format: String,
    /// Layout engine, e.g. "dot", "neato".
    pub engine: String,
    /// Encoding of the written source file.
    pub encoding: String,
    /// Source file name. None = derived from the document name.
    pub filename: Option<String>,
    /// Directory the source file is written to. None = current directory.
    pub directory: Option<PathBuf>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            format: "pdf".to_string(),
            engine: "dot".to_string(),
            encoding: "utf-8".to_string(),
            filename: None,
            directory: None,
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    pub fn with_engine(mut self, engine: impl Into<String>) -> Self {
        self.engine = engine.into();
        self
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    pub fn with_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    /// Path of the source file: `directory/filename`, where a missing
    /// filename falls back to `<fallback_stem>.gv`.
    pub fn filepath(&self, fallback_stem: &str) -> PathBuf {
        let filename = self
            .filename
            .clone()
            .unwrap_or_else(|| format!("{fallback_stem}.gv"));
        match &self.directory {
            Some(dir) => dir.join(filename),
            None => PathBuf::from(filename),
        }
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_config.rs"]
mod tests;
