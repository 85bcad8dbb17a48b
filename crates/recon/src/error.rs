use std::fmt;

#[derive(Debug)]
pub enum ReconError {
    /// CSV read error while loading an input table.
    Csv { file: String, message: String },
    /// CSV write error while rendering an output table.
    Render(String),
}

impl fmt::Display for ReconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv { file, message } => write!(f, "cannot parse {file}: {message}"),
            Self::Render(msg) => write!(f, "cannot render output: {msg}"),
        }
    }
}

impl std::error::Error for ReconError {}
