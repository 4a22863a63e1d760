use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot draw questions from an empty pool")]
    EmptyPool,

    #[error("failed to decode word list {leaf}: {source}")]
    Decode {
        leaf: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot read word list {leaf}: {reason}")]
    Unreadable { leaf: String, reason: String },

    #[error("select at least {required} items to practice (selected {found})")]
    InsufficientTargets { found: usize, required: usize },

    #[error("unknown selection node: {0}")]
    UnknownNode(String),

    #[error("selection node already exists: {0}")]
    DuplicateNode(String),

    #[error("not a leaf node: {0}")]
    NotALeaf(String),

    #[error("not a group node: {0}")]
    NotAGroup(String),

    #[error("selection is locked while everything is selected")]
    SelectionLocked,

    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("HTTP error: {0}")]
    Http(Box<reqwest::Error>),

    #[error("unexpected HTTP status {0}")]
    HttpStatus(u16),

    #[error("directory {0} not found in vocabulary archive")]
    LibraryNotFound(String),
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Error::Http(Box::new(error))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
