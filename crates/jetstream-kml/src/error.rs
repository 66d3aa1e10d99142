use thiserror::Error;

pub type Result<T> = std::result::Result<T, KmlError>;

#[derive(Debug, Error)]
pub enum KmlError {
    #[error("XML error: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("missing element: {0}")]
    MissingElement(String),

    #[error("malformed coordinates '{0}'")]
    Coordinates(String),

    #[error("malformed timestamp '{text}'")]
    Timestamp {
        text: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("trail segment {index} has {found} points, expected 2")]
    SegmentPoints { index: usize, found: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("archive error: {0}")]
    Zip(#[from] zip::result::ZipError),
}
