use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("invalid zoom scale: {scale}")]
    InvalidZoom { scale: f32 },

    #[error("line not found: {0}")]
    TargetNotFound(u64),

    #[error("no image loaded")]
    NoImageLoaded,

    #[error("a gesture is in progress")]
    GestureInProgress,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}
