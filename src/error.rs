use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeadDropError {
    #[error("Note not found")]
    NoteNotFound,

    #[error("Failed to write config file atomically")]
    AtomicWriteFailed(#[source] std::io::Error),

    #[error("Cannot determine home directory")]
    HomeDirNotFound,

    #[error("Server error: {0}")]
    Server(String),
}
