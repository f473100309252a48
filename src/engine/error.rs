use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures of a [`Store`](super::Store) backend.
#[derive(Debug, Error)]
pub enum StoreError {
  #[error("could not access {}: {source}", .path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("could not encode tasks: {0}")]
  Encode(#[source] serde_json::Error),

  #[error("could not decode {}: {source}", .path.display())]
  Decode {
    path: PathBuf,
    #[source]
    source: serde_json::Error,
  },
}

impl StoreError {
  pub(super) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
    Self::Io {
      path: path.into(),
      source,
    }
  }

  /// Whether the backing data simply does not exist yet.
  #[must_use]
  pub fn is_not_found(&self) -> bool {
    matches!(self, Self::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
  }
}

/// Outcome of a rejected or partially applied task operation.
#[derive(Debug, Error)]
pub enum EngineError {
  #[error("a task needs a title")]
  EmptyTitle,

  #[error("choice {position} does not exist, the list has {len} task(s)")]
  InvalidPosition { position: i64, len: usize },

  #[error("'{0}' is not a valid choice, please enter a number")]
  UnparseablePosition(String),

  /// The change was applied in memory but persisting it failed.
  #[error("the change was kept but could not be saved: {0}")]
  Unsaved(#[from] StoreError),
}
