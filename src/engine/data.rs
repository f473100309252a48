use serde_derive::{Deserialize, Serialize};
use std::fmt::{Display, Error as FmtError, Formatter};
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Eq, Hash, PartialEq, Serialize, Deserialize, Clone)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
  #[must_use]
  pub fn new() -> Self {
    Self(Uuid::new_v4())
  }
}

impl Default for TaskId {
  fn default() -> Self {
    Self::new()
  }
}

impl Display for TaskId {
  fn fmt(&self, formatter: &mut Formatter<'_>) -> Result<(), FmtError> {
    self.0.fmt(formatter)
  }
}

impl FromStr for TaskId {
  type Err = uuid::Error;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    s.parse().map(Self)
  }
}

/// A single to-do entry. The id is fixed at creation; tasks are addressed
/// by their position in the list, never by id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
  pub id: TaskId,
  pub title: String,
  #[serde(rename = "isCompleted")]
  pub completed: bool,
}

impl Task {
  #[must_use]
  pub fn new(title: String) -> Self {
    Self {
      id: TaskId::new(),
      title,
      completed: false,
    }
  }
}

impl Display for Task {
  fn fmt(&self, formatter: &mut Formatter<'_>) -> Result<(), FmtError> {
    formatter.write_str(&self.title)
  }
}
