use tracing::debug;

use super::{EngineError, Store, Task};

/// Owns the task list for a session. The list in memory is authoritative;
/// every change is written through to the bound store, and a failed write
/// leaves the change in place.
#[derive(Debug)]
pub struct TaskManager<S: Store> {
  tasks: Vec<Task>,
  store: S,
}

impl<S: Store> TaskManager<S> {
  #[must_use]
  pub fn new(store: S) -> Self {
    let tasks = store.load().unwrap_or_default();
    debug!(count = tasks.len(), "starting session");
    Self { tasks, store }
  }

  pub fn add(&mut self, title: &str) -> Result<&Task, EngineError> {
    let title = title.trim();
    if title.is_empty() {
      return Err(EngineError::EmptyTitle);
    }
    self.tasks.push(Task::new(title.into()));
    self.persist()?;
    Ok(&self.tasks[self.tasks.len() - 1])
  }

  /// Tasks paired with their 1-based positions, in display order.
  pub fn list(&self) -> impl Iterator<Item = (usize, &Task)> + '_ {
    self.tasks.iter().enumerate().map(|(i, task)| (i + 1, task))
  }

  pub fn toggle(&mut self, position: i64) -> Result<&Task, EngineError> {
    let index = self.index(position)?;
    let task = &mut self.tasks[index];
    task.completed = !task.completed;
    self.persist()?;
    Ok(&self.tasks[index])
  }

  /// Removes the task at `position`; later tasks move up by one.
  pub fn delete(&mut self, position: i64) -> Result<Task, EngineError> {
    let index = self.index(position)?;
    let task = self.tasks.remove(index);
    self.persist()?;
    Ok(task)
  }

  #[must_use]
  pub fn get(&self, position: i64) -> Option<&Task> {
    self.index(position).ok().map(|index| &self.tasks[index])
  }

  #[must_use]
  pub fn tasks(&self) -> &[Task] {
    &self.tasks
  }

  #[must_use]
  pub fn len(&self) -> usize {
    self.tasks.len()
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.tasks.is_empty()
  }

  // This is non-mutable
  pub const fn store(&self) -> &S {
    &self.store
  }

  fn index(&self, position: i64) -> Result<usize, EngineError> {
    usize::try_from(position)
      .ok()
      .filter(|p| (1..=self.tasks.len()).contains(p))
      .map(|p| p - 1)
      .ok_or(EngineError::InvalidPosition {
        position,
        len: self.tasks.len(),
      })
  }

  fn persist(&mut self) -> Result<(), EngineError> {
    self.store.save(&self.tasks).map_err(|e| {
      debug!("keeping unsaved changes: {e}");
      EngineError::from(e)
    })
  }
}
