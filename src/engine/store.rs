use super::{StoreError, Task};

/// Persistence for the whole task list.
pub trait Store {
  /// Replaces any previously saved list with `tasks`.
  fn save(&mut self, tasks: &[Task]) -> Result<(), StoreError>;

  /// Returns the last saved list, or `None` when nothing usable was saved.
  /// Read failures are reported as diagnostics and yield `None`.
  fn load(&self) -> Option<Vec<Task>>;
}

