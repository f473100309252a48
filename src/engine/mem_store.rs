use tracing::debug;

use super::{Store, StoreError, Task};

/// Keeps the last saved list for the lifetime of the process only.
#[derive(Debug, Default)]
pub struct MemStore {
  tasks: Vec<Task>,
}

impl MemStore {
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }
}

impl Store for MemStore {
  fn save(&mut self, tasks: &[Task]) -> Result<(), StoreError> {
    self.tasks = tasks.to_vec();
    debug!(count = self.tasks.len(), "saved tasks in memory");
    Ok(())
  }

  // An empty saved list is reported as absent, same as never saved.
  fn load(&self) -> Option<Vec<Task>> {
    if self.tasks.is_empty() {
      None
    } else {
      Some(self.tasks.clone())
    }
  }
}

#[cfg(test)]
mod tests {
  use super::MemStore;
  use crate::engine::{Store, Task};

  #[test]
  fn nothing_saved_is_absent() {
    assert_eq!(MemStore::new().load(), None);
  }

  #[test]
  fn load_returns_a_copy_of_the_last_save() {
    let mut store = MemStore::new();
    let mut tasks = vec![Task::new("one".into()), Task::new("two".into())];
    store.save(&tasks).unwrap();
    tasks[0].completed = true;
    let loaded = store.load().unwrap();
    assert_eq!(loaded.len(), 2);
    assert!(!loaded[0].completed);

    store.save(&tasks[1..]).unwrap();
    assert_eq!(store.load().unwrap(), tasks[1..].to_vec());
  }

  #[test]
  fn saving_an_empty_list_loads_as_absent() {
    let mut store = MemStore::new();
    store.save(&[Task::new("one".into())]).unwrap();
    store.save(&[]).unwrap();
    assert_eq!(store.load(), None);
  }
}
