use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::{Store, StoreError, Task};

pub const FILE_NAME: &str = "todos.json";
const APP_DIR: &str = "todos";

/// Keeps the task list as a JSON array in a single file. Every save
/// replaces the whole file.
#[derive(Debug, Clone)]
pub struct FileStore {
  path: PathBuf,
}

impl FileStore {
  #[must_use]
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }

  /// The per-user location, `<data dir>/todos/todos.json`.
  #[must_use]
  pub fn default_path() -> PathBuf {
    dirs::data_dir()
      .map(|dir| dir.join(APP_DIR))
      .or_else(dirs::home_dir)
      .unwrap_or_else(|| PathBuf::from("."))
      .join(FILE_NAME)
  }

  #[must_use]
  pub fn path(&self) -> &Path {
    &self.path
  }

  pub fn try_load(&self) -> Result<Vec<Task>, StoreError> {
    let contents = fs::read(&self.path).map_err(|e| StoreError::io(&self.path, e))?;
    serde_json::from_slice(&contents).map_err(|source| StoreError::Decode {
      path: self.path.clone(),
      source,
    })
  }

  fn temp_path(&self) -> PathBuf {
    let mut name = self
      .path
      .file_name()
      .map_or_else(|| FILE_NAME.into(), ToOwned::to_owned);
    name.push(".tmp");
    self.path.with_file_name(name)
  }
}

impl Store for FileStore {
  fn save(&mut self, tasks: &[Task]) -> Result<(), StoreError> {
    let contents = serde_json::to_vec(tasks).map_err(StoreError::Encode)?;
    if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
      fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
    }
    let tmp_path = self.temp_path();
    fs::write(&tmp_path, contents).map_err(|e| StoreError::io(&tmp_path, e))?;
    if let Err(e) = fs::rename(&tmp_path, &self.path) {
      let _ = fs::remove_file(&tmp_path);
      return Err(StoreError::io(&self.path, e));
    }
    info!(path = %self.path.display(), count = tasks.len(), "saved tasks");
    Ok(())
  }

  fn load(&self) -> Option<Vec<Task>> {
    match self.try_load() {
      Ok(tasks) => {
        info!(path = %self.path.display(), count = tasks.len(), "loaded tasks");
        Some(tasks)
      }
      Err(e) if e.is_not_found() => {
        debug!(path = %self.path.display(), "no saved tasks yet");
        None
      }
      Err(e) => {
        warn!("failed to load tasks, starting with an empty list: {e}");
        None
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::{FileStore, FILE_NAME};
  use crate::engine::{Store, StoreError, Task};
  use regex::Regex;
  use std::fs;

  fn sample() -> Vec<Task> {
    let mut tasks = vec![
      Task::new("buy milk".into()),
      Task::new("call mom".into()),
      Task::new("water plants".into()),
    ];
    tasks[1].completed = true;
    tasks
  }

  #[test]
  fn round_trips_a_list() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::new(dir.path().join(FILE_NAME));
    let tasks = sample();
    store.save(&tasks).unwrap();
    assert_eq!(store.load().unwrap(), tasks);
  }

  #[test]
  fn round_trips_an_empty_list() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::new(dir.path().join(FILE_NAME));
    store.save(&[]).unwrap();
    assert_eq!(store.load(), Some(vec![]));
  }

  #[test]
  fn writes_a_json_array() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(FILE_NAME);
    let mut store = FileStore::new(&path);
    store.save(&sample()[..1]).unwrap();
    let written = fs::read_to_string(&path).unwrap();
    let r = Regex::new(
      r#"^\[\{"id":"[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}","title":"buy milk","isCompleted":false\}\]$"#,
    )
    .unwrap();
    assert!(r.is_match(&written), "{written}");
  }

  #[test]
  fn save_replaces_previous_content_and_leaves_no_temp_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::new(dir.path().join(FILE_NAME));
    store.save(&sample()).unwrap();
    let last = sample().split_off(2);
    store.save(&last).unwrap();
    assert_eq!(store.load().unwrap(), last);
    let entries: Vec<_> = fs::read_dir(dir.path())
      .unwrap()
      .map(|entry| entry.unwrap().file_name().into_string().unwrap())
      .collect();
    assert_eq!(entries, vec![FILE_NAME.to_owned()]);
  }

  #[test]
  fn save_creates_missing_directories() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::new(dir.path().join("nested").join("deeper").join(FILE_NAME));
    store.save(&sample()).unwrap();
    assert_eq!(store.load().unwrap().len(), 3);
  }

  #[test]
  fn missing_file_is_absent() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().join(FILE_NAME));
    assert!(store.try_load().unwrap_err().is_not_found());
    assert_eq!(store.load(), None);
  }

  #[test]
  fn malformed_file_is_absent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(FILE_NAME);
    fs::write(&path, "[{\"title\": 3}").unwrap();
    let store = FileStore::new(&path);
    assert!(matches!(store.try_load(), Err(StoreError::Decode { .. })));
    assert_eq!(store.load(), None);
  }

  #[test]
  fn unwritable_target_reports_failure() {
    let dir = tempfile::tempdir().unwrap();
    // A directory where the file should be makes the final rename fail.
    let path = dir.path().join(FILE_NAME);
    fs::create_dir(&path).unwrap();
    let mut store = FileStore::new(&path);
    assert!(matches!(store.save(&sample()), Err(StoreError::Io { .. })));
  }

  #[test]
  fn default_path_ends_with_file_name() {
    assert!(FileStore::default_path().ends_with(FILE_NAME));
  }
}
