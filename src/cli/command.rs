use clap::ValueEnum;

/// What can be typed at the main prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Command {
  /// Add a new task
  Add,
  /// List all tasks
  List,
  /// Mark a task as done, or as open again
  Toggle,
  /// Remove a task
  Delete,
  /// End the session
  Exit,
}

impl Command {
  /// Case-insensitive; surrounding whitespace is ignored.
  #[must_use]
  pub fn parse(input: &str) -> Option<Self> {
    <Self as ValueEnum>::from_str(input.trim(), true).ok()
  }

  #[must_use]
  pub fn vocabulary() -> String {
    Self::value_variants()
      .iter()
      .filter_map(ValueEnum::to_possible_value)
      .map(|value| value.get_name().to_owned())
      .collect::<Vec<_>>()
      .join(", ")
  }
}
