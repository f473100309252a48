mod command;

use clap::Parser;
use std::error::Error;
use std::io::{self, stdin, stdout, BufRead, Write};
use std::path::PathBuf;

use crate::engine::{EngineError, FileStore, MemStore, Store, Task, TaskManager};
use crate::logging;

pub use command::Command;

#[derive(Debug, Parser)]
#[command(name = "todos", version, about = "Keep a list of things to do")]
struct Opts {
  #[arg(long, short, conflicts_with = "memory")]
  /// File to read tasks from and save them to. Defaults to todos.json in
  /// the user's data directory.
  file: Option<PathBuf>,

  #[arg(long, short)]
  /// Keep tasks in memory only, they are gone when the session ends
  memory: bool,
}

pub fn cli() -> Result<(), Box<dyn Error>> {
  let opts = Opts::parse();
  logging::init();
  if opts.memory {
    session(MemStore::new())
  } else {
    session(FileStore::new(
      opts.file.unwrap_or_else(FileStore::default_path),
    ))
  }
}

fn session<S: Store>(store: S) -> Result<(), Box<dyn Error>> {
  let mut manager = TaskManager::new(store);
  let stdin = stdin();
  run(&mut manager, stdin.lock(), &mut stdout())
}

/// Reads commands from `input` until `exit` or the end of input.
pub fn run<S: Store, R: BufRead, W: Write>(
  manager: &mut TaskManager<S>,
  mut input: R,
  output: &mut W,
) -> Result<(), Box<dyn Error>> {
  let vocabulary = Command::vocabulary();
  loop {
    writeln!(output, "What would you like to do? ({vocabulary}): ")?;
    output.flush()?;
    let Some(line) = read_line(&mut input)? else {
      return Ok(());
    };
    if line.trim().is_empty() {
      continue;
    }
    let Some(command) = Command::parse(&line) else {
      writeln!(
        output,
        "'{}' is not a command, please choose one of: {vocabulary}",
        line.trim()
      )?;
      continue;
    };
    match command {
      Command::Exit => return Ok(()),
      Command::List => list_tasks(manager, output)?,
      Command::Add => {
        writeln!(output, "What would you like to add?")?;
        output.flush()?;
        let Some(title) = read_line(&mut input)? else {
          return Ok(());
        };
        add_task(manager, output, &title)?;
      }
      Command::Toggle => {
        writeln!(output, "Which item status do you want to switch?")?;
        output.flush()?;
        let Some(position) = read_line(&mut input)? else {
          return Ok(());
        };
        toggle_task(manager, output, &position)?;
      }
      Command::Delete => {
        writeln!(output, "Which item do you want to remove?")?;
        output.flush()?;
        let Some(position) = read_line(&mut input)? else {
          return Ok(());
        };
        delete_task(manager, output, &position)?;
      }
    }
  }
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
  let mut line = String::new();
  if input.read_line(&mut line)? == 0 {
    return Ok(None);
  }
  Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_owned()))
}

fn parse_position(input: &str) -> Result<i64, EngineError> {
  let input = input.trim();
  input
    .parse()
    .map_err(|_| EngineError::UnparseablePosition(input.to_owned()))
}

fn list_tasks<S: Store, W: Write>(
  manager: &TaskManager<S>,
  output: &mut W,
) -> Result<(), Box<dyn Error>> {
  writeln!(output, "Your To Do's")?;
  for (position, task) in manager.list() {
    print_task(output, position, task)?;
  }
  Ok(())
}

fn print_task<W: Write>(output: &mut W, position: usize, task: &Task) -> io::Result<()> {
  let mark = if task.completed { "✅" } else { "❌" };
  writeln!(output, "{position}. {mark} {task}")
}

fn add_task<S: Store, W: Write>(
  manager: &mut TaskManager<S>,
  output: &mut W,
  title: &str,
) -> Result<(), Box<dyn Error>> {
  match manager.add(title) {
    Ok(task) => writeln!(output, "Task added: {task}")?,
    Err(e @ EngineError::Unsaved(_)) => report(output, &e)?,
    Err(e) => writeln!(output, "Task not added: {e}")?,
  }
  Ok(())
}

fn toggle_task<S: Store, W: Write>(
  manager: &mut TaskManager<S>,
  output: &mut W,
  input: &str,
) -> Result<(), Box<dyn Error>> {
  match parse_position(input).and_then(|position| manager.toggle(position)) {
    Ok(task) if task.completed => writeln!(output, "Task done: {task}")?,
    Ok(task) => writeln!(output, "Task open again: {task}")?,
    Err(e) => report(output, &e)?,
  }
  Ok(())
}

fn delete_task<S: Store, W: Write>(
  manager: &mut TaskManager<S>,
  output: &mut W,
  input: &str,
) -> Result<(), Box<dyn Error>> {
  match parse_position(input).and_then(|position| manager.delete(position)) {
    Ok(task) => writeln!(output, "Task deleted: {task}")?,
    Err(e) => report(output, &e)?,
  }
  Ok(())
}

fn report<W: Write>(output: &mut W, error: &EngineError) -> io::Result<()> {
  match error {
    EngineError::Unsaved(_) => writeln!(output, "Warning: {error}"),
    _ => writeln!(output, "Sorry, {error}"),
  }
}
