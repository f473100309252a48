#![warn(clippy::pedantic, clippy::cargo, clippy::nursery)]
#![allow(clippy::multiple_crate_versions)]

use std::error::Error;

use todos::cli::cli;

fn main() -> Result<(), Box<dyn Error>> {
  cli()
}
