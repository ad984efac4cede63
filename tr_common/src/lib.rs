#![doc(
  html_playground_url = "https://play.rust-lang.org/",
  test(no_crate_inject, attr(deny(warnings)))
)]

#[macro_use]
extern crate log;

use log::LevelFilter;

pub mod block;
pub mod config;
pub mod item;
pub mod math;
pub mod util;
pub mod version;

/// Initializes logger. Might do more things in the future.
pub fn init(name: &str) { init_with_level(name, LevelFilter::Info) }

/// Initializes the logger, showing every message at or below `level`. If a
/// logger has already been installed, this does nothing.
pub fn init_with_level(_name: &str, level: LevelFilter) {
  use log::{Level, Metadata, Record};

  struct Logger;

  impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool { metadata.level() <= log::max_level() }

    fn log(&self, record: &Record) {
      if self.enabled(record.metadata()) {
        let now = chrono::Local::now();
        print!("{} ", now.format("%Y-%m-%d %H:%M:%S%.3f"));
        #[cfg(debug_assertions)]
        {
          if let Some(path) = record.module_path() {
            print!("{path}");
          }
          if let Some(line) = record.line() {
            print!(":{line}");
          }
          print!(" ");
        }
        match record.level() {
          Level::Trace => print!("[\x1b[36mTRACE\x1b[0m]"),
          Level::Debug => print!("[\x1b[34mDEBUG\x1b[0m]"),
          Level::Info => print!("[\x1b[32mINFO\x1b[0m]"),
          Level::Warn => print!("[\x1b[33mWARN\x1b[0m]"),
          Level::Error => print!("[\x1b[31m\x1b[1mERROR\x1b[0m]"),
        }
        println!(" {}", record.args());
      }
    }

    fn flush(&self) {}
  }

  static LOGGER: Logger = Logger;
  // The host may have installed its own logger already, which is fine.
  if log::set_logger(&LOGGER).is_ok() {
    log::set_max_level(level);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn init_twice() {
    init_with_level("test", LevelFilter::Debug);
    // Already installed, so this keeps the first level.
    init("test");
    assert_eq!(log::max_level(), LevelFilter::Debug);
    info!("logger is installed");
  }
}
