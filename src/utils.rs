//! # Utils
//!
//! This module contains utility components (functions, traits, etc.) for the project.

#![allow(dead_code)]

/// A trait for initializing a type.
pub trait Init: Default {
  fn init() -> Self {
    Self::default()
  }
}

/// Get the command line arguments.
///
/// We have to rewrite this, as [`std::env::args`]'s first argument
/// is always the path to the executable.
pub fn get_args() -> Vec<String> {
  use std::env::args;
  let args = args().collect::<Vec<_>>();
  let (_, args) = args.split_first().unwrap();
  args.to_vec()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[derive(Default)]
  struct Widget {
    count: usize,
  }

  impl Init for Widget {}

  #[test]
  fn init_uses_the_default_impl() {
    assert_eq!(Widget::init().count, 0);
  }
}
