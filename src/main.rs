use std::io::{self, Write};
use std::process::ExitCode;

use rlox::{utils::get_args, vm::VM};

fn main() -> ExitCode {
  tracing_subscriber::fmt()
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .init();

  let args = get_args();

  match args.as_slice() {
    [] => {
      repl();
      ExitCode::SUCCESS
    }
    [path] => run_file(path),
    _ => {
      eprintln!("Usage: clox [path]");
      ExitCode::from(64)
    }
  }
}

/// Interactive REPL: prompt, read one line, interpret it, repeat until EOF.
fn repl() {
  let mut vm = VM::new();
  let mut line = String::new();

  loop {
    print!("> ");
    if io::stdout().flush().is_err() {
      break;
    }

    line.clear();
    match io::stdin().read_line(&mut line) {
      Ok(0) => {
        println!();
        break;
      }
      Ok(_) => {
        tracing::trace!(source = %line.trim_end(), "repl line");
        let _ = vm.interpret(&line);
      }
      Err(_) => break,
    }
  }
}

/// Read a whole file and interpret it, translating the outcome into the
/// appropriate process exit code.
fn run_file(path: &str) -> ExitCode {
  let source = match std::fs::read_to_string(path) {
    Ok(source) => source,
    Err(_) => {
      eprintln!("Could not open file \"{}\".", path);
      return ExitCode::from(74);
    }
  };

  let mut vm = VM::new();
  match vm.interpret(&source) {
    Ok(()) => ExitCode::SUCCESS,
    Err(rlox::vm::InterpretError::Compile(_)) => ExitCode::from(65),
    Err(rlox::vm::InterpretError::Runtime(_)) => ExitCode::from(70),
  }
}
