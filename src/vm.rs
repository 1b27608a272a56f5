//! # VM
//!
//! ## Based on Stack
//!
//! The VM is the core of the interpreter. It is responsible for executing
//! the bytecode produced by the compiler, one instruction at a time.

#[cfg(feature = "debug_trace_execution")]
use crate::debug::Debug;
use crate::{
  chunk::{Chunk, OpCode},
  common::STACK_MAX,
  compiler,
  value::Value,
};

use thiserror::Error;

/// ## InterpretError
///
/// The two ways a run can fail to reach `OP_RETURN`. `Display` renders the
/// diagnostic text; the same text has already been written to stderr once,
/// at the point of detection, for whichever phase produced it.
#[derive(Debug, Clone, Error)]
pub enum InterpretError {
  #[error("{0}")]
  Compile(String),
  #[error("{0}")]
  Runtime(String),
}

/// ## VM
///
/// Owns the chunk currently executing, the instruction pointer, and the
/// operand stack. A fresh `VM` is constructed for each `interpret` call.
#[derive(Debug, Default)]
pub struct VM {
  pub(crate) chunk: Chunk,
  pub(crate) ip: usize,
  pub(crate) stack: Vec<Value>,
}

impl VM {
  pub fn new() -> Self {
    Self {
      chunk: Chunk::new(),
      ip: 0,
      stack: Vec::with_capacity(STACK_MAX),
    }
  }

  /// Compile `source` into a fresh chunk, then run it.
  pub fn interpret(&mut self, source: &str) -> Result<(), InterpretError> {
    let mut chunk = Chunk::new();

    if let Err(diagnostic) = compiler::compile(source, &mut chunk) {
      return Err(InterpretError::Compile(diagnostic));
    }

    #[cfg(feature = "debug_print_code")]
    {
      use crate::debug::Debug;
      chunk.disassemble("code");
    }

    self.rebind(chunk);
    self.run()
  }
}

impl VM {
  fn push(&mut self, value: Value) -> Result<(), InterpretError> {
    if self.stack.len() >= STACK_MAX {
      return Err(InterpretError::Runtime("Stack overflow.".to_owned()));
    }
    self.stack.push(value);
    Ok(())
  }

  fn pop(&mut self) -> Result<Value, InterpretError> {
    self
      .stack
      .pop()
      .ok_or_else(|| InterpretError::Runtime("Operate on an empty stack.".to_owned()))
  }

  fn unary_op<F>(&mut self, op: F) -> Result<(), InterpretError>
  where
    F: FnOnce(Value) -> Result<Value, InterpretError>,
  {
    let value = self.pop()?;
    let result = op(value)?;
    self.push(result)
  }

  fn binary_op<F>(&mut self, op: F) -> Result<(), InterpretError>
  where
    F: FnOnce(Value, Value) -> Result<Value, InterpretError>,
  {
    let b = self.pop()?;
    let a = self.pop()?;
    let result = op(a, b)?;
    self.push(result)
  }
}

impl VM {
  fn read_byte(&mut self) -> u8 {
    let byte = self.chunk.code[self.ip];
    self.ip += 1;
    byte
  }

  fn read_constant(&mut self) -> Value {
    let index = self.read_byte();
    *self.chunk.constants.get(index as usize).unwrap()
  }
}

impl VM {
  #[cfg(feature = "debug_trace_execution")]
  fn disassemble_instruction(&self) {
    self.chunk.disassemble_instruction(self.ip);
  }

  #[cfg(feature = "debug_trace_stack")]
  pub fn trace_stack(&self) {
    print!("        | [");
    for (i, value) in self.stack.iter().enumerate() {
      if i != 0 {
        print!(", ");
      }
      print!("{}", value);
    }
    println!("]");
  }
}

impl VM {
  pub fn run(&mut self) -> Result<(), InterpretError> {
    loop {
      #[cfg(feature = "debug_trace_stack")]
      self.trace_stack();
      #[cfg(feature = "debug_trace_execution")]
      self.disassemble_instruction();

      match self.run_one_step() {
        Ok(true) => return Ok(()),
        Ok(false) => continue,
        Err(err) => {
          let message = match &err {
            InterpretError::Runtime(message) => message.clone(),
            InterpretError::Compile(message) => message.clone(),
          };
          return self.runtime_error(message);
        }
      }
    }
  }

  /// Execute one instruction. Returns `Ok(true)` once `OP_RETURN` has run
  /// (the caller should stop looping), `Ok(false)` otherwise.
  #[inline]
  fn run_one_step(&mut self) -> Result<bool, InterpretError> {
    let instruction = OpCode::from(self.read_byte());
    tracing::trace!(ip = self.ip - 1, ?instruction, "dispatch");
    match instruction {
      OpCode::Constant => {
        let constant = self.read_constant();
        self.push(constant)?;
      }
      OpCode::Add => self.binary_op(|a, b| a + b)?,
      OpCode::Subtract => self.binary_op(|a, b| a - b)?,
      OpCode::Multiply => self.binary_op(|a, b| a * b)?,
      OpCode::Divide => self.binary_op(|a, b| a / b)?,
      OpCode::Negate => self.unary_op(|v| -v)?,
      OpCode::Return => {
        let value = self.pop()?;
        println!("{}", value);
        return Ok(true);
      }
    }
    Ok(false)
  }
}

impl VM {
  /// Report a runtime error: write the two-line diagnostic to stderr,
  /// clear the stack (it's in an undefined state relative to the chunk
  /// now), and hand the error back to the caller.
  fn runtime_error(&mut self, message: String) -> Result<(), InterpretError> {
    let inst_index = self.ip - 1;
    let line = self.chunk.lines[inst_index];
    eprintln!("{}", message);
    eprintln!("[line {}] in script", line);

    self.stack.clear();

    Err(InterpretError::Runtime(message))
  }
}

impl VM {
  pub fn free(&mut self) {
    self.chunk.free();
    self.stack.clear();
  }

  /// Link the virtual machine to a newly compiled chunk, resetting the
  /// instruction pointer.
  pub fn rebind(&mut self, chunk: Chunk) {
    self.chunk = chunk;
    self.ip = 0;
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn run_source(source: &str) -> Result<(), InterpretError> {
    let mut vm = VM::new();
    vm.interpret(source)
  }

  #[test]
  fn arithmetic_precedence_and_grouping() {
    assert!(run_source("(-1 + 2) * 3 - -4").is_ok());
  }

  #[test]
  fn division_by_zero_is_not_a_runtime_error() {
    assert!(run_source("1 / 0").is_ok());
  }

  #[test]
  fn unterminated_expression_is_a_compile_error() {
    let err = run_source("1 +").unwrap_err();
    assert!(matches!(err, InterpretError::Compile(_)));
  }

  #[test]
  fn successful_run_leaves_the_stack_empty() {
    let mut vm = VM::new();
    vm.interpret("1 + 2").unwrap();
    assert!(vm.stack.is_empty());
  }

  #[test]
  fn stack_underflow_on_hand_assembled_chunk_is_a_runtime_error() {
    let mut vm = VM::new();
    let mut chunk = Chunk::new();
    chunk.write_chunk(OpCode::Add as u8, 1);
    chunk.write_chunk(OpCode::Return as u8, 1);
    vm.rebind(chunk);
    let err = vm.run().unwrap_err();
    assert!(matches!(err, InterpretError::Runtime(_)));
  }
}
