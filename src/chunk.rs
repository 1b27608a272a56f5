//! # Chunk
//!
//! A module which represents a sequence of bytecode, together with its
//! dependent components: the parallel line table and the constant pool.

use crate::value::{Value, ValueArray};
use enum_repr::EnumFromU8;

/// ## OpCode
///
/// The instruction set this core supports. Every opcode besides
/// `Constant` is a single byte; `Constant` carries one inline byte operand
/// (a constant-pool index).
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumFromU8)]
pub enum OpCode {
  Constant,
  Add,
  Subtract,
  Multiply,
  Divide,
  Negate,
  Return,
}

/// ## Chunk
///
/// A struct which represents a self-contained compiled unit: bytecode plus
/// a parallel line table and a constant pool.
#[derive(Debug, Default, Clone)]
pub struct Chunk {
  pub(crate) code: Vec<u8>,
  pub(crate) lines: Vec<usize>,
  pub(crate) constants: ValueArray,
}

impl Chunk {
  pub fn new() -> Self {
    Self::default()
  }

  /// Append a byte (an opcode or an inline operand), tagging it with the
  /// source line that produced it. `code` and `lines` always grow in
  /// lockstep.
  pub fn write_chunk(&mut self, byte: u8, line: usize) {
    self.code.push(byte);
    self.lines.push(line);
  }

  /// Add a constant to the pool, returning its index. Indices returned
  /// remain valid for the chunk's lifetime.
  pub fn add_constant(&mut self, value: Value) -> usize {
    self.constants.write(value)
  }

  pub fn code_len(&self) -> usize {
    self.code.len()
  }

  pub fn code(&self) -> &[u8] {
    &self.code
  }

  pub fn lines(&self) -> &[usize] {
    &self.lines
  }

  pub fn constants(&self) -> &ValueArray {
    &self.constants
  }

  /// Reset to the empty state, ready for reuse.
  pub fn free(&mut self) {
    self.code.clear();
    self.lines.clear();
    self.constants.clear();
  }
}
