//! Bytecode emission helpers.

use super::Parser;
use crate::chunk::OpCode;
use crate::value::Value;

impl<'src, 'chunk> Parser<'src, 'chunk> {
  /// Append a single byte to the chunk, tagged with the line of the token
  /// that produced it.
  pub(crate) fn emit_byte(&mut self, byte: u8) {
    self.chunk.write_chunk(byte, self.previous.line);
  }

  /// Append a sequence of bytes, in order.
  pub(crate) fn emit_bytes(&mut self, bytes: &[u8]) {
    for &byte in bytes {
      self.emit_byte(byte);
    }
  }

  pub(crate) fn emit_return(&mut self) {
    self.emit_byte(OpCode::Return as u8);
  }

  /// Emit an `OP_CONSTANT` followed by its pool index.
  pub(crate) fn emit_constant(&mut self, value: Value) {
    let constant_index = self.make_constant(value);
    self.emit_bytes(&[OpCode::Constant as u8, constant_index]);
  }

  pub(crate) fn end_compiler(&mut self) {
    self.emit_return();
  }

  /// Add a constant to the chunk's pool, returning its index as a `u8`.
  /// A chunk's constant pool can only hold 256 entries since `OP_CONSTANT`
  /// addresses it with a one-byte operand.
  pub(crate) fn make_constant(&mut self, value: Value) -> u8 {
    let index = self.chunk.add_constant(value);
    if index > u8::MAX as usize {
      self.error("Too many constants in one chunk.".to_owned());
      return 0;
    }
    index as u8
  }
}
