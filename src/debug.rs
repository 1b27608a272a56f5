//! # Debug
//!
//! Human-oriented disassembly of a `Chunk`, used by the `debug_print_code`
//! and `debug_trace_execution` features.

use crate::chunk::{Chunk, OpCode};

pub trait Debug {
  /// Disassemble every instruction in the chunk under a header.
  fn disassemble(&self, name: &str);

  /// Disassemble a single instruction starting at `offset`, returning the
  /// offset of the next one.
  fn disassemble_instruction(&self, offset: usize) -> usize;

  fn simple_instruction(&self, name: &str, offset: usize) -> usize;

  fn constant_instruction(&self, name: &str, offset: usize) -> usize;

  fn line_number(&self, offset: usize) -> usize;
}

impl Debug for Chunk {
  fn disassemble(&self, name: &str) {
    println!("== {} ==", name);

    let mut offset = 0;
    while offset < self.code.len() {
      offset = self.disassemble_instruction(offset);
    }
  }

  fn disassemble_instruction(&self, offset: usize) -> usize {
    print!("{:04} ", offset);

    if offset > 0 && self.line_number(offset) == self.line_number(offset - 1) {
      print!("   | ");
    } else {
      print!("{:4} ", self.line_number(offset));
    }

    let instruction = self.code[offset];
    match OpCode::from(instruction) {
      OpCode::Constant => self.constant_instruction("OP_CONSTANT", offset),
      OpCode::Add => self.simple_instruction("OP_ADD", offset),
      OpCode::Subtract => self.simple_instruction("OP_SUBTRACT", offset),
      OpCode::Multiply => self.simple_instruction("OP_MULTIPLY", offset),
      OpCode::Divide => self.simple_instruction("OP_DIVIDE", offset),
      OpCode::Negate => self.simple_instruction("OP_NEGATE", offset),
      OpCode::Return => self.simple_instruction("OP_RETURN", offset),
    }
  }

  fn simple_instruction(&self, name: &str, offset: usize) -> usize {
    println!("{}", name);
    offset + 1
  }

  fn constant_instruction(&self, name: &str, offset: usize) -> usize {
    let constant_index = self.code[offset + 1];
    print!("{:<16} {:4} '", name, constant_index);
    match self.constants.get(constant_index as usize) {
      Some(value) => print!("{}", value),
      None => print!("?"),
    }
    println!("'");
    offset + 2
  }

  fn line_number(&self, offset: usize) -> usize {
    self.lines[offset]
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::value::Value;

  #[test]
  fn same_line_as_previous_instruction_collapses_to_a_bar() {
    let mut chunk = Chunk::new();
    let idx = chunk.add_constant(Value::Number(1.0));
    chunk.write_chunk(OpCode::Constant as u8, 1);
    chunk.write_chunk(idx as u8, 1);
    chunk.write_chunk(OpCode::Return as u8, 1);
    assert_eq!(chunk.line_number(0), chunk.line_number(2));
  }

  #[test]
  fn constant_instruction_advances_by_two() {
    let mut chunk = Chunk::new();
    let idx = chunk.add_constant(Value::Number(2.0));
    chunk.write_chunk(OpCode::Constant as u8, 1);
    chunk.write_chunk(idx as u8, 1);
    assert_eq!(chunk.disassemble_instruction(0), 2);
  }

  #[test]
  fn simple_instruction_advances_by_one() {
    let mut chunk = Chunk::new();
    chunk.write_chunk(OpCode::Return as u8, 1);
    assert_eq!(chunk.disassemble_instruction(0), 1);
  }
}
