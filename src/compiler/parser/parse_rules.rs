//! Prefix and infix parse actions wired into the rule table in `parser`.
//!
//! Each action has a two-argument `_adapter` wrapper matching the `ParseFn`
//! signature (`fn(&mut Parser, bool)`) the table stores function pointers
//! as, and a bare method that does the actual work. The `bool` parameter
//! (`can_assign`) is unused in this subset — there's no assignment target
//! to guard against — but is kept so the table stays uniform if assignment
//! is added later.

use super::{Parser, Precedence};
use crate::chunk::OpCode;
use crate::scanner::TokenType;

impl<'src, 'chunk> Parser<'src, 'chunk> {
  pub(crate) fn number_adapter(&mut self, _can_assign: bool) {
    self.number();
  }

  fn number(&mut self) {
    match self.previous.lexeme.parse::<f64>() {
      Ok(value) => self.emit_constant(value.into()),
      Err(_) => self.error("Failed to parse number.".to_owned()),
    }
  }

  pub(crate) fn unary_adapter(&mut self, _can_assign: bool) {
    self.unary();
  }

  fn unary(&mut self) {
    let operator_type = self.previous.token_type;

    // compile the operand
    self.parse_precedence(Precedence::Unary);

    match operator_type {
      TokenType::Minus => self.emit_byte(OpCode::Negate as u8),
      _ => unreachable!("unary parse action invoked for a non-unary token"),
    }
  }

  pub(crate) fn binary_adapter(&mut self, _can_assign: bool) {
    self.binary();
  }

  fn binary(&mut self) {
    let operator_type = self.previous.token_type;
    let rule_precedence = self.get_rule(operator_type).precedence;
    self.parse_precedence(rule_precedence.next());

    match operator_type {
      TokenType::Plus => self.emit_byte(OpCode::Add as u8),
      TokenType::Minus => self.emit_byte(OpCode::Subtract as u8),
      TokenType::Star => self.emit_byte(OpCode::Multiply as u8),
      TokenType::Slash => self.emit_byte(OpCode::Divide as u8),
      _ => unreachable!("binary parse action invoked for a non-binary token"),
    }
  }

  pub(crate) fn grouping_adapter(&mut self, _can_assign: bool) {
    self.grouping();
  }

  fn grouping(&mut self) {
    self.expression();
    self.consume_token(TokenType::RightParen, "Expect ')' after expression.");
  }
}
