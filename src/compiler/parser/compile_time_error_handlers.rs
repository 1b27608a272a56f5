//! Compile-time error reporting.
//!
//! These handlers are side-effecting, not `Result`-propagating: a syntax
//! error prints a diagnostic and sets `had_error`, but parsing continues so
//! that `1 +` (say) produces exactly one diagnostic instead of unwinding
//! out of `parse_precedence` mid-expression.

use super::Parser;
use crate::scanner::TokenType;

impl<'src, 'chunk> Parser<'src, 'chunk> {
  /// Report an error at the current token.
  pub(crate) fn error_at_current(&mut self, message: String) {
    self.error_at(true, message);
  }

  /// Report an error at the previously consumed token.
  pub(crate) fn error(&mut self, message: String) {
    self.error_at(false, message);
  }

  /// Report an error at the selected token. Swallowed while already in
  /// panic mode, so a cascade of follow-on errors from the same bad token
  /// doesn't flood the user with noise.
  pub(crate) fn error_at(&mut self, at_current: bool, message: String) {
    if self.panic_mode {
      return;
    }
    self.panic_mode = true;
    self.had_error = true;

    let token = if at_current {
      self.current
    } else {
      self.previous
    };

    let mut error_str = format!("[line {}] Error", token.line);
    match token.token_type {
      TokenType::Eof => error_str.push_str(" at end"),
      TokenType::Error => {}
      _ => error_str.push_str(&format!(" at '{}'", token.lexeme)),
    }
    error_str.push_str(&format!(": {}", message));

    eprintln!("{}", error_str);
    self.diagnostic = Some(error_str);
  }
}
