//! # Compiler
//!
//! The compiler is a single-pass Pratt parser: it walks the token stream
//! once, emitting bytecode into a `Chunk` as it goes. There is no separate
//! AST stage.

use crate::chunk::Chunk;

pub mod parser;

use parser::Parser;

/// Compile `source` into `chunk`. On failure, every diagnostic has already
/// been written to stderr by the parser's error handlers, `chunk` must be
/// discarded, and the `Err` payload carries that same diagnostic text.
pub fn compile(source: &str, chunk: &mut Chunk) -> Result<(), String> {
  tracing::debug!(%source, "compiling source");
  let mut parser = Parser::new(source, chunk);

  parser.advance_token();
  parser.expression();
  parser.consume_token(
    crate::scanner::TokenType::Eof,
    "Expected end of expressions.",
  );
  parser.end_compiler();

  if parser.had_error {
    Err(
      parser
        .diagnostic
        .unwrap_or_else(|| "failed to compile source".to_owned()),
    )
  } else {
    Ok(())
  }
}
