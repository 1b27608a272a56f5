//! # Parser
//!
//! Submodule of `compiler`, which parses the source code into bytecode
//! one token at a time using a Pratt (precedence-climbing) table.

use crate::{
  chunk::Chunk,
  scanner::{Scanner, Token, TokenType},
};

use once_cell::sync::Lazy;
use std::collections::HashMap;

pub mod compile_time_error_handlers;
pub mod emit_methods;
pub mod parse_rules;

type ParseFn = fn(&mut Parser<'_, '_>, bool);

/// ## Precedence
///
/// Precedence levels from lowest to highest binding. `next()` returns the
/// level one above the current one, used by left-associative infix parse
/// actions to reject same-precedence right recursion.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
  #[default]
  None,
  Assignment, // =
  Or,         // or
  And,        // and
  Equality,   // == !=
  Comparison, // < > <= >=
  Term,       // + -
  Factor,     // * /
  Unary,      // ! -
  Call,       // . ()
  Primary,
}

impl Precedence {
  pub fn next(self) -> Self {
    match self {
      Precedence::None => Precedence::Assignment,
      Precedence::Assignment => Precedence::Or,
      Precedence::Or => Precedence::And,
      Precedence::And => Precedence::Equality,
      Precedence::Equality => Precedence::Comparison,
      Precedence::Comparison => Precedence::Term,
      Precedence::Term => Precedence::Factor,
      Precedence::Factor => Precedence::Unary,
      Precedence::Unary => Precedence::Call,
      Precedence::Call => Precedence::Primary,
      Precedence::Primary => Precedence::Primary,
    }
  }
}

/// ## ParseRule
///
/// Associates a token type with its prefix parse action, infix parse
/// action, and the precedence to use when the token appears as an infix
/// operator.
#[derive(Default, Clone, Copy)]
pub struct ParseRule {
  pub prefix: Option<ParseFn>,
  pub infix: Option<ParseFn>,
  pub precedence: Precedence,
}

impl ParseRule {
  pub fn new(prefix: Option<ParseFn>, infix: Option<ParseFn>, precedence: Precedence) -> Self {
    Self {
      prefix,
      infix,
      precedence,
    }
  }
}

/// ## RULES
///
/// The complete parse-rule table, one entry per `TokenType`. Only the
/// handful of tokens this subset's grammar actually uses (parens, unary
/// minus, the four arithmetic operators, number literals) carry parse
/// actions; every other token is `(None, None, Precedence::None)`,
/// reserved for grammar forms this compiler doesn't parse yet.
static RULES: Lazy<HashMap<TokenType, ParseRule>> = Lazy::new(|| {
  use TokenType::*;
  let entries = [
    (
      LeftParen,
      ParseRule::new(Some(Parser::grouping_adapter), None, Precedence::None),
    ),
    (RightParen, ParseRule::default()),
    (LeftBrace, ParseRule::default()),
    (RightBrace, ParseRule::default()),
    (Comma, ParseRule::default()),
    (Dot, ParseRule::default()),
    (
      Minus,
      ParseRule::new(
        Some(Parser::unary_adapter),
        Some(Parser::binary_adapter),
        Precedence::Term,
      ),
    ),
    (
      Plus,
      ParseRule::new(None, Some(Parser::binary_adapter), Precedence::Term),
    ),
    (Semicolon, ParseRule::default()),
    (
      Slash,
      ParseRule::new(None, Some(Parser::binary_adapter), Precedence::Factor),
    ),
    (
      Star,
      ParseRule::new(None, Some(Parser::binary_adapter), Precedence::Factor),
    ),
    (Bang, ParseRule::default()),
    (BangEqual, ParseRule::default()),
    (Equal, ParseRule::default()),
    (EqualEqual, ParseRule::default()),
    (Greater, ParseRule::default()),
    (GreaterEqual, ParseRule::default()),
    (Less, ParseRule::default()),
    (LessEqual, ParseRule::default()),
    (Identifier, ParseRule::default()),
    (String, ParseRule::default()),
    (
      Number,
      ParseRule::new(Some(Parser::number_adapter), None, Precedence::None),
    ),
    (And, ParseRule::default()),
    (Class, ParseRule::default()),
    (Else, ParseRule::default()),
    (False, ParseRule::default()),
    (For, ParseRule::default()),
    (Fun, ParseRule::default()),
    (If, ParseRule::default()),
    (Nil, ParseRule::default()),
    (Or, ParseRule::default()),
    (Print, ParseRule::default()),
    (Return, ParseRule::default()),
    (Super, ParseRule::default()),
    (This, ParseRule::default()),
    (True, ParseRule::default()),
    (Var, ParseRule::default()),
    (While, ParseRule::default()),
    (Error, ParseRule::default()),
    (Eof, ParseRule::default()),
  ];
  entries.into_iter().collect()
});

/// ## Parser
///
/// Drives the scanner and chunk together: holds the current/previous
/// tokens, the error-reporting state (`had_error`/`panic_mode`), and a
/// borrow of the chunk being assembled.
pub struct Parser<'src, 'chunk> {
  pub(crate) chunk: &'chunk mut Chunk,
  pub(crate) scanner: Scanner<'src>,
  pub(crate) current: Token<'src>,
  pub(crate) previous: Token<'src>,
  pub(crate) had_error: bool,
  pub(crate) panic_mode: bool,
  /// Text of the first diagnostic reported (panic mode means there's
  /// never more than one), mirroring what `error_at` already wrote to
  /// stderr, for callers that want the exact message programmatically.
  pub(crate) diagnostic: Option<String>,
}

impl<'src, 'chunk> Parser<'src, 'chunk> {
  pub fn new(source: &'src str, chunk: &'chunk mut Chunk) -> Self {
    Self {
      chunk,
      scanner: Scanner::new(source),
      current: Token::default(),
      previous: Token::default(),
      had_error: false,
      panic_mode: false,
      diagnostic: None,
    }
  }
}

impl<'src, 'chunk> Parser<'src, 'chunk> {
  /// Parse any expression at the given precedence level or higher.
  pub(crate) fn parse_precedence(&mut self, precedence: Precedence) {
    self.advance_token();
    let prefix_rule = self.get_rule(self.previous.token_type).prefix;
    let Some(prefix_rule) = prefix_rule else {
      self.error("Expected expression.".to_owned());
      return;
    };
    prefix_rule(self, precedence <= Precedence::Assignment);

    while precedence <= self.get_rule(self.current.token_type).precedence {
      self.advance_token();
      let infix_rule = self.get_rule(self.previous.token_type).infix;
      match infix_rule {
        Some(infix_rule) => infix_rule(self, false),
        None => break,
      }
    }
  }

  pub(crate) fn get_rule(&self, token_type: TokenType) -> ParseRule {
    *RULES.get(&token_type).unwrap()
  }
}

impl<'src, 'chunk> Parser<'src, 'chunk> {
  /// Ask the scanner for the next non-error token, stashing the old
  /// current token in `previous`. Error tokens are reported immediately
  /// and skipped over without aborting the parse.
  pub(crate) fn advance_token(&mut self) {
    self.previous = self.current;
    loop {
      self.current = self.scanner.scan_token();
      if self.current.token_type != TokenType::Error {
        break;
      }
      self.error_at_current(self.current.lexeme.to_owned());
    }
  }

  /// Consume the current token if it matches `token_type`, otherwise
  /// report `message` at the current token.
  pub(crate) fn consume_token(&mut self, token_type: TokenType, message: &str) {
    if self.current.token_type == token_type {
      self.advance_token();
    } else {
      self.error_at_current(message.to_owned());
    }
  }

  pub(crate) fn expression(&mut self) {
    self.parse_precedence(Precedence::Assignment);
  }
}
