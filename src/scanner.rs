//! # Scanner
//!
//! The scanner is responsible for:
//!
//! - reading the source code
//! - producing a stream of tokens, lazily, one at a time.

/// ## TokenType
///
/// The different kinds of tokens this scanner can produce. The compiler's
/// Pratt table (see `compiler::parser`) only wires a handful of these to
/// parse actions; the rest are scanned fully but reserved for future
/// grammar forms (booleans, comparisons, control flow, declarations).
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenType {
  // Single-character tokens.
  LeftParen,
  RightParen,
  LeftBrace,
  RightBrace,
  Comma,
  Dot,
  Minus,
  Plus,
  Semicolon,
  Slash,
  Star,
  // One or two character tokens.
  Bang,
  BangEqual,
  Equal,
  EqualEqual,
  Greater,
  GreaterEqual,
  Less,
  LessEqual,
  // Literals.
  Identifier,
  String,
  Number,
  // Keywords.
  And,
  Class,
  Else,
  False,
  For,
  Fun,
  If,
  Nil,
  Or,
  Print,
  Return,
  Super,
  This,
  True,
  Var,
  While,
  // Error and EOF.
  Error,
  Eof,
}

/// ## Token
///
/// A (type, lexeme, line) triple. `lexeme` borrows from the source buffer
/// that produced it, except for `Error` tokens, whose lexeme is a static
/// diagnostic message instead of a source slice.
#[derive(Debug, Clone, Copy)]
pub struct Token<'a> {
  pub token_type: TokenType,
  pub line: usize,
  pub lexeme: &'a str,
}

impl<'a> Default for Token<'a> {
  fn default() -> Self {
    Self {
      token_type: TokenType::Eof,
      line: 1,
      lexeme: "",
    }
  }
}

/// ## Scanner
///
/// Scans tokens on demand from a borrowed source buffer. The buffer must
/// outlive every `Token` this scanner produces.
#[derive(Debug)]
pub struct Scanner<'a> {
  source: &'a str,
  start: usize,
  current: usize,
  line: usize,
}

impl<'a> Scanner<'a> {
  pub fn new(source: &'a str) -> Self {
    Self {
      source,
      start: 0,
      current: 0,
      line: 1,
    }
  }

  /// Scan and return the next token. Once `Eof` has been produced, every
  /// further call keeps returning `Eof`.
  pub fn scan_token(&mut self) -> Token<'a> {
    self.skip_whitespace();

    self.start = self.current;

    if self.is_at_end() {
      return self.make_token(TokenType::Eof);
    }

    let c = self.advance();

    if is_alpha(c) {
      return self.identifier();
    }
    if c.is_ascii_digit() {
      return self.number();
    }

    match c {
      b'(' => self.make_token(TokenType::LeftParen),
      b')' => self.make_token(TokenType::RightParen),
      b'{' => self.make_token(TokenType::LeftBrace),
      b'}' => self.make_token(TokenType::RightBrace),
      b';' => self.make_token(TokenType::Semicolon),
      b',' => self.make_token(TokenType::Comma),
      b'.' => self.make_token(TokenType::Dot),
      b'-' => self.make_token(TokenType::Minus),
      b'+' => self.make_token(TokenType::Plus),
      b'/' => self.make_token(TokenType::Slash),
      b'*' => self.make_token(TokenType::Star),
      b'!' => {
        let t = if self.match_next(b'=') {
          TokenType::BangEqual
        } else {
          TokenType::Bang
        };
        self.make_token(t)
      }
      b'=' => {
        let t = if self.match_next(b'=') {
          TokenType::EqualEqual
        } else {
          TokenType::Equal
        };
        self.make_token(t)
      }
      b'<' => {
        let t = if self.match_next(b'=') {
          TokenType::LessEqual
        } else {
          TokenType::Less
        };
        self.make_token(t)
      }
      b'>' => {
        let t = if self.match_next(b'=') {
          TokenType::GreaterEqual
        } else {
          TokenType::Greater
        };
        self.make_token(t)
      }
      b'"' => self.string(),
      _ => self.error_token("Unexpected character."),
    }
  }
}

impl<'a> Scanner<'a> {
  fn identifier(&mut self) -> Token<'a> {
    while is_alpha(self.peek()) || self.peek().is_ascii_digit() {
      self.advance();
    }
    self.make_token(self.identifier_type())
  }

  /// Match the lexeme against the reserved-word list with a switch on the
  /// first byte rather than a hash lookup: cheap, and it keeps the common
  /// case (a short, non-keyword identifier) branch-predictable.
  fn identifier_type(&self) -> TokenType {
    let lexeme = &self.source[self.start..self.current];
    let bytes = lexeme.as_bytes();
    match bytes[0] {
      b'a' => self.check_keyword(lexeme, "and", TokenType::And),
      b'c' => self.check_keyword(lexeme, "class", TokenType::Class),
      b'e' => self.check_keyword(lexeme, "else", TokenType::Else),
      b'f' if bytes.len() > 1 => match bytes[1] {
        b'a' => self.check_keyword(lexeme, "false", TokenType::False),
        b'o' => self.check_keyword(lexeme, "for", TokenType::For),
        b'u' => self.check_keyword(lexeme, "fun", TokenType::Fun),
        _ => TokenType::Identifier,
      },
      b'i' => self.check_keyword(lexeme, "if", TokenType::If),
      b'n' => self.check_keyword(lexeme, "nil", TokenType::Nil),
      b'o' => self.check_keyword(lexeme, "or", TokenType::Or),
      b'p' => self.check_keyword(lexeme, "print", TokenType::Print),
      b'r' => self.check_keyword(lexeme, "return", TokenType::Return),
      b's' => self.check_keyword(lexeme, "super", TokenType::Super),
      b't' if bytes.len() > 1 => match bytes[1] {
        b'h' => self.check_keyword(lexeme, "this", TokenType::This),
        b'r' => self.check_keyword(lexeme, "true", TokenType::True),
        _ => TokenType::Identifier,
      },
      b'v' => self.check_keyword(lexeme, "var", TokenType::Var),
      b'w' => self.check_keyword(lexeme, "while", TokenType::While),
      _ => TokenType::Identifier,
    }
  }

  fn check_keyword(&self, lexeme: &str, keyword: &str, token_type: TokenType) -> TokenType {
    if lexeme == keyword {
      token_type
    } else {
      TokenType::Identifier
    }
  }

  fn string(&mut self) -> Token<'a> {
    while self.peek() != b'"' && !self.is_at_end() {
      if self.peek() == b'\n' {
        self.line += 1;
      }
      self.advance();
    }

    if self.is_at_end() {
      return self.error_token("Unterminated string.");
    }

    // the closing quote
    self.advance();
    self.make_token(TokenType::String)
  }

  fn number(&mut self) -> Token<'a> {
    while self.peek().is_ascii_digit() {
      self.advance();
    }

    if self.peek() == b'.' && self.peek_next().is_ascii_digit() {
      self.advance();
      while self.peek().is_ascii_digit() {
        self.advance();
      }
    }

    self.make_token(TokenType::Number)
  }
}

impl<'a> Scanner<'a> {
  fn make_token(&self, token_type: TokenType) -> Token<'a> {
    Token {
      token_type,
      line: self.line,
      lexeme: &self.source[self.start..self.current],
    }
  }

  fn error_token(&self, message: &'static str) -> Token<'a> {
    Token {
      token_type: TokenType::Error,
      line: self.line,
      lexeme: message,
    }
  }
}

impl<'a> Scanner<'a> {
  fn is_at_end(&self) -> bool {
    self.current >= self.source.len()
  }

  fn advance(&mut self) -> u8 {
    let byte = self.source.as_bytes()[self.current];
    self.current += 1;
    byte
  }

  fn match_next(&mut self, expected: u8) -> bool {
    if self.is_at_end() || self.source.as_bytes()[self.current] != expected {
      return false;
    }
    self.current += 1;
    true
  }

  fn peek(&self) -> u8 {
    if self.is_at_end() {
      b'\0'
    } else {
      self.source.as_bytes()[self.current]
    }
  }

  fn peek_next(&self) -> u8 {
    if self.current + 1 >= self.source.len() {
      b'\0'
    } else {
      self.source.as_bytes()[self.current + 1]
    }
  }

  fn skip_whitespace(&mut self) {
    loop {
      match self.peek() {
        b' ' | b'\r' | b'\t' => {
          self.advance();
        }
        b'\n' => {
          self.line += 1;
          self.advance();
        }
        b'/' => {
          if self.peek_next() == b'/' {
            while self.peek() != b'\n' && !self.is_at_end() {
              self.advance();
            }
          } else {
            return;
          }
        }
        _ => return,
      }
    }
  }
}

fn is_alpha(c: u8) -> bool {
  c.is_ascii_alphabetic() || c == b'_'
}

#[cfg(test)]
mod tests {
  use super::*;

  fn scan_all(source: &str) -> Vec<TokenType> {
    let mut scanner = Scanner::new(source);
    let mut types = Vec::new();
    loop {
      let tok = scanner.scan_token();
      types.push(tok.token_type);
      if tok.token_type == TokenType::Eof {
        break;
      }
    }
    types
  }

  #[test]
  fn scans_arithmetic_expression() {
    use TokenType::*;
    assert_eq!(
      scan_all("(-1 + 2) * 3 - -4"),
      vec![
        LeftParen, Minus, Number, Plus, Number, RightParen, Star, Number, Minus, Minus, Number,
        Eof
      ]
    );
  }

  #[test]
  fn keywords_are_recognized_but_identifiers_with_keyword_prefixes_are_not() {
    use TokenType::*;
    assert_eq!(scan_all("and class fib"), vec![And, Class, Identifier, Eof]);
    assert_eq!(scan_all("forest"), vec![Identifier, Eof]);
    assert_eq!(scan_all("for"), vec![For, Eof]);
    assert_eq!(scan_all("true false nil"), vec![True, False, Nil, Eof]);
  }

  #[test]
  fn two_character_operators() {
    use TokenType::*;
    assert_eq!(
      scan_all("! != = == < <= > >="),
      vec![
        Bang, BangEqual, Equal, EqualEqual, Less, LessEqual, Greater, GreaterEqual, Eof
      ]
    );
  }

  #[test]
  fn unterminated_string_is_an_error_token() {
    let mut scanner = Scanner::new("\"abc");
    let tok = scanner.scan_token();
    assert_eq!(tok.token_type, TokenType::Error);
    assert_eq!(tok.lexeme, "Unterminated string.");
  }

  #[test]
  fn unknown_byte_is_an_error_token() {
    let mut scanner = Scanner::new("@");
    let tok = scanner.scan_token();
    assert_eq!(tok.token_type, TokenType::Error);
    assert_eq!(tok.lexeme, "Unexpected character.");
  }

  #[test]
  fn after_eof_keeps_returning_eof() {
    let mut scanner = Scanner::new("1");
    assert_eq!(scanner.scan_token().token_type, TokenType::Number);
    assert_eq!(scanner.scan_token().token_type, TokenType::Eof);
    assert_eq!(scanner.scan_token().token_type, TokenType::Eof);
  }

  #[test]
  fn newlines_in_comments_and_strings_advance_the_line_counter() {
    let mut scanner = Scanner::new("// comment\n\"a\nb\"\n1");
    let string_tok = scanner.scan_token();
    assert_eq!(string_tok.token_type, TokenType::String);
    assert_eq!(string_tok.line, 2);
    let number_tok = scanner.scan_token();
    assert_eq!(number_tok.line, 4);
  }

  #[test]
  fn trailing_dot_without_digit_is_not_consumed() {
    let mut scanner = Scanner::new("1.");
    let tok = scanner.scan_token();
    assert_eq!(tok.token_type, TokenType::Number);
    assert_eq!(tok.lexeme, "1");
    assert_eq!(scanner.scan_token().token_type, TokenType::Dot);
  }
}
