use logos::Logos;

/// The kind of a lexical token.
///
/// The scanner is generated by `logos`. Keywords are not listed as separate
/// patterns: every identifier-shaped run is scanned as [`TokenKind::Ident`] and
/// then resolved through [`lookup_ident`], so the keyword table is the single
/// source of truth for reserved words.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\r\n]+")]
pub enum TokenKind {
    /// A character the language does not recognize.
    Illegal,
    /// End of input.
    Eof,

    /// Identifier tokens such as `x` or `add_two`.
    #[regex(r"[A-Za-z_]+")]
    Ident,
    /// Unsigned decimal integer literals such as `42`.
    #[regex(r"[0-9]+")]
    Int,
    /// String literals delimited by `"`.
    #[token("\"", lex_string)]
    String,

    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `!`
    #[token("!")]
    Bang,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `/`
    #[token("/")]
    Slash,
    /// `<`
    #[token("<")]
    Lt,
    /// `>`
    #[token(">")]
    Gt,
    /// `==`
    #[token("==")]
    Eq,
    /// `!=`
    #[token("!=")]
    NotEq,

    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `:`
    #[token(":")]
    Colon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,

    /// `fn`
    Function,
    /// `let`
    Let,
    /// `true`
    True,
    /// `false`
    False,
    /// `if`
    If,
    /// `else`
    Else,
    /// `return`
    Return,
}

/// Reserved words and the token kinds they map to.
pub const KEYWORDS: &[(&str, TokenKind)] = &[("fn", TokenKind::Function),
                                             ("let", TokenKind::Let),
                                             ("true", TokenKind::True),
                                             ("false", TokenKind::False),
                                             ("if", TokenKind::If),
                                             ("else", TokenKind::Else),
                                             ("return", TokenKind::Return)];

/// Resolves an identifier-shaped word to a keyword kind, or
/// [`TokenKind::Ident`] when the word is not reserved.
///
/// # Example
/// ```
/// use monkey::interpreter::token::{TokenKind, lookup_ident};
///
/// assert_eq!(lookup_ident("fn"), TokenKind::Function);
/// assert_eq!(lookup_ident("fnord"), TokenKind::Ident);
/// ```
#[must_use]
pub fn lookup_ident(ident: &str) -> TokenKind {
    KEYWORDS.iter()
            .find(|(word, _)| *word == ident)
            .map_or(TokenKind::Ident, |(_, kind)| *kind)
}

/// Consumes a string body up to and including the next `"`.
///
/// An unterminated string runs to the end of input; that is not a lexical
/// error.
fn lex_string(lex: &mut logos::Lexer<TokenKind>) -> bool {
    let remainder = lex.remainder();
    let length = remainder.find('"').map_or(remainder.len(), |end| end + 1);
    lex.bump(length);
    true
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Illegal => "ILLEGAL",
            Self::Eof => "EOF",
            Self::Ident => "IDENT",
            Self::Int => "INT",
            Self::String => "STRING",
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Bang => "!",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Colon => ":",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Function => "FUNCTION",
            Self::Let => "LET",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::Return => "RETURN",
        };
        write!(f, "{name}")
    }
}

/// A single lexical token: its kind plus the literal source text.
///
/// For string literals the literal is the text between the quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token kind.
    pub kind:    TokenKind,
    /// The literal text the token was scanned from.
    pub literal: String,
}

impl Token {
    /// Creates a token from a kind and its literal text.
    #[must_use]
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self { kind,
               literal: literal.into() }
    }

    /// The end-of-input token.
    #[must_use]
    pub fn eof() -> Self {
        Self::new(TokenKind::Eof, "")
    }
}
