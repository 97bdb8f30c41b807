use monkey::interpreter::{
    lexer::Lexer,
    token::{Token, TokenKind},
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn kinds_and_literals(source: &str) -> Vec<(TokenKind, String)> {
    Lexer::new(source).tokenize()
                      .into_iter()
                      .map(|Token { kind, literal }| (kind, literal))
                      .collect()
}

fn expected(tokens: &[(TokenKind, &str)]) -> Vec<(TokenKind, String)> {
    tokens.iter()
          .map(|(kind, literal)| (*kind, (*literal).to_string()))
          .collect()
}

#[test]
fn scans_a_small_program() {
    use TokenKind::*;

    let source = r#"let five = 5;
let add = fn(x, y) {
  x + y;
};
let result = add(five, 10);
!-/*5;
5 < 10 > 5;
if (5 < 10) {
    return true;
} else {
    return false;
}
10 == 10;
10 != 9;
"foobar"
"foo bar"
[1, 2];
{"foo": "bar"}
"#;

    let tokens = [(Let, "let"),
                  (Ident, "five"),
                  (Assign, "="),
                  (Int, "5"),
                  (Semicolon, ";"),
                  (Let, "let"),
                  (Ident, "add"),
                  (Assign, "="),
                  (Function, "fn"),
                  (LParen, "("),
                  (Ident, "x"),
                  (Comma, ","),
                  (Ident, "y"),
                  (RParen, ")"),
                  (LBrace, "{"),
                  (Ident, "x"),
                  (Plus, "+"),
                  (Ident, "y"),
                  (Semicolon, ";"),
                  (RBrace, "}"),
                  (Semicolon, ";"),
                  (Let, "let"),
                  (Ident, "result"),
                  (Assign, "="),
                  (Ident, "add"),
                  (LParen, "("),
                  (Ident, "five"),
                  (Comma, ","),
                  (Int, "10"),
                  (RParen, ")"),
                  (Semicolon, ";"),
                  (Bang, "!"),
                  (Minus, "-"),
                  (Slash, "/"),
                  (Asterisk, "*"),
                  (Int, "5"),
                  (Semicolon, ";"),
                  (Int, "5"),
                  (Lt, "<"),
                  (Int, "10"),
                  (Gt, ">"),
                  (Int, "5"),
                  (Semicolon, ";"),
                  (If, "if"),
                  (LParen, "("),
                  (Int, "5"),
                  (Lt, "<"),
                  (Int, "10"),
                  (RParen, ")"),
                  (LBrace, "{"),
                  (Return, "return"),
                  (True, "true"),
                  (Semicolon, ";"),
                  (RBrace, "}"),
                  (Else, "else"),
                  (LBrace, "{"),
                  (Return, "return"),
                  (False, "false"),
                  (Semicolon, ";"),
                  (RBrace, "}"),
                  (Int, "10"),
                  (Eq, "=="),
                  (Int, "10"),
                  (Semicolon, ";"),
                  (Int, "10"),
                  (NotEq, "!="),
                  (Int, "9"),
                  (Semicolon, ";"),
                  (String, "foobar"),
                  (String, "foo bar"),
                  (LBracket, "["),
                  (Int, "1"),
                  (Comma, ","),
                  (Int, "2"),
                  (RBracket, "]"),
                  (Semicolon, ";"),
                  (LBrace, "{"),
                  (String, "foo"),
                  (Colon, ":"),
                  (String, "bar"),
                  (RBrace, "}"),
                  (Eof, "")];

    assert_eq!(kinds_and_literals(source), expected(&tokens));
}

#[rstest]
#[case("fn", TokenKind::Function)]
#[case("let", TokenKind::Let)]
#[case("true", TokenKind::True)]
#[case("false", TokenKind::False)]
#[case("if", TokenKind::If)]
#[case("else", TokenKind::Else)]
#[case("return", TokenKind::Return)]
#[case("lets", TokenKind::Ident)]
#[case("_under_score", TokenKind::Ident)]
fn keywords_are_exact_matches(#[case] source: &str, #[case] kind: TokenKind) {
    let token = Lexer::new(source).next_token();

    assert_eq!(token.kind, kind);
    assert_eq!(token.literal, source);
}

#[test]
fn digits_end_an_identifier() {
    use TokenKind::*;

    assert_eq!(kinds_and_literals("abc123"),
               expected(&[(Ident, "abc"), (Int, "123"), (Eof, "")]));
}

#[test]
fn minus_is_never_part_of_an_integer() {
    use TokenKind::*;

    assert_eq!(kinds_and_literals("-5"),
               expected(&[(Minus, "-"), (Int, "5"), (Eof, "")]));
}

#[test]
fn two_character_operators_fall_back_to_one() {
    use TokenKind::*;

    assert_eq!(kinds_and_literals("= == ! !="),
               expected(&[(Assign, "="), (Eq, "=="), (Bang, "!"), (NotEq, "!="), (Eof, "")]));
}

#[test]
fn unknown_characters_are_illegal() {
    use TokenKind::*;

    assert_eq!(kinds_and_literals("1 @ 2"),
               expected(&[(Int, "1"), (Illegal, "@"), (Int, "2"), (Eof, "")]));
}

#[test]
fn unterminated_string_runs_to_end_of_input() {
    use TokenKind::*;

    assert_eq!(kinds_and_literals("\"never closed"),
               expected(&[(String, "never closed"), (Eof, "")]));
}

#[test]
fn empty_string_literal() {
    use TokenKind::*;

    assert_eq!(kinds_and_literals("\"\""), expected(&[(String, ""), (Eof, "")]));
}

#[test]
fn eof_is_idempotent() {
    let mut lexer = Lexer::new("x");

    assert_eq!(lexer.next_token().kind, TokenKind::Ident);
    for _ in 0..3 {
        assert_eq!(lexer.next_token(), Token::eof());
    }
}

#[test]
fn whitespace_only_input_is_just_eof() {
    assert_eq!(kinds_and_literals(" \t\r\n "), expected(&[(TokenKind::Eof, "")]));
}
