use monkey_lexer::{tokenize, Lexer, TokenKind};

const CORPUS: &[&str] = &[
    "",
    "   ",
    "\t\r\n",
    "@",
    "@@@ ###",
    "let five = 5;",
    "let ten = 10;\nlet add = fn(x, y) { x + y; };\nlet result = add(five, ten);",
    "!-/*5;\n5 < 10 > 5;",
    "if (5 < 10) { return true; } else { return false; }",
    "10 == 10; 10 != 9;",
    "====!!!=!",
    "a1b2_c3$",
    "caf\u{e9} \u{1F600}",
    "x\0y",
    "12345678901234567890",
];

#[test]
fn every_input_ends_with_exactly_one_eof() {
    for input in CORPUS {
        let tokens = tokenize(input);
        let eofs = tokens.iter().filter(|t| t.kind == TokenKind::Eof).count();
        assert_eq!(eofs, 1, "input: {:?}", input);
        assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof), "input: {:?}", input);
    }
}

#[test]
fn cursor_advances_on_every_call_before_eof() {
    for input in CORPUS {
        let mut lexer = Lexer::new(input);
        let mut calls = 0;
        loop {
            let before = lexer.position();
            let tok = lexer.next_token();
            if tok.kind == TokenKind::Eof {
                assert_eq!(lexer.position(), input.len(), "input: {:?}", input);
                break;
            }
            assert!(lexer.position() > before, "no progress on {:?}", input);
            calls += 1;
            assert!(calls <= input.len(), "too many tokens for {:?}", input);
        }
    }
}

#[test]
fn literals_match_source_text() {
    for input in CORPUS {
        for tok in tokenize(input) {
            match tok.kind {
                TokenKind::Eof | TokenKind::Illegal => assert_eq!(tok.literal, ""),
                _ => assert_eq!(
                    tok.literal,
                    &input[tok.start.offset..tok.end.offset],
                    "input: {:?}",
                    input
                ),
            }
        }
    }
}

#[test]
fn illegal_tokens_consume_one_byte() {
    for input in CORPUS {
        for tok in tokenize(input) {
            if tok.kind == TokenKind::Illegal {
                assert_eq!(tok.end.offset - tok.start.offset, 1, "input: {:?}", input);
            }
        }
    }
}

#[test]
fn eof_repeats_after_end_of_input() {
    for input in CORPUS {
        let mut lexer = Lexer::new(input);
        while lexer.next_token().kind != TokenKind::Eof {}
        for _ in 0..3 {
            assert_eq!(lexer.next_token().kind, TokenKind::Eof);
            assert_eq!(lexer.position(), input.len());
        }
    }
}

#[test]
fn full_program() {
    let input = "let five = 5;
let ten = 10;

let add = fn(x, y) {
  x + y;
};

let result = add(five, ten);
!-/*5;
5 < 10 > 5;

if (5 < 10) {
    return true;
} else {
    return false;
}

10 == 10;
10 != 9;
";
    let expected = vec![
        (TokenKind::Let, "let"),
        (TokenKind::Ident, "five"),
        (TokenKind::Assign, "="),
        (TokenKind::Int, "5"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Ident, "ten"),
        (TokenKind::Assign, "="),
        (TokenKind::Int, "10"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Ident, "add"),
        (TokenKind::Assign, "="),
        (TokenKind::Function, "fn"),
        (TokenKind::LParen, "("),
        (TokenKind::Ident, "x"),
        (TokenKind::Comma, ","),
        (TokenKind::Ident, "y"),
        (TokenKind::RParen, ")"),
        (TokenKind::LBrace, "{"),
        (TokenKind::Ident, "x"),
        (TokenKind::Plus, "+"),
        (TokenKind::Ident, "y"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::RBrace, "}"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Ident, "result"),
        (TokenKind::Assign, "="),
        (TokenKind::Ident, "add"),
        (TokenKind::LParen, "("),
        (TokenKind::Ident, "five"),
        (TokenKind::Comma, ","),
        (TokenKind::Ident, "ten"),
        (TokenKind::RParen, ")"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Bang, "!"),
        (TokenKind::Minus, "-"),
        (TokenKind::Slash, "/"),
        (TokenKind::Asterisk, "*"),
        (TokenKind::Int, "5"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Int, "5"),
        (TokenKind::Lt, "<"),
        (TokenKind::Int, "10"),
        (TokenKind::Gt, ">"),
        (TokenKind::Int, "5"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::If, "if"),
        (TokenKind::LParen, "("),
        (TokenKind::Int, "5"),
        (TokenKind::Lt, "<"),
        (TokenKind::Int, "10"),
        (TokenKind::RParen, ")"),
        (TokenKind::LBrace, "{"),
        (TokenKind::Return, "return"),
        (TokenKind::True, "true"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::RBrace, "}"),
        (TokenKind::Else, "else"),
        (TokenKind::LBrace, "{"),
        (TokenKind::Return, "return"),
        (TokenKind::False, "false"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::RBrace, "}"),
        (TokenKind::Int, "10"),
        (TokenKind::Eq, "=="),
        (TokenKind::Int, "10"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Int, "10"),
        (TokenKind::NotEq, "!="),
        (TokenKind::Int, "9"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Eof, ""),
    ];

    let actual: Vec<_> = tokenize(input).iter().map(|t| (t.kind, t.literal)).collect();
    assert_eq!(actual, expected);
}
