//! Lexer/tokenizer for C++ headers.
//!
//! Comments are dropped except doc comments (`///`, `//!`, `/** */`, `/*! */`),
//! which survive as tokens so the grammar can attach them to declarations.
//! Preprocessor directives are skipped whole, line continuations included.

use formgen_core::ParseError;
use nom::{
    branch::alt,
    bytes::complete::{tag, take_until, take_while, take_while1},
    character::complete::{anychar, char, none_of, one_of},
    combinator::{not, recognize},
    multi::many0_count,
    sequence::{delimited, pair, preceded, terminated, tuple},
    IResult,
};

/// Kind of a lexed token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Ident,
    Punct,
    Number,
    Literal,
    /// Doc comment that documents the following declaration.
    Doc,
    /// Doc comment that documents the preceding declaration (`///<`).
    TrailingDoc,
}

/// A token with the line it starts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub line: u32,
}

impl Token<'_> {
    /// Whether this is the punctuator or identifier `text`.
    pub fn is(&self, text: &str) -> bool {
        matches!(self.kind, TokenKind::Punct | TokenKind::Ident) && self.text == text
    }
}

/// Parse an identifier.
pub fn identifier(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        take_while1(|c: char| c.is_alphabetic() || c == '_'),
        take_while(|c: char| c.is_alphanumeric() || c == '_'),
    ))(input)
}

/// Parse a numeric literal, suffixes and digit separators included.
pub fn number(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        take_while1(|c: char| c.is_ascii_digit()),
        take_while(|c: char| c.is_ascii_alphanumeric() || c == '.' || c == '\''),
    ))(input)
}

/// Parse a string literal.
pub fn string_literal(input: &str) -> IResult<&str, &str> {
    recognize(delimited(
        char('"'),
        many0_count(alt((preceded(char('\\'), anychar), none_of("\\\"\n")))),
        char('"'),
    ))(input)
}

/// Parse a character literal.
pub fn char_literal(input: &str) -> IResult<&str, &str> {
    recognize(delimited(
        char('\''),
        many0_count(alt((preceded(char('\\'), anychar), none_of("\\'\n")))),
        char('\''),
    ))(input)
}

/// Parse a string or character literal.
pub fn literal(input: &str) -> IResult<&str, &str> {
    alt((string_literal, char_literal))(input)
}

/// Parse a `///` or `//!` line doc comment.
pub fn line_doc(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        alt((terminated(tag("///"), not(char('/'))), tag("//!"))),
        take_while(|c: char| c != '\n'),
    ))(input)
}

/// Parse a `/** */` or `/*! */` block doc comment.
pub fn block_doc(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        alt((terminated(tag("/**"), not(char('/'))), tag("/*!"))),
        take_until("*/"),
        tag("*/"),
    )))(input)
}

/// Parse an ordinary comment.
pub fn comment(input: &str) -> IResult<&str, &str> {
    alt((
        recognize(pair(tag("//"), take_while(|c: char| c != '\n'))),
        recognize(tuple((tag("/*"), take_until("*/"), tag("*/")))),
    ))(input)
}

/// Parse a punctuator. `<` and `>` are always single tokens so that nested
/// template argument lists close one bracket at a time.
pub fn punct(input: &str) -> IResult<&str, &str> {
    alt((
        tag("::"),
        tag("->"),
        tag("..."),
        tag("&&"),
        tag("||"),
        tag("=="),
        tag("!="),
        tag("<="),
        tag(">="),
        recognize(one_of("{}()[]<>;:,=*&~!+-/%^|?.#@\\")),
    ))(input)
}

/// Parse a preprocessor directive up to the end of its logical line.
pub fn directive(input: &str) -> IResult<&str, &str> {
    let (_, _) = char('#')(input)?;

    let mut end = input.len();
    for (i, c) in input.char_indices() {
        if c == '\n' && !input[..i].trim_end_matches('\r').ends_with('\\') {
            end = i;
            break;
        }
    }

    Ok((&input[end..], &input[..end]))
}

fn whitespace(input: &str) -> IResult<&str, &str> {
    take_while(|c: char| c.is_whitespace())(input)
}

/// Split a header into tokens.
pub fn tokenize(input: &str) -> Result<Vec<Token<'_>>, ParseError> {
    let mut tokens = Vec::new();
    let mut rest = input;
    let mut line: u32 = 1;
    let mut line_start = true;

    loop {
        if let Ok((after, ws)) = whitespace(rest) {
            let newlines = count_newlines(ws);
            if newlines > 0 {
                line_start = true;
            }
            line += newlines;
            rest = after;
        }

        if rest.is_empty() {
            break;
        }

        if line_start && rest.starts_with('#') {
            if let Ok((after, text)) = directive(rest) {
                line += count_newlines(text);
                rest = after;
                continue;
            }
        }
        line_start = false;

        let (after, kind, text) = if let Ok((after, text)) = alt((line_doc, block_doc))(rest) {
            let trailing = ["///<", "//!<", "/**<", "/*!<"]
                .iter()
                .any(|p| text.starts_with(p));
            let kind = if trailing {
                TokenKind::TrailingDoc
            } else {
                TokenKind::Doc
            };
            (after, Some(kind), text)
        } else if let Ok((after, text)) = comment(rest) {
            (after, None, text)
        } else if rest.starts_with("/*") {
            return Err(ParseError::UnterminatedComment { line });
        } else if let Ok((after, text)) = literal(rest) {
            (after, Some(TokenKind::Literal), text)
        } else if rest.starts_with(|c: char| c == '"' || c == '\'') {
            return Err(ParseError::UnterminatedLiteral { line });
        } else if let Ok((after, text)) = identifier(rest) {
            (after, Some(TokenKind::Ident), text)
        } else if let Ok((after, text)) = number(rest) {
            (after, Some(TokenKind::Number), text)
        } else if let Ok((after, text)) = punct(rest) {
            (after, Some(TokenKind::Punct), text)
        } else {
            let found = rest.chars().next().map(String::from).unwrap_or_default();
            return Err(ParseError::UnexpectedToken {
                found,
                expected: "token".to_string(),
                line,
            });
        };

        if let Some(kind) = kind {
            tokens.push(Token { kind, text, line });
        }
        line += count_newlines(text);
        rest = after;
    }

    Ok(tokens)
}

fn count_newlines(text: &str) -> u32 {
    text.bytes().filter(|&b| b == b'\n').count() as u32
}

/// Strip comment markers from a doc comment and join its lines.
pub fn doc_text(raw: &str) -> String {
    let is_block = raw.starts_with("/*");
    let body = raw.strip_suffix("*/").unwrap_or(raw);
    let body = ["///<", "//!<", "/**<", "/*!<", "///", "//!", "/**", "/*!"]
        .iter()
        .find_map(|p| body.strip_prefix(p))
        .unwrap_or(body);

    body.lines()
        .map(|l| {
            let l = l.trim();
            match l.strip_prefix('*') {
                Some(rest) if is_block && !rest.starts_with('*') => rest.trim_start(),
                _ => l,
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds_and_text<'a>(tokens: &[Token<'a>]) -> Vec<(TokenKind, &'a str)> {
        tokens.iter().map(|t| (t.kind, t.text)).collect()
    }

    #[test]
    fn test_tokenize_field() {
        let tokens = tokenize("std::vector<std::string> Macros;").unwrap();
        let texts: Vec<_> = tokens.iter().map(|t| t.text).collect();
        assert_eq!(
            texts,
            ["std", "::", "vector", "<", "std", "::", "string", ">", "Macros", ";"]
        );
    }

    #[test]
    fn test_nested_template_closers_are_split() {
        let tokens = tokenize("a<b<c>>").unwrap();
        let texts: Vec<_> = tokens.iter().map(|t| t.text).collect();
        assert_eq!(texts, ["a", "<", "b", "<", "c", ">", ">"]);
    }

    #[test]
    fn test_comments_and_docs() {
        let src = "// plain\n/// doc line\nint x; ///< trailing\n/* block */ /** block doc */";
        let tokens = tokenize(src).unwrap();
        assert_eq!(
            kinds_and_text(&tokens),
            vec![
                (TokenKind::Doc, "/// doc line"),
                (TokenKind::Ident, "int"),
                (TokenKind::Ident, "x"),
                (TokenKind::Punct, ";"),
                (TokenKind::TrailingDoc, "///< trailing"),
                (TokenKind::Doc, "/** block doc */"),
            ]
        );
        assert_eq!(tokens[1].line, 3);
    }

    #[test]
    fn test_directives_are_skipped() {
        let src = "#include <vector>\n#define FOO(x) \\\n  (x + 1)\nint y;";
        let tokens = tokenize(src).unwrap();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].text, "int");
        assert_eq!(tokens[0].line, 4);
    }

    #[test]
    fn test_hash_inside_line_is_punct() {
        let tokens = tokenize("a # b").unwrap();
        assert_eq!(tokens[1].kind, TokenKind::Punct);
    }

    #[test]
    fn test_literals() {
        let tokens = tokenize(r#"x = "a \"quoted\" ;" + 'c' + 1'000u;"#).unwrap();
        assert_eq!(tokens[2].kind, TokenKind::Literal);
        assert_eq!(tokens[2].text, r#""a \"quoted\" ;""#);
        assert_eq!(tokens[4].text, "'c'");
        assert_eq!(tokens[6].kind, TokenKind::Number);
        assert_eq!(tokens[6].text, "1'000u");
    }

    #[test]
    fn test_unterminated_comment() {
        let err = tokenize("int a;\n/* never closed").unwrap_err();
        assert!(matches!(err, ParseError::UnterminatedComment { line: 2 }));
    }

    #[test]
    fn test_unterminated_literal() {
        let err = tokenize("const char *s = \"oops\n;").unwrap_err();
        assert!(matches!(err, ParseError::UnterminatedLiteral { line: 1 }));
    }

    #[test]
    fn test_doc_text() {
        assert_eq!(doc_text("/// The width."), "The width.");
        assert_eq!(doc_text("///< trailing"), "trailing");
        assert_eq!(
            doc_text("/**\n * First line\n * **deprecated**\n */"),
            "First line\n**deprecated**"
        );
    }
}
