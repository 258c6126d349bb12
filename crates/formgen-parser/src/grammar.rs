//! Grammar rules for C++ headers.
//!
//! A recursive-descent walk over the token stream that understands just
//! enough C++ to recover class bodies: namespaces, class/struct/union
//! definitions, enums and data members. Functions, templates, typedefs and
//! everything else are skipped by balancing brackets up to the end of the
//! declaration.

use formgen_core::{ast::*, ParseError};

use crate::lexer::{doc_text, tokenize, Token, TokenKind};

/// Parse a complete header.
pub fn parse(input: &str) -> Result<HeaderFile, ParseError> {
    let tokens = tokenize(input)?;
    let mut parser = Parser::new(&tokens);
    parser.parse_header()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Access {
    Public,
    Private,
}

/// Outcome of parsing something that starts with `class`/`struct`/`union`.
enum ClassHead {
    /// A full definition, plus names declared after the closing brace.
    Definition(ClassDecl, Declarators),
    /// A forward declaration.
    Forward,
    /// An elaborated type specifier such as `struct Foo *ptr;`. The parser
    /// is rewound so the declaration can be re-read as a member.
    Elaborated,
}

/// Outcome of parsing something that starts with `enum`.
enum EnumHead {
    Definition(EnumDecl, Declarators),
    Opaque,
    Elaborated,
}

/// Fields declared after a class or enum body, as in `struct { .. } Name;`.
struct Declarators {
    names: Vec<String>,
    /// Doc comment that preceded the whole declaration.
    doc: Option<String>,
}

/// Stateful parser that tracks position in the token list.
struct Parser<'a> {
    tokens: &'a [Token<'a>],
    pos: usize,
    pending_doc: Vec<String>,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token<'a>]) -> Self {
        Self {
            tokens,
            pos: 0,
            pending_doc: Vec::new(),
        }
    }

    /// Get current token, if any.
    fn current(&self) -> Option<&'a Token<'a>> {
        self.tokens.get(self.pos)
    }

    fn peek(&self, offset: usize) -> Option<&'a Token<'a>> {
        self.tokens.get(self.pos + offset)
    }

    /// Advance to next token.
    fn advance(&mut self) {
        self.pos += 1;
    }

    fn at(&self, text: &str) -> bool {
        self.current().is_some_and(|t| t.is(text))
    }

    fn line(&self) -> u32 {
        self.current()
            .or_else(|| self.tokens.last())
            .map_or(0, |t| t.line)
    }

    fn take_doc(&mut self) -> Option<String> {
        if self.pending_doc.is_empty() {
            None
        } else {
            let doc = self.pending_doc.join("\n");
            self.pending_doc.clear();
            Some(doc)
        }
    }

    fn expect(&mut self, text: &str, expected: &str) -> Result<&'a Token<'a>, ParseError> {
        match self.current() {
            Some(tok) if tok.is(text) => {
                self.advance();
                Ok(tok)
            }
            Some(tok) => Err(ParseError::UnexpectedToken {
                found: tok.text.to_string(),
                expected: expected.to_string(),
                line: tok.line,
            }),
            None => Err(ParseError::UnexpectedEof),
        }
    }

    /// Parse the full header.
    fn parse_header(&mut self) -> Result<HeaderFile, ParseError> {
        let mut classes = Vec::new();
        self.parse_scope_items(&mut classes, None)?;
        Ok(HeaderFile { classes })
    }

    /// Parse namespace-level items until the closing brace of the scope
    /// opened at `open_line`, or the end of input for the file scope.
    fn parse_scope_items(
        &mut self,
        classes: &mut Vec<ClassDecl>,
        open_line: Option<u32>,
    ) -> Result<(), ParseError> {
        loop {
            let Some(tok) = self.current() else {
                return match open_line {
                    Some(line) => Err(ParseError::UnbalancedBraces { line }),
                    None => Ok(()),
                };
            };

            match (tok.kind, tok.text) {
                (TokenKind::Punct, "}") => {
                    if open_line.is_none() {
                        return Err(ParseError::UnexpectedToken {
                            found: "}".to_string(),
                            expected: "declaration".to_string(),
                            line: tok.line,
                        });
                    }
                    self.advance();
                    self.pending_doc.clear();
                    return Ok(());
                }
                (TokenKind::Doc, _) => {
                    self.pending_doc.push(doc_text(tok.text));
                    self.advance();
                }
                (TokenKind::TrailingDoc, _) | (TokenKind::Punct, ";") => self.advance(),
                (TokenKind::Ident, "namespace") => self.parse_namespace(classes)?,
                (TokenKind::Ident, "inline")
                    if self.peek(1).is_some_and(|t| t.is("namespace")) =>
                {
                    self.advance();
                    self.parse_namespace(classes)?;
                }
                (TokenKind::Ident, "extern")
                    if self.peek(1).is_some_and(|t| t.kind == TokenKind::Literal)
                        && self.peek(2).is_some_and(|t| t.is("{")) =>
                {
                    self.advance();
                    self.advance();
                    let line = self.line();
                    self.advance();
                    self.parse_scope_items(classes, Some(line))?;
                }
                (TokenKind::Ident, "class" | "struct" | "union") => match self.parse_class_head()? {
                    ClassHead::Definition(class, _) => {
                        if !class.name.is_empty() {
                            classes.push(class);
                        }
                    }
                    ClassHead::Forward => {}
                    ClassHead::Elaborated => self.skip_declaration()?,
                },
                (TokenKind::Ident, "template") => {
                    self.skip_template_params()?;
                    self.skip_declaration()?;
                }
                _ => {
                    if !self.skip_macro_invocation() {
                        self.skip_declaration()?;
                    }
                }
            }
        }
    }

    /// Parse `namespace a::b { ... }` or a namespace alias.
    fn parse_namespace(&mut self, classes: &mut Vec<ClassDecl>) -> Result<(), ParseError> {
        self.advance();

        while let Some(tok) = self.current() {
            if tok.kind == TokenKind::Ident || tok.is("::") {
                self.advance();
            } else {
                break;
            }
        }

        if self.at("=") {
            return self.skip_declaration();
        }

        let line = self.line();
        self.expect("{", "namespace body")?;
        self.pending_doc.clear();
        self.parse_scope_items(classes, Some(line))
    }

    /// Parse a declaration starting with `class`, `struct` or `union`.
    fn parse_class_head(&mut self) -> Result<ClassHead, ParseError> {
        let start = self.pos;
        let Some(keyword) = self.current() else {
            return Err(ParseError::UnexpectedEof);
        };
        self.advance();
        self.skip_attributes()?;

        // The class name is the last identifier before the body, which skips
        // export macros such as `struct LIB_API Name {`.
        let mut names = Vec::new();
        while let Some(tok) = self.current() {
            match tok.kind {
                TokenKind::Ident if tok.text == "final" => self.advance(),
                TokenKind::Ident => {
                    names.push(tok.text);
                    self.advance();
                }
                TokenKind::Punct if tok.text == "::" => self.advance(),
                _ => break,
            }
        }

        let Some(tok) = self.current() else {
            return Err(ParseError::UnexpectedEof);
        };

        if tok.is(";") && names.len() <= 1 {
            self.advance();
            self.pending_doc.clear();
            return Ok(ClassHead::Forward);
        }

        if tok.is(":") {
            // Base clause, up to the body.
            while let Some(tok) = self.current() {
                if tok.is("{") {
                    break;
                }
                if tok.is(";") {
                    return Err(ParseError::UnexpectedToken {
                        found: ";".to_string(),
                        expected: "class body".to_string(),
                        line: tok.line,
                    });
                }
                if tok.is("(") {
                    self.skip_balanced()?;
                } else {
                    self.advance();
                }
            }
        } else if !tok.is("{") {
            self.pos = start;
            return Ok(ClassHead::Elaborated);
        }

        let open_line = self.line();
        self.expect("{", "class body")?;
        let doc = self.take_doc();

        let default_access = if keyword.text == "class" {
            Access::Private
        } else {
            Access::Public
        };
        let name = names.last().copied().unwrap_or_default();
        let class = self.parse_class_body(name, default_access, open_line)?;
        let names = self.parse_trailing_declarators()?;

        Ok(ClassHead::Definition(class, Declarators { names, doc }))
    }

    /// Parse class members up to and including the closing brace.
    fn parse_class_body(
        &mut self,
        name: &str,
        default_access: Access,
        open_line: u32,
    ) -> Result<ClassDecl, ParseError> {
        let mut class = ClassDecl {
            name: name.to_string(),
            span: Span { line: open_line },
            ..Default::default()
        };
        let mut access = default_access;
        let mut last_was_field = false;

        loop {
            let Some(tok) = self.current() else {
                return Err(ParseError::UnbalancedBraces { line: open_line });
            };
            let public = access == Access::Public;
            let mut added_field = false;

            match (tok.kind, tok.text) {
                (TokenKind::Punct, "}") => {
                    self.advance();
                    // A doc comment after the last member documents nothing.
                    self.pending_doc.clear();
                    break;
                }
                (TokenKind::Doc, _) => {
                    self.pending_doc.push(doc_text(tok.text));
                    self.advance();
                    continue;
                }
                (TokenKind::TrailingDoc, _) => {
                    if last_was_field {
                        if let Some(field) = class.fields.last_mut() {
                            append_doc(&mut field.doc, doc_text(tok.text));
                        }
                    }
                    self.advance();
                    continue;
                }
                (TokenKind::Punct, ";") => self.advance(),
                (TokenKind::Ident, "public" | "protected" | "private")
                    if self.peek(1).is_some_and(|t| t.is(":")) =>
                {
                    access = if tok.text == "public" {
                        Access::Public
                    } else {
                        Access::Private
                    };
                    self.advance();
                    self.advance();
                    self.pending_doc.clear();
                }
                (TokenKind::Ident, "enum") => match self.parse_enum_head()? {
                    EnumHead::Definition(decl, declarators) => {
                        if public {
                            added_field = !declarators.names.is_empty();
                            push_declarators(&mut class.fields, &decl.name, declarators, &decl.span);
                            class.enums.push(decl);
                        }
                    }
                    EnumHead::Opaque => {}
                    EnumHead::Elaborated => {
                        let fields = self.parse_member_declaration()?;
                        if public {
                            added_field = !fields.is_empty();
                            class.fields.extend(fields);
                        }
                    }
                },
                (TokenKind::Ident, "class" | "struct" | "union") => match self.parse_class_head()? {
                    ClassHead::Definition(nested, declarators) => {
                        if public {
                            added_field = !declarators.names.is_empty();
                            push_declarators(&mut class.fields, &nested.name, declarators, &nested.span);
                            if !nested.name.is_empty() {
                                class.nested.push(nested);
                            }
                        }
                    }
                    ClassHead::Forward => {}
                    ClassHead::Elaborated => {
                        let fields = self.parse_member_declaration()?;
                        if public {
                            added_field = !fields.is_empty();
                            class.fields.extend(fields);
                        }
                    }
                },
                (TokenKind::Ident, "template") => {
                    self.skip_template_params()?;
                    self.skip_declaration()?;
                }
                (
                    TokenKind::Ident,
                    "using" | "typedef" | "friend" | "static_assert" | "static" | "constexpr"
                    | "virtual" | "explicit" | "inline",
                ) => self.skip_declaration()?,
                _ => {
                    if !self.skip_macro_invocation() {
                        let fields = self.parse_member_declaration()?;
                        if public {
                            added_field = !fields.is_empty();
                            class.fields.extend(fields);
                        }
                    }
                }
            }

            last_was_field = added_field;
        }

        Ok(class)
    }

    /// Parse `enum [class] Name [: type] { ... } [declarators];`.
    fn parse_enum_head(&mut self) -> Result<EnumHead, ParseError> {
        let start = self.pos;
        let line = self.line();
        self.advance();

        let scoped = self.at("class") || self.at("struct");
        if scoped {
            self.advance();
        }
        self.skip_attributes()?;

        let name = match self.current() {
            Some(tok) if tok.kind == TokenKind::Ident => {
                self.advance();
                tok.text
            }
            _ => "",
        };

        if self.at(":") {
            while let Some(tok) = self.current() {
                if tok.is("{") || tok.is(";") {
                    break;
                }
                self.advance();
            }
        }

        if self.at(";") {
            self.advance();
            self.pending_doc.clear();
            return Ok(EnumHead::Opaque);
        }
        if !self.at("{") {
            self.pos = start;
            return Ok(EnumHead::Elaborated);
        }

        let open_line = self.line();
        self.advance();
        let doc = self.take_doc();

        let mut values: Vec<EnumValue> = Vec::new();
        loop {
            let Some(tok) = self.current() else {
                return Err(ParseError::UnbalancedBraces { line: open_line });
            };
            match tok.kind {
                TokenKind::Doc => {
                    self.pending_doc.push(doc_text(tok.text));
                    self.advance();
                }
                TokenKind::TrailingDoc => {
                    if let Some(value) = values.last_mut() {
                        append_doc(&mut value.doc, doc_text(tok.text));
                    }
                    self.advance();
                }
                TokenKind::Punct if tok.text == "}" => {
                    self.advance();
                    self.pending_doc.clear();
                    break;
                }
                TokenKind::Punct if tok.text == "," => self.advance(),
                TokenKind::Ident => {
                    self.advance();
                    self.skip_attributes()?;
                    if self.at("=") {
                        self.skip_until_any(&[",", "}"])?;
                    }
                    values.push(EnumValue {
                        name: tok.text.to_string(),
                        doc: self.take_doc(),
                    });
                }
                _ => {
                    return Err(ParseError::UnexpectedToken {
                        found: tok.text.to_string(),
                        expected: "enumerator".to_string(),
                        line: tok.line,
                    })
                }
            }
        }

        let names = self.parse_trailing_declarators()?;

        Ok(EnumHead::Definition(
            EnumDecl {
                name: name.to_string(),
                values,
                scoped,
                span: Span { line },
            },
            Declarators { names, doc },
        ))
    }

    /// Parse the names declared after a class or enum body, up to `;`.
    fn parse_trailing_declarators(&mut self) -> Result<Vec<String>, ParseError> {
        let mut names = Vec::new();
        let mut last_ident = None;

        loop {
            let tok = self.current().ok_or(ParseError::UnexpectedEof)?;
            match tok.text {
                ";" if tok.kind == TokenKind::Punct => {
                    self.advance();
                    break;
                }
                "," if tok.kind == TokenKind::Punct => {
                    names.extend(last_ident.take());
                    self.advance();
                }
                "[" | "(" | "{" if tok.kind == TokenKind::Punct => self.skip_balanced()?,
                "=" if tok.kind == TokenKind::Punct => {
                    self.skip_until_any(&[",", ";"])?;
                }
                _ => {
                    if tok.kind == TokenKind::Ident {
                        last_ident = Some(tok.text.to_string());
                    }
                    self.advance();
                }
            }
        }
        names.extend(last_ident);

        Ok(names)
    }

    /// Parse a data member or function declaration. Functions yield no fields.
    fn parse_member_declaration(&mut self) -> Result<Vec<FieldDecl>, ParseError> {
        let line = self.line();
        let doc = self.take_doc();

        let mut decl: Vec<&'a Token<'a>> = Vec::new();
        let mut is_function = false;
        let mut in_ctor_init = false;
        let mut in_init = false;
        let mut angle_depth = 0usize;
        let mut prev: Option<&'a Token<'a>> = None;

        loop {
            let tok = self.current().ok_or(ParseError::UnexpectedEof)?;

            if tok.kind == TokenKind::Ident && tok.text == "operator" {
                is_function = true;
                self.advance();
                if self.at("(") {
                    self.skip_balanced()?;
                }
                while let Some(t) = self.current() {
                    if t.is("(") {
                        break;
                    }
                    self.advance();
                }
                prev = Some(tok);
                continue;
            }

            if tok.kind != TokenKind::Punct {
                let significant = matches!(
                    tok.kind,
                    TokenKind::Ident | TokenKind::Number | TokenKind::Literal
                );
                if significant && !is_function && !in_init {
                    decl.push(tok);
                }
                prev = Some(tok);
                self.advance();
                continue;
            }

            match tok.text {
                ";" => {
                    self.advance();
                    break;
                }
                "}" => {
                    return Err(ParseError::UnexpectedToken {
                        found: "}".to_string(),
                        expected: "';'".to_string(),
                        line: tok.line,
                    });
                }
                "(" => {
                    if !in_init {
                        is_function = true;
                    }
                    self.skip_balanced()?;
                }
                "{" => {
                    let member_init = in_ctor_init
                        && prev.is_some_and(|p| p.kind == TokenKind::Ident || p.is(">"));
                    if is_function && !member_init {
                        self.skip_balanced()?;
                        if self.at(";") {
                            self.advance();
                        }
                        break;
                    }
                    self.skip_balanced()?;
                    if !is_function {
                        in_init = true;
                    }
                }
                "[" => self.skip_balanced()?,
                "=" => {
                    in_init = true;
                    self.advance();
                }
                ":" if is_function => {
                    in_ctor_init = true;
                    self.advance();
                }
                ":" if angle_depth == 0 && !in_init => {
                    // Bit-field width.
                    in_init = true;
                    self.advance();
                }
                "," if angle_depth == 0 && !is_function => {
                    in_init = false;
                    decl.push(tok);
                    self.advance();
                }
                _ => {
                    if !is_function && !in_init {
                        match tok.text {
                            "<" => angle_depth += 1,
                            ">" => angle_depth = angle_depth.saturating_sub(1),
                            _ => {}
                        }
                        decl.push(tok);
                    }
                    self.advance();
                }
            }
            // Bracket groups leave `prev` pointing at their closing token.
            prev = self.pos.checked_sub(1).and_then(|i| self.tokens.get(i));
        }

        if is_function {
            return Ok(Vec::new());
        }

        Ok(build_fields(&decl, doc, line))
    }

    /// Skip `[[...]]` attributes and `alignas(...)`.
    fn skip_attributes(&mut self) -> Result<(), ParseError> {
        loop {
            if self.at("[") && self.peek(1).is_some_and(|t| t.is("[")) {
                self.skip_balanced()?;
            } else if self.at("alignas") && self.peek(1).is_some_and(|t| t.is("(")) {
                self.advance();
                self.skip_balanced()?;
            } else {
                return Ok(());
            }
        }
    }

    /// Skip `template <...>`.
    fn skip_template_params(&mut self) -> Result<(), ParseError> {
        self.advance();
        if !self.at("<") {
            return Ok(());
        }

        let mut depth = 0usize;
        while let Some(tok) = self.current() {
            match tok.text {
                "<" => depth += 1,
                ">" => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        self.advance();
                        return Ok(());
                    }
                }
                "(" => {
                    self.skip_balanced()?;
                    continue;
                }
                _ => {}
            }
            self.advance();
        }

        Err(ParseError::UnexpectedEof)
    }

    /// Skip a bracketed group starting at the current token.
    fn skip_balanced(&mut self) -> Result<(), ParseError> {
        let open_line = self.line();
        let mut stack: Vec<&str> = Vec::new();

        while let Some(tok) = self.current() {
            if tok.kind == TokenKind::Punct {
                match tok.text {
                    "(" => stack.push(")"),
                    "[" => stack.push("]"),
                    "{" => stack.push("}"),
                    ")" | "]" | "}" => {
                        if stack.pop() != Some(tok.text) {
                            return Err(ParseError::UnexpectedToken {
                                found: tok.text.to_string(),
                                expected: "matching bracket".to_string(),
                                line: tok.line,
                            });
                        }
                    }
                    _ => {}
                }
            }
            self.advance();
            if stack.is_empty() {
                return Ok(());
            }
        }

        Err(ParseError::UnbalancedBraces { line: open_line })
    }

    /// Advance to the first of `stops` outside brackets, without consuming it.
    fn skip_until_any(&mut self, stops: &[&str]) -> Result<(), ParseError> {
        while let Some(tok) = self.current() {
            if tok.kind == TokenKind::Punct {
                if stops.contains(&tok.text) {
                    return Ok(());
                }
                if matches!(tok.text, "(" | "[" | "{") {
                    self.skip_balanced()?;
                    continue;
                }
            }
            self.advance();
        }
        Err(ParseError::UnexpectedEof)
    }

    /// Skip one declaration, including a function body if present.
    fn skip_declaration(&mut self) -> Result<(), ParseError> {
        self.pending_doc.clear();

        while let Some(tok) = self.current() {
            if tok.kind == TokenKind::Punct {
                match tok.text {
                    ";" => {
                        self.advance();
                        return Ok(());
                    }
                    "}" => return Ok(()),
                    "{" => {
                        self.skip_balanced()?;
                        if self.at(";") {
                            self.advance();
                        }
                        return Ok(());
                    }
                    "(" | "[" => {
                        self.skip_balanced()?;
                        continue;
                    }
                    _ => {}
                }
            }
            self.advance();
        }

        Err(ParseError::UnexpectedEof)
    }

    /// Skip an upper-case macro invocation that is not terminated by `;`,
    /// such as `Q_OBJECT` or `DECLARE_THING(x)` on a line of its own.
    fn skip_macro_invocation(&mut self) -> bool {
        let Some(tok) = self.current() else {
            return false;
        };
        if tok.kind != TokenKind::Ident || !is_macro_name(tok.text) {
            return false;
        }

        let mut end = self.pos + 1;
        if self.tokens.get(end).is_some_and(|t| t.is("(") && t.line == tok.line) {
            let mut depth = 0usize;
            while let Some(t) = self.tokens.get(end) {
                match t.text {
                    "(" if t.kind == TokenKind::Punct => depth += 1,
                    ")" if t.kind == TokenKind::Punct => {
                        depth -= 1;
                        if depth == 0 {
                            break;
                        }
                    }
                    _ => {}
                }
                end += 1;
            }
            end += 1;
        }

        let last_line = self.tokens[end.min(self.tokens.len()) - 1].line;
        let stands_alone = match self.tokens.get(end) {
            None => true,
            Some(next) => next.line > last_line && !matches!(next.text, ";" | "{" | ":" | "("),
        };

        if stands_alone {
            self.pos = end.min(self.tokens.len());
            self.pending_doc.clear();
        }
        stands_alone
    }
}

fn is_macro_name(text: &str) -> bool {
    text.len() > 1
        && text.chars().any(|c| c.is_ascii_uppercase())
        && text
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

fn append_doc(doc: &mut Option<String>, text: String) {
    match doc {
        Some(existing) => {
            existing.push('\n');
            existing.push_str(&text);
        }
        None => *doc = Some(text),
    }
}

fn push_declarators(fields: &mut Vec<FieldDecl>, ty: &str, declarators: Declarators, span: &Span) {
    for name in declarators.names {
        fields.push(FieldDecl {
            name,
            ty: TypeName::parse(ty),
            doc: declarators.doc.clone(),
            span: *span,
        });
    }
}

/// Turn the specifier and declarator tokens of a member declaration into fields.
fn build_fields(tokens: &[&Token<'_>], doc: Option<String>, line: u32) -> Vec<FieldDecl> {
    let mut parts: Vec<Vec<&Token<'_>>> = vec![Vec::new()];
    let mut depth = 0usize;
    for &tok in tokens {
        match tok.text {
            "<" => depth += 1,
            ">" => depth = depth.saturating_sub(1),
            "," if depth == 0 => {
                parts.push(Vec::new());
                continue;
            }
            _ => {}
        }
        if let Some(part) = parts.last_mut() {
            part.push(tok);
        }
    }

    let first = &parts[0];
    let Some(name_idx) = first.iter().rposition(|t| t.kind == TokenKind::Ident) else {
        return Vec::new();
    };

    let specifiers: Vec<&str> = first[..name_idx]
        .iter()
        .map(|t| t.text)
        .filter(|t| !matches!(*t, "mutable" | "volatile"))
        .collect();
    if specifiers.is_empty() {
        return Vec::new();
    }

    let span = Span { line };
    let mut fields = vec![FieldDecl {
        name: first[name_idx].text.to_string(),
        ty: TypeName::from_tokens(specifiers.iter().copied()),
        doc: doc.clone(),
        span,
    }];

    // Pointer and reference markers bind to the declarator, not the base type.
    let base_len = specifiers
        .iter()
        .rposition(|t| !matches!(*t, "*" | "&" | "&&"))
        .map_or(0, |i| i + 1);
    let base = &specifiers[..base_len];

    for part in &parts[1..] {
        let Some(idx) = part.iter().rposition(|t| t.kind == TokenKind::Ident) else {
            continue;
        };
        let ty = base
            .iter()
            .copied()
            .chain(part[..idx].iter().map(|t| t.text));
        fields.push(FieldDecl {
            name: part[idx].text.to_string(),
            ty: TypeName::from_tokens(ty),
            doc: doc.clone(),
            span,
        });
    }

    fields
}
