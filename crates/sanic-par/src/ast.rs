//! The AST (C4): a closed sum-type tree. Each node is dispatched by
//! exhaustive `match` rather than a visitor interface — both in the
//! [`std::fmt::Display`] pretty-printer below and in `sanic-gen`'s
//! emitter — so the compiler flags any missing case.

use std::rc::Rc;

use sanic_lex::Token;

/// A binary arithmetic operator. Left-associative at both precedence
/// levels; `*`/`/` bind tighter than `+`/`-`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinOpKind {
    Add,
    Sub,
    Mul,
    Div,
}

impl std::fmt::Display for BinOpKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BinOpKind::Add => "+",
            BinOpKind::Sub => "-",
            BinOpKind::Mul => "*",
            BinOpKind::Div => "/",
        };
        write!(f, "{s}")
    }
}

/// An expression node.
#[derive(Debug)]
pub enum Expr {
    Integer { token: Rc<Token>, value: i32 },
    Char { token: Rc<Token>, value: i32 },
    Str { token: Rc<Token>, value: String },
    Ident { token: Rc<Token>, name: String },
    Call { callee_token: Rc<Token>, callee: String, args: Vec<Expr> },
    BinOp { kind: BinOpKind, left: Box<Expr>, right: Box<Expr> },
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Integer { value, .. } => write!(f, "{value}"),
            Expr::Char { value, .. } => {
                write!(f, "'{}'", char::from_u32(*value as u32).unwrap_or('\u{FFFD}'))
            }
            Expr::Str { value, .. } => write!(f, "\"{value}\""),
            Expr::Ident { name, .. } => write!(f, "{name}"),
            Expr::Call { callee, args, .. } => {
                write!(f, "{callee}(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, ")")
            }
            Expr::BinOp { kind, left, right } => write!(f, "({left}) {kind} ({right})"),
        }
    }
}

/// A type annotation.
#[derive(Debug, Clone)]
pub enum Type {
    Int,
    Str,
    Func(FuncType),
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Type::Int => write!(f, "int"),
            Type::Str => write!(f, "string"),
            Type::Func(ft) => write!(f, "{ft}"),
        }
    }
}

/// `(T, T, ...) -> T`.
#[derive(Debug, Clone)]
pub struct FuncType {
    pub params: Vec<Type>,
    pub ret: Box<Type>,
}

impl std::fmt::Display for FuncType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(")?;
        for (i, p) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{p}")?;
        }
        write!(f, ") -> {}", self.ret)
    }
}

/// A top-level statement.
#[derive(Debug)]
pub enum Stmt {
    Expr(Expr),
    Let { name: String, ty: Type, value: Expr },
}

impl std::fmt::Display for Stmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stmt::Expr(e) => write!(f, "{e};"),
            Stmt::Let { name, ty, value } => write!(f, "let {name}: {ty} = {value};"),
        }
    }
}

/// An `extern name: (T, ...) -> T;` declaration.
#[derive(Debug)]
pub struct Extern {
    pub name: String,
    pub ty: FuncType,
}

impl std::fmt::Display for Extern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "extern {}: {};", self.name, self.ty)
    }
}

/// The root node: externs in declaration order, then statements in
/// execution order.
#[derive(Debug, Default)]
pub struct File {
    pub externs: Vec<Extern>,
    pub statements: Vec<Stmt>,
}

impl std::fmt::Display for File {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for ext in &self.externs {
            writeln!(f, "{ext}")?;
        }
        for stmt in &self.statements {
            writeln!(f, "{stmt}")?;
        }
        Ok(())
    }
}


/// Pretty-print determinism: printing an AST, re-lexing and re-parsing the
/// printed text, then printing the result again always yields the same
/// text. The `Expr`/`BinOp` printer always fully parenthesizes, so the
/// round trip is unambiguous — see `expr.rs`'s precedence tests for the
/// grammar that accepts it back.
#[cfg(test)]
mod pretty_print_properties {
    use proptest::prelude::*;

    use sanic_lex::Lexer;
    use sanic_util::FileId;

    use super::*;
    use crate::Parser;

    fn dummy_token() -> Rc<Token> {
        use sanic_lex::TokenKind;
        use sanic_util::Span;
        Token::new("x", TokenKind::Word, Span::new(1, 1, 2, FileId::DUMMY))
    }

    /// A short lowercase name, excluding the two statement-leading keywords
    /// so a printed `Ident`/`Call` can never be re-parsed as a `let` or
    /// `extern` item instead of an expression statement.
    fn arb_name() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9]{0,4}".prop_filter("not a reserved word", |s| !matches!(s.as_str(), "let" | "extern"))
    }

    fn arb_binop_kind() -> impl Strategy<Value = BinOpKind> {
        prop_oneof![
            Just(BinOpKind::Add),
            Just(BinOpKind::Sub),
            Just(BinOpKind::Mul),
            Just(BinOpKind::Div),
        ]
    }

    fn arb_leaf() -> BoxedStrategy<Expr> {
        prop_oneof![
            (0i32..1000).prop_map(|value| Expr::Integer { token: dummy_token(), value }),
            ('a'..='z').prop_map(|value| Expr::Char { token: dummy_token(), value: value as i32 }),
            "[a-z]{0,6}".prop_map(|value| Expr::Str { token: dummy_token(), value }),
            arb_name().prop_map(|name| Expr::Ident { token: dummy_token(), name }),
        ]
        .boxed()
    }

    /// Builds an `Expr` of bounded depth: leaves at depth 0, binary
    /// operators and calls (over smaller subtrees) at greater depth.
    fn arb_expr(depth: u32) -> BoxedStrategy<Expr> {
        if depth == 0 {
            return arb_leaf();
        }
        let smaller = arb_expr(depth - 1);
        prop_oneof![
            3 => arb_leaf(),
            2 => (arb_binop_kind(), smaller.clone(), smaller.clone()).prop_map(|(kind, left, right)| {
                Expr::BinOp { kind, left: Box::new(left), right: Box::new(right) }
            }),
            2 => (arb_name(), prop::collection::vec(smaller, 0..3)).prop_map(|(callee, args)| {
                Expr::Call { callee_token: dummy_token(), callee, args }
            }),
        ]
        .boxed()
    }

    fn reprint(text: &str) -> String {
        let tokens = Lexer::new(text, FileId::DUMMY).tokenize().expect("printed AST must re-lex");
        Parser::parse(tokens).expect("printed AST must re-parse").to_string()
    }

    proptest! {
        #[test]
        fn expr_pretty_print_is_idempotent_through_a_round_trip(expr in arb_expr(3)) {
            let file = File { externs: Vec::new(), statements: vec![Stmt::Expr(expr)] };
            let printed = file.to_string();
            prop_assert_eq!(reprint(&printed), printed);
        }

        #[test]
        fn file_pretty_print_is_idempotent_through_a_round_trip(
            exprs in prop::collection::vec(arb_expr(2), 1..4),
        ) {
            let file = File {
                externs: Vec::new(),
                statements: exprs.into_iter().map(Stmt::Expr).collect(),
            };
            let printed = file.to_string();
            prop_assert_eq!(reprint(&printed), printed);
        }
    }
}
