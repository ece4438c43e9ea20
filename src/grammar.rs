//! Declarative grammar configuration.
//!
//! A family is a name plus a list of rules, one per variant, written as
//! `Variant : Type field, Type field, ...`. The grammar is compiled into the
//! generator (see [`lox`]); the rule text is a fixed format, not a language.
use serde::Serialize;

use crate::error::GenError;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// Literal configuration for one node family.
#[derive(Debug, Clone)]
pub struct FamilyDecl {
    pub name: String,
    pub identity: Option<IdentitySpec>,
    /// `use` paths written at the top of the artifact, verbatim.
    pub imports: Vec<String>,
    pub derives: Vec<String>,
    pub rules: Vec<String>,
}

/// Synthetic per-node identity. The consumer mints the values; the type must be `Copy`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentitySpec {
    pub field: String,
    pub ty: String,
}

/// One rule split into its variant name and unresolved field texts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawVariant {
    pub name: String,
    pub fields: Vec<RawField>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawField {
    pub ty: String,
    pub name: String,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl Default for IdentitySpec {
    fn default() -> Self {
        Self { field: "id".to_string(), ty: "usize".to_string() }
    }
}

impl FamilyDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            identity: None,
            imports: Vec::new(),
            derives: Vec::new(),
            rules: Vec::new(),
        }
    }
    pub fn identity(mut self, spec: IdentitySpec) -> Self {
        self.identity = Some(spec);
        self
    }
    pub fn import(mut self, path: impl Into<String>) -> Self {
        self.imports.push(path.into());
        self
    }
    pub fn derive(mut self, name: impl Into<String>) -> Self {
        self.derives.push(name.into());
        self
    }
    pub fn rule(mut self, line: impl Into<String>) -> Self {
        self.rules.push(line.into());
        self
    }
}

/// Split `Variant : Type field, ...` into its parts. An empty right-hand side
/// is a variant without structural fields.
pub fn parse_rule(family: &str, line: &str) -> Result<RawVariant, GenError> {
    let malformed_rule = || GenError::MalformedVariant {
        family: family.to_string(),
        line: line.to_string(),
    };
    let (name, rhs) = line.split_once(':').ok_or_else(malformed_rule)?;
    let name = name.trim();
    if name.is_empty() || name.split_whitespace().count() != 1 {
        return Err(malformed_rule());
    }

    let rhs = rhs.trim();
    if rhs.is_empty() {
        return Ok(RawVariant { name: name.to_string(), fields: Vec::new() });
    }

    let fields = rhs
        .split(',')
        .map(|text| parse_field(family, name, text))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(RawVariant { name: name.to_string(), fields })
}

fn parse_field(family: &str, variant: &str, text: &str) -> Result<RawField, GenError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    match tokens.as_slice() {
        [ty, name] => Ok(RawField { ty: ty.to_string(), name: name.to_string() }),
        _ => Err(GenError::MalformedField {
            family: family.to_string(),
            variant: variant.to_string(),
            field: text.trim().to_string(),
        }),
    }
}

/// The built-in grammar: expressions (identity-bearing) and statements.
pub fn lox() -> Vec<FamilyDecl> {
    let expr = FamilyDecl::new("Expr")
        .identity(IdentitySpec::default())
        .import("crate::scanner::{LiteralType, Token}")
        .derive("Debug")
        .derive("Clone")
        .rule("Assign      : Token name, Expr value")
        .rule("Binary      : Expr left, Token operator, Expr right")
        .rule("Call        : Expr callee, Token paren, Vec<Expr> arguments")
        .rule("Conditional : Expr condition, Expr then_branch, Expr else_branch")
        .rule("Grouping    : Expr expression")
        .rule("Literal     : LiteralType value")
        .rule("Logical     : Expr left, Token operator, Expr right")
        .rule("Unary       : Token operator, Expr right")
        .rule("Variable    : Token name");

    let stmt = FamilyDecl::new("Stmt")
        .import("crate::scanner::Token")
        .derive("Debug")
        .derive("Clone")
        .rule("Block      : Vec<Stmt> statements")
        .rule("Break      :")
        .rule("Continue   :")
        .rule("Expression : Expr expression")
        .rule("Function   : Token name, Vec<Token> params, Vec<Stmt> body")
        .rule("If         : Expr condition, Stmt then_branch, Option<Stmt> else_branch")
        .rule("Print      : Expr expression")
        .rule("Return     : Token keyword, Option<Expr> value")
        .rule("Var        : Token name, Option<Expr> initializer")
        .rule("While      : Expr condition, Stmt body, bool is_for");

    vec![expr, stmt]
}

// ————————————————————————————————————————————————————————————————————————————
// TESTS
// ————————————————————————————————————————————————————————————————————————————
