// @generated by ast-gen from the `Expr` grammar. Do not edit.

use crate::scanner::{LiteralType, Token};

#[derive(Debug, Clone)]
pub enum Expr {
    Assign(Assign),
    Binary(Binary),
    Call(Call),
    Conditional(Conditional),
    Grouping(Grouping),
    Literal(Literal),
    Logical(Logical),
    Unary(Unary),
    Variable(Variable),
}

#[derive(Debug, Clone)]
pub struct Assign {
    pub name: Token,
    pub value: Box<Expr>,
    pub id: usize,
}

#[derive(Debug, Clone)]
pub struct Binary {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
    pub id: usize,
}

#[derive(Debug, Clone)]
pub struct Call {
    pub callee: Box<Expr>,
    pub paren: Token,
    pub arguments: Vec<Expr>,
    pub id: usize,
}

#[derive(Debug, Clone)]
pub struct Conditional {
    pub condition: Box<Expr>,
    pub then_branch: Box<Expr>,
    pub else_branch: Box<Expr>,
    pub id: usize,
}

#[derive(Debug, Clone)]
pub struct Grouping {
    pub expression: Box<Expr>,
    pub id: usize,
}

#[derive(Debug, Clone)]
pub struct Literal {
    pub value: LiteralType,
    pub id: usize,
}

#[derive(Debug, Clone)]
pub struct Logical {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
    pub id: usize,
}

#[derive(Debug, Clone)]
pub struct Unary {
    pub operator: Token,
    pub right: Box<Expr>,
    pub id: usize,
}

#[derive(Debug, Clone)]
pub struct Variable {
    pub name: Token,
    pub id: usize,
}

pub trait Visitor<T> {
    fn visit_assign(&mut self, node: &Assign) -> T;
    fn visit_binary(&mut self, node: &Binary) -> T;
    fn visit_call(&mut self, node: &Call) -> T;
    fn visit_conditional(&mut self, node: &Conditional) -> T;
    fn visit_grouping(&mut self, node: &Grouping) -> T;
    fn visit_literal(&mut self, node: &Literal) -> T;
    fn visit_logical(&mut self, node: &Logical) -> T;
    fn visit_unary(&mut self, node: &Unary) -> T;
    fn visit_variable(&mut self, node: &Variable) -> T;
}

impl Expr {
    pub fn accept<T>(&self, visitor: &mut dyn Visitor<T>) -> T {
        match self {
            Expr::Assign(node) => visitor.visit_assign(node),
            Expr::Binary(node) => visitor.visit_binary(node),
            Expr::Call(node) => visitor.visit_call(node),
            Expr::Conditional(node) => visitor.visit_conditional(node),
            Expr::Grouping(node) => visitor.visit_grouping(node),
            Expr::Literal(node) => visitor.visit_literal(node),
            Expr::Logical(node) => visitor.visit_logical(node),
            Expr::Unary(node) => visitor.visit_unary(node),
            Expr::Variable(node) => visitor.visit_variable(node),
        }
    }

    pub fn id(&self) -> usize {
        match self {
            Expr::Assign(node) => node.id,
            Expr::Binary(node) => node.id,
            Expr::Call(node) => node.id,
            Expr::Conditional(node) => node.id,
            Expr::Grouping(node) => node.id,
            Expr::Literal(node) => node.id,
            Expr::Logical(node) => node.id,
            Expr::Unary(node) => node.id,
            Expr::Variable(node) => node.id,
        }
    }
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for Expr {}

impl std::hash::Hash for Expr {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::hash::Hash::hash(&self.id(), state);
    }
}

impl PartialOrd for Expr {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Expr {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.id().cmp(&other.id())
    }
}
