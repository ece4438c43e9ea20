// @generated by ast-gen from the `Stmt` grammar. Do not edit.

use crate::scanner::Token;
use crate::expr::Expr;

#[derive(Debug, Clone)]
pub enum Stmt {
    Block(Block),
    Break(Break),
    Continue(Continue),
    Expression(Expression),
    Function(Function),
    If(If),
    Print(Print),
    Return(Return),
    Var(Var),
    While(While),
}

#[derive(Debug, Clone)]
pub struct Block {
    pub statements: Vec<Stmt>,
}

#[derive(Debug, Clone)]
pub struct Break {}

#[derive(Debug, Clone)]
pub struct Continue {}

#[derive(Debug, Clone)]
pub struct Expression {
    pub expression: Box<Expr>,
}

#[derive(Debug, Clone)]
pub struct Function {
    pub name: Token,
    pub params: Vec<Token>,
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone)]
pub struct If {
    pub condition: Box<Expr>,
    pub then_branch: Box<Stmt>,
    pub else_branch: Option<Box<Stmt>>,
}

#[derive(Debug, Clone)]
pub struct Print {
    pub expression: Box<Expr>,
}

#[derive(Debug, Clone)]
pub struct Return {
    pub keyword: Token,
    pub value: Option<Box<Expr>>,
}

#[derive(Debug, Clone)]
pub struct Var {
    pub name: Token,
    pub initializer: Option<Box<Expr>>,
}

#[derive(Debug, Clone)]
pub struct While {
    pub condition: Box<Expr>,
    pub body: Box<Stmt>,
    pub is_for: bool,
}

pub trait Visitor<T> {
    fn visit_block(&mut self, node: &Block) -> T;
    fn visit_break(&mut self, node: &Break) -> T;
    fn visit_continue(&mut self, node: &Continue) -> T;
    fn visit_expression(&mut self, node: &Expression) -> T;
    fn visit_function(&mut self, node: &Function) -> T;
    fn visit_if(&mut self, node: &If) -> T;
    fn visit_print(&mut self, node: &Print) -> T;
    fn visit_return(&mut self, node: &Return) -> T;
    fn visit_var(&mut self, node: &Var) -> T;
    fn visit_while(&mut self, node: &While) -> T;
}

impl Stmt {
    pub fn accept<T>(&self, visitor: &mut dyn Visitor<T>) -> T {
        match self {
            Stmt::Block(node) => visitor.visit_block(node),
            Stmt::Break(node) => visitor.visit_break(node),
            Stmt::Continue(node) => visitor.visit_continue(node),
            Stmt::Expression(node) => visitor.visit_expression(node),
            Stmt::Function(node) => visitor.visit_function(node),
            Stmt::If(node) => visitor.visit_if(node),
            Stmt::Print(node) => visitor.visit_print(node),
            Stmt::Return(node) => visitor.visit_return(node),
            Stmt::Var(node) => visitor.visit_var(node),
            Stmt::While(node) => visitor.visit_while(node),
        }
    }
}
