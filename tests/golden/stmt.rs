// Generated by generate_ast from the `Stmt` grammar. Do not edit.

use super::*;

#[derive(Debug, Clone)]
pub enum Stmt {
    Block(Box<Block>),
    Expression(Box<Expression>),
    Print(Box<Print>),
    Var(Box<Var>),
}

impl Stmt {
    pub fn accept<R>(&self, visitor: &mut dyn StmtVisitor<R>) -> R {
        match self {
            Stmt::Block(node) => node.accept(visitor),
            Stmt::Expression(node) => node.accept(visitor),
            Stmt::Print(node) => node.accept(visitor),
            Stmt::Var(node) => node.accept(visitor),
        }
    }
}

pub trait StmtVisitor<R> {
    fn visit_block_stmt(&mut self, stmt: &Block) -> R;
    fn visit_expression_stmt(&mut self, stmt: &Expression) -> R;
    fn visit_print_stmt(&mut self, stmt: &Print) -> R;
    fn visit_var_stmt(&mut self, stmt: &Var) -> R;
}

#[derive(Debug, Clone)]
pub struct Block {
    statements: List<Stmt>,
}

impl Block {
    pub fn new(statements: List<Stmt>) -> Self {
        Self { statements }
    }

    pub fn statements(&self) -> &List<Stmt> {
        &self.statements
    }

    pub fn accept<R>(&self, visitor: &mut dyn StmtVisitor<R>) -> R {
        visitor.visit_block_stmt(self)
    }
}

impl From<Block> for Stmt {
    fn from(node: Block) -> Self {
        Stmt::Block(Box::new(node))
    }
}

#[derive(Debug, Clone)]
pub struct Expression {
    expression: Expr,
}

impl Expression {
    pub fn new(expression: Expr) -> Self {
        Self { expression }
    }

    pub fn expression(&self) -> &Expr {
        &self.expression
    }

    pub fn accept<R>(&self, visitor: &mut dyn StmtVisitor<R>) -> R {
        visitor.visit_expression_stmt(self)
    }
}

impl From<Expression> for Stmt {
    fn from(node: Expression) -> Self {
        Stmt::Expression(Box::new(node))
    }
}

#[derive(Debug, Clone)]
pub struct Print {
    expression: Expr,
}

impl Print {
    pub fn new(expression: Expr) -> Self {
        Self { expression }
    }

    pub fn expression(&self) -> &Expr {
        &self.expression
    }

    pub fn accept<R>(&self, visitor: &mut dyn StmtVisitor<R>) -> R {
        visitor.visit_print_stmt(self)
    }
}

impl From<Print> for Stmt {
    fn from(node: Print) -> Self {
        Stmt::Print(Box::new(node))
    }
}

#[derive(Debug, Clone)]
pub struct Var {
    name: Token,
    initializer: Expr,
}

impl Var {
    pub fn new(name: Token, initializer: Expr) -> Self {
        Self { name, initializer }
    }

    pub fn name(&self) -> &Token {
        &self.name
    }

    pub fn initializer(&self) -> &Expr {
        &self.initializer
    }

    pub fn accept<R>(&self, visitor: &mut dyn StmtVisitor<R>) -> R {
        visitor.visit_var_stmt(self)
    }
}

impl From<Var> for Stmt {
    fn from(node: Var) -> Self {
        Stmt::Var(Box::new(node))
    }
}
