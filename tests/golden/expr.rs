// Generated by generate_ast from the `Expr` grammar. Do not edit.

use super::*;

#[derive(Debug, Clone)]
pub enum Expr {
    Binary(Box<Binary>),
    Grouping(Box<Grouping>),
    Literal(Box<Literal>),
    Unary(Box<Unary>),
}

impl Expr {
    pub fn accept<R>(&self, visitor: &mut dyn ExprVisitor<R>) -> R {
        match self {
            Expr::Binary(node) => node.accept(visitor),
            Expr::Grouping(node) => node.accept(visitor),
            Expr::Literal(node) => node.accept(visitor),
            Expr::Unary(node) => node.accept(visitor),
        }
    }
}

pub trait ExprVisitor<R> {
    fn visit_binary_expr(&mut self, expr: &Binary) -> R;
    fn visit_grouping_expr(&mut self, expr: &Grouping) -> R;
    fn visit_literal_expr(&mut self, expr: &Literal) -> R;
    fn visit_unary_expr(&mut self, expr: &Unary) -> R;
}

#[derive(Debug, Clone)]
pub struct Binary {
    left: Expr,
    operator: Token,
    right: Expr,
}

impl Binary {
    pub fn new(left: Expr, operator: Token, right: Expr) -> Self {
        Self { left, operator, right }
    }

    pub fn left(&self) -> &Expr {
        &self.left
    }

    pub fn operator(&self) -> &Token {
        &self.operator
    }

    pub fn right(&self) -> &Expr {
        &self.right
    }

    pub fn accept<R>(&self, visitor: &mut dyn ExprVisitor<R>) -> R {
        visitor.visit_binary_expr(self)
    }
}

impl From<Binary> for Expr {
    fn from(node: Binary) -> Self {
        Expr::Binary(Box::new(node))
    }
}

#[derive(Debug, Clone)]
pub struct Grouping {
    expression: Expr,
}

impl Grouping {
    pub fn new(expression: Expr) -> Self {
        Self { expression }
    }

    pub fn expression(&self) -> &Expr {
        &self.expression
    }

    pub fn accept<R>(&self, visitor: &mut dyn ExprVisitor<R>) -> R {
        visitor.visit_grouping_expr(self)
    }
}

impl From<Grouping> for Expr {
    fn from(node: Grouping) -> Self {
        Expr::Grouping(Box::new(node))
    }
}

#[derive(Debug, Clone)]
pub struct Literal {
    value: Object,
}

impl Literal {
    pub fn new(value: Object) -> Self {
        Self { value }
    }

    pub fn value(&self) -> &Object {
        &self.value
    }

    pub fn accept<R>(&self, visitor: &mut dyn ExprVisitor<R>) -> R {
        visitor.visit_literal_expr(self)
    }
}

impl From<Literal> for Expr {
    fn from(node: Literal) -> Self {
        Expr::Literal(Box::new(node))
    }
}

#[derive(Debug, Clone)]
pub struct Unary {
    operator: Token,
    right: Expr,
}

impl Unary {
    pub fn new(operator: Token, right: Expr) -> Self {
        Self { operator, right }
    }

    pub fn operator(&self) -> &Token {
        &self.operator
    }

    pub fn right(&self) -> &Expr {
        &self.right
    }

    pub fn accept<R>(&self, visitor: &mut dyn ExprVisitor<R>) -> R {
        visitor.visit_unary_expr(self)
    }
}

impl From<Unary> for Expr {
    fn from(node: Unary) -> Self {
        Expr::Unary(Box::new(node))
    }
}
