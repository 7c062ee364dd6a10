use crate::{NodeCopyTraits, NodeTraits, Type};

/// A whole source file: every function, in source order.
#[derive(NodeTraits!)]
#[derive(Default)]
pub struct Program {
    pub functions: Vec<FunctionDecl>,
}

impl Program {
    pub fn function(&self, name: &str) -> Option<&FunctionDecl> {
        self.functions.iter().find(|func| func.name == name)
    }
}

#[derive(NodeTraits!)]
pub struct FunctionDecl {
    pub name: String,
    pub return_type: Type,
    pub body: Vec<Stmt>,

    /// Line of the function name.
    pub line: usize,
}

#[derive(NodeTraits!)]
pub enum Stmt {
    Return(ReturnStatement),
}

#[derive(NodeTraits!)]
pub struct ReturnStatement {
    pub value: Expr,
    pub line: usize,
}

#[derive(NodeTraits!)]
pub enum Expr {
    IntegerLiteral(IntegerLiteral),
}

impl Expr {
    pub fn line(&self) -> usize {
        match self {
            Expr::IntegerLiteral(literal) => literal.line,
        }
    }
}

#[derive(NodeCopyTraits!)]
pub struct IntegerLiteral {
    pub value: u64,
    pub line: usize,
}
