use crate::dsl::columns::Column;

/// Parsed filter for one query run. Built once, then shared by every
/// record evaluation.
#[derive(Debug, Clone)]
pub struct Filter {
    pub expr: Expr,
}

/// Boolean expression over comparisons.
#[derive(Debug, Clone)]
pub enum Expr {
    And(Vec<Expr>),
    Or(Vec<Expr>),
    Not(Box<Expr>),
    Compare(Comparison),
}

/// A single `column op literal` leaf.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub column: Column,
    pub op: CmpOp,
    pub value: Value,
}

/// Comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    Like,
}

impl CmpOp {
    pub fn symbol(self) -> &'static str {
        match self {
            CmpOp::Eq => "=",
            CmpOp::Ne => "!=",
            CmpOp::Lt => "<",
            CmpOp::Le => "<=",
            CmpOp::Gt => ">",
            CmpOp::Ge => ">=",
            CmpOp::Like => "LIKE",
        }
    }
}

/// Typed literal, coerced at parse time against the column's type.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
    /// Unix seconds
    Time(i64),
}
