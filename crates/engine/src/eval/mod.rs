use std::borrow::Cow;
use std::cmp::Ordering;

use sift_fs::FileRecord;

use crate::dsl::{CmpOp, Column, ColumnType, Comparison, Expr, Value};
use crate::error::QueryError;

mod like;

use like::like_match;

/// Evaluate a filter expression against one record.
///
/// `And`/`Or` short-circuit; errors propagate immediately and abort the
/// whole run at the query-runner level.
pub fn eval_expr(expr: &Expr, record: &FileRecord) -> Result<bool, QueryError> {
    match expr {
        Expr::And(children) => {
            for child in children {
                if !eval_expr(child, record)? {
                    return Ok(false);
                }
            }
            Ok(true)
        }
        Expr::Or(children) => {
            for child in children {
                if eval_expr(child, record)? {
                    return Ok(true);
                }
            }
            Ok(false)
        }
        Expr::Not(inner) => Ok(!eval_expr(inner, record)?),
        Expr::Compare(cmp) => eval_comparison(cmp, record),
    }
}

fn eval_comparison(cmp: &Comparison, record: &FileRecord) -> Result<bool, QueryError> {
    if cmp.op == CmpOp::Like {
        // LIKE is only defined for string columns. Anything else is a
        // fatal type error, never a silent false.
        if cmp.column.column_type() != ColumnType::Str {
            return Err(mismatch(cmp.column, cmp.op));
        }
        let Value::Str(pattern) = &cmp.value else {
            return Err(mismatch(cmp.column, cmp.op));
        };
        return Ok(like_match(pattern, str_column(record, cmp.column).as_ref()));
    }

    let ord =
        compare_column(record, cmp.column, &cmp.value).ok_or_else(|| mismatch(cmp.column, cmp.op))?;
    Ok(verdict(cmp.op, ord))
}

/// Ordering of the record's column value against the literal, per the
/// column's semantic type. None when the literal's type does not fit the
/// column (possible only for hand-built ASTs; the parser types literals).
fn compare_column(record: &FileRecord, column: Column, value: &Value) -> Option<Ordering> {
    match (column.column_type(), value) {
        (ColumnType::Int, Value::Int(n)) => Some(int_column(record, column).cmp(n)),
        (ColumnType::Int, Value::Float(f)) => (int_column(record, column) as f64).partial_cmp(f),
        (ColumnType::Str, Value::Str(s)) => {
            Some(str_column(record, column).as_ref().cmp(s.as_str()))
        }
        (ColumnType::Bool, Value::Bool(b)) => Some(bool_column(record, column).cmp(b)),
        (ColumnType::Time, Value::Time(t)) => Some(time_column(record, column).cmp(t)),
        _ => None,
    }
}

fn verdict(op: CmpOp, ord: Ordering) -> bool {
    match op {
        CmpOp::Eq => ord == Ordering::Equal,
        CmpOp::Ne => ord != Ordering::Equal,
        CmpOp::Lt => ord == Ordering::Less,
        CmpOp::Le => ord != Ordering::Greater,
        CmpOp::Gt => ord == Ordering::Greater,
        CmpOp::Ge => ord != Ordering::Less,
        // Handled before ordering comparison.
        CmpOp::Like => false,
    }
}

fn mismatch(column: Column, op: CmpOp) -> QueryError {
    QueryError::TypeMismatch {
        column: column.name(),
        kind: column.column_type().name(),
        op: op.symbol(),
    }
}

// Sizes and ids fit signed 64-bit comfortably.
fn int_column(record: &FileRecord, column: Column) -> i64 {
    match column {
        Column::Size => record.size as i64,
        Column::Depth => record.depth as i64,
        Column::Uid => record.uid as i64,
        Column::Gid => record.gid as i64,
        _ => unreachable!("{} is not an integer column", column.name()),
    }
}

fn str_column(record: &FileRecord, column: Column) -> Cow<'_, str> {
    match column {
        Column::Name => Cow::Borrowed(record.name.as_str()),
        Column::Path => record.path.to_string_lossy(),
        Column::UserName => Cow::Borrowed(record.user_name.as_str()),
        Column::GroupName => Cow::Borrowed(record.group_name.as_str()),
        Column::PermissionOwner => Cow::Borrowed(record.perm_owner.as_str()),
        Column::PermissionGroup => Cow::Borrowed(record.perm_group.as_str()),
        Column::PermissionOther => Cow::Borrowed(record.perm_other.as_str()),
        _ => unreachable!("{} is not a string column", column.name()),
    }
}

fn bool_column(record: &FileRecord, column: Column) -> bool {
    match column {
        Column::Regular => record.is_regular,
        Column::Directory => record.is_dir,
        _ => unreachable!("{} is not a boolean column", column.name()),
    }
}

fn time_column(record: &FileRecord, column: Column) -> i64 {
    match column {
        Column::AccessedAt => record.atime_secs as i64,
        Column::CreatedAt => record.ctime_secs as i64,
        Column::ModifiedAt => record.mtime_secs as i64,
        _ => unreachable!("{} is not a timestamp column", column.name()),
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod tests;
