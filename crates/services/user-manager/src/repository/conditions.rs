//! Translation of domain conditions into sea-query expressions.
//!
//! Column names are checked against the users table mapping and quoted by the
//! query builder; values are always bound parameters.

use sea_orm::sea_query::{Alias, BinOper, Condition as SqlCondition, Expr, SimpleExpr};
use sea_orm::Value;

use common::AppResult;
use domain::{Condition, FieldValue, Operator};

fn bind(value: &FieldValue) -> Value {
    match value {
        FieldValue::Null => Value::String(None),
        FieldValue::Bool(b) => Value::from(*b),
        FieldValue::Int(i) => Value::from(*i),
        FieldValue::Text(s) => Value::from(s.clone()),
    }
}

/// Build the expression for a single validated condition.
pub fn to_expr(condition: &Condition) -> AppResult<SimpleExpr> {
    condition.validate()?;

    let column = Expr::col(Alias::new(condition.field.as_str()));
    let value = bind(&condition.value);

    // `validate` guarantees LIKE carries a text pattern.
    let expr = match condition.operator {
        Operator::Eq => column.eq(value),
        Operator::NotEq => column.ne(value),
        Operator::Gt => column.gt(value),
        Operator::Gte => column.gte(value),
        Operator::Lt => column.lt(value),
        Operator::Lte => column.lte(value),
        Operator::Like => column.binary(BinOper::Like, SimpleExpr::Value(value)),
        Operator::IsNull => column.is_null(),
        Operator::IsNotNull => column.is_not_null(),
    };

    Ok(expr)
}

/// AND together every condition. An empty list matches all rows.
pub fn to_filter(conditions: &[Condition]) -> AppResult<SqlCondition> {
    conditions
        .iter()
        .try_fold(SqlCondition::all(), |filter, c| Ok(filter.add(to_expr(c)?)))
}
