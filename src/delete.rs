//! Delete：DELETE 语句值。

use crate::cte::{With, WithTable};
use crate::dialect::Dialect;
use crate::filter::{Filter, WhereExpr};
use crate::parameter::Parameter;
use crate::statement::{Error, Statement, ValidationErrors};
use crate::string_builder::StringBuilder;
use crate::table::Table;

/// DELETE 语句：目标表 + 至多一个 WHERE + 可选 WITH。
/// 方言要求时（`with_delete_requires_using`），WITH 表名以 USING 列出。
#[derive(Debug, Clone)]
pub struct Delete {
    table: Table,
    where_clause: Option<WhereExpr>,
    with: Option<With>,
    errors: ValidationErrors,
}

impl Delete {
    pub fn from(table: &Table) -> Self {
        Self {
            table: table.clone(),
            where_clause: None,
            with: None,
            errors: ValidationErrors::default(),
        }
    }

    pub fn where_(mut self, filter: Filter) -> Self {
        if self.where_clause.is_some() {
            self.errors.push("Multiple where clauses");
        } else {
            self.where_clause = Some(WhereExpr::Typed(filter));
        }
        self
    }

    pub fn where_raw(mut self, expression: impl Into<String>) -> Self {
        if self.where_clause.is_some() {
            self.errors.push("Multiple where clauses");
        } else {
            self.where_clause = Some(WhereExpr::Raw(expression.into()));
        }
        self
    }

    pub fn with(mut self, tables: impl IntoIterator<Item = WithTable>) -> Self {
        self.set_with(With::new(tables.into_iter().collect(), false));
        self
    }

    pub fn with_recursive(mut self, tables: impl IntoIterator<Item = WithTable>) -> Self {
        self.set_with(With::new(tables.into_iter().collect(), true));
        self
    }

    fn set_with(&mut self, with: With) {
        if self.with.is_some() {
            self.errors.push("Multiple with clauses");
        } else if with.is_empty() {
            self.errors.push("With clause has no tables");
        } else {
            self.with = Some(with);
        }
    }
}

impl Statement for Delete {
    fn render(&self, dialect: &Dialect, params: &mut Vec<Parameter>) -> Result<String, Error> {
        self.errors.check()?;

        let mut buf = StringBuilder::new();
        if let Some(with) = &self.with {
            buf.write_leading(&with.render(dialect, params)?);
        }

        buf.write_leading("DELETE FROM");
        buf.write_str(" ");
        buf.write_str(&self.table.from_clause());

        if let Some(with) = &self.with
            && dialect.with_delete_requires_using
        {
            buf.write_leading("USING");
            buf.write_str(" ");
            buf.write_str(&with.table_names().join(", "));
        }

        if let Some(where_clause) = &self.where_clause {
            buf.write_leading("WHERE");
            buf.write_str(" ");
            buf.write_str(&where_clause.render(dialect, params)?);
        }

        Ok(buf.into_string())
    }
}
