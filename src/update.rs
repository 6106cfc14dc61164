//! Update：UPDATE 语句值。

use crate::cte::{With, WithTable};
use crate::dialect::Dialect;
use crate::filter::{Filter, Operand, WhereExpr};
use crate::parameter::Parameter;
use crate::statement::{Error, Statement, ValidationErrors};
use crate::string_builder::StringBuilder;
use crate::table::{ColumnRef, Table};

/// UPDATE 语句：目标表 + 有序 SET 对 + 至多一个 WHERE + 可选后缀与
/// WITH。SET 值为 `None` 的可选值渲染成裸 `NULL`。方言要求时
/// （`with_update_requires_from`），WITH 表名以 FROM 列出。
#[derive(Debug, Clone)]
pub struct Update {
    table: Table,
    set: Vec<(ColumnRef, Operand)>,
    where_clause: Option<WhereExpr>,
    suffix: Option<String>,
    with: Option<With>,
    errors: ValidationErrors,
}

impl Update {
    pub fn table(table: &Table) -> Self {
        Self {
            table: table.clone(),
            set: Vec::new(),
            where_clause: None,
            suffix: None,
            with: None,
            errors: ValidationErrors::default(),
        }
    }

    /// 追加一个 SET 赋值，保持调用顺序。
    pub fn set(mut self, column: ColumnRef, value: impl Into<Operand>) -> Self {
        self.set.push((column, value.into()));
        self
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

    /// 原样追加在语句末尾的后缀，例如 `RETURNING id`。
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        if self.suffix.is_some() {
            self.errors.push("Multiple suffix clauses");
        } else {
            self.suffix = Some(suffix.into());
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

    fn validate(&self) -> Result<(), Error> {
        let mut errors = self.errors.clone();
        if self.set.is_empty() {
            errors.push("Empty set clause");
        }
        errors.check()
    }
}

impl Statement for Update {
    fn render(&self, dialect: &Dialect, params: &mut Vec<Parameter>) -> Result<String, Error> {
        self.validate()?;

        let mut buf = StringBuilder::new();
        if let Some(with) = &self.with {
            buf.write_leading(&with.render(dialect, params)?);
        }

        buf.write_leading("UPDATE");
        buf.write_str(" ");
        buf.write_str(&self.table.from_clause());

        let assignments = self
            .set
            .iter()
            .map(|(col, value)| Ok(format!("{} = {}", col.name(), value.render(dialect, params)?)))
            .collect::<Result<Vec<_>, Error>>()?;
        buf.write_leading("SET");
        buf.write_str(" ");
        buf.write_str(&assignments.join(", "));

        if let Some(with) = &self.with
            && dialect.with_update_requires_from
        {
            buf.write_leading("FROM");
            buf.write_str(" ");
            buf.write_str(&with.table_names().join(", "));
        }

        if let Some(where_clause) = &self.where_clause {
            buf.write_leading("WHERE");
            buf.write_str(" ");
            buf.write_str(&where_clause.render(dialect, params)?);
        }

        if let Some(suffix) = &self.suffix {
            buf.write_leading(suffix);
        }

        Ok(buf.into_string())
    }
}
