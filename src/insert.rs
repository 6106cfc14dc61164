//! Insert：INSERT 语句值，支持值行、列 + 值行与列 + 子查询三种形态。

use crate::dialect::Dialect;
use crate::field::Field;
use crate::filter::Operand;
use crate::parameter::Parameter;
use crate::select::Select;
use crate::statement::{Error, Statement, ValidationErrors};
use crate::string_builder::StringBuilder;
use crate::table::{ColumnRef, Table};

/// INSERT 语句。值来源与列清单的每一处不一致都在 `build` 时逐条报告：
/// 单行时报 "Values count doesn't match column count."，多行时按 0 起始
/// 的行号逐行报告。
#[derive(Debug, Clone)]
pub struct Insert {
    table: Table,
    columns: Option<Vec<ColumnRef>>,
    rows: Vec<Vec<Operand>>,
    query: Option<Box<Select>>,
    returning: Option<Vec<Field>>,
    errors: ValidationErrors,
}

impl Insert {
    pub fn into_table(table: &Table) -> Self {
        Self {
            table: table.clone(),
            columns: None,
            rows: Vec::new(),
            query: None,
            returning: None,
            errors: ValidationErrors::default(),
        }
    }

    /// 显式列清单，一次设置。
    pub fn columns(mut self, columns: impl IntoIterator<Item = ColumnRef>) -> Self {
        if self.columns.is_some() {
            self.errors.push("Multiple columns clauses");
        } else {
            self.columns = Some(columns.into_iter().collect());
        }
        self
    }

    /// 追加一行值。可多次调用构成多行插入；与子查询来源互斥。
    pub fn values(mut self, row: impl IntoIterator<Item = impl Into<Operand>>) -> Self {
        if self.query.is_some() {
            self.errors.push("Conflicting insert sources");
        } else {
            self.rows.push(row.into_iter().map(Into::into).collect());
        }
        self
    }

    /// INSERT…SELECT 来源，与值行互斥。
    pub fn query(mut self, query: Select) -> Self {
        if self.query.is_some() || !self.rows.is_empty() {
            self.errors.push("Conflicting insert sources");
        } else {
            self.query = Some(Box::new(query));
        }
        self
    }

    pub fn returning(mut self, fields: impl IntoIterator<Item = impl Into<Field>>) -> Self {
        if self.returning.is_some() {
            self.errors.push("Multiple returning clauses");
        } else {
            self.returning = Some(fields.into_iter().map(Into::into).collect());
        }
        self
    }

    fn validate(&self) -> Result<(), Error> {
        let mut errors = self.errors.clone();

        if self.rows.is_empty() && self.query.is_none() {
            errors.push("Empty values clause");
        }

        if let Some(columns) = &self.columns {
            if self.rows.len() == 1 {
                if self.rows[0].len() != columns.len() {
                    errors.push("Values count doesn't match column count");
                }
            } else {
                for (i, row) in self.rows.iter().enumerate() {
                    if row.len() != columns.len() {
                        errors.push(format!(
                            "Values count doesn't match column count in row number {i}"
                        ));
                    }
                }
            }
            if let Some(query) = &self.query
                && let Some(projected) = query.projected_len()
                && projected != columns.len()
            {
                errors.push("Select column count doesn't match column count");
            }
        }

        errors.check()
    }
}

impl Statement for Insert {
    fn render(&self, dialect: &Dialect, params: &mut Vec<Parameter>) -> Result<String, Error> {
        self.validate()?;

        let mut buf = StringBuilder::new();
        buf.write_leading("INSERT INTO");
        buf.write_str(" ");
        buf.write_str(self.table.name());

        if let Some(columns) = &self.columns {
            let names: Vec<&str> = columns.iter().map(ColumnRef::name).collect();
            buf.write_str(" (");
            buf.write_str(&names.join(", "));
            buf.write_str(")");
        }

        if let Some(query) = &self.query {
            buf.write_leading(&query.render(dialect, params)?);
        } else {
            let mut rows = Vec::with_capacity(self.rows.len());
            for row in &self.rows {
                let values = row
                    .iter()
                    .map(|v| v.render(dialect, params))
                    .collect::<Result<Vec<_>, _>>()?;
                rows.push(format!("({})", values.join(", ")));
            }
            buf.write_leading("VALUES");
            buf.write_str(" ");
            buf.write_str(&rows.join(", "));
        }

        if let Some(returning) = &self.returning {
            let fields = returning
                .iter()
                .map(|f| f.render(dialect))
                .collect::<Result<Vec<_>, _>>()?;
            buf.write_leading("RETURNING");
            buf.write_str(" ");
            buf.write_str(&fields.join(", "));
        }

        Ok(buf.into_string())
    }
}
