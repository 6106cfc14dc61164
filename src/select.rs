//! Select：SELECT 语句值。

use crate::cte::{With, WithTable};
use crate::dialect::Dialect;
use crate::field::Field;
use crate::filter::{Filter, Having, WhereExpr};
use crate::parameter::Parameter;
use crate::statement::{Error, Statement, ValidationErrors};
use crate::string_builder::StringBuilder;
use crate::table::{ColumnRef, Table};

/// ORDER BY 方向。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    #[default]
    Asc,
    Desc,
}

impl Order {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// SELECT 语句。构造时绑定目标表；其余子句都是可选且只允许设置一次，
/// 重复设置把冲突记入累积器，`build` 时一并报告。
///
/// 所有 setter 消费旧值返回新值；已构造的值渲染结果永不改变。
#[derive(Debug, Clone)]
pub struct Select {
    tables: Vec<Table>,
    fields: Vec<Field>,
    distinct: bool,
    join: Option<Table>,
    on: Option<Filter>,
    using: Option<Vec<ColumnRef>>,
    where_clause: Option<WhereExpr>,
    group_by: Option<Vec<Field>>,
    having: Option<WhereExpr>,
    order_by: Option<Vec<(Field, Order)>>,
    limit: Option<u64>,
    offset: Option<u64>,
    with: Option<With>,
    errors: ValidationErrors,
}

impl Select {
    pub fn from(table: &Table) -> Self {
        Self::from_tables([table])
    }

    /// 多表 FROM。
    pub fn from_tables<'a>(tables: impl IntoIterator<Item = &'a Table>) -> Self {
        Self {
            tables: tables.into_iter().cloned().collect(),
            fields: Vec::new(),
            distinct: false,
            join: None,
            on: None,
            using: None,
            where_clause: None,
            group_by: None,
            having: None,
            order_by: None,
            limit: None,
            offset: None,
            with: None,
            errors: ValidationErrors::default(),
        }
    }

    /// 追加投影字段。一直不设置则渲染 `*`。
    pub fn fields(mut self, fields: impl IntoIterator<Item = impl Into<Field>>) -> Self {
        self.fields.extend(fields.into_iter().map(Into::into));
        self
    }

    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    pub fn join(mut self, table: &Table) -> Self {
        if self.join.is_some() {
            self.errors.push("Multiple join clauses");
        } else {
            self.join = Some(table.clone());
        }
        self
    }

    /// JOIN 的 ON 条件。与 USING 互斥。
    pub fn on(mut self, filter: Filter) -> Self {
        if self.join.is_none() {
            self.errors.push("On clause set without a join clause");
        } else if self.on.is_some() {
            self.errors.push("Multiple on clauses");
        } else if self.using.is_some() {
            self.errors.push("Conflicting on and using clauses");
        } else {
            self.on = Some(filter);
        }
        self
    }

    /// JOIN 的 USING 列清单。与 ON 互斥。
    pub fn using(mut self, columns: impl IntoIterator<Item = ColumnRef>) -> Self {
        if self.join.is_none() {
            self.errors.push("Using clause set without a join clause");
        } else if self.using.is_some() {
            self.errors.push("Multiple using clauses");
        } else if self.on.is_some() {
            self.errors.push("Conflicting on and using clauses");
        } else {
            self.using = Some(columns.into_iter().collect());
        }
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

    /// 原样字符串形式的 WHERE，与类型化 WHERE 共用同一槽位。
    pub fn where_raw(mut self, expression: impl Into<String>) -> Self {
        if self.where_clause.is_some() {
            self.errors.push("Multiple where clauses");
        } else {
            self.where_clause = Some(WhereExpr::Raw(expression.into()));
        }
        self
    }

    pub fn group_by(mut self, fields: impl IntoIterator<Item = impl Into<Field>>) -> Self {
        if self.group_by.is_some() {
            self.errors.push("Multiple group by clauses");
        } else {
            self.group_by = Some(fields.into_iter().map(Into::into).collect());
        }
        self
    }

    pub fn having(mut self, having: Having) -> Self {
        if self.having.is_some() {
            self.errors.push("Multiple having clauses");
        } else {
            self.having = Some(WhereExpr::Typed(having));
        }
        self
    }

    pub fn having_raw(mut self, expression: impl Into<String>) -> Self {
        if self.having.is_some() {
            self.errors.push("Multiple having clauses");
        } else {
            self.having = Some(WhereExpr::Raw(expression.into()));
        }
        self
    }

    /// ORDER BY：有序的 (字段, 方向) 列表，一次设置。
    pub fn order_by<F>(mut self, items: impl IntoIterator<Item = (F, Order)>) -> Self
    where
        F: Into<Field>,
    {
        if self.order_by.is_some() {
            self.errors.push("Multiple order by clauses");
        } else {
            self.order_by = Some(items.into_iter().map(|(f, o)| (f.into(), o)).collect());
        }
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        if self.limit.is_some() {
            self.errors.push("Multiple limit clauses");
        } else {
            self.limit = Some(limit);
        }
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        if self.offset.is_some() {
            self.errors.push("Multiple offset clauses");
        } else {
            self.offset = Some(offset);
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

    /// 投影列数：显式字段时可知，`*` 时未知。
    pub(crate) fn projected_len(&self) -> Option<usize> {
        if self.fields.is_empty() {
            None
        } else {
            Some(self.fields.len())
        }
    }

    fn validate(&self) -> Result<(), Error> {
        let mut errors = self.errors.clone();
        if self.tables.is_empty() {
            errors.push("Select statement has no tables");
        }
        errors.check()
    }
}

impl Statement for Select {
    fn render(&self, dialect: &Dialect, params: &mut Vec<Parameter>) -> Result<String, Error> {
        self.validate()?;

        let mut buf = StringBuilder::new();
        if let Some(with) = &self.with {
            buf.write_leading(&with.render(dialect, params)?);
        }

        buf.write_leading("SELECT");
        if self.distinct {
            buf.write_str(" DISTINCT");
        }
        if self.fields.is_empty() {
            buf.write_str(" *");
        } else {
            let fields = self
                .fields
                .iter()
                .map(|f| f.render(dialect))
                .collect::<Result<Vec<_>, _>>()?;
            buf.write_str(" ");
            buf.write_str(&fields.join(", "));
        }

        buf.write_leading("FROM");
        buf.write_str(" ");
        let tables: Vec<String> = self.tables.iter().map(Table::from_clause).collect();
        buf.write_str(&tables.join(", "));

        if let Some(join) = &self.join {
            buf.write_leading("JOIN");
            buf.write_str(" ");
            buf.write_str(&join.from_clause());
        }
        if let Some(on) = &self.on {
            buf.write_leading("ON");
            buf.write_str(" ");
            buf.write_str(&on.render(dialect, params)?);
        }
        if let Some(using) = &self.using {
            let names: Vec<&str> = using.iter().map(ColumnRef::name).collect();
            buf.write_leading("USING");
            buf.write_str(" (");
            buf.write_str(&names.join(", "));
            buf.write_str(")");
        }

        if let Some(where_clause) = &self.where_clause {
            buf.write_leading("WHERE");
            buf.write_str(" ");
            buf.write_str(&where_clause.render(dialect, params)?);
        }

        if let Some(group_by) = &self.group_by {
            let fields = group_by
                .iter()
                .map(|f| f.render(dialect))
                .collect::<Result<Vec<_>, _>>()?;
            buf.write_leading("GROUP BY");
            buf.write_str(" ");
            buf.write_str(&fields.join(", "));
        }
        if let Some(having) = &self.having {
            buf.write_leading("HAVING");
            buf.write_str(" ");
            buf.write_str(&having.render(dialect, params)?);
        }

        if let Some(order_by) = &self.order_by {
            let items = order_by
                .iter()
                .map(|(f, o)| Ok(format!("{} {}", f.render(dialect)?, o.as_str())))
                .collect::<Result<Vec<_>, Error>>()?;
            buf.write_leading("ORDER BY");
            buf.write_str(" ");
            buf.write_str(&items.join(", "));
        }

        if let Some(limit) = self.limit {
            buf.write_leading("LIMIT");
            buf.write_str(" ");
            buf.write_str(&limit.to_string());
        }
        if let Some(offset) = self.offset {
            buf.write_leading("OFFSET");
            buf.write_str(" ");
            buf.write_str(&offset.to_string());
        }

        Ok(buf.into_string())
    }
}
