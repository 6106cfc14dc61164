//! WITH 子句：命名辅助表（CTE）。

use crate::dialect::Dialect;
use crate::parameter::Parameter;
use crate::statement::{Error, Statement};
use crate::table::Table;

/// 一张 WITH 表：名字 + 可选的来源查询。
///
/// 允许先声明名字、在外层语句中引用，之后再补上查询；但渲染时查询
/// 仍然缺失会立即得到 [`Error::MissingWithQuery`]。
#[derive(Debug, Clone)]
pub struct WithTable {
    pub(crate) name: String,
    pub(crate) query: Option<Box<dyn Statement>>,
}

impl WithTable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            query: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// 绑定来源查询。通常是 SELECT；带 RETURNING 的写语句同样可用。
    pub fn query(mut self, statement: impl Statement + 'static) -> Self {
        self.query = Some(Box::new(statement));
        self
    }

    /// 在外层语句中作为伪表引用。
    pub fn table(&self) -> Table {
        Table::new(self.name.clone())
    }
}

/// 语句上的 WITH 子句。
#[derive(Debug, Clone)]
pub(crate) struct With {
    pub(crate) recursive: bool,
    pub(crate) tables: Vec<WithTable>,
}

impl With {
    pub(crate) fn new(tables: Vec<WithTable>, recursive: bool) -> Self {
        Self { recursive, tables }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// USING / FROM 需要列出的 WITH 表名。
    pub(crate) fn table_names(&self) -> Vec<String> {
        self.tables.iter().map(|t| t.name.clone()).collect()
    }

    pub(crate) fn render(
        &self,
        dialect: &Dialect,
        params: &mut Vec<Parameter>,
    ) -> Result<String, Error> {
        let mut parts = Vec::with_capacity(self.tables.len());
        for t in &self.tables {
            let query = t
                .query
                .as_ref()
                .ok_or_else(|| Error::MissingWithQuery(t.name.clone()))?;
            parts.push(format!("{} AS ({})", t.name, query.render(dialect, params)?));
        }
        let keyword = if self.recursive {
            "WITH RECURSIVE"
        } else {
            "WITH"
        };
        Ok(format!("{keyword} {}", parts.join(", ")))
    }
}
