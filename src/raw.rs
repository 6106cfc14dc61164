//! Raw：原样文本语句。

use crate::dialect::Dialect;
use crate::parameter::Parameter;
use crate::statement::{Error, Statement};
use crate::table::Table;

/// 原样语句：一段不透明文本 + 目标表清单，渲染为
/// `<text> <table, table, ...>`。除表绑定外不做任何校验，
/// 是类型化 builder 覆盖不到的语法的逃生通道。
#[derive(Debug, Clone)]
pub struct Raw {
    text: String,
    tables: Vec<Table>,
}

impl Raw {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tables: Vec::new(),
        }
    }

    pub fn table(mut self, table: &Table) -> Self {
        self.tables.push(table.clone());
        self
    }

    pub fn tables<'a>(mut self, tables: impl IntoIterator<Item = &'a Table>) -> Self {
        self.tables.extend(tables.into_iter().cloned());
        self
    }
}

impl Statement for Raw {
    fn render(&self, _dialect: &Dialect, _params: &mut Vec<Parameter>) -> Result<String, Error> {
        if self.tables.is_empty() {
            return Ok(self.text.clone());
        }
        let names: Vec<String> = self.tables.iter().map(Table::from_clause).collect();
        Ok(format!("{} {}", self.text, names.join(", ")))
    }
}
