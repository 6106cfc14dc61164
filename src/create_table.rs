//! CREATE TABLE / DROP TABLE：DDL 渲染与键约束校验引擎。

use crate::dialect::Dialect;
use crate::parameter::Parameter;
use crate::statement::{Error, Statement, ValidationErrors};
use crate::string_builder::StringBuilder;
use crate::table::{Column, ColumnRef, Table};

/// CREATE TABLE 语句。`build` 先跑全部键约束校验（违规逐条累积），
/// 通过后才渲染 DDL。
#[derive(Debug, Clone)]
pub struct CreateTable {
    table: Table,
    temporary: bool,
    if_not_exists: bool,
}

impl CreateTable {
    pub fn new(table: &Table) -> Self {
        Self {
            table: table.clone(),
            temporary: false,
            if_not_exists: false,
        }
    }

    pub fn temporary(mut self) -> Self {
        self.temporary = true;
        self
    }

    pub fn if_not_exists(mut self) -> Self {
        self.if_not_exists = true;
        self
    }

    fn validate(&self) -> Result<(), Error> {
        let t = &self.table;
        let mut errors = ValidationErrors::default();
        errors.merge(&t.errors);

        if t.columns.is_empty() {
            errors.push("Table has no columns");
        }

        let inline_pk = t.columns.iter().filter(|c| c.primary_key).count();
        if inline_pk > 1 || (inline_pk == 1 && t.primary_key.is_some()) {
            errors.push("Conflicting definitions of primary key");
        }

        if let Some(pk) = &t.primary_key {
            if pk.is_empty() {
                errors.push("Empty primary key");
            } else if !pk.iter().all(|c| belongs_to(t, c)) {
                errors.push("Primary key contains columns from another table");
            }
        }

        for fk in &t.foreign_keys {
            if fk.columns.is_empty()
                || fk.references.is_empty()
                || fk.columns.len() != fk.references.len()
            {
                errors.push("Invalid definition of foreign key");
                continue;
            }
            if !fk.columns.iter().all(|c| belongs_to(t, c)) {
                errors.push("Foreign key contains columns from another table");
            }
            let first = &fk.references[0].table;
            if fk.references.iter().any(|r| &r.table != first) {
                errors.push("Foreign key references columns from more than one table");
            }
        }

        errors.check()
    }
}

fn belongs_to(table: &Table, column: &ColumnRef) -> bool {
    column.table.as_deref() == Some(table.label())
        && table.columns.iter().any(|c| c.name == column.name)
}

fn column_definition(column: &Column, dialect: &Dialect) -> String {
    let mut type_name = column.sql_type.name(dialect).to_string();
    if let Some(length) = column.length {
        type_name = format!("{type_name}({length})");
    }
    if column.auto_increment {
        type_name = (dialect.create_auto_increment)(&type_name, column.primary_key);
    }

    let mut out = format!("{} {}", column.name, type_name);
    if column.primary_key {
        out.push_str(" PRIMARY KEY");
    }
    if column.not_null {
        out.push_str(" NOT NULL");
    }
    if column.unique {
        out.push_str(" UNIQUE");
    }
    if let Some(default_value) = &column.default_value {
        out.push_str(" DEFAULT ");
        out.push_str(&default_value.render(dialect));
    }
    if let Some(check) = &column.check {
        out.push_str(" CHECK (");
        out.push_str(check);
        out.push(')');
    }
    if let Some(collation) = &column.collate {
        out.push_str(" COLLATE ");
        out.push_str(collation);
    }
    out
}

impl Statement for CreateTable {
    fn render(&self, dialect: &Dialect, _params: &mut Vec<Parameter>) -> Result<String, Error> {
        self.validate()?;
        let t = &self.table;

        let mut buf = StringBuilder::new();
        buf.write_leading(if self.temporary {
            "CREATE TEMPORARY TABLE"
        } else {
            "CREATE TABLE"
        });
        if self.if_not_exists {
            buf.write_leading("IF NOT EXISTS");
        }
        buf.write_leading(t.name());

        let mut defs: Vec<String> = t
            .columns
            .iter()
            .map(|c| column_definition(c, dialect))
            .collect();

        if let Some(pk) = &t.primary_key {
            let names: Vec<&str> = pk.iter().map(ColumnRef::name).collect();
            defs.push(format!("PRIMARY KEY ({})", names.join(", ")));
        }

        for fk in &t.foreign_keys {
            let locals: Vec<&str> = fk.columns.iter().map(ColumnRef::name).collect();
            let foreign: Vec<&str> = fk.references.iter().map(ColumnRef::name).collect();
            let referenced_table = fk.references[0]
                .table
                .as_deref()
                .ok_or_else(|| Error::UnboundColumn(fk.references[0].name.clone()))?;
            defs.push(format!(
                "FOREIGN KEY ({}) REFERENCES {}({})",
                locals.join(", "),
                referenced_table,
                foreign.join(", ")
            ));
        }

        buf.write_leading("(");
        buf.write_str(&defs.join(", "));
        buf.write_str(")");
        Ok(buf.into_string())
    }
}

/// DROP TABLE 语句。
#[derive(Debug, Clone)]
pub struct DropTable {
    table: Table,
    if_exists: bool,
}

impl DropTable {
    pub fn new(table: &Table) -> Self {
        Self {
            table: table.clone(),
            if_exists: false,
        }
    }

    pub fn if_exists(mut self) -> Self {
        self.if_exists = true;
        self
    }
}

impl Statement for DropTable {
    fn render(&self, _dialect: &Dialect, _params: &mut Vec<Parameter>) -> Result<String, Error> {
        let mut buf = StringBuilder::new();
        buf.write_leading("DROP TABLE");
        if self.if_exists {
            buf.write_leading("IF EXISTS");
        }
        buf.write_leading(self.table.name());
        Ok(buf.into_string())
    }
}

impl Table {
    /// 本表的 CREATE TABLE 语句。
    pub fn create(&self) -> CreateTable {
        CreateTable::new(self)
    }

    /// 本表的 DROP TABLE 语句。
    pub fn drop(&self) -> DropTable {
        DropTable::new(self)
    }
}
