//! halo-sql-query：类型化的 SQL 语句构造与渲染库。
//!
//! 语句是不可变值：builder 方法消费旧值、返回新值；结构性违规在链上
//! 累积，`build(&Dialect)` 一次性报告并渲染出方言正确的 SQL 文本与
//! 有序参数列表。执行交给外部的 [`Connection`] 实现。

pub mod condition;
pub mod connection;
pub mod create_table;
pub mod cte;
pub mod delete;
pub mod dialect;
pub mod field;
pub mod filter;
pub mod insert;
#[cfg(test)]
mod insert_tests;
pub mod parameter;
pub mod raw;
pub mod select;
#[cfg(test)]
mod select_tests;
pub mod statement;
mod string_builder;
pub mod table;
#[cfg(test)]
mod table_tests;
pub mod update;
pub mod value;

pub use crate::condition::Condition;
pub use crate::connection::{Connection, ConnectionError, QueryResult};
pub use crate::create_table::{CreateTable, DropTable};
pub use crate::cte::WithTable;
pub use crate::delete::Delete;
pub use crate::dialect::{AutoIncrementFn, Dialect};
pub use crate::field::{
    AggregateFunction, Field, ScalarFunction, abs, avg, count, count_all, lcase, len, max, min,
    round, sum, ucase,
};
pub use crate::filter::{Filter, Having, Operand, any, exists, not_exists};
pub use crate::insert::Insert;
pub use crate::parameter::Parameter;
pub use crate::raw::Raw;
pub use crate::select::{Order, Select};
pub use crate::statement::{Error, RenderedSql, Statement};
pub use crate::table::{Column, ColumnRef, ForeignKey, SqlType, Table};
pub use crate::update::Update;
pub use crate::value::Value;
