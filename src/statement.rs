//! Statement trait、渲染产物与两类错误的定义。

use crate::dialect::Dialect;
use crate::parameter::{Parameter, number_parameters};
use dyn_clone::DynClone;
use std::fmt;

/// 语句构造与渲染错误。
///
/// 结构性违规（重复子句、列数不匹配、键定义冲突等）在 builder 链上
/// **累积**，`build` 时拼成一条 [`Error::Syntax`]；绑定类错误（列未绑定
/// 表、WITH 表缺少查询）在渲染中途立即返回。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("syntax error: {0}")]
    Syntax(String),
    #[error("column {0} is not bound to a table")]
    UnboundColumn(String),
    #[error("with table {0} has no source query")]
    MissingWithQuery(String),
    #[error("{0} is not supported by this dialect")]
    Unsupported(&'static str),
}

/// 结构性违规的累积器：每条是一个固定格式句子，最终以 `". "` 结尾
/// 逐条拼接成一条错误消息。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ValidationErrors {
    entries: Vec<String>,
}

impl ValidationErrors {
    pub(crate) fn push(&mut self, sentence: impl Into<String>) {
        self.entries.push(sentence.into());
    }

    pub(crate) fn merge(&mut self, other: &ValidationErrors) {
        self.entries.extend(other.entries.iter().cloned());
    }

    /// 累积非空则失败，消息按子句设置顺序拼接。
    pub(crate) fn check(&self) -> Result<(), Error> {
        if self.entries.is_empty() {
            return Ok(());
        }
        let mut message = String::new();
        for e in &self.entries {
            message.push_str(e);
            message.push_str(". ");
        }
        Err(Error::Syntax(message))
    }
}

/// 渲染产物：最终 SQL 文本与按出现顺序排列的参数列表。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSql {
    pub sql: String,
    pub parameters: Vec<Parameter>,
}

/// 可渲染为 SQL 的语句。
///
/// `render` 产出未编号的文本并按出现顺序收集参数；`build` 在其上做
/// 统一的位置参数编号。嵌套语句（子查询、WITH 表）只参与 `render`，
/// 编号永远发生在最外层，保证序号全局连续。
pub trait Statement: DynClone + fmt::Debug {
    /// 渲染未编号的 SQL 文本，把遇到的参数追加进 `params`。
    fn render(&self, dialect: &Dialect, params: &mut Vec<Parameter>) -> Result<String, Error>;

    /// 校验并渲染整条语句。
    fn build(&self, dialect: &Dialect) -> Result<RenderedSql, Error> {
        let mut parameters = Vec::new();
        let text = self.render(dialect, &mut parameters)?;
        let sql = if dialect.add_numbers_to_parameters {
            number_parameters(&text, dialect)
        } else {
            text
        };
        tracing::trace!(sql = %sql, parameters = parameters.len(), "rendered statement");
        Ok(RenderedSql { sql, parameters })
    }
}

dyn_clone::clone_trait_object!(Statement);

impl Statement for Box<dyn Statement> {
    fn render(&self, dialect: &Dialect, params: &mut Vec<Parameter>) -> Result<String, Error> {
        (**self).render(dialect, params)
    }
}
