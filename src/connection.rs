//! 执行边界契约：本库只渲染语句，连接、执行与结果迭代由实现方负责。

use crate::dialect::Dialect;
use crate::statement::{Error, RenderedSql, Statement};
use crate::value::Value;

/// 执行层错误。后端返回的错误原样透传，本库不分类、不重试。
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConnectionError {
    #[error("connection is not open")]
    NotConnected,
    #[error("backend error: {0}")]
    Backend(String),
    #[error(transparent)]
    Build(#[from] Error),
}

/// 一次执行的结果。
#[derive(Debug, Clone, PartialEq)]
pub enum QueryResult {
    /// 成功且无返回数据。
    Success,
    /// 标量结果。
    Value(Value),
    /// 行集：列标题 + 行序列。
    ResultSet {
        titles: Vec<String>,
        rows: Vec<Vec<Value>>,
    },
}

/// 连接契约。本库把渲染产物（SQL 文本 + 有序参数列表）交给实现方，
/// 之后的网络、池化、超时与异步调度都是实现方的事。
pub trait Connection {
    fn connect(&mut self) -> Result<(), ConnectionError>;

    fn execute(&mut self, sql: &RenderedSql) -> Result<QueryResult, ConnectionError>;

    fn close(&mut self);

    /// 渲染并执行一条语句。
    fn execute_statement(
        &mut self,
        statement: &dyn Statement,
        dialect: &Dialect,
    ) -> Result<QueryResult, ConnectionError> {
        let rendered = statement.build(dialect)?;
        self.execute(&rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::{Connection, ConnectionError, QueryResult};
    use crate::dialect::Dialect;
    use crate::select::Select;
    use crate::statement::RenderedSql;
    use crate::table::Table;
    use pretty_assertions::assert_eq;

    /// 只做记录的假连接，验证边界上交付的恰好是渲染产物。
    #[derive(Default)]
    struct RecordingConnection {
        executed: Vec<RenderedSql>,
    }

    impl Connection for RecordingConnection {
        fn connect(&mut self) -> Result<(), ConnectionError> {
            Ok(())
        }

        fn execute(&mut self, sql: &RenderedSql) -> Result<QueryResult, ConnectionError> {
            self.executed.push(sql.clone());
            Ok(QueryResult::Success)
        }

        fn close(&mut self) {}
    }

    #[test]
    fn execute_statement_hands_over_rendered_sql() {
        let t = Table::new("user");
        let q = Select::from(&t);

        let mut conn = RecordingConnection::default();
        let result = conn.execute_statement(&q, &Dialect::generic()).unwrap();
        assert_eq!(result, QueryResult::Success);
        assert_eq!(conn.executed[0].sql, "SELECT * FROM user");
        assert!(conn.executed[0].parameters.is_empty());
    }

    #[test]
    fn build_failure_surfaces_before_execution() {
        let t = Table::new("user");
        let q = Select::from(&t).limit(1).limit(2);

        let mut conn = RecordingConnection::default();
        let err = conn.execute_statement(&q, &Dialect::generic()).unwrap_err();
        assert!(matches!(err, ConnectionError::Build(_)));
        assert!(conn.executed.is_empty());
    }
}
