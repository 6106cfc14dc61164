//! Field：select 列表 / GROUP BY / 谓词操作数中可渲染的表达式。

use crate::dialect::Dialect;
use crate::statement::Error;
use crate::table::ColumnRef;

/// 标量函数。`Ucase`/`Lcase`/`Len` 的关键字由方言解析，其余为固定 token。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarFunction {
    Ucase,
    Lcase,
    Len,
    Abs,
    Round,
}

impl ScalarFunction {
    fn keyword(self, dialect: &Dialect) -> &'static str {
        match self {
            Self::Ucase => dialect.ucase_keyword,
            Self::Lcase => dialect.lcase_keyword,
            Self::Len => dialect.len_keyword,
            Self::Abs => "ABS",
            Self::Round => "ROUND",
        }
    }
}

/// 聚合函数，关键字固定。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateFunction {
    Avg,
    Count,
    Max,
    Min,
    Sum,
}

impl AggregateFunction {
    const fn keyword(self) -> &'static str {
        match self {
            Self::Avg => "AVG",
            Self::Count => "COUNT",
            Self::Max => "MAX",
            Self::Min => "MIN",
            Self::Sum => "SUM",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum FieldKind {
    Column(ColumnRef),
    Scalar {
        function: ScalarFunction,
        arg: Box<Field>,
    },
    Aggregate {
        function: AggregateFunction,
        arg: Box<Field>,
    },
    Raw(String),
}

/// 可投影表达式：列、标量函数调用、聚合函数调用或原样文本，
/// 外加可选的 `AS` 别名。
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub(crate) kind: FieldKind,
    pub(crate) alias: Option<String>,
}

impl Field {
    /// 原样嵌入一段文本，不做任何校验。
    pub fn raw(text: impl Into<String>) -> Self {
        Self {
            kind: FieldKind::Raw(text.into()),
            alias: None,
        }
    }

    /// 包上 `AS <alias>`。
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub(crate) fn render(&self, dialect: &Dialect) -> Result<String, Error> {
        let text = match &self.kind {
            FieldKind::Column(c) => c.render()?,
            FieldKind::Scalar { function, arg } => {
                format!("{}({})", function.keyword(dialect), arg.render(dialect)?)
            }
            FieldKind::Aggregate { function, arg } => {
                format!("{}({})", function.keyword(), arg.render(dialect)?)
            }
            FieldKind::Raw(text) => text.clone(),
        };
        match &self.alias {
            Some(a) => Ok(format!("{text} AS {a}")),
            None => Ok(text),
        }
    }
}

impl From<ColumnRef> for Field {
    fn from(c: ColumnRef) -> Self {
        Self {
            kind: FieldKind::Column(c),
            alias: None,
        }
    }
}

fn scalar(function: ScalarFunction, arg: impl Into<Field>) -> Field {
    Field {
        kind: FieldKind::Scalar {
            function,
            arg: Box::new(arg.into()),
        },
        alias: None,
    }
}

fn aggregate(function: AggregateFunction, arg: impl Into<Field>) -> Field {
    Field {
        kind: FieldKind::Aggregate {
            function,
            arg: Box::new(arg.into()),
        },
        alias: None,
    }
}

pub fn ucase(arg: impl Into<Field>) -> Field {
    scalar(ScalarFunction::Ucase, arg)
}

pub fn lcase(arg: impl Into<Field>) -> Field {
    scalar(ScalarFunction::Lcase, arg)
}

pub fn len(arg: impl Into<Field>) -> Field {
    scalar(ScalarFunction::Len, arg)
}

pub fn abs(arg: impl Into<Field>) -> Field {
    scalar(ScalarFunction::Abs, arg)
}

pub fn round(arg: impl Into<Field>) -> Field {
    scalar(ScalarFunction::Round, arg)
}

pub fn avg(arg: impl Into<Field>) -> Field {
    aggregate(AggregateFunction::Avg, arg)
}

pub fn count(arg: impl Into<Field>) -> Field {
    aggregate(AggregateFunction::Count, arg)
}

/// `COUNT(*)`。
pub fn count_all() -> Field {
    aggregate(AggregateFunction::Count, Field::raw("*"))
}

pub fn max(arg: impl Into<Field>) -> Field {
    aggregate(AggregateFunction::Max, arg)
}

pub fn min(arg: impl Into<Field>) -> Field {
    aggregate(AggregateFunction::Min, arg)
}

pub fn sum(arg: impl Into<Field>) -> Field {
    aggregate(AggregateFunction::Sum, arg)
}
