//! Filter / Having：二叉谓词树与比较构造器。
//!
//! 渲染规则：`<左操作数> <token> <右操作数>`，嵌套子树无条件包一层
//! 括号。这一简化用少量冗余括号换掉了整套运算符优先级推导，产出的
//! SQL 始终无歧义。

use crate::condition::Condition;
use crate::dialect::Dialect;
use crate::field::Field;
use crate::parameter::Parameter;
use crate::select::Select;
use crate::statement::{Error, Statement};
use crate::table::ColumnRef;
use crate::value::Value;

/// 谓词的一侧操作数。
#[derive(Debug, Clone)]
pub enum Operand {
    /// 一元条件中空缺的一侧。
    None,
    Value(Value),
    Column(ColumnRef),
    Field(Field),
    Parameter(Parameter),
    /// 子查询，渲染为 `(<SELECT>)`。
    Subquery(Box<Select>),
    /// `ANY (<SELECT>)`，受方言能力开关约束。
    Any(Box<Select>),
    /// 嵌套谓词树，渲染时包一层括号。
    Filter(Box<Filter>),
    /// IN / NOT IN 右侧的字面量列表。
    List(Vec<Value>),
    /// BETWEEN 右侧的 `<low> AND <high>`。
    Range(Box<Operand>, Box<Operand>),
}

impl Operand {
    pub(crate) fn render(
        &self,
        dialect: &Dialect,
        params: &mut Vec<Parameter>,
    ) -> Result<String, Error> {
        match self {
            Self::None => Ok(String::new()),
            Self::Value(v) => Ok(v.render(dialect)),
            Self::Column(c) => c.render(),
            Self::Field(f) => f.render(dialect),
            Self::Parameter(p) => {
                params.push(p.clone());
                Ok(p.render(dialect))
            }
            Self::Subquery(q) => Ok(format!("({})", q.render(dialect, params)?)),
            Self::Any(q) => {
                if !dialect.any_on_subquery_supported {
                    return Err(Error::Unsupported("ANY on a subquery"));
                }
                Ok(format!(
                    "{} ({})",
                    Condition::Any.as_str(),
                    q.render(dialect, params)?
                ))
            }
            Self::Filter(f) => Ok(format!("({})", f.render(dialect, params)?)),
            Self::List(values) => {
                let rendered: Vec<String> =
                    values.iter().map(|v| v.render(dialect)).collect();
                Ok(format!("({})", rendered.join(", ")))
            }
            Self::Range(low, high) => Ok(format!(
                "{} AND {}",
                low.render(dialect, params)?,
                high.render(dialect, params)?
            )),
        }
    }
}

/// 不可变二叉谓词树。通过比较构造器与 [`Filter::and`] / [`Filter::or`]
/// 组合得到，自身不做任何校验。
#[derive(Debug, Clone)]
pub struct Filter {
    pub(crate) left: Operand,
    pub(crate) condition: Condition,
    pub(crate) right: Operand,
}

/// HAVING 使用与 WHERE 完全相同的树结构。
pub type Having = Filter;

impl Filter {
    pub(crate) fn new(left: Operand, condition: Condition, right: Operand) -> Self {
        Self {
            left,
            condition,
            right,
        }
    }

    /// `(self) AND (other)`。
    pub fn and(self, other: Filter) -> Filter {
        Filter::new(
            Operand::Filter(Box::new(self)),
            Condition::And,
            Operand::Filter(Box::new(other)),
        )
    }

    /// `(self) OR (other)`。
    pub fn or(self, other: Filter) -> Filter {
        Filter::new(
            Operand::Filter(Box::new(self)),
            Condition::Or,
            Operand::Filter(Box::new(other)),
        )
    }

    pub(crate) fn render(
        &self,
        dialect: &Dialect,
        params: &mut Vec<Parameter>,
    ) -> Result<String, Error> {
        if self.condition.is_postfix_unary() {
            return Ok(format!(
                "{} {}",
                self.left.render(dialect, params)?,
                self.condition.as_str()
            ));
        }
        if self.condition.is_prefix_unary() {
            return Ok(format!(
                "{} {}",
                self.condition.as_str(),
                self.right.render(dialect, params)?
            ));
        }
        Ok(format!(
            "{} {} {}",
            self.left.render(dialect, params)?,
            self.condition.as_str(),
            self.right.render(dialect, params)?
        ))
    }
}

/// `EXISTS (<query>)`。
pub fn exists(query: Select) -> Filter {
    Filter::new(
        Operand::None,
        Condition::Exists,
        Operand::Subquery(Box::new(query)),
    )
}

/// `NOT EXISTS (<query>)`。
pub fn not_exists(query: Select) -> Filter {
    Filter::new(
        Operand::None,
        Condition::NotExists,
        Operand::Subquery(Box::new(query)),
    )
}

/// `ANY (<query>)` 操作数，常见用法 `col.eq(any(query))`。
pub fn any(query: Select) -> Operand {
    Operand::Any(Box::new(query))
}

/// WHERE / HAVING 槽位：类型化树或原样字符串，二选一。
#[derive(Debug, Clone)]
pub(crate) enum WhereExpr {
    Typed(Filter),
    Raw(String),
}

impl WhereExpr {
    pub(crate) fn render(
        &self,
        dialect: &Dialect,
        params: &mut Vec<Parameter>,
    ) -> Result<String, Error> {
        match self {
            Self::Typed(f) => f.render(dialect, params),
            Self::Raw(s) => Ok(s.clone()),
        }
    }
}

macro_rules! comparison_constructors {
    ($target:ident, $wrap:path) => {
        impl $target {
            pub fn eq(self, value: impl Into<Operand>) -> Filter {
                Filter::new($wrap(self), Condition::Equal, value.into())
            }

            pub fn ne(self, value: impl Into<Operand>) -> Filter {
                Filter::new($wrap(self), Condition::NotEqual, value.into())
            }

            pub fn gt(self, value: impl Into<Operand>) -> Filter {
                Filter::new($wrap(self), Condition::GreaterThan, value.into())
            }

            pub fn ge(self, value: impl Into<Operand>) -> Filter {
                Filter::new($wrap(self), Condition::GreaterOrEqual, value.into())
            }

            pub fn lt(self, value: impl Into<Operand>) -> Filter {
                Filter::new($wrap(self), Condition::LessThan, value.into())
            }

            pub fn le(self, value: impl Into<Operand>) -> Filter {
                Filter::new($wrap(self), Condition::LessOrEqual, value.into())
            }

            pub fn like(self, pattern: impl Into<Operand>) -> Filter {
                Filter::new($wrap(self), Condition::Like, pattern.into())
            }

            pub fn not_like(self, pattern: impl Into<Operand>) -> Filter {
                Filter::new($wrap(self), Condition::NotLike, pattern.into())
            }

            pub fn between(self, low: impl Into<Operand>, high: impl Into<Operand>) -> Filter {
                let range = Operand::Range(Box::new(low.into()), Box::new(high.into()));
                Filter::new($wrap(self), Condition::Between, range)
            }

            pub fn not_between(
                self,
                low: impl Into<Operand>,
                high: impl Into<Operand>,
            ) -> Filter {
                let range = Operand::Range(Box::new(low.into()), Box::new(high.into()));
                Filter::new($wrap(self), Condition::NotBetween, range)
            }

            pub fn in_list(
                self,
                values: impl IntoIterator<Item = impl Into<Value>>,
            ) -> Filter {
                let list = Operand::List(values.into_iter().map(Into::into).collect());
                Filter::new($wrap(self), Condition::In, list)
            }

            pub fn not_in_list(
                self,
                values: impl IntoIterator<Item = impl Into<Value>>,
            ) -> Filter {
                let list = Operand::List(values.into_iter().map(Into::into).collect());
                Filter::new($wrap(self), Condition::NotIn, list)
            }

            pub fn in_query(self, query: Select) -> Filter {
                Filter::new(
                    $wrap(self),
                    Condition::In,
                    Operand::Subquery(Box::new(query)),
                )
            }

            pub fn not_in_query(self, query: Select) -> Filter {
                Filter::new(
                    $wrap(self),
                    Condition::NotIn,
                    Operand::Subquery(Box::new(query)),
                )
            }

            pub fn is_null(self) -> Filter {
                Filter::new($wrap(self), Condition::IsNull, Operand::None)
            }

            pub fn is_not_null(self) -> Filter {
                Filter::new($wrap(self), Condition::IsNotNull, Operand::None)
            }
        }
    };
}

comparison_constructors!(ColumnRef, Operand::Column);
comparison_constructors!(Field, Operand::Field);

impl From<Value> for Operand {
    fn from(v: Value) -> Self {
        Self::Value(v)
    }
}

impl From<ColumnRef> for Operand {
    fn from(c: ColumnRef) -> Self {
        Self::Column(c)
    }
}

impl From<Field> for Operand {
    fn from(f: Field) -> Self {
        Self::Field(f)
    }
}

impl From<Parameter> for Operand {
    fn from(p: Parameter) -> Self {
        Self::Parameter(p)
    }
}

impl From<Select> for Operand {
    fn from(q: Select) -> Self {
        Self::Subquery(Box::new(q))
    }
}

impl From<Filter> for Operand {
    fn from(f: Filter) -> Self {
        Self::Filter(Box::new(f))
    }
}

impl From<bool> for Operand {
    fn from(v: bool) -> Self {
        Self::Value(v.into())
    }
}

impl From<i32> for Operand {
    fn from(v: i32) -> Self {
        Self::Value(v.into())
    }
}

impl From<i64> for Operand {
    fn from(v: i64) -> Self {
        Self::Value(v.into())
    }
}

impl From<u32> for Operand {
    fn from(v: u32) -> Self {
        Self::Value(v.into())
    }
}

impl From<u64> for Operand {
    fn from(v: u64) -> Self {
        Self::Value(v.into())
    }
}

impl From<f32> for Operand {
    fn from(v: f32) -> Self {
        Self::Value(v.into())
    }
}

impl From<f64> for Operand {
    fn from(v: f64) -> Self {
        Self::Value(v.into())
    }
}

impl From<&'static str> for Operand {
    fn from(v: &'static str) -> Self {
        Self::Value(v.into())
    }
}

impl From<String> for Operand {
    fn from(v: String) -> Self {
        Self::Value(v.into())
    }
}

impl From<time::OffsetDateTime> for Operand {
    fn from(v: time::OffsetDateTime) -> Self {
        Self::Value(v.into())
    }
}

impl<T> From<Option<T>> for Operand
where
    T: Into<Value>,
{
    fn from(v: Option<T>) -> Self {
        Self::Value(Value::from_option(v))
    }
}
