//! Condition：谓词树节点使用的闭合运算符集合。

/// 比较 / 逻辑 / 成员运算符，每个对应一个固定 SQL token。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    Equal,
    NotEqual,
    GreaterThan,
    LessThan,
    GreaterOrEqual,
    LessOrEqual,
    Like,
    NotLike,
    Between,
    NotBetween,
    In,
    NotIn,
    IsNull,
    IsNotNull,
    And,
    Or,
    Any,
    Exists,
    NotExists,
}

impl Condition {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Equal => "=",
            Self::NotEqual => "<>",
            Self::GreaterThan => ">",
            Self::LessThan => "<",
            Self::GreaterOrEqual => ">=",
            Self::LessOrEqual => "<=",
            Self::Like => "LIKE",
            Self::NotLike => "NOT LIKE",
            Self::Between => "BETWEEN",
            Self::NotBetween => "NOT BETWEEN",
            Self::In => "IN",
            Self::NotIn => "NOT IN",
            Self::IsNull => "IS NULL",
            Self::IsNotNull => "IS NOT NULL",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Any => "ANY",
            Self::Exists => "EXISTS",
            Self::NotExists => "NOT EXISTS",
        }
    }

    /// 一元条件：只渲染左操作数与 token。
    pub(crate) const fn is_postfix_unary(self) -> bool {
        matches!(self, Self::IsNull | Self::IsNotNull)
    }

    /// 前缀一元条件：只渲染 token 与右操作数。
    pub(crate) const fn is_prefix_unary(self) -> bool {
        matches!(self, Self::Exists | Self::NotExists)
    }
}
