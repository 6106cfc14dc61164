//! SQL 字面量值类型及其文本渲染。

use crate::dialect::Dialect;
use std::borrow::Cow;

/// 闭合的字面量类型：谓词操作数、SET 值与 DEFAULT 值的统一表示。
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f32),
    Double(f64),
    String(Cow<'static, str>),
    DateTime(time::OffsetDateTime),
}

impl Value {
    /// 将 `Option<T>` 映射为 `Value`：`None => Null`。
    pub fn from_option<T: Into<Value>>(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Self::Null,
        }
    }

    /// 渲染为 SQL 字面量文本：字符串单引号包裹并转义 `'`，
    /// 布尔取方言 token，数值用其规范十进制形式。
    pub(crate) fn render(&self, dialect: &Dialect) -> String {
        match self {
            Self::Null => "NULL".to_string(),
            Self::Bool(true) => dialect.boolean_true.to_string(),
            Self::Bool(false) => dialect.boolean_false.to_string(),
            Self::Int(v) => v.to_string(),
            Self::UInt(v) => v.to_string(),
            Self::Float(v) => v.to_string(),
            Self::Double(v) => v.to_string(),
            Self::String(s) => quote(s),
            Self::DateTime(dt) => {
                let fmt = time::macros::format_description!(
                    "[year]-[month]-[day] [hour]:[minute]:[second]"
                );
                let utc = dt.to_offset(time::UtcOffset::UTC);
                let text = utc
                    .format(fmt)
                    .unwrap_or_else(|_| utc.unix_timestamp().to_string());
                quote(&text)
            }
        }
    }
}

fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        if c == '\'' {
            out.push('\'');
        }
        out.push(c);
    }
    out.push('\'');
    out
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Self::Null
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i8> for Value {
    fn from(v: i8) -> Self {
        Self::Int(v as i64)
    }
}

impl From<i16> for Value {
    fn from(v: i16) -> Self {
        Self::Int(v as i64)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(v as i64)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<u8> for Value {
    fn from(v: u8) -> Self {
        Self::UInt(v as u64)
    }
}

impl From<u16> for Value {
    fn from(v: u16) -> Self {
        Self::UInt(v as u64)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Self::UInt(v as u64)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Self::UInt(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(Cow::Owned(v))
    }
}

impl From<&'static str> for Value {
    fn from(v: &'static str) -> Self {
        Self::String(Cow::Borrowed(v))
    }
}

impl From<time::OffsetDateTime> for Value {
    fn from(v: time::OffsetDateTime) -> Self {
        Self::DateTime(v)
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(v: Option<T>) -> Self {
        Self::from_option(v)
    }
}

#[cfg(test)]
mod tests {
    use super::Value;
    use crate::dialect::Dialect;
    use pretty_assertions::assert_eq;

    #[test]
    fn string_is_single_quoted_and_escaped() {
        let d = Dialect::generic();
        assert_eq!(Value::from("it's").render(&d), "'it''s'");
    }

    #[test]
    fn null_renders_unquoted() {
        let d = Dialect::generic();
        assert_eq!(Value::from_option::<i64>(None).render(&d), "NULL");
    }

    #[test]
    fn booleans_use_dialect_tokens() {
        assert_eq!(Value::Bool(true).render(&Dialect::generic()), "true");
        assert_eq!(Value::Bool(true).render(&Dialect::sqlite()), "1");
        assert_eq!(Value::Bool(false).render(&Dialect::sqlite()), "0");
    }

    #[test]
    fn numbers_use_canonical_form() {
        let d = Dialect::generic();
        assert_eq!(Value::from(42_i64).render(&d), "42");
        assert_eq!(Value::from(1.5_f64).render(&d), "1.5");
    }

    #[test]
    fn datetime_renders_as_quoted_utc() {
        let d = Dialect::generic();
        let dt = time::macros::datetime!(2024-03-01 12:30:00 UTC);
        assert_eq!(Value::from(dt).render(&d), "'2024-03-01 12:30:00'");
    }
}
