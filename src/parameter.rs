//! Parameter：占位符参数与位置参数的后编号扫描。

use crate::dialect::Dialect;

/// 语句中的占位符参数。位置参数渲染为裸占位符，由
/// [`number_parameters`] 在整条语句渲染完成后统一编号；命名参数渲染为
/// `<前缀><名字>`，不参与编号。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Parameter {
    #[default]
    Positional,
    Named(String),
}

impl Parameter {
    pub fn new() -> Self {
        Self::Positional
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub(crate) fn render(&self, dialect: &Dialect) -> String {
        match self {
            Self::Positional => dialect.numbered_parameter_marker.to_string(),
            Self::Named(name) => format!("{}{}", dialect.named_parameter_marker, name),
        }
    }
}

/// 对渲染完成的 SQL 做一次从左到右的扫描，给每个位置参数占位符追加
/// 递增序号（从 `dialect.first_parameter_index` 开始）。命名参数使用
/// 不同的前缀，天然不受影响。
///
/// 已知限制：扫描是纯文本的，不识别字符串字面量；字面量文本中出现
/// 占位符字符会被一并编号，调用方需要避免这种写法。
pub(crate) fn number_parameters(text: &str, dialect: &Dialect) -> String {
    let marker = dialect.numbered_parameter_marker;
    if marker.is_empty() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len() + 8);
    let mut index = dialect.first_parameter_index;
    let mut rest = text;
    while let Some(pos) = rest.find(marker) {
        let end = pos + marker.len();
        out.push_str(&rest[..end]);
        out.push_str(&index.to_string());
        index += 1;
        rest = &rest[end..];
    }
    out.push_str(rest);
    out
}
