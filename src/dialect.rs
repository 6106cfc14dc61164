//! Dialect：方言替换表，渲染期所有后端差异的唯一来源。

/// 自增列子句生成器：输入（方言解析后的）类型名与该列是否为主键，
/// 返回替代类型名位置的完整片段。
pub type AutoIncrementFn = fn(type_name: &str, is_primary_key: bool) -> String;

/// 方言配置。纯数据、构造后只读，可在线程间共享。
///
/// 每个槽位都是一个字符串替换或开关；渲染器在需要时查表，自身不携带
/// 任何后端分支逻辑。
#[derive(Debug, Clone)]
pub struct Dialect {
    /// 转大写标量函数关键字。
    pub ucase_keyword: &'static str,
    /// 转小写标量函数关键字。
    pub lcase_keyword: &'static str,
    /// 字符串长度标量函数关键字。
    pub len_keyword: &'static str,

    /// 位置参数占位符。
    pub numbered_parameter_marker: &'static str,
    /// 是否在渲染后给位置参数占位符追加序号。
    pub add_numbers_to_parameters: bool,
    /// 追加序号时的起始值。
    pub first_parameter_index: usize,
    /// 命名参数占位符前缀。
    pub named_parameter_marker: &'static str,

    /// 布尔字面量。
    pub boolean_true: &'static str,
    pub boolean_false: &'static str,

    /// CREATE TABLE 中需要按方言解析的类型名。
    pub float_type: &'static str,
    pub double_type: &'static str,
    pub char_type: &'static str,
    pub unsigned_type: &'static str,

    /// DELETE 带 WITH 子句时是否要求 USING 列出 WITH 表。
    pub with_delete_requires_using: bool,
    /// UPDATE 带 WITH 子句时是否要求 FROM 列出 WITH 表。
    pub with_update_requires_from: bool,
    /// 子查询上是否支持 ANY。
    pub any_on_subquery_supported: bool,

    /// 自增列子句生成器。
    pub create_auto_increment: AutoIncrementFn,
}

impl Default for Dialect {
    fn default() -> Self {
        Self::generic()
    }
}

fn generic_auto_increment(type_name: &str, _is_primary_key: bool) -> String {
    format!("{type_name} AUTO_INCREMENT")
}

fn postgresql_auto_increment(type_name: &str, _is_primary_key: bool) -> String {
    match type_name {
        "smallint" => "smallserial".to_string(),
        "integer" => "serial".to_string(),
        "bigint" => "bigserial".to_string(),
        _ => type_name.to_string(),
    }
}

fn sqlite_auto_increment(type_name: &str, is_primary_key: bool) -> String {
    // SQLite 的 INTEGER PRIMARY KEY 即 rowid 别名，天然自增。
    if is_primary_key {
        type_name.to_string()
    } else {
        format!("{type_name} AUTOINCREMENT")
    }
}

impl Dialect {
    /// 通用方言：`?` 占位符不编号，MySQL 风格的关键字与类型名。
    pub fn generic() -> Self {
        Self {
            ucase_keyword: "UCASE",
            lcase_keyword: "LCASE",
            len_keyword: "LENGTH",
            numbered_parameter_marker: "?",
            add_numbers_to_parameters: false,
            first_parameter_index: 1,
            named_parameter_marker: "@",
            boolean_true: "true",
            boolean_false: "false",
            float_type: "float",
            double_type: "double",
            char_type: "char",
            unsigned_type: "integer unsigned",
            with_delete_requires_using: false,
            with_update_requires_from: false,
            any_on_subquery_supported: true,
            create_auto_increment: generic_auto_increment,
        }
    }

    /// PostgreSQL 风格：`$n` 编号占位符、serial 自增、UPDATE/DELETE
    /// 的 WITH 表需要在 FROM/USING 中列出。
    pub fn postgresql() -> Self {
        Self {
            ucase_keyword: "UPPER",
            lcase_keyword: "LOWER",
            len_keyword: "LENGTH",
            numbered_parameter_marker: "$",
            add_numbers_to_parameters: true,
            first_parameter_index: 1,
            named_parameter_marker: "@",
            boolean_true: "true",
            boolean_false: "false",
            float_type: "real",
            double_type: "double precision",
            char_type: "character",
            unsigned_type: "bigint",
            with_delete_requires_using: true,
            with_update_requires_from: true,
            any_on_subquery_supported: true,
            create_auto_increment: postgresql_auto_increment,
        }
    }

    /// SQLite 风格：`?NNN` 编号占位符。
    pub fn sqlite() -> Self {
        Self {
            ucase_keyword: "UPPER",
            lcase_keyword: "LOWER",
            len_keyword: "LENGTH",
            numbered_parameter_marker: "?",
            add_numbers_to_parameters: true,
            first_parameter_index: 1,
            named_parameter_marker: "@",
            boolean_true: "1",
            boolean_false: "0",
            float_type: "real",
            double_type: "real",
            char_type: "text",
            unsigned_type: "integer",
            with_delete_requires_using: false,
            with_update_requires_from: false,
            any_on_subquery_supported: false,
            create_auto_increment: sqlite_auto_increment,
        }
    }
}
