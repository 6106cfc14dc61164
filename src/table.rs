//! Table / Column：表结构描述、限定列句柄与键声明。

use crate::dialect::Dialect;
use crate::statement::{Error, ValidationErrors};
use crate::value::Value;

/// 列的 SQL 数据类型。部分类型名由方言解析（float / double / char /
/// 无符号整数），其余使用固定名字。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlType {
    SmallInt,
    Int,
    BigInt,
    Unsigned,
    Float,
    Double,
    Char,
    Varchar,
    Text,
    Bool,
    Date,
    Time,
    Timestamp,
}

impl SqlType {
    pub(crate) fn name(self, dialect: &Dialect) -> &'static str {
        match self {
            Self::SmallInt => "smallint",
            Self::Int => "integer",
            Self::BigInt => "bigint",
            Self::Unsigned => dialect.unsigned_type,
            Self::Float => dialect.float_type,
            Self::Double => dialect.double_type,
            Self::Char => dialect.char_type,
            Self::Varchar => "varchar",
            Self::Text => "text",
            Self::Bool => "boolean",
            Self::Date => "date",
            Self::Time => "time",
            Self::Timestamp => "timestamp",
        }
    }
}

/// 列定义：名字、类型与 DDL 属性。列不持有指回表的引用，
/// 归属关系由拥有它的 [`Table`] 表达。
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub(crate) name: String,
    pub(crate) sql_type: SqlType,
    pub(crate) length: Option<u32>,
    pub(crate) not_null: bool,
    pub(crate) unique: bool,
    pub(crate) default_value: Option<Value>,
    pub(crate) check: Option<String>,
    pub(crate) collate: Option<String>,
    pub(crate) auto_increment: bool,
    pub(crate) primary_key: bool,
}

impl Column {
    pub fn new(name: impl Into<String>, sql_type: SqlType) -> Self {
        Self {
            name: name.into(),
            sql_type,
            length: None,
            not_null: false,
            unique: false,
            default_value: None,
            check: None,
            collate: None,
            auto_increment: false,
            primary_key: false,
        }
    }

    pub fn length(mut self, length: u32) -> Self {
        self.length = Some(length);
        self
    }

    pub fn not_null(mut self) -> Self {
        self.not_null = true;
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn check(mut self, expression: impl Into<String>) -> Self {
        self.check = Some(expression.into());
        self
    }

    pub fn collate(mut self, collation: impl Into<String>) -> Self {
        self.collate = Some(collation.into());
        self
    }

    pub fn auto_increment(mut self) -> Self {
        self.auto_increment = true;
        self
    }

    /// 单列内联主键标记。与表级复合主键同时声明会在 CREATE TABLE
    /// 校验时报 "Conflicting definitions of primary key."。
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }
}

/// 限定列句柄：携带所属表的标签（别名优先）。由 [`Table::col`] 产生；
/// 脱离表单独构造的句柄是未绑定的，渲染时立即报错。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnRef {
    pub(crate) table: Option<String>,
    pub(crate) name: String,
}

impl ColumnRef {
    /// 构造一个未绑定表的列句柄。只能用于随后绑定；直接渲染会得到
    /// [`Error::UnboundColumn`]。
    pub fn unbound(name: impl Into<String>) -> Self {
        Self {
            table: None,
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn render(&self) -> Result<String, Error> {
        match &self.table {
            Some(t) => Ok(format!("{t}.{}", self.name)),
            None => Err(Error::UnboundColumn(self.name.clone())),
        }
    }
}

/// 外键声明：本表列列表 → 被引用列列表。
#[derive(Debug, Clone, PartialEq)]
pub struct ForeignKey {
    pub(crate) columns: Vec<ColumnRef>,
    pub(crate) references: Vec<ColumnRef>,
}

impl ForeignKey {
    /// 两侧列集合（按无序比较）都相同视为重复声明。
    pub(crate) fn same_as(&self, other: &ForeignKey) -> bool {
        same_column_set(&self.columns, &other.columns)
            && same_column_set(&self.references, &other.references)
    }
}

fn same_column_set(a: &[ColumnRef], b: &[ColumnRef]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut a_sorted: Vec<&ColumnRef> = a.iter().collect();
    let mut b_sorted: Vec<&ColumnRef> = b.iter().collect();
    let key = |c: &&ColumnRef| (c.table.clone(), c.name.clone());
    a_sorted.sort_by_key(key);
    b_sorted.sort_by_key(key);
    a_sorted == b_sorted
}

/// 表描述：名字、可选别名、有序列集合与键声明。
///
/// 同一个 `Table` 值通常作为可复用的 schema 描述构造一次；自联结时用
/// [`Table::as_alias`] 派生带别名的副本。所有 setter 都消费旧值返回
/// 新值，构造之后不存在原地修改。
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub(crate) name: String,
    pub(crate) alias: Option<String>,
    pub(crate) columns: Vec<Column>,
    pub(crate) primary_key: Option<Vec<ColumnRef>>,
    pub(crate) foreign_keys: Vec<ForeignKey>,
    pub(crate) errors: ValidationErrors,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
            columns: Vec::new(),
            primary_key: None,
            foreign_keys: Vec::new(),
            errors: ValidationErrors::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// 渲染时用于限定列名的标签：别名优先于表名。
    pub fn label(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }

    pub fn column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    pub fn columns(mut self, columns: impl IntoIterator<Item = Column>) -> Self {
        self.columns.extend(columns);
        self
    }

    /// 取一个绑定到本表标签的列句柄。列名不要求已在 `columns` 中声明，
    /// 查询场景常常只需要名字。
    pub fn col(&self, name: impl Into<String>) -> ColumnRef {
        ColumnRef {
            table: Some(self.label().to_string()),
            name: name.into(),
        }
    }

    /// 派生带别名的副本，用于自联结。
    pub fn as_alias(&self, alias: impl Into<String>) -> Table {
        let mut t = self.clone();
        t.alias = Some(alias.into());
        t
    }

    /// 表级复合主键。重复声明记录为主键定义冲突。
    pub fn primary_key(mut self, columns: impl IntoIterator<Item = ColumnRef>) -> Self {
        if self.primary_key.is_some() {
            self.errors.push("Conflicting definitions of primary key");
            return self;
        }
        self.primary_key = Some(columns.into_iter().collect());
        self
    }

    /// 追加一条外键声明。与已有声明完全重复（两侧列集合无序相同）时
    /// 静默去重。
    pub fn foreign_key(
        mut self,
        columns: impl IntoIterator<Item = ColumnRef>,
        references: impl IntoIterator<Item = ColumnRef>,
    ) -> Self {
        let fk = ForeignKey {
            columns: columns.into_iter().collect(),
            references: references.into_iter().collect(),
        };
        if !self.foreign_keys.iter().any(|existing| existing.same_as(&fk)) {
            self.foreign_keys.push(fk);
        }
        self
    }

    /// FROM 子句中的表名：`name` 或 `name AS alias`。
    pub(crate) fn from_clause(&self) -> String {
        match &self.alias {
            Some(a) => format!("{} AS {}", self.name, a),
            None => self.name.clone(),
        }
    }
}
