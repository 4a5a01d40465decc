use std::fmt;

/// 字段值的标量类型（上下行共用）。
#[derive(Debug, Clone, PartialEq)]
pub enum FieldScalar {
    I64(i64),
    F64(f64),
    Bool(bool),
    String(String),
}

impl FieldScalar {
    /// 变体名称（用于日志与错误信息）。
    pub fn kind(&self) -> &'static str {
        match self {
            FieldScalar::I64(_) => "integer",
            FieldScalar::F64(_) => "float",
            FieldScalar::Bool(_) => "boolean",
            FieldScalar::String(_) => "string",
        }
    }
}

/// 渲染裸标量，日志与报文使用同一形式。
impl fmt::Display for FieldScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldScalar::I64(v) => write!(f, "{}", v),
            FieldScalar::F64(v) => write!(f, "{}", v),
            FieldScalar::Bool(v) => write!(f, "{}", v),
            FieldScalar::String(v) => write!(f, "{}", v),
        }
    }
}

impl From<i64> for FieldScalar {
    fn from(value: i64) -> Self {
        FieldScalar::I64(value)
    }
}

impl From<f64> for FieldScalar {
    fn from(value: f64) -> Self {
        FieldScalar::F64(value)
    }
}

impl From<bool> for FieldScalar {
    fn from(value: bool) -> Self {
        FieldScalar::Bool(value)
    }
}

impl From<String> for FieldScalar {
    fn from(value: String) -> Self {
        FieldScalar::String(value)
    }
}

impl From<&str> for FieldScalar {
    fn from(value: &str) -> Self {
        FieldScalar::String(value.to_string())
    }
}

/// 单个命名字段的值。
///
/// `timestamp` 仅出现在下行读取的数据上（服务端赋值的元数据），
/// 上行构造的实例始终为 `None`。
#[derive(Debug, Clone)]
pub struct FieldValue {
    pub field_id: String,
    pub value: FieldScalar,
    pub timestamp: Option<i64>,
}

impl FieldValue {
    /// 直接构造字段值，不做任何内容校验。
    pub fn new(field_id: impl Into<String>, value: FieldScalar, timestamp: Option<i64>) -> Self {
        Self {
            field_id: field_id.into(),
            value,
            timestamp,
        }
    }
}

/// 相等性仅比较 field_id（同一字段槽位），value 与 timestamp 不参与。
impl PartialEq for FieldValue {
    fn eq(&self, other: &Self) -> bool {
        self.field_id == other.field_id
    }
}

impl Eq for FieldValue {}
