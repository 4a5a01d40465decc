//! 字段值的上下行 JSON 契约。
//!
//! 下行（服务端 -> 客户端）：`{ "<field_id>": { "value": v, "timestamp": t|null } }`；
//! 上行（客户端 -> 服务端）：`{ "<field_id>": v }`，不携带时间戳。

use domain::{FieldScalar, FieldValue};
use fieldlink_telemetry::{
    record_downstream_value, record_encoded_object, record_rejected_payload,
    record_upstream_value,
};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// 契约错误。
#[derive(Debug, thiserror::Error)]
pub enum ContractError {
    /// 报文形状不合法（非对象、顶层键数不为一、载荷体缺字段、时间戳非整数）。
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    /// 载荷不是受支持的四种标量之一。
    #[error("unsupported value: {0}")]
    UnsupportedValue(String),

    /// 报文文本不是合法 JSON。
    #[error("json parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// 下行字段载荷体。
#[derive(Debug, Deserialize)]
struct DownstreamBody {
    value: Value,
    #[serde(default)]
    timestamp: Option<i64>,
}

/// 从下行 JSON 对象解析字段值（timestamp 缺省或为 null 均为 None）。
pub fn from_downstream(object: &Value) -> Result<FieldValue, ContractError> {
    match parse_downstream(object) {
        Ok(value) => {
            record_downstream_value();
            debug!(
                target: "fieldlink.wire",
                field_id = %value.field_id,
                value = %value.value,
                kind = value.value.kind(),
                timestamp = ?value.timestamp,
                "downstream_value_parsed"
            );
            Ok(value)
        }
        Err(err) => Err(rejected("downstream", err)),
    }
}

/// 从上行 JSON 对象解析字段值，timestamp 始终为 None。
pub fn from_upstream(object: &Value) -> Result<FieldValue, ContractError> {
    match parse_upstream(object) {
        Ok(value) => {
            record_upstream_value();
            debug!(
                target: "fieldlink.wire",
                field_id = %value.field_id,
                value = %value.value,
                kind = value.value.kind(),
                "upstream_value_parsed"
            );
            Ok(value)
        }
        Err(err) => Err(rejected("upstream", err)),
    }
}

/// 从下行 JSON 文本解析字段值。
pub fn from_downstream_str(payload: &str) -> Result<FieldValue, ContractError> {
    let object: Value =
        serde_json::from_str(payload).map_err(|err| rejected("downstream", err.into()))?;
    from_downstream(&object)
}

/// 从上行 JSON 文本解析字段值。
pub fn from_upstream_str(payload: &str) -> Result<FieldValue, ContractError> {
    let object: Value =
        serde_json::from_str(payload).map_err(|err| rejected("upstream", err.into()))?;
    from_upstream(&object)
}

/// 序列化为下行形状，timestamp 键始终输出（无值时为 null）。
pub fn to_downstream_object(value: &FieldValue) -> Value {
    let mut body = Map::new();
    body.insert("value".to_string(), scalar_to_json(&value.value));
    body.insert(
        "timestamp".to_string(),
        match value.timestamp {
            Some(ts) => Value::from(ts),
            None => Value::Null,
        },
    );
    let mut object = Map::new();
    object.insert(value.field_id.clone(), Value::Object(body));
    record_encoded_object();
    Value::Object(object)
}

/// 序列化为上行形状，timestamp 永不输出（服务端只读元数据）。
pub fn to_upstream_object(value: &FieldValue) -> Value {
    let mut object = Map::new();
    object.insert(value.field_id.clone(), scalar_to_json(&value.value));
    record_encoded_object();
    Value::Object(object)
}

/// 序列化为下行 JSON 文本。
pub fn to_downstream_string(value: &FieldValue) -> String {
    to_downstream_object(value).to_string()
}

/// 序列化为上行 JSON 文本。
pub fn to_upstream_string(value: &FieldValue) -> String {
    to_upstream_object(value).to_string()
}

fn parse_downstream(object: &Value) -> Result<FieldValue, ContractError> {
    let (field_id, body) = single_entry(object)?;
    let body: DownstreamBody = serde_json::from_value(body.clone())
        .map_err(|err| ContractError::InvalidFormat(err.to_string()))?;
    let scalar = scalar_from_json(&body.value)?;
    Ok(FieldValue::new(field_id, scalar, body.timestamp))
}

fn parse_upstream(object: &Value) -> Result<FieldValue, ContractError> {
    let (field_id, payload) = single_entry(object)?;
    let scalar = scalar_from_json(payload)?;
    Ok(FieldValue::new(field_id, scalar, None))
}

/// 提取唯一的顶层键值对，键数不为一时拒绝。
fn single_entry(object: &Value) -> Result<(&str, &Value), ContractError> {
    let entries = object
        .as_object()
        .ok_or_else(|| ContractError::InvalidFormat("payload must be a json object".to_string()))?;
    match entries.iter().next() {
        Some((field_id, body)) if entries.len() == 1 => Ok((field_id.as_str(), body)),
        _ => Err(ContractError::InvalidFormat(format!(
            "expected exactly one field entry, got {}",
            entries.len()
        ))),
    }
}

fn scalar_from_json(payload: &Value) -> Result<FieldScalar, ContractError> {
    match payload {
        Value::String(v) => Ok(FieldScalar::String(v.clone())),
        Value::Bool(v) => Ok(FieldScalar::Bool(*v)),
        Value::Number(number) => {
            if let Some(v) = number.as_i64() {
                Ok(FieldScalar::I64(v))
            } else if let Some(v) = number.as_f64() {
                Ok(FieldScalar::F64(v))
            } else {
                Err(ContractError::UnsupportedValue(number.to_string()))
            }
        }
        Value::Null => Err(ContractError::UnsupportedValue("null".to_string())),
        Value::Array(_) => Err(ContractError::UnsupportedValue("array".to_string())),
        Value::Object(_) => Err(ContractError::UnsupportedValue("object".to_string())),
    }
}

fn scalar_to_json(scalar: &FieldScalar) -> Value {
    match scalar {
        FieldScalar::I64(v) => Value::from(*v),
        FieldScalar::F64(v) => Value::from(*v),
        FieldScalar::Bool(v) => Value::Bool(*v),
        FieldScalar::String(v) => Value::String(v.clone()),
    }
}

fn rejected(direction: &'static str, err: ContractError) -> ContractError {
    record_rejected_payload();
    warn!(target: "fieldlink.wire", direction, error = %err, "payload_rejected");
    err
}
