//! Field-by-field JSON readers and writers used by every record.
//!
//! [`Fields`] reads a JSON object for one record. Absent and `null` keys
//! yield the field default; anything present must coerce to the declared
//! type or the read fails with a validation error naming the key.
//!
//! [`JsonObject`] builds the output object, eliding default scalars while
//! always emitting present nested records and repeated fields.

use chrono::{DateTime, Utc};
use serde_json::{Map, Number, Value};

use super::{base64, timestamp, Enumeration, Message};
use crate::error::{CodecError, Result};
use crate::wire::{to_safe_number, to_safe_signed, MAX_SAFE_INTEGER};

// Scalar coercions

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn unexpected(field: &str, expected: &str, value: &Value) -> CodecError {
    CodecError::validation(
        field,
        format!("expected {}, got {}", expected, describe(value)),
    )
}

/// Integer carried by a JSON number or numeric string, before narrowing.
enum Integer {
    Signed(i64),
    Unsigned(u64),
}

fn float_to_integer(field: &str, f: f64) -> Result<Integer> {
    if !f.is_finite() || f.fract() != 0.0 {
        return Err(CodecError::validation(
            field,
            format!("{} is not an integer", f),
        ));
    }
    if f.abs() > MAX_SAFE_INTEGER as f64 {
        return Err(CodecError::Range {
            value: f.to_string(),
        });
    }
    Ok(if f < 0.0 {
        Integer::Signed(f as i64)
    } else {
        Integer::Unsigned(f as u64)
    })
}

fn coerce_integer(field: &str, value: &Value) -> Result<Integer> {
    match value {
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                Ok(Integer::Unsigned(u))
            } else if let Some(i) = n.as_i64() {
                Ok(Integer::Signed(i))
            } else {
                float_to_integer(field, n.as_f64().unwrap_or(f64::NAN))
            }
        }
        Value::String(text) => {
            let text = text.trim();
            if let Ok(u) = text.parse::<u64>() {
                Ok(Integer::Unsigned(u))
            } else if let Ok(i) = text.parse::<i64>() {
                Ok(Integer::Signed(i))
            } else if let Ok(f) = text.parse::<f64>() {
                float_to_integer(field, f)
            } else {
                Err(CodecError::validation(
                    field,
                    format!("{:?} is not numeric", text),
                ))
            }
        }
        other => Err(unexpected(field, "number or numeric string", other)),
    }
}

/// Coerce to `int64`, enforcing the safe-integer bound.
pub fn coerce_int64(field: &str, value: &Value) -> Result<i64> {
    match coerce_integer(field, value)? {
        Integer::Signed(i) => to_safe_signed(i),
        Integer::Unsigned(u) => {
            let u = to_safe_number(u)?;
            Ok(u as i64)
        }
    }
}

/// Coerce to `uint64`, enforcing the safe-integer bound.
pub fn coerce_uint64(field: &str, value: &Value) -> Result<u64> {
    match coerce_integer(field, value)? {
        Integer::Unsigned(u) => to_safe_number(u),
        Integer::Signed(i) => Err(CodecError::validation(
            field,
            format!("{} is negative", i),
        )),
    }
}

/// Coerce to `int32`.
pub fn coerce_int32(field: &str, value: &Value) -> Result<i32> {
    let wide = coerce_int64(field, value)?;
    i32::try_from(wide)
        .map_err(|_| CodecError::validation(field, format!("{} is out of int32 range", wide)))
}

/// Coerce to `uint32`.
pub fn coerce_uint32(field: &str, value: &Value) -> Result<u32> {
    let wide = coerce_uint64(field, value)?;
    u32::try_from(wide)
        .map_err(|_| CodecError::validation(field, format!("{} is out of uint32 range", wide)))
}

/// Coerce to `double`. Accepts `"NaN"`, `"Infinity"` and `"-Infinity"`.
pub fn coerce_double(field: &str, value: &Value) -> Result<f64> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| unexpected(field, "finite number", value)),
        Value::String(text) if text == "NaN" => Ok(f64::NAN),
        Value::String(text) if text == "Infinity" => Ok(f64::INFINITY),
        Value::String(text) if text == "-Infinity" => Ok(f64::NEG_INFINITY),
        Value::String(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| CodecError::validation(field, format!("{:?} is not numeric", text))),
        other => Err(unexpected(field, "number or numeric string", other)),
    }
}

/// Coerce to `bool`. Only JSON booleans are accepted.
pub fn coerce_bool(field: &str, value: &Value) -> Result<bool> {
    value
        .as_bool()
        .ok_or_else(|| unexpected(field, "boolean", value))
}

/// Coerce to `string`. Numbers and booleans are rendered as text.
pub fn coerce_string(field: &str, value: &Value) -> Result<String> {
    match value {
        Value::String(text) => Ok(text.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(unexpected(field, "string", other)),
    }
}

/// Coerce base64 text to bytes.
pub fn coerce_bytes(field: &str, value: &Value) -> Result<Vec<u8>> {
    match value {
        Value::String(text) => base64::decode(field, text),
        other => Err(unexpected(field, "base64 string", other)),
    }
}

/// Render a double. NaN and infinities have no JSON number form and use
/// the protobuf JSON strings instead.
fn double_value(value: f64) -> Value {
    match Number::from_f64(value) {
        Some(n) => Value::Number(n),
        None if value.is_nan() => Value::String("NaN".to_owned()),
        None if value > 0.0 => Value::String("Infinity".to_owned()),
        None => Value::String("-Infinity".to_owned()),
    }
}

/// Reader over one record's JSON object.
#[derive(Debug, Clone, Copy)]
pub struct Fields<'a> {
    record: &'static str,
    map: Option<&'a Map<String, Value>>,
}

impl<'a> Fields<'a> {
    /// Open `value` as the JSON form of `record`.
    ///
    /// `null` reads as an empty object; any other non-object fails.
    pub fn new(record: &'static str, value: &'a Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self {
                record,
                map: Some(map),
            }),
            Value::Null => Ok(Self { record, map: None }),
            other => Err(unexpected(record, "object", other)),
        }
    }

    /// Record name used in error messages.
    pub fn record(&self) -> &'static str {
        self.record
    }

    /// Present, non-null value for `key`.
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.map
            .and_then(|map| map.get(key))
            .filter(|value| !value.is_null())
    }

    fn scalar<T: Default>(
        &self,
        key: &str,
        coerce: impl FnOnce(&str, &Value) -> Result<T>,
    ) -> Result<T> {
        match self.get(key) {
            Some(value) => coerce(key, value),
            None => Ok(T::default()),
        }
    }

    /// `string` field.
    pub fn string(&self, key: &str) -> Result<String> {
        self.scalar(key, coerce_string)
    }

    /// `bool` field.
    pub fn bool(&self, key: &str) -> Result<bool> {
        self.scalar(key, coerce_bool)
    }

    /// `int32` field.
    pub fn int32(&self, key: &str) -> Result<i32> {
        self.scalar(key, coerce_int32)
    }

    /// `int64` field.
    pub fn int64(&self, key: &str) -> Result<i64> {
        self.scalar(key, coerce_int64)
    }

    /// `uint32` field.
    pub fn uint32(&self, key: &str) -> Result<u32> {
        self.scalar(key, coerce_uint32)
    }

    /// `uint64` field.
    pub fn uint64(&self, key: &str) -> Result<u64> {
        self.scalar(key, coerce_uint64)
    }

    /// `double` field.
    pub fn double(&self, key: &str) -> Result<f64> {
        self.scalar(key, coerce_double)
    }

    /// `bytes` field.
    pub fn bytes(&self, key: &str) -> Result<Vec<u8>> {
        self.scalar(key, coerce_bytes)
    }

    /// Enum field. Never fails.
    pub fn enumeration<E: Enumeration>(&self, key: &str) -> E {
        self.get(key).map(E::from_json).unwrap_or_default()
    }

    /// Nested record; `None` when absent.
    pub fn message<M: Message>(&self, key: &str) -> Result<Option<M>> {
        self.get(key).map(M::from_json).transpose()
    }

    /// Timestamp field; `None` when absent.
    pub fn timestamp(&self, key: &str) -> Result<Option<DateTime<Utc>>> {
        self.get(key)
            .map(|value| timestamp::from_json(key, value))
            .transpose()
    }

    /// Repeated field: the value must be an array, each element coerced.
    pub fn repeated<T>(
        &self,
        key: &str,
        mut coerce: impl FnMut(&str, &Value) -> Result<T>,
    ) -> Result<Vec<T>> {
        match self.get(key) {
            None => Ok(Vec::new()),
            Some(Value::Array(items)) => items.iter().map(|item| coerce(key, item)).collect(),
            Some(other) => Err(unexpected(key, "array", other)),
        }
    }

    /// Repeated nested records.
    pub fn repeated_message<M: Message>(&self, key: &str) -> Result<Vec<M>> {
        self.repeated(key, |_, item| M::from_json(item))
    }

    /// Repeated strings.
    pub fn repeated_string(&self, key: &str) -> Result<Vec<String>> {
        self.repeated(key, coerce_string)
    }

    /// Repeated `uint64`.
    pub fn repeated_uint64(&self, key: &str) -> Result<Vec<u64>> {
        self.repeated(key, coerce_uint64)
    }

    /// Repeated bytes.
    pub fn repeated_bytes(&self, key: &str) -> Result<Vec<Vec<u8>>> {
        self.repeated(key, coerce_bytes)
    }
}

/// Builder for a record's JSON object.
#[derive(Debug, Clone, Default)]
pub struct JsonObject {
    map: Map<String, Value>,
}

impl JsonObject {
    /// Start an empty object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert unconditionally.
    pub fn insert(&mut self, key: &str, value: Value) -> &mut Self {
        self.map.insert(key.to_owned(), value);
        self
    }

    /// `string`, skipped when empty.
    pub fn string(&mut self, key: &str, value: &str) -> &mut Self {
        if !value.is_empty() {
            self.insert(key, Value::String(value.to_owned()));
        }
        self
    }

    /// `bool`, skipped when false.
    pub fn bool(&mut self, key: &str, value: bool) -> &mut Self {
        if value {
            self.insert(key, Value::Bool(true));
        }
        self
    }

    /// `int32`, skipped when zero.
    pub fn int32(&mut self, key: &str, value: i32) -> &mut Self {
        if value != 0 {
            self.insert(key, Value::from(value));
        }
        self
    }

    /// `int64`, skipped when zero.
    pub fn int64(&mut self, key: &str, value: i64) -> &mut Self {
        if value != 0 {
            self.insert(key, Value::from(value));
        }
        self
    }

    /// `uint32`, skipped when zero.
    pub fn uint32(&mut self, key: &str, value: u32) -> &mut Self {
        if value != 0 {
            self.insert(key, Value::from(value));
        }
        self
    }

    /// `uint64`, skipped when zero.
    pub fn uint64(&mut self, key: &str, value: u64) -> &mut Self {
        if value != 0 {
            self.insert(key, Value::from(value));
        }
        self
    }

    /// `double`, skipped when zero. NaN and infinities render as strings.
    pub fn double(&mut self, key: &str, value: f64) -> &mut Self {
        if value != 0.0 {
            self.insert(key, double_value(value));
        }
        self
    }

    /// `bytes` as base64, skipped when empty.
    pub fn bytes(&mut self, key: &str, value: &[u8]) -> &mut Self {
        if !value.is_empty() {
            self.insert(key, Value::String(base64::encode(value)));
        }
        self
    }

    /// Enum by name, skipped at the zero ordinal.
    pub fn enumeration<E: Enumeration>(&mut self, key: &str, value: E) -> &mut Self {
        if !value.is_default() {
            self.insert(key, value.to_json());
        }
        self
    }

    /// Nested record, emitted whenever present.
    pub fn message<M: Message>(&mut self, key: &str, value: Option<&M>) -> &mut Self {
        if let Some(msg) = value {
            self.insert(key, msg.to_json());
        }
        self
    }

    /// Timestamp, emitted whenever present.
    pub fn timestamp(&mut self, key: &str, value: Option<&DateTime<Utc>>) -> &mut Self {
        if let Some(date) = value {
            self.insert(key, timestamp::to_json(date));
        }
        self
    }

    /// Repeated field, always emitted (`[]` when empty).
    pub fn repeated<T>(&mut self, key: &str, values: &[T], render: impl Fn(&T) -> Value) -> &mut Self {
        self.insert(key, Value::Array(values.iter().map(render).collect()))
    }

    /// Repeated nested records.
    pub fn repeated_message<M: Message>(&mut self, key: &str, values: &[M]) -> &mut Self {
        self.repeated(key, values, M::to_json)
    }

    /// Repeated strings.
    pub fn repeated_string(&mut self, key: &str, values: &[String]) -> &mut Self {
        self.repeated(key, values, |s| Value::String(s.clone()))
    }

    /// Repeated `uint64` as JSON numbers.
    pub fn repeated_uint64(&mut self, key: &str, values: &[u64]) -> &mut Self {
        self.repeated(key, values, |&v| Value::from(v))
    }

    /// Repeated bytes as base64.
    pub fn repeated_bytes(&mut self, key: &str, values: &[Vec<u8>]) -> &mut Self {
        self.repeated(key, values, |b| Value::String(base64::encode(b)))
    }

    /// Finish into a JSON object value.
    pub fn build(&mut self) -> Value {
        Value::Object(std::mem::take(&mut self.map))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_and_null_keys_default() {
        let value = json!({"a": null});
        let fields = Fields::new("Rec", &value).unwrap();
        assert_eq!(fields.string("a").unwrap(), "");
        assert_eq!(fields.uint64("b").unwrap(), 0);
        assert!(!fields.bool("c").unwrap());
        assert!(fields.repeated_string("d").unwrap().is_empty());
    }

    #[test]
    fn test_null_record_reads_as_empty() {
        let fields = Fields::new("Rec", &Value::Null).unwrap();
        assert_eq!(fields.int64("x").unwrap(), 0);
    }

    #[test]
    fn test_non_object_record_rejected() {
        let value = json!([1, 2]);
        let err = Fields::new("Rec", &value).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_numeric_coercion() {
        assert_eq!(coerce_uint64("f", &json!(42)).unwrap(), 42);
        assert_eq!(coerce_uint64("f", &json!("42")).unwrap(), 42);
        assert_eq!(coerce_uint64("f", &json!(1e3)).unwrap(), 1000);
        assert_eq!(coerce_int64("f", &json!(-7)).unwrap(), -7);
        assert_eq!(coerce_int64("f", &json!("-7")).unwrap(), -7);
        assert_eq!(coerce_int32("f", &json!(" 12 ")).unwrap(), 12);
        assert_eq!(coerce_double("f", &json!("0.5")).unwrap(), 0.5);
    }

    #[test]
    fn test_numeric_coercion_failures() {
        assert!(coerce_uint64("f", &json!("abc")).unwrap_err().is_validation());
        assert!(coerce_uint64("f", &json!(true)).unwrap_err().is_validation());
        assert!(coerce_uint64("f", &json!(-1)).unwrap_err().is_validation());
        assert!(coerce_int64("f", &json!(1.5)).unwrap_err().is_validation());
        assert!(coerce_int32("f", &json!(4_294_967_296u64)).unwrap_err().is_validation());
        assert!(coerce_uint32("f", &json!([])).unwrap_err().is_validation());
    }

    #[test]
    fn test_safe_integer_bound_on_json_input() {
        assert_eq!(
            coerce_uint64("f", &json!(9_007_199_254_740_991u64)).unwrap(),
            MAX_SAFE_INTEGER
        );
        assert!(coerce_uint64("f", &json!(9_007_199_254_740_992u64))
            .unwrap_err()
            .is_range());
        assert!(coerce_uint64("f", &json!("18446744073709551615"))
            .unwrap_err()
            .is_range());
        assert!(coerce_int64("f", &json!(-9_007_199_254_740_992i64))
            .unwrap_err()
            .is_range());
    }

    #[test]
    fn test_string_and_bool_coercion() {
        assert_eq!(coerce_string("f", &json!(5)).unwrap(), "5");
        assert!(coerce_string("f", &json!({})).unwrap_err().is_validation());
        assert!(coerce_bool("f", &json!(true)).unwrap());
        assert!(coerce_bool("f", &json!("true")).unwrap_err().is_validation());
    }

    #[test]
    fn test_repeated_requires_array() {
        let value = json!({"ids": 5});
        let fields = Fields::new("Rec", &value).unwrap();
        let err = fields.repeated_uint64("ids").unwrap_err();
        assert!(err.to_string().contains("ids"));
    }

    #[test]
    fn test_builder_elides_defaults() {
        let value = JsonObject::new()
            .string("a", "")
            .uint64("b", 0)
            .bool("c", false)
            .bytes("d", &[])
            .double("e", 0.0)
            .build();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn test_builder_always_emits_repeated() {
        let value = JsonObject::new()
            .repeated_uint64("ids", &[])
            .repeated_string("names", &["x".to_string()])
            .build();
        assert_eq!(value, json!({"ids": [], "names": ["x"]}));
    }

    #[test]
    fn test_non_finite_doubles_survive_json() {
        let value = JsonObject::new()
            .double("nan", f64::NAN)
            .double("up", f64::INFINITY)
            .double("down", f64::NEG_INFINITY)
            .build();
        assert_eq!(
            value,
            json!({"nan": "NaN", "up": "Infinity", "down": "-Infinity"})
        );

        let fields = Fields::new("Rec", &value).unwrap();
        assert!(fields.double("nan").unwrap().is_nan());
        assert_eq!(fields.double("up").unwrap(), f64::INFINITY);
        assert_eq!(fields.double("down").unwrap(), f64::NEG_INFINITY);
    }

    #[test]
    fn test_builder_renders_bytes_as_base64() {
        let value = JsonObject::new().bytes("data", b"hi").build();
        assert_eq!(value, json!({"data": "aGk="}));
    }
}
