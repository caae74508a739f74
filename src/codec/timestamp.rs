//! `google.protobuf.Timestamp` <-> `chrono::DateTime<Utc>`.
//!
//! Native values carry millisecond precision. Sub-millisecond nanos are
//! truncated on the way in.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

use crate::codec::Message;
use crate::error::{CodecError, Result};
use crate::types::google::Timestamp;

const NANOS_PER_MILLI: i32 = 1_000_000;
const MILLIS_PER_SECOND: i64 = 1_000;

/// Convert a wire timestamp to a native date.
///
/// Fails with a range error if the instant is outside what `chrono`
/// represents.
pub fn from_timestamp(ts: &Timestamp) -> Result<DateTime<Utc>> {
    let millis = ts
        .seconds
        .checked_mul(MILLIS_PER_SECOND)
        .and_then(|ms| ms.checked_add(i64::from(ts.nanos / NANOS_PER_MILLI)))
        .ok_or_else(|| CodecError::Range {
            value: ts.seconds.to_string(),
        })?;
    DateTime::from_timestamp_millis(millis).ok_or_else(|| CodecError::Range {
        value: millis.to_string(),
    })
}

/// Convert a native date to a wire timestamp.
///
/// Nanos are always in `0..1_000_000_000`, so instants before the epoch
/// borrow from `seconds`.
pub fn to_timestamp(date: &DateTime<Utc>) -> Timestamp {
    let millis = date.timestamp_millis();
    Timestamp {
        seconds: millis.div_euclid(MILLIS_PER_SECOND),
        nanos: millis.rem_euclid(MILLIS_PER_SECOND) as i32 * NANOS_PER_MILLI,
    }
}

/// Drop anything finer than a millisecond.
pub fn truncate_to_millis(date: &DateTime<Utc>) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(date.timestamp_millis()).unwrap_or(*date)
}

/// RFC 3339 text with millisecond precision and a `Z` suffix.
pub fn to_json(date: &DateTime<Utc>) -> Value {
    Value::String(date.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Accept RFC 3339 text or a `{seconds, nanos}` object.
pub fn from_json(field: &str, value: &Value) -> Result<DateTime<Utc>> {
    match value {
        Value::String(text) => DateTime::parse_from_rfc3339(text)
            .map(|date| truncate_to_millis(&date.with_timezone(&Utc)))
            .map_err(|e| CodecError::validation(field, format!("invalid timestamp: {}", e))),
        Value::Object(_) => from_timestamp(&Timestamp::from_json(value)?),
        other => Err(CodecError::validation(
            field,
            format!("expected timestamp string or object, got {}", other),
        )),
    }
}
