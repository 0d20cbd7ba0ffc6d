use crate::error::{Error, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use log::debug;
use serde::{Serialize, Serializer};
use serde_json::Value;
use url::{form_urlencoded, Url};

/// Flatten a parameters object into query-string key/value pairs.
///
/// Wire names come from the object's serde metadata; absent (`None`) fields
/// are omitted and list values are joined into a single comma separated
/// value, which is how the API expects them.
pub fn pairs<ParamsT: Serialize>(params: &ParamsT) -> Result<Vec<(String, String)>> {
    let map = match serde_json::to_value(params).map_err(Error::BadQueryParams)? {
        Value::Object(map) => map,
        other => {
            return Err(Error::BadQueryShape {
                found: json_kind(&other),
            })
        }
    };

    let mut pairs = Vec::with_capacity(map.len());
    for (key, value) in map {
        match value {
            Value::Null => continue,
            Value::Array(values) => {
                let mut rendered = Vec::with_capacity(values.len());
                for value in &values {
                    rendered.push(scalar(&key, value)?);
                }
                pairs.push((key, rendered.join(",")));
            }
            other => {
                let rendered = scalar(&key, &other)?;
                pairs.push((key, rendered));
            }
        }
    }
    Ok(pairs)
}

/// Percent-encode a parameters object as a `k=v&k=v` query string.
pub fn string<ParamsT: Serialize>(params: &ParamsT) -> Result<String> {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    serializer.extend_pairs(pairs(params)?);
    Ok(serializer.finish())
}

/// Append a parameters object to a URL's query string, keeping any pairs the
/// URL already carries.
pub fn apply<ParamsT: Serialize>(url: &mut Url, params: &ParamsT) -> Result<()> {
    let pairs = pairs(params)?;
    if pairs.is_empty() {
        return Ok(());
    }
    url.query_pairs_mut().extend_pairs(&pairs);
    debug!("Built request URL `{}`", url);
    Ok(())
}

/// Wire form of a timestamp: `YYYY-MM-DDTHH:MM:SSZ`, truncated to whole
/// seconds regardless of the precision of the value.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
}

pub fn serialize_timestamp<S: Serializer>(
    timestamp: &DateTime<Utc>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_timestamp(timestamp))
}

pub fn serialize_opt_timestamp<S: Serializer>(
    timestamp: &Option<DateTime<Utc>>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    match timestamp {
        Some(timestamp) => serialize_timestamp(timestamp, serializer),
        None => serializer.serialize_none(),
    }
}

fn scalar(key: &str, value: &Value) -> Result<String> {
    match value {
        Value::String(string) => Ok(string.clone()),
        Value::Number(number) => Ok(number.to_string()),
        Value::Bool(boolean) => Ok(boolean.to_string()),
        _ => Err(Error::BadQueryValue {
            key: key.to_owned(),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
