use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use crate::error::{CounterError, Result};

/// Contents of `config.json`.
///
/// `apiBaseUrl` is kept as whatever JSON the file holds; `None` means the
/// field is absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CounterConfig {
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub api_base_url: Option<Value>,
}

impl CounterConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self { api_base_url: Some(Value::String(api_base_url.into())) }
    }

    pub fn from_body(body: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(body)
            .map_err(|e| CounterError::InvalidConfig(e.to_string()))?;

        match value {
            Value::Null => Err(CounterError::InvalidConfig("config is null".into())),
            Value::Object(_) => serde_json::from_value(value)
                .map_err(|e| CounterError::InvalidConfig(e.to_string())),
            _ => Ok(Self::default()),
        }
    }

    /// `<apiBaseUrl>/count`, concatenated as-is. An absent base becomes
    /// `undefined`, `null` becomes `null`, other values go through [`text_content`].
    pub fn count_url(&self) -> String {
        let base = match &self.api_base_url {
            None => "undefined".to_string(),
            Some(Value::Null) => "null".to_string(),
            Some(value) => text_content(value),
        };
        format!("{}/count", base)
    }
}

/// Body of the count endpoint.
///
/// `count` is `None` only when the field is absent; an explicit `null`
/// deserializes to `Some(Value::Null)`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CountResponse {
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub count: Option<Value>,
}

fn present<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

impl CountResponse {
    pub fn new(count: i64) -> Self {
        Self { count: Some(Value::from(count)) }
    }

    pub fn from_body(body: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(body)
            .map_err(|e| CounterError::InvalidCountBody(e.to_string()))?;

        match value {
            Value::Null => Err(CounterError::InvalidCountBody("body is null".into())),
            Value::Object(_) => serde_json::from_value(value)
                .map_err(|e| CounterError::InvalidCountBody(e.to_string())),
            // Scalars and arrays carry no fields, so there is no count.
            _ => Ok(Self::default()),
        }
    }

    /// Text to display, or `None` when `count` is undefined.
    pub fn display_text(&self) -> Option<String> {
        self.count.as_ref().map(text_content)
    }
}

/// Renders a JSON value the way assigning it to a DOM node's text would.
pub fn text_content(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                number_to_string(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(text_content)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// ECMAScript `Number::toString` for a double.
fn number_to_string(f: f64) -> String {
    if f.is_nan() {
        return "NaN".to_string();
    }
    if f == 0.0 {
        return "0".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if f < 0.0 {
        return format!("-{}", number_to_string(-f));
    }

    // `{:e}` gives the shortest round-trip digits as `d.ddde<exp>`.
    let sci = format!("{:e}", f);
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| c.is_ascii_digit()).collect();
    let k = digits.len() as i32;
    let n = exp.parse::<i32>().unwrap_or(0) + 1;

    if k <= n && n <= 21 {
        format!("{}{}", digits, "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int, frac) = digits.split_at(n as usize);
        format!("{}.{}", int, frac)
    } else if -6 < n && n <= 0 {
        format!("0.{}{}", "0".repeat((-n) as usize), digits)
    } else {
        let e = n - 1;
        let sign = if e < 0 { '-' } else { '+' };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{}e{}{}", first, sign, e.abs())
        } else {
            format!("{}.{}e{}{}", first, rest, sign, e.abs())
        }
    }
}
