use std::time::Duration;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Parses window lengths written as bare seconds (`60`) or as one or more
/// `<integer><unit>` terms (`90s`, `1m30s`, `500ms`, `2h`).
pub struct DurationParser;

impl DurationParser {
    pub fn parse(input: &str) -> Result<Duration, String> {
        let s = input.trim();
        if s.is_empty() {
            return Err("Empty duration".to_string());
        }
        if let Ok(secs) = s.parse::<u64>() {
            return Ok(Duration::from_secs(secs));
        }

        let mut total = Duration::ZERO;
        let mut rest = s;
        while !rest.is_empty() {
            let digits = rest
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(rest.len());
            if digits == 0 {
                return Err(format!("Invalid duration '{input}': expected a number"));
            }
            let amount: u64 = rest[..digits]
                .parse()
                .map_err(|_| format!("Invalid duration '{input}': number out of range"))?;
            rest = &rest[digits..];

            let unit_len = rest.find(|c: char| c.is_ascii_digit()).unwrap_or(rest.len());
            let unit = &rest[..unit_len];
            rest = &rest[unit_len..];

            let part = match unit {
                "ms" => Duration::from_millis(amount),
                "s" => Duration::from_secs(amount),
                "m" => Duration::from_secs(amount.saturating_mul(60)),
                "h" => Duration::from_secs(amount.saturating_mul(3600)),
                "" => return Err(format!("Invalid duration '{input}': missing unit")),
                other => return Err(format!("Invalid duration '{input}': unknown unit '{other}'")),
            };
            total = total.saturating_add(part);
        }
        Ok(total)
    }
}

/// Serde adapter accepting either integer seconds or a duration string.
pub fn deserialize_duration<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_u64()
            .map(Duration::from_secs)
            .ok_or_else(|| serde::de::Error::custom(format!("Invalid duration '{n}': expected whole seconds"))),
        Value::String(text) => DurationParser::parse(&text).map_err(serde::de::Error::custom),
        other => Err(serde::de::Error::custom(format!(
            "Invalid duration '{other}': expected seconds or a duration string"
        ))),
    }
}
