//! Payload validation run by the HTTP layer before any actor is called.
//!
//! Raw JSON goes in, a typed payload or a list of per-field errors comes out.
//! Errors are collected rather than reported one at a time.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::domain::{LineItem, OrderDetails, Schedule, ScheduleDetails, Size};

const ITEMS_KEY: &str = "order";
const ITEM_KEYS: [&str; 3] = ["product", "size", "quantity"];
const SIZE_PERMITTED: &str = "value is not a valid enumeration member; permitted: 'small', 'medium', 'big'";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub loc: Vec<String>,
    pub msg: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Error)]
#[serde(transparent)]
#[error("{} validation error(s)", .errors.len())]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single<S: ToString>(loc: &[S], msg: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.push(loc, msg);
        errors
    }

    pub fn push<S: ToString>(&mut self, loc: &[S], msg: impl Into<String>) {
        self.errors.push(FieldError {
            loc: loc.iter().map(ToString::to_string).collect(),
            msg: msg.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

/// How properties outside the schema are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnknownFields {
    Forbid,
    Ignore,
}

/// Orders reject properties outside the schema.
pub fn validate_order_payload(body: &Value) -> Result<OrderDetails, ValidationErrors> {
    parse_items(body, UnknownFields::Forbid).map(OrderDetails::new)
}

/// Kitchen schedules drop unknown properties silently.
pub fn validate_schedule_payload(body: &Value) -> Result<ScheduleDetails, ValidationErrors> {
    parse_items(body, UnknownFields::Ignore).map(ScheduleDetails::new)
}

fn parse_items(body: &Value, unknown: UnknownFields) -> Result<Vec<LineItem>, ValidationErrors> {
    let mut errors = ValidationErrors::new();
    let Some(object) = body.as_object() else {
        return Err(ValidationErrors::single(&["body"], "value is not a valid object"));
    };
    if unknown == UnknownFields::Forbid {
        reject_extra_keys(object, &[ITEMS_KEY], &["body"], &mut errors);
    }

    let items = match object.get(ITEMS_KEY) {
        None => {
            errors.push(&["body", ITEMS_KEY], "field required");
            Vec::new()
        }
        Some(Value::Array(raw_items)) => {
            if raw_items.is_empty() {
                errors.push(&["body", ITEMS_KEY], "ensure this value has at least 1 items");
            }
            raw_items
                .iter()
                .enumerate()
                .filter_map(|(index, raw)| parse_item(raw, index, unknown, &mut errors))
                .collect()
        }
        Some(_) => {
            errors.push(&["body", ITEMS_KEY], "value is not a valid list");
            Vec::new()
        }
    };

    errors.into_result(items)
}

fn parse_item(
    raw: &Value,
    index: usize,
    unknown: UnknownFields,
    errors: &mut ValidationErrors,
) -> Option<LineItem> {
    let base = vec!["body".to_string(), ITEMS_KEY.to_string(), index.to_string()];
    let loc = |field: &str| {
        let mut loc = base.clone();
        loc.push(field.to_string());
        loc
    };

    let Some(object) = raw.as_object() else {
        errors.push(&base, "value is not a valid object");
        return None;
    };
    if unknown == UnknownFields::Forbid {
        reject_extra_keys(object, &ITEM_KEYS, &base, errors);
    }

    let product = match object.get("product") {
        Some(Value::String(product)) => Some(product.clone()),
        Some(_) => {
            errors.push(&loc("product"), "str type expected");
            None
        }
        None => {
            errors.push(&loc("product"), "field required");
            None
        }
    };

    let size = match object.get("size") {
        Some(raw @ Value::String(_)) => {
            let size = serde_json::from_value::<Size>(raw.clone()).ok();
            if size.is_none() {
                errors.push(&loc("size"), SIZE_PERMITTED);
            }
            size
        }
        Some(_) => {
            errors.push(&loc("size"), "value is not a valid enumeration member");
            None
        }
        None => {
            errors.push(&loc("size"), "field required");
            None
        }
    };

    let quantity = match object.get("quantity") {
        None => Some(LineItem::DEFAULT_QUANTITY),
        Some(Value::Null) => {
            errors.push(&loc("quantity"), "quantity may not be None");
            None
        }
        Some(Value::Number(number)) if !number.is_f64() => {
            if number.as_i64().is_some_and(|n| n < 1) {
                errors.push(&loc("quantity"), "ensure this value is greater than or equal to 1");
                None
            } else {
                let quantity = number.as_u64().and_then(|n| u32::try_from(n).ok());
                if quantity.is_none() {
                    errors.push(&loc("quantity"), format!("ensure this value is less than or equal to {}", u32::MAX));
                }
                quantity
            }
        }
        Some(_) => {
            errors.push(&loc("quantity"), "value is not a valid integer");
            None
        }
    };

    Some(LineItem {
        product: product?,
        size: size?,
        quantity: quantity?,
    })
}

fn reject_extra_keys<S: ToString>(
    object: &Map<String, Value>,
    allowed: &[&str],
    parent: &[S],
    errors: &mut ValidationErrors,
) {
    for key in object.keys().filter(|key| !allowed.contains(&key.as_str())) {
        let mut loc: Vec<String> = parent.iter().map(ToString::to_string).collect();
        loc.push(key.clone());
        errors.push(&loc, "extra fields not permitted");
    }
}

/// Parses a `since` query value: RFC 3339, or a naive ISO-8601 timestamp taken as UTC.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, ValidationErrors> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| ValidationErrors::single(&["query", "since"], "invalid datetime format"))
}

/// Re-checks a stored schedule against the line item invariants.
pub fn revalidate_schedule(schedule: &Schedule) -> Result<(), ValidationErrors> {
    let id = schedule.id.to_string();
    let mut errors = ValidationErrors::new();
    if schedule.items.is_empty() {
        errors.push(&["schedule", id.as_str(), ITEMS_KEY], "ensure this value has at least 1 items");
    }
    for (index, item) in schedule.items.iter().enumerate() {
        if item.quantity < 1 {
            let index = index.to_string();
            errors.push(
                &["schedule", id.as_str(), ITEMS_KEY, index.as_str(), "quantity"],
                "ensure this value is greater than or equal to 1",
            );
        }
    }
    errors.into_result(())
}
