//! Typed access to raw store documents.
//!
//! Documents arrive as untyped JSON objects. Every field read goes through
//! a checked accessor so that a document of the wrong shape is reported
//! as a [`StorageError::MalformedRecord`] naming the collection, document
//! and field.

use chrono::{DateTime, TimeZone, Utc};
use serde_json::{Map, Value};
use shared::{RepeatType, DEFAULT_NOTIFICATIONS_ENABLED, DEFAULT_NOTIFICATION_THRESHOLD};

use crate::domain::models::{Budget, FinancialGoal, Transaction};
use crate::storage::StorageError;

pub const TRANSACTIONS: &str = "transactions";
pub const BUDGETS: &str = "budgets";
pub const GOALS: &str = "goals";

pub struct Document {
    collection: &'static str,
    id: String,
    fields: Map<String, Value>,
}

impl Document {
    /// Wrap the document at `index` of a collection.
    ///
    /// The document id is `firebaseId` when present, otherwise a string
    /// `id`, otherwise the numeric `id`. A numeric `id` is also the mobile
    /// client's local id.
    pub fn new(collection: &'static str, index: usize, value: Value) -> Result<Self, StorageError> {
        let fields = match value {
            Value::Object(fields) => fields,
            other => {
                return Err(StorageError::MalformedRecord {
                    collection,
                    document_id: format!("#{}", index),
                    reason: format!("expected an object, found {}", type_name(&other)),
                })
            }
        };

        let firebase_id = fields.get("firebaseId").filter(|v| !v.is_null());
        let id = match (firebase_id, fields.get("id")) {
            (Some(Value::String(id)), _) | (None, Some(Value::String(id))) if !id.is_empty() => {
                id.clone()
            }
            // Mobile-written documents carry only their numeric local id
            (None, Some(Value::Number(local_id))) => local_id.to_string(),
            _ => {
                return Err(StorageError::MalformedRecord {
                    collection,
                    document_id: format!("#{}", index),
                    reason: "missing document id".to_string(),
                })
            }
        };

        Ok(Self {
            collection,
            id,
            fields,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    fn malformed(&self, reason: impl Into<String>) -> StorageError {
        StorageError::MalformedRecord {
            collection: self.collection,
            document_id: self.id.clone(),
            reason: reason.into(),
        }
    }

    /// Field value, treating JSON `null` as absent
    fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field).filter(|v| !v.is_null())
    }

    fn wrong_type(&self, field: &str, expected: &str, found: &Value) -> StorageError {
        self.malformed(format!(
            "field '{}' must be {}, found {}",
            field,
            expected,
            type_name(found)
        ))
    }

    pub fn require_str(&self, field: &str) -> Result<String, StorageError> {
        self.optional_str(field)?
            .ok_or_else(|| self.malformed(format!("missing field '{}'", field)))
    }

    pub fn optional_str(&self, field: &str) -> Result<Option<String>, StorageError> {
        match self.get(field) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(other) => Err(self.wrong_type(field, "a string", other)),
        }
    }

    pub fn require_f64(&self, field: &str) -> Result<f64, StorageError> {
        self.optional_f64(field)?
            .ok_or_else(|| self.malformed(format!("missing field '{}'", field)))
    }

    pub fn optional_f64(&self, field: &str) -> Result<Option<f64>, StorageError> {
        let value = match self.get(field) {
            None => return Ok(None),
            Some(value) => value,
        };
        match value.as_f64() {
            Some(f) if value.is_number() && f.is_finite() => Ok(Some(f)),
            _ => Err(self.wrong_type(field, "a number", value)),
        }
    }

    /// A required amount that must not be negative
    pub fn require_amount(&self, field: &str) -> Result<f64, StorageError> {
        let amount = self.require_f64(field)?;
        if amount < 0.0 {
            return Err(self.malformed(format!(
                "field '{}' must not be negative, found {}",
                field, amount
            )));
        }
        Ok(amount)
    }

    pub fn optional_i64(&self, field: &str) -> Result<Option<i64>, StorageError> {
        let value = match self.get(field) {
            None => return Ok(None),
            Some(value) => value,
        };
        value
            .as_i64()
            .map(Some)
            .ok_or_else(|| self.wrong_type(field, "an integer", value))
    }

    pub fn require_bool(&self, field: &str) -> Result<bool, StorageError> {
        self.optional_bool(field)?
            .ok_or_else(|| self.malformed(format!("missing field '{}'", field)))
    }

    pub fn optional_bool(&self, field: &str) -> Result<Option<bool>, StorageError> {
        match self.get(field) {
            None => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(other) => Err(self.wrong_type(field, "a boolean", other)),
        }
    }

    pub fn require_timestamp(&self, field: &str) -> Result<DateTime<Utc>, StorageError> {
        self.optional_timestamp(field)?
            .ok_or_else(|| self.malformed(format!("missing field '{}'", field)))
    }

    /// Accepts an RFC 3339 string, epoch milliseconds, or a store
    /// timestamp object (`_seconds`/`_nanoseconds` or `seconds`/`nanoseconds`).
    pub fn optional_timestamp(&self, field: &str) -> Result<Option<DateTime<Utc>>, StorageError> {
        let value = match self.get(field) {
            None => return Ok(None),
            Some(value) => value,
        };
        let invalid = || self.malformed(format!("field '{}' is not a valid timestamp", field));

        let parsed = match value {
            Value::String(s) => DateTime::parse_from_rfc3339(s)
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(|_| invalid())?,
            Value::Number(n) => {
                let millis = n.as_i64().ok_or_else(invalid)?;
                Utc.timestamp_millis_opt(millis).single().ok_or_else(invalid)?
            }
            Value::Object(parts) => {
                let seconds = parts
                    .get("_seconds")
                    .or_else(|| parts.get("seconds"))
                    .and_then(Value::as_i64)
                    .ok_or_else(invalid)?;
                let nanos = parts
                    .get("_nanoseconds")
                    .or_else(|| parts.get("nanoseconds"))
                    .map(|v| v.as_u64().ok_or_else(invalid))
                    .transpose()?
                    .unwrap_or(0);
                let nanos = u32::try_from(nanos).map_err(|_| invalid())?;
                Utc.timestamp_opt(seconds, nanos).single().ok_or_else(invalid)?
            }
            other => return Err(self.wrong_type(field, "a timestamp", other)),
        };
        Ok(Some(parsed))
    }

    fn local_id(&self) -> Result<Option<i64>, StorageError> {
        match self.get("localId") {
            Some(_) => self.optional_i64("localId"),
            None => match self.get("id") {
                Some(Value::Number(_)) => self.optional_i64("id"),
                _ => Ok(None),
            },
        }
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Build a transaction owned by `user_id` from a raw document
pub fn parse_transaction(user_id: &str, doc: &Document) -> Result<Transaction, StorageError> {
    let repeat_type = doc
        .optional_str("repeatType")?
        .map(|raw| {
            raw.parse::<RepeatType>()
                .map_err(|e| doc.malformed(e.to_string()))
        })
        .transpose()?;

    Ok(Transaction {
        id: doc.id().to_string(),
        local_id: doc.local_id()?,
        user_id: user_id.to_string(),
        description: doc.optional_str("description")?.unwrap_or_default(),
        category: doc.require_str("category")?,
        amount: doc.require_amount("amount")?,
        date: doc.require_timestamp("date")?,
        is_income: doc.require_bool("isIncome")?,
        note: doc.optional_str("note")?,
        repeat: doc.optional_bool("repeat")?.unwrap_or(false),
        repeat_type,
        end_date: doc.optional_timestamp("endDate")?,
    })
}

pub fn parse_budget(user_id: &str, doc: &Document) -> Result<Budget, StorageError> {
    Ok(Budget {
        id: doc.id().to_string(),
        local_id: doc.local_id()?,
        user_id: user_id.to_string(),
        category: doc.require_str("category")?,
        amount: doc.require_amount("amount")?,
        spent: doc.require_amount("spent")?,
        start_date: doc.require_timestamp("startDate")?,
        end_date: doc.require_timestamp("endDate")?,
        note: doc.optional_str("note")?,
        notifications_enabled: doc
            .optional_bool("notificationsEnabled")?
            .unwrap_or(DEFAULT_NOTIFICATIONS_ENABLED),
        notification_threshold: doc
            .optional_f64("notificationThreshold")?
            .unwrap_or(DEFAULT_NOTIFICATION_THRESHOLD),
        notification_sent: doc.optional_bool("notificationSent")?.unwrap_or(false),
    })
}

pub fn parse_goal(user_id: &str, doc: &Document) -> Result<FinancialGoal, StorageError> {
    Ok(FinancialGoal {
        id: doc.id().to_string(),
        local_id: doc.local_id()?,
        user_id: user_id.to_string(),
        name: doc.require_str("name")?,
        description: doc.optional_str("description")?.unwrap_or_default(),
        category: doc.optional_str("category")?.unwrap_or_default(),
        target_amount: doc.require_amount("targetAmount")?,
        current_amount: doc.require_amount("currentAmount")?,
        start_date: doc.require_timestamp("startDate")?,
        end_date: doc.require_timestamp("endDate")?,
        completed: doc.optional_bool("completed")?.unwrap_or(false),
    })
}
