//! Session snapshot persistence.
//!
//! The calendar lives in the `gameTime` field of a larger JSON document whose
//! other fields belong to the rest of the application. Those siblings are
//! carried through load and save untouched.

use std::path::Path;

use serde_json::{Map, Value};

use crate::calendar::CalendarState;
use crate::error::{AlmanacError, AlmanacResult};

/// Key of the calendar state inside a session snapshot.
pub const GAME_TIME_KEY: &str = "gameTime";

/// A session snapshot: the calendar state plus opaque sibling fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionSnapshot {
    /// The calendar, if the snapshot carries one.
    pub game_time: Option<CalendarState>,
    /// Fields owned by other components, preserved verbatim.
    pub extra: Map<String, Value>,
}

impl SessionSnapshot {
    /// A snapshot holding only the given calendar state.
    pub fn new(game_time: CalendarState) -> Self {
        Self {
            game_time: Some(game_time),
            extra: Map::new(),
        }
    }

    /// Parse and validate a snapshot document.
    pub fn from_json(text: &str) -> AlmanacResult<Self> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| AlmanacError::InvalidSessionFormat(format!("not valid JSON: {e}")))?;
        Self::from_value(value)
    }

    /// Validate an already-parsed snapshot document.
    pub fn from_value(value: Value) -> AlmanacResult<Self> {
        let Value::Object(mut extra) = value else {
            return Err(AlmanacError::InvalidSessionFormat(
                "snapshot root must be an object".to_string(),
            ));
        };

        let game_time = match extra.remove(GAME_TIME_KEY) {
            None => None,
            Some(gt @ Value::Object(_)) => Some(
                serde_json::from_value::<CalendarState>(gt)
                    .map_err(|e| AlmanacError::InvalidSessionFormat(format!("{GAME_TIME_KEY}: {e}")))?,
            ),
            Some(other) => {
                return Err(AlmanacError::InvalidSessionFormat(format!(
                    "{GAME_TIME_KEY} must be an object, found {}",
                    json_kind(&other)
                )));
            }
        };

        Ok(Self { game_time, extra })
    }

    /// Serialize to a JSON value, calendar under `gameTime`.
    pub fn to_value(&self) -> AlmanacResult<Value> {
        let mut map = self.extra.clone();
        if let Some(gt) = &self.game_time {
            map.insert(GAME_TIME_KEY.to_string(), serde_json::to_value(gt)?);
        }
        Ok(Value::Object(map))
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> AlmanacResult<String> {
        Ok(serde_json::to_string_pretty(&self.to_value()?)?)
    }

    /// Read and validate a snapshot file.
    pub fn load(path: &Path) -> AlmanacResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let snapshot = Self::from_json(&text)?;
        tracing::info!(
            path = %path.display(),
            has_game_time = snapshot.game_time.is_some(),
            "session snapshot loaded"
        );
        Ok(snapshot)
    }

    /// Write the snapshot to a file, replacing any existing content.
    pub fn save(&self, path: &Path) -> AlmanacResult<()> {
        let mut text = self.to_json_pretty()?;
        text.push('\n');
        std::fs::write(path, text)?;
        tracing::info!(path = %path.display(), "session snapshot saved");
        Ok(())
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
