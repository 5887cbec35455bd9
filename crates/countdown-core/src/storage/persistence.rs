//! Countdown and pomodoro records on top of any [`KeyValueStore`].
//!
//! Loading is forgiving: absent, corrupt or unreadable data comes back as
//! `None` (logged at warn level) so the host simply shows the input form.
//! Saving and clearing report errors; hosts log them and carry on.

use crate::countdown::CountdownData;
use crate::error::StorageError;
use crate::pomodoro::PomodoroState;
use crate::time::Timestamp;

use super::kv::{KeyValueStore, RecordLayout};

/// Blob-layout key for the countdown record.
pub const COUNTDOWN_KEY: &str = "countdown_data";
/// Blob-layout key for the pomodoro session.
pub const POMODORO_KEY: &str = "pomodoroState";

const NAME_FIELD: &str = "name";
const DATE_FIELD: &str = "date";

pub fn save_countdown<S: KeyValueStore + ?Sized>(
    store: &mut S,
    data: &CountdownData,
) -> Result<(), StorageError> {
    match store.layout() {
        RecordLayout::Blob => {
            let json = serde_json::to_string(data)?;
            store.set(COUNTDOWN_KEY, &json)
        }
        RecordLayout::Fields => {
            store.set(NAME_FIELD, &data.event_name)?;
            store.set(DATE_FIELD, &data.target.to_iso_string())
        }
    }
}

pub fn load_countdown<S: KeyValueStore + ?Sized>(store: &S) -> Option<CountdownData> {
    match try_load_countdown(store) {
        Ok(data) => data,
        Err(e) => {
            tracing::warn!(error = %e, "discarding stored countdown");
            None
        }
    }
}

fn try_load_countdown<S: KeyValueStore + ?Sized>(
    store: &S,
) -> Result<Option<CountdownData>, StorageError> {
    match store.layout() {
        RecordLayout::Blob => {
            let Some(raw) = store.get(COUNTDOWN_KEY)? else {
                return Ok(None);
            };
            Ok(Some(serde_json::from_str(&raw)?))
        }
        RecordLayout::Fields => {
            let name = store.get(NAME_FIELD)?.filter(|n| !n.is_empty());
            let date = store.get(DATE_FIELD)?.filter(|d| !d.is_empty());
            let (Some(event_name), Some(date)) = (name, date) else {
                return Ok(None);
            };
            match Timestamp::parse_iso(&date) {
                Some(target) => Ok(Some(CountdownData { event_name, target })),
                None => {
                    tracing::warn!(date = %date, "unparseable date parameter");
                    Ok(None)
                }
            }
        }
    }
}

pub fn clear_countdown<S: KeyValueStore + ?Sized>(store: &mut S) -> Result<(), StorageError> {
    match store.layout() {
        RecordLayout::Blob => store.remove(COUNTDOWN_KEY),
        RecordLayout::Fields => {
            store.remove(NAME_FIELD)?;
            store.remove(DATE_FIELD)
        }
    }
}

pub fn save_pomodoro<S: KeyValueStore + ?Sized>(
    store: &mut S,
    state: &PomodoroState,
) -> Result<(), StorageError> {
    let json = serde_json::to_string(state)?;
    store.set(POMODORO_KEY, &json)
}

/// Missing or corrupt state reads as an idle session.
pub fn load_pomodoro<S: KeyValueStore + ?Sized>(store: &S) -> PomodoroState {
    let raw = match store.get(POMODORO_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return PomodoroState::default(),
        Err(e) => {
            tracing::warn!(error = %e, "failed to read pomodoro state");
            return PomodoroState::default();
        }
    };
    serde_json::from_str(&raw).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "discarding stored pomodoro state");
        PomodoroState::default()
    })
}
