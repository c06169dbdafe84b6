/// Entry primary keys are supplied by the client.
pub type EntryId = String;

/// All timestamps are milliseconds since the Unix epoch (UTC).
pub type EpochMillis = i64;

/// Current wall-clock time in epoch milliseconds.
pub fn now_millis() -> EpochMillis {
    chrono::Utc::now().timestamp_millis()
}
