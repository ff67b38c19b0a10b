use chrono::Utc;
use shared::domain::TaskId;
use uuid::Uuid;

const RANDOM_SUFFIX_LEN: usize = 9;

/// Millisecond timestamp followed by random hex.
pub fn next_task_id() -> TaskId {
    let millis = Utc::now().timestamp_millis();
    let random = Uuid::new_v4().simple().to_string();
    TaskId(format!("{millis}{}", &random[..RANDOM_SUFFIX_LEN]))
}
