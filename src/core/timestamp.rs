//! Clock and thread-id rendering
//!
//! Timestamps render in local time as `YYYY-MM-DD HH:MM:SS.mmm`. Thread ids
//! render as lowercase hexadecimal; the value is stable for the lifetime of
//! the thread and differs between live threads.

use super::loggable::Loggable;
use super::message::keys;
use chrono::{DateTime, Local, Utc};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::thread::{self, ThreadId};
use std::time::SystemTime;

/// strftime pattern used for every timestamp
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

// Thread-local cache so the id is hashed once per thread
thread_local! {
    static THREAD_ID_CACHE: String = thread_id_hex(thread::current().id());
}

/// Render a local time with [`TIMESTAMP_FORMAT`]
pub fn format_timestamp(datetime: &DateTime<Local>) -> String {
    datetime.format(TIMESTAMP_FORMAT).to_string()
}

/// Hexadecimal rendering of a thread id
pub fn thread_id_hex(id: ThreadId) -> String {
    let mut hasher = DefaultHasher::new();
    id.hash(&mut hasher);
    format!("{:x}", hasher.finish())
}

/// Hexadecimal id of the calling thread, cached per thread
pub fn current_thread_id() -> String {
    THREAD_ID_CACHE.with(String::clone)
}

/// Current wall-clock time rendered with [`TIMESTAMP_FORMAT`]
pub fn now() -> String {
    format_timestamp(&Local::now())
}

impl Loggable for DateTime<Local> {
    fn type_tag(&self) -> &'static str {
        keys::TIME_STAMP
    }

    fn stringify(&self) -> String {
        format_timestamp(self)
    }
}

impl Loggable for DateTime<Utc> {
    fn type_tag(&self) -> &'static str {
        keys::TIME_STAMP
    }

    fn stringify(&self) -> String {
        format_timestamp(&self.with_timezone(&Local))
    }
}

impl Loggable for SystemTime {
    fn type_tag(&self) -> &'static str {
        keys::TIME_STAMP
    }

    fn stringify(&self) -> String {
        format_timestamp(&DateTime::<Local>::from(*self))
    }
}

impl Loggable for ThreadId {
    fn type_tag(&self) -> &'static str {
        keys::THREAD_ID
    }

    fn stringify(&self) -> String {
        thread_id_hex(*self)
    }
}
