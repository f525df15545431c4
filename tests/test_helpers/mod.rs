//! Shared clock, time and environment helpers for integration tests.

use chrono::{DateTime, FixedOffset, Local, TimeZone, Utc};
use mockable::Clock;
use std::env;
use std::sync::{Mutex, MutexGuard, OnceLock};

static ENV_MUTEX: OnceLock<Mutex<()>> = OnceLock::new();

/// Clock pinned to one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// UTC+05:30.
pub fn ist() -> FixedOffset {
    FixedOffset::east_opt(19_800).expect("valid offset")
}

/// Builds a wall-clock instant in UTC+05:30.
pub fn ist_at(
    (year, month, day): (i32, u32, u32),
    (hour, minute): (u32, u32),
) -> DateTime<FixedOffset> {
    ist()
        .with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("valid wall-clock time")
}

/// "Now" shared by integration tests: 2024-01-01 10:00 in UTC+05:30.
pub fn now() -> DateTime<Utc> {
    ist_at((2024, 1, 1), (10, 0)).with_timezone(&Utc)
}

/// Guard that applies scoped environment variable updates.
pub struct EnvVarGuard {
    previous: Vec<(String, Option<String>)>,
    _lock: MutexGuard<'static, ()>,
}

impl EnvVarGuard {
    /// Sets or removes each variable for the guard lifetime.
    pub fn set_many(changes: &[(&str, Option<&str>)]) -> Self {
        let lock = env_lock();
        let mut previous = Vec::with_capacity(changes.len());

        for (key, value) in changes {
            previous.push(((*key).to_owned(), env::var(key).ok()));
            unsafe {
                // SAFETY: the global mutex serializes environment mutations in tests.
                match value {
                    Some(new_value) => env::set_var(key, new_value),
                    None => env::remove_var(key),
                }
            }
        }

        Self {
            previous,
            _lock: lock,
        }
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        for (key, value) in self.previous.drain(..).rev() {
            unsafe {
                // SAFETY: the global mutex serializes environment mutations in tests.
                match value {
                    Some(previous) => env::set_var(&key, &previous),
                    None => env::remove_var(&key),
                }
            }
        }
    }
}

fn env_lock() -> MutexGuard<'static, ()> {
    ENV_MUTEX
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}
