//! Time-based decimal serials.
//!
//! A serial is `{unix seconds:010}{microseconds:06}{suffix}` where the suffix
//! is a random number in `1000..=9999`, giving at least 20 digits. Serials are
//! unique enough for seed material but are predictable; never use one as a
//! secret.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use rand::Rng;

/// Minimum number of digits in a serial.
pub const MIN_SERIAL_DIGITS: usize = 20;

/// Generate a serial from the current wall-clock time.
#[must_use]
pub fn generate_serial() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::ZERO);
    serial_at(now, rand::thread_rng().gen_range(1000..=9999))
}

/// Format a serial for a time since the epoch and a 4-digit suffix.
fn serial_at(since_epoch: Duration, suffix: u16) -> String {
    format!(
        "{:010}{:06}{suffix}",
        since_epoch.as_secs(),
        since_epoch.subsec_micros()
    )
}
