//! System clock access for the `sys` feature.

use web_time::{SystemTime, UNIX_EPOCH};

use crate::{LuachError, LuachResult};

/// Fixed day of the Unix epoch, January 1, 1970.
const UNIX_EPOCH_FIXED_DAY: i64 = 719_163;

const SECONDS_PER_DAY: u64 = 86_400;

/// Returns the current UTC day as a fixed day number.
pub(crate) fn current_fixed_day() -> LuachResult<i64> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|_| LuachError::general("Error fetching system time"))
        .map(|duration| (duration.as_secs() / SECONDS_PER_DAY) as i64 + UNIX_EPOCH_FIXED_DAY)
}
