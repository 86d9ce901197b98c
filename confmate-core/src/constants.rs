//! Engine-wide timing constants.

/// Minutes before a session start at which its reminder becomes eligible.
pub const LEAD_WINDOW_MINUTES: i64 = 10;

/// Width of the firing sub-window at the end of the lead time. Must be
/// wider than the tick interval so a firing cannot fall between two ticks.
pub const FIRING_SPAN_MINUTES: i64 = 1;

/// Period of the reminder-check tick.
pub const TICK_INTERVAL_SECS: u64 = 60;

/// Wall-clock hour at which the first conference day opens (countdown anchor).
pub const OPENING_HOUR: u32 = 8;
