//! Time-Related Constants

/// Milliseconds per second.
pub const MS_PER_SECOND: u64 = 1000;

/// Interval between indicator fade ticks (milliseconds).
///
/// The fade hook fires on this cadence. The current animation is a no-op,
/// but the tick still advances its own timestamp so the interval check
/// stays meaningful when an animation lands here.
pub const FADE_TICK_MS: u64 = 50;
