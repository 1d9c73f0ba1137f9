//! Boundary-walking over one day's prayer instants.
//!
//! Every function here is total. Missing or duplicated entries resolve to
//! `None`, `0` or `1.0` as documented per function, never to a panic.

use salat_types::{EpochMillis, PrayerName, PrayerTime};
use tracing::debug;

/// Synthetic length of the window before Fajr, in milliseconds.
///
/// There is no real period start before the first prayer, so progress
/// toward Fajr is measured over this fixed window.
// TODO: recalibrate against solar midnight for the location once the
// source exposes it (Al Adhan reports `Midnight` but it is not carried yet).
pub const PRE_FAJR_WINDOW_MS: EpochMillis = 90 * 60 * 1000;

fn find(prayers: &[PrayerTime], name: PrayerName) -> Option<&PrayerTime> {
    prayers.iter().find(|p| p.name == name)
}

/// The prayer whose window contains `now`, or `None` before the first one.
///
/// Walks from the last entry backwards and returns the first boundary at
/// or before `now`; landing exactly on a boundary counts as inside it.
pub fn current_prayer(prayers: &[PrayerTime], now: EpochMillis) -> Option<PrayerName> {
    prayers
        .iter()
        .rev()
        .find(|p| p.timestamp <= now)
        .map(|p| p.name)
}

/// The entry after `current`. Before Fajr this is the first entry; after
/// Isha there is none until the next day's data is loaded.
pub fn next_prayer(prayers: &[PrayerTime], current: Option<PrayerName>) -> Option<PrayerName> {
    let Some(current) = current else {
        return prayers.first().map(|p| p.name);
    };

    match prayers.iter().position(|p| p.name == current) {
        Some(idx) => prayers.get(idx + 1).map(|p| p.name),
        None => {
            debug!(%current, "current prayer missing from schedule");
            None
        }
    }
}

/// Milliseconds until `next`, never negative. Zero when there is no next
/// prayer or it is missing from the list.
pub fn ms_until_next(prayers: &[PrayerTime], next: Option<PrayerName>, now: EpochMillis) -> u64 {
    next.and_then(|name| find(prayers, name))
        .map_or(0, |p| p.timestamp.saturating_sub(now).max(0) as u64)
}

/// Position of `now` inside the current window, in `[0, 1]`.
///
/// - no next prayer: `1.0` (the day is complete)
/// - before Fajr: the window starts [`PRE_FAJR_WINDOW_MS`] before Fajr
/// - a named entry is missing, or the window has non-positive length: `0.0`
pub fn progress(
    prayers: &[PrayerTime],
    current: Option<PrayerName>,
    next: Option<PrayerName>,
    now: EpochMillis,
) -> f64 {
    let Some(next) = next else {
        return 1.0;
    };
    let Some(next_time) = find(prayers, next) else {
        debug!(%next, "next prayer missing from schedule");
        return 0.0;
    };

    let period_start = match current {
        None => next_time.timestamp.saturating_sub(PRE_FAJR_WINDOW_MS),
        Some(name) => match find(prayers, name) {
            Some(p) => p.timestamp,
            None => {
                debug!(current = %name, "current prayer missing from schedule");
                return 0.0;
            }
        },
    };

    let duration = next_time.timestamp.saturating_sub(period_start);
    if duration <= 0 {
        debug!(%next, duration, "non-positive prayer window");
        return 0.0;
    }

    let elapsed = now.saturating_sub(period_start);
    (elapsed as f64 / duration as f64).clamp(0.0, 1.0)
}
