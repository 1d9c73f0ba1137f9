//! Time handling for salat: resolving location-local prayer times to
//! absolute instants, assembling a day's schedule, staleness, and display
//! formatting.

pub mod convert;
pub mod daily;
pub mod format;

pub use convert::{
    local_date, parse_local_time, parse_timezone, resolve_instant, resolve_instant_in,
    resolve_on_date, strip_annotation,
};
pub use daily::{is_same_local_day, next_refresh_at, resolve_daily, StalenessExt};
pub use format::{format_gregorian_date, format_hijri_date, format_prayer_time, CountdownParts};

pub use chrono_tz::Tz;
