//! Human-readable strings for the timestep and distance scales.
//!
//! Each value is reported in the largest unit it reaches. The bucket
//! boundaries are part of the displayed output.

/// Seconds in a 365-day year
pub const SECONDS_PER_YEAR: f64 = 31_536_000.0;
const SECONDS_PER_MONTH: f64 = 2_628_000.0;
const SECONDS_PER_WEEK: f64 = 604_800.0;
const SECONDS_PER_DAY: f64 = 86_400.0;
const SECONDS_PER_HOUR: f64 = 3_600.0;
const SECONDS_PER_MINUTE: f64 = 60.0;

const SCALE_LIGHT_YEAR_PER_100PX: f64 = 94_607_304_725_808.0;
const SCALE_AU_PER_100PX: f64 = 1_495_978_707.0;
const SCALE_LIGHT_MINUTE_PER_100PX: f64 = 179_875_474.0;
const SCALE_KM_PER_100PX: f64 = 10.0;

/// Describe a timestep scale (simulated seconds per wall-clock second)
pub fn readable_timestep(timestep: f64) -> String {
    let buckets = [
        (SECONDS_PER_YEAR, "years"),
        (SECONDS_PER_MONTH, "months"),
        (SECONDS_PER_WEEK, "weeks"),
        (SECONDS_PER_DAY, "days"),
        (SECONDS_PER_HOUR, "hours"),
        (SECONDS_PER_MINUTE, "minutes"),
    ];
    for (threshold, unit) in buckets {
        if timestep >= threshold {
            return format!("{:.2} {} per second", timestep / threshold, unit);
        }
    }
    format!("{:.6} seconds per second", timestep)
}

/// Describe a distance scale (meters per rendered pixel)
pub fn readable_scale(scale: f64) -> String {
    // top bucket divides by a light year but keeps its displayed label
    let buckets = [
        (SCALE_LIGHT_YEAR_PER_100PX, "astronomical units"),
        (SCALE_AU_PER_100PX, "AU"),
        (SCALE_LIGHT_MINUTE_PER_100PX, "light minute"),
        (SCALE_KM_PER_100PX, "kilometers"),
    ];
    for (threshold, unit) in buckets {
        if scale >= threshold {
            return format!("{:.2} {} per 100 pixels", scale / threshold, unit);
        }
    }
    format!("{:.6} meters per pixel", scale)
}

/// Elapsed simulated time in years, e.g. `"1.00 y"`
pub fn readable_elapsed_years(seconds: f64) -> String {
    format!("{:.2} y", seconds / SECONDS_PER_YEAR)
}
