//! Wall-clock helpers for history timestamps.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

const MS_PER_SECOND: i64 = 1000;
const SECONDS_PER_DAY: i64 = 86_400;

/// Milliseconds since the Unix epoch.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn now_ms() -> u64 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(feature = "csr"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
    }
}

/// Local UTC offset in minutes at `ms`. Always 0 outside the browser.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn local_offset_minutes(ms: u64) -> i32 {
    #[cfg(feature = "csr")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(ms as f64));
        // JS reports UTC minus local.
        -(date.get_timezone_offset() as i32)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = ms;
        0
    }
}

/// Format `ms` as a 12-hour time of day, e.g. `3:04:05 PM`.
#[allow(clippy::cast_possible_wrap)]
pub fn format_time_of_day(ms: u64, offset_minutes: i32) -> String {
    let seconds = (ms as i64) / MS_PER_SECOND + i64::from(offset_minutes) * 60;
    let of_day = seconds.rem_euclid(SECONDS_PER_DAY);
    let hour = of_day / 3600;
    let minute = (of_day % 3600) / 60;
    let second = of_day % 60;
    let suffix = if hour < 12 { "AM" } else { "PM" };
    let hour12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{hour12}:{minute:02}:{second:02} {suffix}")
}

/// Local time-of-day label for a history entry id.
pub fn local_time_label(ms: u64) -> String {
    format_time_of_day(ms, local_offset_minutes(ms))
}
