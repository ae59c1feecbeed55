use serde_json::Value;

/// Percent-encode a query-string value (RFC 3986 unreserved set kept as-is).
pub fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for &b in input.as_bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(b as char);
            }
            b' ' => out.push_str("%20"),
            _ => {
                out.push('%');
                out.push_str(&format!("{b:02X}"));
            }
        }
    }
    out
}

/// String value at `key`, or empty when absent or not a string.
pub fn json_str(v: &Value, key: &str) -> String {
    v.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned()
}

/// First string value found under any of `keys`.
pub fn json_str_any(v: &Value, keys: &[&str]) -> Option<String> {
    for k in keys {
        if let Some(s) = v.get(*k).and_then(|x| x.as_str()) {
            return Some(s.to_owned());
        }
    }
    None
}

/// First value present under any of `keys`.
pub fn json_get_any<'a>(v: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|k| v.get(*k))
}

/// Format a Unix timestamp (seconds) as `YYYY-MM-DD HH:MM:SS` in UTC.
///
/// Used by the log timestamp formatter; returns the raw number for negative
/// inputs and an empty string for `None`.
pub fn ts_to_date(ts: Option<i64>) -> String {
    let t = match ts {
        Some(v) => v,
        None => return String::new(),
    };
    if t < 0 {
        return t.to_string();
    }

    let mut days = t / 86_400;
    let mut sod = t % 86_400;
    if sod < 0 {
        sod += 86_400;
        days -= 1;
    }

    let hour = (sod / 3600) as u32;
    sod %= 3600;
    let minute = (sod / 60) as u32;
    let second = (sod % 60) as u32;

    let mut year: i32 = 1970;
    loop {
        let leap = is_leap(year);
        let diy = if leap { 366 } else { 365 } as i64;
        if days >= diy {
            days -= diy;
            year += 1;
        } else {
            break;
        }
    }
    let leap = is_leap(year);
    let mut month: u32 = 1;
    let mdays = [
        31,
        if leap { 29 } else { 28 },
        31,
        30,
        31,
        30,
        31,
        31,
        30,
        31,
        30,
        31,
    ];
    for &len in mdays.iter() {
        if days >= len as i64 {
            days -= len as i64;
            month += 1;
        } else {
            break;
        }
    }
    let day = (days + 1) as u32;

    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
        year, month, day, hour, minute, second
    )
}

fn is_leap(y: i32) -> bool {
    (y % 4 == 0 && y % 100 != 0) || (y % 400 == 0)
}
