use anyhow::{anyhow, Result};
use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Parse a deadline the way people type them on a command line.
///
/// Accepts `today`, `tomorrow`, relative offsets (`+3d`, `+2w`), a bare
/// date (`2025-12-31`) or a date with a time (`2025-12-31 17:00`).
/// Day-granularity inputs resolve to the end of that local day.
pub fn parse_deadline(input: &str) -> Result<DateTime<Utc>> {
    let input = input.trim();
    let today = Local::now().date_naive();

    match input.to_lowercase().as_str() {
        "today" => return end_of_day(today),
        "tomorrow" => return end_of_day(today + Duration::days(1)),
        _ => {}
    }

    if let Some(rest) = input.strip_prefix('+') {
        if rest.len() < 2 {
            return Err(anyhow!("Invalid offset: {}", input));
        }
        let (num_str, unit) = rest.split_at(rest.len() - 1);
        let count: i64 = num_str
            .parse()
            .map_err(|_| anyhow!("Invalid offset: {}", input))?;
        let target = match unit {
            "d" => today + Duration::days(count),
            "w" => today + Duration::weeks(count),
            _ => return Err(anyhow!("Unknown offset unit: {}", unit)),
        };
        return end_of_day(target);
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M") {
        return local_to_utc(dt);
    }
    if let Ok(d) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return end_of_day(d);
    }

    Err(anyhow!("Could not parse deadline: {}", input))
}

fn end_of_day(date: NaiveDate) -> Result<DateTime<Utc>> {
    local_to_utc(date.and_hms_opt(23, 59, 59).unwrap())
}

fn local_to_utc(dt: NaiveDateTime) -> Result<DateTime<Utc>> {
    Local
        .from_local_datetime(&dt)
        .single()
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(|| anyhow!("Ambiguous local time: {}", dt))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn parses_bare_date_as_end_of_day() {
        let dt = parse_deadline("2030-06-15").unwrap();
        let local = dt.with_timezone(&Local);
        assert_eq!(local.date_naive(), NaiveDate::from_ymd_opt(2030, 6, 15).unwrap());
        assert_eq!(local.hour(), 23);
        assert_eq!(local.minute(), 59);
    }

    #[test]
    fn parses_date_with_time() {
        let dt = parse_deadline("2030-06-15 17:30").unwrap();
        let local = dt.with_timezone(&Local);
        assert_eq!(local.hour(), 17);
        assert_eq!(local.minute(), 30);
    }

    #[test]
    fn relative_offsets() {
        // These compare two calls that both read "today", so a test run
        // crossing midnight between them could disagree. Unlikely enough.
        let today = parse_deadline("today").unwrap();
        let tomorrow = parse_deadline("tomorrow").unwrap();
        assert!(tomorrow > today);
        assert_eq!(parse_deadline("+1d").unwrap(), tomorrow);
        assert_eq!(parse_deadline("+2w").unwrap(), parse_deadline("+14d").unwrap());
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_deadline("whenever").is_err());
        assert!(parse_deadline("+3x").is_err());
        assert!(parse_deadline("+d").is_err());
        assert!(parse_deadline("").is_err());
    }
}
