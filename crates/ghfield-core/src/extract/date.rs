//! Commit timestamp conversion

use crate::error::{Error, Result};
use chrono::{NaiveDateTime, TimeZone, Timelike, Utc};

/// The only timestamp layout GitHub uses for `commit.committer.date`
pub const COMMIT_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

// `d` marks an ASCII digit, everything else must match literally.
const SHAPE: &[u8; 20] = b"dddd-dd-ddTdd:dd:ddZ";

/// Convert `YYYY-MM-DDTHH:MM:SSZ` to seconds since the Unix epoch (UTC)
///
/// Anything else is rejected, including fractional seconds, numeric
/// offsets, single-digit fields, surrounding whitespace and leap seconds.
///
/// # Example
///
/// ```
/// use ghfield_core::extract::date::epoch_seconds;
///
/// assert_eq!(epoch_seconds("2021-03-05T12:00:00Z").unwrap(), 1614945600);
/// ```
pub fn epoch_seconds(value: &str) -> Result<i64> {
    let malformed = || Error::MalformedDate {
        value: value.to_string(),
    };

    // chrono accepts variable-width numeric fields, so pin the layout first
    if !has_fixed_shape(value.as_bytes()) {
        return Err(malformed());
    }

    let naive = NaiveDateTime::parse_from_str(value, COMMIT_DATE_FORMAT).map_err(|_| malformed())?;
    if naive.nanosecond() >= 1_000_000_000 {
        return Err(malformed());
    }

    let secs = Utc.from_utc_datetime(&naive).timestamp();
    tracing::trace!(date = value, epoch = secs, "converted commit date");
    Ok(secs)
}

#[inline]
fn has_fixed_shape(bytes: &[u8]) -> bool {
    bytes.len() == SHAPE.len()
        && bytes.iter().zip(SHAPE).all(|(&b, &expected)| {
            if expected == b'd' {
                b.is_ascii_digit()
            } else {
                b == expected
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_known_value() {
        assert_eq!(epoch_seconds("2021-03-05T12:00:00Z").unwrap(), 1614945600);
    }

    #[test]
    fn test_epoch_origin() {
        assert_eq!(epoch_seconds("1970-01-01T00:00:00Z").unwrap(), 0);
    }

    #[test]
    fn test_before_epoch_is_negative() {
        assert_eq!(epoch_seconds("1969-12-31T23:59:59Z").unwrap(), -1);
    }

    #[test]
    fn test_leap_day() {
        assert_eq!(epoch_seconds("2020-02-29T00:00:00Z").unwrap(), 1582934400);
    }

    #[test]
    fn test_rejects_fractional_seconds() {
        assert_matches!(
            epoch_seconds("2021-03-05T12:00:00.123Z"),
            Err(Error::MalformedDate { value }) if value == "2021-03-05T12:00:00.123Z"
        );
    }

    #[test]
    fn test_rejects_offsets() {
        for s in [
            "2021-03-05T12:00:00+00:00",
            "2021-03-05T12:00:00-07:00",
            "2021-03-05T12:00:00",
        ] {
            assert_matches!(epoch_seconds(s), Err(Error::MalformedDate { .. }), "{s}");
        }
    }

    #[test]
    fn test_rejects_loose_layouts() {
        for s in [
            "2021-3-5T12:00:00Z",
            "2021-03-05 12:00:00Z",
            " 2021-03-05T12:00:00Z",
            "2021-03-05T12:00:00Z\n",
            "2021-03-05t12:00:00z",
            "+2021-03-05T12:00:00Z",
            "",
        ] {
            assert_matches!(epoch_seconds(s), Err(Error::MalformedDate { .. }), "{s:?}");
        }
    }

    #[test]
    fn test_rejects_impossible_dates() {
        for s in [
            "2021-02-29T00:00:00Z",
            "2021-13-01T00:00:00Z",
            "2021-04-31T00:00:00Z",
            "2021-03-05T24:00:00Z",
            "2021-03-05T12:60:00Z",
            "2016-12-31T23:59:60Z",
        ] {
            assert_matches!(epoch_seconds(s), Err(Error::MalformedDate { .. }), "{s}");
        }
    }

    #[test]
    fn test_shape_check() {
        assert!(has_fixed_shape(b"2021-03-05T12:00:00Z"));
        assert!(!has_fixed_shape(b"2021-03-05T12:00:0aZ"));
        assert!(!has_fixed_shape(b"2021-03-05T12:00:00ZZ"));
    }
}
