//! Parsing of single trip lines.

/// Number of comma-separated fields in a well-formed trip line.
pub const FIELD_COUNT: usize = 6;

const ZONE_FIELD: usize = 1;
const TIME_FIELD: usize = 3;

/// Byte offset of the two-digit hour inside a `YYYY-MM-DD HH:MM:SS` timestamp.
const HOUR_OFFSET: usize = 11;

/// The parts of a trip line that get counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trip<'a> {
    pub zone: &'a str,
    pub hour: u8,
}

/// Extract the hour of day from a timestamp, or `None` if the two bytes at
/// offset 11 do not start with an integer or the value is not in `0..=23`.
///
/// The two bytes are read like C's `stoi`: leading whitespace and a sign are
/// allowed and anything after the digits is ignored, so `" 5"`, `"5:"` and
/// `"+5"` all give 5.
pub fn extract_hour(timestamp: &str) -> Option<u8> {
    let bytes = timestamp.as_bytes().get(HOUR_OFFSET..HOUR_OFFSET + 2)?;
    let hour = leading_int(bytes)?;
    u8::try_from(hour).ok().filter(|&h| h <= 23)
}

/// The integer at the start of `bytes` after optional whitespace and sign.
fn leading_int(bytes: &[u8]) -> Option<i32> {
    let mut rest = bytes;
    while let [b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r', tail @ ..] = rest {
        rest = tail;
    }
    let (negative, rest) = match rest {
        [b'-', tail @ ..] => (true, tail),
        [b'+', tail @ ..] => (false, tail),
        _ => (false, rest),
    };
    let digits = rest.iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    let value = rest[..digits]
        .iter()
        .fold(0i32, |n, b| n * 10 + i32::from(b - b'0'));
    Some(if negative { -value } else { value })
}

/// Parse one data line. Returns `None` for anything malformed: a field
/// count other than six, an empty field, or an unusable hour.
///
/// Fields are split on every literal comma; there is no quoting.
pub fn parse_trip(line: &str) -> Option<Trip<'_>> {
    let mut fields = [""; FIELD_COUNT];
    let mut n = 0;
    for field in line.split(',') {
        if n == FIELD_COUNT {
            return None;
        }
        fields[n] = field;
        n += 1;
    }
    if n != FIELD_COUNT || fields.iter().any(|f| f.is_empty()) {
        return None;
    }
    let hour = extract_hour(fields[TIME_FIELD])?;
    Some(Trip {
        zone: fields[ZONE_FIELD],
        hour,
    })
}
