// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Skema-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Skema and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

pub const MINUTES_PER_HOUR: u16 = 60;
pub const MINUTES_PER_DAY: u16 = 24 * MINUTES_PER_HOUR;

/// Wall-clock time as minutes since local midnight, `0..=1440`.
///
/// `24:00` is accepted so an event can end exactly at midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Minute(u16);

impl Minute {
    pub const MIDNIGHT: Self = Self(0);
    pub const END_OF_DAY: Self = Self(MINUTES_PER_DAY);

    pub fn new(value: u16) -> Option<Self> {
        (value <= MINUTES_PER_DAY).then_some(Self(value))
    }

    pub fn get(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u16 {
        self.0 / MINUTES_PER_HOUR
    }

    pub fn minute(self) -> u16 {
        self.0 % MINUTES_PER_HOUR
    }
}

impl fmt::Display for Minute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MinuteParseError {
    Empty,
    Malformed { raw: String },
    OutOfRange { raw: String },
}

impl fmt::Display for MinuteParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("time must not be empty"),
            Self::Malformed { raw } => write!(f, "expected HH:MM, got {raw:?}"),
            Self::OutOfRange { raw } => write!(f, "time out of range: {raw:?}"),
        }
    }
}

impl std::error::Error for MinuteParseError {}

impl FromStr for Minute {
    type Err = MinuteParseError;

    /// Parses `"HH:MM"`, `"H:MM"` or a bare hour `"H"` (minutes default to zero).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(MinuteParseError::Empty);
        }

        let malformed = || MinuteParseError::Malformed { raw: trimmed.to_owned() };
        let (hour_raw, minute_raw) = match trimmed.split_once(':') {
            Some((hour, minute)) => (hour, Some(minute)),
            None => (trimmed, None),
        };

        let hour = parse_digits(hour_raw).ok_or_else(malformed)?;
        let minute = match minute_raw {
            Some(raw) => parse_digits(raw).ok_or_else(malformed)?,
            None => 0,
        };

        if hour > 24 || minute >= MINUTES_PER_HOUR || (hour == 24 && minute != 0) {
            return Err(MinuteParseError::OutOfRange { raw: trimmed.to_owned() });
        }

        Ok(Self(hour * MINUTES_PER_HOUR + minute))
    }
}

fn parse_digits(raw: &str) -> Option<u16> {
    if raw.is_empty() || raw.len() > 2 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{Minute, MinuteParseError};

    #[rstest]
    #[case("09:00", 540)]
    #[case("9:30", 570)]
    #[case("00:00", 0)]
    #[case("23:59", 1439)]
    #[case("24:00", 1440)]
    #[case("7", 420)]
    #[case(" 12:05 ", 725)]
    fn parses_wall_clock_times(#[case] raw: &str, #[case] expected: u16) {
        let minute: Minute = raw.parse().expect("parse");
        assert_eq!(minute.get(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("noon")]
    #[case("9:")]
    #[case(":30")]
    #[case("09:00:00")]
    #[case("-1:00")]
    #[case("123:00")]
    fn rejects_malformed_times(#[case] raw: &str) {
        assert!(raw.parse::<Minute>().is_err(), "{raw:?} should not parse");
    }

    #[test]
    fn rejects_out_of_range_components() {
        assert_eq!(
            "25:00".parse::<Minute>(),
            Err(MinuteParseError::OutOfRange { raw: "25:00".to_owned() })
        );
        assert_eq!(
            "10:60".parse::<Minute>(),
            Err(MinuteParseError::OutOfRange { raw: "10:60".to_owned() })
        );
        assert_eq!(
            "24:01".parse::<Minute>(),
            Err(MinuteParseError::OutOfRange { raw: "24:01".to_owned() })
        );
    }

    #[test]
    fn displays_zero_padded() {
        assert_eq!(Minute::new(545).expect("minute").to_string(), "09:05");
        assert_eq!(Minute::END_OF_DAY.to_string(), "24:00");
    }}
