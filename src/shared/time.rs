use std::{
    fmt::Display,
    iter::Sum,
    ops::{Add, AddAssign},
};

use serde::{Deserialize, Serialize};

/// Travel time in whole minutes. Addition saturates at `u32::MAX`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Duration(u32);

impl From<u32> for Duration {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl Duration {
    pub const ZERO: Duration = Duration(0);

    pub const fn from_minutes(minutes: u32) -> Self {
        Self(minutes)
    }

    pub const fn from_hours(hours: u32) -> Self {
        Self(hours.saturating_mul(60))
    }

    pub const fn as_minutes(&self) -> u32 {
        self.0
    }

    /// Renders as `"2h 30m"`, or `"45m"` below one hour.
    pub fn to_hm_string(&self) -> String {
        let h = self.0 / 60;
        let m = self.0 % 60;
        if h == 0 {
            format!("{m}m")
        } else {
            format!("{h}h {m}m")
        }
    }

    /// Parses the `"2h 30m"` form. Either part may be left out.
    pub fn from_hm(value: &str) -> Option<Self> {
        let mut minutes: u32 = 0;
        let mut parts = 0;
        for token in value.split_whitespace() {
            if let Some(hours) = token.strip_suffix('h') {
                let hours: u32 = hours.parse().ok()?;
                minutes = minutes.checked_add(hours.checked_mul(60)?)?;
            } else if let Some(mins) = token.strip_suffix('m') {
                let mins: u32 = mins.parse().ok()?;
                minutes = minutes.checked_add(mins)?;
            } else {
                return None;
            }
            parts += 1;
        }
        if parts == 0 { None } else { Some(Self(minutes)) }
    }
}

impl Display for Duration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hm_string())
    }
}

impl Add for Duration {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Duration {
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_add(rhs.0)
    }
}

impl Sum for Duration {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Duration::ZERO, |acc, value| acc + value)
    }
}

impl<'a> Sum<&'a Duration> for Duration {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[test]
fn format_parse_1() {
    let value = "2h 30m";
    let duration = Duration::from_hm(value).unwrap();
    assert_eq!(value, duration.to_hm_string())
}

#[test]
fn format_parse_2() {
    let value = "2h 0m";
    let duration = Duration::from_hm(value).unwrap();
    assert_eq!(value, duration.to_hm_string())
}

#[test]
fn format_parse_3() {
    let value = "45m";
    let duration = Duration::from_hm(value).unwrap();
    assert_eq!(value, duration.to_hm_string())
}

#[test]
fn format_hours_only_input() {
    let duration = Duration::from_hm("3h").unwrap();
    assert_eq!(duration.as_minutes(), 180);
    assert_eq!(duration.to_hm_string(), "3h 0m");
}

#[test]
fn sum_saturates() {
    let total: Duration = [Duration::from_minutes(u32::MAX), Duration::from_minutes(1)]
        .into_iter()
        .sum();
    assert_eq!(total.as_minutes(), u32::MAX);

    let mut value = Duration::from_minutes(u32::MAX - 5);
    value += Duration::from_minutes(10);
    assert_eq!(value.as_minutes(), u32::MAX);
}
