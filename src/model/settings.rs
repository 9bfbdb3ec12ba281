//! System settings supplied by the external settings service.
//!
//! The settings endpoint returns a flat list of name/value records; the only
//! one this crate interprets is [`ORDER_CUTOFF_TIME`], a daily deadline in
//! `HH:MM` form.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the setting holding the daily order deadline.
pub const ORDER_CUTOFF_TIME: &str = "order_cutoff_time";

/// A raw name/value setting record, as returned by the settings service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemSetting {
    pub setting_name: String,
    pub setting_value: String,
}

/// Errors raised while interpreting a cutoff setting value.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SettingError {
    /// The value is not in `HH:MM` form.
    #[error("malformed cutoff time {0:?}, expected HH:MM")]
    Malformed(String),

    /// The hour component is outside 0-23.
    #[error("cutoff hour out of range: {0}")]
    HourOutOfRange(u32),

    /// The minute component is outside 0-59.
    #[error("cutoff minute out of range: {0}")]
    MinuteOutOfRange(u32),
}

/// A validated daily cutoff time of day.
///
/// Invariant: hour in 0-23, minute in 0-59. Construct via [`CutoffSetting::new`]
/// or by parsing an `HH:MM` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CutoffSetting {
    hour: u32,
    minute: u32,
}

impl CutoffSetting {
    pub fn new(hour: u32, minute: u32) -> Result<Self, SettingError> {
        if hour > 23 {
            return Err(SettingError::HourOutOfRange(hour));
        }
        if minute > 59 {
            return Err(SettingError::MinuteOutOfRange(minute));
        }
        Ok(Self { hour, minute })
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// The cutoff as a time of day, for combining with a calendar date.
    pub fn time_of_day(&self) -> NaiveTime {
        // Safe by the constructor invariant.
        NaiveTime::from_hms_opt(self.hour, self.minute, 0)
            .unwrap_or(NaiveTime::MIN)
    }
}

impl FromStr for CutoffSetting {
    type Err = SettingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || SettingError::Malformed(s.to_string());
        let (hh, mm) = s.split_once(':').ok_or_else(malformed)?;
        let hour: u32 = hh.parse().map_err(|_| malformed())?;
        let minute: u32 = mm.parse().map_err(|_| malformed())?;
        Self::new(hour, minute)
    }
}

impl fmt::Display for CutoffSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Extracts the order cutoff from a settings listing.
///
/// Returns `Ok(None)` when no [`ORDER_CUTOFF_TIME`] record is present: an
/// absent setting means no cutoff is configured and ordering is always
/// permitted. A present but unparseable value is an error, not "no cutoff".
pub fn cutoff_from_settings(
    settings: &[SystemSetting],
) -> Result<Option<CutoffSetting>, SettingError> {
    settings
        .iter()
        .find(|s| s.setting_name == ORDER_CUTOFF_TIME)
        .map(|s| s.setting_value.parse())
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_value() {
        let cutoff: CutoffSetting = "14:00".parse().unwrap();
        assert_eq!(cutoff.hour(), 14);
        assert_eq!(cutoff.minute(), 0);
        assert_eq!(cutoff.to_string(), "14:00");
    }

    #[test]
    fn rejects_malformed_values() {
        assert_eq!(
            "noon".parse::<CutoffSetting>(),
            Err(SettingError::Malformed("noon".to_string()))
        );
        assert_eq!(
            "14".parse::<CutoffSetting>(),
            Err(SettingError::Malformed("14".to_string()))
        );
        assert_eq!(
            "14:0x".parse::<CutoffSetting>(),
            Err(SettingError::Malformed("14:0x".to_string()))
        );
    }

    #[test]
    fn rejects_out_of_range_components() {
        assert_eq!(
            "24:00".parse::<CutoffSetting>(),
            Err(SettingError::HourOutOfRange(24))
        );
        assert_eq!(
            "14:60".parse::<CutoffSetting>(),
            Err(SettingError::MinuteOutOfRange(60))
        );
    }

    #[test]
    fn finds_cutoff_among_other_settings() {
        let settings = vec![
            SystemSetting {
                setting_name: "holiday_notice".to_string(),
                setting_value: "closed on 8/15".to_string(),
            },
            SystemSetting {
                setting_name: ORDER_CUTOFF_TIME.to_string(),
                setting_value: "10:30".to_string(),
            },
        ];
        let cutoff = cutoff_from_settings(&settings).unwrap().unwrap();
        assert_eq!((cutoff.hour(), cutoff.minute()), (10, 30));
    }

    #[test]
    fn missing_cutoff_is_none_not_an_error() {
        assert_eq!(cutoff_from_settings(&[]), Ok(None));
    }

    #[test]
    fn malformed_cutoff_value_is_an_error() {
        let settings = vec![SystemSetting {
            setting_name: ORDER_CUTOFF_TIME.to_string(),
            setting_value: "later".to_string(),
        }];
        assert!(cutoff_from_settings(&settings).is_err());
    }
}
