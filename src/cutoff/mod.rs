//! Cutoff-time gating: is order placement currently permitted?
//!
//! The policy is a pure function of the configured [`CutoffSetting`] and an
//! injected clock value. Callers pass `now` on every check, so enforcement
//! is live at each gate evaluation rather than frozen at fetch time.

use chrono::{NaiveDate, NaiveDateTime};

use crate::model::CutoffSetting;

/// Decides whether the daily order deadline has passed.
///
/// No internal state beyond the setting itself. An unconfigured cutoff
/// (`None`) means ordering is always permitted; this is an explicit
/// optional, never a sentinel time value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CutoffPolicy {
    setting: Option<CutoffSetting>,
}

impl CutoffPolicy {
    pub fn new(setting: Option<CutoffSetting>) -> Self {
        Self { setting }
    }

    /// A policy with no configured deadline; ordering is always open.
    pub fn unrestricted() -> Self {
        Self { setting: None }
    }

    /// The configured cutoff, if any. Used for display ("today's deadline
    /// is 14:00").
    pub fn setting(&self) -> Option<CutoffSetting> {
        self.setting
    }

    /// The cutoff instant on the given calendar day, if a cutoff is set.
    pub fn instant_on(&self, day: NaiveDate) -> Option<NaiveDateTime> {
        self.setting.map(|s| day.and_time(s.time_of_day()))
    }

    /// Returns true iff `now` is strictly after today's cutoff instant.
    ///
    /// The instant is built from `now`'s own calendar date, so the check is
    /// correct across day boundaries without any session state.
    pub fn is_past(&self, now: NaiveDateTime) -> bool {
        match self.instant_on(now.date()) {
            Some(cutoff) => now > cutoff,
            None => false,
        }
    }
}
