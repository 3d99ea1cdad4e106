use crate::utils::error::{ComboError, Result};
use chrono::{Datelike, Days, NaiveDateTime, NaiveTime, Timelike, Weekday};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    pub open: NaiveTime,
    pub close: NaiveTime,
}

/// Weekly ordering schedule in restaurant-local time.
///
/// A day without a window is closed all day. Orders stop `last_order_minutes` before
/// closing time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderHours {
    days: [Option<DayWindow>; 7],
    last_order_minutes: u32,
}

impl OrderHours {
    pub fn new(last_order_minutes: u32) -> Self {
        Self {
            days: [None; 7],
            last_order_minutes,
        }
    }

    pub fn with_day(mut self, weekday: Weekday, open: NaiveTime, close: NaiveTime) -> Result<Self> {
        self.set_day(weekday, open, close)?;
        Ok(self)
    }

    pub fn set_day(&mut self, weekday: Weekday, open: NaiveTime, close: NaiveTime) -> Result<()> {
        if open >= close {
            return Err(ComboError::InvalidConfigValueError {
                field: format!("hours.{}", weekday),
                value: format!("{}-{}", open.format("%H:%M"), close.format("%H:%M")),
                reason: "Opening time must be before closing time".to_string(),
            });
        }
        // 截止點之前至少要留一分鐘可下單
        let span_minutes = (close - open).num_minutes();
        if span_minutes <= i64::from(self.last_order_minutes) {
            return Err(ComboError::InvalidConfigValueError {
                field: format!("hours.{}", weekday),
                value: format!("{}-{}", open.format("%H:%M"), close.format("%H:%M")),
                reason: format!(
                    "Window must be longer than the {} minute last-order cutoff",
                    self.last_order_minutes
                ),
            });
        }
        self.days[weekday.num_days_from_monday() as usize] = Some(DayWindow { open, close });
        Ok(())
    }

    pub fn window(&self, weekday: Weekday) -> Option<DayWindow> {
        self.days[weekday.num_days_from_monday() as usize]
    }

    pub fn last_order_minutes(&self) -> u32 {
        self.last_order_minutes
    }

    pub fn is_open_at(&self, at: NaiveDateTime) -> bool {
        let Some(window) = self.window(at.weekday()) else {
            return false;
        };

        let now = i64::from(at.time().num_seconds_from_midnight());
        let open = i64::from(window.open.num_seconds_from_midnight());
        let last_call = i64::from(window.close.num_seconds_from_midnight())
            - i64::from(self.last_order_minutes) * 60;

        open <= now && now < last_call
    }

    /// Earliest opening time strictly after `after`, looking one week ahead.
    pub fn next_opening(&self, after: NaiveDateTime) -> Option<NaiveDateTime> {
        (0..=7u64).find_map(|offset| {
            let date = after.date().checked_add_days(Days::new(offset))?;
            let window = self.window(date.weekday())?;
            let candidate = date.and_time(window.open);
            (candidate > after).then_some(candidate)
        })
    }

    pub fn ensure_open(&self, at: NaiveDateTime) -> Result<()> {
        if self.is_open_at(at) {
            return Ok(());
        }
        let next_opening = self.next_opening(at);
        tracing::info!("Rejecting order at {}: store closed (next opening {:?})", at, next_opening);
        Err(ComboError::StoreClosed { at, next_opening })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    // 2026-10-19 is a Monday
    fn at(day: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, day)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn weekday_hours() -> OrderHours {
        let mut hours = OrderHours::new(15);
        for day in [Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Fri] {
            hours.set_day(day, time(11, 0), time(21, 0)).unwrap();
        }
        hours
    }

    #[test]
    fn test_open_within_window() {
        let hours = weekday_hours();
        assert!(hours.is_open_at(at(19, 11, 0)));
        assert!(hours.is_open_at(at(19, 20, 44)));
        assert!(!hours.is_open_at(at(19, 10, 59)));
    }

    #[test]
    fn test_last_order_cutoff() {
        let hours = weekday_hours();
        assert!(!hours.is_open_at(at(19, 20, 45)));
        assert!(!hours.is_open_at(at(19, 21, 0)));
    }

    #[test]
    fn test_closed_days() {
        let hours = weekday_hours();
        // Saturday
        assert!(!hours.is_open_at(at(24, 13, 0)));
        assert!(hours.ensure_open(at(24, 13, 0)).is_err());
    }

    #[test]
    fn test_next_opening_skips_weekend() {
        let hours = weekday_hours();
        assert_eq!(hours.next_opening(at(23, 22, 0)), Some(at(26, 11, 0)));
        assert_eq!(hours.next_opening(at(19, 9, 30)), Some(at(19, 11, 0)));
        assert_eq!(OrderHours::default().next_opening(at(19, 9, 30)), None);
    }

    #[test]
    fn test_store_closed_error_carries_next_opening() {
        let hours = weekday_hours();
        match hours.ensure_open(at(19, 22, 0)) {
            Err(ComboError::StoreClosed { next_opening, .. }) => {
                assert_eq!(next_opening, Some(at(20, 11, 0)));
            }
            other => panic!("expected StoreClosed, got {:?}", other),
        }
    }

    #[test]
    fn test_window_not_longer_than_cutoff_is_rejected() {
        let mut hours = OrderHours::new(120);
        assert!(hours.set_day(Weekday::Mon, time(11, 0), time(12, 0)).is_err());
        assert!(hours.set_day(Weekday::Mon, time(11, 0), time(13, 0)).is_err());
        assert!(hours.window(Weekday::Mon).is_none());

        hours.set_day(Weekday::Mon, time(11, 0), time(13, 1)).unwrap();
        let next = hours.next_opening(at(19, 9, 0)).unwrap();
        assert_eq!(next, at(19, 11, 0));
        assert!(hours.is_open_at(next));
    }

    #[test]
    fn test_inverted_window_is_rejected() {
        assert!(OrderHours::new(0)
            .with_day(Weekday::Sun, time(22, 0), time(10, 0))
            .is_err());
    }
}
