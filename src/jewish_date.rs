//! Hebrew calendar dates and their conversion to and from the Gregorian calendar.
//!
//! Arithmetic follows the fixed calendar of Hillel II: months start at the
//! mean molad, counted in chalakim (1080 per hour) from the molad of
//! creation, and Rosh Hashana is postponed by the four dechiyos.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::types::ZmanimError;

/// Absolute day (days since 0001-01-01 CE, which is day 1) before 1 Tishrei of year 1.
const JEWISH_EPOCH: i64 = -1_373_429;
pub(crate) const CHALAKIM_PER_MINUTE: i64 = 18;
pub(crate) const CHALAKIM_PER_HOUR: i64 = 1080;
pub(crate) const CHALAKIM_PER_DAY: i64 = 25_920;
/// 29 days, 12 hours and 793 chalakim
pub(crate) const CHALAKIM_PER_MONTH: i64 = 765_433;
/// Molad BeHaRaD: Monday, 5 hours and 204 chalakim
const CHALAKIM_MOLAD_TOHU: i64 = 31_524;

/// Hebrew months, numbered from Nissan as in the Torah.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum JewishMonth {
    Nissan = 1,
    Iyar = 2,
    Sivan = 3,
    Tammuz = 4,
    Av = 5,
    Elul = 6,
    Tishrei = 7,
    Cheshvan = 8,
    Kislev = 9,
    Teves = 10,
    Shevat = 11,
    /// Adar, or Adar I in a leap year.
    Adar = 12,
    /// Only in leap years.
    AdarII = 13,
}

impl JewishMonth {
    const ALL: [JewishMonth; 13] = [
        JewishMonth::Nissan,
        JewishMonth::Iyar,
        JewishMonth::Sivan,
        JewishMonth::Tammuz,
        JewishMonth::Av,
        JewishMonth::Elul,
        JewishMonth::Tishrei,
        JewishMonth::Cheshvan,
        JewishMonth::Kislev,
        JewishMonth::Teves,
        JewishMonth::Shevat,
        JewishMonth::Adar,
        JewishMonth::AdarII,
    ];

    /// Month from its Nissan-first number (1..=13).
    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.get(usize::from(number).checked_sub(1)?).copied()
    }

    pub fn number(self) -> u8 {
        self as u8
    }

    /// Position in the civil year, Tishrei = 1. Depends on whether `year` is a leap year.
    pub fn civil_ordinal(self, year: i32) -> u8 {
        let number = self.number();
        if is_leap_year(year) {
            (number + 6) % 13 + 1
        } else {
            (number + 5) % 12 + 1
        }
    }

    /// Inverse of [`civil_ordinal`](Self::civil_ordinal).
    pub fn from_civil_ordinal(ordinal: u8, year: i32) -> Option<Self> {
        let months_in_year = last_month_of_year(year).number();
        if ordinal == 0 || ordinal > months_in_year {
            return None;
        }
        // Tishrei is the seventh month from Nissan
        let number = (ordinal + 5) % months_in_year + 1;
        Self::from_number(number)
    }

    fn succ(self, year: i32) -> Self {
        match self {
            JewishMonth::Adar if !is_leap_year(year) => JewishMonth::Nissan,
            JewishMonth::AdarII => JewishMonth::Nissan,
            _ => Self::from_number(self.number() + 1).unwrap_or(JewishMonth::Nissan),
        }
    }
}

/// Kviah of a year, by the lengths of Cheshvan and Kislev.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum YearType {
    /// Both Cheshvan and Kislev have 29 days.
    Chaserim,
    /// Cheshvan has 29 days and Kislev 30.
    Kesidran,
    /// Both have 30 days.
    Shelaimim,
}

/// The time of a molad: civil date plus hours, minutes and chalakim after midnight.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Molad {
    pub date: JewishDate,
    pub hours: u8,
    pub minutes: u8,
    pub chalakim: u8,
}

/// A date in the Hebrew calendar together with its Gregorian counterpart.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use zmanim::{JewishDate, JewishMonth};
///
/// let rosh_hashana = JewishDate::new(5776, JewishMonth::Tishrei, 1).unwrap();
/// assert_eq!(rosh_hashana.gregorian(), NaiveDate::from_ymd_opt(2015, 9, 14).unwrap());
/// assert_eq!(JewishDate::from_gregorian(rosh_hashana.gregorian()), Ok(rosh_hashana));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JewishDate {
    // field order gives chronological Ord
    gregorian: NaiveDate,
    year: i32,
    month: JewishMonth,
    day: u8,
}

impl JewishDate {
    /// # Errors
    ///
    /// [`ZmanimError::InvalidJewishDate`] when the month does not exist in
    /// that year (Adar II in a common year) or the day is out of range.
    pub fn new(year: i32, month: JewishMonth, day: u8) -> Result<Self, ZmanimError> {
        let invalid = ZmanimError::InvalidJewishDate {
            year,
            month: month.number(),
            day,
        };
        if year < 1 || (month == JewishMonth::AdarII && !is_leap_year(year)) {
            return Err(invalid);
        }
        if day < 1 || day > days_in_month(month, year) {
            return Err(invalid);
        }
        let absolute = jewish_to_absolute(year, month, day);
        let gregorian = i32::try_from(absolute)
            .ok()
            .and_then(NaiveDate::from_num_days_from_ce_opt)
            .ok_or(invalid)?;
        Ok(Self {
            gregorian,
            year,
            month,
            day,
        })
    }

    /// Hebrew date of a Gregorian date.
    ///
    /// # Errors
    ///
    /// [`ZmanimError::DateBeforeJewishEpoch`] for dates before 1 Tishrei 1
    /// (7 September 3761 BCE, proleptic Gregorian).
    pub fn from_gregorian(date: NaiveDate) -> Result<Self, ZmanimError> {
        let absolute = i64::from(date.num_days_from_ce());
        if absolute < jewish_to_absolute(1, JewishMonth::Tishrei, 1) {
            return Err(ZmanimError::DateBeforeJewishEpoch { date });
        }
        let mut year = ((absolute - JEWISH_EPOCH) / 366) as i32;
        while absolute >= jewish_to_absolute(year + 1, JewishMonth::Tishrei, 1) {
            year += 1;
        }
        let mut month = if absolute < jewish_to_absolute(year, JewishMonth::Nissan, 1) {
            JewishMonth::Tishrei
        } else {
            JewishMonth::Nissan
        };
        while absolute > jewish_to_absolute(year, month, days_in_month(month, year)) {
            month = month.succ(year);
        }
        let day = (absolute - jewish_to_absolute(year, month, 1) + 1) as u8;
        Ok(Self {
            gregorian: date,
            year,
            month,
            day,
        })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> JewishMonth {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn gregorian(&self) -> NaiveDate {
        self.gregorian
    }

    pub fn day_of_week(&self) -> Weekday {
        self.gregorian.weekday()
    }

    /// The following day, `None` past the end of the supported Gregorian range.
    pub fn succ(&self) -> Option<Self> {
        self.gregorian.succ_opt().and_then(|date| Self::from_gregorian(date).ok())
    }

    /// The preceding day, `None` on 1 Tishrei 1.
    pub fn pred(&self) -> Option<Self> {
        self.gregorian.pred_opt().and_then(|date| Self::from_gregorian(date).ok())
    }

    pub fn days_in_month(&self) -> u8 {
        days_in_month(self.month, self.year)
    }

    pub fn days_in_year(&self) -> u16 {
        days_in_year(self.year)
    }

    pub fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    pub fn is_cheshvan_long(&self) -> bool {
        is_cheshvan_long(self.year)
    }

    pub fn is_kislev_short(&self) -> bool {
        is_kislev_short(self.year)
    }

    pub fn year_type(&self) -> YearType {
        if is_cheshvan_long(self.year) && !is_kislev_short(self.year) {
            YearType::Shelaimim
        } else if !is_cheshvan_long(self.year) && is_kislev_short(self.year) {
            YearType::Chaserim
        } else {
            YearType::Kesidran
        }
    }

    /// Days since Rosh Hashana, 1 Tishrei being day 1.
    pub fn day_of_year(&self) -> u16 {
        (jewish_to_absolute(self.year, self.month, self.day) - jewish_to_absolute(self.year, JewishMonth::Tishrei, 1)
            + 1) as u16
    }

    /// Molad of this month.
    ///
    /// Molad times are reckoned from 18:00 of the previous evening; the
    /// returned date and hours are the civil ones.
    pub fn molad(&self) -> Molad {
        let chalakim = chalakim_since_molad_tohu(self.year, self.month);
        let days = chalakim / CHALAKIM_PER_DAY;
        let parts = chalakim - days * CHALAKIM_PER_DAY;
        let mut hours = parts / CHALAKIM_PER_HOUR;
        let remainder = parts - hours * CHALAKIM_PER_HOUR;
        let minutes = remainder / CHALAKIM_PER_MINUTE;
        let leftover = remainder - minutes * CHALAKIM_PER_MINUTE;

        let mut absolute = days + JEWISH_EPOCH;
        if hours >= 6 {
            absolute += 1;
        }
        hours = (hours + 18) % 24;
        let date = i32::try_from(absolute)
            .ok()
            .and_then(NaiveDate::from_num_days_from_ce_opt)
            .and_then(|date| Self::from_gregorian(date).ok())
            .unwrap_or(*self);
        Molad {
            date,
            hours: hours as u8,
            minutes: minutes as u8,
            chalakim: leftover as u8,
        }
    }
}

pub fn is_leap_year(year: i32) -> bool {
    (7 * i64::from(year) + 1).rem_euclid(19) < 7
}

fn last_month_of_year(year: i32) -> JewishMonth {
    if is_leap_year(year) {
        JewishMonth::AdarII
    } else {
        JewishMonth::Adar
    }
}

/// Chalakim from the molad of creation to the molad of `month` in `year`.
pub(crate) fn chalakim_since_molad_tohu(year: i32, month: JewishMonth) -> i64 {
    let y = i64::from(year) - 1;
    let months_elapsed = 235 * y.div_euclid(19)
        + 12 * y.rem_euclid(19)
        + (7 * y.rem_euclid(19) + 1) / 19
        + i64::from(month.civil_ordinal(year)) - 1;
    CHALAKIM_MOLAD_TOHU + CHALAKIM_PER_MONTH * months_elapsed
}

/// Days from the epoch to Rosh Hashana of `year`, after the dechiyos.
fn elapsed_days(year: i32) -> i64 {
    let chalakim = chalakim_since_molad_tohu(year, JewishMonth::Tishrei);
    let molad_day = chalakim / CHALAKIM_PER_DAY;
    let molad_parts = chalakim - molad_day * CHALAKIM_PER_DAY;
    let mut rosh_hashana = molad_day;

    // molad zaken, GaTaRaD, BeTUTaKPaT
    if molad_parts >= 19_440
        || (molad_day % 7 == 2 && molad_parts >= 9_924 && !is_leap_year(year))
        || (molad_day % 7 == 1 && molad_parts >= 16_789 && is_leap_year(year - 1))
    {
        rosh_hashana += 1;
    }
    // lo ADU rosh
    if matches!(rosh_hashana % 7, 0 | 3 | 5) {
        rosh_hashana += 1;
    }
    rosh_hashana
}

pub fn days_in_year(year: i32) -> u16 {
    (elapsed_days(year + 1) - elapsed_days(year)) as u16
}

pub fn is_cheshvan_long(year: i32) -> bool {
    days_in_year(year) % 10 == 5
}

pub fn is_kislev_short(year: i32) -> bool {
    days_in_year(year) % 10 == 3
}

pub fn days_in_month(month: JewishMonth, year: i32) -> u8 {
    let short = match month {
        JewishMonth::Iyar | JewishMonth::Tammuz | JewishMonth::Elul | JewishMonth::Teves | JewishMonth::AdarII => true,
        JewishMonth::Cheshvan => !is_cheshvan_long(year),
        JewishMonth::Kislev => is_kislev_short(year),
        JewishMonth::Adar => !is_leap_year(year),
        _ => false,
    };
    if short {
        29
    } else {
        30
    }
}

fn jewish_to_absolute(year: i32, month: JewishMonth, day: u8) -> i64 {
    let mut days = i64::from(day);
    let mut add_months = |from: u8, to: u8| {
        for number in from..to {
            if let Some(m) = JewishMonth::from_number(number) {
                days += i64::from(days_in_month(m, year));
            }
        }
    };
    let tishrei = JewishMonth::Tishrei.number();
    if month < JewishMonth::Tishrei {
        add_months(tishrei, last_month_of_year(year).number() + 1);
        add_months(JewishMonth::Nissan.number(), month.number());
    } else {
        add_months(tishrei, month.number());
    }
    days + elapsed_days(year) + JEWISH_EPOCH
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn greg(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn converts_known_dates() {
        let cases = [
            (greg(2015, 9, 14), 5776, JewishMonth::Tishrei, 1),
            (greg(2016, 3, 24), 5776, JewishMonth::AdarII, 14),
            (greg(2016, 6, 12), 5776, JewishMonth::Sivan, 6),
            (greg(2015, 12, 7), 5776, JewishMonth::Kislev, 25),
            (greg(2010, 4, 2), 5770, JewishMonth::Nissan, 18),
            (greg(2023, 9, 16), 5784, JewishMonth::Tishrei, 1),
        ];
        for (date, year, month, day) in cases {
            let jewish = JewishDate::from_gregorian(date).unwrap();
            assert_eq!((jewish.year(), jewish.month(), jewish.day()), (year, month, day), "{date}");
            assert_eq!(JewishDate::new(year, month, day).unwrap().gregorian(), date);
        }
    }

    #[test]
    fn dates_before_the_first_rosh_hashana_are_rejected() {
        let first = JewishDate::new(1, JewishMonth::Tishrei, 1).unwrap();
        assert_eq!(first.gregorian(), NaiveDate::from_ymd_opt(-3760, 9, 7).unwrap());
        assert_eq!(JewishDate::from_gregorian(first.gregorian()), Ok(first));
        assert_eq!(first.pred(), None);

        for date in [greg(-3760, 9, 6), greg(-3800, 1, 1), greg(-5000, 6, 1)] {
            assert_eq!(JewishDate::from_gregorian(date), Err(ZmanimError::DateBeforeJewishEpoch { date }));
        }
        assert!(crate::JewishCalendar::from_gregorian(greg(-5000, 6, 1)).is_err());
    }

    #[test]
    fn year_lengths_and_kviah() {
        assert_eq!(days_in_year(5775), 354);
        assert_eq!(days_in_year(5776), 385);
        assert_eq!(days_in_year(5777), 353);
        assert_eq!(days_in_year(5784), 383);
        let year = |y| JewishDate::new(y, JewishMonth::Tishrei, 1).unwrap().year_type();
        assert_eq!(year(5775), YearType::Kesidran);
        assert_eq!(year(5776), YearType::Shelaimim);
        assert_eq!(year(5777), YearType::Chaserim);
    }

    #[test]
    fn leap_years_follow_metonic_cycle() {
        let leaps: alloc::vec::Vec<i32> = (5758..5777).filter(|y| is_leap_year(*y)).collect();
        assert_eq!(leaps, [5760, 5763, 5765, 5768, 5771, 5774, 5776]);
    }

    #[test]
    fn civil_ordinal_round_trip() {
        assert_eq!(JewishMonth::Tishrei.civil_ordinal(5776), 1);
        assert_eq!(JewishMonth::Nissan.civil_ordinal(5776), 8);
        assert_eq!(JewishMonth::Nissan.civil_ordinal(5777), 7);
        for year in [5776, 5777] {
            for ordinal in 1..=last_month_of_year(year).number() {
                let month = JewishMonth::from_civil_ordinal(ordinal, year).unwrap();
                assert_eq!(month.civil_ordinal(year), ordinal);
            }
        }
        assert_eq!(JewishMonth::from_civil_ordinal(13, 5777), None);
    }

    #[test]
    fn rejects_impossible_dates() {
        assert!(JewishDate::new(5777, JewishMonth::AdarII, 1).is_err());
        assert!(JewishDate::new(5777, JewishMonth::Kislev, 30).is_err());
        assert!(JewishDate::new(5776, JewishMonth::Kislev, 30).is_ok());
        assert_eq!(
            JewishDate::new(5776, JewishMonth::Iyar, 30),
            Err(ZmanimError::InvalidJewishDate { year: 5776, month: 2, day: 30 })
        );
    }

    #[test]
    fn succ_crosses_year_boundary() {
        let erev_rh = JewishDate::new(5775, JewishMonth::Elul, 29).unwrap();
        let rh = erev_rh.succ().unwrap();
        assert_eq!((rh.year(), rh.month(), rh.day()), (5776, JewishMonth::Tishrei, 1));
        assert_eq!(rh.pred(), Some(erev_rh));
        assert_eq!(rh.day_of_week(), Weekday::Mon);
        assert_eq!(rh.day_of_year(), 1);
    }

    #[test]
    fn molad_times() {
        let tishrei = JewishDate::new(5776, JewishMonth::Tishrei, 1).unwrap().molad();
        assert_eq!(tishrei.date.gregorian(), greg(2015, 9, 13));
        assert_eq!((tishrei.hours, tishrei.minutes, tishrei.chalakim), (17, 7, 9));

        let nissan = JewishDate::new(5784, JewishMonth::Nissan, 1).unwrap().molad();
        assert_eq!(nissan.date.gregorian(), greg(2024, 4, 8));
        assert_eq!((nissan.hours, nissan.minutes, nissan.chalakim), (22, 57, 7));
    }
}
