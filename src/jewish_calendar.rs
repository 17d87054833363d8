//! Holidays, fasts and other rules of the Jewish year.

use chrono::{DateTime, NaiveDate, TimeDelta, TimeZone, Utc, Weekday};
use tracing::debug;

use crate::config::ZmanimConfig;
use crate::geo::GeoLocation;
use crate::jewish_date::{JewishDate, JewishMonth};
use crate::types::ZmanimError;

/// A holiday, fast or commemorative day.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Holiday {
    ErevPesach,
    Pesach,
    CholHamoedPesach,
    PesachSheni,
    ErevShavuos,
    Shavuos,
    SeventeenOfTammuz,
    TishaBeav,
    TuBeav,
    ErevRoshHashana,
    RoshHashana,
    FastOfGedalyah,
    ErevYomKippur,
    YomKippur,
    ErevSuccos,
    Succos,
    CholHamoedSuccos,
    HoshanaRabba,
    SheminiAtzeres,
    /// Diaspora only; in Israel it coincides with Shemini Atzeres.
    SimchasTorah,
    Chanukah,
    TenthOfTeves,
    TuBeshvat,
    FastOfEsther,
    Purim,
    ShushanPurim,
    /// 14 Adar I of a leap year.
    PurimKatan,
    ShushanPurimKatan,
    /// The day after a pilgrimage festival.
    IsruChag,
    LagBaomer,
    YomHashoah,
    YomHazikaron,
    YomHaatzmaut,
    YomYerushalayim,
}

/// A Jewish date with the location-dependent rules needed to classify it.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use zmanim::{Holiday, JewishCalendar};
///
/// let date = NaiveDate::from_ymd_opt(2016, 6, 13).unwrap();
/// let diaspora = JewishCalendar::from_gregorian(date).unwrap();
/// let israel = JewishCalendar::from_gregorian(date).unwrap().with_in_israel(true);
///
/// assert_eq!(diaspora.holiday(), Some(Holiday::Shavuos));
/// assert_eq!(israel.holiday(), Some(Holiday::IsruChag));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct JewishCalendar {
    date: JewishDate,
    in_israel: bool,
    use_modern_holidays: bool,
}

impl JewishCalendar {
    /// Diaspora rules without the modern Israeli days.
    pub fn new(date: JewishDate) -> Self {
        Self {
            date,
            in_israel: false,
            use_modern_holidays: false,
        }
    }

    /// Diaspora rules for a Gregorian date.
    ///
    /// # Errors
    ///
    /// [`ZmanimError::DateBeforeJewishEpoch`] for dates before the first Rosh Hashana.
    pub fn from_gregorian(date: NaiveDate) -> Result<Self, ZmanimError> {
        JewishDate::from_gregorian(date).map(Self::new)
    }

    /// Takes the holiday flags from a zmanim configuration.
    ///
    /// # Errors
    ///
    /// Same as [`JewishCalendar::from_gregorian`].
    pub fn with_config(date: NaiveDate, config: &ZmanimConfig) -> Result<Self, ZmanimError> {
        Ok(Self::from_gregorian(date)?
            .with_in_israel(config.in_israel())
            .with_modern_holidays(config.use_modern_holidays()))
    }

    /// Israeli rules: one day of yom tov and Isru Chag on the day after.
    pub fn with_in_israel(mut self, in_israel: bool) -> Self {
        self.in_israel = in_israel;
        self
    }

    /// Reports Yom HaShoah, Yom Hazikaron, Yom Haatzmaut and Yom Yerushalayim.
    pub fn with_modern_holidays(mut self, use_modern_holidays: bool) -> Self {
        self.use_modern_holidays = use_modern_holidays;
        self
    }

    pub fn date(&self) -> JewishDate {
        self.date
    }

    pub fn in_israel(&self) -> bool {
        self.in_israel
    }

    pub fn use_modern_holidays(&self) -> bool {
        self.use_modern_holidays
    }

    /// The holiday falling on this date, if any.
    ///
    /// Fasts that fall on Shabbos are reported on the day they are observed.
    pub fn holiday(&self) -> Option<Holiday> {
        let day = self.date.day();
        let dow = self.date.day_of_week();
        let israel = self.in_israel;
        let modern = self.use_modern_holidays;

        match self.date.month() {
            JewishMonth::Nissan => match day {
                14 => Some(Holiday::ErevPesach),
                15 | 21 => Some(Holiday::Pesach),
                16 | 22 if !israel => Some(Holiday::Pesach),
                16..=20 => Some(Holiday::CholHamoedPesach),
                22 if israel => Some(Holiday::IsruChag),
                23 if !israel => Some(Holiday::IsruChag),
                26 if modern && dow == Weekday::Thu => Some(Holiday::YomHashoah),
                28 if modern && dow == Weekday::Mon => Some(Holiday::YomHashoah),
                27 if modern && dow != Weekday::Sun && dow != Weekday::Fri => Some(Holiday::YomHashoah),
                _ => None,
            },
            JewishMonth::Iyar => match day {
                4 if modern && dow == Weekday::Tue => Some(Holiday::YomHazikaron),
                2 | 3 if modern && dow == Weekday::Wed => Some(Holiday::YomHazikaron),
                5 if modern && dow == Weekday::Mon => Some(Holiday::YomHazikaron),
                5 if modern && dow == Weekday::Wed => Some(Holiday::YomHaatzmaut),
                3 | 4 if modern && dow == Weekday::Thu => Some(Holiday::YomHaatzmaut),
                6 if modern && dow == Weekday::Tue => Some(Holiday::YomHaatzmaut),
                14 => Some(Holiday::PesachSheni),
                18 => Some(Holiday::LagBaomer),
                28 if modern => Some(Holiday::YomYerushalayim),
                _ => None,
            },
            JewishMonth::Sivan => match day {
                5 => Some(Holiday::ErevShavuos),
                6 => Some(Holiday::Shavuos),
                7 if !israel => Some(Holiday::Shavuos),
                7 => Some(Holiday::IsruChag),
                8 if !israel => Some(Holiday::IsruChag),
                _ => None,
            },
            JewishMonth::Tammuz => match day {
                17 if dow != Weekday::Sat => Some(Holiday::SeventeenOfTammuz),
                18 if dow == Weekday::Sun => Some(Holiday::SeventeenOfTammuz),
                _ => None,
            },
            JewishMonth::Av => match day {
                9 if dow != Weekday::Sat => Some(Holiday::TishaBeav),
                10 if dow == Weekday::Sun => Some(Holiday::TishaBeav),
                15 => Some(Holiday::TuBeav),
                _ => None,
            },
            JewishMonth::Elul => (day == 29).then_some(Holiday::ErevRoshHashana),
            JewishMonth::Tishrei => match day {
                1 | 2 => Some(Holiday::RoshHashana),
                3 if dow != Weekday::Sat => Some(Holiday::FastOfGedalyah),
                4 if dow == Weekday::Sun => Some(Holiday::FastOfGedalyah),
                9 => Some(Holiday::ErevYomKippur),
                10 => Some(Holiday::YomKippur),
                14 => Some(Holiday::ErevSuccos),
                15 => Some(Holiday::Succos),
                16 if !israel => Some(Holiday::Succos),
                16..=20 => Some(Holiday::CholHamoedSuccos),
                21 => Some(Holiday::HoshanaRabba),
                22 => Some(Holiday::SheminiAtzeres),
                23 if !israel => Some(Holiday::SimchasTorah),
                23 => Some(Holiday::IsruChag),
                24 if !israel => Some(Holiday::IsruChag),
                _ => None,
            },
            JewishMonth::Cheshvan => None,
            JewishMonth::Kislev => (day >= 25).then_some(Holiday::Chanukah),
            JewishMonth::Teves => match day {
                1 | 2 => Some(Holiday::Chanukah),
                3 if self.date.is_kislev_short() => Some(Holiday::Chanukah),
                10 => Some(Holiday::TenthOfTeves),
                _ => None,
            },
            JewishMonth::Shevat => (day == 15).then_some(Holiday::TuBeshvat),
            JewishMonth::Adar if self.date.is_leap_year() => match day {
                14 => Some(Holiday::PurimKatan),
                15 => Some(Holiday::ShushanPurimKatan),
                _ => None,
            },
            JewishMonth::Adar | JewishMonth::AdarII => match day {
                11 | 12 if dow == Weekday::Thu => Some(Holiday::FastOfEsther),
                13 if dow != Weekday::Fri && dow != Weekday::Sat => Some(Holiday::FastOfEsther),
                14 => Some(Holiday::Purim),
                15 => Some(Holiday::ShushanPurim),
                _ => None,
            },
        }
    }

    /// A holiday that is not an erev, a fast (other than Yom Kippur) or Isru Chag.
    pub fn is_yom_tov(&self) -> bool {
        match self.holiday() {
            None | Some(Holiday::IsruChag) => false,
            Some(Holiday::YomKippur) => true,
            Some(
                Holiday::ErevPesach
                | Holiday::ErevShavuos
                | Holiday::ErevRoshHashana
                | Holiday::ErevYomKippur
                | Holiday::ErevSuccos,
            ) => false,
            Some(_) => !self.is_taanis(),
        }
    }

    /// A day of yom tov on which work is forbidden.
    pub fn is_yom_tov_assur_bemelacha(&self) -> bool {
        matches!(
            self.holiday(),
            Some(
                Holiday::Pesach
                    | Holiday::Shavuos
                    | Holiday::Succos
                    | Holiday::SheminiAtzeres
                    | Holiday::SimchasTorah
                    | Holiday::RoshHashana
                    | Holiday::YomKippur
            )
        )
    }

    /// Shabbos or a yom tov on which work is forbidden.
    pub fn is_assur_bemelacha(&self) -> bool {
        self.date.day_of_week() == Weekday::Sat || self.is_yom_tov_assur_bemelacha()
    }

    /// Tomorrow is Shabbos or yom tov, so candles are lit this evening.
    pub fn has_candle_lighting(&self) -> bool {
        self.is_tomorrow_shabbos_or_yom_tov()
    }

    /// Friday, erev yom tov, or the first day of a two-day yom tov.
    pub fn is_tomorrow_shabbos_or_yom_tov(&self) -> bool {
        self.date.day_of_week() == Weekday::Fri || self.is_erev_yom_tov() || self.is_erev_yom_tov_sheni()
    }

    /// The day before a yom tov, including Hoshana Rabba and the last day of Chol Hamoed Pesach.
    pub fn is_erev_yom_tov(&self) -> bool {
        match self.holiday() {
            Some(
                Holiday::ErevPesach
                | Holiday::ErevShavuos
                | Holiday::ErevRoshHashana
                | Holiday::ErevYomKippur
                | Holiday::ErevSuccos
                | Holiday::HoshanaRabba,
            ) => true,
            Some(Holiday::CholHamoedPesach) => self.date.day() == 20,
            _ => false,
        }
    }

    /// First day of a two-day yom tov (Rosh Hashana everywhere, the festivals in the diaspora).
    pub fn is_erev_yom_tov_sheni(&self) -> bool {
        let day = self.date.day();
        match self.date.month() {
            JewishMonth::Tishrei if day == 1 => true,
            _ if self.in_israel => false,
            JewishMonth::Nissan => day == 15 || day == 21,
            JewishMonth::Tishrei => day == 15 || day == 22,
            JewishMonth::Sivan => day == 6,
            _ => false,
        }
    }

    /// The intermediate days of Pesach or Succos.
    pub fn is_chol_hamoed(&self) -> bool {
        self.is_chol_hamoed_pesach() || self.is_chol_hamoed_succos()
    }

    pub fn is_chol_hamoed_pesach(&self) -> bool {
        self.holiday() == Some(Holiday::CholHamoedPesach)
    }

    /// Includes Hoshana Rabba.
    pub fn is_chol_hamoed_succos(&self) -> bool {
        matches!(self.holiday(), Some(Holiday::CholHamoedSuccos | Holiday::HoshanaRabba))
    }

    /// A public fast day, Yom Kippur included.
    pub fn is_taanis(&self) -> bool {
        matches!(
            self.holiday(),
            Some(
                Holiday::SeventeenOfTammuz
                    | Holiday::TishaBeav
                    | Holiday::YomKippur
                    | Holiday::FastOfGedalyah
                    | Holiday::TenthOfTeves
                    | Holiday::FastOfEsther
            )
        )
    }

    /// The 30th of a month, or the 1st of any month but Tishrei.
    pub fn is_rosh_chodesh(&self) -> bool {
        let day = self.date.day();
        (day == 1 && self.date.month() != JewishMonth::Tishrei) || day == 30
    }

    /// The day before Rosh Chodesh. Never the 29th of Elul.
    pub fn is_erev_rosh_chodesh(&self) -> bool {
        self.date.day() == 29 && self.date.month() != JewishMonth::Elul
    }

    /// One of the eight days from 25 Kislev.
    pub fn is_chanukah(&self) -> bool {
        self.holiday() == Some(Holiday::Chanukah)
    }

    /// Purim itself; Shushan Purim and Purim Katan are separate [`Holiday`]s.
    pub fn is_purim(&self) -> bool {
        self.holiday() == Some(Holiday::Purim)
    }

    pub fn is_rosh_hashana(&self) -> bool {
        self.holiday() == Some(Holiday::RoshHashana)
    }

    pub fn is_yom_kippur(&self) -> bool {
        self.holiday() == Some(Holiday::YomKippur)
    }

    /// Succos, its Chol Hamoed and Hoshana Rabba.
    pub fn is_succos(&self) -> bool {
        matches!(
            self.holiday(),
            Some(Holiday::Succos | Holiday::CholHamoedSuccos | Holiday::HoshanaRabba)
        )
    }

    /// Pesach including Chol Hamoed.
    pub fn is_pesach(&self) -> bool {
        matches!(self.holiday(), Some(Holiday::Pesach | Holiday::CholHamoedPesach))
    }

    /// Both days in the diaspora, one in Israel.
    pub fn is_shavuos(&self) -> bool {
        self.holiday() == Some(Holiday::Shavuos)
    }

    /// The fast of 9 Av, or 10 Av when the 9th is Shabbos.
    pub fn is_tisha_beav(&self) -> bool {
        self.holiday() == Some(Holiday::TishaBeav)
    }

    /// The day after Pesach, Shavuos or Succos.
    pub fn is_isru_chag(&self) -> bool {
        self.holiday() == Some(Holiday::IsruChag)
    }

    /// The Shabbos before Rosh Chodesh, when the new month is announced. Not before Tishrei.
    pub fn is_shabbos_mevorchim(&self) -> bool {
        self.date.day_of_week() == Weekday::Sat
            && self.date.month() != JewishMonth::Elul
            && (23..=29).contains(&self.date.day())
    }

    /// The fast of the day before Rosh Chodesh, moved to Thursday when it falls on Friday or Shabbos.
    ///
    /// Not kept before Tishrei, Cheshvan, Teves or Iyar.
    pub fn is_yom_kippur_katan(&self) -> bool {
        let day = self.date.day();
        let dow = self.date.day_of_week();
        if matches!(
            self.date.month(),
            JewishMonth::Elul | JewishMonth::Tishrei | JewishMonth::Kislev | JewishMonth::Nissan
        ) {
            return false;
        }
        (day == 29 && dow != Weekday::Fri && dow != Weekday::Sat) || ((day == 27 || day == 28) && dow == Weekday::Thu)
    }

    /// Day of the omer counted on the night that ends this date, 1 to 49.
    pub fn day_of_omer(&self) -> Option<u8> {
        let day = self.date.day();
        match self.date.month() {
            JewishMonth::Nissan if day >= 16 => Some(day - 15),
            JewishMonth::Iyar => Some(day + 15),
            JewishMonth::Sivan if day < 6 => Some(day + 44),
            _ => None,
        }
    }

    /// Day of Chanukah, 1 to 8.
    pub fn day_of_chanukah(&self) -> Option<u8> {
        if !self.is_chanukah() {
            return None;
        }
        let day = self.date.day();
        Some(match self.date.month() {
            JewishMonth::Kislev => day - 24,
            _ if self.date.is_kislev_short() => day + 5,
            _ => day + 6,
        })
    }

    /// The molad of this month as an instant.
    ///
    /// Molad times are Jerusalem local mean time; they are converted to
    /// Israel standard time (UTC+2) and from there to UTC.
    pub fn molad_as_date(&self) -> Option<DateTime<Utc>> {
        let molad = self.date.molad();
        let seconds = f64::from(molad.chalakim) * 10.0 / 3.0;
        let whole_seconds = seconds as u32;
        let millis = (1000.0 * (seconds - f64::from(whole_seconds))) as u32;
        let local = molad.date.gregorian().and_hms_milli_opt(
            u32::from(molad.hours),
            u32::from(molad.minutes),
            whole_seconds,
            millis,
        )?;
        let jerusalem = GeoLocation::new("Jerusalem, Israel", 31.778, 35.2354, 0.0, chrono_tz::Etc::GMTMinus2).ok()?;
        let standard = jerusalem.time_zone().from_local_datetime(&local).single()?.with_timezone(&Utc);
        let instant = standard.checked_sub_signed(jerusalem.local_mean_time_offset(standard))?;
        debug!(%instant, year = self.date.year(), month = ?self.date.month(), "molad");
        Some(instant)
    }

    /// Earliest kiddush levana, 3 days after the molad.
    pub fn tchilas_zman_kidush_levana_3_days(&self) -> Option<DateTime<Utc>> {
        self.molad_as_date()?.checked_add_signed(TimeDelta::hours(72))
    }

    /// Earliest kiddush levana, 7 days after the molad.
    pub fn tchilas_zman_kidush_levana_7_days(&self) -> Option<DateTime<Utc>> {
        self.molad_as_date()?.checked_add_signed(TimeDelta::hours(168))
    }

    /// Latest kiddush levana: halfway to the next molad, 14 days 18 hours 22 minutes 1.666 seconds.
    pub fn sof_zman_kidush_levana_between_moldos(&self) -> Option<DateTime<Utc>> {
        let half_month = TimeDelta::hours(24 * 14 + 18)
            + TimeDelta::minutes(22)
            + TimeDelta::seconds(1)
            + TimeDelta::milliseconds(666);
        self.molad_as_date()?.checked_add_signed(half_month)
    }

    /// Latest kiddush levana, 15 days after the molad.
    pub fn sof_zman_kidush_levana_15_days(&self) -> Option<DateTime<Utc>> {
        self.molad_as_date()?.checked_add_signed(TimeDelta::days(15))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn cal(y: i32, m: u32, d: u32) -> JewishCalendar {
        JewishCalendar::from_gregorian(NaiveDate::from_ymd_opt(y, m, d).unwrap()).unwrap()
    }

    #[test]
    fn second_day_of_yom_tov_only_in_diaspora() {
        assert_eq!(cal(2015, 9, 14).with_in_israel(true).holiday(), Some(Holiday::RoshHashana));
        assert_eq!(cal(2015, 9, 15).with_in_israel(true).holiday(), Some(Holiday::RoshHashana));
        assert_eq!(cal(2016, 6, 12).with_in_israel(true).holiday(), Some(Holiday::Shavuos));
        assert_eq!(cal(2016, 6, 13).holiday(), Some(Holiday::Shavuos));
        assert_eq!(cal(2016, 6, 13).with_in_israel(true).holiday(), Some(Holiday::IsruChag));
        assert_eq!(cal(2016, 6, 14).holiday(), Some(Holiday::IsruChag));
    }

    #[test]
    fn fasts_move_off_shabbos() {
        assert_eq!(cal(2016, 8, 13).holiday(), None);
        assert_eq!(cal(2016, 8, 14).holiday(), Some(Holiday::TishaBeav));
        assert_eq!(cal(2016, 7, 23).holiday(), None);
        assert_eq!(cal(2016, 7, 24).holiday(), Some(Holiday::SeventeenOfTammuz));
        assert!(cal(2016, 8, 14).is_taanis());
        assert!(!cal(2016, 8, 14).is_yom_tov());
    }

    #[test]
    fn modern_holidays_need_the_flag() {
        assert_eq!(cal(2016, 5, 12).holiday(), None);
        assert_eq!(cal(2016, 5, 12).with_modern_holidays(true).holiday(), Some(Holiday::YomHaatzmaut));
        assert_eq!(cal(2016, 5, 11).with_modern_holidays(true).holiday(), Some(Holiday::YomHazikaron));
        assert_eq!(cal(2016, 5, 5).with_modern_holidays(true).holiday(), Some(Holiday::YomHashoah));
    }

    #[test]
    fn purim_katan_in_leap_year() {
        assert_eq!(cal(2016, 2, 23).holiday(), Some(Holiday::PurimKatan));
        assert_eq!(cal(2016, 2, 24).holiday(), Some(Holiday::ShushanPurimKatan));
        assert!(cal(2016, 3, 24).is_purim());
        assert!(cal(2017, 3, 12).is_purim());
    }

    #[test]
    fn yom_tov_classification() {
        let erev_pesach = cal(2016, 4, 22);
        assert!(erev_pesach.is_erev_yom_tov());
        assert!(!erev_pesach.is_yom_tov());
        assert!(erev_pesach.has_candle_lighting());

        let pesach = cal(2016, 4, 23);
        assert!(pesach.is_yom_tov() && pesach.is_pesach() && pesach.is_yom_tov_assur_bemelacha());
        assert!(pesach.is_erev_yom_tov_sheni());
        assert!(pesach.has_candle_lighting());
        assert!(!pesach.with_in_israel(true).has_candle_lighting());

        let chol_hamoed = cal(2016, 4, 25);
        assert!(chol_hamoed.is_chol_hamoed() && !chol_hamoed.is_assur_bemelacha());

        let yom_kippur = cal(2015, 9, 23);
        assert!(yom_kippur.is_yom_kippur() && yom_kippur.is_yom_tov() && yom_kippur.is_taanis());
    }

    #[test]
    fn named_holiday_predicates() {
        assert!(cal(2015, 9, 14).is_rosh_hashana());
        assert!(cal(2015, 9, 28).is_succos());
        // Hoshana Rabba counts as Succos
        assert!(cal(2015, 10, 4).is_succos());
        assert!(!cal(2015, 10, 5).is_succos());
        assert!(cal(2016, 6, 12).is_shavuos());
        assert!(cal(2016, 8, 14).is_tisha_beav());
        assert!(!cal(2016, 8, 13).is_tisha_beav());
        assert!(cal(2016, 6, 14).is_isru_chag());
        assert!(cal(2016, 6, 13).with_in_israel(true).is_isru_chag());
    }

    #[test]
    fn rosh_chodesh_rules() {
        // 30 Cheshvan 5776 and 1 Kislev
        assert!(cal(2015, 11, 12).is_rosh_chodesh());
        assert!(cal(2015, 11, 13).is_rosh_chodesh());
        // Rosh Hashana is not Rosh Chodesh
        assert!(!cal(2015, 9, 14).is_rosh_chodesh());
        // 29 Elul is not erev Rosh Chodesh
        assert!(!cal(2015, 9, 13).is_erev_rosh_chodesh());
        assert!(cal(2015, 11, 11).is_erev_rosh_chodesh());
    }

    #[test]
    fn omer_and_chanukah_counters() {
        assert_eq!(cal(2016, 4, 24).day_of_omer(), Some(1));
        assert_eq!(cal(2016, 5, 26).day_of_omer(), Some(33));
        assert_eq!(cal(2016, 6, 11).day_of_omer(), Some(49));
        assert_eq!(cal(2016, 6, 12).day_of_omer(), None);

        // 25 Kislev 5776; Kislev 5776 has 30 days
        assert_eq!(cal(2015, 12, 7).day_of_chanukah(), Some(1));
        assert_eq!(cal(2015, 12, 14).day_of_chanukah(), Some(8));
        assert_eq!(cal(2015, 12, 15).day_of_chanukah(), None);
        // 5777 has a short Kislev, so Chanukah runs to 3 Teves
        assert_eq!(cal(2016, 12, 25).day_of_chanukah(), Some(1));
        assert_eq!(cal(2017, 1, 1).day_of_chanukah(), Some(8));
    }

    #[test]
    fn shabbos_mevorchim_and_yom_kippur_katan() {
        // Shabbos 23 Kislev 5776
        assert!(cal(2015, 12, 5).is_shabbos_mevorchim());
        // Shabbos 30 Kislev is already Rosh Chodesh
        assert!(!cal(2015, 12, 12).is_shabbos_mevorchim());
        // Shabbos 25 Elul 5775: no announcement before Tishrei
        assert!(!cal(2015, 9, 12).is_shabbos_mevorchim());
        // 29 Shevat 5776 is a Monday
        assert!(cal(2016, 2, 8).is_yom_kippur_katan());
        assert!(!cal(2016, 2, 9).is_yom_kippur_katan());
        // 29 Kislev is skipped for Chanukah
        assert!(!cal(2015, 12, 11).is_yom_kippur_katan());
    }

    #[test]
    fn molad_converted_from_jerusalem_mean_time() {
        // Molad Tishrei 5776: 17:07 and 9 chalakim on 2015-09-13
        let rosh_hashana = cal(2015, 9, 14);
        let molad = rosh_hashana.molad_as_date().unwrap();
        let expected = Utc.with_ymd_and_hms(2015, 9, 13, 14, 46, 33).unwrap() + TimeDelta::milliseconds(504);
        assert_eq!(molad, expected);
        assert_eq!(rosh_hashana.tchilas_zman_kidush_levana_3_days(), Some(expected + TimeDelta::days(3)));
        assert_eq!(rosh_hashana.tchilas_zman_kidush_levana_7_days(), Some(expected + TimeDelta::days(7)));
        assert_eq!(rosh_hashana.sof_zman_kidush_levana_15_days(), Some(expected + TimeDelta::days(15)));
        assert!(rosh_hashana.sof_zman_kidush_levana_between_moldos() < rosh_hashana.sof_zman_kidush_levana_15_days());
    }

    #[test]
    fn config_flags_carry_over() {
        let config = ZmanimConfig::default().with_in_israel(true).with_modern_holidays(true);
        let calendar = JewishCalendar::with_config(NaiveDate::from_ymd_opt(2016, 5, 12).unwrap(), &config).unwrap();
        assert!(calendar.in_israel() && calendar.use_modern_holidays());
        assert_eq!(calendar.holiday(), Some(Holiday::YomHaatzmaut));
    }
}
