#![allow(missing_docs, clippy::unwrap_used)]
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use zmanim::{Calculator, GeoLocation, JewishCalendar, ZmanimCalendar, ZmanimConfig};

fn show(label: &str, time: Option<DateTime<Tz>>) {
    match time {
        Some(time) => println!("  {label:<28} {}", time.format("%H:%M:%S %Z")),
        None => println!("  {label:<28} N/A"),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let lakewood = GeoLocation::from_tz_name("Lakewood, NJ", 40.09596, -74.22213, 0.0, "America/New_York")?;

    // Today, or a date given as the first argument (YYYY-MM-DD)
    let date = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<NaiveDate>()?,
        None => Utc::now().with_timezone(&lakewood.time_zone()).date_naive(),
    };

    let config = ZmanimConfig::default().with_calculator(Calculator::Noaa);
    let zmanim = ZmanimCalendar::new(date, lakewood, config.clone())?;
    let jewish = JewishCalendar::with_config(date, &config)?;
    let jewish_date = jewish.date();

    println!("Zmanim for {}", zmanim.astronomical().location().name());
    println!(
        "Date: {} ({} {:?} {})",
        date.format("%B %d, %Y"),
        jewish_date.day(),
        jewish_date.month(),
        jewish_date.year()
    );
    if let Some(holiday) = jewish.holiday() {
        println!("Holiday: {holiday:?}");
    }
    if let Some(day) = jewish.day_of_omer() {
        println!("Omer: day {day}");
    }
    println!("{:=<60}", "");

    let astronomical = zmanim.astronomical();
    println!("Twilight:");
    show("Astronomical dawn", astronomical.begin_astronomical_twilight());
    show("Nautical dawn", astronomical.begin_nautical_twilight());
    show("Civil dawn", astronomical.begin_civil_twilight());
    show("Civil dusk", astronomical.end_civil_twilight());
    show("Nautical dusk", astronomical.end_nautical_twilight());
    show("Astronomical dusk", astronomical.end_astronomical_twilight());
    println!();

    println!("Zmanim:");
    show("Alos 16.1", zmanim.alos_hashachar());
    show("Alos 72", zmanim.alos_72());
    show("Sunrise", astronomical.sunrise());
    show("Sof zman shma (MGA)", zmanim.sof_zman_shma_mga());
    show("Sof zman shma (Gra)", zmanim.sof_zman_shma_gra());
    show("Sof zman tfila (Gra)", zmanim.sof_zman_tfila_gra());
    show("Chatzos", zmanim.chatzos());
    show("Mincha gedola", zmanim.mincha_gedola());
    show("Mincha ketana", zmanim.mincha_ketana());
    show("Plag hamincha", zmanim.plag_hamincha());
    if jewish.has_candle_lighting() {
        show("Candle lighting", zmanim.candle_lighting());
    }
    show("Sunset", astronomical.sunset());
    show("Tzais 8.5", zmanim.tzais());
    show("Tzais 72", zmanim.tzais_72());
    show("Chatzos halayla", zmanim.solar_midnight());

    if let Some(shaah) = zmanim.shaah_zmanis_gra() {
        println!();
        println!("Shaah zmanis (Gra): {} minutes", shaah.num_seconds() as f64 / 60.0);
    }
    Ok(())
}
