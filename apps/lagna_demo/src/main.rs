use anyhow::Context;
use chrono::{FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use clap::Parser;
use env_logger::Env;
use lagna::{
    BirthChart, BirthMoment, ChartReading, DocumentStore, GeoCoordinate, HoroscopeCalculator,
    InterpretationLookup, InterpretationStore, NullStore,
};
use lagna_config::LagnaSettings;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Birth date, YYYY-MM-DD. Without it the built-in sample charts are shown.
    #[arg(long)]
    date: Option<String>,

    /// Birth time, HH:MM or HH:MM:SS.
    #[arg(long, default_value = "12:00")]
    time: String,

    /// Latitude in degrees, north positive (default from config).
    #[arg(long, allow_hyphen_values = true)]
    lat: Option<f64>,

    /// Longitude in degrees, east positive (default from config).
    #[arg(long, allow_hyphen_values = true)]
    lon: Option<f64>,

    /// Offset of the given time from UTC in hours, e.g. 7 for Thailand.
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    utc_offset: f64,

    /// Interpretation store (JSON); overrides config and LAGNA_STORE_PATH.
    #[arg(long)]
    store: Option<PathBuf>,

    /// Print charts as JSON instead of text.
    #[arg(long, default_value_t = false)]
    json: bool,
}

struct Sample {
    label: &'static str,
    moment: (i32, u32, u32, u32, u32),
    location: GeoCoordinate,
}

const SAMPLES: [Sample; 3] = [
    Sample {
        label: "Bangkok",
        moment: (1990, 3, 15, 14, 30),
        location: GeoCoordinate::new(13.7563, 100.5018),
    },
    Sample {
        label: "Chiang Mai",
        moment: (1985, 7, 20, 8, 15),
        location: GeoCoordinate::new(18.7883, 98.9853),
    },
    Sample {
        label: "Phuket",
        moment: (1995, 12, 10, 22, 45),
        location: GeoCoordinate::new(7.8804, 98.3923),
    },
];

#[derive(Serialize)]
struct ChartReport<'a> {
    label: &'a str,
    chart: Option<&'a BirthChart>,
    reading: &'a ChartReading,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let settings = lagna_config::load_settings()?;
    log::debug!("Settings: {:?}", settings);

    let calc = HoroscopeCalculator::new(settings.engine_settings());
    let lookup = InterpretationLookup::new(open_store(&args, &settings).await)
        .with_timeout(settings.lookup_timeout);

    let requests = match &args.date {
        Some(date) => {
            let moment = parse_moment(date, &args.time, args.utc_offset)?;
            let location = GeoCoordinate::new(
                args.lat.unwrap_or(settings.default_location.latitude),
                args.lon.unwrap_or(settings.default_location.longitude),
            );
            vec![(format!("{date} {}", args.time), moment, location)]
        }
        None => SAMPLES
            .iter()
            .map(|s| -> anyhow::Result<_> {
                let (y, mo, d, h, mi) = s.moment;
                let moment = BirthMoment::from_ymd_hms(y, mo, d, h, mi, 0)?;
                Ok((s.label.to_string(), moment, s.location))
            })
            .collect::<anyhow::Result<Vec<_>>>()?,
    };

    for (label, moment, location) in requests {
        let chart = calc.calculate_chart(&moment, location).ok();
        let reading = match &chart {
            Some(chart) => lookup.read_chart(chart).await,
            None => unavailable_reading(&lookup).await,
        };

        if args.json {
            let report = ChartReport {
                label: &label,
                chart: chart.as_ref(),
                reading: &reading,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            print_report(&label, location, chart.as_ref(), &reading);
        }
    }
    Ok(())
}

async fn open_store(args: &Args, settings: &LagnaSettings) -> Arc<dyn InterpretationStore> {
    let Some(path) = args.store.as_ref().or(settings.store_path.as_ref()) else {
        log::info!("No interpretation store configured, using placeholder text");
        return Arc::new(NullStore);
    };
    match DocumentStore::load(path).await {
        Ok(store) => Arc::new(store) as Arc<dyn InterpretationStore>,
        Err(e) => {
            log::warn!("Interpretation store unavailable ({e}), using placeholder text");
            Arc::new(NullStore)
        }
    }
}

fn parse_moment(date: &str, time: &str, utc_offset_hours: f64) -> anyhow::Result<BirthMoment> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .with_context(|| format!("Invalid date {date:?}, expected YYYY-MM-DD"))?;
    let time = NaiveTime::parse_from_str(time, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M"))
        .with_context(|| format!("Invalid time {time:?}, expected HH:MM or HH:MM:SS"))?;

    let offset_seconds = (utc_offset_hours * 3600.0).round() as i32;
    let offset = FixedOffset::east_opt(offset_seconds)
        .with_context(|| format!("UTC offset out of range: {utc_offset_hours} hours"))?;
    Ok(BirthMoment::with_offset(NaiveDateTime::new(date, time), offset))
}

async fn unavailable_reading(lookup: &InterpretationLookup) -> ChartReading {
    let mut houses = std::collections::BTreeMap::new();
    for number in 1..=lagna::houses::HOUSE_COUNT {
        houses.insert(number, lookup.describe_house(number, None).await);
    }
    ChartReading {
        ascendant: lookup.describe_ascendant(None).await,
        houses,
    }
}

fn print_report(
    label: &str,
    location: GeoCoordinate,
    chart: Option<&BirthChart>,
    reading: &ChartReading,
) {
    println!("== {label} ({:.4}, {:.4})", location.latitude, location.longitude);
    if let Some(chart) = chart {
        let asc = &chart.ascendant;
        println!(
            "Ascendant: {} {:.2}° (ecliptic {:.2}°, element {}, quality {})",
            asc.sign_name(),
            asc.position.rounded_degree(),
            asc.position.rounded_full_degree(),
            asc.position.element(),
            asc.position.quality()
        );
    }
    for line in reading.lines() {
        println!("  {line}");
    }
    println!();
}
