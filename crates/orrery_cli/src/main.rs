use std::path::PathBuf;

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use log::debug;
use serde::Serialize;

use orrery_config::OrreryConfig;
use orrery_core::{ALL_BODIES, KeplerianEphemeris};
use orrery_lunar::{MoonPhaseRecord, forecast_with, phase_for};
use orrery_zodiac::{
    AscendantSlot, ChartBuilder, ChartRecord, GeoInstant, GeoLocation, Placement,
    ascendant_position_with, sign_position,
};

#[derive(Parser)]
#[command(name = "orrery", about = "Zodiac charts and moon phases", version)]
struct Cli {
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    /// TOML config file (default: $ORRERY_CONFIG, else built-in settings)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Zodiac sign of an ecliptic longitude
    Sign {
        /// Ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Rising sign for an instant and place
    Ascendant {
        /// RFC 3339 datetime (e.g. 1990-05-17T08:30:00+02:00)
        #[arg(long)]
        date: String,
        /// Latitude in degrees, north positive
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        /// Longitude in degrees, east positive
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
    },
    /// Natal chart: body signs plus ascendant
    Natal {
        /// RFC 3339 birth datetime
        #[arg(long)]
        date: String,
        /// Birth latitude in degrees, north positive
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        /// Birth longitude in degrees, east positive
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
        /// Also build a transit chart for the current time
        #[arg(long)]
        with_transit: bool,
    },
    /// Transit chart: body signs at an instant
    Transit {
        /// RFC 3339 datetime (default: now)
        #[arg(long)]
        date: Option<String>,
    },
    /// Moon phase for a date
    Moon {
        /// Calendar date YYYY-MM-DD (default: today, UTC)
        #[arg(long)]
        date: Option<String>,
    },
    /// Moon phases for the days after a date
    Forecast {
        /// Calendar date YYYY-MM-DD (default: today, UTC)
        #[arg(long)]
        date: Option<String>,
        /// Number of days
        #[arg(long, default_value = "7")]
        days: u32,
    },
}

fn parse_instant(s: &str) -> Result<DateTime<FixedOffset>, String> {
    DateTime::parse_from_rfc3339(s).map_err(|e| format!("expected RFC 3339 datetime, got {s}: {e}"))
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("expected YYYY-MM-DD, got {s}: {e}"))
}

fn exit_with(msg: impl std::fmt::Display) -> ! {
    eprintln!("{msg}");
    std::process::exit(1);
}

fn require_instant(s: &str) -> DateTime<FixedOffset> {
    parse_instant(s).unwrap_or_else(|e| exit_with(e))
}

fn require_date(s: Option<&str>) -> NaiveDate {
    match s {
        Some(s) => parse_date(s).unwrap_or_else(|e| exit_with(e)),
        None => Utc::now().date_naive(),
    }
}

fn require_geo_instant(date: &str, lat: f64, lon: f64) -> GeoInstant {
    let location = GeoLocation::new(lat, lon).unwrap_or_else(|e| exit_with(e));
    GeoInstant::new(&require_instant(date), location)
}

fn load_config(path: Option<&PathBuf>) -> OrreryConfig {
    let loaded = match path {
        Some(p) => OrreryConfig::load(p),
        None => OrreryConfig::from_env(),
    };
    loaded.unwrap_or_else(|e| exit_with(format!("Failed to load config: {e}")))
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => exit_with(format!("Failed to encode JSON: {e}")),
    }
}

fn print_chart(title: &str, chart: &ChartRecord) {
    match chart.location() {
        Some(loc) => println!(
            "{title} {} ({:.4}, {:.4})",
            chart.instant().format("%Y-%m-%d %H:%M:%S UTC"),
            loc.latitude_deg(),
            loc.longitude_deg()
        ),
        None => println!("{title} {}", chart.instant().format("%Y-%m-%d %H:%M:%S UTC")),
    }
    for body in ALL_BODIES {
        match chart.placement(body) {
            Placement::Resolved(pos) => {
                println!("  {} {:<8} {pos}  ({:.4} deg)", body.glyph(), body.name(), pos.longitude_deg)
            }
            Placement::Unresolved { .. } => println!("  {} {:<8} --", body.glyph(), body.name()),
        }
    }
    match chart.ascendant() {
        AscendantSlot::Resolved(pos) => {
            println!("  ↑ {:<8} {pos}  ({:.4} deg)", "Asc", pos.longitude_deg)
        }
        AscendantSlot::Failed { .. } => println!("  ↑ {:<8} --", "Asc"),
        AscendantSlot::NotRequested => {}
    }
    for w in chart.warnings() {
        println!("  warning: {w}");
    }
}

fn print_moon(r: &MoonPhaseRecord) {
    let when = r.label.clone().unwrap_or_else(|| r.date.to_string());
    println!(
        "{when}: {} {} - {}% lit, day {} - {}",
        r.glyph, r.name, r.illumination_percent, r.age_days, r.mood
    );
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref());
    debug!("config: {config:?}");

    let eph = KeplerianEphemeris::with_config(config.kepler_config());
    let builder = ChartBuilder::new(&eph).with_ascendant_config(config.ascendant_config());

    match cli.command {
        Commands::Sign { lon } => {
            let pos = sign_position(lon).unwrap_or_else(|e| exit_with(e));
            if cli.json {
                print_json(&pos);
            } else {
                println!(
                    "{} {} - {pos} ({:.4} deg in sign)",
                    pos.sign.glyph(),
                    pos.sign,
                    pos.degrees_in_sign
                );
            }
        }

        Commands::Ascendant { date, lat, lon } => {
            let at = require_geo_instant(&date, lat, lon);
            let pos = ascendant_position_with(&config.ascendant_config(), &at)
                .unwrap_or_else(|e| exit_with(e));
            if cli.json {
                print_json(&pos);
            } else {
                println!("Ascendant: {pos} ({:.4} deg)", pos.longitude_deg);
            }
        }

        Commands::Natal {
            date,
            lat,
            lon,
            with_transit,
        } => {
            let at = require_geo_instant(&date, lat, lon);
            if with_transit {
                let pair = builder.build_pair(&at, &Utc::now());
                if cli.json {
                    print_json(&pair);
                } else {
                    print_chart("Natal", &pair.natal);
                    println!();
                    print_chart("Transit", &pair.transit);
                }
            } else {
                let chart = builder.build_natal(&at);
                if cli.json {
                    print_json(&chart);
                } else {
                    print_chart("Natal", &chart);
                }
            }
        }

        Commands::Transit { date } => {
            let chart = match date {
                Some(d) => builder.build_transit(&require_instant(&d)),
                None => builder.build_transit(&Utc::now()),
            };
            if cli.json {
                print_json(&chart);
            } else {
                print_chart("Transit", &chart);
            }
        }

        Commands::Moon { date } => {
            let record = phase_for(require_date(date.as_deref()));
            if cli.json {
                print_json(&record);
            } else {
                print_moon(&record);
                println!("  {}", record.dream);
            }
        }

        Commands::Forecast { date, days } => {
            let start = require_date(date.as_deref());
            let records: Vec<MoonPhaseRecord> = forecast_with(&config.forecast_config(), start, days)
                .unwrap_or_else(|e| exit_with(e))
                .collect();
            if cli.json {
                print_json(&records);
            } else {
                for r in &records {
                    print_moon(r);
                }
            }
        }
    }
}
