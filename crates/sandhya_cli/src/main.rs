use clap::{Parser, Subcommand};
use sandhya_score::{
    AtmosphericInput, CloudType, OutlookTier, PredictionResult, evaluate, evaluate_at,
};
use sandhya_solar::{GeoCoordinate, SolarDay, SunTimesResult, next_event, sun_times_for};
use sandhya_time::{CivilDate, LocalMoment};
use sandhya_weather::{approximate_place, simulated_conditions};

#[derive(Parser)]
#[command(name = "sandhya", about = "Sunrise/sunset beauty predictor CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score atmospheric conditions
    Predict {
        /// Cloud cover percentage (0-100)
        #[arg(long)]
        cloud_cover: f64,
        /// Cloud genus: cirrus, cumulus, stratus, nimbostratus, cumulonimbus
        #[arg(long)]
        cloud_type: String,
        /// Relative humidity percentage (0-100)
        #[arg(long)]
        humidity: f64,
        /// Aerosol index (0-5)
        #[arg(long)]
        aerosol: f64,
        /// Air Quality Index (0-300+)
        #[arg(long)]
        aqi: f64,
        /// Latitude in degrees (requires --lon and --now)
        #[arg(long, allow_negative_numbers = true)]
        lat: Option<f64>,
        /// Longitude in degrees
        #[arg(long, allow_negative_numbers = true)]
        lon: Option<f64>,
        /// Local datetime (YYYY-MM-DDThh:mm)
        #[arg(long)]
        now: Option<String>,
        /// UTC offset in minutes (UTC minus local, positive west)
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        tz_offset: i32,
    },
    /// Sunrise/sunset times for a date
    SunTimes {
        /// Latitude in degrees
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        /// Longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
        /// Calendar date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// UTC offset in minutes (UTC minus local, positive west)
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        tz_offset: i32,
    },
    /// Next upcoming sun event
    NextEvent {
        /// Latitude in degrees
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        /// Longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
        /// Local datetime (YYYY-MM-DDThh:mm)
        #[arg(long)]
        now: String,
        /// UTC offset in minutes (UTC minus local, positive west)
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        tz_offset: i32,
    },
    /// Score simulated conditions for a site (no-network fallback)
    Simulate {
        /// Latitude in degrees
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        /// Longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
        /// Calendar date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Simulation seed
        #[arg(long, default_value = "0")]
        seed: u64,
    },
}

fn parse_date(s: &str) -> CivilDate {
    CivilDate::parse(s).unwrap_or_else(|e| {
        eprintln!("Invalid date '{s}': {e}");
        std::process::exit(1);
    })
}

fn parse_moment(s: &str) -> LocalMoment {
    LocalMoment::parse(s).unwrap_or_else(|e| {
        eprintln!("Invalid datetime '{s}': {e}");
        std::process::exit(1);
    })
}

fn parse_cloud_type(s: &str) -> CloudType {
    CloudType::from_name(&s.to_lowercase()).unwrap_or_else(|| {
        eprintln!("Invalid cloud type: {s}");
        eprintln!("Valid: cirrus, cumulus, stratus, nimbostratus, cumulonimbus");
        std::process::exit(1);
    })
}

fn print_prediction(result: &PredictionResult) {
    let tier = OutlookTier::from_probability(result.probability);
    println!("Probability: {:.0}%", result.probability * 100.0);
    println!("Outlook: {}", tier.message());
    println!();
    let rows = [
        ("Cloud cover", result.factors.cloud_cover),
        ("Cloud type", result.factors.cloud_type),
        ("Humidity", result.factors.humidity),
        ("Aerosol", result.factors.aerosol),
        ("Air quality", result.factors.air_quality),
    ];
    for (label, factor) in rows {
        println!("{label:12} {:+.2}  {}", factor.score, factor.description);
    }
    match &result.sun_times {
        Some(SunTimesResult::Times(times)) => {
            println!();
            println!("Sunrise: {}", times.sunrise);
            println!("Sunset: {}", times.sunset);
            println!(
                "Next event: {} at {}",
                times.next_event.name(),
                times.next_event_time
            );
        }
        Some(SunTimesResult::NeverSets) => {
            println!();
            println!("Continuous daylight today (midnight sun)");
        }
        Some(SunTimesResult::NeverRises) => {
            println!();
            println!("Continuous darkness today (polar night)");
        }
        None => {}
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Predict {
            cloud_cover,
            cloud_type,
            humidity,
            aerosol,
            aqi,
            lat,
            lon,
            now,
            tz_offset,
        } => {
            let input = AtmosphericInput {
                cloud_cover_pct: cloud_cover,
                cloud_type: parse_cloud_type(&cloud_type),
                humidity_pct: humidity,
                aerosol_index: aerosol,
                air_quality_index: aqi,
            };
            let result = match (lat, lon, now) {
                (Some(lat), Some(lon), Some(now)) => evaluate_at(
                    &input,
                    GeoCoordinate::new(lat, lon),
                    parse_moment(&now),
                    tz_offset,
                ),
                (None, None, None) => evaluate(&input),
                _ => {
                    eprintln!("--lat, --lon, and --now must be given together");
                    std::process::exit(1);
                }
            };
            print_prediction(&result);
        }
        Commands::SunTimes {
            lat,
            lon,
            date,
            tz_offset,
        } => {
            let coord = GeoCoordinate::new(lat, lon);
            match sun_times_for(coord, parse_date(&date), tz_offset) {
                SolarDay::Crossings { sunrise, sunset } => {
                    println!("Sunrise: {}", sunrise.format_clock());
                    println!("Sunset: {}", sunset.format_clock());
                }
                SolarDay::NeverSets => println!("Continuous daylight (midnight sun)"),
                SolarDay::NeverRises => println!("Continuous darkness (polar night)"),
            }
        }
        Commands::NextEvent {
            lat,
            lon,
            now,
            tz_offset,
        } => {
            let coord = GeoCoordinate::new(lat, lon);
            match next_event(coord, parse_moment(&now), tz_offset) {
                SunTimesResult::Times(times) => {
                    println!("Sunrise: {}", times.sunrise);
                    println!("Sunset: {}", times.sunset);
                    println!(
                        "Next event: {} at {}",
                        times.next_event.name(),
                        times.next_event_time
                    );
                }
                SunTimesResult::NeverSets => println!("Continuous daylight (midnight sun)"),
                SunTimesResult::NeverRises => println!("Continuous darkness (polar night)"),
            }
        }
        Commands::Simulate {
            lat,
            lon,
            date,
            seed,
        } => {
            let coord = GeoCoordinate::new(lat, lon);
            let input = simulated_conditions(coord, parse_date(&date), seed);
            let place = approximate_place(coord);
            println!("Site: {}, {}", place.city, place.country);
            println!(
                "Conditions: cover {:.0}%, {}, humidity {:.0}%, aerosol {:.1}, AQI {:.0}",
                input.cloud_cover_pct,
                input.cloud_type.name(),
                input.humidity_pct,
                input.aerosol_index,
                input.air_quality_index
            );
            println!();
            print_prediction(&evaluate(&input));
        }
    }
}
