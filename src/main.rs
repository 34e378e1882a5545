use atmoss::coordinates::{solar_position, SolarPosition};
use atmoss::models::{AtmosphereModel, ProfileRecord};
use atmoss::physics::profile::sample;
use atmoss::physics::{CeilingPolicy, EarthAtmosphere, MarsAtmosphere, MarsProfile};
use chrono::DateTime;
use clap::{Args, Parser, Subcommand};
use csv::Writer;
use std::error::Error;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "atmoss", about = "Reference atmospheres and sun angles as CSV")]
struct Cli {
    /// Write CSV here instead of stdout
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Standard atmosphere profile over geopotential altitude in meters
    Earth {
        #[command(flatten)]
        sweep: Sweep,
        /// Keep using the top layer above 84852 m instead of failing
        #[arg(long)]
        extrapolate: bool,
    },
    /// Mars reference atmosphere profile over altitude in kilometers
    Mars {
        #[command(flatten)]
        sweep: Sweep,
        /// CSV with altitude_km,temperature_k,pressure_pa,density_kg_m3 columns
        #[arg(long)]
        profile: Option<PathBuf>,
    },
    /// Sun angles for one place and time
    Sun {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        /// RFC 3339 timestamp with offset, e.g. 2024-06-21T14:30:00+02:00
        #[arg(long, conflicts_with_all = ["day", "hour", "minute", "utc_offset"])]
        datetime: Option<String>,
        #[arg(long, default_value_t = 1.0)]
        day: f64,
        #[arg(long, default_value_t = 12.0)]
        hour: f64,
        #[arg(long, default_value_t = 0.0)]
        minute: f64,
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        utc_offset: f64,
    },
}

#[derive(Args, Debug)]
struct Sweep {
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    start: f64,
    #[arg(long, allow_hyphen_values = true)]
    stop: f64,
    #[arg(long, allow_hyphen_values = true)]
    step: f64,
}

fn main() -> Result<(), Box<dyn Error>> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mut writer = Writer::from_writer(open_output(cli.output.as_ref())?);

    match cli.command {
        Command::Earth { sweep, extrapolate } => {
            let policy = if extrapolate {
                CeilingPolicy::ExtrapolateTopLayer
            } else {
                CeilingPolicy::Fail
            };
            let model = EarthAtmosphere::standard().with_ceiling_policy(policy);
            if extrapolate && sweep.start.max(sweep.stop) > model.ceiling_m() {
                warn!(
                    ceiling_m = model.ceiling_m(),
                    "Sweep extends above the model ceiling, extrapolating the top layer"
                );
            }
            write_profile(&mut writer, &model, &sweep)?;
        }
        Command::Mars { sweep, profile } => {
            let model = match profile {
                Some(path) => {
                    info!("Loading Mars profile from {}", path.display());
                    MarsAtmosphere::new(MarsProfile::from_csv_reader(File::open(path)?)?)
                }
                None => MarsAtmosphere::reference(),
            };
            write_profile(&mut writer, &model, &sweep)?;
        }
        Command::Sun {
            lat,
            lon,
            datetime,
            day,
            hour,
            minute,
            utc_offset,
        } => {
            let position = match datetime {
                Some(text) => {
                    let local = DateTime::parse_from_rfc3339(&text)?;
                    SolarPosition::from_datetime(&local, lat, lon)
                }
                None => solar_position(day, hour, minute, lat, lon, utc_offset),
            };
            writer.serialize(position)?;
        }
    }

    writer.flush()?;
    if let Some(path) = &cli.output {
        info!("Data has been written to {}", path.display());
    }

    Ok(())
}

fn open_output(path: Option<&PathBuf>) -> Result<Box<dyn Write>, Box<dyn Error>> {
    match path {
        Some(path) => {
            if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
                fs::create_dir_all(dir)?;
            }
            Ok(Box::new(File::create(path)?))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

fn write_profile<M, W>(
    writer: &mut Writer<W>,
    model: &M,
    sweep: &Sweep,
) -> Result<(), Box<dyn Error>>
where
    M: AtmosphereModel,
    M::State: ProfileRecord,
    W: Write,
{
    let rows = sample(model, sweep.start, sweep.stop, sweep.step)?;
    info!(rows = rows.len(), "Sampled atmosphere profile");

    let altitude_header = format!("Altitude ({})", M::ALTITUDE_UNIT);
    let mut header = vec![altitude_header.as_str()];
    header.extend_from_slice(<M::State as ProfileRecord>::header());
    writer.write_record(&header)?;

    for (altitude, state) in rows {
        let mut record = vec![altitude.to_string()];
        record.extend(state.values().iter().map(|v| v.to_string()));
        writer.write_record(&record)?;
    }

    Ok(())
}
