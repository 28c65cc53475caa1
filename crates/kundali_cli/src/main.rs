use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use clap::{ArgAction, Args, Parser, Subcommand};
use kundali_engine::{
    AshtakavargaReport, Ayanamsa, BirthBalance, BirthDetails, DatedPeriod, EngineConfig,
    HouseSystem, InterpretationMetrics, InterpretationRequest, Length, Mood, NatalChart,
    ShadbalaResult, active_dashas, compute_antardashas, compute_ashtakavarga, compute_divisions,
    compute_natal_chart, compute_shadbala, compute_transit, compute_vimshottari, dasha_balance,
    generate_interpretation, vimshottari_hierarchy,
};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "kundali", version, about = "Vedic birth chart engine")]
struct Cli {
    /// Engine configuration file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// More log output on stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    /// Single-line JSON instead of pretty-printed
    #[arg(long, global = true)]
    compact: bool,
    #[command(subcommand)]
    command: Commands,
}

/// Birth data shared by every subcommand.
#[derive(Args)]
struct BirthArgs {
    /// Local date of birth (YYYY-MM-DD)
    #[arg(long)]
    date: NaiveDate,
    /// Local time of birth (HH:MM or HH:MM:SS)
    #[arg(long, value_parser = parse_time)]
    time: NaiveTime,
    /// IANA timezone of the birthplace, e.g. Asia/Kolkata
    #[arg(long)]
    tz: String,
    /// Geographic latitude in degrees, north positive
    #[arg(long, allow_hyphen_values = true)]
    lat: f64,
    /// Geographic longitude in degrees, east positive
    #[arg(long, allow_hyphen_values = true)]
    lon: f64,
    /// House system: whole, equal or placidus
    #[arg(long, default_value = "whole")]
    house_system: HouseSystem,
    /// Ayanamsa: lahiri or tropical
    #[arg(long, default_value = "lahiri")]
    ayanamsa: Ayanamsa,
    /// Label carried into the output
    #[arg(long, default_value = "")]
    name: String,
}

impl BirthArgs {
    fn details(&self) -> BirthDetails {
        BirthDetails::new(
            self.name.clone(),
            self.date,
            self.time,
            self.tz.clone(),
            self.lat,
            self.lon,
        )
        .with_house_system(self.house_system)
        .with_ayanamsa(self.ayanamsa)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Natal chart: sidereal positions and houses
    Chart {
        #[command(flatten)]
        birth: BirthArgs,
    },
    /// Divisional chart (D1..D60)
    Divisions {
        #[command(flatten)]
        birth: BirthArgs,
        /// Chart code or name, e.g. D9, D10, navamsha
        #[arg(long, default_value = "D9")]
        code: String,
    },
    /// Vimshottari periods from birth
    Dasha {
        #[command(flatten)]
        birth: BirthArgs,
        /// Levels to expand, 1 (mahadashas) to 5 (pranadashas)
        #[arg(long)]
        depth: Option<u8>,
        /// Report the periods running at this UTC instant (RFC 3339)
        #[arg(long)]
        at: Option<DateTime<Utc>>,
    },
    /// Antardashas of one mahadasha
    Antardasha {
        #[command(flatten)]
        birth: BirthArgs,
        /// Mahadasha position in the sequence from birth, starting at 1
        #[arg(long, default_value = "1")]
        mahadasha: usize,
    },
    /// Shadbala and Ashtakavarga
    Strength {
        #[command(flatten)]
        birth: BirthArgs,
    },
    /// Current sky against the natal chart
    Transit {
        #[command(flatten)]
        birth: BirthArgs,
        /// UTC instant (RFC 3339); defaults to now
        #[arg(long)]
        at: Option<DateTime<Utc>>,
    },
    /// Narrative reading
    Interpret {
        #[command(flatten)]
        birth: BirthArgs,
        /// anxious, confident, stuck, excited or curious
        #[arg(long, default_value = "curious")]
        mood: Mood,
        /// micro, short or long
        #[arg(long, default_value = "short")]
        length: Length,
        /// UTC instant for transits and current periods (RFC 3339); defaults to now
        #[arg(long)]
        at: Option<DateTime<Utc>>,
        /// Leave the dasha section out
        #[arg(long)]
        no_dasha: bool,
        /// Leave the transit section out
        #[arg(long)]
        no_transit: bool,
        /// Leave the strength section out
        #[arg(long)]
        no_strength: bool,
        /// Print only the narrative at the requested length
        #[arg(long)]
        text: bool,
    },
}

#[derive(Serialize)]
struct DashaOutput {
    balance: BirthBalance,
    levels: Vec<Vec<DatedPeriod>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    active: Option<Vec<DatedPeriod>>,
}

#[derive(Serialize)]
struct StrengthOutput {
    shadbala: Vec<ShadbalaResult>,
    ashtakavarga: AshtakavargaReport,
}

fn parse_time(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .map_err(|e| format!("expected HH:MM or HH:MM:SS: {e}"))
}

/// Logs go to stderr so stdout stays clean JSON.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "kundali_engine=debug,kundali_cli=debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<EngineConfig> {
    match path {
        Some(p) => {
            let config = EngineConfig::load(p)
                .with_context(|| format!("loading config from {}", p.display()))?;
            info!(path = %p.display(), "loaded engine config");
            Ok(config)
        }
        None => Ok(EngineConfig::default()),
    }
}

fn chart(birth: &BirthArgs, config: &EngineConfig) -> Result<(BirthDetails, NatalChart)> {
    let details = birth.details();
    let chart = compute_natal_chart(&details, &config.chart).context("computing natal chart")?;
    Ok((details, chart))
}

fn emit<T: Serialize>(value: &T, compact: bool) -> Result<()> {
    let json = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{json}");
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_ref())?;
    let compact = cli.compact;

    match cli.command {
        Commands::Chart { birth } => {
            let (_, natal) = chart(&birth, &config)?;
            emit(&natal, compact)
        }

        Commands::Divisions { birth, code } => {
            let (details, natal) = chart(&birth, &config)?;
            let varga = compute_divisions(&details, &code, &natal.planets, &natal.houses)
                .with_context(|| format!("computing divisional chart {code}"))?;
            emit(&varga, compact)
        }

        Commands::Dasha { birth, depth, at } => {
            let (details, natal) = chart(&birth, &config)?;
            let depth = depth.unwrap_or(config.dasha.depth);
            debug!(depth, "expanding vimshottari");
            let hierarchy = vimshottari_hierarchy(&details, &natal.planets, depth)?;
            let levels = hierarchy
                .levels
                .iter()
                .map(|level| DatedPeriod::dated(level))
                .collect::<Result<Vec<_>, _>>()?;
            let active = match at {
                Some(at) => {
                    let mahas = hierarchy.levels.first().map(Vec::as_slice).unwrap_or(&[]);
                    let chain = active_dashas(mahas, at, depth)?;
                    Some(DatedPeriod::dated(&chain)?)
                }
                None => None,
            };
            emit(
                &DashaOutput {
                    balance: dasha_balance(&natal.planets)?,
                    levels,
                    active,
                },
                compact,
            )
        }

        Commands::Antardasha { birth, mahadasha } => {
            let (details, natal) = chart(&birth, &config)?;
            let mahas = compute_vimshottari(&details, &natal.planets)?;
            let Some(parent) = mahadasha.checked_sub(1).and_then(|i| mahas.get(i)) else {
                bail!("mahadasha must be between 1 and {}", mahas.len());
            };
            let antars = compute_antardashas(parent)?;
            emit(&DatedPeriod::dated(&antars)?, compact)
        }

        Commands::Strength { birth } => {
            let (_, natal) = chart(&birth, &config)?;
            emit(
                &StrengthOutput {
                    shadbala: compute_shadbala(&natal.planets, &natal.houses)?,
                    ashtakavarga: compute_ashtakavarga(&natal.planets, &natal.houses)?,
                },
                compact,
            )
        }

        Commands::Transit { birth, at } => {
            let (_, natal) = chart(&birth, &config)?;
            let entries = compute_transit(&natal, at, &config).context("computing transits")?;
            emit(&entries, compact)
        }

        Commands::Interpret {
            birth,
            mood,
            length,
            at,
            no_dasha,
            no_transit,
            no_strength,
            text,
        } => {
            let (details, natal) = chart(&birth, &config)?;
            let at = at.unwrap_or_else(Utc::now);
            let mut request = InterpretationRequest::new(natal.clone(), mood, length);
            if !no_dasha {
                let mahas = compute_vimshottari(&details, &natal.planets)?;
                request = request.with_dashas(mahas, Some(at));
            }
            if !no_transit {
                request = request.with_transit(compute_transit(&natal, Some(at), &config)?);
            }
            if !no_strength {
                request = request.with_metrics(InterpretationMetrics {
                    shadbala: compute_shadbala(&natal.planets, &natal.houses)?,
                    ashtakavarga: Some(compute_ashtakavarga(&natal.planets, &natal.houses)?),
                });
            }
            let reading = generate_interpretation(&request)?;
            if text {
                println!("{}", reading.primary());
                Ok(())
            } else {
                emit(&reading, compact)
            }
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    run(cli)
}
