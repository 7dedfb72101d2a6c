use std::path::PathBuf;

use anyhow::{Context, Result, bail, ensure};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use kundali_chart::{ChartConfig, ChartRequest, FixedEphemeris, NodeMode, generate_chart};
use kundali_time::{BirthMoment, datetime_to_jd, estimate_utc_offset, jd_to_datetime};
use kundali_vedic_base::dasha::{
    DashaPeriod, DashaSnapshot, MAX_DASHA_LEVEL, chara_level0, chara_period_years,
    chara_snapshot, horizon_jd, yogini_level0, yogini_snapshot,
};
use kundali_vedic_base::{
    ALL_GRAHAS, GrahaPlacements, SHODASHAVARGA, Varga, kp_lords, nakshatra_from_longitude,
    nakshatra_lord, rashi_from_longitude, validate_longitude, varga_position,
};

#[derive(Parser)]
#[command(name = "kundali", about = "Vedic chart calculator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rashi from sidereal longitude
    Rashi {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
    },
    /// Nakshatra and pada from sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
    },
    /// Varga (divisional chart) placement of one longitude
    Varga {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
        /// Harmonic, e.g. 9 or D9. All 16 when omitted
        #[arg(long)]
        harmonic: Option<String>,
    },
    /// KP sign / nakshatra / sub / sub-sub lords
    Kp {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
    },
    /// Yogini dasha mahadashas and the running period
    Yogini {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Birth time (HH:MM[:SS])
        #[arg(long)]
        time: String,
        /// UTC offset (+05:30 or 5.5)
        #[arg(long, allow_hyphen_values = true)]
        utc_offset: String,
        /// Sidereal Moon longitude in degrees
        #[arg(long)]
        moon: f64,
        /// Query instant (RFC 3339). Defaults to now
        #[arg(long)]
        at: Option<String>,
        /// Years after birth to generate
        #[arg(long, default_value = "120")]
        horizon_years: f64,
        /// Sub-period depth of the running stack (0 = mahadasha only, 4 = prana)
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(0..=4))]
        depth: u8,
    },
    /// Chara (Jaimini) dasha mahadashas and the running period
    Chara {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Birth time (HH:MM[:SS])
        #[arg(long)]
        time: String,
        /// UTC offset (+05:30 or 5.5)
        #[arg(long, allow_hyphen_values = true)]
        utc_offset: String,
        /// Sidereal ascendant longitude in degrees
        #[arg(long)]
        lagna: f64,
        /// 9 comma-separated sidereal longitudes (Sun..Ketu)
        #[arg(long)]
        lons: String,
        /// Query instant (RFC 3339). Defaults to now
        #[arg(long)]
        at: Option<String>,
        /// Years after birth to generate
        #[arg(long, default_value = "120")]
        horizon_years: f64,
        /// Sub-period depth of the running stack (0 = mahadasha only, 4 = prana)
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(0..=4))]
        depth: u8,
    },
    /// Full chart document as JSON from a positions snapshot
    Chart {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Birth time (HH:MM[:SS])
        #[arg(long)]
        time: String,
        /// UTC offset (+05:30 or 5.5). Estimated from longitude when omitted
        #[arg(long, allow_hyphen_values = true)]
        utc_offset: Option<String>,
        /// Latitude in degrees north
        #[arg(long, allow_hyphen_values = true)]
        lat: Option<f64>,
        /// Longitude in degrees east
        #[arg(long, allow_hyphen_values = true)]
        lon: Option<f64>,
        /// JSON ephemeris snapshot (ascendant, cusps, bodies)
        #[arg(long)]
        positions: PathBuf,
        /// Comma-separated harmonics. All 16 when omitted
        #[arg(long)]
        harmonics: Option<String>,
        /// Use the true node instead of the mean node
        #[arg(long)]
        true_node: bool,
        /// Query instant for current dashas (RFC 3339). Defaults to now
        #[arg(long)]
        at: Option<String>,
        /// Years after birth to generate dashas for
        #[arg(long, default_value = "120")]
        horizon_years: f64,
        /// Depth of the running dasha stack (0-4)
        #[arg(long, default_value_t = MAX_DASHA_LEVEL, value_parser = clap::value_parser!(u8).range(0..=4))]
        dasha_depth: u8,
    },
}

fn parse_at(at: Option<&str>) -> Result<DateTime<Utc>> {
    match at {
        Some(s) => s
            .parse::<DateTime<Utc>>()
            .with_context(|| format!("invalid --at instant '{s}'")),
        None => Ok(Utc::now()),
    }
}

/// A finite sidereal longitude, normalized to [0, 360).
fn longitude(deg: f64) -> Result<f64> {
    validate_longitude(deg).with_context(|| format!("invalid longitude {deg}"))
}

fn parse_nine_longitudes(s: &str) -> Result<[f64; 9]> {
    let vals = s
        .split(',')
        .map(|v| {
            let deg = v
                .trim()
                .parse::<f64>()
                .with_context(|| format!("invalid longitude '{v}'"))?;
            longitude(deg)
        })
        .collect::<Result<Vec<_>>>()?;
    let n = vals.len();
    vals.try_into()
        .map_err(|_| anyhow::anyhow!("expected 9 comma-separated longitudes, got {n}"))
}

fn parse_harmonics(s: &str) -> Result<Vec<u16>> {
    s.split(',')
        .map(|h| -> Result<u16> { Ok(Varga::parse(h.trim())?.divisions()) })
        .collect()
}

fn print_periods(periods: &[DashaPeriod], snapshot: &DashaSnapshot) -> Result<()> {
    println!("{} Dasha\n", snapshot.system.name());
    for p in periods {
        let marker = if snapshot.mahadasha() == Some(p) { "*" } else { " " };
        println!(
            "{marker} {:<12} {} .. {}  ({:.2} y)",
            p.entity.name(),
            jd_to_datetime(p.start_jd)?.format("%Y-%m-%d"),
            jd_to_datetime(p.end_jd)?.format("%Y-%m-%d"),
            p.duration_years()
        );
    }
    let Some(innermost) = snapshot.periods.last() else {
        println!("\nQuery time is outside the generated range");
        return Ok(());
    };
    let chain: Vec<_> = snapshot.periods.iter().map(|p| p.entity.name()).collect();
    println!(
        "\nRunning: {} (until {})",
        chain.join(" / "),
        jd_to_datetime(innermost.end_jd)?.format("%Y-%m-%d")
    );
    for p in &snapshot.periods {
        debug!(
            level = p.level.name(),
            entity = p.entity.name(),
            start_jd = p.start_jd,
            end_jd = p.end_jd,
            "running period"
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Rashi { lon } => {
            let info = rashi_from_longitude(longitude(lon)?);
            let dms = info.dms;
            println!(
                "{} ({}) - {} deg {} min {:.1} sec ({:.4} deg in rashi)",
                info.rashi.name(),
                info.rashi.western_name(),
                dms.degrees,
                dms.minutes,
                dms.seconds,
                info.degrees_in_rashi
            );
        }

        Commands::Nakshatra { lon } => {
            let info = nakshatra_from_longitude(longitude(lon)?);
            println!(
                "{} (#{}) - Pada {} - lord {} ({:.4} deg in nakshatra)",
                info.nakshatra.name(),
                info.nakshatra.number(),
                info.pada,
                nakshatra_lord(info.nakshatra_index).english_name(),
                info.degrees_in_nakshatra
            );
        }

        Commands::Varga { lon, harmonic } => {
            let lon = longitude(lon)?;
            let vargas = match harmonic {
                Some(h) => vec![Varga::parse(&h)?],
                None => SHODASHAVARGA.to_vec(),
            };
            for v in vargas {
                let pos = varga_position(lon, v);
                println!(
                    "{:<4} {:<17} {:<12} {:>8.4} deg",
                    v.to_string(),
                    v.name(),
                    pos.rashi.western_name(),
                    pos.degrees_in_rashi
                );
            }
        }

        Commands::Kp { lon } => {
            let lords = kp_lords(longitude(lon)?);
            println!("Sign lord:      {}", lords.sign_lord.english_name());
            println!("Nakshatra lord: {}", lords.nakshatra_lord.english_name());
            println!("Sub lord:       {}", lords.sub_lord.english_name());
            println!("Sub-sub lord:   {}", lords.sub_sub_lord.english_name());
        }

        Commands::Yogini {
            date,
            time,
            utc_offset,
            moon,
            at,
            horizon_years,
            depth,
        } => {
            let moon = longitude(moon)?;
            let birth = BirthMoment::parse(&date, &time, &utc_offset)?;
            let query_jd = datetime_to_jd(&parse_at(at.as_deref())?);
            let birth_jd = birth.jd_ut();
            let horizon = horizon_jd(birth_jd, horizon_years)?;
            let periods = yogini_level0(birth_jd, moon, horizon);
            let snapshot = yogini_snapshot(birth_jd, moon, horizon, query_jd, depth);
            print_periods(&periods, &snapshot)?;
        }

        Commands::Chara {
            date,
            time,
            utc_offset,
            lagna,
            lons,
            at,
            horizon_years,
            depth,
        } => {
            let birth = BirthMoment::parse(&date, &time, &utc_offset)?;
            let query_jd = datetime_to_jd(&parse_at(at.as_deref())?);
            let placements = GrahaPlacements::from_longitudes(parse_nine_longitudes(&lons)?);
            let lagna = rashi_from_longitude(longitude(lagna)?).rashi;
            let birth_jd = birth.jd_ut();
            let horizon = horizon_jd(birth_jd, horizon_years)?;
            for g in ALL_GRAHAS {
                debug!(
                    graha = g.english_name(),
                    rashi = placements.rashi_of(g).name(),
                    "placement"
                );
            }
            debug!(
                lagna = lagna.name(),
                years = chara_period_years(lagna, &placements),
                "chara lagna"
            );
            let periods = chara_level0(birth_jd, lagna, &placements, horizon);
            let snapshot = chara_snapshot(birth_jd, lagna, &placements, horizon, query_jd, depth);
            print_periods(&periods, &snapshot)?;
        }

        Commands::Chart {
            date,
            time,
            utc_offset,
            lat,
            lon,
            positions,
            harmonics,
            true_node,
            at,
            horizon_years,
            dasha_depth,
        } => {
            if let Some(lon) = lon {
                ensure!(
                    lon.is_finite() && (-180.0..=180.0).contains(&lon),
                    "--lon must be within [-180, 180], got {lon}"
                );
            }
            let offset = match (utc_offset, lon) {
                (Some(s), _) => s,
                (None, Some(lon)) => estimate_utc_offset(lon).to_string(),
                (None, None) => bail!("--utc-offset or --lon is required"),
            };
            let birth = BirthMoment::parse(&date, &time, &offset)?;
            let mut request = ChartRequest::new(birth).at(parse_at(at.as_deref())?);
            request.latitude = lat;
            request.longitude = lon;

            let mut config = ChartConfig {
                dasha_horizon_years: horizon_years,
                dasha_max_level: dasha_depth,
                ..ChartConfig::default()
            };
            if let Some(h) = harmonics {
                config.harmonics = parse_harmonics(&h)?;
            }
            if true_node {
                config.node_mode = NodeMode::True;
            }

            let json = std::fs::read_to_string(&positions)
                .with_context(|| format!("reading {}", positions.display()))?;
            let provider = FixedEphemeris::from_json(&json)?;
            let doc = generate_chart(&request, &config, &provider)?;
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
    }

    Ok(())
}
