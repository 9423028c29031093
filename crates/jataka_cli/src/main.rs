use clap::{Parser, Subcommand};
use jataka_time::LocalCivilTime;
use jataka_vedic::{
    AyanamshaSystem, Graha, LunarNode, NodeMode, ayanamsha_deg, deg_to_dms, dignity_of,
    jd_ut_to_centuries, lunar_node_deg, nakshatra_from_longitude, rashi_from_longitude,
    sidereal_ascendant_deg, whole_sign_houses,
};

#[derive(Parser)]
#[command(name = "jataka", about = "Jataka sidereal chart CLI")]
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
    /// Convert degrees to DMS
    Dms {
        /// Angle in decimal degrees
        deg: f64,
    },
    /// Ayanamsha at a Julian Day (UT)
    Ayanamsha {
        /// Julian Date UT
        jd: f64,
        /// Ayanamsha system code (0-4, default 0=Lahiri)
        #[arg(long, default_value = "0")]
        system: i32,
    },
    /// Julian Day (UT) from a local civil datetime
    Jd {
        /// Local datetime (YYYY-MM-DDThh:mm:ss)
        date: String,
        /// UTC offset in hours (east positive, IST = 5.5)
        #[arg(long, default_value = "0")]
        offset: f64,
    },
    /// Sidereal ascendant for an epoch and location
    Lagna {
        /// Julian Date UT
        #[arg(long)]
        jd: f64,
        /// Latitude in degrees (north positive)
        #[arg(long)]
        lat: f64,
        /// Longitude in degrees (east positive)
        #[arg(long)]
        lon: f64,
        /// Ayanamsha system code (0-4, default 0=Lahiri)
        #[arg(long, default_value = "0")]
        system: i32,
    },
    /// Whole-sign houses from the lagna's sidereal longitude
    Houses {
        /// Sidereal ascendant longitude in degrees
        lon: f64,
    },
    /// Lunar node longitudes at a Julian Day (UT)
    Node {
        /// Julian Date UT
        jd: f64,
        /// Use the perturbation-corrected true node
        #[arg(long = "true")]
        true_node: bool,
    },
    /// Dignity of a graha at a sidereal longitude
    Dignity {
        /// Graha name (Sun, Moon, ... Rahu, Ketu)
        graha: String,
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
    },
}

fn aya_system_from_code(code: i32) -> Option<AyanamshaSystem> {
    match code {
        0 => Some(AyanamshaSystem::Lahiri),
        1 => Some(AyanamshaSystem::KP),
        2 => Some(AyanamshaSystem::Raman),
        3 => Some(AyanamshaSystem::FaganBradley),
        4 => Some(AyanamshaSystem::Yukteshwar),
        _ => None,
    }
}

fn require_aya_system(code: i32) -> AyanamshaSystem {
    aya_system_from_code(code).unwrap_or_else(|| {
        eprintln!("Invalid ayanamsha code: {code} (0-4)");
        std::process::exit(1);
    })
}

fn graha_from_name(s: &str) -> Graha {
    let found = jataka_vedic::ALL_GRAHAS
        .iter()
        .find(|g| g.name().eq_ignore_ascii_case(s));
    match found {
        Some(&g) => g,
        None => {
            eprintln!("Invalid graha name: {s}");
            eprintln!("Valid: Sun, Moon, Mars, Mercury, Jupiter, Venus, Saturn, Rahu, Ketu");
            std::process::exit(1);
        }
    }
}

/// Parse "YYYY-MM-DDThh:mm:ss" into a civil time with the given offset.
fn parse_local(s: &str, offset: f64) -> Result<LocalCivilTime, String> {
    let bytes = s.as_bytes();
    if bytes.len() != 19 || bytes[4] != b'-' || bytes[7] != b'-' || bytes[10] != b'T'
        || bytes[13] != b':' || bytes[16] != b':'
    {
        return Err(format!("expected YYYY-MM-DDThh:mm:ss, got {s}"));
    }
    let field = |range: std::ops::Range<usize>| -> Result<i64, String> {
        s[range.clone()]
            .parse()
            .map_err(|_| format!("bad number in {s}"))
    };
    Ok(LocalCivilTime::new(
        field(0..4)? as i32,
        field(5..7)? as u32,
        field(8..10)? as u32,
        field(11..13)? as u32,
        field(14..16)? as u32,
        field(17..19)? as f64,
        offset,
    ))
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Rashi { lon } => {
            let info = rashi_from_longitude(lon);
            let dms = info.dms;
            println!(
                "{} ({}) - {} deg {} min {:.1} sec ({:.4} deg in rashi)",
                info.rashi.name(),
                info.rashi.sanskrit_name(),
                dms.degrees,
                dms.minutes,
                dms.seconds,
                info.degrees_in_rashi
            );
        }

        Commands::Nakshatra { lon } => {
            let info = nakshatra_from_longitude(lon);
            println!(
                "{} (index {}) - Pada {} - Lord {} ({:.4} deg in nakshatra)",
                info.nakshatra.name(),
                info.nakshatra_index,
                info.pada,
                info.lord.name(),
                info.degrees_in_nakshatra
            );
        }

        Commands::Dms { deg } => {
            let dms = deg_to_dms(deg);
            println!("{} deg {} min {:.4} sec", dms.degrees, dms.minutes, dms.seconds);
        }

        Commands::Ayanamsha { jd, system } => {
            let system = require_aya_system(system);
            let aya = ayanamsha_deg(system, jd_ut_to_centuries(jd));
            let dms = deg_to_dms(aya);
            println!(
                "{system:?} ayanamsha at JD {jd}: {aya:.6} deg ({} deg {} min {:.1} sec)",
                dms.degrees, dms.minutes, dms.seconds
            );
        }

        Commands::Jd { date, offset } => {
            let civil = parse_local(&date, offset).unwrap_or_else(|e| {
                eprintln!("{e}");
                std::process::exit(1);
            });
            match civil.to_jd_ut() {
                Ok(jd) => println!("{civil} -> JD {jd:.6} UT"),
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Lagna { jd, lat, lon, system } => {
            let system = require_aya_system(system);
            match sidereal_ascendant_deg(jd, lat, lon, system) {
                Ok(asc) => {
                    let info = rashi_from_longitude(asc);
                    println!(
                        "Lagna {asc:.4} deg - {} ({:.4} deg in rashi)",
                        info.rashi.name(),
                        info.degrees_in_rashi
                    );
                }
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Houses { lon } => {
            let lagna = rashi_from_longitude(lon).rashi;
            for house in whole_sign_houses(lagna) {
                println!(
                    "House {:>2}: {} (lord {})",
                    house.number,
                    house.rashi.name(),
                    house.lord.name()
                );
            }
        }

        Commands::Node { jd, true_node } => {
            let mode = if true_node { NodeMode::True } else { NodeMode::Mean };
            let t = jd_ut_to_centuries(jd);
            let rahu = lunar_node_deg(LunarNode::Rahu, t, mode);
            let ketu = lunar_node_deg(LunarNode::Ketu, t, mode);
            println!("Rahu {rahu:.4} deg, Ketu {ketu:.4} deg ({mode:?} node, tropical)");
        }

        Commands::Dignity { graha, lon } => {
            let graha = graha_from_name(&graha);
            let info = rashi_from_longitude(lon);
            let dignity = dignity_of(graha, lon);
            println!(
                "{} at {:.4} deg ({}) - {}",
                graha.name(),
                lon,
                info.rashi.name(),
                dignity.name()
            );
        }
    }
}
