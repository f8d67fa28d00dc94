//! freekick: headless runner for the free-kick simulator.
//!
//! Usage:
//!   freekick shoot --power 0.6 --lateral 0.25 --vertical 0.3 --mode curl
//!   freekick batch --count 500 --difficulty elite
//!   freekick level --id 1 --dir ./progress

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use freekick_campaign::progress::{load_or_default, save_progress};
use freekick_campaign::{default_levels, select_level, LevelSession, SessionStatus};
use freekick_core::commands::{AimDirection, ShotParameters};
use freekick_core::enums::{Difficulty, ShotMode};
use freekick_core::tuning::{load_tuning, Tuning};
use freekick_sim::{ShotSimulator, SimConfig};

fn main() {
    env_logger::init();
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "shoot" => cmd_shoot(&args[2..]),
        "batch" => cmd_batch(&args[2..]),
        "level" => cmd_level(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "freekick: headless free-kick simulator\n\
         \n\
         Commands:\n\
         \n\
         shoot     Fire a single shot and print the outcome\n\
         \n\
           --power <0..1>       Shot power (default: 0.6)\n\
           --lateral <-0.55..0.55> Lateral aim (default: 0)\n\
           --vertical <-0.1..1.05> Loft (default: 0)\n\
           --mode <curl|dip|knuckle> Shot mode (default: curl)\n\
           --json               Print the result as JSON\n\
         \n\
         batch     Fire N random shots and print an outcome histogram\n\
         \n\
           --count <N>          Number of shots (default: 100)\n\
         \n\
         level     Auto-play a level with random shots and update progress\n\
         \n\
           --id <N>             Level id (default: 1)\n\
           --dir <path>         Progress directory (default: .)\n\
         \n\
         Common options:\n\
         \n\
           --seed <N>           RNG seed (default: 42)\n\
           --difficulty <casual|classic|elite> (default: classic)\n\
           --tuning <path>      Tuning JSON, overrides --difficulty\n"
    );
}

fn flag_value<'a>(args: &'a [String], name: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|pair| pair[0] == name)
        .map(|pair| pair[1].as_str())
}

fn has_flag(args: &[String], name: &str) -> bool {
    args.iter().any(|a| a == name)
}

fn parse_or_exit<T: std::str::FromStr>(args: &[String], name: &str, default: T) -> T {
    match flag_value(args, name) {
        None => default,
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            eprintln!("Error: invalid value for {name}: {raw}");
            process::exit(1);
        }),
    }
}

fn parse_mode(args: &[String]) -> ShotMode {
    match flag_value(args, "--mode").map(str::to_ascii_lowercase).as_deref() {
        None | Some("curl") => ShotMode::Curl,
        Some("dip") => ShotMode::Dip,
        Some("knuckle") => ShotMode::Knuckle,
        Some(other) => {
            eprintln!("Error: unknown mode: {other}");
            process::exit(1);
        }
    }
}

fn parse_difficulty(args: &[String]) -> Difficulty {
    match flag_value(args, "--difficulty")
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        None | Some("classic") => Difficulty::Classic,
        Some("casual") => Difficulty::Casual,
        Some("elite") => Difficulty::Elite,
        Some(other) => {
            eprintln!("Error: unknown difficulty: {other}");
            process::exit(1);
        }
    }
}

fn parse_tuning(args: &[String]) -> Option<Tuning> {
    let path = PathBuf::from(flag_value(args, "--tuning")?);
    match load_tuning(&path) {
        Ok(tuning) => Some(tuning),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

fn build_sim(args: &[String], auto_reset: bool) -> ShotSimulator {
    ShotSimulator::new(SimConfig {
        seed: parse_or_exit(args, "--seed", 42),
        difficulty: parse_difficulty(args),
        tuning: parse_tuning(args),
        auto_reset,
    })
}

fn random_shot(rng: &mut ChaCha8Rng) -> ShotParameters {
    let mode = ShotMode::ALL[rng.gen_range(0..ShotMode::ALL.len())];
    ShotParameters::new(
        rng.gen_range(0.2..=1.0),
        AimDirection::new(rng.gen_range(-0.45..=0.45), rng.gen_range(-0.1..=1.0)),
        mode,
    )
}

// --- Shoot command ---

fn cmd_shoot(args: &[String]) {
    let params = ShotParameters::new(
        parse_or_exit(args, "--power", 0.6),
        AimDirection::new(
            parse_or_exit(args, "--lateral", 0.0),
            parse_or_exit(args, "--vertical", 0.0),
        ),
        parse_mode(args),
    );

    let mut sim = build_sim(args, false);
    let Some(result) = sim.play_shot(params) else {
        eprintln!("Error: shot did not resolve");
        process::exit(1);
    };

    if has_flag(args, "--json") {
        match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        }
        return;
    }

    let p = result.final_position;
    println!(
        "{} ({:+}) at u={:.3} v={:.3} z={:.3}",
        result.outcome.label(),
        result.score_delta,
        p.u,
        p.v,
        p.z
    );
    if let Some(mp) = result.mouth_point {
        println!("crossed the mouth at x={:.2} y={:.2}", mp.x, mp.y);
    }
}

// --- Batch command ---

fn cmd_batch(args: &[String]) {
    let count: u32 = parse_or_exit(args, "--count", 100);
    let seed: u64 = parse_or_exit(args, "--seed", 42);
    let mut rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(1));
    let mut sim = build_sim(args, false);

    let mut histogram: BTreeMap<&'static str, u32> = BTreeMap::new();
    for _ in 0..count {
        if let Some(result) = sim.play_shot(random_shot(&mut rng)) {
            *histogram.entry(result.outcome.label()).or_default() += 1;
        }
    }

    println!("{count} shots");
    for (label, n) in &histogram {
        let pct = if count > 0 {
            100.0 * f64::from(*n) / f64::from(count)
        } else {
            0.0
        };
        println!("  {label:<9} {n:>6}  {pct:5.1}%");
    }
    let score = sim.score();
    println!(
        "score {} (goals {}, saves {}, blocks {})",
        score.score, score.goals, score.saves, score.blocks
    );
}

// --- Level command ---

fn cmd_level(args: &[String]) {
    let id: u32 = parse_or_exit(args, "--id", 1);
    let dir = PathBuf::from(flag_value(args, "--dir").unwrap_or("."));
    let seed: u64 = parse_or_exit(args, "--seed", 42);

    let levels = default_levels();
    let mut progress = load_or_default(&dir);
    let level = match select_level(&levels, &progress, id) {
        Ok(level) => level,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    println!(
        "Level {}: {} ({} shots, wind {:+.2})",
        level.id, level.name, level.shots, level.wind
    );

    let mut rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(1));
    let mut sim = build_sim(args, false);
    let mut session = LevelSession::start(level);

    while session.status() == SessionStatus::InProgress {
        sim.reset();
        sim.set_wind(session.wind());
        let Some(result) = sim.play_shot(random_shot(&mut rng)) else {
            break;
        };
        let status = session.record(&result);
        println!(
            "  shot: {:<9} ({} left)",
            result.outcome.label(),
            session.shots_left()
        );
        if status != SessionStatus::InProgress {
            break;
        }
    }

    match session.status() {
        SessionStatus::Completed => {
            progress.unlock_after(level.id);
            persist(&dir, &progress);
            println!(
                "Completed! Unlocked up to level {}",
                progress.set_pieces.unlocked_level
            );
        }
        SessionStatus::Failed => println!("Out of shots."),
        SessionStatus::InProgress => println!("Stopped."),
    }
}

fn persist(dir: &Path, progress: &freekick_campaign::Progress) {
    if let Err(e) = save_progress(dir, progress) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
