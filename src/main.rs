use clap::Parser;

use universe_generator::seeds::SeedInput;
use universe_generator::verse::Verse;

#[derive(Parser, Debug)]
#[command(name = "universe_generator")]
#[command(about = "Generate deterministic procedural star systems as JSON")]
struct Args {
    /// Seed: an integer, a sector coordinate like "B3", or omitted for a
    /// stream-derived seed
    #[arg(short, long)]
    seed: Option<String>,

    /// Number of sectors to generate, in raster order from A0
    #[arg(short = 'n', long, default_value = "9")]
    sectors: usize,

    /// Generate a single star system for this seed or sector coordinate
    /// instead of a universe
    #[arg(long)]
    system: bool,

    /// Pretty-print the JSON output
    #[arg(short, long)]
    pretty: bool,

    /// Print a generation summary to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    let seed = SeedInput::from(args.seed.clone());

    let mut verse = Verse::default();
    let json = if args.system {
        let system = verse.generate_star_system(seed);
        if args.verbose {
            eprintln!(
                "generated system {} ({} planets)",
                system.star_name,
                system.planets.len()
            );
        }
        to_json(&system, args.pretty)
    } else {
        let universe = verse.generate_universe(args.sectors, seed);
        if args.verbose {
            let planets: usize = universe.systems.iter().map(|s| s.planets.len()).sum();
            eprintln!(
                "generated universe seed {}: {} systems, {} planets",
                universe.seed,
                universe.systems.len(),
                planets
            );
        }
        to_json(&universe, args.pretty)
    };

    match json {
        Ok(out) => println!("{out}"),
        Err(err) => {
            eprintln!("JSON serialization failed: {err}");
            std::process::exit(1);
        }
    }
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}
