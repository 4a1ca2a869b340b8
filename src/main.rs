use std::fs::File;
use std::io::BufWriter;

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::info;
#[cfg(not(feature = "parallel"))]
use log::warn;

use epimatch::matching::TextSink;
use epimatch::{scan, Lattice2D, ScanConfig};

#[derive(Parser)]
#[command(name = "epimatch")]
#[command(about = "Low-strain epitaxial matching of 2D crystal lattices")]
#[command(version)]
struct Cli {
    /// Substrate lattice vectors as "ax,ay,bx,by" (default: ZnO(0001))
    #[arg(short, long, default_value = "3.250,0.000,-1.625,2.815", value_parser = parse_lattice)]
    substrate: Lattice2D,

    /// Film lattice vectors as "ax,ay,bx,by" (default: Cu(111))
    #[arg(short, long, default_value = "2.553,0.000,1.276,2.211", value_parser = parse_lattice)]
    film: Lattice2D,

    /// Bound on the integer transformation-matrix entries
    #[arg(short, long, default_value = "4")]
    radius: i32,

    /// Fractional tolerance for the area-ratio acceptance window
    #[arg(short, long, default_value = "0.1")]
    tol: f64,

    /// Combinations with deformation below this are written to the result table
    #[arg(short, long, default_value = "0.1")]
    limit: f64,

    /// Result table path (recreated on every run)
    #[arg(short, long, default_value = "results_explored_matrices.txt")]
    output: String,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Number of threads to use (default: all available cores)
    #[arg(long)]
    threads: Option<usize>,
}

fn parse_lattice(s: &str) -> Result<Lattice2D, String> {
    let parts: Vec<f64> = s
        .split(',')
        .map(|p| p.trim().parse::<f64>())
        .collect::<Result<_, _>>()
        .map_err(|e| format!("lattice components must be numbers: {e}"))?;
    if parts.len() != 4 {
        return Err(format!("expected 4 components ax,ay,bx,by, got {}", parts.len()));
    }
    Ok(Lattice2D::from_rows([
        [parts[0], parts[1]],
        [parts[2], parts[3]],
    ]))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Set thread pool size if specified
    if let Some(threads) = cli.threads {
        #[cfg(feature = "parallel")]
        {
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global()
                .context("failed to set thread pool size")?;
            info!("Using {} threads", threads);
        }
        #[cfg(not(feature = "parallel"))]
        {
            let _ = threads;
            warn!("Thread count specified but parallel feature not enabled. Ignoring.");
        }
    }

    info!("Starting epimatch v{}", epimatch::VERSION);

    let file = File::create(&cli.output)
        .with_context(|| format!("cannot create result table {}", cli.output))?;
    let mut sink = TextSink::new(BufWriter::new(file));

    let config = ScanConfig {
        search_radius: cli.radius,
        tol: cli.tol,
        deformation_limit: cli.limit,
        verbose: true,
    };
    let result = scan(&cli.substrate, &cli.film, &config, &mut sink)?;
    sink.into_inner()?;

    println!();
    println!("deformation = max(Da, Db, Da+Db)");
    println!();
    match &result.best {
        Some(best) => {
            println!("min(deformation) = {}", best.metric());
            println!("Was found applying:");
            println!(
                "\nelements of the substrate transformation matrix: {}",
                best.substrate_transform
            );
            println!("supercell lattice: \n{}", best.substrate_supercell);
            println!(
                "elements of the film transformation matrix: {}",
                best.film_transform
            );
            println!("  supercell lattice: \n{}", best.film_supercell);
            println!(
                "\n\nFind all combinations that give this deformation in the file {}",
                cli.output
            );
        }
        None => println!(
            "No supercell combination realizable at radius {}; consider increasing it",
            cli.radius
        ),
    }
    println!();

    Ok(())
}
