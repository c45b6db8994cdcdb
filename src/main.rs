use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use log::info;

use link_state_sim::{LinkStateSimulator, RouterId, menu, parse_matrix};

#[derive(Parser)]
#[command(
    name = "link-state-sim",
    about = "Link-state routing table simulator",
    version
)]
struct Cli {
    /// Topology matrix file to load at startup.
    #[arg(long)]
    topology: Option<PathBuf>,

    /// Print the connection table for this source router and exit.
    #[arg(long)]
    source: Option<RouterId>,

    /// With --source, also print the shortest path to this router.
    #[arg(long, requires = "source")]
    destination: Option<RouterId>,

    /// Print one-shot results as JSON.
    #[arg(long, requires = "source")]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut simulator = LinkStateSimulator::new();
    if let Some(path) = &cli.topology {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read topology file {}", path.display()))?;
        let matrix = parse_matrix(&text)?;
        simulator.set_topology(&matrix)?;
        info!(
            "loaded topology with {} routers from {}",
            simulator.router_count(),
            path.display()
        );
    }

    match cli.source {
        Some(source) => run_one_shot(&mut simulator, source, cli.destination, cli.json),
        None => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            menu::run(stdin.lock(), stdout.lock(), &mut simulator)?;
            Ok(())
        }
    }
}

/// Non-interactive mode: answer one query from the command line and exit.
fn run_one_shot(
    simulator: &mut LinkStateSimulator,
    source: RouterId,
    destination: Option<RouterId>,
    json: bool,
) -> Result<()> {
    if !simulator.has_topology() {
        bail!("--source requires a topology file (--topology)");
    }
    simulator.select_source(source)?;

    let table = simulator.connection_table()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&table)?);
    } else {
        print!("{}", menu::render_connection_table(&table));
    }

    if let Some(destination) = destination {
        let route = simulator.shortest_path(destination)?;
        if json {
            println!("{}", serde_json::to_string_pretty(&route)?);
        } else {
            println!();
            print!("{}", menu::render_route(&route));
        }
    }
    Ok(())
}
