use std::fmt::Write as _;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use log::{debug, info};

use crate::RouterId;
use crate::error::RoutingError;
use crate::network::topology::parse_matrix;
use crate::route::Route;
use crate::routing_table::ConnectionTable;
use crate::simulator::LinkStateSimulator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    LoadTopology,
    ConnectionTable,
    ShortestPath,
    Exit,
}

/// Runs the interactive menu loop until the user exits or input ends.
///
/// Generic over reader and writer so sessions can be scripted in tests.
pub fn run<R, W>(
    mut input: R,
    mut output: W,
    simulator: &mut LinkStateSimulator,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    print_choices(&mut output)?;
    loop {
        write!(output, "\nCommand: ")?;
        output.flush()?;
        let Some(line) = read_line(&mut input)? else {
            break;
        };
        let choice = match parse_choice(&line) {
            Ok(choice) => choice,
            Err(message) => {
                writeln!(output, "{}", message)?;
                continue;
            }
        };
        match choice {
            Choice::LoadTopology => handle_load(&mut input, &mut output, simulator)?,
            Choice::ConnectionTable => {
                handle_connection_table(&mut input, &mut output, simulator)?
            }
            Choice::ShortestPath => handle_shortest_path(&mut input, &mut output, simulator)?,
            Choice::Exit => {
                writeln!(output, "\nExit. Thank you!")?;
                break;
            }
        }
    }
    Ok(())
}

fn print_choices<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output, "{}", "#".repeat(54))?;
    writeln!(output)?;
    writeln!(output, "Link State Routing Simulator")?;
    writeln!(output)?;
    writeln!(output, "(1) Input Network Topology File")?;
    writeln!(output, "(2) Build a Connection Table")?;
    writeln!(output, "(3) Shortest Path to Destination Router")?;
    writeln!(output, "(4) Exit")?;
    writeln!(output)?;
    writeln!(output, "{}", "#".repeat(54))?;
    Ok(())
}

fn parse_choice(line: &str) -> Result<Choice, &'static str> {
    match line.trim().parse::<u32>() {
        Ok(1) => Ok(Choice::LoadTopology),
        Ok(2) => Ok(Choice::ConnectionTable),
        Ok(3) => Ok(Choice::ShortestPath),
        Ok(4) => Ok(Choice::Exit),
        Ok(_) => Err("Please enter a valid command from the given choices."),
        Err(_) => Err("Please enter a number as command from the given choices."),
    }
}

fn parse_router_id(line: &str) -> Option<RouterId> {
    line.trim().parse::<RouterId>().ok()
}

/// Reads one line, returning `None` on end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> io::Result<Option<String>> {
    write!(output, "{}", text)?;
    output.flush()?;
    read_line(input)
}

fn handle_load<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    simulator: &mut LinkStateSimulator,
) -> io::Result<()> {
    if simulator.has_topology() {
        let confirm = prompt(
            input,
            output,
            "\nThe network topology is already uploaded. Do you want to overwrite? (Y/N): ",
        )?;
        let Some(answer) = confirm else {
            return Ok(());
        };
        if !answer.trim().eq_ignore_ascii_case("y") {
            return Ok(());
        }
    }

    let path = prompt(
        input,
        output,
        "\nInput network topology matrix file [NxN cost matrix, -1 for no link, 0 for self]: ",
    )?;
    let Some(path) = path else {
        return Ok(());
    };
    let path = path.trim();
    if !Path::new(path).is_file() {
        writeln!(output, "The file {} does not exist. Please try again.", path)?;
        return Ok(());
    }

    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            writeln!(output, "Could not read {}: {}", path, err)?;
            return Ok(());
        }
    };
    let matrix = match parse_matrix(&text) {
        Ok(matrix) => matrix,
        Err(err) => {
            writeln!(output, "{}", err)?;
            return Ok(());
        }
    };
    if let Err(err) = simulator.set_topology(&matrix) {
        writeln!(output, "{}", err)?;
        return Ok(());
    }

    info!(
        "loaded topology with {} routers from {}",
        simulator.router_count(),
        path
    );
    writeln!(output, "\nReview original topology matrix:\n")?;
    write!(output, "{}", render_matrix(&matrix))?;
    Ok(())
}

fn handle_connection_table<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    simulator: &mut LinkStateSimulator,
) -> io::Result<()> {
    if !simulator.has_topology() {
        writeln!(
            output,
            "No network topology loaded. Please input the topology file first."
        )?;
        return Ok(());
    }

    let Some(line) = prompt(input, output, "\nSelect a source router: ")? else {
        return Ok(());
    };
    let Some(source) = parse_router_id(&line) else {
        writeln!(output, "Please enter a valid source router.")?;
        return Ok(());
    };

    match simulator.select_source(source) {
        Ok(()) => {}
        Err(RoutingError::InvalidSource { .. }) => {
            writeln!(output, "Please enter a valid source router.")?;
            return Ok(());
        }
        Err(err) => {
            writeln!(output, "{}", err)?;
            return Ok(());
        }
    }
    debug!("selected source router {}", source);

    match simulator.connection_table() {
        Ok(table) => {
            writeln!(output)?;
            write!(output, "{}", render_connection_table(&table))?;
        }
        Err(err) => writeln!(output, "{}", err)?,
    }
    Ok(())
}

fn handle_shortest_path<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    simulator: &LinkStateSimulator,
) -> io::Result<()> {
    if !simulator.has_topology() {
        writeln!(
            output,
            "No network topology loaded. Please input the topology file first."
        )?;
        return Ok(());
    }

    let Some(line) = prompt(input, output, "\nSelect a destination router: ")? else {
        return Ok(());
    };
    // An out-of-range id is rejected ahead of the missing-source guard.
    let destination = match parse_router_id(&line) {
        Some(destination) if destination >= 1 && destination <= simulator.router_count() => {
            destination
        }
        _ => {
            writeln!(output, "Please enter a valid destination router.")?;
            return Ok(());
        }
    };

    match simulator.shortest_path(destination) {
        Ok(route) => {
            writeln!(output)?;
            write!(output, "{}", render_route(&route))?;
        }
        Err(RoutingError::NoSourceSelected) => {
            writeln!(
                output,
                "No source router selected yet. Please build a connection table first."
            )?;
        }
        Err(RoutingError::SameRouter(_)) => {
            writeln!(
                output,
                "Source and destination routers are the same. Please select a different destination router."
            )?;
        }
        Err(RoutingError::InvalidDestination { .. }) => {
            writeln!(output, "Please enter a valid destination router.")?;
        }
        Err(RoutingError::NoRoute { from, to }) => {
            writeln!(output, "No route from router {} to router {}.", from, to)?;
        }
        Err(err) => writeln!(output, "{}", err)?,
    }
    Ok(())
}

fn render_matrix(matrix: &[Vec<i64>]) -> String {
    let mut output = String::new();
    for row in matrix {
        let cells: Vec<String> = row.iter().map(|cell| cell.to_string()).collect();
        writeln!(output, "{}", cells.join(" ")).unwrap();
    }
    output
}

/// Renders a connection table with aligned Destination/Interface columns.
pub fn render_connection_table(table: &ConnectionTable) -> String {
    let mut output = String::new();
    writeln!(output, "{:<15} {:<15}", "Destination", "Interface").unwrap();
    writeln!(output, "{}", "-".repeat(30)).unwrap();
    for entry in table.iter() {
        let interface = match entry.first_hop {
            Some(hop) => hop.to_string(),
            None => "none".to_string(),
        };
        writeln!(output, "{:<15} {:<15}", entry.destination, interface).unwrap();
    }
    output
}

/// Renders a route with its hop sequence and total cost.
pub fn render_route(route: &Route) -> String {
    let mut output = String::new();
    if let (Some(&source), Some(&destination)) = (route.hops().first(), route.hops().last()) {
        writeln!(
            output,
            "The shortest path from router {} to router {} is:",
            source, destination
        )
        .unwrap();
        writeln!(output).unwrap();
        writeln!(output, "{}", route).unwrap();
        writeln!(output).unwrap();
        writeln!(output, "The total cost is {}.", route.total_cost).unwrap();
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::dijkstra::calculate_shortest_path_tree;
    use crate::network::topology::Topology;
    use crate::route::reconstruct_route;

    #[test]
    fn test_parse_choice_valid_commands() {
        assert_eq!(parse_choice("1"), Ok(Choice::LoadTopology));
        assert_eq!(parse_choice(" 2 \n"), Ok(Choice::ConnectionTable));
        assert_eq!(parse_choice("3"), Ok(Choice::ShortestPath));
        assert_eq!(parse_choice("4\n"), Ok(Choice::Exit));
    }

    #[test]
    fn test_parse_choice_out_of_range() {
        let err = parse_choice("7").unwrap_err();
        assert!(err.contains("valid command"));
    }

    #[test]
    fn test_parse_choice_not_a_number() {
        let err = parse_choice("abc").unwrap_err();
        assert!(err.contains("number"));
    }

    #[test]
    fn test_parse_router_id() {
        assert_eq!(parse_router_id(" 3 \n"), Some(3));
        assert_eq!(parse_router_id("abc"), None);
        assert_eq!(parse_router_id("-2"), None);
        assert_eq!(parse_router_id("1.5"), None);
    }

    #[test]
    fn test_render_matrix_rows() {
        let rendered = render_matrix(&[vec![0, 2, -1], vec![2, 0, 1]]);
        assert_eq!(rendered, "0 2 -1\n2 0 1\n");
    }

    #[test]
    fn test_render_connection_table_columns() {
        let topology =
            Topology::from_matrix(&[vec![0, 1, -1], vec![-1, 0, -1], vec![-1, -1, 0]]).unwrap();
        let tree = calculate_shortest_path_tree(&topology, 1).unwrap();
        let table = ConnectionTable::from_tree(&tree);

        let rendered = render_connection_table(&table);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0].trim_end(), "Destination     Interface");
        assert_eq!(lines[1], "-".repeat(30));
        assert_eq!(lines[2].trim_end(), "1               none");
        assert_eq!(lines[3].trim_end(), "2               2");
        assert_eq!(lines[4].trim_end(), "3               none");
    }

    #[test]
    fn test_render_route_sentences() {
        let topology =
            Topology::from_matrix(&[vec![0, 10, -1], vec![-1, 0, 5], vec![-1, -1, 0]]).unwrap();
        let tree = calculate_shortest_path_tree(&topology, 1).unwrap();
        let route = reconstruct_route(&tree, 3).unwrap();

        let rendered = render_route(&route);
        assert!(rendered.contains("The shortest path from router 1 to router 3 is:"));
        assert!(rendered.contains("1 -> 2 -> 3"));
        assert!(rendered.contains("The total cost is 15."));
    }
}
