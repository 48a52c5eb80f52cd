use std::error::Error;
use std::fs;
use std::path::Path;

use geo::{Geometry, LineString};
use itertools::Itertools;
use log::{info, warn};
use wkt::{ToWkt, TryFromWkt};

use streetmatch::{match_trajectories, MatchOptions, Network, NetworkEdge, Observation};

type CliResult<T> = Result<T, Box<dyn Error>>;

/// Reads `id  source  target  weight  oneway  LINESTRING(..)` rows.
///
/// The `weight` column becomes the `weight` attribute of the edge.
fn read_network(path: &Path) -> CliResult<Network> {
    let contents = fs::read_to_string(path)?;

    let edges = rows(&contents)
        .map(|(line, columns)| -> CliResult<NetworkEdge> {
            let [id, source, target, weight, oneway, geometry] = columns[..] else {
                return Err(format!("{}:{line}: expected 6 columns", path.display()).into());
            };

            let geometry = LineString::<f64>::try_from_wkt_str(geometry)
                .map_err(|e| format!("{}:{line}: {e}", path.display()))?;

            let (id, source, target) = (id.parse::<u64>()?, source.parse::<u64>()?, target.parse::<u64>()?);
            let edge = NetworkEdge::new(id, source, target, geometry)
                .with_oneway(matches!(oneway, "1" | "true" | "yes"))
                .with_attribute("weight", weight.parse::<f64>()?);

            Ok(edge)
        })
        .collect::<CliResult<Vec<_>>>()?;

    Ok(Network::new(edges)?)
}

/// Reads `trajectory  POINT(..)` rows, in observation order.
fn read_observations(path: &Path) -> CliResult<Vec<Observation<String>>> {
    let contents = fs::read_to_string(path)?;

    rows(&contents)
        .map(|(line, columns)| -> CliResult<Observation<String>> {
            let [trajectory, geometry] = columns[..] else {
                return Err(format!("{}:{line}: expected 2 columns", path.display()).into());
            };

            let geometry = Geometry::<f64>::try_from_wkt_str(geometry)
                .map_err(|e| format!("{}:{line}: {e}", path.display()))?;

            Ok(Observation::new(trajectory.to_string(), geometry))
        })
        .collect()
}

/// Tab-separated rows, skipping blank lines and `#` comments.
fn rows(contents: &str) -> impl Iterator<Item = (usize, Vec<&str>)> {
    contents
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty() && !line.starts_with('#'))
        .map(|(index, line)| (index + 1, line.split('\t').map(str::trim).collect()))
}

fn main() -> CliResult<()> {
    env_logger::init();

    let mut args = std::env::args_os().skip(1);
    let (Some(network), Some(trajectories)) = (args.next(), args.next()) else {
        return Err("usage: streetmatch <network.tsv> <trajectories.tsv>".into());
    };

    let options = MatchOptions::from_env()?;
    info!("Matching with {options:?}");

    let network = read_network(Path::new(&network))?;
    let observations = read_observations(Path::new(&trajectories))?;
    info!(
        "Read {} edges and {} observations",
        network.len(),
        observations.len()
    );

    let output = match_trajectories(observations, &network, &options)?;

    println!("trajectory\tstop\tedge\tdirection\tgeometry");
    for (trajectory, segment) in output.all_segments() {
        println!(
            "{trajectory}\t{}\t{}\t{}\t{}",
            segment.stop,
            segment.edge.id,
            segment.edge.direction,
            segment.geometry.wkt_string()
        );
    }

    if !output.report.is_empty() {
        let summary = output
            .report
            .counts()
            .into_iter()
            .map(|(reason, count)| format!("{reason}={count}"))
            .join(", ");

        warn!(
            "Dropped {} of {} trajectories ({summary})",
            output.report.len(),
            output.len()
        );

        for (trajectory, reason) in &output.report.dropped {
            eprintln!("dropped\t{trajectory}\t{}\t{reason}", reason.name());
        }
    }

    Ok(())
}
