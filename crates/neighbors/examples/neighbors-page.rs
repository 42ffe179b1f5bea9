// Copyright (C) 2026-present The lgview Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//    http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or
// implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Print the neighbors page of a route server from a saved API response.
//!
//! ```text
//! cargo run --example neighbors-page -- neighbors.json --filter AS64500 --sort address
//! ```

use clap::Parser;
use lgview_neighbors::{prepare_neighbors, Neighbor, NeighborsQuery, SortField, SortOrder};
use std::{fs, path::PathBuf, str::FromStr};
use tracing::{info, Level};

#[derive(clap::Parser, Debug)]
struct Args {
    /// JSON file holding a `/api/v1/routeservers/{id}/neighbors` response
    input: PathBuf,

    #[arg(long, default_value = "")]
    filter: String,

    #[arg(long)]
    sort: Option<String>,

    #[arg(long, default_value = "asc")]
    order: String,

    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(serde::Deserialize, Debug)]
struct NeighborsResponse {
    neighbors: Vec<Neighbor>,
}

fn init_tracing(level: &str) {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(Level::from_str(level).expect("invalid logging level"))
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
}

fn print_group(name: &str, neighbors: &[&Neighbor]) {
    println!("== {name} ({})", neighbors.len());
    for n in neighbors {
        println!(
            "{:<40} AS{:<10} {:<24} {:<14} {}",
            n.address, n.asn, n.description, n.state, n.routes_received
        );
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let response: NeighborsResponse = serde_json::from_str(&fs::read_to_string(&args.input)?)?;
    info!(
        neighbors = response.neighbors.len(),
        input = %args.input.display(),
        "loaded neighbors"
    );

    let mut query = NeighborsQuery::new(args.filter);
    if let Some(field) = args.sort {
        query = query.with_sort(
            SortField::from_str(&field)?,
            SortOrder::from(args.order.as_str()),
        );
    }

    let groups = prepare_neighbors(&response.neighbors, &query);
    if groups.is_empty() {
        println!("No neighbors could be found.");
        return Ok(());
    }
    print_group("up", &groups.up);
    print_group("idle", &groups.idle);
    print_group("down", &groups.down);
    if !groups.unclassified.is_empty() {
        info!(
            count = groups.unclassified.len(),
            "some neighbors were shown as up without a known state"
        );
    }
    Ok(())
}
