use anyhow::Result;
use clap::{Parser, Subcommand};
use estate_cli::{random_estate, EstateClient, EstateFile};
use serde_json::json;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the drone plan for an estate file locally
    Plan {
        /// Estate JSON file: {"width", "length", "trees": [{"x", "y", "height"}]}
        #[arg(long)]
        file: PathBuf,

        /// Stop the sweep once this distance is reached
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        max_distance: Option<u64>,
    },
    /// Upload an estate file to a server and print its stats and drone plan
    Upload {
        /// Estate Server URL
        #[arg(long, default_value = "http://localhost:8080")]
        url: String,

        #[arg(long)]
        file: PathBuf,

        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        max_distance: Option<u64>,
    },
    /// Print a random estate file
    Random {
        #[arg(long)]
        width: u32,

        #[arg(long)]
        length: u32,

        /// Number of trees to plant
        #[arg(long, default_value_t = 0)]
        trees: usize,

        /// Seed for reproducible estates
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Command::Plan { file, max_distance } => {
            let estate = EstateFile::load(&file)?;
            let plan = estate.plan(max_distance)?;
            println!("{}", serde_json::to_string_pretty(&plan)?);
        }
        Command::Upload {
            url,
            file,
            max_distance,
        } => {
            let estate = EstateFile::load(&file)?;
            estate.check_heights()?;
            let client = EstateClient::new(url);

            let estate_id = client.create_estate(estate.width, estate.length).await?;
            eprintln!("Created estate {}", estate_id);
            for tree in &estate.trees {
                client.add_tree(&estate_id, tree).await?;
            }
            eprintln!("Planted {} trees", estate.trees.len());

            let stats = client.stats(&estate_id).await?;
            let plan = client.drone_plan(&estate_id, max_distance).await?;
            let output = json!({
                "estate_id": estate_id,
                "stats": stats,
                "plan": plan,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Command::Random {
            width,
            length,
            trees,
            seed,
        } => {
            let estate = random_estate(width, length, trees, seed)?;
            println!("{}", serde_json::to_string_pretty(&estate)?);
        }
    }

    Ok(())
}
