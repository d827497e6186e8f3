//! Cattose CLI: terminal observer over the screen models.

use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cattose::api::CatApiClient;
use cattose::config::Config;
use cattose::nav::{ScreenArgs, CAT_ID_ARG, IMAGE_URL_ARG};
use cattose::repository::RemoteCatRepository;
use cattose::screen::detail::{DetailModel, DetailState};
use cattose::screen::list::{ListModel, ListState};

#[derive(Parser)]
#[command(name = "cattose", about = "Browse cat breeds from TheCatApi")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List cat breeds.
    Breeds {
        /// Page size override.
        #[arg(long)]
        limit: Option<u32>,
        /// Zero-based page of the listing.
        #[arg(long, default_value_t = 0)]
        page: u32,
    },
    /// Show details for a single cat image.
    Show {
        /// TheCatApi image id.
        cat_id: String,
        /// Image url shown while details load.
        #[arg(long)]
        image_url: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::load().context("failed to load configuration")?;
    let client = CatApiClient::new(&config.api).context("failed to build api client")?;

    match cli.command {
        Command::Breeds { limit, page } => {
            let repository = RemoteCatRepository::new(
                client,
                limit.unwrap_or(config.api.breeds_limit),
            )
            .with_page(page);

            let model = ListModel::new(Arc::new(repository));
            let mut sub = model.state().subscribe();

            while let Some(state) = sub.next().await {
                match state {
                    ListState::Loading => eprintln!("loading..."),
                    ListState::Loaded { breeds } => {
                        for breed in &breeds {
                            println!("{:<12} {:<24} [{}]", breed.id, breed.name, breed.temperament.join(", "));
                        }
                        break;
                    }
                    ListState::Failed => {
                        anyhow::bail!("failed to fetch breed listing");
                    }
                }
            }
        }
        Command::Show { cat_id, image_url } => {
            let repository = RemoteCatRepository::new(client, config.api.breeds_limit);

            let args: ScreenArgs = [(CAT_ID_ARG, cat_id), (IMAGE_URL_ARG, image_url)]
                .into_iter()
                .collect();
            let model = DetailModel::new(Arc::new(repository), &args)
                .context("missing screen arguments")?;
            let mut sub = model.state().subscribe();

            while let Some(state) = sub.next().await {
                match state {
                    DetailState::Loading { image_url } => {
                        eprintln!("loading {image_url}...");
                    }
                    DetailState::Loaded { details, .. } => {
                        println!("image: {}", details.image_url);
                        if let Some(breed) = &details.breed {
                            println!("breed: {}", breed.name);
                            println!("tags:  {}", breed.temperament.join(", "));
                            println!();
                            println!("{}", breed.description);
                        } else {
                            println!("no breed data attached");
                        }
                        break;
                    }
                    DetailState::Failed { .. } => {
                        anyhow::bail!("failed to fetch details for the given cat id");
                    }
                }
            }
        }
    }

    Ok(())
}
