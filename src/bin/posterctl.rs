use clap::{Parser, Subcommand};
use quote_poster_backend::backgrounds::COLLECTION;
use quote_poster_backend::{Config, DeepAIClient};

#[derive(Parser, Debug)]
#[command(name = "posterctl", about = "CLI for the Quote Poster backend", version)]
struct Cli {
    /// Override DEEPAI_URL
    #[arg(global = true, long)]
    deepai_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the static background collection
    Backgrounds {
        /// Output raw JSON instead of pretty lines
        #[arg(long)]
        json: bool,
    },
    /// Generate a background image from a text prompt
    Generate {
        /// Free-text description of the desired image
        prompt: String,
        /// Override DEEPAI_API_KEY
        #[arg(long, value_name = "KEY")]
        api_key: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load env and parse CLI
    Config::dotenv_load();
    let cli = Cli::parse();

    let mut conf = Config::new().expect("Failed to load config");
    if let Some(url) = cli.deepai_url {
        conf.deepai_url = url;
    }

    match cli.command {
        Commands::Backgrounds { json } => {
            if json {
                println!("{}", serde_json::to_string(&COLLECTION)?);
            } else {
                for bg in COLLECTION.iter() {
                    println!("{}\t{}", bg.id, bg.url);
                }
            }
            Ok(())
        }
        Commands::Generate { prompt, api_key } => {
            if prompt.is_empty() {
                eprintln!("Prompt is required");
                std::process::exit(2);
            }
            let key = api_key.or(conf.deepai_api_key);
            let client = DeepAIClient::new(conf.deepai_url.clone(), key);
            match client.generate(&prompt).await {
                Ok(url) => {
                    println!("{}", url);
                    Ok(())
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }
}
