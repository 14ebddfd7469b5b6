use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "gateway-cli")]
#[command(about = "Query CLI for the Message Search Gateway", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check gateway status
    Status,
    /// Search the message snapshot
    Search {
        /// Substring to filter messages by
        #[arg(short, long)]
        query: Option<String>,

        /// 1-based page number
        #[arg(long, default_value_t = 1)]
        page: u32,

        /// Results per page (max 100)
        #[arg(long, default_value_t = 10)]
        size: u32,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Status => {
            let res = client.get(format!("{}/", cli.url)).send().await?;
            print_response(res).await?;
        }
        Commands::Search { query, page, size } => {
            let mut params: Vec<(&str, String)> =
                vec![("page", page.to_string()), ("size", size.to_string())];
            if let Some(q) = query {
                params.push(("q", q));
            }
            let res = client
                .get(format!("{}/search", cli.url))
                .query(&params)
                .send()
                .await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: gateway returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
