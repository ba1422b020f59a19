use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "activities-cli")]
#[command(about = "Management CLI for the school activities API", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all activities with their rosters
    List,
    /// Show a single activity
    Show { name: String },
    /// Sign a student up for an activity
    Signup { name: String, email: String },
    /// Remove a student from an activity
    Unregister { name: String, email: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::List => {
            let res = client
                .get(format!("{}/activities", cli.url))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Show { name } => {
            let res = client
                .get(format!("{}/activities/{}", cli.url, name))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Signup { name, email } => {
            let res = client
                .post(format!("{}/activities/{}/signup", cli.url, name))
                .query(&[("email", email)])
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Unregister { name, email } => {
            let res = client
                .delete(format!("{}/activities/{}/unregister", cli.url, name))
                .query(&[("email", email)])
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
        eprintln!("Error: API returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
