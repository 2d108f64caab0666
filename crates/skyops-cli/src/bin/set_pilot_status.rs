use anyhow::Result;
use clap::Parser;
use skyops_sdk::OpsClient;

#[derive(Parser, Debug)]
#[command(author, version, about = "Update a pilot's roster status", long_about = None)]
struct Args {
    /// Skyops server URL
    #[arg(long, default_value = "http://localhost:4000")]
    url: String,

    /// Pilot ID, e.g. P001
    pilot_id: String,

    /// New status: Available, Assigned, or "On Leave"
    status: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let client = OpsClient::new(args.url);

    match client.update_pilot_status(&args.pilot_id, &args.status).await {
        Ok(response) => println!("{}", response.message),
        Err(err) => eprintln!("Status update failed: {}", err),
    }

    Ok(())
}
