use anyhow::Result;
use clap::Parser;
use skyops_sdk::OpsClient;

#[derive(Parser, Debug)]
#[command(author, version, about = "Check a pilot/drone/mission assignment for conflicts", long_about = None)]
struct Args {
    /// Skyops server URL
    #[arg(long, default_value = "http://localhost:4000")]
    url: String,

    /// Pilot ID, e.g. P001
    pilot_id: String,

    /// Drone ID, e.g. D001
    drone_id: String,

    /// Project ID, e.g. PRJ001
    project_id: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let client = OpsClient::new(args.url);

    match client
        .check_assignment(&args.pilot_id, &args.drone_id, &args.project_id)
        .await
    {
        Ok(result) if result.clear => {
            println!("No conflicts detected. Safe to assign.");
        }
        Ok(result) => {
            println!(
                "{} conflict(s) for {} / {} / {}:",
                result.conflicts.len(),
                result.pilot_id,
                result.drone_id,
                result.project_id
            );
            for conflict in &result.conflicts {
                println!("  - {}", conflict.message);
            }
        }
        Err(err) => {
            // Unresolved IDs arrive as the recovered "Invalid IDs provided."
            // message; transport failures print as-is too.
            eprintln!("Conflict check failed: {}", err);
        }
    }

    Ok(())
}
