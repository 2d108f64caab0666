use anyhow::Result;
use clap::Parser;
use skyops_core::ReassignmentOutcome;
use skyops_sdk::OpsClient;

#[derive(Parser, Debug)]
#[command(author, version, about = "Propose a pilot preemption for an urgent mission", long_about = None)]
struct Args {
    /// Skyops server URL
    #[arg(long, default_value = "http://localhost:4000")]
    url: String,

    /// Project ID of the urgent mission, e.g. PRJ003
    project_id: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let client = OpsClient::new(args.url);

    match client.urgent_reassignment(&args.project_id).await? {
        ReassignmentOutcome::Success { recommendation, .. } => {
            println!("{}", recommendation);
        }
        ReassignmentOutcome::Failed { reason } => {
            println!("Reassignment failed: {}", reason);
        }
    }

    Ok(())
}
