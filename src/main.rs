#[tokio::main]
async fn main() {
    if let Err(e) = multisig_approval::cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
