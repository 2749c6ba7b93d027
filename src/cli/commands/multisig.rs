use crate::cli::commands::print_json;
use crate::errors::AppResult;
use crate::multisig::MultisigAddressBuilder;
use clap::Args;
use tracing::info;

/// Build an M-of-N multisig address from public keys
#[derive(Args)]
pub struct MultisigCommand {
    /// Compressed public key (hex), repeat for each signer in script order
    #[arg(long = "pubkey", required = true)]
    pub pubkeys: Vec<String>,

    /// Required signatures (default: floor(N/2) + 1)
    #[arg(long)]
    pub required: Option<usize>,

    /// Sort keys lexicographically before building
    #[arg(long)]
    pub sort: bool,
}

impl MultisigCommand {
    pub fn run(&self) -> AppResult<()> {
        let mut pubkeys = self.pubkeys.clone();
        if self.sort {
            pubkeys.sort();
        }

        let wallet = MultisigAddressBuilder::build_from_pubkeys(&pubkeys, self.required)?;
        info!("Built {} multisig {}", wallet.threshold_label(), wallet.address);
        print_json(&wallet)
    }
}
