//! `manifestctl rm` command — remove a local manifest list.

use clap::Args;

use manifestctl_core::ManifestRef;

#[derive(Args)]
pub struct RmArgs {
    /// Manifest list reference (e.g., "quay.io/org/image:latest")
    pub list: String,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn execute(args: RmArgs) -> Result<(), Box<dyn std::error::Error>> {
    let list = ManifestRef::parse(&args.list)?;
    let publisher = super::open_publisher();

    publisher.delete_local_manifest(&list)?;

    if !args.quiet {
        println!("Removed: {list}");
    }

    Ok(())
}
