//! `manifestctl push` command — push a local manifest list to its registry.

use clap::Args;

use manifestctl_core::ManifestRef;

#[derive(Args)]
pub struct PushArgs {
    /// Manifest list reference (e.g., "quay.io/org/image:latest")
    pub list: String,

    /// Strip signatures and force the Docker v2 schema 2 media type.
    /// Workaround for registries that reject mixed-media-type lists.
    #[arg(long)]
    pub v2s2: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn execute(args: PushArgs) -> Result<(), Box<dyn std::error::Error>> {
    let list = ManifestRef::parse(&args.list)?;
    let publisher = super::open_publisher();

    if !args.quiet {
        println!("Pushing {list}...");
    }

    publisher.push_manifest(&list, args.v2s2)?;

    if !args.quiet {
        println!("Pushed: {list}");
    }

    Ok(())
}
