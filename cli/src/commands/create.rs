//! `manifestctl create` command — assemble a local manifest list.

use clap::Args;

use manifestctl_core::ManifestRef;

#[derive(Args)]
pub struct CreateArgs {
    /// Manifest list reference (e.g., "quay.io/org/image:latest")
    pub list: String,

    /// Fully qualified image references to add, in order
    /// (e.g., "docker://quay.io/org/image@sha256:...")
    pub images: Vec<String>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn execute(args: CreateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let list = ManifestRef::parse(&args.list)?;
    let publisher = super::open_publisher();

    publisher.create_local_manifest(&list, &args.images)?;

    if !args.quiet {
        println!("Created: {} ({} images)", list, args.images.len());
    }

    Ok(())
}
