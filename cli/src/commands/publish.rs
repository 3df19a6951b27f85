//! `manifestctl publish` command — create, push, and clean up in one go.

use clap::Args;

use manifestctl_core::ManifestRef;

#[derive(Args)]
pub struct PublishArgs {
    /// Manifest list reference (e.g., "quay.io/org/image:latest")
    pub list: String,

    /// Fully qualified image references to add, in order
    /// (e.g., "docker://quay.io/org/image@sha256:...")
    pub images: Vec<String>,

    /// Strip signatures and force the Docker v2 schema 2 media type.
    /// Workaround for registries that reject mixed-media-type lists.
    #[arg(long)]
    pub v2s2: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn execute(args: PublishArgs) -> Result<(), Box<dyn std::error::Error>> {
    let list = ManifestRef::parse(&args.list)?;
    let publisher = super::open_publisher();

    if !args.quiet {
        println!("Publishing {} ({} images)...", list, args.images.len());
    }

    // On push failure the local list is intentionally kept so the
    // push can be retried without rebuilding it; `manifestctl rm`
    // cleans it up by hand.
    publisher.create_and_push(&list, &args.images, args.v2s2)?;

    if !args.quiet {
        println!("Published: {list}");
    }

    Ok(())
}
