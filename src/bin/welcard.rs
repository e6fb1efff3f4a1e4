use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use welcard::{AssetStore, CardComposer, CardConfig, Inviter, WelcomeCardRequest};

#[derive(Parser, Debug)]
#[command(name = "welcard", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compose a welcome card PNG from a request description.
    Compose(ComposeArgs),
}

#[derive(Parser, Debug)]
struct ComposeArgs {
    /// Request JSON; avatar fields are image paths relative to this file.
    #[arg(long)]
    request: PathBuf,

    /// Config JSON overriding the built-in layout defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output directory (defaults to the configured one).
    #[arg(long = "out-dir")]
    out_dir: Option<PathBuf>,
}

/// On-disk request format. The binary plays the collaborator role: it reads
/// the avatar files into bytes before handing the core a plain-data request.
#[derive(Debug, serde::Deserialize)]
struct RequestSpec {
    member_name: String,
    member_id: u64,
    member_avatar: PathBuf,
    #[serde(default)]
    inviter: Option<InviterSpec>,
    member_count: u64,
}

#[derive(Debug, serde::Deserialize)]
struct InviterSpec {
    name: String,
    avatar: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Compose(args) => cmd_compose(args),
    }
}

fn cmd_compose(args: ComposeArgs) -> anyhow::Result<()> {
    let cfg = match &args.config {
        Some(path) => CardConfig::from_path(path)?,
        None => CardConfig::default(),
    };

    let spec: RequestSpec = serde_json::from_slice(
        &std::fs::read(&args.request)
            .with_context(|| format!("read request '{}'", args.request.display()))?,
    )
    .with_context(|| format!("parse request '{}'", args.request.display()))?;

    let base = args
        .request
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .to_path_buf();

    let req = WelcomeCardRequest {
        member_name: spec.member_name,
        member_id: spec.member_id,
        member_avatar: read_avatar(&base, &spec.member_avatar)?,
        inviter: spec
            .inviter
            .map(|inv| {
                anyhow::Ok(Inviter {
                    avatar: read_avatar(&base, &inv.avatar)?,
                    name: inv.name,
                })
            })
            .transpose()?,
        member_count: spec.member_count,
    };

    let assets = AssetStore::load(&cfg)?;
    let card = CardComposer::new(&assets, &cfg).compose(&req)?;

    let out_dir = args.out_dir.as_ref().unwrap_or(&cfg.output_dir);
    let path = card.write_to_dir(out_dir)?;
    eprintln!("wrote {}", path.display());
    Ok(())
}

fn read_avatar(base: &Path, rel: &Path) -> anyhow::Result<Vec<u8>> {
    let path = if rel.is_absolute() {
        rel.to_path_buf()
    } else {
        base.join(rel)
    };
    std::fs::read(&path).with_context(|| format!("read avatar '{}'", path.display()))
}
