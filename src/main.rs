mod cli;
mod error;
mod k8s;
mod prompt;

use anyhow::Result;
use kube::{Client, Config};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cli::command::IlogsCli;
use error::IlogsError;
use k8s::pods::{self, Scope};
use prompt::TermPrompt;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("kubectl_ilogs=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run().await {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let args = IlogsCli::parse()?;

    let config = Config::infer().await.map_err(IlogsError::Config)?;
    let scope = if args.all_namespaces {
        Scope::AllNamespaces
    } else {
        let ns = args
            .namespace
            .clone()
            .unwrap_or_else(|| config.default_namespace.clone());
        Scope::Namespace(ns)
    };
    let client = Client::try_from(config).map_err(IlogsError::Transport)?;

    let candidates = pods::list_candidates(client, &scope, &args.filter).await?;
    let selected = pods::resolve_selection(candidates, &TermPrompt)?;

    // Log fetching is not wired up yet; the resolved selection is where it
    // plugs in, one request per pod restricted by --container and --tail.
    debug!(
        pods = selected.len(),
        container = args.container.as_deref().unwrap_or(""),
        tail = args.tail,
        "selection resolved"
    );

    Ok(())
}
