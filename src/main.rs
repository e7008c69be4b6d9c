//! secrets9s - a K9s-inspired terminal UI for cert-manager and external-secrets
//!
//! Watches certificates, issuers, external secrets and secret stores through
//! the Kubernetes Watch API and offers inspect and delete on each row.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use secrets9s::cli::{self, ConfigSubcommand};
use secrets9s::config::ConfigLoader;
use secrets9s::kube;
use secrets9s::models::DashboardTab;
use secrets9s::routing::DEFAULT_FALLBACK_NAMESPACE;

/// secrets9s - a K9s-inspired terminal UI for cert-manager and external-secrets
#[derive(Parser, Debug)]
#[command(name = "secrets9s")]
#[command(about = "A K9s-inspired terminal UI for cert-manager and external-secrets resources", long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(long, short = 'd', global = true)]
    debug: bool,

    /// Namespace to watch ("all" for every namespace)
    #[arg(long, short = 'n', global = true)]
    namespace: Option<String>,

    /// Disable delete actions
    #[arg(long, global = true)]
    read_only: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Configuration management
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
    /// Print one tab as a table
    List {
        /// certificates, issuers, externalsecrets or secretstores
        #[arg(default_value = "certificates")]
        tab: String,
    },
    /// Print the details of one resource
    Inspect {
        /// Inspect path, e.g. /inspect/certificates/default/web-tls
        path: String,
    },
    /// Delete one resource after confirmation
    Delete {
        /// Inspect path of the resource to delete
        path: String,
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
    /// Show version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Some(Command::Config { subcommand }) => return cli::handle_config_command(subcommand),
        Some(Command::Version) => {
            cli::display_version();
            return Ok(());
        }
        _ => {}
    }

    let log_file = cli::init_logging(args.debug)?;
    if let Some(ref log_path) = log_file {
        eprintln!(
            "Debug logging enabled. Logs written to: {}",
            log_path.display()
        );
    }

    let mut config = ConfigLoader::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load configuration, using defaults: {:#}", e);
        ConfigLoader::load_defaults()
    });
    if let Some(ns) = args.namespace {
        config.default_namespace = ns;
    }
    if args.read_only {
        config.read_only = true;
    }

    let namespace = kube::resolve_namespace(&config.default_namespace);
    let fallback_namespace = namespace
        .clone()
        .unwrap_or_else(|| DEFAULT_FALLBACK_NAMESPACE.to_string());
    tracing::debug!(
        "Configuration loaded: readOnly={}, namespace={:?}",
        config.read_only,
        namespace
    );

    tracing::debug!("Initializing Kubernetes client");
    let client = kube::create_client().await?;

    match args.command {
        Some(Command::List { tab }) => {
            let tab = DashboardTab::from_token(&tab)
                .with_context(|| format!("Unknown tab: {}", tab))?;
            cli::list(client, tab, namespace, config.read_only).await
        }
        Some(Command::Inspect { path }) => cli::inspect(client, &path, &fallback_namespace).await,
        Some(Command::Delete { path, yes }) => {
            cli::delete(client, &path, &fallback_namespace, yes, config.read_only).await
        }
        _ => run_dashboard(client, config, namespace, fallback_namespace).await,
    }
}

#[cfg(feature = "tui")]
async fn run_dashboard(
    client: ::kube::Client,
    config: secrets9s::config::Config,
    namespace: Option<String>,
    fallback_namespace: String,
) -> Result<()> {
    use secrets9s::kube::KubeDeleter;
    use secrets9s::tui::{self, AppSettings};
    use secrets9s::watcher::ResourceWatcher;
    use std::sync::Arc;

    let context = kube::get_context().await?;
    tracing::info!("Connected to Kubernetes context: {}", context);

    let (mut watcher, event_rx) = ResourceWatcher::new(client.clone());
    watcher.watch_all(namespace.as_deref())?;

    let settings = AppSettings {
        context,
        namespace,
        fallback_namespace,
        read_only: config.read_only,
        no_icons: config.ui.no_icons,
    };
    tui::run_tui(
        settings,
        &config,
        watcher,
        event_rx,
        Arc::new(KubeDeleter::new(client)),
    )
    .await
}

#[cfg(not(feature = "tui"))]
async fn run_dashboard(
    _client: ::kube::Client,
    _config: secrets9s::config::Config,
    _namespace: Option<String>,
    _fallback_namespace: String,
) -> Result<()> {
    anyhow::bail!("This build has no terminal UI; use the list, inspect or delete subcommands")
}
