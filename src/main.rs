//! Wiring & DI. Entry point: load config, bootstrap adapters, inject into the import service, run.
//! No business logic here; the import flow lives in ChatImportService.
//!
//! Usage: `chat-import [FILE]...`. Without arguments, files are asked for interactively.

use chat_import::adapters::fs::TokioFileReader;
use chat_import::adapters::notify::ConsoleNotifier;
use chat_import::adapters::store::InMemoryChatStore;
use chat_import::adapters::ui::{ImportControl, prompt_for_file};
use chat_import::domain::SelectedFile;
use chat_import::ports::{FileTextReader, ImportHandler, NotificationSink};
use chat_import::shared::config::AppConfig;
use chat_import::usecases::{BoundaryResult, ChatImportService, ContainmentBoundary};
use dotenv::dotenv;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    let cfg = AppConfig::load();
    let log_filter = cfg
        .as_ref()
        .map(|c| c.log_filter_or_default().to_string())
        .unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| log_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => debug!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }
    let cfg = cfg.unwrap_or_else(|e| {
        warn!(error = %e, "config not loaded, using defaults");
        AppConfig::default()
    });

    let policy = cfg
        .shape_policy_or_default()
        .map_err(|e| anyhow::anyhow!("{}", e))?;
    info!(policy = %policy, accept = cfg.accept_or_default(), "chat import ready");

    // --- Adapters ---
    let store = Arc::new(InMemoryChatStore::new());
    let reader: Arc<dyn FileTextReader> = Arc::new(TokioFileReader::new());
    let notifier: Arc<dyn NotificationSink> = Arc::new(ConsoleNotifier::new());
    let handler: Arc<dyn ImportHandler> = Arc::clone(&store) as Arc<dyn ImportHandler>;

    // --- Service behind the containment boundary ---
    let service = ChatImportService::new(reader, Some(handler), notifier, policy);
    let boundary = ContainmentBoundary::new(Arc::new(service));
    let mut control = ImportControl::new(cfg.accept_or_default());

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        while let Some(file) = prompt_for_file(&control).map_err(|e| anyhow::anyhow!("{}", e))? {
            control.select(file);
            report(boundary.submit(&mut control).await);
        }
    } else {
        for arg in args {
            control.select(SelectedFile::new(arg));
            report(boundary.submit(&mut control).await);
        }
    }

    let chats = store.chats().await;
    for chat in &chats {
        info!(
            id = chat.id,
            description = %chat.description,
            messages = chat.messages.len(),
            imported_at = %chat.imported_at.to_rfc3339(),
            "chat in state"
        );
    }
    info!(count = chats.len(), "done");

    Ok(())
}

/// The boundary's fallback is shown in place of the import surface.
fn report(result: BoundaryResult) {
    match result {
        BoundaryResult::Completed(outcome) => debug!(?outcome, "import attempt finished"),
        BoundaryResult::Unavailable(notice) => ConsoleNotifier::new().error(notice),
    }
}
