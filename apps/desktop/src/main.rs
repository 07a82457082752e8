use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use client_core::{Document, ElementId, TaskClient, UiController, View};
use shared::domain::{SortBy, TaskUpdate};
use tracing_subscriber::EnvFilter;

mod config;

#[derive(Parser, Debug)]
#[command(about = "Task desk client for the task prioritizer backend")]
struct Args {
    /// Overrides the configured backend base URL.
    #[arg(long, global = true)]
    server_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fill the task form and submit it.
    Add {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        deadline: String,
        #[arg(long, default_value = "")]
        effort: String,
        #[arg(long, default_value = "")]
        category: String,
    },
    /// Fetch and render the current task list.
    Schedule,
    /// Have the backend reorder its list, then render it.
    Sort {
        #[arg(long, value_enum, default_value_t = SortKey::Priority)]
        by: SortKey,
    },
    /// Send a partial update for a named task.
    Update {
        #[arg(long)]
        name: String,
        #[arg(long)]
        priority: Option<String>,
        #[arg(long)]
        deadline: Option<String>,
        #[arg(long)]
        effort: Option<String>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SortKey {
    Priority,
    Deadline,
    Name,
}

impl From<SortKey> for SortBy {
    fn from(value: SortKey) -> Self {
        match value {
            SortKey::Priority => SortBy::Priority,
            SortKey::Deadline => SortBy::Deadline,
            SortKey::Name => SortBy::Name,
        }
    }
}

fn build_client(settings: &config::Settings) -> Result<TaskClient> {
    let mut http = reqwest::Client::builder();
    if let Some(timeout) = settings.request_timeout() {
        http = http.timeout(timeout);
    }
    let http = http.build().context("failed to build http client")?;
    let base_url = settings.server_url()?;
    TaskClient::with_http_client(&base_url, http)
        .with_context(|| format!("failed to resolve endpoints under {base_url}"))
}

fn print_document(doc: &Document) {
    for message in doc.alerts() {
        println!("alert: {message}");
    }
    for block in doc.schedule() {
        println!("{}", block.heading);
        for paragraph in &block.paragraphs {
            println!("  {paragraph}");
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    let args = Args::parse();

    let mut settings = config::load_settings();
    settings.override_server_url(args.server_url);
    tracing::debug!(?settings, "loaded settings");

    let client = build_client(&settings)?;
    let mut controller = UiController::new(client, Document::new());

    match args.command {
        Command::Add {
            name,
            deadline,
            effort,
            category,
        } => {
            controller.reveal_task_form();
            let view = controller.view_mut();
            view.set_value(ElementId::TaskName, &name);
            view.set_value(ElementId::Deadline, &deadline);
            view.set_value(ElementId::Time, &effort);
            view.set_value(ElementId::Category, &category);
            controller.submit_task().await;

            let view = controller.view();
            let fields: Vec<String> = [
                ElementId::TaskName,
                ElementId::Deadline,
                ElementId::Time,
                ElementId::Category,
            ]
            .into_iter()
            .map(|id| format!("{}={:?}", id.as_str(), view.value(id)))
            .collect();
            println!("form: {}", fields.join(" "));
        }
        Command::Schedule => controller.generate_schedule().await,
        Command::Sort { by } => controller.sort_schedule(by.into()).await,
        Command::Update {
            name,
            priority,
            deadline,
            effort,
        } => {
            let update = TaskUpdate {
                name,
                priority,
                deadline,
                estimated_effort: effort,
            };
            controller.update_task(&update).await;
        }
    }

    print_document(controller.view());
    Ok(())
}
