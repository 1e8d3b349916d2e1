#![allow(non_snake_case)]

mod app;
mod host;
mod theme;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;

use converse_core::DEFAULT_MODELS;

/// Initial session model, set from the command line
static INITIAL_MODEL: OnceLock<String> = OnceLock::new();

/// Get the model the session starts on (from `--model` or the catalog default).
pub fn initial_model() -> String {
    INITIAL_MODEL
        .get()
        .cloned()
        .unwrap_or_else(|| DEFAULT_MODELS[0].to_string())
}

/// Converse - desktop chat client for conversational agent sessions
#[derive(Parser, Debug)]
#[command(name = "converse-desktop")]
#[command(about = "Converse - chat interface for conversational agent sessions")]
struct Args {
    /// Instance name shown in the window title (useful when running
    /// multiple instances side by side)
    #[arg(short, long)]
    name: Option<String>,

    /// Model the session starts on
    #[arg(short, long)]
    model: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    if let Some(model) = args.model {
        let _ = INITIAL_MODEL.set(model);
    }

    let title = match args.name {
        Some(ref name) => format!("Converse - {}", name),
        None => "Converse".to_string(),
    };

    tracing::info!(model = %initial_model(), "Starting '{}'", title);

    // Chat column: narrow, nearly full height
    let window_width = 760.0;
    let window_height = 900.0;

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
