//! beseda CLI: terminal chat client for a prompt/answer HTTP service

use beseda_client::{flatten_history, ChatApi, Config, Role, CONFIG_PATH};
use clap::{Parser, Subcommand};
use std::path::Path;

/// Terminal chat client with TUI
#[derive(Parser)]
#[command(name = "beseda")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base URL of the chat service (overrides the config file)
    #[arg(long, global = true)]
    endpoint: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the TUI (default when no command specified)
    Tui,

    /// Fetch and print the conversation history
    History {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Send a single prompt and print the answer
    Send {
        /// The prompt text
        prompt: String,
    },

    /// Write the current endpoint to the config file
    Init,
}

fn main() {
    let cli = Cli::parse();

    let endpoint = resolve_endpoint(cli.endpoint.as_deref());
    let api = ChatApi::new(endpoint);

    match cli.command {
        None | Some(Commands::Tui) => {
            // Default: open TUI. No tracing subscriber here, the TUI owns
            // the terminal.
            let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
            if let Err(e) = rt.block_on(beseda_tui::run_tui(api)) {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        Some(Commands::History { json }) => {
            init_tracing();
            let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
            rt.block_on(cmd_history(&api, json));
        }
        Some(Commands::Send { prompt }) => {
            init_tracing();
            let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
            rt.block_on(cmd_send(&api, &prompt));
        }
        Some(Commands::Init) => {
            cmd_init(api.base_url());
        }
    }
}

/// Install a subscriber for headless commands, honoring `RUST_LOG`.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

/// Resolve the endpoint: flag, then config file, then the built-in default.
fn resolve_endpoint(flag: Option<&str>) -> String {
    if let Some(endpoint) = flag {
        return endpoint.to_string();
    }
    Config::load_or_default(Path::new(".")).base_url
}

async fn cmd_history(api: &ChatApi, json: bool) {
    let entries = match api.fetch_history().await {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&entries).expect("failed to serialize")
        );
        return;
    }

    let messages = flatten_history(&entries);
    if messages.is_empty() {
        println!("No conversation yet");
        return;
    }

    for message in messages {
        let speaker = match message.role {
            Role::User => "you",
            Role::Assistant => "assistant",
        };
        println!("{speaker}: {}", message.text);
    }
}

async fn cmd_send(api: &ChatApi, prompt: &str) {
    let prompt = prompt.trim();
    if prompt.is_empty() {
        eprintln!("Error: empty prompt");
        std::process::exit(1);
    }

    match api.send_prompt(prompt).await {
        Ok(answer) => println!("{answer}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn cmd_init(endpoint: &str) {
    let config = Config {
        base_url: endpoint.to_string(),
    };
    let path = Path::new(CONFIG_PATH);

    match config.save(path) {
        Ok(()) => println!("Created {}", path.display()),
        Err(e) => {
            eprintln!("Failed to write config: {e}");
            std::process::exit(1);
        }
    }
}
