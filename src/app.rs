//! Command-line front end.
//!
//! With an address argument a single query runs. Without one, the user is
//! prompted for an address and port repeatedly, one query per entry.

use clap::Parser;
use mcpinger::config::Config;
use mcpinger::pipeline::Pipeline;
use mcpinger::render::RenderMode;
use mcpinger::status::MotdSource;
use mcpinger::Result;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Look up a Minecraft server's MOTD, player count and version.
#[derive(Parser, Debug)]
#[command(name = "mcpinger", author, version, about)]
pub struct Args {
    /// Server IP or domain, optionally with a `:port` suffix. Prompts when omitted.
    pub address: Option<String>,

    /// Port used when the address has none (default: MC_DEFAULT_PORT or 25565)
    #[arg(short, long)]
    pub port: Option<String>,

    /// Output format: ansi, html or plain
    #[arg(short, long, default_value_t = RenderMode::Ansi)]
    pub format: RenderMode,

    /// Show the raw MOTD with color codes instead of the cleaned text
    #[arg(long)]
    pub raw_motd: bool,

    /// Do not forward results to DISCORD_WEBHOOK_URL
    #[arg(long)]
    pub no_webhook: bool,
}

/// Run the application.
///
/// Returns `Ok(false)` when a one-shot query ends in a user-facing error.
pub async fn run(args: Args) -> Result<bool> {
    let mut config = Config::from_env()?;

    if let Some(port) = &args.port {
        config.set_default_port(port)?;
    }
    if args.raw_motd {
        config.motd_source = MotdSource::Raw;
    }
    if args.no_webhook {
        config.webhook_url = None;
    }

    let pipeline = Pipeline::new(config)?;

    match args.address {
        Some(address) => {
            let port = pipeline.config().default_port.clone();
            let (text, ok) = pipeline.display(&address, &port, args.format).await;
            println!("{}", text);
            Ok(ok)
        }
        None => {
            prompt_loop(&pipeline, args.format).await?;
            Ok(true)
        }
    }
}

/// Prompt for address and port until EOF or `quit`.
async fn prompt_loop(pipeline: &Pipeline, mode: RenderMode) -> Result<()> {
    let default_port = pipeline.config().default_port.clone();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        prompt("Server IP/Domain: ")?;
        let Some(address) = lines.next_line().await? else {
            break;
        };
        let address = address.trim();
        if address.is_empty() {
            continue;
        }
        if address.eq_ignore_ascii_case("quit") || address.eq_ignore_ascii_case("exit") {
            break;
        }

        prompt(&format!("Port (Default: {}): ", default_port))?;
        let port = match lines.next_line().await? {
            Some(port) if !port.trim().is_empty() => port,
            _ => default_port.clone(),
        };

        let (text, _) = pipeline.display(address, &port, mode).await;
        println!("{}\n", text);
    }

    Ok(())
}

fn prompt(text: &str) -> Result<()> {
    let mut stdout = std::io::stdout();
    write!(stdout, "{}", text)?;
    stdout.flush()?;
    Ok(())
}
