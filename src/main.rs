//! Ping service command line.
//!
//! ```text
//! args → config (TOML, defaults) → logging
//!      → ping     : reply text
//!      → dispatch : Request → Router → Response (status, headers, body)
//!      → encode   : fields → JSON body
//!      → decode   : JSON body → fields
//! ```

use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use ping_service::config::{load_config, ServiceConfig};
use ping_service::observability::logging::init_logging;
use ping_service::{PingService, Request, Response, Router};

#[derive(Parser)]
#[command(name = "ping-service")]
#[command(about = "Ping service and JSON response codec", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured log level.
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the reply for a message
    Ping { message: String },
    /// Route a request and print the response
    Dispatch {
        #[arg(short, long, default_value = "POST")]
        method: String,
        /// Request URI (defaults to the configured ping path)
        #[arg(short, long)]
        uri: Option<String>,
        /// Request header as NAME:VALUE (repeatable)
        #[arg(short = 'H', long = "header", value_parser = parse_header)]
        headers: Vec<(String, String)>,
        #[arg(short, long)]
        body: Option<String>,
    },
    /// Print the JSON body for the given fields
    Encode {
        #[arg(long, allow_negative_numbers = true)]
        code: i64,
        #[arg(long)]
        message: String,
        /// Data entry as KEY=VALUE (repeatable)
        #[arg(long = "data", value_parser = parse_data)]
        data: Vec<(String, String)>,
    },
    /// Decode a JSON body (no argument means no body)
    Decode { body: Option<String> },
}

fn parse_header(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once(':')
        .ok_or_else(|| format!("invalid header {s:?}, expected NAME:VALUE"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("invalid header {s:?}, empty name"));
    }
    Ok((name.to_string(), value.trim().to_string()))
}

fn parse_data(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid data entry {s:?}, expected KEY=VALUE"))?;
    Ok((key.to_string(), value.to_string()))
}

fn render(response: &Response) -> String {
    let mut out = format!(
        "status: {} (code {})\n",
        response.status_code(),
        response.code()
    );
    for (name, value) in response.headers() {
        out.push_str(&format!("{name}: {value}\n"));
    }
    out.push('\n');
    out.push_str(&response.body());
    out
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };
    if let Some(level) = cli.log_level {
        config.observability.log_level = level;
    }
    init_logging(&config.observability)?;

    tracing::debug!(
        ping_path = %config.ping.path,
        log_level = %config.observability.log_level,
        "Configuration loaded"
    );

    match cli.command {
        Commands::Ping { message } => {
            let service = PingService::new(config.ping.reply_prefix.clone());
            println!("{}", service.reply(&message));
        }
        Commands::Dispatch {
            method,
            uri,
            headers,
            body,
        } => {
            let router = Router::from_config(&config);
            let request = Request::new(method, uri.unwrap_or_else(|| config.ping.path.clone()))
                .with_headers(headers.into_iter().collect())
                .with_body(body);
            println!("{}", render(&router.dispatch(&request)));
        }
        Commands::Encode {
            code,
            message,
            data,
        } => {
            let response =
                Response::new(code, message).with_data(data.into_iter().collect::<BTreeMap<_, _>>());
            println!("{}", response.body());
        }
        Commands::Decode { body } => {
            let response = Response::from_body(body.as_deref());
            println!("code: {}", response.code());
            println!("classification: {:?} ({})", response.classification(), response.status_code());
            println!("message: {}", response.message());
            for (key, value) in response.data() {
                println!("data.{key}: {value}");
            }
        }
    }

    Ok(())
}
