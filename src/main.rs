//! Route registry CLI.
//!
//! Loads a route table (or the built-in default) and builds, matches, or
//! annotates requests from the command line.

use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use http::Method;

use route_registry::config::{load_config, RegistryConfig};
use route_registry::http::annotate_body;
use route_registry::observability::init_logging;
use route_registry::{Params, RouteRegistry};

#[derive(Parser)]
#[command(name = "route-registry")]
#[command(about = "Build and match REST API route templates", long_about = None)]
struct Cli {
    /// Route table (TOML). Uses the built-in table when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List routes in match order
    List,
    /// Build a URL from a route id (users.one) or a template (/users/:id)
    Build {
        route: String,
        /// Placeholder values as NAME=VALUE
        #[arg(value_parser = parse_param)]
        params: Vec<(String, String)>,
    },
    /// Print the template matching a URL
    Match { url: String },
    /// Print the custom type for a URL
    CustomType { url: String },
    /// Add the custom type to a JSON request body
    Annotate {
        #[arg(short, long, default_value = "POST")]
        method: String,
        url: String,
        body: String,
    },
    /// Validate the route table
    Check,
}

fn parse_param(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{s}'"))?;
    if name.is_empty() {
        return Err(format!("empty parameter name in '{s}'"));
    }
    Ok((name.to_string(), value.to_string()))
}

fn main() -> Result<ExitCode, Box<dyn Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => RegistryConfig::default(),
    };
    init_logging(&config.observability)?;

    let registry = RouteRegistry::from_config(&config)?;

    match cli.command {
        Commands::List => {
            for route in registry.routes() {
                println!(
                    "{:<28} {:<36} {}",
                    route.id(),
                    route.template(),
                    route.custom_type().unwrap_or("-")
                );
            }
        }
        Commands::Build { route, params } => {
            let params: Params = params.into_iter().collect();
            let url = if route.starts_with('/') {
                registry.build_url(&route, &params)
            } else {
                registry.url_for(&route, &params)?
            };
            println!("{url}");
        }
        Commands::Match { url } => match registry.template_from_url(&url)? {
            Some(template) => println!("{template}"),
            None => {
                eprintln!("no match: {url}");
                return Ok(ExitCode::FAILURE);
            }
        },
        Commands::CustomType { url } => {
            println!("{}", registry.custom_type_from_url(&url)?.unwrap_or("none"));
        }
        Commands::Annotate { method, url, body } => {
            let method = Method::from_bytes(method.to_uppercase().as_bytes())?;
            let body = serde_json::from_str(&body)?;
            let annotated = annotate_body(&registry, &method, &url, body)?;
            println!("{}", serde_json::to_string_pretty(&annotated)?);
        }
        Commands::Check => {
            println!("OK: {} routes, prefix {}", registry.len(), registry.prefix());
        }
    }

    Ok(ExitCode::SUCCESS)
}
