use crate::ai::client::OllamaClient;
use crate::catalog::{Catalog, FieldValues};
use crate::config::RelayConfig;
use crate::error::{AppError, ConfigError};
use crate::export::{self, ExportFormat};
use crate::server;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "docsmith")]
#[command(version, about = "Fill a document template and let a local Ollama model write it")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Ollama base URL (overrides OLLAMA_URL)
    #[arg(long, global = true, value_name = "URL")]
    pub ollama_url: Option<String>,

    /// Model name (overrides OLLAMA_MODEL)
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Backend request timeout (overrides OLLAMA_TIMEOUT_SECONDS)
    #[arg(long, global = true, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP relay
    Serve {
        /// Listen address (overrides DOCSMITH_BIND)
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,

        /// The single UI origin allowed by CORS (overrides DOCSMITH_ALLOWED_ORIGIN)
        #[arg(long, value_name = "URL")]
        origin: Option<String>,
    },

    /// List the available templates
    Templates,

    /// Print the prompt a template builds from the given values
    Render {
        /// Template id, e.g. "official-email"
        id: String,

        /// Field value in format "name=value" (can be specified multiple times)
        #[arg(long = "set", short = 's', value_parser = parse_assignment)]
        values: Vec<(String, String)>,
    },

    /// Render a template and generate the document with the backend
    Generate {
        /// Template id, e.g. "official-email"
        id: String,

        /// Field value in format "name=value" (can be specified multiple times)
        #[arg(long = "set", short = 's', value_parser = parse_assignment)]
        values: Vec<(String, String)>,

        /// Also export the result; without a path, writes "<id>.<ext>"
        #[arg(long, value_name = "FILE", num_args = 0..=1)]
        out: Option<Option<PathBuf>>,

        /// Export format
        #[arg(long, value_enum, default_value_t = ExportFormat::Text)]
        format: ExportFormat,
    },
}

impl Cli {
    /// Environment configuration with command-line overrides applied.
    pub fn relay_config(&self, base: RelayConfig) -> RelayConfig {
        let mut config = base;
        if let Some(url) = &self.ollama_url {
            config.ollama_url = url.clone();
        }
        if let Some(model) = &self.model {
            config.model = model.clone();
        }
        if let Some(timeout) = self.timeout {
            config.timeout_seconds = timeout;
        }
        if let Commands::Serve { bind, origin } = &self.command {
            if let Some(bind) = bind {
                config.bind = bind.clone();
            }
            if let Some(origin) = origin {
                config.allowed_origin = origin.clone();
            }
        }
        config
    }
}

pub fn parse_assignment(s: &str) -> Result<(String, String), ConfigError> {
    s.split_once('=')
        .filter(|(name, _)| !name.trim().is_empty())
        .map(|(name, value)| (name.trim().to_string(), value.to_string()))
        .ok_or_else(|| ConfigError::InvalidAssignment(s.to_string()))
}

fn collect_values(pairs: Vec<(String, String)>) -> FieldValues {
    let mut values = FieldValues::default();
    for (name, value) in pairs {
        values.insert(name, value);
    }
    values
}

pub async fn run(cli: Cli) -> Result<(), AppError> {
    let config = cli.relay_config(RelayConfig::from_env());
    let catalog = Catalog::builtin();

    match cli.command {
        Commands::Serve { .. } => server::serve(&config, catalog).await,
        Commands::Templates => {
            print!("{}", describe_catalog(&catalog));
            Ok(())
        }
        Commands::Render { id, values } => {
            let prompt = catalog.find(&id)?.render_validated(&collect_values(values))?;
            println!("{prompt}");
            Ok(())
        }
        Commands::Generate {
            id,
            values,
            out,
            format,
        } => {
            let template = catalog.find(&id)?;
            let prompt = template.render_validated(&collect_values(values))?;

            log::info!("📝 Generating '{}' with {}", template.id, config.model);
            let client = OllamaClient::new(&config)?;
            let output = client.generate(&prompt).await?;
            println!("{output}");

            if let Some(path) = out {
                let path = path
                    .unwrap_or_else(|| PathBuf::from(export::default_file_name(template.id, format)));
                export::write_document(&path, &output, format)?;
            }
            Ok(())
        }
    }
}

fn describe_catalog(catalog: &Catalog) -> String {
    let mut out = String::new();
    for template in catalog.list() {
        out.push_str(&format!("{:<18} {}\n", template.id, template.title));
        out.push_str(&format!("{:<18} {}\n", "", template.description));
        for field in template.fields {
            let marker = if field.optional { "" } else { "*" };
            out.push_str(&format!("{:<18}   --set {}={}  {}\n", "", field.name, marker, field.label));
        }
        out.push('\n');
    }
    out
}
