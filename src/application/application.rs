use colored::Colorize;
use snafu::Snafu;
use snafu::prelude::*;
use tracing::{debug, info};

use crate::application::RuntimeConfig;
use crate::cli::Cli;
use crate::config::{Config, ConfigCreationError};
use crate::context::{ContextError, ContextItem, ContextProvider, ContextProviderTrait};
use crate::host::LocalIde;

pub struct Application;

impl Application {
    pub async fn run(cli: Cli) -> Result<(), ApplicationError> {
        let config = Config::read(&cli.root).await.context(ConfigSnafu)?;
        debug!("Loaded config: {:?}", config);

        let runtime_config = RuntimeConfig::new(cli, config);
        let provider = ContextProvider::from(runtime_config.variant);

        if runtime_config.describe {
            let description = provider.description();
            println!("{description}");
            if !description.render_inline_as.is_empty() {
                println!("Rendered inline as: {}", description.render_inline_as);
            }
            return Ok(());
        }

        let ide = LocalIde::from(&runtime_config);
        let items = provider
            .get_context_items(&runtime_config.query, &ide)
            .await
            .context(ProviderSnafu {
                title: provider.description().title,
            })?;

        if items.is_empty() {
            info!("Provider '{}' had no context to add", provider.description().title);
        }
        for item in &items {
            print!("{}", render_item(item));
        }

        Ok(())
    }
}

fn render_item(item: &ContextItem) -> String {
    format!(
        "{} {}\n{}\n",
        item.name.bold().green(),
        format!("({})", item.description).dimmed(),
        item.content
    )
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Critical failure encountered during configuration stage"))]
    ConfigError { source: ConfigCreationError },
    #[snafu(display("Context provider '{}' failed", title))]
    ProviderError { title: String, source: ContextError },
}
