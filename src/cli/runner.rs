//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::client::Client;
use crate::context::CallContext;
use crate::endpoint::ImageRequest;
use crate::error::{Error, Result};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let client = self.client()?;
        let ctx = CallContext::with_timeout(Duration::from_secs(self.cli.timeout));
        cancel_on_ctrl_c(&ctx);

        match &self.cli.command {
            Commands::Webcam { code } => {
                let res = client.get_webcam(&ctx, code).await?;
                self.emit(&res)
            }
            Commands::Webcams => {
                let res = client.get_webcams(&ctx).await?;
                info!("Fetched {} webcams", res.webcams.len());
                self.emit(&res)
            }
            Commands::Images { code, .. } => {
                let request = self.image_request()?;
                let res = client.get_images(&ctx, &request).await?;
                info!("Fetched {} images for {}", res.images.len(), code);
                self.emit(&res)
            }
        }
    }

    fn client(&self) -> Result<Client> {
        let mut builder = Client::builder();
        if let Some(ref url) = self.cli.base_url {
            builder = builder.base_url(url.clone());
        }
        builder.build()
    }

    /// Build the image request from the `images` subcommand flags
    pub fn image_request(&self) -> Result<ImageRequest> {
        let Commands::Images {
            code,
            days_old,
            start,
            end,
            oldest_first,
            limit,
        } = &self.cli.command
        else {
            return Err(Error::config("not an images command"));
        };

        let mut builder = ImageRequest::builder(code.clone())
            .newest_first(!oldest_first)
            .limit(*limit);
        if let Some(days) = days_old {
            builder = builder.days_old(*days);
        }
        if let (Some(start), Some(end)) = (start, end) {
            builder = builder.time_range(*start, *end);
        }
        builder.build()
    }

    fn emit<T: Serialize>(&self, value: &T) -> Result<()> {
        let text = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value),
            OutputFormat::Pretty => serde_json::to_string_pretty(value),
        }
        .map_err(|e| Error::output(e.to_string()))?;
        println!("{text}");
        Ok(())
    }
}

fn cancel_on_ctrl_c(ctx: &CallContext) {
    let token = ctx.token().clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            debug!("Interrupted, cancelling");
            token.cancel();
        }
    });
}
