//! CLI command execution

use super::commands::{Cli, Commands};
use crate::config::ConnectorConfig;
use crate::engine::{SyncConfig, SyncEngine};
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig};
use crate::sink::{JsonlSink, RecordSink};
use crate::state::StateManager;
use crate::streams::{self, StreamDescriptor};
use serde_json::json;
use tracing::info;

/// Executes a parsed CLI invocation
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner for the given CLI invocation
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the requested command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Check => self.run_check().await,
            Commands::Streams => self.run_streams(),
            Commands::Discover => self.run_discover(),
            Commands::Sync {
                streams,
                output,
                max_records,
                full_refresh,
            } => {
                self.run_sync(
                    streams.as_deref(),
                    output.as_deref(),
                    *max_records,
                    *full_refresh,
                )
                .await
            }
        }
    }

    async fn run_check(&self) -> Result<()> {
        let connector = self.load_config()?;
        let engine = SyncEngine::new(self.build_client(&connector), StateManager::in_memory());

        engine.check_connection(&connector).await?;
        println!("Connection check passed");
        Ok(())
    }

    fn run_streams(&self) -> Result<()> {
        for stream in streams::all() {
            println!("{}", stream.name);
        }
        Ok(())
    }

    fn run_discover(&self) -> Result<()> {
        let catalog: Vec<_> = streams::all()
            .iter()
            .map(|stream| {
                json!({
                    "name": stream.name,
                    "path": stream.path,
                    "schema": stream.schema.to_json(),
                })
            })
            .collect();

        println!(
            "{}",
            serde_json::to_string_pretty(&json!({ "streams": catalog }))?
        );
        Ok(())
    }

    async fn run_sync(
        &self,
        selection: Option<&str>,
        output: Option<&std::path::Path>,
        max_records: Option<usize>,
        full_refresh: bool,
    ) -> Result<()> {
        let connector = self.load_config()?;
        let selected = select_streams(selection)?;

        let state = self.load_state()?;
        let mut sync_config = SyncConfig::new().with_full_refresh(full_refresh);
        if let Some(max) = max_records {
            sync_config = sync_config.with_max_records(max);
        }

        let mut engine =
            SyncEngine::new(self.build_client(&connector), state).with_config(sync_config);

        let mut sink: Box<dyn RecordSink> = match output {
            Some(path) => Box::new(JsonlSink::new(std::fs::File::create(path)?)),
            None => Box::new(JsonlSink::new(std::io::stdout())),
        };

        let outcomes = engine.sync_all(&selected, &connector, sink.as_mut()).await;

        let mut failures = Vec::new();
        for outcome in &outcomes {
            match &outcome.error {
                None => info!(
                    stream = %outcome.stream,
                    records = outcome.records,
                    pages = outcome.pages,
                    "stream ok"
                ),
                Some(e) => failures.push(format!("{}: {e}", outcome.stream)),
            }
        }

        let stats = engine.stats();
        info!(
            records = stats.records_synced,
            pages = stats.pages_fetched,
            streams = stats.streams_synced,
            duration_ms = stats.duration_ms,
            "sync finished"
        );

        if failures.is_empty() {
            Ok(())
        } else {
            Err(Error::Other(format!(
                "{} stream(s) failed: {}",
                failures.len(),
                failures.join("; ")
            )))
        }
    }

    fn load_config(&self) -> Result<ConnectorConfig> {
        if let Some(json) = &self.cli.config_json {
            return ConnectorConfig::from_json(json);
        }
        if let Some(path) = &self.cli.config {
            return ConnectorConfig::from_file(path);
        }
        Err(Error::config("no configuration given (--config or --config-json)"))
    }

    fn load_state(&self) -> Result<StateManager> {
        if let Some(json) = &self.cli.state_json {
            return StateManager::from_json(json);
        }
        if let Some(path) = &self.cli.state {
            return StateManager::from_file(path);
        }
        Ok(StateManager::in_memory())
    }

    fn build_client(&self, connector: &ConnectorConfig) -> HttpClient {
        let mut builder = HttpClientConfig::builder().base_url(&connector.api_url);
        if let Some(user_agent) = &connector.user_agent {
            builder = builder.user_agent(user_agent);
        }
        HttpClient::with_config(builder.build())
    }
}

/// Resolve a comma-separated stream selection, empty meaning all
fn select_streams(selection: Option<&str>) -> Result<Vec<StreamDescriptor>> {
    match selection {
        None | Some("") => Ok(streams::all()),
        Some(names) => names
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(|name| streams::find(name).ok_or_else(|| Error::stream_not_found(name)))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_streams_all_by_default() {
        let selected = select_streams(None).unwrap();
        assert_eq!(selected.len(), 3);

        let selected = select_streams(Some("")).unwrap();
        assert_eq!(selected.len(), 3);
    }

    #[test]
    fn test_select_streams_by_name() {
        let selected = select_streams(Some("skus, transactions")).unwrap();
        let names: Vec<_> = selected.iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["skus", "transactions"]);
    }

    #[test]
    fn test_select_streams_unknown_name() {
        let err = select_streams(Some("transactions,clicks")).unwrap_err();
        assert!(matches!(err, Error::StreamNotFound { ref stream } if stream == "clicks"));
    }
}
