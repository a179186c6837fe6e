use clap::Subcommand;
use serde_json::json;

use crate::cli::{utils::output_success, OutputFormat};
use crate::config;
use crate::database::DatabaseManager;

#[derive(Subcommand)]
pub enum MigrateCommands {
    #[command(about = "Apply all pending migrations")]
    Up,

    #[command(about = "Revert applied migrations")]
    Down {
        #[arg(long, default_value_t = 0, help = "Revert down to this version (0 reverts everything)")]
        target: i64,
    },
}

pub async fn handle(cmd: MigrateCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let database = DatabaseManager::connect(&config::config().database).await?;

    let result = match cmd {
        MigrateCommands::Up => database
            .migrate()
            .await
            .map(|_| ("Migrations applied".to_string(), json!({ "direction": "up" }))),
        MigrateCommands::Down { target } => database.rollback(target).await.map(|_| {
            (
                format!("Migrations reverted to version {}", target),
                json!({ "direction": "down", "target": target }),
            )
        }),
    };

    database.close().await;

    let (message, data) = result?;
    output_success(&output_format, &message, Some(data))
}
