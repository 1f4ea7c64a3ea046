//! Schema migrations
//!
//! SQL files under this crate's `migrations/` directory are compiled into the
//! binary, so a deployed server needs no checkout of the source tree.

use std::borrow::Cow;
use std::future::Future;
use std::pin::Pin;

use sqlx::error::BoxDynError;
use sqlx::migrate::{MigrateError, Migration, MigrationSource, MigrationType, Migrator};
use sqlx::PgPool;
use tracing::info;

/// `(version, description, sql)` per file, in version order
const EMBEDDED: &[(i64, &str, &str)] = &[(
    20_250_101_000_000,
    "init",
    include_str!("../migrations/20250101000000_init.sql"),
)];

/// Migration source backed by the SQL embedded at compile time
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedMigrations;

impl EmbeddedMigrations {
    pub fn migrations(self) -> Vec<Migration> {
        EMBEDDED
            .iter()
            .map(|&(version, description, sql)| {
                Migration::new(
                    version,
                    Cow::Borrowed(description),
                    MigrationType::Simple,
                    Cow::Borrowed(sql),
                    false,
                )
            })
            .collect()
    }
}

impl<'s> MigrationSource<'s> for EmbeddedMigrations {
    fn resolve(
        self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Migration>, BoxDynError>> + Send + 's>> {
        Box::pin(async move { Ok(self.migrations()) })
    }
}

/// Apply pending migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    let migrator = Migrator::new(EmbeddedMigrations).await?;
    info!(
        migrations = migrator.iter().count(),
        "Applying database migrations"
    );
    migrator.run(pool).await
}
