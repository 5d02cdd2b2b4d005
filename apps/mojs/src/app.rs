//! The command the binary runs, kept separate from `main` so it can be
//! driven against a mock backend.

use crate::error::MojsError;

use client_core::config::{load_registry, registry_from_env};
use client_core::error::CoreError;
use client_core::{ApiClient, CurrentUser, LocaleResolver};

use common::ErrorLocation;
use models::{Id, Registry};

use std::io::Write;
use std::panic::Location;
use std::path::PathBuf;

use clap::Parser;
use log::info;

/// Report the signed-in user of a MOJS backend and, optionally, one submission.
#[derive(Parser, Debug, Clone, PartialEq, Default)]
#[command(name = "mojs", version)]
pub struct Args {
    /// Registry JSON file published by the host page (MOJS_* env vars are used when absent)
    #[arg(long = "registry", short = 'r', value_name = "FILE")]
    pub registry_path: Option<PathBuf>,

    /// Submission to look up, numeric or string id
    #[arg(value_name = "SUBMISSION_ID")]
    pub submission_id: Option<String>,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long, env = "MOJS_LOG")]
    pub log_level: Option<String>,
}

impl Args {
    pub fn submission_id(&self) -> Option<Id> {
        self.submission_id.as_deref().map(parse_id)
    }
}

fn parse_id(value: &str) -> Id {
    match value.parse::<i64>() {
        Ok(number) => Id::Int(number),
        Err(_) => Id::from(value),
    }
}

/// Load the registry the way the page would publish it.
#[track_caller]
pub fn load(args: &Args) -> Result<Registry, MojsError> {
    let registry = match &args.registry_path {
        // An explicit file that is missing is a typo, not an anonymous page.
        Some(path) if !path.exists() => {
            return Err(MojsError::Usage {
                message: format!("registry file not found: {}", path.display()),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Some(path) => load_registry(path),
        None => registry_from_env(),
    }
    .map_err(CoreError::from)?;
    Ok(registry)
}

/// Report the signed-in user and, if asked, one submission's title.
pub async fn run(registry: &Registry, args: &Args, out: &mut dyn Write) -> Result<(), MojsError> {
    let client = ApiClient::new(registry).map_err(CoreError::from)?;
    let resolver = LocaleResolver::new(registry);

    info!(
        "Using API at {} with locale {}",
        client.base_url(),
        resolver.current_locale()
    );

    match client.fetch_current_user().await {
        CurrentUser::Found(user) => {
            let name = resolver.resolve(Some(&user.given_name));
            write_line(out, &format!("Signed in as {} ({name})", user.username))?;
        }
        CurrentUser::Absent => write_line(out, "Not signed in")?,
    }

    if let Some(id) = args.submission_id() {
        let submission = client.fetch_submission(&id).await.map_err(CoreError::from)?;
        let title = resolver.resolve(
            submission
                .current_publication
                .as_ref()
                .map(|publication| &publication.title),
        );
        write_line(out, &format!("Submission {}: {title}", submission.id))?;
    }

    Ok(())
}

#[track_caller]
fn write_line(out: &mut dyn Write, line: &str) -> Result<(), MojsError> {
    writeln!(out, "{line}").map_err(|e| MojsError::Mojs {
        message: format!("Failed to write output: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })
}
