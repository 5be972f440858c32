use crate::api::{index_projects, Project, ProttApi, ProttClient};
use crate::artboard::{Artboard, ArtboardMatcher};
use crate::auth::{resolve_credentials, store_password_in_keychain, PasswordSource};
use crate::cli::Cli;
use crate::config::Config;
use crate::error::Error;
use crate::output;
use crate::walker::ArtboardWalker;
use anyhow::{Context, Result};
use colored::Colorize;
use std::collections::HashMap;
use std::path::Path;

/// Counts of one upload run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UploadSummary {
    pub uploaded: usize,
    /// Artboards whose project does not exist on Prott
    pub skipped: usize,
    /// Uploads answered with a non-success status
    pub rejected: usize,
}

pub async fn run(cli: Cli) -> Result<()> {
    let root = cli.current_directory.as_path();
    if !root.is_dir() {
        return Err(Error::Argument(format!(
            "{} is not an existing directory",
            root.display()
        ))
        .into());
    }

    let config = Config::load()?;
    let base_url = cli
        .base_url
        .clone()
        .or_else(|| config.base_url.clone())
        .unwrap_or_else(|| crate::api::url::DEFAULT_BASE_URL.to_string());

    let credentials = resolve_credentials(
        cli.prott_email.clone(),
        cli.prott_password.clone(),
        &config,
    )?;
    output::print_verbose(&format!("Password from {}", credentials.source));

    let client = ProttClient::new(&base_url)?;
    output::print_verbose(&format!("Prott service at {}", base_url));
    if cli.dry_run {
        output::print_info("Dry run - no screens will be uploaded");
    }

    let summary = upload_artboards(
        &client,
        &credentials.email,
        &credentials.password,
        root,
        cli.dry_run,
    )
    .await?;

    if cli.remember && credentials.source != PasswordSource::Keychain {
        match store_password_in_keychain(&credentials.email, &credentials.password) {
            Ok(()) => output::print_success("Password stored in keychain."),
            Err(e) => output::print_warning(&format!("Could not store password: {}", e)),
        }
    }

    print_summary(&summary, cli.dry_run);
    Ok(())
}

/// Sign in, index projects and upload every artboard under `root`
///
/// Stops at the first error. Artboards uploaded before it stay uploaded.
pub async fn upload_artboards<A: ProttApi>(
    api: &A,
    email: &str,
    password: &str,
    root: &Path,
    dry_run: bool,
) -> Result<UploadSummary> {
    let pb = output::spinner("Signing in to Prott...");
    let login = api.login(email, password).await;
    pb.finish_and_clear();
    login?;
    output::print_verbose(&format!("Signed in as {}", email));

    let pb = output::spinner("Fetching projects...");
    let projects = api.list_projects().await;
    pb.finish_and_clear();
    let projects = index_projects(projects?);
    print_projects(&projects);

    let walker = ArtboardWalker::new(root, ArtboardMatcher::default())?;
    upload_found(api, &projects, walker, dry_run).await
}

/// Upload each artboard whose project is known, in walk order
///
/// A walk error ends the run; nothing after it is uploaded.
async fn upload_found<A, I>(
    api: &A,
    projects: &HashMap<String, Project>,
    artboards: I,
    dry_run: bool,
) -> Result<UploadSummary>
where
    A: ProttApi,
    I: IntoIterator<Item = crate::error::Result<Artboard>>,
{
    let mut summary = UploadSummary::default();

    for artboard in artboards {
        let artboard = artboard?;

        let Some(project) = projects.get(&artboard.project_name) else {
            output::print_warning(&format!("a project {:?} is not exist", artboard.project_name));
            summary.skipped += 1;
            continue;
        };

        if dry_run {
            output::print_status(&format!(
                "would upload {} → {} / {}",
                artboard.path.display(),
                project.name,
                artboard.screen_name
            ));
            summary.uploaded += 1;
            continue;
        }

        let status = api
            .upload_screen(project, &artboard.screen_name, &artboard.path)
            .await
            .with_context(|| format!("Aborted at {}", artboard.path.display()))?;
        summary.uploaded += 1;
        if !status.is_success() {
            summary.rejected += 1;
        }
    }

    Ok(summary)
}

fn print_projects(projects: &HashMap<String, Project>) {
    let mut rows: Vec<&Project> = projects.values().collect();
    rows.sort_by(|a, b| a.name.cmp(&b.name));
    let rows: Vec<Project> = rows.into_iter().cloned().collect();
    output::print_table(&rows);
}

fn print_summary(summary: &UploadSummary, dry_run: bool) {
    let verb = if dry_run { "would upload" } else { "uploaded" };
    output::print_status(&format!(
        "{} {} screen(s), skipped {}",
        verb.bold(),
        summary.uploaded,
        summary.skipped
    ));
    if summary.rejected > 0 {
        output::print_warning(&format!(
            "{} upload(s) were answered with a non-success status",
            summary.rejected
        ));
    }
}
