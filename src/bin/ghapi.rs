//! GitHub API CLI binary.
//!
//! A command-line interface for interacting with the GitHub REST API.

use std::process::ExitCode;

use clap::Parser;
use ghapi::cli::{Cli, Command};
use ghapi::{Commit, Contributor, GithubClient, LanguageShare, PrettyPrint, RepoRef, Repository};
use serde::Serialize;
use tabled::{Table, Tabled};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut client = match GithubClient::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Hint: Set GITHUB_TOKEN environment variable");
            return ExitCode::FAILURE;
        }
    };

    if let Some(ref url) = cli.api_url {
        if let Err(e) = client.set_url(url) {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    }

    match run(&client, cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(client: &GithubClient, cli: Cli) -> ghapi::Result<()> {
    let json = cli.json;

    match cli.command {
        Command::User { login } => {
            let user = client.get_user(login.as_deref()).await?;
            println!("{}", serde_json::to_string_pretty(&user)?);
        }
        Command::Repo { repo } => {
            let repo = RepoRef::parse(&repo)?;
            let repository = client.get_repo(&repo.owner, &repo.name).await?;
            output_single(&repository, json)?;
        }
        Command::Repos => {
            let repos: Vec<Repository> = client.get_repos().await?.into_values().collect();
            output_list(&repos, json, |r| RepoRow::from(r))?;
        }
        Command::Commits { repo } => {
            let repo = RepoRef::parse(&repo)?;
            let commits = client.get_commits(&repo).await?;
            output_list(&commits, json, |c| CommitRow::from(c))?;
        }
        Command::Languages { repo } => {
            let repo = RepoRef::parse(&repo)?;
            match client.get_repo_languages(&repo).await? {
                Some(languages) => output_list(&languages, json, |l| LanguageRow::from(l))?,
                None => eprintln!("No language data for {repo}"),
            }
        }
        Command::Contributors { repo } => {
            let repo = RepoRef::parse(&repo)?;
            match client.get_repo_contributors(&repo).await? {
                Some(contributors) => output_list(&contributors, json, |c| ContributorRow::from(c))?,
                None => eprintln!("No contributors for {repo}"),
            }
        }
        Command::CodeCount { repo } => {
            let repo = RepoRef::parse(&repo)?;
            let delta = client.get_repo_code_count(&repo).await?;
            if json {
                println!("{}", serde_json::json!({ "repository": repo.to_string(), "net_lines": delta }));
            } else {
                println!("{delta}");
            }
        }
        Command::Readme { repo, html } => {
            let repo = RepoRef::parse(&repo)?;
            match client.get_readme(&repo).await? {
                Some(readme) if html => println!("{}", client.parse_readme(&readme).await?),
                Some(readme) => println!("{readme}"),
                None => eprintln!("No README in {repo}"),
            }
        }
        Command::RateLimit => match client.get_rate_limit().await? {
            Some(status) => output_single(&status, json)?,
            None => eprintln!("Rate limit not reported"),
        },
    }
    Ok(())
}

fn output_single<T: Serialize + PrettyPrint>(item: &T, json: bool) -> ghapi::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(item)?);
    } else {
        println!("{}", item.pretty_print());
    }
    Ok(())
}

fn output_list<T, R, F>(items: &[T], json: bool, to_row: F) -> ghapi::Result<()>
where
    T: Serialize,
    R: Tabled,
    F: Fn(&T) -> R,
{
    if json {
        println!("{}", serde_json::to_string_pretty(items)?);
    } else {
        let rows: Vec<R> = items.iter().map(to_row).collect();
        println!("{}", Table::new(rows));
        println!("\n{} item(s)", items.len());
    }
    Ok(())
}

// Table row types for non-JSON output

#[derive(Tabled)]
struct RepoRow {
    repository: String,
    visibility: String,
    language: String,
    stars: u64,
}

impl From<&Repository> for RepoRow {
    fn from(r: &Repository) -> Self {
        Self {
            repository: r.full_name.clone(),
            visibility: if r.is_private() { "private" } else { "public" }.to_string(),
            language: r.language.clone().unwrap_or_default(),
            stars: r.stargazers_count,
        }
    }
}

#[derive(Tabled)]
struct CommitRow {
    sha: String,
    author: String,
    summary: String,
}

impl From<&Commit> for CommitRow {
    fn from(c: &Commit) -> Self {
        Self {
            sha: c.short_sha().to_string(),
            author: c
                .commit
                .author
                .as_ref()
                .and_then(|a| a.name.clone())
                .unwrap_or_default(),
            summary: c.summary().to_string(),
        }
    }
}

#[derive(Tabled)]
struct LanguageRow {
    language: String,
    bytes: u64,
}

impl From<&LanguageShare> for LanguageRow {
    fn from(l: &LanguageShare) -> Self {
        Self {
            language: l.language.clone(),
            bytes: l.bytes,
        }
    }
}

#[derive(Tabled)]
struct ContributorRow {
    login: String,
    contributions: u64,
    profile: String,
}

impl From<&Contributor> for ContributorRow {
    fn from(c: &Contributor) -> Self {
        Self {
            login: c.login.clone(),
            contributions: c.contributions,
            profile: c.profile_url.clone().unwrap_or_default(),
        }
    }
}
