//! Basic example demonstrating the GitHub API client.
//!
//! Run with:
//! ```
//! GITHUB_TOKEN=your-token cargo run --example basic -- octocat/Hello-World
//! ```

use ghapi::{GithubClient, PrettyPrint, RepoRef};

#[tokio::main]
async fn main() -> ghapi::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    let target = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "octocat/Hello-World".to_string());
    let target = RepoRef::parse(&target)?;

    // Create client from environment variables
    println!("Creating GitHub client...");
    let client = GithubClient::from_env()?;
    println!("Connected to: {}", client.base_url());

    if let Some(status) = client.get_rate_limit().await? {
        println!("\n{}", status.pretty_print());
    }

    println!("\n--- Repository ---");
    let repo = client.get_repo(&target.owner, &target.name).await?;
    println!("{}", repo.pretty_print());

    println!("\n--- Latest Commits ---");
    let commits = client.get_commits(&repo).await?;
    for commit in commits.iter().take(5) {
        println!("  {} {}", commit.short_sha(), commit.summary());
    }

    println!("\n--- Languages ---");
    match client.get_repo_languages(&repo).await? {
        Some(languages) => {
            for share in languages {
                println!("  {:<16} {} bytes", share.language, share.bytes);
            }
        }
        None => println!("  (none)"),
    }

    println!("\n--- Contributors ---");
    match client.get_repo_contributors(&repo).await? {
        Some(contributors) => {
            for contributor in contributors.iter().take(10) {
                println!("  {} ({} contributions)", contributor.login, contributor.contributions);
            }
        }
        None => println!("  (none)"),
    }

    println!("\n--- Code Frequency ---");
    let delta = client.get_repo_code_count(&repo).await?;
    println!("Net line delta: {delta}");

    if let Some(readme) = client.get_readme(&repo).await? {
        println!("\n--- README ({} bytes) ---", readme.len());
        for line in readme.lines().take(10) {
            println!("  {line}");
        }
    }

    println!("\nDone!");
    Ok(())
}
