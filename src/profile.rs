use chrono::Utc;
use console::style;
use reqwest::blocking::Client;

use crate::error::{FolioError, Result};
use crate::model::{GithubUser, ProfileOutput, SCHEMA_VERSION};

const GITHUB_API_URL: &str = "https://api.github.com";

/// One-shot lookup of a GitHub user. No retries, no rate-limit handling; a
/// non-2xx status surfaces as an error with the status line.
pub fn fetch_user(username: &str) -> Result<GithubUser> {
    let client = Client::builder()
        .user_agent(concat!("folio/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let url = format!("{GITHUB_API_URL}/users/{username}");
    let response = client
        .get(&url)
        .header(reqwest::header::ACCEPT, "application/vnd.github+json")
        .send()?;

    let status = response.status();
    if !status.is_success() {
        return Err(FolioError::Github(format!(
            "{status} while fetching {username}"
        )));
    }

    Ok(response.json()?)
}

pub fn exec(username: &str, json: bool) -> anyhow::Result<()> {
    let user = fetch_user(username)?;

    if json {
        let output = ProfileOutput {
            version: SCHEMA_VERSION,
            generated_at: Utc::now(),
            user,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    output_profile(&user);
    Ok(())
}

fn output_profile(user: &GithubUser) {
    let heading = match &user.name {
        Some(name) => format!("{name} (@{})", user.login),
        None => format!("@{}", user.login),
    };
    println!("{}", style(heading).bold());
    println!("{}", "─".repeat(40));
    print_tile("Followers", user.followers);
    print_tile("Following", user.following);
    print_tile("Public repos", user.public_repos);
    print_tile("Public gists", user.public_gists);
}

fn print_tile(label: &str, value: u64) {
    println!("{} {}", style(format!("{label:<14}")).cyan(), value);
}
