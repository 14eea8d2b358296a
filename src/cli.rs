use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Terminal portfolio dashboard for commit history, projects, and GitHub profile")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone)]
pub struct CommonArgs {
    #[arg(long, default_value = "loc.csv", help = "Path to the line data file")]
    pub file: PathBuf,

    #[arg(long, default_value = "projects.json", help = "Path to the projects list")]
    pub projects: PathBuf,

    #[arg(long, help = "Path to a git repository used to derive commit links")]
    pub repo: Option<PathBuf>,

    #[arg(long, help = "Web base for commit links, e.g. https://github.com/owner/repo")]
    pub link_base: Option<String>,

    #[arg(long, help = "Keep records at or after this date (RFC3339, YYYY-MM-DD, or natural language)")]
    pub since: Option<String>,

    #[arg(long, help = "Keep records at or before this date (RFC3339, YYYY-MM-DD, or natural language)")]
    pub until: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    Stats {
        #[arg(long, help = "Output as JSON")]
        json: bool,
    },
    Commits {
        #[arg(long, help = "Output as JSON")]
        json: bool,

        #[arg(long, help = "Output as NDJSON")]
        ndjson: bool,
    },
    Projects {
        #[arg(long, help = "Output as JSON")]
        json: bool,

        #[arg(long, help = "Show the year distribution instead of the list")]
        pie: bool,

        #[arg(long, help = "Keep only projects from this year")]
        year: Option<u32>,

        #[arg(long, help = "Free-text filter across title, description, and year")]
        query: Option<String>,
    },
    Profile {
        #[arg(help = "GitHub username to look up")]
        username: String,

        #[arg(long, help = "Output as JSON")]
        json: bool,
    },
    #[command(alias = "tui", about = "Interactive dashboard")]
    Ui,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Stats { json } => crate::meta::exec_stats(self.common, json),
            Commands::Commits { json, ndjson } => {
                crate::meta::exec_commits(self.common, json, ndjson)
            }
            Commands::Projects { json, pie, year, query } => {
                crate::projects::exec(self.common, json, pie, year, query)
            }
            Commands::Profile { username, json } => crate::profile::exec(&username, json),
            Commands::Ui => crate::tui::run(&self.common).map_err(|e| anyhow::anyhow!(e)),
        }
    }
}
