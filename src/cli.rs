use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "shipit",
    about = "Initialize, commit, and push a project to its remote in one pass",
    version
)]
pub struct Cli {
    /// Project directory (prompted for when omitted, defaulting to the current directory)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// URL of the repository to push to
    #[arg(short = 'u', long, value_name = "URL")]
    pub remote_url: Option<String>,

    /// Branch to rename the current branch to and push
    #[arg(short, long, value_name = "NAME")]
    pub branch: Option<String>,

    /// Commit message, used only when there is something to commit
    #[arg(short, long, value_name = "MSG")]
    pub message: Option<String>,

    /// Name under which the remote is registered
    #[arg(long, value_name = "NAME", default_value = "origin")]
    pub remote: String,

    /// Accept the default for every prompt (requires --remote-url)
    #[arg(short = 'y', long)]
    pub yes: bool,

    #[arg(long)]
    pub explain: bool,
}
