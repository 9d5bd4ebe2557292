mod cli;
mod commands;
mod git;
mod prompt;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

fn main() {
    if let Err(err) = run() {
        for cause in err.chain() {
            eprintln!("error: {}", cause);
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.explain {
        print_explanations();
        return Ok(());
    }

    commands::run_publish(cli)
}

fn print_explanations() {
    println!("shipit walks a project directory through one publish cycle:");
    println!();
    println!("  1. initialize a Git repository when the directory has none (`git init`);");
    println!("  2. force-rename the current branch (`git branch -M <branch>`, default 'main');");
    println!("  3. register the remote when it is not set up yet (`git remote add <name> <url>`);");
    println!("  4. stage every change, untracked files included (`git add -A`);");
    println!("  5. commit when anything changed (`git commit -m <msg>`, default 'Update project');");
    println!("  6. push with upstream tracking (`git push -u <remote> <branch>`).");
    println!();
    println!("Values not given as flags are prompted for; --yes accepts every default.");
}
