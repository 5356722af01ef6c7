use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use multi_git::config::{ConfigFile, Overrides, Settings, split_repo_names};
use multi_git::{constants, report};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "multi-git")]
#[command(about = "Runs git commands over multiple repos")]
#[command(
    long_about = "Runs git commands over multiple repos.\n\n\
    The base directory and repository names come from --root/--repos, the \
    MG_ROOT/MG_REPOS environment variables, or the config file \
    ($HOME/.multi-git.yaml). Options must come before the git command."
)]
#[command(version)]
struct Cli {
    /// Config file path (default: $HOME/.multi-git.yaml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Base directory of the target repositories
    #[arg(long, env = constants::config::ENV_ROOT, value_name = "DIR")]
    root: Option<String>,

    /// Comma-separated repository names under the base directory
    #[arg(long, env = constants::config::ENV_REPOS, value_name = "NAMES")]
    repos: Option<String>,

    /// Keep going through all repos when a command fails instead of stopping at the first error
    #[arg(long)]
    ignore_errors: bool,

    /// Output results as JSON
    #[arg(long)]
    json: bool,

    /// Save each repository's output under this directory
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Print the resolved repository paths and exit
    #[arg(long)]
    list_repos: bool,

    /// Generate shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    completions: Option<Shell>,

    /// Git command to run in every repository, e.g. `status` or `checkout -b feature`
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true,
        required_unless_present_any = ["list_repos", "completions"]
    )]
    command: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "multi-git", &mut std::io::stdout());
        return Ok(());
    }

    let file = ConfigFile::discover(cli.config.as_deref())?;
    let overrides = Overrides {
        root: cli.root,
        repos: cli.repos.as_deref().map(split_repo_names),
        ignore_errors: cli.ignore_errors,
    };
    let settings = Settings::resolve(overrides, file);
    let repo_set = settings.repository_set()?;

    if cli.list_repos {
        for repo in repo_set.repositories() {
            println!("{}", repo.display());
        }
        return Ok(());
    }

    let command = cli.command.join(" ");
    let result = repo_set.run(&command);

    if cli.json {
        println!("{}", report::to_json(&command, &result)?);
    } else {
        report::print_text(&command, &result);
    }

    if let Some(output_dir) = &cli.output_dir {
        let run_dir = report::save_run(output_dir, &command, &result)?;
        eprintln!("Saved output to {}", run_dir.display());
    }

    match result.error {
        Some(err) => Err(anyhow::Error::new(err).context(format!("command '{command}' failed"))),
        None => Ok(()),
    }
}
