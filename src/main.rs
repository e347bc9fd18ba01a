use std::env;

use anyhow::Result;
use clap::Parser;

use version_gate::{config, git_ops, pipeline, ui};

#[derive(clap::Parser)]
#[command(
    name = "version-gate",
    about = "Compute the build version from the current git branch and gate release publishing"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Branch name to use instead of detecting it from git")]
    branch: Option<String>,

    #[arg(
        short = 'r',
        long = "ref",
        help = "External reference for detached builds, overriding the configured environment variable"
    )]
    external_ref: Option<String>,

    #[arg(short, long, help = "Print only the computed version")]
    quiet: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("version-gate {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    // Source the branch name: explicit flag first, then the repository
    let branch_name = if let Some(branch) = args.branch {
        branch
    } else {
        let git_repo = match git_ops::GitRepo::new() {
            Ok(repo) => repo,
            Err(e) => {
                ui::display_error(&format!("Git repository error: {}", e));
                std::process::exit(1);
            }
        };

        match git_repo.current_branch() {
            Ok(name) => name,
            Err(e) => {
                ui::display_error(&format!("Failed to read current branch: {}", e));
                std::process::exit(1);
            }
        }
    };

    if !args.quiet {
        ui::display_status(&format!("Current branch: {}", branch_name));
    }

    // Source the external reference: explicit flag first, then the
    // configured environment variable
    let external_ref = args
        .external_ref
        .or_else(|| env::var(&config.ref_env_var).ok());

    let plan = match pipeline::resolve(&branch_name, external_ref.as_deref(), &config) {
        Ok(plan) => plan,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    if args.quiet {
        println!("{}", plan.version);
    } else {
        ui::display_plan(&plan);
    }

    Ok(())
}
