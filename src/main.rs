use std::path::PathBuf;

use anyhow::{
    Context,
    Result,
};
use clap::{
    Parser,
    Subcommand,
};
use hookwright::{
    GIT_HOOK_NAMES,
    HookConfig,
    InstallReport,
    Installer,
};

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Install the configured hooks into .git/hooks
    Install {
        /// Path to the configuration file
        #[arg(short, long, default_value = "hookwright.json")]
        config: PathBuf,
        /// Project root (default: current directory)
        #[arg(short, long)]
        dir: Option<PathBuf>,
        /// File whose contents replace the built-in inline hook script
        #[arg(long)]
        script: Option<PathBuf>,
    },
    /// Validate the configuration without writing any hook
    Check {
        /// Path to the configuration file
        #[arg(short, long, default_value = "hookwright.json")]
        config: PathBuf,
        /// Project root (default: current directory)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },
    /// List the hook names git recognizes
    Names,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "hookwright", version, about = "Install git hooks from config")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .init();
    let cli = <Cli as clap::Parser>::parse();
    match cli.command {
        Commands::Install {
            config,
            dir,
            script,
        } => install(config, dir, script),
        Commands::Check { config, dir } => check(config, dir),
        Commands::Names => names(),
    }
}

fn project_root(dir: Option<PathBuf>) -> Result<PathBuf> {
    match dir {
        Some(d) => Ok(d),
        None => std::env::current_dir().context("Failed to determine current directory"),
    }
}

fn build_installer(dir: Option<PathBuf>, script: Option<PathBuf>) -> Result<Installer> {
    let root = project_root(dir)?;
    let mut installer = Installer::new(root).context("Failed to set up installer")?;
    if let Some(script_path) = script {
        let body = std::fs::read_to_string(&script_path)
            .with_context(|| format!("Failed to read {}", script_path.display()))?;
        installer = installer.with_default_script(body);
    }
    Ok(installer)
}

fn install(config: PathBuf, dir: Option<PathBuf>, script: Option<PathBuf>) -> Result<()> {
    let hooks = HookConfig::load(&config)
        .with_context(|| format!("Failed to load {}", config.display()))?;
    if hooks.is_empty() {
        println!("Nothing to install: {} configures no hooks", config.display());
        return Ok(());
    }
    let installer = build_installer(dir, script)?;
    let report = installer
        .install(&hooks)
        .context("Hook installation failed")?;
    print_report(&report, "Installed");
    Ok(())
}

fn check(config: PathBuf, dir: Option<PathBuf>) -> Result<()> {
    let hooks = HookConfig::load(&config)
        .with_context(|| format!("Failed to load {}", config.display()))?;
    let installer = build_installer(dir, None)?;
    let report = installer
        .preflight(&hooks)
        .context("Configuration check failed")?;
    print_report(&report, "Would install");
    Ok(())
}

fn names() -> Result<()> {
    for name in GIT_HOOK_NAMES {
        println!("{}", name);
    }
    Ok(())
}

fn print_report(report: &InstallReport, verb: &str) {
    for hook in &report.installed {
        println!("✓ {} {} -> {}", verb, hook.name, hook.path.display());
    }
    for hook in &report.skipped {
        println!(
            "- Skipped {} (source not found: {})",
            hook.name,
            hook.source.display()
        );
    }
    println!(
        "{} {} hook(s), skipped {}",
        verb,
        report.installed.len(),
        report.skipped.len()
    );
}
