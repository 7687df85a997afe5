use crate::cli::{Cli, Commands, Domain};
use crate::config::apply_config_to_env;
use anyhow::{bail, Context, Result};
use assistantkit_agents::adapters::utils::write_private;
use assistantkit_agents::{
    builtin_agent_registry, builtin_mcp_registry, load_agents, parse_targets, run_project, Entity,
    GenerationReport, Generator, Registry, Target,
};
use assistantkit_publish::claude::REQUIRED_FILES;
use assistantkit_publish::validate_plugin_dir;
use clap::Parser;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Parses arguments and runs the selected command.
///
/// Returns an error (non-zero exit) when any generation target fails.
pub fn run() -> Result<()> {
    apply_config_to_env()?;
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Generate {
            spec,
            format,
            output,
            targets,
        } => handle_generate_command(&spec, &format, output, targets.as_deref()),
        Commands::Project { dir, priority } => handle_project_command(&dir, priority.as_deref()),
        Commands::Convert {
            input,
            from,
            to,
            domain,
            output,
        } => match domain {
            Domain::Agent => {
                handle_convert_command(&builtin_agent_registry()?, &input, &from, &to, output)
            }
            Domain::Mcp => {
                handle_convert_command(&builtin_mcp_registry()?, &input, &from, &to, output)
            }
        },
        Commands::Formats { domain } => handle_formats_command(domain),
        Commands::Validate { dir, require } => handle_validate_command(&dir, &require),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn handle_generate_command(
    spec: &Path,
    format: &str,
    output: Option<PathBuf>,
    targets: Option<&str>,
) -> Result<()> {
    let targets = match (output, targets) {
        (Some(output), _) => vec![Target::new(format, output)],
        (None, Some(list)) => parse_targets(list)?,
        (None, None) => bail!("either --output or --targets is required"),
    };
    if targets.is_empty() {
        bail!("no targets given");
    }

    let agents = load_agents(spec)
        .with_context(|| format!("failed to load agents from {}", spec.display()))?;
    tracing::info!(count = agents.len(), dir = %spec.display(), "Loaded agents");

    let registry = builtin_agent_registry()?;
    let report = Generator::new(&registry).generate(&agents, &targets);
    finish(&report)
}

fn handle_project_command(dir: &Path, priority: Option<&str>) -> Result<()> {
    let registry = builtin_agent_registry()?;
    let report = run_project(&registry, dir, priority)
        .with_context(|| format!("failed to process project {}", dir.display()))?;
    finish(&report)
}

fn finish(report: &GenerationReport) -> Result<()> {
    print!("{}", report.format_summary());
    let failed = report.failed().count();
    if failed > 0 {
        bail!("{failed} of {} targets failed", report.targets.len());
    }
    Ok(())
}

fn handle_convert_command<E: Entity>(
    registry: &Registry<E>,
    input: &Path,
    from: &str,
    to: &str,
    output: Option<PathBuf>,
) -> Result<()> {
    let data = std::fs::read(input).with_context(|| format!("failed to read {}", input.display()))?;
    let converted = registry
        .convert(&data, from, to)
        .with_context(|| format!("failed to convert {} from {from} to {to}", input.display()))?;

    match output {
        Some(path) => {
            write_private(&path, &converted)?;
            println!("Wrote {}", path.display());
        }
        None => std::io::stdout().write_all(&converted)?,
    }
    Ok(())
}

fn handle_formats_command(domain: Option<Domain>) -> Result<()> {
    if domain != Some(Domain::Mcp) {
        print_formats(&builtin_agent_registry()?);
    }
    if domain != Some(Domain::Agent) {
        print_formats(&builtin_mcp_registry()?);
    }
    Ok(())
}

fn print_formats<E: Entity>(registry: &Registry<E>) {
    println!("{} formats:", E::DOMAIN);
    for adapter in registry.iter() {
        let paths: Vec<_> = adapter
            .default_paths()
            .iter()
            .map(|p| p.display().to_string())
            .collect();
        println!(
            "  {:<10} {:<6} {}",
            adapter.name(),
            adapter.file_extension(),
            paths.join(", ")
        );
    }
}

fn handle_validate_command(dir: &Path, require: &[String]) -> Result<()> {
    if require.is_empty() {
        validate_plugin_dir(dir, REQUIRED_FILES)?;
    } else {
        validate_plugin_dir(dir, require)?;
    }
    println!("{} is valid", dir.display());
    Ok(())
}
