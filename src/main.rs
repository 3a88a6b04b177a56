use anyhow::{Context, Result};
use clap::Parser;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

use rigsmith::config::{ensure_user_config_exists, load_config, Config};
use rigsmith::display::{print_computer, render_preset_list, OutputFormat};
use rigsmith::{showcase, PresetCatalog};

mod cli;

use cli::{BuildArgs, Cli, Commands};

/// Everything a command needs to print builds
struct Output {
    config: Config,
    catalog: PresetCatalog,
    format: OutputFormat,
    color: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout only carries configurations
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("rigsmith=debug")
        } else {
            EnvFilter::new("rigsmith=warn")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let command = cli.command.unwrap_or(Commands::Showcase);
    if let Commands::InitConfig = command {
        let path = ensure_user_config_exists().context("failed to write default config")?;
        println!("Config: {}", path.display());
        return Ok(());
    }

    let config = load_config(cli.config.as_deref()).context("failed to load config")?;
    let catalog = config.catalog()?;
    let color = !cli.no_color && config.display.color && std::io::stdout().is_terminal();
    let output = Output {
        config,
        catalog,
        format: cli.format,
        color,
    };

    match command {
        Commands::Showcase => run_showcase(&output),
        Commands::Build(args) => run_build(&output, args),
        Commands::List => {
            print!("{}", render_preset_list(&output.catalog));
            Ok(())
        }
        Commands::InitConfig => Ok(()),
    }
}

fn run_showcase(output: &Output) -> Result<()> {
    let sections = showcase::sections(&output.catalog)?;
    if output.format == OutputFormat::Toml {
        print!("{}", showcase::to_toml(&sections)?);
        return Ok(());
    }

    for section in &sections {
        println!("{}", section.title);
        if let Some(summary) = &section.summary {
            println!("Build logic: {}", summary);
        }
        print_computer(&output.config, &section.computer, output.format, output.color)?;
    }

    println!("Cooling systems compared");
    for line in showcase::cooling_comparison(&output.catalog)? {
        println!("  {}", line);
    }
    println!();
    println!("Advantages of the builder approach");
    for advantage in showcase::ADVANTAGES {
        println!("  {} {}", output.config.display.bullet, advantage);
    }
    Ok(())
}

fn run_build(output: &Output, args: BuildArgs) -> Result<()> {
    let computer = match &args.steps {
        Some(steps) => rigsmith::build_preset_with_steps(&output.catalog, &args.preset, steps)?,
        None => rigsmith::build_preset(&output.catalog, &args.preset, args.recipe)?,
    };
    print_computer(&output.config, &computer, output.format, output.color)?;
    Ok(())
}
