//! compound - agent persona inspector

use anyhow::{bail, Context, Result};
use clap::Parser;
use colored::Colorize;
use compound_agents::{
    agent_list_description, agent_names, validate_catalog, AgentAssembler, AgentDefinition,
    PluginConfig, PromptLoader,
};
use compound_config::{global_config_dir, load_config_from_file, load_layered_config};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;

use commands::{Cli, Commands};

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("{}: {:#}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_plugin_config(cli)?;
    let assembler = match &cli.prompts_dir {
        Some(dir) => AgentAssembler::new(PromptLoader::from_fs(dir)),
        None => AgentAssembler::embedded(),
    };

    match cli.command.clone().unwrap_or(Commands::List) {
        Commands::List => {
            let agents = assembler.create_agents(Some(&config))?;
            print_agents(&agents);
        }
        Commands::Configs => {
            let configs = assembler.agent_configs(Some(&config))?;
            println!("{}", serde_json::to_string_pretty(&configs)?);
        }
        Commands::Agents => {
            let agents = assembler.create_agents(Some(&config))?;
            println!("{}", serde_json::to_string_pretty(&agents)?);
        }
        Commands::Prompt { name } => {
            let agents = assembler.create_agents(Some(&config))?;
            let Some(agent) = agents.into_iter().find(|a| a.name == name) else {
                bail!("agent '{name}' not found (unknown or disabled)");
            };
            println!("{}", agent.config.system);
        }
        Commands::Describe { names } => {
            if names {
                for name in agent_names() {
                    println!("{name}");
                }
            } else {
                println!("{}", agent_list_description());
            }
        }
        Commands::Check => {
            validate_catalog().map_err(anyhow::Error::msg)?;
            let agents = assembler.create_agents(Some(&config))?;
            println!(
                "{} {} agents assembled",
                "ok".green().bold(),
                agents.len()
            );
        }
    }

    Ok(())
}

fn load_plugin_config(cli: &Cli) -> Result<PluginConfig> {
    if let Some(path) = &cli.config {
        return Ok(load_config_from_file(path)?.config);
    }

    let cwd = std::env::current_dir().context("Failed to read working directory")?;
    let global = global_config_dir();
    load_layered_config(&cwd, global.as_deref())
}

fn print_agents(agents: &[AgentDefinition]) {
    println!("{}", "─".repeat(80).dimmed());
    for agent in agents {
        println!(
            "{} {} {}",
            agent.name.cyan().bold(),
            agent.config.model.yellow(),
            format!("t={}", agent.config.temperature).dimmed()
        );
        println!("  {}", agent.description);
    }
    println!("{}", "─".repeat(80).dimmed());
}
