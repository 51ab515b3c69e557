//! Command dispatch

use std::env;
use std::fs;
use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, local_config_path, Settings};
use crate::domain::{
    extract_examples, find_signature, params_from_signature, parse_example, parse_list,
    parse_tree, ExampleCase, Param,
};
use crate::render::{render_list, render_tree, OutputFormat};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let project_dir = cli.project_dir.clone().or_else(|| env::current_dir().ok());
    let mut settings = Settings::load(project_dir.as_deref())?;
    if let Some(token) = &cli.null_token {
        settings.null_token = token.clone();
    }
    debug!(?settings, "effective settings");

    match &cli.command {
        Commands::List { literal, format } => cmd_list(&settings, literal, *format),
        Commands::Tree { literal, format } => cmd_tree(&settings, literal, *format),
        Commands::Example {
            line,
            params,
            signature,
            file,
        } => cmd_example(
            &settings,
            line.as_deref(),
            params,
            signature.as_deref(),
            file.as_deref(),
        ),
        Commands::Config { command } => cmd_config(&settings, command, project_dir.as_deref()),
        Commands::Completion { shell } => {
            cmd_completion(*shell);
            Ok(())
        }
    }
}

#[instrument(skip(settings))]
fn cmd_list(settings: &Settings, literal: &str, format: Option<OutputFormat>) -> CliResult<()> {
    let head = parse_list(literal)?;
    let format = format.unwrap_or(settings.format);
    output::info(&render_list(head.as_deref(), format, &settings.null_token));
    Ok(())
}

#[instrument(skip(settings))]
fn cmd_tree(settings: &Settings, literal: &str, format: Option<OutputFormat>) -> CliResult<()> {
    let root = parse_tree(literal)?;
    let format = format.unwrap_or(settings.format);
    output::info(&render_tree(root.as_deref(), format, &settings.null_token));
    Ok(())
}

#[instrument(skip(settings))]
fn cmd_example(
    settings: &Settings,
    line: Option<&str>,
    params: &[Param],
    signature: Option<&str>,
    file: Option<&Path>,
) -> CliResult<()> {
    let description = file.map(read_description).transpose()?;
    let params = resolve_params(params, signature, description.as_deref())?;
    let cases = example_cases(line, description.as_deref())?;

    for (i, case) in cases.iter().enumerate() {
        if description.is_some() {
            output::info(&format!("Example {}:", i + 1));
        }
        let args = parse_example(&case.input, &params)?;
        for (param, arg) in params.iter().zip(&args) {
            output::action(&param.name, &arg.render(&settings.null_token));
        }
        if !case.output.is_empty() {
            output::action("expected", &case.output);
        }
    }
    Ok(())
}

/// Explicit `--param` declarations win, then `--signature`, then the first
/// `def` line of the description.
fn resolve_params(
    params: &[Param],
    signature: Option<&str>,
    description: Option<&str>,
) -> CliResult<Vec<Param>> {
    if !params.is_empty() {
        return Ok(params.to_vec());
    }
    let signature = signature
        .or_else(|| description.and_then(find_signature))
        .ok_or_else(|| {
            CliError::Usage("declare parameters with --param or --signature".to_string())
        })?;
    Ok(params_from_signature(signature)?)
}

fn example_cases(line: Option<&str>, description: Option<&str>) -> CliResult<Vec<ExampleCase>> {
    match (line, description) {
        (Some(line), _) => Ok(vec![ExampleCase {
            input: line.to_string(),
            output: String::new(),
        }]),
        (None, Some(text)) => {
            let cases = extract_examples(text);
            if cases.is_empty() {
                return Err(CliError::Usage(
                    "no `Example N:` blocks found in description".to_string(),
                ));
            }
            Ok(cases)
        }
        (None, None) => Err(CliError::Usage(
            "give an input line or --file".to_string(),
        )),
    }
}

fn read_description(path: &Path) -> CliResult<String> {
    let text = if path == Path::new("-") {
        io::read_to_string(io::stdin())
    } else {
        fs::read_to_string(path)
    };
    text.map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[instrument(skip(settings))]
fn cmd_config(
    settings: &Settings,
    command: &ConfigCommands,
    project_dir: Option<&Path>,
) -> CliResult<()> {
    match command {
        ConfigCommands::Show => output::info(&settings.to_toml()?),
        ConfigCommands::Template => output::info(&Settings::template()),
        ConfigCommands::Path => {
            let global = global_config_path()
                .map_or_else(|| "(unavailable)".to_string(), |p| p.display().to_string());
            output::action("global", &global);
            if let Some(dir) = project_dir {
                output::action("local", &local_config_path(dir).display());
            }
        }
    }
    Ok(())
}

fn cmd_completion(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}
