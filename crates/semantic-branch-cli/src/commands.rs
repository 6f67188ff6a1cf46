use std::fs;
use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use semantic_branch::{
    ensure_valid_semantic_name, is_certain_semantic_branch, Classifier, ClassifierConfig,
};
use serde_json::json;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let format = cli.format;
    match cli.command {
        Command::Check(args) => cmd_check(args, format),
        Command::Match(args) => cmd_match(args, format),
        Command::Classify(args) => cmd_classify(args, format),
        Command::List(args) => cmd_list(args, format),
    }
}

fn load_classifier(path: Option<&Path>) -> anyhow::Result<Classifier> {
    let Some(path) = path else {
        return Ok(Classifier::builtin());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config = ClassifierConfig::from_toml_str(&text)
        .with_context(|| format!("failed to load config {}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        custom = config.categories.len(),
        "loaded classifier config"
    );
    Ok(Classifier::new(config)?)
}

fn cmd_check(args: CheckArgs, format: OutputFormat) -> anyhow::Result<()> {
    let result = ensure_valid_semantic_name(&args.name);
    match format {
        OutputFormat::Json => {
            let err = result.as_ref().err();
            println!(
                "{}",
                json!({
                    "name": &args.name,
                    "valid": result.is_ok(),
                    "invalid_value": err.and_then(|e| e.value()),
                    "error": err.map(|e| e.to_string()),
                })
            );
        }
        OutputFormat::Text => {
            if result.is_ok() {
                println!("{} {}", "✓".green().bold(), args.name.bold());
            }
        }
    }
    result?;
    Ok(())
}

fn cmd_match(args: MatchArgs, format: OutputFormat) -> anyhow::Result<()> {
    let matched = is_certain_semantic_branch(&args.branch, &args.stubs)?;
    match format {
        OutputFormat::Json => println!(
            "{}",
            json!({ "branch": args.branch, "stubs": args.stubs, "matched": matched })
        ),
        OutputFormat::Text if matched => println!("{}", "true".green()),
        OutputFormat::Text => println!("{}", "false".red()),
    }
    Ok(())
}

fn cmd_classify(args: ClassifyArgs, format: OutputFormat) -> anyhow::Result<()> {
    let classifier = load_classifier(args.config.as_deref())?;
    let classification = classifier.classify(&args.branch)?;
    match format {
        OutputFormat::Json => println!(
            "{}",
            json!({ "branch": args.branch, "classification": classification })
        ),
        OutputFormat::Text => match classification {
            Some(c) => println!("{} ({})", c.category.green().bold(), c.stub.cyan()),
            None => println!("{}", "none".dimmed()),
        },
    }
    Ok(())
}

fn cmd_list(args: ListArgs, format: OutputFormat) -> anyhow::Result<()> {
    let classifier = load_classifier(args.config.as_deref())?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string(classifier.categories())?),
        OutputFormat::Text => {
            for category in classifier.categories() {
                let name = format!("{:<10}", category.name);
                println!("{} {}", name.bold(), category.stubs.join(", ").cyan());
            }
        }
    }
    Ok(())
}
