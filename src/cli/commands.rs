use anyhow::Result;
use colored::Colorize;

use crate::app::{init_config, Config};
use crate::assistant::{Assistant, GeminiClient};
use crate::convert::{convert, Category};

use super::Commands;

/// Handle CLI subcommands
pub async fn handle_command(command: &Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Convert {
            category,
            value,
            from,
            to,
        } => run_convert(config, *category, *value, from, to),
        Commands::Units { category } => {
            list_units(*category);
            Ok(())
        }
        Commands::Ask { prompt } => {
            let client = GeminiClient::new(&config.assistant)?;
            run_ask(&client, prompt).await
        }
        Commands::Init => {
            println!("Initializing unitwise configuration...");
            init_config()?;
            println!("Configuration initialized successfully!");
            Ok(())
        }
    }
}

/// Convert and print the result as "<value> <unit>"
fn run_convert(config: &Config, category: Category, value: f64, from: &str, to: &str) -> Result<()> {
    let converted = convert(value, from, to, category)?;
    println!(
        "{}",
        format_result(converted, to, config.output.precision).green()
    );
    Ok(())
}

/// List unit names for one category, or all of them
fn list_units(category: Option<Category>) {
    let categories: Vec<Category> = match category {
        Some(c) => vec![c],
        None => Category::ALL.to_vec(),
    };

    for category in categories {
        println!("{}:", category.to_string().bold());
        for unit in category.units() {
            println!("  • {}", unit);
        }
    }
}

/// Relay a prompt to the assistant and print the answer raw
async fn run_ask(assistant: &dyn Assistant, prompt: &str) -> Result<()> {
    tracing::debug!(model = %assistant.name(), "asking assistant");
    let answer = assistant.ask(prompt).await;
    println!("{}", answer);
    Ok(())
}

fn format_result(value: f64, unit: &str, precision: usize) -> String {
    format!("{value:.precision$} {unit}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_result_default_precision() {
        assert_eq!(format_result(1.60934, "Kilometer", 2), "1.61 Kilometer");
        assert_eq!(format_result(32.0, "Fahrenheit", 2), "32.00 Fahrenheit");
    }

    #[test]
    fn test_format_result_configured_precision() {
        assert_eq!(format_result(2.204_62, "Pound", 4), "2.2046 Pound");
        assert_eq!(format_result(1440.0, "Minute", 0), "1440 Minute");
    }

    struct CannedAssistant;

    #[async_trait]
    impl Assistant for CannedAssistant {
        async fn ask(&self, _prompt: &str) -> String {
            "canned answer".to_string()
        }

        fn name(&self) -> &str {
            "canned"
        }
    }

    #[tokio::test]
    async fn test_run_ask_accepts_any_assistant() {
        let assistant = CannedAssistant;
        assert!(run_ask(&assistant, "anything").await.is_ok());
    }
}
