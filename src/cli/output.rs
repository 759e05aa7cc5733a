//! Output formatting for CLI commands.

use serde::Serialize;

use crate::chatbot::ChatbotResponse;
use crate::cli::args::{OutputFormat, PeydaArgs};
use crate::error::Result;

/// Result structure for the keywords command.
#[derive(Debug, Serialize)]
pub struct KeywordAnalysis {
    pub input: String,
    pub normalized: String,
    pub tokens: Vec<String>,
    pub keywords: Vec<String>,
}

/// Print a chatbot response in the selected format.
pub fn print_response(response: &ChatbotResponse, cli_args: &PeydaArgs) -> Result<()> {
    match cli_args.output_format {
        OutputFormat::Json => print_json(response, cli_args),
        OutputFormat::Human => {
            println!("intent: {}", response.intent);
            println!("{}", response.reply);
            if let Some(keywords) = &response.keywords {
                println!("keywords: {}", keywords.join(", "));
            }
            if let Some(suggestions) = &response.suggestions {
                for s in suggestions {
                    println!(
                        "  [{}] {} ({}) score={} {}",
                        s.id, s.title, s.item_type, s.score, s.link
                    );
                }
            }
            Ok(())
        }
    }
}

/// Print a keyword analysis in the selected format.
pub fn print_analysis(analysis: &KeywordAnalysis, cli_args: &PeydaArgs) -> Result<()> {
    match cli_args.output_format {
        OutputFormat::Json => print_json(analysis, cli_args),
        OutputFormat::Human => {
            println!("input:      {}", analysis.input);
            println!("normalized: {}", analysis.normalized);
            println!("tokens:     {}", analysis.tokens.join(" | "));
            println!("keywords:   {}", analysis.keywords.join(" | "));
            Ok(())
        }
    }
}

fn print_json<T: Serialize>(value: &T, cli_args: &PeydaArgs) -> Result<()> {
    let json = if cli_args.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}
