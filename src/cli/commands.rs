//! Command implementations for the Peyda CLI.
//!
//! Commands run against a small seeded in-memory inventory so the chatbot
//! can be exercised without a database behind it.

use std::sync::Arc;

use log::debug;

use crate::analysis::{extract_keywords, normalize, tokenize};
use crate::chatbot::Chatbot;
use crate::cli::args::{Command, KeywordsArgs, MessageArgs, PeydaArgs, SearchArgs};
use crate::cli::output::{KeywordAnalysis, print_analysis, print_response};
use crate::error::Result;
use crate::intent::IntentCorpus;
use crate::search::store::{ItemCandidate, ItemType};
use crate::search::MemoryItemStore;

/// Execute a CLI command.
pub async fn execute_command(args: PeydaArgs) -> Result<()> {
    match &args.command {
        Command::Message(message_args) => handle_message(message_args.clone(), &args).await,
        Command::Search(search_args) => search_items(search_args.clone(), &args).await,
        Command::Keywords(keywords_args) => show_keywords(keywords_args.clone(), &args),
    }
}

/// Run one message through the full pipeline.
async fn handle_message(args: MessageArgs, cli_args: &PeydaArgs) -> Result<()> {
    let chatbot = demo_chatbot();
    debug!("handling message: {}", args.text);

    let response = chatbot.handle_message(&args.text).await?;
    print_response(&response, cli_args)
}

/// Force an item search, skipping classification.
async fn search_items(args: SearchArgs, cli_args: &PeydaArgs) -> Result<()> {
    let chatbot = demo_chatbot();
    debug!("searching items for: {}", args.text);

    let response = chatbot.search_message(&args.text, args.max_results).await?;
    print_response(&response, cli_args)
}

/// Show the analysis pipeline stages for a message.
fn show_keywords(args: KeywordsArgs, cli_args: &PeydaArgs) -> Result<()> {
    let analysis = KeywordAnalysis {
        normalized: normalize(&args.text),
        tokens: tokenize(&args.text),
        keywords: extract_keywords(&args.text, args.max_keywords),
        input: args.text,
    };
    print_analysis(&analysis, cli_args)
}

/// Build a chatbot over the demo inventory.
fn demo_chatbot() -> Chatbot {
    Chatbot::new(Arc::new(IntentCorpus::default()), Arc::new(demo_store()))
}

/// A seeded store mirroring a freshly provisioned campus deployment.
fn demo_store() -> MemoryItemStore {
    let store = MemoryItemStore::new();

    store.add_tag(1, "wallet");
    store.add_tag(2, "phone");
    store.add_tag(3, "keys");
    store.add_tag(4, "bag");
    store.add_tag(5, "clothes");

    store.add_item(ItemCandidate {
        id: 1,
        title: "Black leather wallet".to_string(),
        description: "Found near the main library entrance, has a bus card inside".to_string(),
        item_type: ItemType::Found,
        first_image_url: Some("/uploads/wallet-1.jpg".to_string()),
        tag_names: vec!["wallet".to_string()],
    });
    store.add_item(ItemCandidate {
        id: 2,
        title: "کیف پول قهوه‌ای".to_string(),
        description: "جلوی سلف غذاخوری پیدا شد، داخلش کارت دانشجویی هست".to_string(),
        item_type: ItemType::Found,
        first_image_url: None,
        tag_names: vec!["wallet".to_string()],
    });
    store.add_item(ItemCandidate {
        id: 3,
        title: "Samsung phone with blue case".to_string(),
        description: "Lost somewhere between the gym and parking lot B".to_string(),
        item_type: ItemType::Lost,
        first_image_url: Some("/uploads/phone-3.jpg".to_string()),
        tag_names: vec!["phone".to_string()],
    });
    store.add_item(ItemCandidate {
        id: 4,
        title: "دسته کلید با جاکلیدی قرمز".to_string(),
        description: "سه تا کلید و یک ریموت، نزدیک دانشکده فنی گم شده".to_string(),
        item_type: ItemType::Lost,
        first_image_url: None,
        tag_names: vec!["keys".to_string()],
    });
    store.add_item(ItemCandidate {
        id: 5,
        title: "Grey backpack".to_string(),
        description: "Found in lecture hall 2, contains notebooks and a charger".to_string(),
        item_type: ItemType::Found,
        first_image_url: Some("/uploads/bag-5.jpg".to_string()),
        tag_names: vec!["bag".to_string()],
    });

    store
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::SEARCH_INTENT;

    #[tokio::test]
    async fn test_demo_store_answers_wallet_search() {
        let chatbot = demo_chatbot();
        let response = chatbot
            .handle_message("I lost my black wallet near the library")
            .await
            .unwrap();

        assert_eq!(response.intent, SEARCH_INTENT);
        let suggestions = response.suggestions.unwrap();
        assert!(!suggestions.is_empty());
        assert_eq!(suggestions[0].id, 1);
    }

    #[tokio::test]
    async fn test_demo_store_persian_search() {
        let chatbot = demo_chatbot();
        let response = chatbot.handle_message("کیف پولم گم شده").await.unwrap();

        assert_eq!(response.intent, SEARCH_INTENT);
        let suggestions = response.suggestions.unwrap();
        assert!(suggestions.iter().any(|s| s.id == 2));
    }
}
