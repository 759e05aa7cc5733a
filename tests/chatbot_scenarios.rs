//! End-to-end chatbot scenarios over a seeded in-memory store.

use std::sync::Arc;

use peyda::chatbot::Chatbot;
use peyda::error::Result;
use peyda::intent::{FALLBACK_INTENT, Intent, IntentCorpus, SEARCH_INTENT};
use peyda::search::DEFAULT_MAX_RESULTS;
use peyda::search::memory::MemoryItemStore;
use peyda::search::store::{ItemCandidate, ItemType};

fn found_item(id: i64, title: &str, description: &str, tags: &[&str]) -> ItemCandidate {
    ItemCandidate {
        id,
        title: title.to_string(),
        description: description.to_string(),
        item_type: ItemType::Found,
        first_image_url: None,
        tag_names: tags.iter().map(|t| t.to_string()).collect(),
    }
}

fn campus_store() -> MemoryItemStore {
    let store = MemoryItemStore::new();
    store.add_tag(1, "wallet");
    store.add_tag(2, "phone");
    store.add_tag(3, "keys");
    store.add_item(found_item(
        1,
        "Black wallet",
        "Leather wallet found next to the library copy machines",
        &["wallet"],
    ));
    store.add_item(found_item(
        2,
        "Set of keys",
        "Three keys on a red keychain, found in the cafeteria",
        &["keys"],
    ));
    store.add_item(ItemCandidate {
        id: 3,
        title: "iPhone 13".to_string(),
        description: "Lost my phone near the gym, black case".to_string(),
        item_type: ItemType::Lost,
        first_image_url: Some("/uploads/phone.jpg".to_string()),
        tag_names: vec!["phone".to_string()],
    });
    store
}

fn campus_chatbot() -> Chatbot {
    Chatbot::new(Arc::new(IntentCorpus::default()), Arc::new(campus_store()))
}

#[tokio::test]
async fn lost_wallet_message_returns_ranked_found_items() -> Result<()> {
    let chatbot = campus_chatbot();
    let response = chatbot
        .handle_message("I lost my black wallet near the library")
        .await?;

    assert_eq!(response.intent, SEARCH_INTENT);
    let keywords = response.keywords.expect("search replies carry keywords");
    assert!(keywords.contains(&"wallet".to_string()));

    let suggestions = response.suggestions.expect("search replies carry suggestions");
    assert_eq!(suggestions[0].id, 1);
    assert_eq!(suggestions[0].item_type, ItemType::Found);
    assert_eq!(suggestions[0].link, "/items/1");
    // the lost phone is on the wrong side of the board for this message
    assert!(suggestions.iter().all(|s| s.item_type == ItemType::Found));
    Ok(())
}

#[tokio::test]
async fn help_question_mentioning_item_is_not_a_search() -> Result<()> {
    let chatbot = campus_chatbot();
    let response = chatbot.handle_message("راهنما کیف").await?;

    assert_ne!(response.intent, SEARCH_INTENT);
    assert!(response.suggestions.is_none());
    Ok(())
}

#[tokio::test]
async fn greeting_gets_canned_reply() -> Result<()> {
    let corpus = IntentCorpus::new(vec![Intent::new(
        "greeting",
        vec!["hello"],
        "Hi! How can I help?",
    )]);
    let chatbot = Chatbot::new(Arc::new(corpus), Arc::new(MemoryItemStore::new()));

    let response = chatbot.handle_message("hello").await?;
    assert_eq!(response.intent, "greeting");
    assert_eq!(response.reply, "Hi! How can I help?");
    Ok(())
}

#[tokio::test]
async fn gibberish_falls_back() -> Result<()> {
    let chatbot = campus_chatbot();
    let response = chatbot.handle_message("xyzzy plugh").await?;
    assert_eq!(response.intent, FALLBACK_INTENT);
    Ok(())
}

#[tokio::test]
async fn stop_word_only_search_never_touches_the_store() -> Result<()> {
    let store = Arc::new(MemoryItemStore::new());
    let chatbot = Chatbot::new(Arc::new(IntentCorpus::default()), store.clone());

    // forced search with nothing but stop words
    let response = chatbot.search_message("the is a", DEFAULT_MAX_RESULTS).await?;
    assert_eq!(response.intent, SEARCH_INTENT);
    assert!(response.keywords.unwrap().is_empty());
    assert!(response.suggestions.unwrap().is_empty());
    assert_eq!(store.calls(), 0);
    Ok(())
}

#[tokio::test]
async fn store_failure_surfaces_as_error_not_empty_reply() {
    let chatbot = Chatbot::new(
        Arc::new(IntentCorpus::default()),
        Arc::new(MemoryItemStore::new().failing()),
    );

    let result = chatbot.handle_message("I lost my black wallet").await;
    assert!(result.is_err());
}

#[tokio::test]
async fn candidate_bound_drops_older_items_beyond_fifty() -> Result<()> {
    // documented limit: the fetch keeps the 50 newest matches, so an older
    // item never reaches the ranker even if it would score higher
    let store = MemoryItemStore::new();
    store.add_item(found_item(
        1,
        "black umbrella",
        "black umbrella with wooden handle",
        &[],
    ));
    for id in 2..=52 {
        store.add_item(found_item(id, "umbrella", "plain umbrella", &[]));
    }
    let chatbot = Chatbot::new(Arc::new(IntentCorpus::default()), Arc::new(store));

    let response = chatbot
        .search_message("lost my black umbrella", DEFAULT_MAX_RESULTS)
        .await?;
    let suggestions = response.suggestions.unwrap();
    assert!(
        suggestions.iter().all(|s| s.id != 1),
        "item 1 should have been dropped by the candidate bound"
    );
    Ok(())
}

#[tokio::test]
async fn response_envelope_serializes_as_expected() -> Result<()> {
    let chatbot = campus_chatbot();

    let search = chatbot
        .handle_message("I lost my keys in the cafeteria")
        .await?;
    let json = serde_json::to_value(&search)?;
    assert_eq!(json["intent"], "search_items");
    assert!(json["keywords"].is_array());
    let first = &json["suggestions"][0];
    assert!(first["id"].is_i64());
    assert!(first["descriptionSnippet"].is_string());
    assert!(first["link"].as_str().unwrap().starts_with("/items/"));

    let fixed = chatbot.handle_message("hello").await?;
    let json = serde_json::to_value(&fixed)?;
    assert!(json.get("keywords").is_none());
    assert!(json.get("suggestions").is_none());
    Ok(())
}
