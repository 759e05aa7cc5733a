//! The chatbot engine wiring classifier and searcher together.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use peyda::chatbot::Chatbot;
//! use peyda::intent::IntentCorpus;
//! use peyda::search::MemoryItemStore;
//!
//! # async fn example() -> peyda::error::Result<()> {
//! let chatbot = Chatbot::new(
//!     Arc::new(IntentCorpus::default()),
//!     Arc::new(MemoryItemStore::new()),
//! );
//! let response = chatbot.handle_message("سلام").await?;
//! assert_eq!(response.intent, "greeting");
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use crate::chatbot::response::{BotReply, ChatbotResponse};
use crate::error::Result;
use crate::intent::{IntentClassifier, IntentCorpus, SEARCH_INTENT};
use crate::search::query::DEFAULT_MAX_RESULTS;
use crate::search::{ItemSearcher, ItemStore};

/// Lead-in shown above a non-empty suggestion list.
const SEARCH_RESULTS_REPLY: &str =
    "این موارد ممکنه مرتبط باشن (برای دیدن جزئیات روی هر مورد کلیک کن):";

/// Reply when a search matched nothing.
const SEARCH_EMPTY_REPLY: &str = "چیزی شبیه توضیحت پیدا نکردم 😕\n\
     می‌تونی کلمات دقیق‌تر بگی، یا از لیست/نقشه جستجو کنی، یا یک پست جدید ثبت کنی.";

/// Reply when the dedicated search entry matched nothing.
const DIRECT_SEARCH_EMPTY_REPLY: &str =
    "مورد مرتبطی پیدا نشد. اگر ممکنه توضیح دقیق‌تری بده یا از نقشه/لیست جستجو کن.";

/// Lead-in for the dedicated search entry.
const DIRECT_SEARCH_RESULTS_REPLY: &str = "این موارد ممکنه مرتبط باشن:";

/// The chatbot: one immutable corpus, one store, no per-request state.
///
/// Cheap to clone and safe to share across any number of concurrent
/// requests; each call operates on its own message only.
#[derive(Debug, Clone)]
pub struct Chatbot {
    classifier: IntentClassifier,
    searcher: ItemSearcher,
}

impl Chatbot {
    /// Create a chatbot over an intent corpus and an item store.
    pub fn new(corpus: Arc<IntentCorpus>, store: Arc<dyn ItemStore>) -> Self {
        Chatbot {
            classifier: IntentClassifier::new(corpus),
            searcher: ItemSearcher::new(store),
        }
    }

    /// Handle one chat message end to end.
    ///
    /// Classifies the message; search-intent messages run the item search
    /// (store failures propagate), everything else returns the matched
    /// intent's canned reply. Empty input lands on the fallback intent.
    pub async fn handle_message(&self, message: &str) -> Result<ChatbotResponse> {
        let intent = self.classifier.classify(message).to_string();

        if intent == SEARCH_INTENT {
            let outcome = self.searcher.search(message, DEFAULT_MAX_RESULTS).await?;
            let reply = if outcome.results.is_empty() {
                SEARCH_EMPTY_REPLY
            } else {
                SEARCH_RESULTS_REPLY
            };
            return Ok(BotReply::Search {
                keywords: outcome.keywords,
                reply: reply.to_string(),
                suggestions: outcome.results,
            }
            .into_response(SEARCH_INTENT));
        }

        let definition = self
            .classifier
            .corpus()
            .get(&intent)
            .cloned()
            .unwrap_or_else(|| self.classifier.corpus().fallback());

        Ok(BotReply::Fixed {
            intent,
            reply: definition.response,
        }
        .into_response(SEARCH_INTENT))
    }

    /// Run the item search unconditionally, skipping classification.
    ///
    /// This is the dedicated search entry point; the response always has the
    /// search intent and always carries keywords and suggestions.
    pub async fn search_message(
        &self,
        message: &str,
        max_results: usize,
    ) -> Result<ChatbotResponse> {
        let outcome = self.searcher.search(message, max_results).await?;
        let reply = if outcome.results.is_empty() {
            DIRECT_SEARCH_EMPTY_REPLY
        } else {
            DIRECT_SEARCH_RESULTS_REPLY
        };
        Ok(BotReply::Search {
            keywords: outcome.keywords,
            reply: reply.to_string(),
            suggestions: outcome.results,
        }
        .into_response(SEARCH_INTENT))
    }
}
