//! Response assembly.
//!
//! Internally a reply is a tagged union — a fixed canned reply or a search
//! reply carrying keywords and suggestions — so in-process consumers pattern
//! match instead of probing optional fields. [`BotReply::into_response`]
//! flattens the union into the serialized envelope the presentation layer
//! expects, where the optional fields are simply absent on fixed replies.

use serde::{Deserialize, Serialize};

use crate::search::Suggestion;

/// A chatbot reply before serialization.
#[derive(Debug, Clone)]
pub enum BotReply {
    /// A canned reply from a matched (or fallback) intent.
    Fixed {
        /// Name of the matched intent.
        intent: String,
        /// The intent's canned response text.
        reply: String,
    },
    /// An item-search reply with ranked suggestions.
    Search {
        /// Keywords extracted from the message.
        keywords: Vec<String>,
        /// Lead-in or no-results text.
        reply: String,
        /// Ranked suggestions; may be empty.
        suggestions: Vec<Suggestion>,
    },
}

/// The serialized response envelope.
///
/// `keywords` and `suggestions` are present only for search replies; a search
/// with no matches still carries an empty `suggestions` list so the client
/// can distinguish "searched, nothing found" from "did not search".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatbotResponse {
    /// Name of the classified intent.
    pub intent: String,
    /// User-facing reply text.
    pub reply: String,
    /// Extracted keywords (search replies only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    /// Ranked suggestions (search replies only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<Suggestion>>,
}

impl BotReply {
    /// Flatten into the serialized envelope.
    pub fn into_response(self, search_intent: &str) -> ChatbotResponse {
        match self {
            BotReply::Fixed { intent, reply } => ChatbotResponse {
                intent,
                reply,
                keywords: None,
                suggestions: None,
            },
            BotReply::Search {
                keywords,
                reply,
                suggestions,
            } => ChatbotResponse {
                intent: search_intent.to_string(),
                reply,
                keywords: Some(keywords),
                suggestions: Some(suggestions),
            },
        }
    }
}
