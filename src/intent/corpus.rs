//! The static intent corpus.
//!
//! Intents are defined once at startup and pre-tokenized into
//! [`TrainedExample`]s exactly once, so per-message classification never
//! re-tokenizes the corpus. The corpus is an explicit immutable value passed
//! into the classifier, not a mutable singleton; registration order is
//! preserved because classification tie-breaks resolve to the
//! first-registered intent.

use serde::{Deserialize, Serialize};

use crate::analysis::tokenize;

/// Intent name assigned to item-search messages. Search has no example
/// utterances; it is detected by the hint heuristics in
/// [`crate::intent::classifier`].
pub const SEARCH_INTENT: &str = "search_items";

/// Intent name returned when nothing matches.
pub const FALLBACK_INTENT: &str = "fallback";

/// An immutable intent definition: a name, example utterances, and the
/// canned reply sent when the intent matches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Intent {
    /// Unique intent name, e.g. `"greeting"`.
    pub name: String,
    /// Example utterances, matched by token overlap.
    pub examples: Vec<String>,
    /// Canned reply text.
    pub response: String,
}

impl Intent {
    /// Create a new intent definition.
    pub fn new<S, R>(name: S, examples: Vec<&str>, response: R) -> Self
    where
        S: Into<String>,
        R: Into<String>,
    {
        Intent {
            name: name.into(),
            examples: examples.into_iter().map(|e| e.to_string()).collect(),
            response: response.into(),
        }
    }
}

/// A pre-tokenized example utterance, produced once at corpus construction.
#[derive(Debug, Clone)]
pub struct TrainedExample {
    /// Name of the owning intent.
    pub intent: String,
    /// Tokenized example text.
    pub tokens: Vec<String>,
}

/// The read-only intent corpus shared by all requests.
///
/// Holds the intent definitions in registration order plus every example
/// pre-tokenized. Safe for unrestricted concurrent reads.
#[derive(Debug, Clone)]
pub struct IntentCorpus {
    intents: Vec<Intent>,
    trained: Vec<TrainedExample>,
}

impl IntentCorpus {
    /// Build a corpus from intent definitions, tokenizing every example
    /// exactly once. Registration order is preserved.
    pub fn new(intents: Vec<Intent>) -> Self {
        let mut trained = Vec::new();
        for intent in &intents {
            for example in &intent.examples {
                trained.push(TrainedExample {
                    intent: intent.name.clone(),
                    tokens: tokenize(example),
                });
            }
        }
        IntentCorpus { intents, trained }
    }

    /// The intent definitions in registration order.
    pub fn intents(&self) -> &[Intent] {
        &self.intents
    }

    /// The pre-tokenized examples in registration order.
    pub fn trained(&self) -> &[TrainedExample] {
        &self.trained
    }

    /// Look up an intent definition by name.
    pub fn get(&self, name: &str) -> Option<&Intent> {
        self.intents.iter().find(|i| i.name == name)
    }

    /// The fallback intent definition, or the built-in reply if the corpus
    /// was constructed without one.
    pub fn fallback(&self) -> Intent {
        self.get(FALLBACK_INTENT).cloned().unwrap_or_else(|| {
            Intent::new(
                FALLBACK_INTENT,
                vec![],
                "متوجه نشدم 🤔 می‌تونی با کلمات دیگه‌ای بگی؟ (برای راهنما بنویس «راهنما»)",
            )
        })
    }
}

impl Default for IntentCorpus {
    fn default() -> Self {
        IntentCorpus::new(default_intents())
    }
}

/// The default bilingual (English/Persian) intent table for the campus
/// lost & found assistant.
pub fn default_intents() -> Vec<Intent> {
    vec![
        Intent::new(
            "greeting",
            vec!["hello", "hi", "hey", "سلام", "درود", "سلام خوبی"],
            "سلام! 👋 من دستیار گم‌شده‌ها هستم. بگو دنبال چی می‌گردی یا چی پیدا کردی.",
        ),
        Intent::new(
            "help",
            vec![
                "help",
                "what can you do",
                "راهنما",
                "امکانات",
                "features",
                "چه کمکی میکنی",
            ],
            "می‌تونم وسایل گم‌شده یا پیداشده رو جستجو کنم. \
             کافیه وسیله‌ات رو توصیف کنی، مثلاً «کیف مشکی گم کردم». \
             همچنین می‌تونی از لیست آیتم‌ها یا نقشه استفاده کنی.",
        ),
        Intent::new(
            "map",
            vec!["map", "نقشه", "نقشه کجاست", "show map", "location map"],
            "از صفحه‌ی نقشه می‌تونی جای دقیق آیتم‌های ثبت‌شده رو ببینی. 🗺️",
        ),
        Intent::new(
            "add_item",
            vec![
                "add item",
                "post item",
                "how to post",
                "ثبت آگهی",
                "چطور آگهی بذارم",
                "چگونه آیتم ثبت کنم",
            ],
            "برای ثبت آیتم جدید روی «افزودن آیتم» بزن، نوع (گم‌شده/پیداشده)، \
             عنوان، توضیح، عکس و محل رو وارد کن.",
        ),
        Intent::new(
            "thanks",
            vec!["thanks", "thank you", "ممنون", "مرسی", "متشکرم"],
            "خواهش می‌کنم! 🙌 امیدوارم وسیله‌ات پیدا بشه.",
        ),
        Intent::new(
            "goodbye",
            vec!["bye", "goodbye", "خداحافظ", "فعلا", "بدرود"],
            "خداحافظ! اگه باز چیزی گم یا پیدا شد، همین‌جام. 👋",
        ),
        Intent::new(
            FALLBACK_INTENT,
            vec![],
            "متوجه نشدم 🤔 می‌تونی با کلمات دیگه‌ای بگی؟ (برای راهنما بنویس «راهنما»)",
        ),
    ]
}
