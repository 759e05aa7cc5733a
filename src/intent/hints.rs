//! Bilingual hint phrase tables for classification heuristics.
//!
//! These are plain containment-checked phrase lists, kept as data so they can
//! be tuned and tested without touching classifier control flow. All entries
//! must already be in normalized form (lowercase, no punctuation) because
//! they are matched against normalizer output.

/// Phrases that strongly indicate the user is describing a lost or found
/// item, in either direction.
pub const LOST_FOUND_HINTS: &[&str] = &[
    "lost",
    "missing",
    "i lost",
    "i have lost",
    "left my",
    "where is",
    "found",
    "i found",
    "گم",
    "گمشده",
    "گم کردم",
    "جا گذاشتم",
    "پیدا کردم",
    "پیدا شد",
    "پیداش کردم",
];

/// Nouns for the kinds of items that circulate on campus.
pub const ITEM_WORDS: &[&str] = &[
    "wallet",
    "card",
    "phone",
    "laptop",
    "keys",
    "key",
    "bag",
    "backpack",
    "charger",
    "earbuds",
    "airpods",
    "id",
    "student card",
    "bank card",
    "watch",
    "bottle",
    "umbrella",
    "کیف",
    "کوله",
    "گوشی",
    "لپتاپ",
    "کلید",
    "کارت",
    "شارژر",
    "هندزفری",
    "ایرپاد",
    "ساعت",
    "بطری",
    "چتر",
    "کارت دانشجویی",
    "کارت بانکی",
    "عینک",
];

/// Phrases that indicate the user is asking about the app itself, not
/// searching for an item. Checked before the lost/found hints so a help
/// question that happens to mention an item still routes to the FAQ side.
pub const FEATURE_HINTS: &[&str] = &[
    "help", "راهنما", "امکانات", "feature", "features", "نقشه", "map", "ثبت", "add item", "post",
    "چطور", "چگونه",
];

/// Phrases meaning the user LOST something; the complementary FOUND items
/// should be searched.
pub const LOST_SIDE_HINTS: &[&str] = &["lost", "missing", "گم", "گمشده", "جا گذاشتم"];

/// Phrases meaning the user FOUND something; the complementary LOST items
/// should be searched.
pub const FOUND_SIDE_HINTS: &[&str] = &["found", "پیدا کردم", "پیدا شد", "پیداش کردم"];

/// True if the normalized text contains any of the given hint phrases.
pub fn contains_any(normalized: &str, hints: &[&str]) -> bool {
    hints.iter().any(|h| normalized.contains(h))
}
