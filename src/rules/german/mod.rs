//! Built-in German tables.
//!
//! Phoneme → viseme assignments follow published Polly viseme research with
//! two German corrections: the uvular R (ʀ, ʁ) and the affricates pf/ts map to
//! SS. Phoneme ids are IPA. Pattern outputs that are phoneme *sequences*
//! (ʃp, kv, ŋk, ...) carry their own entries so nothing a pattern produces is
//! dropped. Doubled letters (`ss` from ß) are left unmapped on purpose: they
//! resolve per character and coalesce into one longer entry.


use super::config::{PatternEntry, TableConfig};
use super::table_set::{NumeralWords, TableSet, default_digit_spelling_threshold};
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

static GERMAN: Lazy<TableSet> =
    Lazy::new(|| TableSet::try_from(config()).expect("built-in German tables must validate"));

impl TableSet {
    /// The built-in German table set (constructed once per process).
    pub fn german() -> &'static TableSet {
        &GERMAN
    }
}

/// German orthographic patterns → IPA phoneme ids.
const PATTERNS: &[(&str, &str)] = &[
    // Consonant clusters
    ("sch", "ʃ"),
    ("tsch", "tʃ"),
    ("pf", "pf"),
    ("qu", "kv"),
    ("ck", "k"),
    ("dt", "t"),
    ("ng", "ŋ"),
    ("nk", "ŋk"),
    // Initial sp/st
    ("sp", "ʃp"),
    ("st", "ʃt"),
    // Umlauts and ß
    ("ä", "ɛ"),
    ("ö", "ø"),
    ("ü", "y"),
    ("ß", "ss"),
    // Vowel length
    ("aa", "aː"),
    ("ee", "eː"),
    ("oo", "oː"),
    ("uu", "uː"),
    ("ie", "iː"),
    ("ah", "aː"),
    ("eh", "eː"),
    ("oh", "oː"),
    ("uh", "uː"),
    // Diphthongs
    ("ei", "aɪ"),
    ("ai", "aɪ"),
    ("au", "aʊ"),
    ("eu", "ɔʏ"),
    ("äu", "ɔʏ"),
    // Other digraphs
    ("ch", "ç"),
    ("th", "t"),
    ("ph", "f"),
    ("rh", "r"),
    ("gh", "g"),
    ("sh", "ʃ"),
];

const PHONEMES: &[(&str, &str)] = &[
    // Long vowels
    ("iː", "I"),
    ("yː", "U"),
    ("uː", "U"),
    ("eː", "E"),
    ("øː", "O"),
    ("oː", "O"),
    ("ɛː", "E"),
    ("aː", "aa"),
    // Short vowels
    ("ɪ", "I"),
    ("ʏ", "U"),
    ("ʊ", "U"),
    ("ɛ", "E"),
    ("œ", "O"),
    ("ɔ", "O"),
    ("a", "aa"),
    ("ø", "O"),
    ("y", "U"),
    // Reduced vowels
    ("ə", "E"),
    ("ɐ", "aa"),
    // Diphthongs
    ("aɪ", "aa I"),
    ("aʊ", "aa U"),
    ("ɔʏ", "O I"),
    // Bilabials
    ("p", "PP"),
    ("b", "PP"),
    ("m", "PP"),
    // Labiodentals
    ("f", "FF"),
    ("v", "FF"),
    // Alveolars
    ("t", "DD"),
    ("d", "DD"),
    ("n", "nn"),
    ("l", "nn"),
    ("s", "SS"),
    ("z", "SS"),
    // Post-alveolars
    ("ʃ", "SS"),
    ("ʒ", "SS"),
    ("tʃ", "CH"),
    ("dʒ", "CH"),
    // Velars / uvulars
    ("k", "kk"),
    ("g", "kk"),
    ("ŋ", "nn"),
    ("x", "kk"),
    ("ç", "kk"),
    // R
    ("ʀ", "SS"),
    ("ʁ", "SS"),
    ("r", "RR"),
    // Affricates
    ("pf", "SS"),
    ("ts", "SS"),
    // Approximants
    ("j", "I"),
    ("h", "kk"),
    // Sequences produced by patterns and letters
    ("ʃp", "SS PP"),
    ("ʃt", "SS DD"),
    ("kv", "kk FF"),
    ("ŋk", "nn kk"),
    ("ks", "kk SS"),
];

const LETTERS: &[(&str, &str)] = &[
    ("a", "a"),
    ("b", "b"),
    ("c", "k"),
    ("d", "d"),
    ("e", "ɛ"),
    ("f", "f"),
    ("g", "g"),
    ("h", "h"),
    ("i", "ɪ"),
    ("j", "j"),
    ("k", "k"),
    ("l", "l"),
    ("m", "m"),
    ("n", "n"),
    ("o", "ɔ"),
    ("p", "p"),
    ("q", "k"),
    ("r", "ʁ"),
    ("s", "s"),
    ("t", "t"),
    ("u", "ʊ"),
    ("v", "f"),
    ("w", "v"),
    ("x", "ks"),
    ("y", "ʏ"),
    ("z", "ts"),
    ("ä", "ɛ"),
    ("ö", "ø"),
    ("ü", "y"),
    ("ß", "ss"),
];

const VISEME_DURATIONS: &[(&str, f64)] = &[
    ("aa", 0.95),
    ("E", 0.90),
    ("I", 0.92),
    ("O", 0.96),
    ("U", 0.95),
    ("PP", 1.08),
    ("SS", 1.23),
    ("DD", 1.05),
    ("FF", 1.00),
    ("kk", 1.21),
    ("nn", 0.88),
    ("RR", 0.88),
    ("CH", 1.15),
    ("sil", 1.0),
];

const PAUSES: &[(&str, f64)] = &[
    (" ", 1.0),
    (",", 3.0),
    (".", 4.0),
    ("!", 4.0),
    ("?", 4.0),
    (";", 2.0),
    (":", 2.0),
    ("-", 0.5),
    ("'", 0.3),
];

const SYMBOLS: &[(&str, &str)] = &[
    ("%", "Prozent"),
    ("€", "Euro"),
    ("&", "und"),
    ("+", "plus"),
    ("$", "Dollar"),
    ("=", "gleich"),
    ("@", "at"),
    ("#", "Hashtag"),
    ("*", "Stern"),
];

const STRIP: &str = "#_*\"„“”:;";
const PRESERVE: &str = "äöüßÄÖÜ";

fn numerals() -> NumeralWords {
    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }
    NumeralWords {
        ones: words(&["null", "eins", "zwei", "drei", "vier", "fünf", "sechs", "sieben", "acht", "neun"]),
        teens: words(&[
            "zehn", "elf", "zwölf", "dreizehn", "vierzehn", "fünfzehn", "sechzehn", "siebzehn", "achtzehn", "neunzehn",
        ]),
        tens: words(&["", "", "zwanzig", "dreißig", "vierzig", "fünfzig", "sechzig", "siebzig", "achtzig", "neunzig"]),
        hundred: "hundert".to_string(),
        thousand: "tausend".to_string(),
        joiner: "und".to_string(),
        unit_before_tens: true,
        one_combining: Some("ein".to_string()),
        minus: "minus".to_string(),
        decimal: "Komma".to_string(),
        digit_spelling_threshold: default_digit_spelling_threshold(),
    }
}

fn strings(list: &[(&str, &str)]) -> BTreeMap<String, String> {
    list.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

fn floats(list: &[(&str, f64)]) -> BTreeMap<String, f64> {
    list.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

fn config() -> TableConfig {
    TableConfig {
        name: "de".to_string(),
        patterns: PATTERNS
            .iter()
            .map(|(g, p)| PatternEntry { grapheme: g.to_string(), phoneme: p.to_string() })
            .collect(),
        phonemes: strings(PHONEMES),
        letters: strings(LETTERS),
        viseme_durations: floats(VISEME_DURATIONS),
        pauses: floats(PAUSES),
        numerals: Some(numerals()),
        symbols: strings(SYMBOLS),
        strip: STRIP.to_string(),
        preserve: PRESERVE.to_string(),
    }
}
