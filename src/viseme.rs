//! The closed viseme vocabulary.
//!
//! Every token the engine emits is one of these fifteen mouth-shape classes
//! (the Oculus lip-sync set). Tables refer to them by their canonical token,
//! which is also how they serialize.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A visual mouth shape understood by the facial-rig driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Viseme {
    /// Silence / rest pose.
    #[serde(rename = "sil")]
    Sil,
    /// p, b, m (lips pressed together)
    #[serde(rename = "PP")]
    PP,
    /// f, v (teeth on lip)
    #[serde(rename = "FF")]
    FF,
    /// th (tongue between teeth)
    #[serde(rename = "TH")]
    TH,
    /// t, d (tongue at roof)
    #[serde(rename = "DD")]
    DD,
    /// k, g, velar and uvular fricatives
    #[serde(rename = "kk")]
    KK,
    /// tʃ, dʒ
    #[serde(rename = "CH")]
    CH,
    /// s, z, ʃ and the uvular r
    #[serde(rename = "SS")]
    SS,
    /// n, l, ŋ
    #[serde(rename = "nn")]
    NN,
    /// trilled r
    #[serde(rename = "RR")]
    RR,
    /// open a
    #[serde(rename = "aa")]
    AA,
    #[serde(rename = "E")]
    E,
    #[serde(rename = "I")]
    I,
    #[serde(rename = "O")]
    O,
    #[serde(rename = "U")]
    U,
}

impl Viseme {
    pub const ALL: [Viseme; 15] = [
        Viseme::Sil,
        Viseme::PP,
        Viseme::FF,
        Viseme::TH,
        Viseme::DD,
        Viseme::KK,
        Viseme::CH,
        Viseme::SS,
        Viseme::NN,
        Viseme::RR,
        Viseme::AA,
        Viseme::E,
        Viseme::I,
        Viseme::O,
        Viseme::U,
    ];

    /// Canonical token as used in rule tables and rig drivers.
    pub fn as_str(&self) -> &'static str {
        match self {
            Viseme::Sil => "sil",
            Viseme::PP => "PP",
            Viseme::FF => "FF",
            Viseme::TH => "TH",
            Viseme::DD => "DD",
            Viseme::KK => "kk",
            Viseme::CH => "CH",
            Viseme::SS => "SS",
            Viseme::NN => "nn",
            Viseme::RR => "RR",
            Viseme::AA => "aa",
            Viseme::E => "E",
            Viseme::I => "I",
            Viseme::O => "O",
            Viseme::U => "U",
        }
    }

    /// Parse a space-separated token list such as `"aa I"`.
    ///
    /// Returns the first unknown token on failure.
    pub fn parse_sequence(tokens: &str) -> Result<Vec<Viseme>, String> {
        tokens.split_whitespace().map(|t| t.parse::<Viseme>().map_err(|_| t.to_string())).collect()
    }
}

impl fmt::Display for Viseme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Viseme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Viseme::ALL.iter().copied().find(|v| v.as_str() == s).ok_or(())
    }
}
