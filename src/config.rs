use std::{fs::File, io::BufReader, io::Read, path::Path};

use serde::Deserialize;

use crate::{flags::TryParse, DecisionEngine, FeatureFlag, Result};

/// Flag definitions loaded from a JSON document.
///
/// Two document shapes are accepted: a bare array of flags, or an object with a `flags` array.
/// Each flag is parsed on its own, so one malformed entry does not prevent the rest from loading.
#[derive(Debug, Clone, Default)]
pub struct FlagsConfig {
    flags: Vec<FeatureFlag>,
    skipped: usize,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FlagsDocument {
    List(Vec<TryParse<FeatureFlag>>),
    Wrapped { flags: Vec<TryParse<FeatureFlag>> },
}

impl FlagsConfig {
    /// Parse flag definitions from a JSON string.
    ///
    /// ```
    /// # use feature_decision::FlagsConfig;
    /// let config = FlagsConfig::from_json_str(r#"[{"feature": "NEW_UI", "active": true}]"#)?;
    /// assert_eq!(config.flags().len(), 1);
    /// # Ok::<(), feature_decision::Error>(())
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        let document: FlagsDocument = serde_json::from_str(json)?;
        Ok(Self::from_document(document))
    }

    /// Parse flag definitions from a reader.
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let document: FlagsDocument = serde_json::from_reader(reader)?;
        Ok(Self::from_document(document))
    }

    /// Parse flag definitions from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }

    /// Use already parsed flags.
    pub fn from_flags(flags: Vec<FeatureFlag>) -> Self {
        FlagsConfig { flags, skipped: 0 }
    }

    fn from_document(document: FlagsDocument) -> Self {
        let entries = match document {
            FlagsDocument::List(entries) | FlagsDocument::Wrapped { flags: entries } => entries,
        };

        let mut flags = Vec::with_capacity(entries.len());
        let mut skipped = 0;
        for (index, entry) in entries.into_iter().enumerate() {
            match entry {
                TryParse::Parsed(flag) => flags.push(flag),
                TryParse::ParseFailed(value) => {
                    log::warn!(target: "feature_decision",
                               index,
                               entry:serde = value;
                               "skipping flag definition that failed to parse");
                    skipped += 1;
                }
            }
        }

        log::debug!(target: "feature_decision",
                    loaded = flags.len(),
                    skipped;
                    "loaded flags configuration");

        FlagsConfig { flags, skipped }
    }

    /// Successfully parsed flags, in document order.
    pub fn flags(&self) -> &[FeatureFlag] {
        &self.flags
    }

    /// Number of entries that failed to parse and were left out.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Create a [`DecisionEngine`] over the loaded flags.
    ///
    /// ```
    /// # use feature_decision::{DecisionContext, FlagsConfig, Platform};
    /// let engine = FlagsConfig::from_json_str(r#"{"flags": [{"feature": "NEW_UI", "active": true}]}"#)?
    ///     .to_engine();
    /// assert!(engine.is_active("NEW_UI", &DecisionContext::new("AR", "CN", 1, Platform::Web)));
    /// # Ok::<(), feature_decision::Error>(())
    /// ```
    pub fn to_engine(self) -> DecisionEngine {
        DecisionEngine::new(self.flags)
    }
}
