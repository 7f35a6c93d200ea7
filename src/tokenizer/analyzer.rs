//! Vibrato-backed morphological analyzer

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::info;
use vibrato::{Dictionary, Tokenizer};

use super::{Morpheme, MorphologicalAnalyzer};
use crate::types::{BotError, BotResult};

/// Analyzer over a compiled Vibrato system dictionary (e.g. IPADIC).
///
/// The dictionary is loaded once; each call creates a short-lived worker, so
/// one instance serves concurrent requests without locking.
pub struct VibratoAnalyzer {
    tokenizer: Tokenizer,
}

impl VibratoAnalyzer {
    /// Load a dictionary file. Paths ending in `.zst` are decompressed.
    pub fn from_path(path: impl AsRef<Path>) -> BotResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            BotError::Tokenizer(format!("cannot open dictionary {}: {}", path.display(), e))
        })?;

        let compressed = path.extension().is_some_and(|ext| ext == "zst");
        let dictionary = if compressed {
            let decoder = zstd::Decoder::new(file).map_err(|e| {
                BotError::Tokenizer(format!("cannot decompress {}: {}", path.display(), e))
            })?;
            Self::read_dictionary(decoder, path)?
        } else {
            Self::read_dictionary(BufReader::new(file), path)?
        };

        info!(path = %path.display(), "Loaded tokenizer dictionary");

        Ok(Self {
            tokenizer: Tokenizer::new(dictionary),
        })
    }

    fn read_dictionary<R: Read>(reader: R, path: &Path) -> BotResult<Dictionary> {
        Dictionary::read(reader).map_err(|e| {
            BotError::Tokenizer(format!("invalid dictionary {}: {}", path.display(), e))
        })
    }
}

impl MorphologicalAnalyzer for VibratoAnalyzer {
    fn analyze(&self, text: &str) -> Vec<Morpheme> {
        let mut worker = self.tokenizer.new_worker();
        worker.reset_sentence(text);
        worker.tokenize();

        worker
            .token_iter()
            .map(|token| Morpheme::new(token.surface(), token.feature()))
            .collect()
    }
}
