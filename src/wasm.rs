// WebAssembly bindings for the measure tagger
use crate::config::TaggerConfig;
use crate::lexicon::UnitLexicon;
use crate::measure::{GrammarComposer, MeasureGrammar};
use crate::text::TextTagger;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct MeasureTaggerWasm {
    tagger: TextTagger,
}

#[wasm_bindgen]
impl MeasureTaggerWasm {
    /// Build a tagger from optional TOML config and lexicon contents.
    /// Files can't be read from WASM, so the lexicon is passed as text.
    #[wasm_bindgen(constructor)]
    pub fn new(
        config_content: Option<String>,
        lexicon_content: Option<String>,
    ) -> Result<MeasureTaggerWasm, JsValue> {
        let config = match config_content {
            Some(content) => TaggerConfig::load_from_str(&content)
                .map_err(|e| JsValue::from_str(&format!("Failed to load config: {}", e)))?,
            None => TaggerConfig::default(),
        };

        let lexicon = match lexicon_content {
            Some(content) => UnitLexicon::from_tsv_str(&content),
            None => UnitLexicon::english(),
        }
        .map_err(|e| JsValue::from_str(&format!("Failed to load lexicon: {}", e)))?
        .with_extra(
            config
                .extra_units
                .iter()
                .map(|(raw, name)| (raw.as_str(), name.as_str())),
        );

        let grammar: MeasureGrammar = GrammarComposer::new(lexicon)
            .deterministic(config.deterministic)
            .build();

        Ok(Self {
            tagger: TextTagger::new(grammar, config.max_window),
        })
    }

    /// Classify a single span
    /// Returns JSON string array of candidates (empty when nothing matches)
    #[wasm_bindgen]
    pub fn classify(&self, span: &str) -> Result<String, JsValue> {
        let candidates = self.tagger.grammar().classify(span);
        serde_json::to_string(&candidates)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize candidates: {}", e)))
    }

    /// Scan running text
    /// Returns JSON string array of segments
    #[wasm_bindgen]
    pub fn tag_text(&self, text: &str) -> Result<String, JsValue> {
        let segments = self.tagger.segments(text);
        serde_json::to_string(&segments)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize segments: {}", e)))
    }

    /// Text with measures replaced by their token envelopes
    #[wasm_bindgen]
    pub fn render(&self, text: &str) -> String {
        self.tagger.render(text)
    }
}
