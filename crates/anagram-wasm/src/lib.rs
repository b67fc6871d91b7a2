// WASM bindings for the anagram phrase solver.
//
// Provides a `WasmAnagram` class exported via wasm-bindgen that wraps the
// `AnagramHandle` from anagram-search. Structured results are serialized
// to JavaScript values using serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   const anagram = new WasmAnagram(dictBytes);
//   anagram.solve("ŝipokato");            // => ["ŝipo kato", ...]
//   anagram.candidates("ŝipo");           // => ["poŝ", "ŝi", "ŝipo", ...]
//   anagram.isWord("kato");               // => true
//   anagram.request({ vorto: "ŝipokato", ekskluzivu: "kato" });
//                                         // => { statusCode: 200, results: [...] }
//   anagram.setMaxWords(2);

use serde::Serialize;
use wasm_bindgen::prelude::*;

use anagram_core::{CodePage, LanguageConfig};
use anagram_search::request::AnagramRequest;
use anagram_search::{AnagramError, AnagramHandle, QueryOutcome};

/// Serializable result of a detailed query.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsOutcome {
    results: Vec<String>,
    truncated: bool,
}

impl From<QueryOutcome> for JsOutcome {
    fn from(outcome: QueryOutcome) -> Self {
        Self {
            results: outcome.results,
            truncated: outcome.truncated,
        }
    }
}

fn anagram_error_to_js(e: AnagramError) -> JsError {
    JsError::new(&e.to_string())
}

/// Anagram solver for WebAssembly.
#[wasm_bindgen]
pub struct WasmAnagram {
    handle: AnagramHandle,
}

#[wasm_bindgen]
impl WasmAnagram {
    /// Load an Esperanto dictionary (ISO-8859-3) from the contents of a
    /// `.dwg` file.
    #[wasm_bindgen(constructor)]
    pub fn new(dict_data: &[u8]) -> Result<WasmAnagram, JsError> {
        let handle = AnagramHandle::from_bytes(dict_data, LanguageConfig::esperanto())
            .map_err(anagram_error_to_js)?;
        Ok(WasmAnagram { handle })
    }

    /// Load a dictionary for another language. `alphabet` lists the letters
    /// rarest first; `code_page` names the byte encoding of the graph
    /// (`"latin1"` or `"iso-8859-3"`).
    #[wasm_bindgen(js_name = "withAlphabet")]
    pub fn with_alphabet(
        dict_data: &[u8],
        alphabet: &str,
        code_page: &str,
    ) -> Result<WasmAnagram, JsError> {
        let code_page = CodePage::by_name(code_page)
            .ok_or_else(|| JsError::new(&format!("unknown code page: {code_page}")))?;
        let handle = AnagramHandle::with_alphabet(dict_data, alphabet, code_page)
            .map_err(anagram_error_to_js)?;
        Ok(WasmAnagram { handle })
    }

    /// Phrases using exactly the given letters.
    pub fn solve(&self, letters: &str) -> Vec<String> {
        self.handle.anagrams(letters)
    }

    /// Phrases with required and forbidden words (space-separated lists).
    ///
    /// Returns `{ results, truncated }`; throws when an included word does
    /// not fit in the letters.
    #[wasm_bindgen(js_name = "solveWith")]
    pub fn solve_with(
        &self,
        letters: &str,
        include: &str,
        exclude: &str,
    ) -> Result<JsValue, JsError> {
        let query = self
            .handle
            .query(letters)
            .include(include.split_whitespace())
            .exclude(exclude.split_whitespace());
        let outcome = self
            .handle
            .solve(&query)
            .map_err(|e| JsError::new(&e.to_string()))?;
        serde_wasm_bindgen::to_value(&JsOutcome::from(outcome))
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Dictionary words that fit in the letters.
    pub fn candidates(&self, letters: &str) -> Vec<String> {
        self.handle.candidates(letters)
    }

    /// Answer a request object with the wire field names (`vorto`,
    /// `inkluzivu`, `ekskluzivu`, `maksvortoj`, `maksliteroj`, `minliteroj`,
    /// `kandidatoj`).
    ///
    /// Returns `{ statusCode, results, error?, truncated }`.
    pub fn request(&self, request: JsValue) -> Result<JsValue, JsError> {
        let request: AnagramRequest = serde_wasm_bindgen::from_value(request)
            .map_err(|e| JsError::new(&e.to_string()))?;
        let response = self.handle.request(&request);
        serde_wasm_bindgen::to_value(&response).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Whether the word is in the dictionary, exactly as spelled.
    #[wasm_bindgen(js_name = "isWord")]
    pub fn is_word(&self, word: &str) -> bool {
        self.handle.is_word(word)
    }

    #[wasm_bindgen(js_name = "edgeCount")]
    pub fn edge_count(&self) -> usize {
        self.handle.edge_count()
    }

    // =========================================================================
    // Option setters
    // =========================================================================

    #[wasm_bindgen(js_name = "setMaxWords")]
    pub fn set_max_words(&mut self, value: usize) {
        self.handle.set_max_words(value);
    }

    #[wasm_bindgen(js_name = "setMinLetters")]
    pub fn set_min_letters(&mut self, value: usize) {
        self.handle.set_min_letters(value);
    }

    #[wasm_bindgen(js_name = "setMaxLetters")]
    pub fn set_max_letters(&mut self, value: usize) {
        self.handle.set_max_letters(value);
    }
}
