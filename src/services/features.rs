use std::collections::{BTreeMap, BTreeSet, HashMap};

use ndarray::Array2;

/// Term-frequency/inverse-document-frequency vectorizer over a title corpus.
///
/// Fits a vocabulary from the corpus and weights each document's term counts
/// by smoothed inverse document frequency, then L2-normalizes each row.
/// Vocabulary indices are assigned in lexicographic term order, so the same
/// corpus in the same order always produces bit-identical output.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    vocabulary: BTreeMap<String, usize>,
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    /// Fits the vocabulary and IDF weights over the supplied corpus.
    ///
    /// Smoothed IDF: `ln((1 + n_docs) / (1 + doc_freq)) + 1`, which keeps
    /// weights finite for terms present in every document.
    pub fn fit(corpus: &[String]) -> Self {
        let tokenized: Vec<Vec<String>> = corpus.iter().map(|doc| tokenize(doc)).collect();

        let terms: BTreeSet<&String> = tokenized.iter().flatten().collect();
        let vocabulary: BTreeMap<String, usize> = terms
            .into_iter()
            .enumerate()
            .map(|(index, term)| (term.clone(), index))
            .collect();

        let mut doc_freq = vec![0usize; vocabulary.len()];
        for tokens in &tokenized {
            let unique: BTreeSet<&String> = tokens.iter().collect();
            for term in unique {
                if let Some(&index) = vocabulary.get(term) {
                    doc_freq[index] += 1;
                }
            }
        }

        let n_docs = corpus.len() as f64;
        let idf = doc_freq
            .iter()
            .map(|&df| ((1.0 + n_docs) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        Self { vocabulary, idf }
    }

    /// Transforms documents into a dense feature matrix, rows in input order.
    ///
    /// Documents with no in-vocabulary terms become all-zero rows rather than
    /// failing, so a corpus of empty titles still vectorizes.
    pub fn transform(&self, corpus: &[String]) -> Array2<f64> {
        let mut features = Array2::zeros((corpus.len(), self.vocabulary.len()));

        for (row, doc) in corpus.iter().enumerate() {
            let mut counts: HashMap<usize, f64> = HashMap::new();
            for token in tokenize(doc) {
                if let Some(&index) = self.vocabulary.get(&token) {
                    *counts.entry(index).or_insert(0.0) += 1.0;
                }
            }

            let mut norm_sq = 0.0;
            for (&index, &count) in &counts {
                let weighted = count * self.idf[index];
                norm_sq += weighted * weighted;
                features[[row, index]] = weighted;
            }

            let norm = norm_sq.sqrt();
            if norm > 0.0 {
                for (&index, _) in &counts {
                    features[[row, index]] /= norm;
                }
            }
        }

        features
    }

    /// Fits over the corpus and transforms it in one pass
    pub fn fit_transform(corpus: &[String]) -> Array2<f64> {
        Self::fit(corpus).transform(corpus)
    }

    /// Number of terms in the fitted vocabulary
    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }
}

/// Lowercases and splits on non-word characters, keeping tokens of two or
/// more characters. Single-character tokens carry no signal for titles.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric() && c != '_')
        .filter(|token| token.chars().count() >= 2)
        .map(String::from)
        .collect()
}
