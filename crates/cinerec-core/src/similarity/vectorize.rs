//! Bag-of-words vectorization and pairwise cosine similarity

use std::collections::HashMap;

use super::SimilarityMatrix;
use crate::text;

/// Vocabulary cap: the most frequent terms catalog-wide, ties broken by
/// first-encountered order
pub const MAX_FEATURES: usize = 5000;

/// Sparse document-term count matrix over a capped vocabulary
#[derive(Debug)]
pub(crate) struct CountMatrix {
    /// Per document: (term id, count), sorted by term id
    docs: Vec<Vec<(u32, u32)>>,
}

/// Build the count matrix for a feature column.
///
/// Stop words are excluded here again even though corpus construction
/// already filtered them; the duplication is intentional and keeps the
/// vectorizer safe against un-normalized input.
///
/// Returns `None` when the column yields an empty vocabulary.
pub(crate) fn count_matrix(documents: &[String]) -> Option<CountMatrix> {
    capped_count_matrix(documents, MAX_FEATURES)
}

fn capped_count_matrix(documents: &[String], cap: usize) -> Option<CountMatrix> {
    if documents.is_empty() {
        return None;
    }

    // Corpus-wide term totals with first-seen order for deterministic ties
    let mut totals: HashMap<&str, (u64, usize)> = HashMap::new();
    let mut next_seen = 0usize;
    for doc in documents {
        for term in doc.split_whitespace() {
            if text::is_stop_word(term) {
                continue;
            }
            let entry = totals.entry(term).or_insert_with(|| {
                let seen = next_seen;
                next_seen += 1;
                (0, seen)
            });
            entry.0 += 1;
        }
    }
    if totals.is_empty() {
        return None;
    }

    let mut ranked: Vec<(&str, (u64, usize))> = totals.into_iter().collect();
    ranked.sort_by(|a, b| b.1 .0.cmp(&a.1 .0).then(a.1 .1.cmp(&b.1 .1)));
    ranked.truncate(cap);

    let vocabulary: HashMap<&str, u32> = ranked
        .iter()
        .enumerate()
        .map(|(id, (term, _))| (*term, id as u32))
        .collect();

    let docs = documents
        .iter()
        .map(|doc| {
            let mut counts: HashMap<u32, u32> = HashMap::new();
            for term in doc.split_whitespace() {
                if let Some(&id) = vocabulary.get(term) {
                    *counts.entry(id).or_insert(0) += 1;
                }
            }
            let mut row: Vec<(u32, u32)> = counts.into_iter().collect();
            row.sort_by_key(|&(id, _)| id);
            row
        })
        .collect();

    Some(CountMatrix { docs })
}

/// Exact pairwise cosine similarity over count vectors.
///
/// O(rows^2) in time and space - the dominant cost of a batch build. Rows
/// with a zero-norm vector score 0.0 against everything, including
/// themselves.
pub(crate) fn cosine_matrix(counts: &CountMatrix) -> SimilarityMatrix {
    let n = counts.docs.len();
    let norms: Vec<f64> = counts
        .docs
        .iter()
        .map(|row| {
            row.iter()
                .map(|&(_, c)| (c as f64) * (c as f64))
                .sum::<f64>()
                .sqrt()
        })
        .collect();

    let mut data = vec![0.0; n * n];
    for i in 0..n {
        data[i * n + i] = if norms[i] > 0.0 { 1.0 } else { 0.0 };
        for j in (i + 1)..n {
            let score = if norms[i] > 0.0 && norms[j] > 0.0 {
                sparse_dot(&counts.docs[i], &counts.docs[j]) / (norms[i] * norms[j])
            } else {
                0.0
            };
            data[i * n + j] = score;
            data[j * n + i] = score;
        }
    }

    SimilarityMatrix { n, data }
}

fn sparse_dot(a: &[(u32, u32)], b: &[(u32, u32)]) -> f64 {
    let mut dot = 0.0;
    let (mut ia, mut ib) = (0, 0);
    while ia < a.len() && ib < b.len() {
        match a[ia].0.cmp(&b[ib].0) {
            std::cmp::Ordering::Less => ia += 1,
            std::cmp::Ordering::Greater => ib += 1,
            std::cmp::Ordering::Equal => {
                dot += (a[ia].1 as f64) * (b[ib].1 as f64);
                ia += 1;
                ib += 1;
            }
        }
    }
    dot
}
