use ndarray::Array2;

use crate::error::{AppError, AppResult};

/// Offline quality metrics for similarity-derived predictions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quality {
    pub mae: f64,
    pub rmse: f64,
}

/// Scores similarity-derived predictions against a ground-truth signal.
///
/// Predictions are the per-row means of the similarity matrix (each item's
/// average similarity to all items, itself included). This is a proxy score,
/// not a rating predictor; keep the derivation fixed so reported numbers
/// stay comparable across runs.
///
/// Ground truth and predictions are silently truncated to the shorter of the
/// two lengths before scoring. An empty pairing is rejected: MAE/RMSE over
/// zero samples has no defined value.
pub fn evaluate(ground_truth: &[f64], similarity: &Array2<f64>) -> AppResult<Quality> {
    let predictions: Vec<f64> = similarity
        .outer_iter()
        .map(|row| row.mean().unwrap_or(0.0))
        .collect();

    let len = ground_truth.len().min(predictions.len());
    if len == 0 {
        return Err(AppError::Evaluation(
            "No paired samples to score.".to_string(),
        ));
    }

    let mut abs_sum = 0.0;
    let mut sq_sum = 0.0;
    for (truth, prediction) in ground_truth[..len].iter().zip(&predictions[..len]) {
        let diff = truth - prediction;
        abs_sum += diff.abs();
        sq_sum += diff * diff;
    }

    Ok(Quality {
        mae: abs_sum / len as f64,
        rmse: (sq_sum / len as f64).sqrt(),
    })
}
