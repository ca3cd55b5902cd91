use ndarray::Array2;

use crate::error::{AppError, AppResult};

/// Validates a feature matrix before similarity computation.
///
/// Fails on a zero-row matrix or any non-finite entry. Both point at an
/// upstream data-quality defect, so offline runs must stop here rather than
/// produce garbage similarity scores. Callers are expected to validate before
/// calling [`similarity_matrix`]; the ordering is a contract, not enforced.
pub fn validate(features: &Array2<f64>) -> AppResult<()> {
    if features.nrows() == 0 {
        return Err(AppError::Validation(
            "Feature matrix is empty. Check input data.".to_string(),
        ));
    }
    if features.iter().any(|value| !value.is_finite()) {
        return Err(AppError::Validation(
            "Feature matrix contains non-finite values.".to_string(),
        ));
    }
    Ok(())
}

/// Computes the dense pairwise cosine similarity matrix.
///
/// `sim[i][j] = dot(v_i, v_j) / (norm(v_i) * norm(v_j))`, with a zero vector
/// compared against anything yielding 0.0 rather than NaN. The output row
/// order matches the feature matrix row order; re-sorting the source table
/// after vectorizing breaks that coupling.
pub fn similarity_matrix(features: &Array2<f64>) -> Array2<f64> {
    let n = features.nrows();

    let norms: Vec<f64> = features
        .outer_iter()
        .map(|row| row.iter().map(|v| v * v).sum::<f64>().sqrt())
        .collect();

    let mut similarity = Array2::zeros((n, n));
    for i in 0..n {
        for j in i..n {
            let value = if norms[i] == 0.0 || norms[j] == 0.0 {
                0.0
            } else {
                features.row(i).dot(&features.row(j)) / (norms[i] * norms[j])
            };
            similarity[[i, j]] = value;
            similarity[[j, i]] = value;
        }
    }

    similarity
}
