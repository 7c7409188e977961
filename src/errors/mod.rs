use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FivePointError {
    #[error("expected exactly five correspondences, got {left} left and {right} right")]
    InvalidInputCount { left: usize, right: usize },
    #[error("eigendecomposition of the epipolar scatter matrix did not converge")]
    NullspaceFailed,
    #[error("Schur decomposition of the action matrix did not converge")]
    ActionEigenFailed,
    #[error("SVD for eigenvector recovery did not converge")]
    EigenvectorFailed,
}

#[cfg(test)]
mod tests {
    use super::FivePointError;

    #[test]
    fn invalid_input_count_names_sizes() {
        let err = FivePointError::InvalidInputCount { left: 4, right: 5 };
        insta::assert_snapshot!(
            err.to_string(),
            @"expected exactly five correspondences, got 4 left and 5 right"
        );
    }
}
