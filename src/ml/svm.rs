//! Linear support-vector classifier.
//!
//! L2-regularized, squared-hinge-loss SVM solved in the dual by coordinate
//! descent. The intercept is learned as the weight of an extra constant
//! feature, so it is regularized together with the coefficients.

use crate::ml::tfidf::SparseVector;
use anyhow::{bail, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SvcParams {
    pub c: f64,
    pub tol: f64,
    pub max_iter: usize,
    /// Reweight `c` per class by `n / (2 * n_class)`.
    pub balanced: bool,
    pub intercept_scaling: f64,
    /// Seed for the per-iteration visiting order.
    pub seed: u64,
}

impl Default for SvcParams {
    fn default() -> Self {
        Self {
            c: 1.0,
            tol: 1e-4,
            max_iter: 1000,
            balanced: true,
            intercept_scaling: 1.0,
            seed: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearSvc {
    params: SvcParams,
    /// The two class labels in ascending order. `classes[1]` is the positive side.
    classes: Vec<String>,
    coef: Vec<f64>,
    intercept: f64,
    n_iter: usize,
}

impl LinearSvc {
    pub fn fit<L: AsRef<str>>(
        x: &[SparseVector],
        labels: &[L],
        n_features: usize,
        params: SvcParams,
    ) -> Result<Self> {
        if x.len() != labels.len() {
            bail!(
                "feature rows ({}) and labels ({}) differ in length",
                x.len(),
                labels.len()
            );
        }
        let classes: Vec<String> = labels
            .iter()
            .map(|l| l.as_ref().to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        if classes.len() != 2 {
            bail!(
                "binary classification needs exactly two classes, found {}",
                classes.len()
            );
        }

        let y: Vec<f64> = labels
            .iter()
            .map(|l| if l.as_ref() == classes[1] { 1.0 } else { -1.0 })
            .collect();
        let n = y.len() as f64;
        let n_pos = y.iter().filter(|&&v| v > 0.0).count() as f64;
        let n_neg = n - n_pos;
        let (c_pos, c_neg) = if params.balanced {
            (params.c * n / (2.0 * n_pos), params.c * n / (2.0 * n_neg))
        } else {
            (params.c, params.c)
        };

        let bias_x = params.intercept_scaling;
        let diag: Vec<f64> = y
            .iter()
            .map(|&yi| 0.5 / if yi > 0.0 { c_pos } else { c_neg })
            .collect();
        let qd: Vec<f64> = x
            .iter()
            .zip(diag.iter())
            .map(|(xi, d)| xi.squared_norm() + bias_x * bias_x + d)
            .collect();

        let mut w = vec![0.0; n_features];
        let mut w_bias = 0.0;
        let mut alpha = vec![0.0; x.len()];
        let mut order: Vec<usize> = (0..x.len()).collect();
        let mut rng = StdRng::seed_from_u64(params.seed);

        let mut iter = 0;
        while iter < params.max_iter {
            order.shuffle(&mut rng);
            let mut pg_max = f64::NEG_INFINITY;
            let mut pg_min = f64::INFINITY;

            for &i in &order {
                let xi = &x[i];
                let yi = y[i];
                let g = yi * (xi.dot(&w) + w_bias * bias_x) - 1.0 + diag[i] * alpha[i];
                let pg = if alpha[i] == 0.0 { g.min(0.0) } else { g };
                pg_max = pg_max.max(pg);
                pg_min = pg_min.min(pg);

                if pg.abs() > 1e-12 {
                    let old = alpha[i];
                    alpha[i] = (old - g / qd[i]).max(0.0);
                    let step = (alpha[i] - old) * yi;
                    for (j, v) in xi.iter() {
                        if let Some(wj) = w.get_mut(j) {
                            *wj += step * v;
                        }
                    }
                    w_bias += step * bias_x;
                }
            }

            iter += 1;
            if pg_max - pg_min <= params.tol {
                break;
            }
        }

        if iter >= params.max_iter {
            warn!(
                max_iter = params.max_iter,
                "linear SVC did not converge; consider more iterations"
            );
        } else {
            debug!(iterations = iter, "linear SVC converged");
        }

        Ok(Self {
            params,
            classes,
            coef: w,
            intercept: w_bias * bias_x,
            n_iter: iter,
        })
    }

    /// Signed distance to the separating hyperplane. Positive means `classes[1]`.
    pub fn decision_function(&self, x: &SparseVector) -> f64 {
        x.dot(&self.coef) + self.intercept
    }

    pub fn predict(&self, x: &SparseVector) -> &str {
        if self.decision_function(x) > 0.0 {
            &self.classes[1]
        } else {
            &self.classes[0]
        }
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn n_features(&self) -> usize {
        self.coef.len()
    }

    pub fn n_iter(&self) -> usize {
        self.n_iter
    }
}
