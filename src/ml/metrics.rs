//! Evaluation metrics for the training pipeline.

use std::collections::BTreeSet;
use std::fmt;

pub fn accuracy<T: PartialEq>(truth: &[T], predicted: &[T]) -> f64 {
    if truth.is_empty() {
        return 0.0;
    }
    let correct = truth.iter().zip(predicted).filter(|(t, p)| t == p).count();
    correct as f64 / truth.len() as f64
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassMetrics {
    pub label: String,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub support: usize,
}

/// Per-class precision, recall and F1 with macro and weighted averages.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationReport {
    pub classes: Vec<ClassMetrics>,
    pub accuracy: f64,
    pub macro_avg: ClassMetrics,
    pub weighted_avg: ClassMetrics,
}

fn ratio(num: usize, den: usize) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}

fn precision_of(m: &ClassMetrics) -> f64 {
    m.precision
}

fn recall_of(m: &ClassMetrics) -> f64 {
    m.recall
}

fn f1_of(m: &ClassMetrics) -> f64 {
    m.f1
}

fn weighted_mean(classes: &[ClassMetrics], total: usize, pick: fn(&ClassMetrics) -> f64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    classes.iter().map(|c| pick(c) * c.support as f64).sum::<f64>() / total as f64
}

impl ClassificationReport {
    pub fn new<S: AsRef<str>>(truth: &[S], predicted: &[S]) -> Self {
        let labels: BTreeSet<&str> = truth
            .iter()
            .chain(predicted)
            .map(|s| s.as_ref())
            .collect();

        let pairs: Vec<(&str, &str)> = truth
            .iter()
            .zip(predicted)
            .map(|(t, p)| (t.as_ref(), p.as_ref()))
            .collect();

        let classes: Vec<ClassMetrics> = labels
            .iter()
            .map(|&label| {
                let tp = pairs.iter().filter(|(t, p)| *t == label && *p == label).count();
                let predicted_n = pairs.iter().filter(|(_, p)| *p == label).count();
                let support = pairs.iter().filter(|(t, _)| *t == label).count();
                let precision = ratio(tp, predicted_n);
                let recall = ratio(tp, support);
                let f1 = if precision + recall > 0.0 {
                    2.0 * precision * recall / (precision + recall)
                } else {
                    0.0
                };
                ClassMetrics {
                    label: label.to_string(),
                    precision,
                    recall,
                    f1,
                    support,
                }
            })
            .collect();

        let total: usize = classes.iter().map(|c| c.support).sum();
        let k = classes.len().max(1) as f64;
        let macro_avg = ClassMetrics {
            label: "macro avg".to_string(),
            precision: classes.iter().map(|c| c.precision).sum::<f64>() / k,
            recall: classes.iter().map(|c| c.recall).sum::<f64>() / k,
            f1: classes.iter().map(|c| c.f1).sum::<f64>() / k,
            support: total,
        };
        let weighted_avg = ClassMetrics {
            label: "weighted avg".to_string(),
            precision: weighted_mean(&classes, total, precision_of),
            recall: weighted_mean(&classes, total, recall_of),
            f1: weighted_mean(&classes, total, f1_of),
            support: total,
        };

        let truth_vec: Vec<&str> = pairs.iter().map(|(t, _)| *t).collect();
        let pred_vec: Vec<&str> = pairs.iter().map(|(_, p)| *p).collect();

        Self {
            accuracy: accuracy(&truth_vec, &pred_vec),
            classes,
            macro_avg,
            weighted_avg,
        }
    }
}

impl fmt::Display for ClassificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row = |f: &mut fmt::Formatter<'_>, m: &ClassMetrics| {
            writeln!(
                f,
                "{:>12} {:>9.2} {:>9.2} {:>9.2} {:>9}",
                m.label, m.precision, m.recall, m.f1, m.support
            )
        };
        writeln!(f, "{:>12} {:>9} {:>9} {:>9} {:>9}", "", "precision", "recall", "f1-score", "support")?;
        writeln!(f)?;
        for class in &self.classes {
            row(f, class)?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "{:>12} {:>9} {:>9} {:>9.2} {:>9}",
            "accuracy", "", "", self.accuracy, self.macro_avg.support
        )?;
        row(f, &self.macro_avg)?;
        row(f, &self.weighted_avg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accuracy_counts_matches() {
        assert_eq!(accuracy(&[1, 0, 1, 1], &[1, 1, 1, 0]), 0.5);
        assert_eq!(accuracy::<u8>(&[], &[]), 0.0);
    }

    #[test]
    fn report_matches_hand_computed_values() {
        let truth = ["positive", "positive", "negative", "negative"];
        let pred = ["positive", "negative", "negative", "negative"];
        let report = ClassificationReport::new(&truth, &pred);

        let neg = &report.classes[0];
        assert_eq!(neg.label, "negative");
        assert!((neg.precision - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(neg.recall, 1.0);
        assert_eq!(neg.support, 2);

        let pos = &report.classes[1];
        assert_eq!(pos.precision, 1.0);
        assert_eq!(pos.recall, 0.5);

        assert_eq!(report.accuracy, 0.75);
        assert_eq!(report.macro_avg.support, 4);
        assert!((report.weighted_avg.recall - 0.75).abs() < 1e-12);
    }

    #[test]
    fn report_renders_table() {
        let report = ClassificationReport::new(&["a", "b"], &["a", "a"]);
        let text = report.to_string();
        assert!(text.contains("precision"));
        assert!(text.contains("macro avg"));
        assert!(text.contains("weighted avg"));
    }
}
