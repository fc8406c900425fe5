use super::Predictor;
use crate::N_FEATURES;
use crate::Prediction;
use crate::features::Feature;
use crate::features::FeatureVector;
use serde::Deserialize;
use serde::Serialize;

/// A node in a flattened regression tree.
///
/// Children always sit at larger indices than their parent, which is how
/// tree learners lay trees out in pre-order and guarantees that traversal
/// terminates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    /// Go `left` when `x[feature] <= threshold`, otherwise `right`.
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: f64,
    },
}

/// A single regression tree; the root is `nodes[0]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tree {
    pub nodes: Vec<Node>,
}

impl Tree {
    /// Panics on a tree that fails validation.
    pub fn predict(&self, x: &FeatureVector) -> Prediction {
        let mut i = 0;
        loop {
            match self.nodes[i] {
                Node::Leaf { value } => return value,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => match x.get(Feature::from(feature)) <= threshold {
                    true => i = left,
                    false => i = right,
                },
            }
        }
    }
    fn validate(&self) -> Result<(), String> {
        if self.nodes.is_empty() {
            return Err("tree has no nodes".to_string());
        }
        self.nodes
            .iter()
            .enumerate()
            .try_for_each(|(i, node)| match *node {
                Node::Leaf { value } if !value.is_finite() => {
                    Err(format!("leaf {} is not finite", i))
                }
                Node::Leaf { .. } => Ok(()),
                Node::Split { feature, .. } if feature >= N_FEATURES => {
                    Err(format!("node {} splits on unknown feature {}", i, feature))
                }
                Node::Split { threshold, .. } if threshold.is_nan() => {
                    Err(format!("node {} has no threshold", i))
                }
                Node::Split { left, right, .. }
                    if left <= i || right <= i || left >= self.nodes.len() || right >= self.nodes.len() =>
                {
                    Err(format!("node {} points outside the tree", i))
                }
                Node::Split { .. } => Ok(()),
            })
    }
}

/// How per-tree outputs combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aggregate {
    /// Bagged ensembles: average the trees.
    #[default]
    Mean,
    /// Boosted ensembles: add the trees to the base score.
    Sum,
}

/// Ensemble of regression trees, `base + aggregate(trees)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forest {
    pub trees: Vec<Tree>,
    #[serde(default)]
    pub base: f64,
    #[serde(default)]
    pub aggregate: Aggregate,
}

impl Predictor for Forest {
    fn predict(&self, x: &FeatureVector) -> Prediction {
        let total = self.trees.iter().map(|t| t.predict(x)).sum::<f64>();
        match self.aggregate {
            Aggregate::Mean => self.base + total / self.trees.len() as f64,
            Aggregate::Sum => self.base + total,
        }
    }
    fn validate(&self) -> Result<(), String> {
        if self.trees.is_empty() {
            return Err("forest has no trees".to_string());
        }
        if !self.base.is_finite() {
            return Err("base score is not finite".to_string());
        }
        self.trees
            .iter()
            .enumerate()
            .try_for_each(|(i, tree)| tree.validate().map_err(|e| format!("tree {}: {}", i, e)))
    }
}
