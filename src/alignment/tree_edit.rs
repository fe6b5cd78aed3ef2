//! Tree edit distance over small labeled binary trees.
//!
//! Compares parse-like trees node by node. The distance is the aligned
//! edit distance: matched positions cost 0/1 on label mismatch, and a
//! subtree facing an empty slot costs its node count. The distance is
//! symmetric and zero exactly for identical trees.

use crate::error::Result;
use crate::report::Report;

/// A labeled binary tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    /// Node label.
    pub label: String,
    /// Left child.
    pub left: Option<Box<TreeNode>>,
    /// Right child.
    pub right: Option<Box<TreeNode>>,
}

impl TreeNode {
    /// Creates a leaf node.
    #[must_use]
    pub fn leaf(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            left: None,
            right: None,
        }
    }

    /// Creates a node with children.
    #[must_use]
    pub fn branch(
        label: impl Into<String>,
        left: Option<TreeNode>,
        right: Option<TreeNode>,
    ) -> Self {
        Self {
            label: label.into(),
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    /// Number of nodes in this subtree.
    #[must_use]
    pub fn size(&self) -> usize {
        1 + self.left.as_deref().map_or(0, TreeNode::size)
            + self.right.as_deref().map_or(0, TreeNode::size)
    }

    /// Preorder label traversal.
    #[must_use]
    pub fn preorder(&self) -> Vec<&str> {
        let mut labels = Vec::with_capacity(self.size());
        self.collect_preorder(&mut labels);
        labels
    }

    fn collect_preorder<'a>(&'a self, labels: &mut Vec<&'a str>) {
        labels.push(self.label.as_str());
        if let Some(left) = &self.left {
            left.collect_preorder(labels);
        }
        if let Some(right) = &self.right {
            right.collect_preorder(labels);
        }
    }
}

/// Aligned edit distance between two optional subtrees.
#[must_use]
pub fn edit_distance(a: Option<&TreeNode>, b: Option<&TreeNode>) -> usize {
    match (a, b) {
        (None, None) => 0,
        (Some(t), None) | (None, Some(t)) => t.size(),
        (Some(x), Some(y)) => {
            let relabel = usize::from(x.label != y.label);
            relabel
                + edit_distance(x.left.as_deref(), y.left.as_deref())
                + edit_distance(x.right.as_deref(), y.right.as_deref())
        }
    }
}

/// Similarity score derived from the edit distance: `1 / (1 + d)`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn similarity_score(a: &TreeNode, b: &TreeNode) -> f64 {
    1.0 / (1.0 + edit_distance(Some(a), Some(b)) as f64)
}

/// Depth-discounted similarity: root label match plus half the
/// children's similarity.
#[must_use]
pub fn weighted_similarity(a: Option<&TreeNode>, b: Option<&TreeNode>) -> f64 {
    match (a, b) {
        (Some(x), Some(y)) => {
            let root = f64::from(u8::from(x.label == y.label));
            root + 0.5
                * (weighted_similarity(x.left.as_deref(), y.left.as_deref())
                    + weighted_similarity(x.right.as_deref(), y.right.as_deref()))
        }
        _ => 0.0,
    }
}

/// Returns the candidate most similar to the query, with its score.
///
/// Empty candidate lists yield `None`. Ties keep the earliest candidate.
#[must_use]
pub fn best_match<'a>(query: &TreeNode, candidates: &'a [TreeNode]) -> Option<(&'a TreeNode, f64)> {
    let mut best: Option<(&TreeNode, f64)> = None;
    for candidate in candidates {
        let score = similarity_score(query, candidate);
        if best.is_none_or(|(_, s)| score > s) {
            best = Some((candidate, score));
        }
    }
    best
}

/// Demo: a question-tree retrieval pass over three candidates.
pub fn demo(_seed: u64) -> Result<Report> {
    let question = TreeNode::branch(
        "What",
        Some(TreeNode::leaf("is")),
        Some(TreeNode::leaf("science")),
    );
    let candidates = [
        TreeNode::branch(
            "What",
            Some(TreeNode::leaf("are")),
            Some(TreeNode::leaf("sciences")),
        ),
        TreeNode::branch(
            "What",
            Some(TreeNode::leaf("is")),
            Some(TreeNode::leaf("math")),
        ),
        TreeNode::branch(
            "Define",
            Some(TreeNode::leaf("data")),
            Some(TreeNode::leaf("structures")),
        ),
    ];

    let mut report = Report::new("Tree edit distance");
    report.line(format!("question tree (preorder): {:?}", question.preorder()));
    for candidate in &candidates {
        let distance = edit_distance(Some(&question), Some(candidate));
        report.line(format!(
            "candidate {:?}: distance {distance}, score {:.2}",
            candidate.preorder(),
            similarity_score(&question, candidate)
        ));
    }
    if let Some((winner, score)) = best_match(&question, &candidates) {
        report.line(format!("best match: {:?}", winner.preorder()));
        report.metric("best score", score);
    }
    Ok(report)
}
