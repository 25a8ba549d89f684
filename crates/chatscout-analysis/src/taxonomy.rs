//! Static domain → category → keyword dictionary and structural matching.
//!
//! Keyword comparison is case-insensitive substring matching. Short keywords
//! can over-match inside unrelated words ("ai" inside "again", "r" inside
//! almost anything); this imprecision is kept as documented behaviour of the
//! reference dictionary rather than silently upgraded to whole-word matching.

/// One node of the expertise dictionary.
///
/// The tree mixes two shapes: a plain keyword list, and a named sub-tree
/// that may carry a keyword list of its own plus nested children
/// (`languages`, `concepts`, `tools`, `channels`).
#[derive(Debug, Clone)]
pub enum TaxonomyNode {
    Leaf(Vec<&'static str>),
    Branch {
        keywords: Vec<&'static str>,
        children: Vec<(&'static str, TaxonomyNode)>,
    },
}

/// Process-wide read-only expertise dictionary.
///
/// Construction is cheap and the structure is never mutated afterwards, so
/// one instance can be shared by reference across concurrent callers.
#[derive(Debug, Clone)]
pub struct DomainTaxonomy {
    root: Vec<(&'static str, TaxonomyNode)>,
}

fn leaf(keywords: &[&'static str]) -> TaxonomyNode {
    TaxonomyNode::Leaf(keywords.to_vec())
}

fn branch(
    keywords: &[&'static str],
    children: Vec<(&'static str, TaxonomyNode)>,
) -> TaxonomyNode {
    TaxonomyNode::Branch {
        keywords: keywords.to_vec(),
        children,
    }
}

impl Default for DomainTaxonomy {
    fn default() -> Self {
        // All keywords are stored lower-case; matching lower-cases the text once.
        Self {
            root: vec![
                (
                    "technical",
                    branch(
                        &[],
                        vec![
                            (
                                "programming",
                                branch(
                                    &[
                                        "code", "programming", "developer", "software", "bug",
                                        "api", "frontend", "backend", "fullstack", "database",
                                        "git",
                                    ],
                                    vec![
                                        (
                                            "languages",
                                            leaf(&[
                                                "javascript", "python", "java", "typescript",
                                                "react", "node", "angular", "vue", "php", "ruby",
                                            ]),
                                        ),
                                        (
                                            "concepts",
                                            leaf(&[
                                                "algorithm", "debugging", "testing", "deployment",
                                                "architecture", "security", "performance",
                                            ]),
                                        ),
                                    ],
                                ),
                            ),
                            (
                                "design",
                                branch(
                                    &[
                                        "design", "ui", "ux", "interface", "user experience",
                                        "wireframe", "prototype",
                                    ],
                                    vec![
                                        (
                                            "tools",
                                            leaf(&[
                                                "figma", "sketch", "adobe", "photoshop",
                                                "illustrator", "indesign",
                                            ]),
                                        ),
                                        (
                                            "concepts",
                                            leaf(&[
                                                "typography", "layout", "color theory",
                                                "accessibility", "responsive", "mobile-first",
                                            ]),
                                        ),
                                    ],
                                ),
                            ),
                            (
                                "data",
                                branch(
                                    &[
                                        "data", "analytics", "statistics", "machine learning",
                                        "ai", "visualization",
                                    ],
                                    vec![
                                        (
                                            "tools",
                                            leaf(&["python", "r", "sql", "tableau", "powerbi", "excel"]),
                                        ),
                                        (
                                            "concepts",
                                            leaf(&[
                                                "analysis", "prediction", "clustering",
                                                "regression", "classification",
                                            ]),
                                        ),
                                    ],
                                ),
                            ),
                        ],
                    ),
                ),
                (
                    "business",
                    branch(
                        &[],
                        vec![
                            (
                                "management",
                                branch(
                                    &["management", "leadership", "strategy", "planning", "operations"],
                                    vec![(
                                        "concepts",
                                        leaf(&[
                                            "team building", "decision making", "risk management",
                                            "resource allocation",
                                        ]),
                                    )],
                                ),
                            ),
                            (
                                "marketing",
                                branch(
                                    &["marketing", "branding", "advertising", "social media", "content"],
                                    vec![
                                        (
                                            "channels",
                                            leaf(&[
                                                "facebook", "instagram", "linkedin", "twitter",
                                                "tiktok",
                                            ]),
                                        ),
                                        (
                                            "concepts",
                                            leaf(&["seo", "analytics", "campaign", "conversion", "engagement"]),
                                        ),
                                    ],
                                ),
                            ),
                            (
                                "startup",
                                branch(
                                    &["startup", "entrepreneurship", "business model", "pitch", "funding"],
                                    vec![(
                                        "concepts",
                                        leaf(&[
                                            "mvp", "product market fit", "scaling",
                                            "venture capital", "bootstrapping",
                                        ]),
                                    )],
                                ),
                            ),
                        ],
                    ),
                ),
                (
                    "professional",
                    branch(
                        &[],
                        vec![
                            ("consulting", leaf(&["consulting", "advisory", "strategy", "solutions"])),
                            ("legal", leaf(&["legal", "law", "contract", "agreement", "compliance"])),
                            ("finance", leaf(&["finance", "investment", "accounting", "budget", "forecast"])),
                        ],
                    ),
                ),
            ],
        }
    }
}

impl DomainTaxonomy {
    /// Walk the tree depth-first and return every category key whose
    /// keywords appear in `text`.
    ///
    /// A leaf matches through its list; a branch matches through its own
    /// `keywords`. Matching continues into nested branches, so one text can
    /// hit both a broad domain and a specific sub-category. The result is in
    /// walk order with each key reported at most once.
    pub fn match_categories(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let mut matched = Vec::new();
        walk(&self.root, &lowered, &mut matched);
        matched
    }

    /// Every branch that carries its own keyword list, as `(key, keywords)`.
    /// Used for context-evidence detection against message text.
    pub fn keyword_categories(&self) -> Vec<(&'static str, &[&'static str])> {
        let mut out = Vec::new();
        collect_keyword_branches(&self.root, &mut out);
        out
    }
}

fn any_keyword_in(keywords: &[&'static str], lowered: &str) -> bool {
    keywords.iter().any(|k| lowered.contains(k))
}

fn push_unique(matched: &mut Vec<String>, key: &str) {
    if !matched.iter().any(|m| m == key) {
        matched.push(key.to_string());
    }
}

fn walk(children: &[(&'static str, TaxonomyNode)], lowered: &str, matched: &mut Vec<String>) {
    for (key, node) in children {
        match node {
            TaxonomyNode::Leaf(keywords) => {
                if any_keyword_in(keywords, lowered) {
                    push_unique(matched, key);
                }
            }
            TaxonomyNode::Branch { keywords, children } => {
                if any_keyword_in(keywords, lowered) {
                    push_unique(matched, key);
                }
                walk(children, lowered, matched);
            }
        }
    }
}

fn collect_keyword_branches<'a>(
    children: &'a [(&'static str, TaxonomyNode)],
    out: &mut Vec<(&'static str, &'a [&'static str])>,
) {
    for (key, node) in children {
        if let TaxonomyNode::Branch { keywords, children } = node {
            if !keywords.is_empty() {
                out.push((key, keywords.as_slice()));
            }
            collect_keyword_branches(children, out);
        }
    }
}
