//! Ordered category rule table
//!
//! Precedence is positional: rules are evaluated top-to-bottom and a token
//! lands in the first category whose predicate accepts it. Category
//! membership depends on evaluation order, so the table must stay a list;
//! an unordered map would silently change results.
//!
//! Predicates test the token's utility root, so variant prefixes and the
//! importance marker never divert a token from the category its root
//! belongs to (`hover:bg-blue-500` is Background, `sm:w-full` is Sizing).
//! Keyword sets match the whole root and prefix lists are anchored at the
//! start, so `flexible` never matches `flex`.

use crate::types::{Category, ClassToken};
use phf::phf_set;

/// A single classification rule.
pub struct Rule {
    pub category: Category,
    predicate: fn(&ClassToken) -> bool,
}

impl Rule {
    /// Tests whether this rule claims the token.
    pub fn matches(&self, token: &ClassToken) -> bool {
        (self.predicate)(token)
    }
}

/// The rule table. The final `Other` rule accepts everything, so every
/// token is placed exactly once.
pub static RULES: &[Rule] = &[
    Rule {
        category: Category::Sizing,
        predicate: is_sizing,
    },
    Rule {
        category: Category::Spacing,
        predicate: is_spacing,
    },
    Rule {
        category: Category::Typography,
        predicate: is_typography,
    },
    Rule {
        category: Category::Layout,
        predicate: is_layout,
    },
    Rule {
        category: Category::Positioning,
        predicate: is_positioning,
    },
    Rule {
        category: Category::Borders,
        predicate: is_borders,
    },
    Rule {
        category: Category::Background,
        predicate: is_background,
    },
    Rule {
        category: Category::Animation,
        predicate: is_animation,
    },
    Rule {
        category: Category::Accessibility,
        predicate: is_accessibility,
    },
    Rule {
        category: Category::Pseudo,
        predicate: is_pseudo,
    },
    Rule {
        category: Category::Other,
        predicate: is_other,
    },
];

/// Finds the category for a decomposed token by walking the rule table.
pub fn classify_token(token: &ClassToken) -> Category {
    for rule in RULES {
        if rule.matches(token) {
            return rule.category;
        }
    }

    // The table ends with an always-true rule.
    Category::Other
}

fn has_prefix(root: &str, prefixes: &[&str]) -> bool {
    prefixes.iter().any(|p| root.starts_with(p))
}

// ── Sizing ──────────────────────────────────────────────────────────────────

static SIZING_PREFIXES: &[&str] = &["w-", "h-", "size-", "min-w-", "min-h-", "max-w-", "max-h-"];

fn is_sizing(token: &ClassToken) -> bool {
    has_prefix(token.root, SIZING_PREFIXES)
}

// ── Spacing ─────────────────────────────────────────────────────────────────

static SPACING_PREFIXES: &[&str] = &[
    "m-", "mx-", "my-", "mt-", "mr-", "mb-", "ml-", "p-", "px-", "py-", "pt-", "pr-", "pb-",
    "pl-", "gap-", "space-",
];

fn is_spacing(token: &ClassToken) -> bool {
    has_prefix(token.root, SPACING_PREFIXES)
}

// ── Typography ──────────────────────────────────────────────────────────────

static TYPOGRAPHY_PREFIXES: &[&str] = &["text-", "font-", "leading-", "tracking-"];

fn is_typography(token: &ClassToken) -> bool {
    has_prefix(token.root, TYPOGRAPHY_PREFIXES)
}

// ── Layout ──────────────────────────────────────────────────────────────────

// Display and visibility keywords (block, hidden, invisible, ...).
static LAYOUT_KEYWORDS: phf::Set<&'static str> = phf_set! {
    "flex",
    "grid",
    "block",
    "inline",
    "inline-block",
    "inline-flex",
    "inline-grid",
    "hidden",
    "invisible",
    "visible",
    "contents",
    "flow-root",
    "table",
};

// `gap-` belongs to Spacing, which is evaluated earlier.
static LAYOUT_PREFIXES: &[&str] = &[
    "flex-", "grid-", "items-", "justify-", "place-", "content-", "self-", "order-",
];

fn is_layout(token: &ClassToken) -> bool {
    LAYOUT_KEYWORDS.contains(token.root) || has_prefix(token.root, LAYOUT_PREFIXES)
}

// ── Positioning ─────────────────────────────────────────────────────────────

static POSITIONING_KEYWORDS: phf::Set<&'static str> = phf_set! {
    "absolute",
    "relative",
    "fixed",
    "sticky",
    "static",
    "transform",
};

static POSITIONING_PREFIXES: &[&str] = &[
    "top-",
    "right-",
    "bottom-",
    "left-",
    "inset-",
    "z-",
    "translate-",
    "rotate-",
    "scale-",
    "skew-",
    "origin-",
];

fn is_positioning(token: &ClassToken) -> bool {
    POSITIONING_KEYWORDS.contains(token.root) || has_prefix(token.root, POSITIONING_PREFIXES)
}

// ── Borders ─────────────────────────────────────────────────────────────────

static BORDERS_KEYWORDS: phf::Set<&'static str> = phf_set! {
    "border",
    "rounded",
};

static BORDERS_PREFIXES: &[&str] = &["border-", "rounded-", "outline-", "divide-", "ring-"];

fn is_borders(token: &ClassToken) -> bool {
    BORDERS_KEYWORDS.contains(token.root) || has_prefix(token.root, BORDERS_PREFIXES)
}

// ── Background ──────────────────────────────────────────────────────────────

// from-/via-/to- are gradient color stops, which paint the background.
static BACKGROUND_PREFIXES: &[&str] = &["bg-", "shadow-", "opacity-", "from-", "via-", "to-"];

fn is_background(token: &ClassToken) -> bool {
    token.root == "shadow" || has_prefix(token.root, BACKGROUND_PREFIXES)
}

// ── Animation ───────────────────────────────────────────────────────────────

static ANIMATION_PREFIXES: &[&str] = &["transition-", "duration-", "delay-", "ease-", "animate-"];

fn is_animation(token: &ClassToken) -> bool {
    token.root == "transition" || has_prefix(token.root, ANIMATION_PREFIXES)
}

// ── Accessibility ───────────────────────────────────────────────────────────

fn is_accessibility(token: &ClassToken) -> bool {
    matches!(token.root, "sr-only" | "not-sr-only") || token.root.starts_with("aria-")
}

// ── Pseudo ──────────────────────────────────────────────────────────────────

static PSEUDO_MARKERS: phf::Set<&'static str> = phf_set! {
    "group",
    "peer",
};

// Claims tokens whose root no specific category recognized but which carry
// a state variant, plus the bare group/peer marker classes.
fn is_pseudo(token: &ClassToken) -> bool {
    token.has_state_variant() || PSEUDO_MARKERS.contains(token.root)
}

// ── Other ───────────────────────────────────────────────────────────────────

fn is_other(_token: &ClassToken) -> bool {
    true
}
