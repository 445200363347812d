use log::{error, info, warn};
use std::process;

use crate::store::Store;

/// Run all boot checks. Call this before Rocket launches.
/// Verifies the invariants the handlers assume about the seeded data and
/// aborts if a critical one is broken.
pub fn run(store: &dyn Store) {
    info!("VitaStack boot check starting...");

    let mut warnings = 0u32;
    let mut errors = 0u32;

    // ── 1. Quiz questions ──────────────────────────────
    let questions = store.quiz_questions();
    if questions.is_empty() {
        error!("  no quiz questions seeded; the quiz cannot run");
        errors += 1;
    }
    for pair in questions.windows(2) {
        if pair[0].order >= pair[1].order {
            error!(
                "  quiz question order not strictly increasing: {} (order {}) then {} (order {})",
                pair[0].id, pair[0].order, pair[1].id, pair[1].order
            );
            errors += 1;
        }
    }

    // ── 2. Blog posts ──────────────────────────────────
    let posts = store.blog_list(None);
    let mut slugs: Vec<&str> = posts.iter().map(|p| p.slug.as_str()).collect();
    slugs.sort_unstable();
    let unique = {
        let mut deduped = slugs.clone();
        deduped.dedup();
        deduped.len()
    };
    if unique != slugs.len() {
        error!("  duplicate blog slugs in seed data");
        errors += 1;
    }
    if store.blog_featured().is_none() {
        warn!("  no featured blog post; /api/blog/featured will return null");
        warnings += 1;
    }

    // ── 3. Product catalog ─────────────────────────────
    let products = store.product_list(None);
    if products.is_empty() {
        error!("  product catalog is empty");
        errors += 1;
    }

    if errors > 0 {
        error!(
            "Boot check FAILED: {} error(s), {} warning(s). Aborting.",
            errors, warnings
        );
        process::exit(1);
    }

    info!(
        "Boot check passed: {} questions, {} products, {} posts, {} warning(s)",
        questions.len(),
        products.len(),
        posts.len(),
        warnings
    );
}
