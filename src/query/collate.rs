use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions, Strength};

thread_local! {
    static COLLATOR: Option<Collator> = root_collator();
}

fn root_collator() -> Option<Collator> {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Tertiary);
    match Collator::try_new(&Default::default(), options) {
        Ok(collator) => Some(collator),
        Err(e) => {
            tracing::warn!(error = %e, "collation data unavailable, names sort by code point");
            None
        }
    }
}

/// Locale-aware name ordering (CLDR root collation, tertiary strength).
///
/// Accents and case are secondary to the base letters ("Éclair" sorts with
/// the e's); on a tie lowercase comes before uppercase ("widget" <
/// "Widget"). Only identical names compare equal, so a stable sort keeps
/// store order for them.
pub fn collate(a: &str, b: &str) -> Ordering {
    COLLATOR
        .with(|collator| match collator {
            Some(collator) => collator.compare(a, b),
            None => Ordering::Equal,
        })
        .then_with(|| a.cmp(b))
}
