//! Merging fresh live values into the section store.

use peekfetch_models::{LiveValueProvider, Section};
use tracing::trace;

/// Overwrites every live field of every live section with a fresh value.
///
/// Non-live fields, field order and tree sections are left untouched, so
/// line counts and therefore the scroll position stay valid. Returns the
/// number of fields written.
pub fn merge_live<L>(sections: &mut [Section], provider: &mut L) -> usize
where
    L: LiveValueProvider + ?Sized,
{
    let mut written = 0;

    for section in sections.iter_mut().filter(|s| s.live) {
        let kind = section.kind;
        let Some(fields) = section.fields_mut() else {
            continue;
        };

        let keys = fields.live_keys();
        if keys.is_empty() {
            continue;
        }

        let values = provider.live_values(kind, &keys);
        for (key, value) in keys.iter().zip(values) {
            if fields.set(key, value) {
                written += 1;
            }
        }
    }

    trace!(written, "Merged live values");
    written
}
