//! Content cleaning applied to every attribute tree before it is
//! serialized.

use bson::{Bson, Document};

/// Keys pruned from non-raw output. `$ID` values are volatile internal
/// identifiers that change on every save without carrying model meaning.
const PRUNED_KEYS: &[&str] = &["$ID"];

/// Return the tree to serialize: untouched when `raw`, otherwise with
/// the pruned keys removed at every nesting level.
pub fn clean_attributes(attributes: &Document, raw: bool) -> Document {
    if raw {
        return attributes.clone();
    }
    strip_document(attributes)
}

fn strip_document(doc: &Document) -> Document {
    let mut out = Document::new();
    for (key, value) in doc {
        if PRUNED_KEYS.contains(&key.as_str()) {
            continue;
        }
        out.insert(key.clone(), strip_value(value));
    }
    out
}

fn strip_value(value: &Bson) -> Bson {
    match value {
        Bson::Document(doc) => Bson::Document(strip_document(doc)),
        Bson::Array(items) => Bson::Array(items.iter().map(strip_value).collect()),
        other => other.clone(),
    }
}
