//! Advanced-mode enrichment for microflow documents.

use bson::Bson;

use crate::types::model::Document;

/// Declared type tag that selects the enrichment.
pub const MICROFLOW_TYPE: &str = "Microflows$Microflow";

/// Attach a readable `Activities` summary to a microflow document.
///
/// The summary lists the microflow's object collection in model order:
/// the short activity type (the segment after the `$`), plus the caption
/// when the object carries one. The original attribute tree stays in
/// place alongside the summary.
pub fn enrich(mut document: Document) -> Document {
    let objects = match document
        .attributes
        .get_document("ObjectCollection")
        .and_then(|collection| collection.get_array("Objects"))
    {
        Ok(objects) => objects.clone(),
        Err(_) => {
            log::debug!("Microflow {} has no object collection", document.name);
            return document;
        }
    };

    let mut activities = Vec::new();
    for object in objects.iter().filter_map(Bson::as_document) {
        let kind = object.get_str("$Type").unwrap_or("Unknown");
        let short = kind.rsplit('$').next().unwrap_or(kind);

        let mut activity = bson::Document::new();
        activity.insert("Type", short);
        if let Ok(caption) = object.get_str("Caption") {
            activity.insert("Caption", caption);
        }
        activities.push(Bson::Document(activity));
    }

    log::debug!(
        "Summarized {} activities for microflow {}",
        activities.len(),
        document.name
    );
    document.attributes.insert("Activities", Bson::Array(activities));
    document
}
