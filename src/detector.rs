use std::path::Path;

use crate::models::SourceKind;

/// Detect the source kind of a file from its extension. Unrecognized files yield `None`.
pub fn detect_source_kind(path: &Path) -> Option<SourceKind> {
    let ext = path.extension()?.to_str()?;

    match ext {
        "html" => Some(SourceKind::Markup),
        "css" => Some(SourceKind::Stylesheet),
        "js" => Some(SourceKind::Script),
        "yml" | "yaml" => Some(SourceKind::Config),
        "md" => Some(SourceKind::Doc),
        _ => None,
    }
}
