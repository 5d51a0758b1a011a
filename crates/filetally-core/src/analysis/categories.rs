/// Extension categorisation based on file extensions.
///
/// Groups per-extension counts into a fixed set of categories (Excel,
/// Word, PowerPoint, Images, Compressed Archives, Other).
use std::collections::BTreeMap;

/// The fixed category set, used for visual grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtensionCategory {
    Excel,
    Word,
    PowerPoint,
    Images,
    CompressedArchives,
    Other,
}

impl ExtensionCategory {
    /// Every category, in display order.
    pub const ALL: [ExtensionCategory; 6] = [
        ExtensionCategory::Excel,
        ExtensionCategory::Word,
        ExtensionCategory::PowerPoint,
        ExtensionCategory::Images,
        ExtensionCategory::CompressedArchives,
        ExtensionCategory::Other,
    ];

    /// Human-readable label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Excel => "Excel",
            Self::Word => "Word",
            Self::PowerPoint => "PowerPoint",
            Self::Images => "Images",
            Self::CompressedArchives => "Compressed Archives",
            Self::Other => "Other",
        }
    }
}

/// Categorise one extension (leading dot included, `""` for none).
///
/// Total: every input maps to exactly one category, defaulting to
/// `Other`. Case-insensitive. Zero-heap-allocation: the extension is
/// lowercased into a fixed-size stack buffer rather than a `String`;
/// anything longer than the buffer cannot match the table and is `Other`.
pub fn category_for(ext: &str) -> ExtensionCategory {
    let bytes = ext.as_bytes();
    if bytes.len() > 8 {
        return ExtensionCategory::Other;
    }

    let mut lower = [0u8; 8];
    for (dest, &src) in lower.iter_mut().zip(bytes.iter()) {
        *dest = src.to_ascii_lowercase();
    }
    let lower_str = match std::str::from_utf8(&lower[..bytes.len()]) {
        Ok(s) => s,
        Err(_) => return ExtensionCategory::Other,
    };

    match lower_str {
        ".xls" | ".xlsx" | ".xltx" => ExtensionCategory::Excel,
        ".doc" | ".docx" => ExtensionCategory::Word,
        ".ppt" | ".pptx" => ExtensionCategory::PowerPoint,
        ".jpg" | ".jpeg" | ".png" | ".gif" | ".bmp" | ".svg" | ".webp" => {
            ExtensionCategory::Images
        }
        ".zip" | ".rar" | ".7z" => ExtensionCategory::CompressedArchives,
        _ => ExtensionCategory::Other,
    }
}

/// One category and the (extension, count) pairs observed for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup {
    pub category: ExtensionCategory,
    /// Pairs in the iteration order of the input mapping; no extra sorting.
    pub pairs: Vec<(String, u64)>,
}

/// Group per-extension counts into categories.
///
/// Pure and deterministic. Categories come out in
/// [`ExtensionCategory::ALL`] order and only appear when at least one
/// observed extension maps to them.
pub fn classify(extension_counts: &BTreeMap<String, u64>) -> Vec<CategoryGroup> {
    let mut groups: Vec<CategoryGroup> = ExtensionCategory::ALL
        .iter()
        .map(|&category| CategoryGroup {
            category,
            pairs: Vec::new(),
        })
        .collect();

    for (ext, &count) in extension_counts {
        let cat = category_for(ext);
        if let Some(group) = groups.iter_mut().find(|g| g.category == cat) {
            group.pairs.push((ext.clone(), count));
        }
    }

    groups.retain(|g| !g.pairs.is_empty());
    groups
}
