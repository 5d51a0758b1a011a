/// Analysis modules — post-scan classification and report rendering.

pub mod categories;
pub mod report;

pub use categories::{category_for, classify, CategoryGroup, ExtensionCategory};
pub use report::{format_count, render_groups, summary_text};
