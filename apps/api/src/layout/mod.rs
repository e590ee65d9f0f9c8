// Report layout: font metrics, word wrapping and the page-breaking cursor.
// Pure computation; callers on the async path run it inside tokio::task::spawn_blocking.

pub mod cursor;
pub mod font_metrics;

pub use cursor::LayoutCursor;
pub use font_metrics::{default_page_config, PageConfig, ReportFont};
