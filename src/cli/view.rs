//! Window view model and its text/JSON renderings

use serde::Serialize;

use crate::domain::clipping::Clipping;

pub const WINDOW_TITLE: &str = "Clipmaster 9000";
pub const COPY_FROM_CLIPBOARD_ID: &str = "copy-from-clipboard";
pub const COPY_FROM_CLIPBOARD_LABEL: &str = "Copy from Clipboard";
pub const LIST_ITEM_CLASS: &str = "clippings-list-item";
pub const CLIPPING_TEXT_CLASS: &str = "clipping-text";
pub const REMOVE_CLIPPING_CLASS: &str = "remove-clipping";
pub const COPY_CLIPPING_CLASS: &str = "copy-clipping";

/// Max characters of clipping text shown per list line
const PREVIEW_CHARS: usize = 60;

/// Snapshot of everything the window shows
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowView {
    pub title: &'static str,
    pub dev_tools_open: bool,
    pub copy_from_clipboard: ButtonView,
    pub clippings: Vec<ClippingItemView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ButtonView {
    pub id: &'static str,
    pub label: &'static str,
}

/// One `.clippings-list-item`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClippingItemView {
    pub class: &'static str,
    pub position: usize,
    pub id: u64,
    pub text: String,
    pub text_class: &'static str,
    pub actions: [&'static str; 2],
    #[serde(skip)]
    preview: String,
}

impl ClippingItemView {
    fn new(position: usize, clipping: &Clipping) -> Self {
        Self {
            class: LIST_ITEM_CLASS,
            position,
            id: clipping.id().value(),
            text: clipping.text().to_string(),
            text_class: CLIPPING_TEXT_CLASS,
            actions: [COPY_CLIPPING_CLASS, REMOVE_CLIPPING_CLASS],
            preview: clipping.preview(PREVIEW_CHARS),
        }
    }
}

impl WindowView {
    /// Build the view for the given clippings, in display order
    pub fn build(clippings: &[Clipping], dev_tools_open: bool) -> Self {
        Self {
            title: WINDOW_TITLE,
            dev_tools_open,
            copy_from_clipboard: ButtonView {
                id: COPY_FROM_CLIPBOARD_ID,
                label: COPY_FROM_CLIPBOARD_LABEL,
            },
            clippings: clippings
                .iter()
                .enumerate()
                .map(|(i, c)| ClippingItemView::new(i + 1, c))
                .collect(),
        }
    }

    /// Number of `.clippings-list-item` elements
    pub fn item_count(&self) -> usize {
        self.clippings.len()
    }

    /// Text of the first `.clipping-text`, if any
    pub fn first_clipping_text(&self) -> Option<&str> {
        self.clippings.first().map(|item| item.text.as_str())
    }

    /// Plain-text rendering of the window
    pub fn render_text(&self) -> String {
        let mut lines = vec![
            format!("=== {} ===", self.title),
            format!("[ {} ]", self.copy_from_clipboard.label),
        ];

        if self.clippings.is_empty() {
            lines.push("  (no clippings)".to_string());
        }

        for item in &self.clippings {
            lines.push(format!(
                "  {:>2}. {}  [copy] [remove]",
                item.position, item.preview
            ));
        }

        lines.join("\n")
    }

    /// Pretty JSON rendering of the window
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clipping::ClippingStore;

    fn store_with(texts: &[&str]) -> ClippingStore {
        let mut store = ClippingStore::new();
        for text in texts {
            store.add_from_clipboard(text);
        }
        store
    }

    #[test]
    fn empty_window() {
        let view = WindowView::build(&[], false);
        assert_eq!(view.title, "Clipmaster 9000");
        assert!(!view.dev_tools_open);
        assert_eq!(view.copy_from_clipboard.id, "copy-from-clipboard");
        assert_eq!(view.copy_from_clipboard.label, "Copy from Clipboard");
        assert_eq!(view.item_count(), 0);
        assert!(view.render_text().contains("(no clippings)"));
    }

    #[test]
    fn items_follow_store_order() {
        let store = store_with(&["first", "vegan ham"]);
        let view = WindowView::build(store.list(), false);
        assert_eq!(view.item_count(), 2);
        assert_eq!(view.first_clipping_text(), Some("vegan ham"));
        assert_eq!(view.clippings[0].position, 1);
        assert_eq!(view.clippings[1].text, "first");
    }

    #[test]
    fn text_rendering_lists_items() {
        let store = store_with(&["vegan ham"]);
        let text = WindowView::build(store.list(), false).render_text();
        assert!(text.starts_with("=== Clipmaster 9000 ==="));
        assert!(text.contains("[ Copy from Clipboard ]"));
        assert!(text.contains(" 1. vegan ham  [copy] [remove]"));
        assert!(!text.contains("(no clippings)"));
    }

    #[test]
    fn text_rendering_uses_preview() {
        let store = store_with(&["line one\nline two"]);
        let text = WindowView::build(store.list(), false).render_text();
        assert!(text.contains("line one↵line two"));
    }

    #[test]
    fn json_carries_selectors_and_full_text() {
        let store = store_with(&["a\nb"]);
        let json = WindowView::build(store.list(), true).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["title"], "Clipmaster 9000");
        assert_eq!(value["devToolsOpen"], true);
        assert_eq!(value["copyFromClipboard"]["id"], "copy-from-clipboard");
        assert_eq!(value["clippings"][0]["class"], "clippings-list-item");
        assert_eq!(value["clippings"][0]["text"], "a\nb");
        assert_eq!(value["clippings"][0]["textClass"], "clipping-text");
        assert_eq!(value["clippings"][0]["actions"][0], "copy-clipping");
        assert_eq!(value["clippings"][0]["actions"][1], "remove-clipping");
        assert!(value["clippings"][0].get("preview").is_none());
    }
}
