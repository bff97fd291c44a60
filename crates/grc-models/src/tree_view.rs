//! Tree-view display configuration.
//!
//! Describes which columns a list view shows and which templates render
//! rows. Template locations are resolved against the configured
//! `mustache_path` instead of a global.

use serde::{Deserialize, Serialize};

/// One selectable column of a tree view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttrColumn {
    pub attr_title: String,
    pub attr_name: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub disable_sorting: bool,
}

impl AttrColumn {
    #[must_use]
    pub fn new(attr_title: impl Into<String>, attr_name: impl Into<String>) -> Self {
        Self {
            attr_title: attr_title.into(),
            attr_name: attr_name.into(),
            disable_sorting: false,
        }
    }

    /// Marks the column as not sortable (long free-text fields).
    #[must_use]
    pub fn unsortable(mut self) -> Self {
        self.disable_sorting = true;
        self
    }
}

/// Columns every cacheable model offers before its own.
#[must_use]
pub fn base_attr_list() -> Vec<AttrColumn> {
    vec![
        AttrColumn::new("Title", "title"),
        AttrColumn::new("Status", "status"),
        AttrColumn::new("Code", "slug"),
        AttrColumn::new("Created Date", "created_at"),
        AttrColumn::new("Last Updated Date", "updated_at"),
        AttrColumn::new("Last Updated By", "modified_by"),
    ]
}

/// Joins a template path below the mustache root.
///
/// ```
/// use grc_models::tree_view::template_path;
///
/// assert_eq!(
///     template_path("/static/mustache/", "programs/tree-item-attr.mustache"),
///     "/static/mustache/programs/tree-item-attr.mustache"
/// );
/// ```
#[must_use]
pub fn template_path(mustache_path: &str, relative: &str) -> String {
    format!(
        "{}/{}",
        mustache_path.trim_end_matches('/'),
        relative.trim_start_matches('/')
    )
}

/// Tree-view configuration of a model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeViewOptions {
    /// Template rendering a row's attribute cells.
    pub attr_view: String,
    /// Every column the user can choose from.
    pub attr_list: Vec<AttrColumn>,
    /// Template rendering the "add item" row.
    pub add_item_view: String,
    /// Columns shown when the user has not chosen any.
    pub display_attr_names: Vec<String>,
}

impl TreeViewOptions {
    /// Looks up a column by attribute name.
    #[must_use]
    pub fn column(&self, attr_name: &str) -> Option<&AttrColumn> {
        self.attr_list.iter().find(|c| c.attr_name == attr_name)
    }

    /// Returns `true` if the column may be sorted on.
    ///
    /// Columns that are not in `attr_list` (role columns such as
    /// "Program Managers") are not sortable.
    #[must_use]
    pub fn is_sortable(&self, attr_name: &str) -> bool {
        self.column(attr_name).is_some_and(|c| !c.disable_sorting)
    }
}

/// Configuration of the tree nested under an object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubTreeViewOptions {
    /// Object types shown by default.
    pub default_filter: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> TreeViewOptions {
        let mut attr_list = base_attr_list();
        attr_list.push(AttrColumn::new("Notes", "notes").unsortable());
        TreeViewOptions {
            attr_view: template_path("/m", "x.mustache"),
            attr_list,
            add_item_view: template_path("/m", "y.mustache"),
            display_attr_names: vec!["title".into()],
        }
    }

    #[test]
    fn base_columns_start_with_title() {
        let columns = base_attr_list();
        assert_eq!(columns[0].attr_name, "title");
        assert!(columns.iter().all(|c| !c.disable_sorting));
    }

    #[test]
    fn template_path_normalises_slashes() {
        assert_eq!(template_path("/m", "/a.mustache"), "/m/a.mustache");
        assert_eq!(template_path("/m//", "a.mustache"), "/m/a.mustache");
    }

    #[test]
    fn sortability() {
        let options = options();
        assert!(options.is_sortable("title"));
        assert!(!options.is_sortable("notes"));
        assert!(!options.is_sortable("Program Managers"));
    }

    #[test]
    fn disable_sorting_omitted_when_false() {
        let json = serde_json::to_value(AttrColumn::new("Title", "title")).expect("serialize");
        assert!(json.get("disable_sorting").is_none());

        let json = serde_json::to_value(AttrColumn::new("Notes", "notes").unsortable())
            .expect("serialize");
        assert_eq!(json["disable_sorting"], true);
    }
}
