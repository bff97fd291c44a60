//! Resource descriptors.
//!
//! A [`ModelDescriptor`] is everything the generic client framework needs
//! to know about a resource: where it lives, which mixins it uses, which
//! attributes are references, which roles it offers and how list views
//! render it. It is plain data built once from configuration.

use crate::config::GrcConfig;
use crate::tree_view::{
    base_attr_list, template_path, AttrColumn, SubTreeViewOptions, TreeViewOptions,
};
use crate::{Mixins, ProgramRole, ProgramStatus, RestEndpoints};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// How an attribute of a model is materialised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AttributeKind {
    /// A single [`Stub`](crate::Stub) reference.
    #[serde(rename = "Stub")]
    Stub,
    /// A list of [`Stub`](crate::Stub) references.
    #[serde(rename = "Stub.List")]
    StubList,
}

/// Static description of a client-side resource.
///
/// Serializes with the key names the client framework reads
/// (`findAll`, `isRoleable`, `programRoles`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelDescriptor {
    pub model_name: String,
    pub root_object: String,
    pub root_collection: String,
    pub category: String,
    #[serde(flatten)]
    pub endpoints: RestEndpoints,
    pub mixins: Mixins,
    pub is_custom_attributable: bool,
    #[serde(rename = "isRoleable")]
    pub is_roleable: bool,
    pub attributes: BTreeMap<String, AttributeKind>,
    /// Roles that can be bound on this resource.
    #[serde(rename = "programRoles")]
    pub roles: Vec<String>,
    /// Order in which role columns are displayed.
    #[serde(rename = "orderOfRoles")]
    pub order_of_roles: Vec<String>,
    pub tree_view_options: TreeViewOptions,
    pub sub_tree_view_options: SubTreeViewOptions,
    #[serde(serialize_with = "serialize_links")]
    pub links_to: Vec<String>,
    pub defaults: BTreeMap<String, String>,
    pub statuses: Vec<String>,
}

/// Object types a Program can be mapped to.
pub const PROGRAM_LINKS: [&str; 10] = [
    "System",
    "Process",
    "Facility",
    "OrgGroup",
    "Vendor",
    "Project",
    "DataAsset",
    "AccessGroup",
    "Product",
    "Market",
];

impl ModelDescriptor {
    /// Builds the Program descriptor.
    ///
    /// # Example
    ///
    /// ```
    /// use grc_models::config::GrcConfig;
    /// use grc_models::{Mixins, ModelDescriptor};
    ///
    /// let descriptor = ModelDescriptor::program(&GrcConfig::default());
    /// assert_eq!(descriptor.root_collection, "programs");
    /// assert_eq!(descriptor.endpoints.create.to_string(), "POST /api/programs");
    /// assert!(descriptor.mixins.contains(Mixins::ACCESS_CONTROL_LIST));
    /// assert_eq!(descriptor.order_of_roles[0], "Program Managers");
    /// ```
    #[must_use]
    pub fn program(config: &GrcConfig) -> Self {
        let mustache = &config.templates.mustache_path;
        let role_names: Vec<String> = ProgramRole::ALL
            .iter()
            .map(|r| r.name().to_string())
            .collect();

        let mut attr_list = base_attr_list();
        attr_list.extend([
            AttrColumn::new("Reference URL", "reference_url"),
            AttrColumn::new("Effective Date", "start_date"),
            AttrColumn::new("Last Deprecated Date", "end_date"),
            AttrColumn::new("Description", "description").unsortable(),
            AttrColumn::new("Notes", "notes").unsortable(),
        ]);

        Self {
            model_name: "CMS.Models.Program".to_string(),
            root_object: "program".to_string(),
            root_collection: "programs".to_string(),
            category: "programs".to_string(),
            endpoints: RestEndpoints::for_collection(&config.api.prefix, "programs"),
            mixins: Mixins::UNIQUE_TITLE
                | Mixins::CA_UPDATE
                | Mixins::TIMEBOXED
                | Mixins::ACCESS_CONTROL_LIST
                | Mixins::BASE_NOTIFICATIONS,
            is_custom_attributable: true,
            is_roleable: true,
            attributes: BTreeMap::from([
                ("context".to_string(), AttributeKind::Stub),
                ("modified_by".to_string(), AttributeKind::Stub),
                ("audits".to_string(), AttributeKind::StubList),
            ]),
            roles: role_names.clone(),
            order_of_roles: role_names,
            tree_view_options: TreeViewOptions {
                attr_view: template_path(mustache, "programs/tree-item-attr.mustache"),
                attr_list,
                add_item_view: template_path(mustache, "base_objects/tree_add_item.mustache"),
                display_attr_names: vec![
                    "title".to_string(),
                    "status".to_string(),
                    "updated_at".to_string(),
                    ProgramRole::Managers.name().to_string(),
                ],
            },
            sub_tree_view_options: SubTreeViewOptions {
                default_filter: vec!["Standard".to_string()],
            },
            links_to: PROGRAM_LINKS.iter().map(|s| s.to_string()).collect(),
            defaults: BTreeMap::from([(
                "status".to_string(),
                ProgramStatus::default().as_str().to_string(),
            )]),
            statuses: ProgramStatus::ALL
                .iter()
                .map(|s| s.as_str().to_string())
                .collect(),
        }
    }

    /// Returns `true` if the model may be mapped to `object_type`.
    #[must_use]
    pub fn links_to(&self, object_type: &str) -> bool {
        self.links_to.iter().any(|t| t == object_type)
    }

    /// Returns `true` if the model offers `role_name`.
    #[must_use]
    pub fn has_role(&self, role_name: &str) -> bool {
        self.roles.iter().any(|r| r == role_name)
    }

    /// Renders the descriptor as the JSON object the client consumes.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

#[derive(Serialize)]
struct Empty {}

fn serialize_links<S: Serializer>(links: &[String], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_map(links.iter().map(|link| (link, Empty {})))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiConfig, TemplatesConfig};

    fn descriptor() -> ModelDescriptor {
        ModelDescriptor::program(&GrcConfig::default())
    }

    #[test]
    fn endpoints_follow_api_prefix() {
        let config = GrcConfig {
            api: ApiConfig {
                prefix: "/v2/api/".to_string(),
            },
            ..GrcConfig::default()
        };
        let descriptor = ModelDescriptor::program(&config);
        assert_eq!(descriptor.endpoints.find_all.to_string(), "/v2/api/programs");
        assert_eq!(
            descriptor.endpoints.update.to_string(),
            "PUT /v2/api/programs/{id}"
        );
    }

    #[test]
    fn templates_follow_mustache_path() {
        let config = GrcConfig {
            templates: TemplatesConfig {
                mustache_path: "/assets/mustache".to_string(),
            },
            ..GrcConfig::default()
        };
        let options = ModelDescriptor::program(&config).tree_view_options;
        assert_eq!(
            options.attr_view,
            "/assets/mustache/programs/tree-item-attr.mustache"
        );
        assert_eq!(
            options.add_item_view,
            "/assets/mustache/base_objects/tree_add_item.mustache"
        );
    }

    #[test]
    fn program_columns_extend_base() {
        let options = descriptor().tree_view_options;
        let base = base_attr_list();
        assert_eq!(options.attr_list.len(), base.len() + 5);
        assert_eq!(&options.attr_list[..base.len()], base.as_slice());
        assert!(options.is_sortable("start_date"));
        assert!(!options.is_sortable("description"));
        assert!(!options.is_sortable("notes"));
        assert_eq!(
            options.column("end_date").map(|c| c.attr_title.as_str()),
            Some("Last Deprecated Date")
        );
    }

    #[test]
    fn roles_and_order_agree() {
        let descriptor = descriptor();
        assert_eq!(descriptor.roles, descriptor.order_of_roles);
        assert!(descriptor.has_role("Program Readers"));
        assert!(!descriptor.has_role("Auditors"));
        assert_eq!(
            descriptor.tree_view_options.display_attr_names,
            vec!["title", "status", "updated_at", "Program Managers"]
        );
    }

    #[test]
    fn statuses_and_defaults() {
        let descriptor = descriptor();
        assert_eq!(descriptor.statuses, vec!["Draft", "Deprecated", "Active"]);
        assert_eq!(descriptor.defaults.get("status").map(String::as_str), Some("Draft"));
    }

    #[test]
    fn links() {
        let descriptor = descriptor();
        assert!(descriptor.links_to("Facility"));
        assert!(descriptor.links_to("Market"));
        assert!(!descriptor.links_to("Program"));
    }

    #[test]
    fn json_uses_client_keys() {
        let json = descriptor().to_json().expect("serialize");

        assert_eq!(json["root_object"], "program");
        assert_eq!(json["findOne"], "/api/programs/{id}");
        assert_eq!(json["destroy"], "DELETE /api/programs/{id}");
        assert_eq!(json["isRoleable"], true);
        assert_eq!(json["is_custom_attributable"], true);
        assert_eq!(
            json["mixins"],
            serde_json::json!([
                "unique_title",
                "ca_update",
                "timeboxed",
                "accessControlList",
                "base-notifications"
            ])
        );
        assert_eq!(json["attributes"]["audits"], "Stub.List");
        assert_eq!(json["attributes"]["context"], "Stub");
        assert_eq!(json["links_to"]["Vendor"], serde_json::json!({}));
        assert_eq!(json["sub_tree_view_options"]["default_filter"][0], "Standard");
        assert_eq!(json["programRoles"][2], "Program Readers");
    }
}
