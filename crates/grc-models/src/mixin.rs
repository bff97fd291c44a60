//! Model mixins.
//!
//! A mixin is a shared behavioural trait a model opts into. Here they are
//! a typed flag set: the model layer checks membership instead of
//! injecting methods at runtime.
//!
//! | Mixin | Name | Effect |
//! |-------|------|--------|
//! | [`UNIQUE_TITLE`](Mixins::UNIQUE_TITLE) | `unique_title` | title must be unique per type |
//! | [`CA_UPDATE`](Mixins::CA_UPDATE) | `ca_update` | custom attribute values are saved with the object |
//! | [`TIMEBOXED`](Mixins::TIMEBOXED) | `timeboxed` | start/end dates, end not before start |
//! | [`ACCESS_CONTROL_LIST`](Mixins::ACCESS_CONTROL_LIST) | `accessControlList` | carries role bindings |
//! | [`BASE_NOTIFICATIONS`](Mixins::BASE_NOTIFICATIONS) | `base-notifications` | emits change notifications |

use crate::ModelError;
use bitflags::bitflags;
use serde::{Serialize, Serializer};

bitflags! {
    /// Set of mixins enabled on a model.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Mixins: u8 {
        const UNIQUE_TITLE        = 0b0000_0001;
        const CA_UPDATE           = 0b0000_0010;
        const TIMEBOXED           = 0b0000_0100;
        const ACCESS_CONTROL_LIST = 0b0000_1000;
        const BASE_NOTIFICATIONS  = 0b0001_0000;
    }
}

const NAMES: [(Mixins, &str); 5] = [
    (Mixins::UNIQUE_TITLE, "unique_title"),
    (Mixins::CA_UPDATE, "ca_update"),
    (Mixins::TIMEBOXED, "timeboxed"),
    (Mixins::ACCESS_CONTROL_LIST, "accessControlList"),
    (Mixins::BASE_NOTIFICATIONS, "base-notifications"),
];

impl Mixins {
    /// Returns the client-side names of the set mixins, in declaration order.
    ///
    /// # Example
    ///
    /// ```
    /// use grc_models::Mixins;
    ///
    /// let mixins = Mixins::TIMEBOXED | Mixins::ACCESS_CONTROL_LIST;
    /// assert_eq!(mixins.names(), vec!["timeboxed", "accessControlList"]);
    /// ```
    #[must_use]
    pub fn names(self) -> Vec<&'static str> {
        NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect()
    }

    /// Parses a single mixin by its client-side name (exact match).
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        NAMES
            .iter()
            .find(|(_, known)| *known == name)
            .map(|(flag, _)| *flag)
    }

    /// Parses a list of names into a combined set.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownMixin`] for the first unknown name.
    ///
    /// # Example
    ///
    /// ```
    /// use grc_models::Mixins;
    ///
    /// let mixins = Mixins::from_names(&["unique_title", "ca_update"]).unwrap();
    /// assert_eq!(mixins, Mixins::UNIQUE_TITLE | Mixins::CA_UPDATE);
    /// assert!(Mixins::from_names(&["ownable"]).is_err());
    /// ```
    pub fn from_names(names: &[&str]) -> Result<Self, ModelError> {
        names.iter().try_fold(Self::empty(), |acc, name| {
            Self::parse(name)
                .map(|flag| acc | flag)
                .ok_or_else(|| ModelError::UnknownMixin((*name).to_string()))
        })
    }
}

impl std::fmt::Display for Mixins {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.names().join(", "))
    }
}

impl Serialize for Mixins {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.names())
    }
}
