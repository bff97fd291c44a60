//! Access control lists.
//!
//! An access control list binds people to roles on a single object.
//! Entries only make sense inside the object that owns them: the same
//! `(person_id, ac_role_id)` pair on two programs are two unrelated
//! grants.

use grc_types::{PersonId, RoleId};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// One person-to-role binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccessControlEntry {
    pub person_id: PersonId,
    pub ac_role_id: RoleId,
}

impl AccessControlEntry {
    #[must_use]
    pub fn new(person_id: PersonId, ac_role_id: RoleId) -> Self {
        Self {
            person_id,
            ac_role_id,
        }
    }

    /// Returns `true` if this entry binds `person` to `role`.
    #[must_use]
    pub fn grants(&self, person: PersonId, role: RoleId) -> bool {
        self.person_id == person && self.ac_role_id == role
    }
}

/// People added to and removed from a role by
/// [`AccessControlList::set_role_people`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AclChange {
    pub added: Vec<PersonId>,
    pub removed: Vec<PersonId>,
}

impl AclChange {
    /// Returns `true` if nothing changed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Ordered list of role bindings owned by one object.
///
/// Insertion order is preserved; it is the order the server returns and
/// the order the UI lists people in.
///
/// # Lenient Decoding
///
/// An entry with a missing, null or non-numeric `person_id` or
/// `ac_role_id` can never match a role check, so it is dropped with a
/// warning instead of failing the whole payload.
///
/// # Example
///
/// ```
/// use grc_auth::AccessControlList;
/// use grc_types::{PersonId, RoleId};
///
/// let managers = RoleId::new(42);
/// let mut acl = AccessControlList::new();
///
/// assert!(acl.assign(PersonId::new(5), managers));
/// assert!(!acl.assign(PersonId::new(5), managers)); // already bound
///
/// assert!(acl.contains(PersonId::new(5), managers));
/// assert_eq!(acl.people_with_role(managers), vec![PersonId::new(5)]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AccessControlList(Vec<AccessControlEntry>);

impl AccessControlList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn entries(&self) -> &[AccessControlEntry] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AccessControlEntry> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` if `person` holds `role` on the owning object.
    #[must_use]
    pub fn contains(&self, person: PersonId, role: RoleId) -> bool {
        self.0.iter().any(|entry| entry.grants(person, role))
    }

    /// Returns the people holding `role`, in list order, without duplicates.
    #[must_use]
    pub fn people_with_role(&self, role: RoleId) -> Vec<PersonId> {
        let mut people = Vec::new();
        for entry in self.0.iter().filter(|e| e.ac_role_id == role) {
            if !people.contains(&entry.person_id) {
                people.push(entry.person_id);
            }
        }
        people
    }

    /// Returns the roles `person` holds, in list order, without duplicates.
    #[must_use]
    pub fn roles_of(&self, person: PersonId) -> Vec<RoleId> {
        let mut roles = Vec::new();
        for entry in self.0.iter().filter(|e| e.person_id == person) {
            if !roles.contains(&entry.ac_role_id) {
                roles.push(entry.ac_role_id);
            }
        }
        roles
    }

    /// Binds `person` to `role`. Returns `false` if the binding already existed.
    pub fn assign(&mut self, person: PersonId, role: RoleId) -> bool {
        if self.contains(person, role) {
            return false;
        }
        self.0.push(AccessControlEntry::new(person, role));
        true
    }

    /// Removes every binding of `person` to `role`. Returns `true` if any existed.
    pub fn revoke(&mut self, person: PersonId, role: RoleId) -> bool {
        let before = self.0.len();
        self.0.retain(|entry| !entry.grants(person, role));
        self.0.len() != before
    }

    /// Makes exactly `people` hold `role`.
    ///
    /// An empty `people` slice leaves the list untouched: an empty cell
    /// in an import sheet means "no change", not "remove everyone".
    /// Bindings for other roles are never touched.
    ///
    /// # Example
    ///
    /// ```
    /// use grc_auth::AccessControlList;
    /// use grc_types::{PersonId, RoleId};
    ///
    /// let role = RoleId::new(42);
    /// let mut acl = AccessControlList::new();
    /// acl.assign(PersonId::new(1), role);
    /// acl.assign(PersonId::new(2), role);
    ///
    /// let change = acl.set_role_people(role, &[PersonId::new(2), PersonId::new(3)]);
    /// assert_eq!(change.added, vec![PersonId::new(3)]);
    /// assert_eq!(change.removed, vec![PersonId::new(1)]);
    /// assert_eq!(acl.people_with_role(role), vec![PersonId::new(2), PersonId::new(3)]);
    /// ```
    pub fn set_role_people(&mut self, role: RoleId, people: &[PersonId]) -> AclChange {
        if people.is_empty() {
            return AclChange::default();
        }

        let current = self.people_with_role(role);
        let mut change = AclChange::default();

        for &person in people {
            if !current.contains(&person) && !change.added.contains(&person) {
                change.added.push(person);
            }
        }
        for &person in &current {
            if !people.contains(&person) {
                change.removed.push(person);
            }
        }

        self.0
            .retain(|entry| !(entry.ac_role_id == role && change.removed.contains(&entry.person_id)));
        self.0.extend(
            change
                .added
                .iter()
                .map(|&person| AccessControlEntry::new(person, role)),
        );

        change
    }
}

/// An id field as sent by the server, which may be of the wrong type.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId<T> {
    Id(T),
    Malformed(#[allow(dead_code)] IgnoredAny),
}

impl<T> RawId<T> {
    fn valid(field: Option<Self>) -> Option<T> {
        match field {
            Some(Self::Id(id)) => Some(id),
            Some(Self::Malformed(_)) | None => None,
        }
    }
}

#[derive(Deserialize)]
struct RawEntry {
    #[serde(default)]
    person_id: Option<RawId<PersonId>>,
    #[serde(default)]
    ac_role_id: Option<RawId<RoleId>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawItem {
    Entry(RawEntry),
    Malformed(#[allow(dead_code)] IgnoredAny),
}

impl RawItem {
    fn into_entry(self, index: usize) -> Option<AccessControlEntry> {
        let entry = match self {
            Self::Entry(raw) => RawId::valid(raw.person_id)
                .zip(RawId::valid(raw.ac_role_id))
                .map(|(person_id, ac_role_id)| AccessControlEntry::new(person_id, ac_role_id)),
            Self::Malformed(_) => None,
        };
        if entry.is_none() {
            tracing::warn!(index, "access control list: skipping malformed entry");
        }
        entry
    }
}

impl<'de> Deserialize<'de> for AccessControlList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<RawItem>::deserialize(deserializer)?;
        Ok(items
            .into_iter()
            .enumerate()
            .filter_map(|(index, item)| item.into_entry(index))
            .collect())
    }
}

impl From<Vec<AccessControlEntry>> for AccessControlList {
    fn from(entries: Vec<AccessControlEntry>) -> Self {
        Self(entries)
    }
}

impl FromIterator<AccessControlEntry> for AccessControlList {
    fn from_iter<I: IntoIterator<Item = AccessControlEntry>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a AccessControlList {
    type Item = &'a AccessControlEntry;
    type IntoIter = std::slice::Iter<'a, AccessControlEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
