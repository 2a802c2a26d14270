use std::hash::{BuildHasher, Hash, Hasher};

use ahash::RandomState as AHashRandomState;
use serde_json::{Map, Value};

use super::field::{lookup, text_of};

/// Identity of a group: window start plus the group-by and unique field values
/// of the record, in configuration order. A slot is `None` when the record does
/// not carry the field, so presence is part of the identity.
#[derive(Clone, Debug, Eq)]
pub struct GroupKey {
    // Precomputed hash; equality is still defined by the key fields
    pub(crate) prehash: u64,
    pub(crate) window: i64,
    pub(crate) groups: Vec<Option<String>>,
    pub(crate) uniques: Vec<Option<String>>,
}

impl PartialEq for GroupKey {
    fn eq(&self, other: &Self) -> bool {
        self.window == other.window && self.groups == other.groups && self.uniques == other.uniques
    }
}

impl Hash for GroupKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.prehash.hash(state);
    }
}

impl GroupKey {
    pub fn from_record(
        window: i64,
        group_by: &[String],
        unique: &[String],
        record: &Map<String, Value>,
    ) -> Self {
        let groups = Self::slots(group_by, record);
        let uniques = Self::slots(unique, record);
        let prehash = Self::compute_prehash(window, &groups, &uniques);
        Self {
            prehash,
            window,
            groups,
            uniques,
        }
    }

    fn slots(fields: &[String], record: &Map<String, Value>) -> Vec<Option<String>> {
        fields
            .iter()
            .map(|name| lookup(record, name).map(text_of))
            .collect()
    }

    #[inline]
    fn compute_prehash(window: i64, groups: &[Option<String>], uniques: &[Option<String>]) -> u64 {
        let mut hasher = AHashRandomState::with_seeds(0, 0, 0, 0).build_hasher();
        window.hash(&mut hasher);
        groups.hash(&mut hasher);
        uniques.hash(&mut hasher);
        hasher.finish()
    }

    /// Present values paired with their field names: group-by fields first,
    /// then unique fields. A name configured more than once is yielded once.
    pub fn tags<'a>(
        &'a self,
        group_by: &'a [String],
        unique: &'a [String],
    ) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        let groups = group_by.iter().zip(self.groups.iter());
        let uniques = unique.iter().zip(self.uniques.iter());
        let mut seen: Vec<&'a str> = Vec::new();
        groups
            .chain(uniques)
            .filter(move |&(name, _)| {
                if seen.contains(&name.as_str()) {
                    return false;
                }
                seen.push(name.as_str());
                true
            })
            .filter_map(|(name, value)| value.as_deref().map(|v| (name.as_str(), v)))
    }

    pub fn window(&self) -> i64 {
        self.window
    }
}
