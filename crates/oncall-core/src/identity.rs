use std::collections::BTreeMap;

use crate::ids::SlackUserId;

/// Configuration keys carrying a contact → Slack user mapping start with this.
pub const CONTACT_KEY_PREFIX: &str = "SSM_";

/// Contact name (lowercased) to Slack user id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentityMap {
    entries: BTreeMap<String, SlackUserId>,
}

impl IdentityMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the map from `SSM_<NAME>=<slack user id>` pairs, skipping
    /// every other key. `SSM_Alice` and `SSM_ALICE` both map `alice`; when
    /// keys collide like that, the lexicographically smallest raw key wins
    /// (`SSM_ALICE` over `SSM_Alice`), whatever order the pairs arrive in.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let prefixed: BTreeMap<String, SlackUserId> = vars
            .into_iter()
            .filter_map(|(key, value)| {
                let name = key.as_ref().strip_prefix(CONTACT_KEY_PREFIX)?;
                (!name.is_empty())
                    .then(|| (name.to_string(), SlackUserId::new(value.as_ref())))
            })
            .collect();

        let mut map = Self::new();
        for (name, user_id) in prefixed {
            map.entries.entry(name.to_lowercase()).or_insert(user_id);
        }
        map
    }

    pub fn insert(&mut self, contact_name: &str, user_id: SlackUserId) {
        self.entries.insert(contact_name.to_lowercase(), user_id);
    }

    pub fn lookup(&self, contact_name: &str) -> Option<&SlackUserId> {
        self.entries.get(&contact_name.to_lowercase())
    }

    /// Every configured user, in contact-name order.
    pub fn user_ids(&self) -> Vec<SlackUserId> {
        self.entries.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
