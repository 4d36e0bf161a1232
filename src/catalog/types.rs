//! Core catalog types: [`Stat`], [`Item`], and [`Catalog`].

/// A single named stat modifier.
///
/// Amounts are signed: negative amounts are penalties, and the dominance
/// rule treats a missing penalty as an advantage.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stat {
    name: String,
    amount: i64,
}

impl Stat {
    /// Creates a stat modifier.
    pub fn new(name: impl Into<String>, amount: i64) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }

    /// The stat name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The signed amount.
    pub fn amount(&self) -> i64 {
        self.amount
    }
}

/// One catalog entry: an item that occupies a single equipment slot.
///
/// Immutable once constructed. Stat names are unique within an item; if
/// duplicates are passed to [`Item::new`], the first occurrence wins.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    name: String,
    slot: String,
    groups: Vec<String>,
    exclusions: Vec<String>,
    stats: Vec<Stat>,
}

impl Item {
    /// Creates an item.
    ///
    /// `groups` are the labels this item belongs to; `exclusions` are
    /// group labels it forbids on any other item in the same loadout.
    pub fn new(
        name: impl Into<String>,
        slot: impl Into<String>,
        groups: &[&str],
        exclusions: &[&str],
        stats: impl IntoIterator<Item = Stat>,
    ) -> Self {
        let mut unique: Vec<Stat> = Vec::new();
        for stat in stats {
            if !unique.iter().any(|s| s.name == stat.name) {
                unique.push(stat);
            }
        }
        Self {
            name: name.into(),
            slot: slot.into(),
            groups: groups.iter().map(|s| s.to_string()).collect(),
            exclusions: exclusions.iter().map(|s| s.to_string()).collect(),
            stats: unique,
        }
    }

    /// The item name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The slot this item occupies.
    pub fn slot(&self) -> &str {
        &self.slot
    }

    /// Group labels this item belongs to.
    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    /// Group labels this item forbids elsewhere in the loadout.
    pub fn exclusions(&self) -> &[String] {
        &self.exclusions
    }

    /// The item's stat modifiers, in declaration order.
    pub fn stats(&self) -> &[Stat] {
        &self.stats
    }

    /// Looks up the amount for a stat name, if this item modifies it.
    pub fn stat(&self, name: &str) -> Option<i64> {
        self.stats
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.amount)
    }

    /// Whether this item belongs to the given group.
    pub fn in_group(&self, group: &str) -> bool {
        self.groups.iter().any(|g| g == group)
    }
}

/// An ordered collection of items for a fixed configuration.
///
/// Order matters: slot order, stat-name order, and deterministic
/// tie-breaking downstream all derive from first-seen order here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Creates a catalog from a list of items.
    pub fn from_items(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// The items, in catalog order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Consumes the catalog and returns its items.
    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All slot names in first-seen order.
    pub fn slot_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for item in &self.items {
            if !names.contains(&item.slot()) {
                names.push(item.slot());
            }
        }
        names
    }

    /// All group labels in first-seen order.
    pub fn group_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for item in &self.items {
            for group in item.groups() {
                if !names.contains(&group.as_str()) {
                    names.push(group);
                }
            }
        }
        names
    }

    /// All stat names in first-seen order.
    pub fn stat_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for item in &self.items {
            for stat in item.stats() {
                if !names.contains(&stat.name()) {
                    names.push(stat.name());
                }
            }
        }
        names
    }

    /// Removes every item occupying the given slot.
    ///
    /// Used when the character has no slot of this kind.
    pub fn remove_slot(&mut self, slot: &str) {
        self.items.retain(|item| item.slot() != slot);
    }

    /// Removes every item belonging to the given group.
    pub fn exclude_group(&mut self, group: &str) {
        self.items.retain(|item| !item.in_group(group));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Catalog {
        Catalog::from_items(vec![
            Item::new(
                "Longsword",
                "Weapon",
                &["Metal"],
                &[],
                [Stat::new("str", 5)],
            ),
            Item::new(
                "Club",
                "Weapon",
                &["Wood"],
                &[],
                [Stat::new("str", 3), Stat::new("vit", 10)],
            ),
            Item::new("Iron Band", "Ring", &["Metal"], &["Wood"], [Stat::new("str", 2)]),
            Item::new("Opal Ring", "Ring", &[], &[], [Stat::new("vit", 1)]),
        ])
    }

    // ---- Stat / Item ----

    #[test]
    fn test_stat_accessors() {
        let stat = Stat::new("dex", -3);
        assert_eq!(stat.name(), "dex");
        assert_eq!(stat.amount(), -3);
    }

    #[test]
    fn test_item_stat_lookup() {
        let item = Item::new(
            "Club",
            "Weapon",
            &[],
            &[],
            [Stat::new("str", 3), Stat::new("vit", 10)],
        );
        assert_eq!(item.stat("vit"), Some(10));
        assert_eq!(item.stat("dex"), None);
    }

    #[test]
    fn test_item_duplicate_stat_keeps_first() {
        let item = Item::new(
            "Odd",
            "Weapon",
            &[],
            &[],
            [Stat::new("str", 3), Stat::new("str", 9)],
        );
        assert_eq!(item.stats().len(), 1);
        assert_eq!(item.stat("str"), Some(3));
    }

    #[test]
    fn test_item_group_membership() {
        let item = Item::new("Iron Band", "Ring", &["Metal"], &["Wood"], [Stat::new("str", 2)]);
        assert!(item.in_group("Metal"));
        assert!(!item.in_group("Wood"));
        assert_eq!(item.exclusions(), &["Wood".to_string()]);
    }

    // ---- Catalog queries ----

    #[test]
    fn test_slot_names_first_seen_order() {
        let catalog = sample_catalog();
        assert_eq!(catalog.slot_names(), vec!["Weapon", "Ring"]);
    }

    #[test]
    fn test_group_names_first_seen_order() {
        let catalog = sample_catalog();
        assert_eq!(catalog.group_names(), vec!["Metal", "Wood"]);
    }

    #[test]
    fn test_stat_names_first_seen_order() {
        let catalog = sample_catalog();
        assert_eq!(catalog.stat_names(), vec!["str", "vit"]);
    }

    // ---- Catalog pre-selection ops ----

    #[test]
    fn test_remove_slot() {
        let mut catalog = sample_catalog();
        catalog.remove_slot("Ring");
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.slot_names(), vec!["Weapon"]);
    }

    #[test]
    fn test_exclude_group() {
        let mut catalog = sample_catalog();
        catalog.exclude_group("Metal");
        let names: Vec<&str> = catalog.items().iter().map(|i| i.name()).collect();
        assert_eq!(names, vec!["Club", "Opal Ring"]);
    }

    #[test]
    fn test_exclude_unknown_group_is_noop() {
        let mut catalog = sample_catalog();
        catalog.exclude_group("Crystal");
        assert_eq!(catalog.len(), 4);
    }
}
