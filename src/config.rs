use crate::common::Int;
use std::collections::{BTreeMap, HashMap};

pub const DEFAULT_MIN: Int = 1;
pub const DEFAULT_MAX: Int = 20;
pub const DEFAULT_ROLL: &str = "1d20";
pub const DEFAULT_COUNT: Int = 6;
pub const DEFAULT_MAX_ROLLS: usize = 1000;

#[derive(Debug, Clone, PartialEq)]
pub struct RollerOptions {
    /// The lowest face of every numbered die.
    pub min_roll: Int,
    /// The highest face of a bare single roll.
    pub max_roll: Int,
    /// Rolled when no notation is given.
    pub default_roll: String,
    /// What `count` matches when its first argument is a roll.
    pub default_count: Int,
    /// The most dice a single evaluation may roll, if limited.
    pub max_rolls: Option<usize>,
}

impl Default for RollerOptions {
    fn default() -> Self {
        Self {
            min_roll: DEFAULT_MIN,
            max_roll: DEFAULT_MAX,
            default_roll: DEFAULT_ROLL.to_owned(),
            default_count: DEFAULT_COUNT,
            max_rolls: Some(DEFAULT_MAX_ROLLS),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MapEntry {
    Notation(String),
    Table(RollMap),
}

impl From<&str> for MapEntry {
    fn from(s: &str) -> Self {
        Self::Notation(s.to_owned())
    }
}

impl From<String> for MapEntry {
    fn from(s: String) -> Self {
        Self::Notation(s)
    }
}

impl From<RollMap> for MapEntry {
    fn from(map: RollMap) -> Self {
        Self::Table(map)
    }
}

/// Named notations, nested by the segments of a dotted path such as
/// `longsword.dmg.2h`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RollMap(BTreeMap<String, MapEntry>);

impl RollMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, entry: impl Into<MapEntry>) -> Self {
        self.insert(name, entry);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, entry: impl Into<MapEntry>) {
        self.0.insert(name.into(), entry.into());
    }

    pub fn get(&self, name: &str) -> Option<&MapEntry> {
        self.0.get(name)
    }

    /// Follows `path` segment by segment, returning the notation it ends on.
    pub fn lookup<'a, I>(&self, path: I) -> Option<&str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut path = path.into_iter();
        let mut entry = self.get(path.next()?)?;
        for segment in path {
            entry = match entry {
                MapEntry::Table(table) => table.get(segment)?,
                MapEntry::Notation(_) => return None,
            };
        }
        match entry {
            MapEntry::Notation(notation) => Some(notation),
            MapEntry::Table(_) => None,
        }
    }
}

impl<K: Into<String>, V: Into<MapEntry>> FromIterator<(K, V)> for RollMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Values substituted for `$name` references.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Variables(HashMap<String, Int>);

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: Int) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: Int) {
        self.0.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<Int> {
        self.0.get(name).copied()
    }
}

impl<K: Into<String>> FromIterator<(K, Int)> for Variables {
    fn from_iter<T: IntoIterator<Item = (K, Int)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RollerConfig {
    pub map: RollMap,
    pub options: RollerOptions,
    pub variables: Variables,
}

impl RollerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn map(mut self, map: RollMap) -> Self {
        self.map = map;
        self
    }

    pub fn options(mut self, options: RollerOptions) -> Self {
        self.options = options;
        self
    }

    pub fn variables(mut self, variables: Variables) -> Self {
        self.variables = variables;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fighter() -> RollMap {
        RollMap::new().with("initiative", "1d20 + $dexMod").with(
            "longsword",
            RollMap::new()
                .with("hit", "1d20 + $strMod + $proficiency")
                .with(
                    "dmg",
                    [("1h", "1d8 + $strMod"), ("2h", "1d10 + $strMod")]
                        .into_iter()
                        .collect::<RollMap>(),
                ),
        )
    }

    #[test]
    fn test_lookup() {
        let map = fighter();
        assert_eq!(map.lookup(["initiative"]), Some("1d20 + $dexMod"));
        assert_eq!(
            map.lookup("longsword.dmg.2h".split('.')),
            Some("1d10 + $strMod")
        );
        assert_eq!(map.lookup("longsword.dmg".split('.')), None);
        assert_eq!(map.lookup("initiative.bonus".split('.')), None);
        assert_eq!(map.lookup("longsword.parry".split('.')), None);
        assert_eq!(map.lookup(std::iter::empty()), None);
    }

    #[test]
    fn test_variables() {
        let vars: Variables = [("dex", 3), ("str", -1)].into_iter().collect();
        assert_eq!(vars.get("dex"), Some(3));
        assert_eq!(vars.get("str"), Some(-1));
        assert_eq!(vars.get("de"), None);
        assert_eq!(Variables::new().with("x", 1).get("x"), Some(1));
    }

    #[test]
    fn test_default_options() {
        let options = RollerOptions::default();
        assert_eq!(options.min_roll, 1);
        assert_eq!(options.max_roll, 20);
        assert_eq!(options.default_roll, "1d20");
        assert_eq!(options.default_count, 6);
        assert_eq!(options.max_rolls, Some(1000));
    }
}
