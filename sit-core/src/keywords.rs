use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::RwLock;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum Keyword {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
    Today,
    Yesterday,
    Tomorrow,
}

pub struct Keywords;

impl Keywords {
    /// Returns the **global keyword registry** (input → canonical).
    ///
    /// The registry is:
    /// - **Initialized once** on first access (via [`once_cell::sync::Lazy`]).
    /// - **Thread-safe** (wrapped in [`RwLock`]): many readers or one writer.
    /// - **Lowercased**: all keys are stored lowercased for case-insensitive lookups.
    ///
    /// You normally **don't call this directly**; use [`extend`](Self::extend)
    /// to add synonyms and [`matches`](Self::matches) for checks.
    fn registry() -> &'static RwLock<HashMap<String, Keyword>> {
        static REGISTRY: Lazy<RwLock<HashMap<String, Keyword>>> = Lazy::new(|| {
            let mut m = HashMap::new();
            m.insert("monday".to_string(), Keyword::Monday);
            m.insert("tuesday".to_string(), Keyword::Tuesday);
            m.insert("wednesday".to_string(), Keyword::Wednesday);
            m.insert("thursday".to_string(), Keyword::Thursday);
            m.insert("friday".to_string(), Keyword::Friday);
            m.insert("saturday".to_string(), Keyword::Saturday);
            m.insert("sunday".to_string(), Keyword::Sunday);
            m.insert("today".to_string(), Keyword::Today);
            m.insert("yesterday".to_string(), Keyword::Yesterday);
            m.insert("tomorrow".to_string(), Keyword::Tomorrow);

            RwLock::new(m)
        });
        &REGISTRY
    }

    /// Extends the global registry with user-defined **synonyms**.
    ///
    /// Each pair is `(alias, target)`. The `target` must be a **known** keyword already
    /// in the registry (typically a canonical constant or an existing synonym that maps
    /// to a canonical). If `target` isn't known, the pair is ignored silently.
    ///
    /// All keys are normalized to **lowercase** to keep lookups case-insensitive.
    ///
    /// Typical call site: during `Config::load()`, after reading `[synonyms]`
    /// from `config.toml`:
    ///
    /// ```toml
    /// [synonyms]
    /// hoje = "today"
    /// ontem = "yesterday"
    /// seg = "monday"
    /// ```
    pub fn extend(synonyms: &[(String, String)]) {
        let mut reg = Self::registry().write().unwrap();
        for (alias, target) in synonyms {
            if let Some(&canonical) = reg.get(&target.to_ascii_lowercase()) {
                reg.insert(alias.to_ascii_lowercase(), canonical);
            }
        }
    }

    /// Returns `true` if `word` is a canonical word (eg "today").
    pub fn is_canonical(word: &str) -> bool {
        Keyword::iter().any(|key| key.as_ref() == word)
    }

    /// Returns `true` if `input` equals (case-insensitively) the given **canonical keyword**
    /// or any of its registered synonyms.
    pub fn matches(keyword: Keyword, input: &str) -> bool {
        let reg = Self::registry().read().unwrap();
        reg.get(&input.to_ascii_lowercase())
            .map(|&canon| canon == keyword)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_constants() {
        assert!(Keywords::matches(Keyword::Today, "today"));
        assert!(Keywords::matches(Keyword::Yesterday, "yesterday"));
        assert!(Keywords::matches(Keyword::Friday, "FRIDAY"));
    }

    #[test]
    fn synonyms_extend() {
        Keywords::extend(&[
            ("hoje".into(), "today".into()),
            ("ontem".into(), "yesterday".into()),
            ("amanha".into(), "tomorrow".into()),
        ]);
        assert!(Keywords::matches(Keyword::Today, "hoje"));
        assert!(Keywords::matches(Keyword::Yesterday, "ontem"));
        assert!(Keywords::matches(Keyword::Tomorrow, "amanha"));
    }

    #[test]
    fn synonym_with_unknown_target_is_ignored() {
        Keywords::extend(&[("anteontem".into(), "two-days-ago".into())]);
        assert!(!Keywords::matches(Keyword::Yesterday, "anteontem"));
    }

    #[test]
    fn unknown_word_matches_nothing() {
        assert!(!Keywords::matches(Keyword::Tomorrow, "not in registry"));
    }
}
