use std::ops::BitOr;
use std::sync::OnceLock;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize, Serializer};

/// One letter-casing convention a field name can be matched under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Case {
    Lower,
    Upper,
    Camel,
    Pascal,
}

impl Case {
    pub const ALL: [Case; 4] = [Case::Lower, Case::Upper, Case::Camel, Case::Pascal];

    /// Apply this case convention to a field name.
    pub fn transform(self, name: &str) -> String {
        match self {
            Case::Lower => lower_case(name),
            Case::Upper => upper_case(name),
            Case::Camel => camel_case(name),
            Case::Pascal => pascal_case(name),
        }
    }

    fn bit(self) -> u8 {
        match self {
            Case::Lower => 1,
            Case::Upper => 2,
            Case::Camel => 4,
            Case::Pascal => 8,
        }
    }
}

/// A set of case conventions. A key matches a configured field if it equals
/// the field under *any* convention in the set.
///
/// Compose with `|`: `Case::Lower | Case::Upper`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CaseSet(u8);

impl CaseSet {
    pub const EMPTY: CaseSet = CaseSet(0);

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn contains(self, case: Case) -> bool {
        self.0 & case.bit() != 0
    }

    pub fn insert(&mut self, case: Case) {
        self.0 |= case.bit();
    }

    pub fn iter(self) -> impl Iterator<Item = Case> {
        Case::ALL.into_iter().filter(move |c| self.contains(*c))
    }
}

impl From<Case> for CaseSet {
    fn from(case: Case) -> Self {
        CaseSet(case.bit())
    }
}

impl BitOr for CaseSet {
    type Output = CaseSet;
    fn bitor(self, rhs: CaseSet) -> CaseSet {
        CaseSet(self.0 | rhs.0)
    }
}

impl BitOr<Case> for CaseSet {
    type Output = CaseSet;
    fn bitor(self, rhs: Case) -> CaseSet {
        self | CaseSet::from(rhs)
    }
}

impl BitOr for Case {
    type Output = CaseSet;
    fn bitor(self, rhs: Case) -> CaseSet {
        CaseSet::from(self) | CaseSet::from(rhs)
    }
}

impl BitOr<CaseSet> for Case {
    type Output = CaseSet;
    fn bitor(self, rhs: CaseSet) -> CaseSet {
        CaseSet::from(self) | rhs
    }
}

impl FromIterator<Case> for CaseSet {
    fn from_iter<I: IntoIterator<Item = Case>>(iter: I) -> Self {
        let mut set = CaseSet::EMPTY;
        for case in iter {
            set.insert(case);
        }
        set
    }
}

impl Serialize for CaseSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for CaseSet {
    /// Accepts a single case name or a sequence of case names.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum OneOrMany {
            One(Case),
            Many(Vec<Case>),
        }
        Ok(match OneOrMany::deserialize(deserializer)? {
            OneOrMany::One(case) => case.into(),
            OneOrMany::Many(cases) => cases.into_iter().collect(),
        })
    }
}

/// Word starts: start of string, an uppercase letter, or a word character
/// preceded by a non-word character.
fn word_starts() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?:^\w|[A-Z]|\b\w)").expect("valid word-start pattern"))
}

/// Recase each word start with `format(match, word_index)`, then strip the
/// whitespace left over from segmentation.
fn recase<F>(name: &str, mut format: F) -> String
where
    F: FnMut(&str, usize) -> String,
{
    let mut index = 0;
    let recased = word_starts().replace_all(name, |caps: &Captures<'_>| {
        let formatted = format(&caps[0], index);
        index += 1;
        formatted
    });
    recased.split_whitespace().collect()
}

pub fn lower_case(name: &str) -> String {
    name.to_lowercase()
}

pub fn upper_case(name: &str) -> String {
    name.to_uppercase()
}

pub fn camel_case(name: &str) -> String {
    recase(name, |s, i| {
        if i == 0 {
            s.to_lowercase()
        } else {
            s.to_uppercase()
        }
    })
}

pub fn pascal_case(name: &str) -> String {
    recase(name, |s, _| s.to_uppercase())
}
