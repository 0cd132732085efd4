use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use crate::errors::{Result, XrefError};

/// The 66 canonical book abbreviations in Protestant canon order, paired with
/// their Telugu display names.
pub const CANONICAL_BOOKS: [(&str, &str); 66] = [
    ("Gen", "ఆదికాండము"),
    ("Exod", "నిర్గమకాండము"),
    ("Lev", "లేవీయకాండము"),
    ("Num", "సంఖ్యాకాండము"),
    ("Deut", "ద్వితీయోపదేశకాండమ"),
    ("Josh", "యెహొషువ"),
    ("Judg", "న్యాయాధిపతులు"),
    ("Ruth", "రూతు"),
    ("1Sam", "సమూయేలు మొదటి గ్రంథము"),
    ("2Sam", "సమూయేలు రెండవ గ్రంథము"),
    ("1Kgs", "రాజులు మొదటి గ్రంథము"),
    ("2Kgs", "రాజులు రెండవ గ్రంథము"),
    ("1Chr", "దినవృత్తాంతములు మొదటి గ్రంథము"),
    ("2Chr", "దినవృత్తాంతములు రెండవ గ్రంథము"),
    ("Ezra", "ఎజ్రా"),
    ("Neh", "నెహెమ్యా"),
    ("Esth", "ఎస్తేరు"),
    ("Job", "యోబు గ్రంథము"),
    ("Ps", "కీర్తనల గ్రంథము"),
    ("Prov", "సామెతలు"),
    ("Eccl", "ప్రసంగి"),
    ("Song", "పరమగీతము"),
    ("Isa", "యెషయా గ్రంథము"),
    ("Jer", "యిర్మీయా"),
    ("Lam", "విలాపవాక్యములు"),
    ("Ezek", "యెహెజ్కేలు"),
    ("Dan", "దానియేలు"),
    ("Hos", "హొషేయ"),
    ("Joel", "యోవేలు"),
    ("Amos", "ఆమోసు"),
    ("Obad", "ఓబద్యా"),
    ("Jonah", "యోనా"),
    ("Mic", "మీకా"),
    ("Nah", "నహూము"),
    ("Hab", "హబక్కూకు"),
    ("Zeph", "జెఫన్యా"),
    ("Hag", "హగ్గయి"),
    ("Zech", "జెకర్యా"),
    ("Mal", "మలాకీ"),
    ("Matt", "మత్తయి సువార్త"),
    ("Mark", "మార్కు సువార్త"),
    ("Luke", "లూకా సువార్త"),
    ("John", "యోహాను సువార్త"),
    ("Acts", "అపొస్తలుల కార్యములు"),
    ("Rom", "రోమీయులకు"),
    ("1Cor", "1 కొరింథీయులకు"),
    ("2Cor", "2 కొరింథీయులకు"),
    ("Gal", "గలతీయులకు"),
    ("Eph", "ఎఫెసీయులకు"),
    ("Phil", "ఫిలిప్పీయులకు"),
    ("Col", "కొలొస్సయులకు"),
    ("1Thess", "1 థెస్సలొనీకయులకు"),
    ("2Thess", "2 థెస్సలొనీకయులకు"),
    ("1Tim", "1 తిమోతికి"),
    ("2Tim", "2 తిమోతికి"),
    ("Titus", "తీతుకు"),
    ("Phlm", "ఫిలేమోనుకు"),
    ("Heb", "హెబ్రీయులకు"),
    ("Jas", "యాకోబు"),
    ("1Pet", "1 పేతురు"),
    ("2Pet", "2 పేతురు"),
    ("1John", "1 యోహాను"),
    ("2John", "2 యోహాను"),
    ("3John", "3 యోహాను"),
    ("Jude", "యూదా"),
    ("Rev", "ప్రకటన గ్రంథము"),
];

/// Lookup capability from a book abbreviation to its display name.
pub trait BookLookup {
    /// Returns the display name for `abbreviation`, or `None` if unknown.
    fn lookup(&self, abbreviation: &str) -> Option<&str>;

    /// Resolves an abbreviation, falling back to the abbreviation itself.
    fn resolve(&self, abbreviation: &str) -> String {
        self.lookup(abbreviation)
            .unwrap_or(abbreviation)
            .to_string()
    }
}

/// An immutable abbreviation → display name table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookNameTable {
    names: HashMap<String, String>,
}

impl BookNameTable {
    /// Returns the built-in Telugu table, constructed on first use.
    pub fn builtin() -> &'static BookNameTable {
        static TABLE: OnceLock<BookNameTable> = OnceLock::new();
        TABLE.get_or_init(|| {
            CANONICAL_BOOKS
                .iter()
                .map(|(abbr, name)| (abbr.to_string(), name.to_string()))
                .collect()
        })
    }

    /// Loads a table from a JSON object of `"abbreviation": "display name"`
    /// pairs.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| XrefError::File {
            message: format!("failed to read book name table: {}", e),
            path: path.display().to_string(),
        })?;
        let names: HashMap<String, String> = serde_json::from_str(&contents)?;
        Ok(Self { names })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<(String, String)> for BookNameTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}

impl BookLookup for BookNameTable {
    fn lookup(&self, abbreviation: &str) -> Option<&str> {
        self.names.get(abbreviation).map(String::as_str)
    }
}

impl<T: BookLookup + ?Sized> BookLookup for &T {
    fn lookup(&self, abbreviation: &str) -> Option<&str> {
        (**self).lookup(abbreviation)
    }
}
