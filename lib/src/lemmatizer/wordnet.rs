use std::{
    fs,
    path::{Path, PathBuf},
};

use hashbrown::{HashMap, HashSet};
use tracing::debug;

use crate::{error::ResourceError, lemmatizer::Lemmatizer, tagger::Pos};

const NOUN_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("ves", "f"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

const VERB_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ies", "y"),
    ("es", "e"),
    ("es", ""),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
];

const ADJECTIVE_RULES: &[(&str, &str)] = &[("er", ""), ("est", ""), ("er", "e"), ("est", "e")];

const ADVERB_RULES: &[(&str, &str)] = &[];

/// Suffix detachment rules: `(suffix, replacement)`.
fn rules(pos: Pos) -> &'static [(&'static str, &'static str)] {
    match pos {
        Pos::Noun => NOUN_RULES,
        Pos::Verb => VERB_RULES,
        Pos::Adjective => ADJECTIVE_RULES,
        Pos::Adverb => ADVERB_RULES,
    }
}

fn bundled_source(pos: Pos) -> (&'static str, &'static str) {
    match pos {
        Pos::Noun => (
            include_str!("../../assets/wordnet/index.noun"),
            include_str!("../../assets/wordnet/noun.exc"),
        ),
        Pos::Verb => (
            include_str!("../../assets/wordnet/index.verb"),
            include_str!("../../assets/wordnet/verb.exc"),
        ),
        Pos::Adjective => (
            include_str!("../../assets/wordnet/index.adj"),
            include_str!("../../assets/wordnet/adj.exc"),
        ),
        Pos::Adverb => (
            include_str!("../../assets/wordnet/index.adv"),
            include_str!("../../assets/wordnet/adv.exc"),
        ),
    }
}

#[derive(Clone, Debug, Default)]
struct Lookup {
    index: HashMap<Pos, HashSet<String>>,
    exceptions: HashMap<Pos, HashMap<String, Vec<String>>>,
}

impl Lookup {
    fn insert(
        &mut self,
        pos: Pos,
        index: &str,
        exceptions: &str,
        origin: &Path,
    ) -> Result<(), ResourceError> {
        let path = origin.join(format!("{}.exc", pos.wordnet_name()));
        self.index.insert(pos, parse_index(index));
        self.exceptions
            .insert(pos, parse_exceptions(exceptions, &path)?);
        Ok(())
    }
}

/// WordNet-style lemmatizer.
///
/// A form listed in the exception file maps to its listed bases. Any other
/// form is run through the detachment rules for its part of speech, and the
/// rules are applied again to the results until some round reaches an
/// indexed form. Only indexed candidates survive, exception bases included;
/// the form itself counts when indexed. The shortest survivor wins, and a
/// form with no survivor is returned unchanged.
#[derive(Clone, Debug)]
pub struct WordNet {
    lookup: Lookup,
}

impl WordNet {
    /// The small lexicon shipped with the crate.
    pub fn bundled() -> Result<Self, ResourceError> {
        let origin = Path::new("<bundled>");
        let mut lookup = Lookup::default();

        for pos in Pos::ALL {
            let (index, exceptions) = bundled_source(pos);
            lookup.insert(pos, index, exceptions, origin)?;
        }

        Ok(Self::with_lookup(lookup, origin))
    }

    /// Reads `index.<pos>` and `<pos>.exc` files from a WordNet `dict` directory.
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self, ResourceError> {
        let dir = dir.as_ref();
        let mut lookup = Lookup::default();

        for pos in Pos::ALL {
            let index = read(dir.join(format!("index.{}", pos.wordnet_name())))?;
            let exceptions = read(dir.join(format!("{}.exc", pos.wordnet_name())))?;
            lookup.insert(pos, &index, &exceptions, dir)?;
        }

        Ok(Self::with_lookup(lookup, dir))
    }

    fn with_lookup(lookup: Lookup, origin: &Path) -> Self {
        for pos in Pos::ALL {
            debug!(
                origin = ?origin,
                pos = pos.wordnet_name(),
                lemmas = lookup.index.get(&pos).map_or(0, HashSet::len),
                exceptions = lookup.exceptions.get(&pos).map_or(0, HashMap::len),
                "loaded lexicon"
            );
        }

        Self { lookup }
    }

    /// Whether `lemma` is a base form for `pos`.
    #[inline]
    pub fn contains(&self, lemma: &str, pos: Pos) -> bool {
        self.lookup
            .index
            .get(&pos)
            .is_some_and(|index| index.contains(lemma))
    }

    /// Every base form `form` may reduce to, in discovery order.
    pub fn candidates(&self, form: &str, pos: Pos) -> Vec<String> {
        let mut found = Vec::new();
        self.collect_indexed(&mut found, [form.to_string()], pos);

        if let Some(bases) = self.lookup.exceptions.get(&pos).and_then(|map| map.get(form)) {
            self.collect_indexed(&mut found, bases.iter().cloned(), pos);
            return found;
        }

        let mut forms = detach(&[form.to_string()], pos);
        self.collect_indexed(&mut found, forms.iter().cloned(), pos);

        while found.is_empty() && !forms.is_empty() {
            forms = detach(&forms, pos);
            self.collect_indexed(&mut found, forms.iter().cloned(), pos);
        }

        found
    }

    fn collect_indexed<I>(&self, found: &mut Vec<String>, forms: I, pos: Pos)
    where
        I: IntoIterator<Item = String>,
    {
        for form in forms {
            if self.contains(&form, pos) && !found.contains(&form) {
                found.push(form);
            }
        }
    }
}

/// One round of suffix detachment over `forms`.
fn detach(forms: &[String], pos: Pos) -> Vec<String> {
    let mut detached = Vec::new();

    for form in forms {
        for &(suffix, replacement) in rules(pos) {
            if let Some(stem) = form.strip_suffix(suffix) {
                let candidate = format!("{stem}{replacement}");
                if !detached.contains(&candidate) {
                    detached.push(candidate);
                }
            }
        }
    }

    detached
}

impl Lemmatizer for WordNet {
    fn lemmatize(&self, token: &str, pos: Pos) -> String {
        self.candidates(token, pos)
            .into_iter()
            .reduce(|shortest, candidate| {
                if candidate.chars().count() < shortest.chars().count() {
                    candidate
                } else {
                    shortest
                }
            })
            .unwrap_or_else(|| token.to_string())
    }
}

fn read(path: PathBuf) -> Result<String, ResourceError> {
    fs::read_to_string(&path).map_err(|error| ResourceError::Lexicon {
        path,
        kind: error.kind(),
    })
}

/// First field of each entry line. Lines starting with a space hold the
/// license header in WordNet distributions.
fn parse_index(text: &str) -> HashSet<String> {
    text.lines()
        .filter(|line| !line.starts_with(' ') && !line.starts_with('#'))
        .filter_map(|line| line.split_whitespace().next())
        .map(str::to_string)
        .collect()
}

/// `form base [base ...]` per line.
fn parse_exceptions(text: &str, path: &Path) -> Result<HashMap<String, Vec<String>>, ResourceError> {
    let mut exceptions = HashMap::new();

    for (number, line) in text.lines().enumerate() {
        let mut fields = line.split_whitespace();
        let Some(form) = fields.next() else {
            continue;
        };

        let bases = fields.map(str::to_string).collect::<Vec<_>>();
        if bases.is_empty() {
            return Err(ResourceError::Malformed {
                path: path.to_path_buf(),
                line: number + 1,
            });
        }

        exceptions.insert(form.to_string(), bases);
    }

    Ok(exceptions)
}
