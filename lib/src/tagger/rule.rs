use hashbrown::HashMap;

use crate::{
    tagger::{Tagged, Tagger},
    token::{Token, Tokens},
};

const DETERMINERS: &[&str] = &[
    "a", "an", "another", "any", "both", "each", "either", "every", "neither", "no", "some",
    "that", "the", "these", "this", "those", "all",
];

const PRONOUNS: &[&str] = &[
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "us", "them", "myself",
    "yourself", "himself", "herself", "itself", "ourselves", "yourselves", "themselves",
    "mine", "yours", "hers", "ours", "theirs",
];

const POSSESSIVES: &[&str] = &["my", "your", "his", "her", "its", "our", "their"];

const PREPOSITIONS: &[&str] = &[
    "about", "above", "across", "after", "against", "along", "among", "around", "as", "at",
    "because", "before", "behind", "below", "beneath", "beside", "between", "beyond", "by",
    "despite", "down", "during", "except", "for", "from", "if", "in", "inside", "into", "like",
    "near", "of", "off", "on", "onto", "out", "outside", "over", "per", "since", "than",
    "through", "throughout", "toward", "towards", "under", "underneath", "until", "unlike",
    "upon", "via", "whether", "while", "with", "within", "without",
];

const CONJUNCTIONS: &[&str] = &["and", "but", "or", "nor", "yet", "plus"];

const MODALS: &[&str] = &[
    "can", "could", "may", "might", "must", "shall", "should", "will", "would", "ought",
];

const ADVERBS: &[&str] = &[
    "again", "almost", "already", "also", "always", "ever", "even", "here", "just", "never",
    "not", "now", "often", "once", "only", "quite", "rather", "soon", "so", "still", "then",
    "there", "too", "very", "well", "n't", "further", "together", "away", "back",
];

const WH_WORDS: &[(&str, &str)] = &[
    ("what", "WP"),
    ("who", "WP"),
    ("whom", "WP"),
    ("whose", "WP$"),
    ("which", "WDT"),
    ("when", "WRB"),
    ("where", "WRB"),
    ("why", "WRB"),
    ("how", "WRB"),
];

const VERB_FORMS: &[(&str, &str)] = &[
    ("be", "VB"),
    ("am", "VBP"),
    ("are", "VBP"),
    ("is", "VBZ"),
    ("was", "VBD"),
    ("were", "VBD"),
    ("been", "VBN"),
    ("being", "VBG"),
    ("have", "VBP"),
    ("has", "VBZ"),
    ("had", "VBD"),
    ("having", "VBG"),
    ("do", "VBP"),
    ("does", "VBZ"),
    ("did", "VBD"),
    ("done", "VBN"),
    ("doing", "VBG"),
    ("ate", "VBD"),
    ("eaten", "VBN"),
    ("began", "VBD"),
    ("begun", "VBN"),
    ("bought", "VBD"),
    ("brought", "VBD"),
    ("came", "VBD"),
    ("felt", "VBD"),
    ("found", "VBD"),
    ("gave", "VBD"),
    ("given", "VBN"),
    ("gone", "VBN"),
    ("got", "VBD"),
    ("kept", "VBD"),
    ("knew", "VBD"),
    ("known", "VBN"),
    ("left", "VBD"),
    ("made", "VBD"),
    ("ran", "VBD"),
    ("said", "VBD"),
    ("sat", "VBD"),
    ("saw", "VBD"),
    ("seen", "VBN"),
    ("slept", "VBD"),
    ("spoke", "VBD"),
    ("spoken", "VBN"),
    ("stood", "VBD"),
    ("taken", "VBN"),
    ("thought", "VBD"),
    ("told", "VBD"),
    ("took", "VBD"),
    ("went", "VBD"),
    ("wrote", "VBD"),
    ("written", "VBN"),
];

const ADJECTIVES: &[(&str, &str)] = &[
    ("bad", "JJ"),
    ("big", "JJ"),
    ("brown", "JJ"),
    ("clever", "JJ"),
    ("fast", "JJ"),
    ("few", "JJ"),
    ("good", "JJ"),
    ("great", "JJ"),
    ("high", "JJ"),
    ("large", "JJ"),
    ("lazy", "JJ"),
    ("little", "JJ"),
    ("long", "JJ"),
    ("loyal", "JJ"),
    ("many", "JJ"),
    ("much", "JJ"),
    ("new", "JJ"),
    ("old", "JJ"),
    ("other", "JJ"),
    ("quick", "JJ"),
    ("same", "JJ"),
    ("small", "JJ"),
    ("speedy", "JJ"),
    ("better", "JJR"),
    ("bigger", "JJR"),
    ("faster", "JJR"),
    ("more", "JJR"),
    ("quicker", "JJR"),
    ("worse", "JJR"),
    ("best", "JJS"),
    ("most", "JJS"),
    ("worst", "JJS"),
];

const ADJECTIVE_SUFFIXES: &[&str] = &["able", "ful", "ible", "ish", "ive", "less", "ous"];

/// Words after which a past-tense reading becomes a past participle.
const AUXILIARIES: &[&str] = &[
    "am", "are", "be", "been", "being", "get", "gets", "got", "had", "has", "have", "having",
    "is", "was", "were",
];

/// A deterministic lexicon and suffix tagger emitting Penn Treebank tags.
///
/// Closed-class words come from a fixed lexicon. Open-class words are
/// guessed from their shape and suffix, then a left-to-right pass fixes
/// readings that depend on the previous word.
#[derive(Clone, Debug)]
pub struct RuleTagger {
    lexicon: HashMap<&'static str, &'static str>,
}

impl Default for RuleTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleTagger {
    pub fn new() -> Self {
        let mut lexicon = HashMap::new();

        let closed = [
            (DETERMINERS, "DT"),
            (PRONOUNS, "PRP"),
            (POSSESSIVES, "PRP$"),
            (PREPOSITIONS, "IN"),
            (CONJUNCTIONS, "CC"),
            (MODALS, "MD"),
            (ADVERBS, "RB"),
        ];
        for (words, tag) in closed {
            lexicon.extend(words.iter().map(|&word| (word, tag)));
        }

        lexicon.extend(WH_WORDS.iter().copied());
        lexicon.extend(VERB_FORMS.iter().copied());
        lexicon.extend(ADJECTIVES.iter().copied());
        lexicon.insert("to", "TO");

        Self { lexicon }
    }

    fn lookup(&self, word: &str) -> Option<&'static str> {
        self.lexicon.get(word).copied()
    }

    fn guess(&self, token: &Token, lower: &str, position: usize) -> &'static str {
        if !token.chars().any(char::is_alphanumeric) {
            return punctuation_tag(token);
        }

        if is_number(token) {
            return "CD";
        }

        // Sentence-initial capitals carry no signal.
        if position > 0 && token.chars().next().is_some_and(char::is_uppercase) {
            return if lower.ends_with('s') { "NNPS" } else { "NNP" };
        }

        let length = lower.chars().count();

        if length >= 5 && lower.ends_with("ing") {
            "VBG"
        } else if length >= 4 && lower.ends_with("ed") {
            "VBD"
        } else if length >= 4 && lower.ends_with("ly") {
            "RB"
        } else if ADJECTIVE_SUFFIXES
            .iter()
            .any(|suffix| length > suffix.len() + 1 && lower.ends_with(suffix))
        {
            "JJ"
        } else if length >= 3
            && lower.ends_with('s')
            && !["ss", "us", "is"].iter().any(|suffix| lower.ends_with(suffix))
        {
            "NNS"
        } else {
            "NN"
        }
    }
}

impl Tagger for RuleTagger {
    fn tag(&self, tokens: Tokens) -> Vec<Tagged> {
        let lowered = tokens
            .iter()
            .map(|token| token.to_lowercase())
            .collect::<Vec<_>>();

        let mut known = Vec::with_capacity(lowered.len());
        let mut tags = Vec::with_capacity(lowered.len());

        for (position, (token, lower)) in tokens.iter().zip(&lowered).enumerate() {
            match self.lookup(lower) {
                Some(tag) => {
                    known.push(true);
                    tags.push(tag);
                }
                None => {
                    known.push(false);
                    tags.push(self.guess(token, lower, position));
                }
            }
        }

        for index in 1..tags.len() {
            if known[index] {
                continue;
            }

            let previous = tags[index - 1];
            let previous_word = lowered[index - 1].as_str();

            tags[index] = match (previous, tags[index]) {
                ("TO" | "MD", "NN" | "VBP" | "VBD") => "VB",
                (_, "VBD") if AUXILIARIES.contains(&previous_word) => "VBN",
                ("PRP", "NN") => "VBP",
                ("PRP", "NNS") => "VBZ",
                (_, current) => current,
            };
        }

        tokens
            .into_iter()
            .zip(tags)
            .map(|(token, tag)| Tagged::new(token, tag))
            .collect()
    }
}

fn punctuation_tag(token: &str) -> &'static str {
    if token.chars().all(|ch| matches!(ch, '.' | '!' | '?')) {
        return ".";
    }

    match token {
        "," => ",",
        ":" | ";" | "-" | "--" | "..." => ":",
        "$" => "$",
        "#" => "#",
        "(" | "[" | "{" => "(",
        ")" | "]" | "}" => ")",
        "\"" | "'" | "''" | "`" | "``" => "''",
        _ => "SYM",
    }
}

fn is_number(token: &str) -> bool {
    token.chars().any(|ch| ch.is_ascii_digit())
        && token
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, ',' | '.'))
}
