use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, trace};

use crate::{
    config::PreprocessorConfig,
    error::Error,
    filter::{Punctuation, Stopwords, TextFilter},
    lemmatizer::{Lemmatizer, WordNet},
    normalizer::{Lowercase, NormalizerPipeline, Strip},
    segmenter::{SentenceSegmenter, UnicodeSentences},
    tagger::{Pos, RuleTagger, Tagged, Tagger},
    token::{Token, Tokens},
    tokenizer::{TextTokenizer, WordPunct},
};

/// The fit/transform contract of a pipeline stage.
pub trait Transformer {
    type Output;

    /// Learns nothing by default.
    fn fit<D: AsRef<str>>(&self, _documents: &[D]) -> &Self {
        self
    }

    fn transform<D: AsRef<str>>(&self, documents: &[D]) -> Vec<Self::Output>;

    fn fit_transform<D: AsRef<str>>(&self, documents: &[D]) -> Vec<Self::Output> {
        self.fit(documents).transform(documents)
    }

    /// Identity. Filtering and lemmatization are lossy, so there is no
    /// real inverse.
    fn inverse_transform<X>(&self, documents: X) -> X {
        documents
    }
}

/// The current options of a [`Preprocessor`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Params {
    /// Sorted.
    pub stopwords: Vec<String>,
    pub punct: String,
    pub lower: bool,
    pub strip: bool,
}

/// Turns documents into normalized, lemmatized token sequences.
///
/// Configuration and collaborators are fixed at construction and only
/// read afterwards, so one instance may serve many threads.
#[derive(Clone, Debug)]
pub struct Preprocessor {
    stopwords: Stopwords,
    punct: Punctuation,
    lower: bool,
    strip: bool,
    normalizers: NormalizerPipeline,
    segmenter: Arc<dyn SentenceSegmenter>,
    tokenizer: Arc<dyn TextTokenizer>,
    tagger: Arc<dyn Tagger>,
    lemmatizer: Arc<dyn Lemmatizer>,
}

impl Preprocessor {
    /// All defaults: English stopwords, ASCII punctuation, lowercasing and
    /// stripping on, bundled tagger and lexicon.
    pub fn new() -> Result<Self, Error> {
        Self::builder().build()
    }

    pub fn builder() -> PreprocessorBuilder {
        PreprocessorBuilder::default()
    }

    pub fn from_config(config: &PreprocessorConfig) -> Result<Self, Error> {
        let lemmatizer = match config.wordnet_dir() {
            Some(dir) => WordNet::load(dir)?,
            None => WordNet::bundled()?,
        };

        Self::builder()
            .stopwords(config.stopwords()?)
            .punct(config.punctuation())
            .lower(config.lower)
            .strip(config.strip)
            .lemmatizer(lemmatizer)
            .build()
    }

    pub fn params(&self) -> Params {
        let mut stopwords = self.stopwords.iter().map(str::to_string).collect::<Vec<_>>();
        stopwords.sort_unstable();

        Params {
            stopwords,
            punct: self.punct.to_sorted_string(),
            lower: self.lower,
            strip: self.strip,
        }
    }

    #[inline]
    pub fn stopwords(&self) -> &Stopwords {
        &self.stopwords
    }

    #[inline]
    pub fn punct(&self) -> &Punctuation {
        &self.punct
    }

    /// Lazily yields the lemmas of `document`, sentence by sentence.
    ///
    /// Each call starts over from the beginning of the document.
    pub fn lemmas<'a>(&'a self, document: &'a str) -> impl Iterator<Item = Token> + 'a {
        self.segmenter
            .sentences(document)
            .into_iter()
            .flat_map(move |sentence| self.tagger.tag(self.tokenizer.tokenize(sentence)))
            .filter_map(move |Tagged { mut token, tag }| {
                self.normalizers.run(&mut token);

                if self.skips(&token) {
                    return None;
                }

                // A lemma may itself be filtered: "owns" reduces to "own".
                let lemma = self.lemmatize(&token, &tag);
                (!self.skips(&lemma)).then_some(lemma)
            })
    }

    /// The lemmas of `document` in order, across all of its sentences.
    pub fn tokenize(&self, document: &str) -> Tokens {
        self.lemmas(document).collect()
    }

    /// Looks up `token` using the category named by the first letter of
    /// its Penn Treebank `tag`.
    pub fn lemmatize(&self, token: &str, tag: &str) -> Token {
        Token::from(self.lemmatizer.lemmatize(token, Pos::from_tag(tag)))
    }

    #[inline]
    fn skips(&self, token: &Token) -> bool {
        !self.stopwords.keep(token) || !self.punct.keep(token)
    }
}

impl Transformer for Preprocessor {
    type Output = Tokens;

    fn transform<D: AsRef<str>>(&self, documents: &[D]) -> Vec<Tokens> {
        documents
            .iter()
            .enumerate()
            .map(|(index, document)| {
                let lemmas = self.tokenize(document.as_ref());
                trace!(document = index, lemmas = lemmas.len(), "transformed document");
                lemmas
            })
            .collect()
    }
}

#[derive(Default)]
pub struct PreprocessorBuilder {
    stopwords: Option<Stopwords>,
    punct: Option<Punctuation>,
    lower: Option<bool>,
    strip: Option<bool>,
    segmenter: Option<Arc<dyn SentenceSegmenter>>,
    tokenizer: Option<Arc<dyn TextTokenizer>>,
    tagger: Option<Arc<dyn Tagger>>,
    lemmatizer: Option<Arc<dyn Lemmatizer>>,
}

impl PreprocessorBuilder {
    pub fn stopwords(mut self, stopwords: Stopwords) -> Self {
        self.stopwords = Some(stopwords);
        self
    }

    pub fn punct(mut self, punct: Punctuation) -> Self {
        self.punct = Some(punct);
        self
    }

    pub fn lower(mut self, lower: bool) -> Self {
        self.lower = Some(lower);
        self
    }

    pub fn strip(mut self, strip: bool) -> Self {
        self.strip = Some(strip);
        self
    }

    pub fn segmenter<S: SentenceSegmenter + 'static>(mut self, segmenter: S) -> Self {
        self.segmenter = Some(Arc::new(segmenter));
        self
    }

    pub fn tokenizer<T: TextTokenizer + 'static>(mut self, tokenizer: T) -> Self {
        self.tokenizer = Some(Arc::new(tokenizer));
        self
    }

    pub fn tagger<T: Tagger + 'static>(mut self, tagger: T) -> Self {
        self.tagger = Some(Arc::new(tagger));
        self
    }

    pub fn lemmatizer<L: Lemmatizer + 'static>(mut self, lemmatizer: L) -> Self {
        self.lemmatizer = Some(Arc::new(lemmatizer));
        self
    }

    pub fn build(self) -> Result<Preprocessor, Error> {
        let stopwords = match self.stopwords {
            Some(stopwords) => stopwords,
            None => Stopwords::english(),
        };

        let lemmatizer: Arc<dyn Lemmatizer> = match self.lemmatizer {
            Some(lemmatizer) => lemmatizer,
            None => Arc::new(WordNet::bundled()?),
        };

        let lower = self.lower.unwrap_or(true);
        let strip = self.strip.unwrap_or(true);

        let mut normalizers = NormalizerPipeline::new();
        if lower {
            normalizers.insert(Box::new(Lowercase::new()));
        }
        if strip {
            normalizers.insert(Box::new(Strip::new()));
        }

        let preprocessor = Preprocessor {
            stopwords,
            punct: self.punct.unwrap_or_default(),
            lower,
            strip,
            normalizers,
            segmenter: self
                .segmenter
                .unwrap_or_else(|| Arc::new(UnicodeSentences::new())),
            tokenizer: self.tokenizer.unwrap_or_else(|| Arc::new(WordPunct::new())),
            tagger: self.tagger.unwrap_or_else(|| Arc::new(RuleTagger::new())),
            lemmatizer,
        };

        debug!(
            stopwords = preprocessor.stopwords.len(),
            punct = preprocessor.punct.len(),
            lower,
            strip,
            "built preprocessor"
        );

        Ok(preprocessor)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use crate::{
        filter::{Punctuation, Stopwords},
        lemmatizer::Lemmatizer,
        preprocessor::{Preprocessor, Transformer},
        segmenter::{Lines, SentenceSegmenter},
        tagger::{Pos, Tagged, Tagger},
        token::Tokens,
        tokenizer::{TextTokenizer, WordPunct},
        tokens,
    };

    /// Tags every token with the same code.
    #[derive(Debug)]
    struct FixedTagger(&'static str);

    impl Tagger for FixedTagger {
        fn tag(&self, tokens: Tokens) -> Vec<Tagged> {
            tokens
                .into_iter()
                .map(|token| Tagged::new(token, self.0))
                .collect()
        }
    }

    /// Records each lookup and echoes the token back.
    #[derive(Debug, Default)]
    struct Recorder(Arc<Mutex<Vec<(String, Pos)>>>);

    impl Lemmatizer for Recorder {
        fn lemmatize(&self, token: &str, pos: Pos) -> String {
            self.0.lock().unwrap().push((token.to_string(), pos));
            token.to_string()
        }
    }

    fn preprocessor() -> Preprocessor {
        Preprocessor::new().unwrap()
    }

    #[test]
    fn test_tokenize_default() {
        // "are" is on the default English list.
        let lemmas = preprocessor().tokenize("The cats are running.");
        assert_eq!(lemmas, tokens!["cat", "run"]);
    }

    #[test]
    fn test_tokenize_verb_lemmas() {
        let preprocessor = Preprocessor::builder()
            .stopwords(Stopwords::new(["the"]))
            .build()
            .unwrap();

        assert_eq!(
            preprocessor.tokenize("The cats are running."),
            tokens!["cat", "be", "run"]
        );
    }

    #[test]
    fn test_tokenize_filters_lemmas() {
        let preprocessor = preprocessor();

        assert_eq!(preprocessor.lemmatize("owns", "VBZ"), "own");
        assert!(preprocessor.stopwords().contains("own"));
        assert_eq!(preprocessor.tokenize("He owns dogs."), tokens!["dog"]);
    }

    #[test]
    fn test_tokenize_filters_punctuation_lemmas() {
        #[derive(Debug)]
        struct Dashes;

        impl Lemmatizer for Dashes {
            fn lemmatize(&self, token: &str, _pos: Pos) -> String {
                if token == "dash" {
                    "--".to_string()
                } else {
                    token.to_string()
                }
            }
        }

        let preprocessor = Preprocessor::builder()
            .tagger(FixedTagger("NN"))
            .lemmatizer(Dashes)
            .build()
            .unwrap();

        assert_eq!(preprocessor.tokenize("dash dot"), tokens!["dot"]);
    }

    #[test]
    fn test_tokenize_flattens_sentences() {
        let lemmas = preprocessor().tokenize("Dogs barked. Foxes jumped!");
        assert_eq!(lemmas, tokens!["dog", "bark", "fox", "jump"]);
    }

    #[test]
    fn test_tokenize_uppercase_noun() {
        assert_eq!(preprocessor().tokenize("CATS"), tokens!["cat"]);
    }

    #[test]
    fn test_lemmatize_tag_mapping() {
        let preprocessor = preprocessor();

        assert_eq!(preprocessor.lemmatize("cats", "NNS"), "cat");
        assert_eq!(preprocessor.lemmatize("running", "VBG"), "run");
        assert_eq!(preprocessor.lemmatize("running", "NN"), "running");
        assert_eq!(preprocessor.lemmatize("better", "JJR"), "good");
        assert_eq!(preprocessor.lemmatize("better", "RBR"), "well");
        assert_eq!(preprocessor.lemmatize("cats", ""), "cat");
        assert_eq!(preprocessor.lemmatize("cats", "XYZ"), "cat");
    }

    #[test]
    fn test_lemmatize_pos_passed_through() {
        let recorder = Recorder::default();
        let calls = recorder.0.clone();

        let preprocessor = Preprocessor::builder()
            .tagger(FixedTagger("VBZ"))
            .lemmatizer(recorder)
            .build()
            .unwrap();

        assert_eq!(preprocessor.tokenize("Jumps, leaps"), tokens!["jumps", "leaps"]);
        assert_eq!(
            *calls.lock().unwrap(),
            vec![("jumps".to_string(), Pos::Verb), ("leaps".to_string(), Pos::Verb)]
        );
    }

    #[test]
    fn test_strip_underscores_before_filtering() {
        let preprocessor = Preprocessor::builder()
            .tagger(FixedTagger("NN"))
            .lemmatizer(Recorder::default())
            .build()
            .unwrap();

        assert_eq!(preprocessor.tokenize("_foo_ *bar*"), tokens!["foo", "bar"]);
        assert_eq!(preprocessor.tokenize("_the_"), tokens![]);
    }

    #[test]
    fn test_strip_disabled() {
        let preprocessor = Preprocessor::builder()
            .strip(false)
            .tagger(FixedTagger("NN"))
            .lemmatizer(Recorder::default())
            .build()
            .unwrap();

        assert_eq!(preprocessor.tokenize("_foo_"), tokens!["_foo_"]);
    }

    #[test]
    fn test_empty_after_strip_is_skipped() {
        // No punctuation at all: only the vacuous empty-token rule can reject.
        let build = |strip| {
            Preprocessor::builder()
                .punct(Punctuation::new([]))
                .strip(strip)
                .tagger(FixedTagger("NN"))
                .lemmatizer(Recorder::default())
                .build()
                .unwrap()
        };

        assert_eq!(build(true).tokenize("___ word"), tokens!["word"]);
        assert_eq!(build(false).tokenize("___ word"), tokens!["___", "word"]);
    }

    #[test]
    fn test_lower_disabled() {
        let preprocessor = Preprocessor::builder()
            .lower(false)
            .tagger(FixedTagger("NN"))
            .lemmatizer(Recorder::default())
            .build()
            .unwrap();

        // Stopword membership is case sensitive.
        assert_eq!(
            preprocessor.tokenize("The cat and THE hat"),
            tokens!["The", "cat", "THE", "hat"]
        );
    }

    #[test]
    fn test_custom_punctuation() {
        let preprocessor = Preprocessor::builder()
            .punct(Punctuation::new(['—']))
            .tagger(FixedTagger("NN"))
            .lemmatizer(Recorder::default())
            .build()
            .unwrap();

        assert_eq!(preprocessor.tokenize("cats — dogs !"), tokens!["cats", "dogs", "!"]);
    }

    #[test]
    fn test_injected_collaborators() {
        #[derive(Debug)]
        struct Commas;

        impl SentenceSegmenter for Commas {
            fn sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
                text.split(',').collect()
            }
        }

        #[derive(Debug)]
        struct Chars;

        impl TextTokenizer for Chars {
            fn tokenize(&self, text: &str) -> Tokens {
                text.chars()
                    .filter(|ch| !ch.is_whitespace())
                    .map(|ch| ch.to_string().into())
                    .collect()
            }
        }

        let preprocessor = Preprocessor::builder()
            .stopwords(Stopwords::new(["b"]))
            .segmenter(Commas)
            .tokenizer(Chars)
            .tagger(FixedTagger("NN"))
            .lemmatizer(Recorder::default())
            .build()
            .unwrap();

        assert_eq!(preprocessor.tokenize("a b, c."), tokens!["a", "c"]);
    }

    #[test]
    fn test_lemmas_restartable() {
        let preprocessor = preprocessor();
        let document = "Foxes jump over lazy dogs.";

        let first = preprocessor.lemmas(document).collect::<Tokens>();
        let second = preprocessor.lemmas(document).collect::<Tokens>();

        assert_eq!(first, second);
        assert_eq!(first, preprocessor.tokenize(document));
    }

    #[test]
    fn test_transform() {
        let preprocessor = preprocessor();
        let documents = ["The cats are running.", "", "Foxes jumped."];

        let output = preprocessor.transform(&documents);

        assert_eq!(output.len(), documents.len());
        assert_eq!(output[0], tokens!["cat", "run"]);
        assert!(output[1].is_empty());
        assert_eq!(output[2], tokens!["fox", "jump"]);
    }

    #[test]
    fn test_fit_returns_self() {
        let preprocessor = preprocessor();
        let documents = vec!["anything".to_string()];

        assert!(std::ptr::eq(preprocessor.fit(&documents), &preprocessor));
        assert_eq!(
            preprocessor.fit_transform(&documents),
            preprocessor.transform(&documents)
        );
    }

    #[test]
    fn test_inverse_transform_identity() {
        let preprocessor = preprocessor();

        let documents = vec!["The cats are running.", "x"];
        assert_eq!(preprocessor.inverse_transform(documents.clone()), documents);

        let lemmas = vec![tokens!["cat"], tokens![]];
        assert_eq!(preprocessor.inverse_transform(lemmas.clone()), lemmas);
    }

    #[test]
    fn test_params() {
        let preprocessor = Preprocessor::builder()
            .stopwords(Stopwords::new(["the", "and"]))
            .punct(Punctuation::new(['.', '!']))
            .strip(false)
            .build()
            .unwrap();

        let params = preprocessor.params();
        assert_eq!(params.stopwords, vec!["and", "the"]);
        assert_eq!(params.punct, "!.");
        assert!(params.lower);
        assert!(!params.strip);
    }

    #[test]
    fn test_lines_segmenter() {
        let preprocessor = Preprocessor::builder()
            .segmenter(Lines::new())
            .tokenizer(WordPunct::new())
            .build()
            .unwrap();

        assert_eq!(
            preprocessor.tokenize("dogs bark\nfoxes run"),
            tokens!["dog", "bark", "fox", "run"]
        );
    }
}
