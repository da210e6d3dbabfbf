//! Document preprocessing for machine-learning pipelines.
//!
//! A [`Preprocessor`] segments each document into sentences, splits and
//! tags the tokens, drops stopwords and punctuation, then reduces what is
//! left to dictionary base forms.

pub mod config;
pub mod document;
pub mod error;
pub mod filter;
pub mod lemmatizer;
pub mod normalizer;
pub mod preprocessor;
pub mod segmenter;
pub mod tagger;
pub mod token;
pub mod tokenizer;

pub use config::PreprocessorConfig;
pub use error::Error;
pub use preprocessor::{Params, Preprocessor, PreprocessorBuilder, Transformer};
