//! Universal Dependencies part-of-speech tags
//!
//! The 17 coarse UPOS tags shared by all Universal Dependencies treebanks.

use valuekit_core::closed_value_type;

closed_value_type! {
    /// A Universal Dependencies UPOS tag
    ///
    /// The default value is uninitialized.
    pub struct UniversalPosTag {
        max_length: 5,
        fold_case: false,
        /// Adjective
        ADJ = "ADJ",
        /// Adposition
        ADP = "ADP",
        /// Adverb
        ADV = "ADV",
        /// Auxiliary
        AUX = "AUX",
        /// Coordinating conjunction
        CCONJ = "CCONJ",
        /// Determiner
        DET = "DET",
        /// Interjection
        INTJ = "INTJ",
        /// Noun
        NOUN = "NOUN",
        /// Numeral
        NUM = "NUM",
        /// Particle
        PART = "PART",
        /// Pronoun
        PRON = "PRON",
        /// Proper noun
        PROPN = "PROPN",
        /// Punctuation
        PUNCT = "PUNCT",
        /// Subordinating conjunction
        SCONJ = "SCONJ",
        /// Symbol
        SYM = "SYM",
        /// Verb
        VERB = "VERB",
        /// Other
        X = "X",
    }
}
