//! Penn Treebank part-of-speech tags
//!
//! The fine-grained tag set used by the Penn Treebank and by OntoNotes-style
//! English taggers, including punctuation tags such as `-LRB-` and ``` `` ```.

use valuekit_core::closed_value_type;

closed_value_type! {
    /// A Penn Treebank part-of-speech tag
    ///
    /// The default value is uninitialized.
    pub struct TreebankPosTag {
        max_length: 5,
        fold_case: false,
        /// Closing quotation mark `""`
        CLOSING_QUOTATION_MARK = "\"\"",
        /// Number sign `#`
        SYMBOL_NUMBER_SIGN = "#",
        /// Currency symbol `$`
        SYMBOL_CURRENCY = "$",
        /// Closing quotation mark `''`
        CLOSING_QUOTATION_MARK_2 = "''",
        /// Comma
        PUNCTUATION_MARK_COMMA = ",",
        /// Left round bracket
        LEFT_ROUND_BRACKET = "-LRB-",
        /// Right round bracket
        RIGHT_ROUND_BRACKET = "-RRB-",
        /// Sentence closer
        PUNCTUATION_MARK_SENTENCE_CLOSER = ".",
        /// Colon or ellipsis
        PUNCTUATION_MARK_COLON_OR_ELLIPSIS = ":",
        /// Email address
        EMAIL = "ADD",
        /// Affix
        AFFIX = "AFX",
        /// Auxiliary "be"
        AUXILIARY_BE = "BES",
        /// Coordinating conjunction
        CONJUNCTION_COORDINATING = "CC",
        /// Cardinal number
        CARDINAL_NUMBER = "CD",
        /// Determiner
        DETERMINER = "DT",
        /// Existential "there"
        EXISTENTIAL_THERE = "EX",
        /// Foreign word
        FOREIGN_WORD = "FW",
        /// Additional word in a multi-word expression
        ADDITIONAL_WORD_IN_MULTIWORD_EXPRESSION = "GW",
        /// Forms of "have"
        FORMS_OF_HAVE = "HVS",
        /// Hyphen
        PUNCTUATION_MARK_HYPHEN = "HYPH",
        /// Subordinating conjunction or preposition
        CONJUNCTION_SUBORDINATING_OR_PREPOSITION = "IN",
        /// Adjective
        ADJECTIVE = "JJ",
        /// Comparative adjective
        ADJECTIVE_COMPARATIVE = "JJR",
        /// Superlative adjective
        ADJECTIVE_SUPERLATIVE = "JJS",
        /// List item marker
        LIST_ITEM_MARKER = "LS",
        /// Modal auxiliary verb
        VERB_MODAL_AUXILIARY = "MD",
        /// Superfluous punctuation
        SUPERFLUOUS_PUNCTUATION = "NFP",
        /// Missing tag
        MISSING_TAG = "NIL",
        /// Singular or mass noun
        NOUN_SINGULAR_OR_MASS = "NN",
        /// Singular proper noun
        NOUN_PROPER_SINGULAR = "NNP",
        /// Plural proper noun
        NOUN_PROPER_PLURAL = "NNPS",
        /// Plural noun
        NOUN_PLURAL = "NNS",
        /// Predeterminer
        PREDETERMINER = "PDT",
        /// Possessive ending
        POSSESSIVE_ENDING = "POS",
        /// Personal pronoun
        PRONOUN_PERSONAL = "PRP",
        /// Possessive pronoun
        PRONOUN_POSSESSIVE = "PRP$",
        /// Adverb
        ADVERB = "RB",
        /// Comparative adverb
        ADVERB_COMPARATIVE = "RBR",
        /// Superlative adverb
        ADVERB_SUPERLATIVE = "RBS",
        /// Adverb particle
        ADVERB_PARTICLE = "RP",
        /// Space
        SPACE = "SP",
        /// Infinitival "to"
        INFINITIVAL_TO = "TO",
        /// Interjection
        INTERJECTION = "UH",
        /// Verb, base form
        VERB_BASE_FORM = "VB",
        /// Verb, past tense
        VERB_PAST_TENSE = "VBD",
        /// Verb, gerund or present participle
        VERB_GERUND_OR_PRESENT_PARTICIPLE = "VBG",
        /// Verb, past participle
        VERB_PAST_PARTICIPLE = "VBN",
        /// Verb, non-3rd person singular present
        VERB_NON_3RD_PERSON_SINGULAR_PRESENT = "VBP",
        /// Verb, 3rd person singular present
        VERB_3RD_PERSON_SINGULAR_PRESENT = "VBZ",
        /// Wh-determiner
        WH_DETERMINER = "WDT",
        /// Wh-pronoun, personal
        WH_PRONOUN_PERSONAL = "WP",
        /// Wh-pronoun, possessive
        WH_PRONOUN_POSSESSIVE = "WP$",
        /// Wh-adverb
        WH_ADVERB = "WRB",
        /// Unknown
        UNKNOWN = "XX",
        /// Opening quotation mark
        OPENING_QUOTATION_MARK = "``",
    }
}

impl TreebankPosTag {
    /// Whether this is one of the noun tags (`NN`, `NNS`, `NNP`, `NNPS`)
    pub fn is_noun(&self) -> bool {
        self.as_str().map_or(false, |s| s.starts_with("NN"))
    }

    /// Whether this is one of the verb tags (`VB`, `VBD`, `VBG`, `VBN`, `VBP`, `VBZ`)
    pub fn is_verb(&self) -> bool {
        self.as_str().map_or(false, |s| s.starts_with("VB"))
    }
}
