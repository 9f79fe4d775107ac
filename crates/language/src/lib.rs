//! Linguistic value types
//!
//! - WordText: the written form of a word, or a template placeholder
//! - SignModality / Sign: a word in a modality (`spoken:dog`)
//! - PosTag: free-form part-of-speech tag
//! - TreebankPosTag: Penn Treebank tag set
//! - UniversalPosTag: Universal Dependencies UPOS tag set

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod pos_tag;
pub mod sign;
pub mod sign_modality;
pub mod treebank_pos_tag;
pub mod universal_pos_tag;
pub mod word_text;

pub use pos_tag::{PosTag, MAX_POS_TAG_LENGTH};
pub use sign::Sign;
pub use sign_modality::SignModality;
pub use treebank_pos_tag::TreebankPosTag;
pub use universal_pos_tag::UniversalPosTag;
pub use word_text::{WordText, MAX_WORD_LENGTH};
