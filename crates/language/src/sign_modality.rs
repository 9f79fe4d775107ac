//! Sign modality
//!
//! The channel through which a sign is expressed.

use valuekit_core::closed_value_type;

closed_value_type! {
    /// How a sign is produced or perceived
    ///
    /// The default value is uninitialized.
    pub struct SignModality {
        max_length: 7,
        fold_case: false,
        /// Speech
        SPOKEN = "spoken",
        /// Writing
        WRITTEN = "written",
        /// A manual sign from a sign language
        SIGNED = "signed",
        /// A graphic symbol
        SYMBOL = "symbol",
        /// A picture
        PICTURE = "picture",
    }
}
