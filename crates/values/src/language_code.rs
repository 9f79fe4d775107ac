//! ISO 639-1 language codes
//!
//! Two-letter codes for the officially assigned languages. Parsing is
//! case-insensitive; the canonical form is lowercase (`"en"`, `"de"`).

use valuekit_core::closed_value_type;

/// Number of officially assigned ISO 639-1 codes
pub const LANGUAGE_CODE_COUNT: usize = 183;

closed_value_type! {
    /// An ISO 639-1 alpha-2 language code
    ///
    /// The default value is uninitialized.
    pub struct LanguageCode {
        max_length: 2,
        fold_case: true,
        /// Afar
        AA = "aa",
        /// Abkhazian
        AB = "ab",
        /// Avestan
        AE = "ae",
        /// Afrikaans
        AF = "af",
        /// Akan
        AK = "ak",
        /// Amharic
        AM = "am",
        /// Aragonese
        AN = "an",
        /// Arabic
        AR = "ar",
        /// Assamese
        AS = "as",
        /// Avaric
        AV = "av",
        /// Aymara
        AY = "ay",
        /// Azerbaijani
        AZ = "az",
        /// Bashkir
        BA = "ba",
        /// Belarusian
        BE = "be",
        /// Bulgarian
        BG = "bg",
        /// Bislama
        BI = "bi",
        /// Bambara
        BM = "bm",
        /// Bengali
        BN = "bn",
        /// Tibetan
        BO = "bo",
        /// Breton
        BR = "br",
        /// Bosnian
        BS = "bs",
        /// Catalan
        CA = "ca",
        /// Chechen
        CE = "ce",
        /// Chamorro
        CH = "ch",
        /// Corsican
        CO = "co",
        /// Cree
        CR = "cr",
        /// Czech
        CS = "cs",
        /// Church Slavic
        CU = "cu",
        /// Chuvash
        CV = "cv",
        /// Welsh
        CY = "cy",
        /// Danish
        DA = "da",
        /// German
        DE = "de",
        /// Divehi
        DV = "dv",
        /// Dzongkha
        DZ = "dz",
        /// Ewe
        EE = "ee",
        /// Greek
        EL = "el",
        /// English
        EN = "en",
        /// Esperanto
        EO = "eo",
        /// Spanish
        ES = "es",
        /// Estonian
        ET = "et",
        /// Basque
        EU = "eu",
        /// Persian
        FA = "fa",
        /// Fulah
        FF = "ff",
        /// Finnish
        FI = "fi",
        /// Fijian
        FJ = "fj",
        /// Faroese
        FO = "fo",
        /// French
        FR = "fr",
        /// Western Frisian
        FY = "fy",
        /// Irish
        GA = "ga",
        /// Gaelic
        GD = "gd",
        /// Galician
        GL = "gl",
        /// Guarani
        GN = "gn",
        /// Gujarati
        GU = "gu",
        /// Manx
        GV = "gv",
        /// Hausa
        HA = "ha",
        /// Hebrew
        HE = "he",
        /// Hindi
        HI = "hi",
        /// Hiri Motu
        HO = "ho",
        /// Croatian
        HR = "hr",
        /// Haitian
        HT = "ht",
        /// Hungarian
        HU = "hu",
        /// Armenian
        HY = "hy",
        /// Herero
        HZ = "hz",
        /// Interlingua
        IA = "ia",
        /// Indonesian
        ID = "id",
        /// Interlingue
        IE = "ie",
        /// Igbo
        IG = "ig",
        /// Sichuan Yi
        II = "ii",
        /// Inupiaq
        IK = "ik",
        /// Ido
        IO = "io",
        /// Icelandic
        IS = "is",
        /// Italian
        IT = "it",
        /// Inuktitut
        IU = "iu",
        /// Japanese
        JA = "ja",
        /// Javanese
        JV = "jv",
        /// Georgian
        KA = "ka",
        /// Kongo
        KG = "kg",
        /// Kikuyu
        KI = "ki",
        /// Kuanyama
        KJ = "kj",
        /// Kazakh
        KK = "kk",
        /// Kalaallisut
        KL = "kl",
        /// Central Khmer
        KM = "km",
        /// Kannada
        KN = "kn",
        /// Korean
        KO = "ko",
        /// Kanuri
        KR = "kr",
        /// Kashmiri
        KS = "ks",
        /// Kurdish
        KU = "ku",
        /// Komi
        KV = "kv",
        /// Cornish
        KW = "kw",
        /// Kirghiz
        KY = "ky",
        /// Latin
        LA = "la",
        /// Luxembourgish
        LB = "lb",
        /// Ganda
        LG = "lg",
        /// Limburgan
        LI = "li",
        /// Lingala
        LN = "ln",
        /// Lao
        LO = "lo",
        /// Lithuanian
        LT = "lt",
        /// Luba-Katanga
        LU = "lu",
        /// Latvian
        LV = "lv",
        /// Malagasy
        MG = "mg",
        /// Marshallese
        MH = "mh",
        /// Maori
        MI = "mi",
        /// Macedonian
        MK = "mk",
        /// Malayalam
        ML = "ml",
        /// Mongolian
        MN = "mn",
        /// Marathi
        MR = "mr",
        /// Malay
        MS = "ms",
        /// Maltese
        MT = "mt",
        /// Burmese
        MY = "my",
        /// Nauru
        NA = "na",
        /// Norwegian Bokmal
        NB = "nb",
        /// North Ndebele
        ND = "nd",
        /// Nepali
        NE = "ne",
        /// Ndonga
        NG = "ng",
        /// Dutch
        NL = "nl",
        /// Norwegian Nynorsk
        NN = "nn",
        /// Norwegian
        NO = "no",
        /// South Ndebele
        NR = "nr",
        /// Navajo
        NV = "nv",
        /// Chichewa
        NY = "ny",
        /// Occitan
        OC = "oc",
        /// Ojibwa
        OJ = "oj",
        /// Oromo
        OM = "om",
        /// Oriya
        OR = "or",
        /// Ossetian
        OS = "os",
        /// Punjabi
        PA = "pa",
        /// Pali
        PI = "pi",
        /// Polish
        PL = "pl",
        /// Pashto
        PS = "ps",
        /// Portuguese
        PT = "pt",
        /// Quechua
        QU = "qu",
        /// Romansh
        RM = "rm",
        /// Rundi
        RN = "rn",
        /// Romanian
        RO = "ro",
        /// Russian
        RU = "ru",
        /// Kinyarwanda
        RW = "rw",
        /// Sanskrit
        SA = "sa",
        /// Sardinian
        SC = "sc",
        /// Sindhi
        SD = "sd",
        /// Northern Sami
        SE = "se",
        /// Sango
        SG = "sg",
        /// Sinhala
        SI = "si",
        /// Slovak
        SK = "sk",
        /// Slovenian
        SL = "sl",
        /// Samoan
        SM = "sm",
        /// Shona
        SN = "sn",
        /// Somali
        SO = "so",
        /// Albanian
        SQ = "sq",
        /// Serbian
        SR = "sr",
        /// Swati
        SS = "ss",
        /// Southern Sotho
        ST = "st",
        /// Sundanese
        SU = "su",
        /// Swedish
        SV = "sv",
        /// Swahili
        SW = "sw",
        /// Tamil
        TA = "ta",
        /// Telugu
        TE = "te",
        /// Tajik
        TG = "tg",
        /// Thai
        TH = "th",
        /// Tigrinya
        TI = "ti",
        /// Turkmen
        TK = "tk",
        /// Tagalog
        TL = "tl",
        /// Tswana
        TN = "tn",
        /// Tonga
        TO = "to",
        /// Turkish
        TR = "tr",
        /// Tsonga
        TS = "ts",
        /// Tatar
        TT = "tt",
        /// Twi
        TW = "tw",
        /// Tahitian
        TY = "ty",
        /// Uighur
        UG = "ug",
        /// Ukrainian
        UK = "uk",
        /// Urdu
        UR = "ur",
        /// Uzbek
        UZ = "uz",
        /// Venda
        VE = "ve",
        /// Vietnamese
        VI = "vi",
        /// Volapuk
        VO = "vo",
        /// Walloon
        WA = "wa",
        /// Wolof
        WO = "wo",
        /// Xhosa
        XH = "xh",
        /// Yiddish
        YI = "yi",
        /// Yoruba
        YO = "yo",
        /// Zhuang
        ZA = "za",
        /// Chinese
        ZH = "zh",
        /// Zulu
        ZU = "zu",
    }
}
