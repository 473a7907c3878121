//! Static rule tables.
//!
//! Ordered tables are slices: callers take the first entry whose pattern
//! matches, so entry order is behaviour. Exact-key tables are `phf` maps
//! built at compile time.

use once_cell::sync::Lazy;
use phf::phf_map;

/// Verb prefixes, tried in order. `mi` must come after `nemi` and `bemi`.
pub static VERB_PREFIXES: &[(&str, &str)] = &[
    ("nemi", "نمی"),
    ("bemi", "بمی"),
    ("mi", "می"),
    ("be", "ب"),
    ("na", "ن"),
    ("bo", "ب"),
    ("bi", "بی"),
];

/// Imperative / subjunctive markers.
pub static IMPERATIVE_MARKERS: &[(&str, &str)] = &[("be", "ب"), ("bo", "ب"), ("na", "ن")];

/// Present tense person endings.
pub static PRESENT_SUFFIXES: &[(&str, &str)] = &[
    ("am", "م"),
    ("im", "یم"),
    ("in", "ین"),
    ("id", "ید"),
    ("i", "ی"),
    ("e", "ه"),
    ("eh", "ه"),
    ("an", "ن"),
    ("and", "ند"),
];

/// Past tense person endings.
pub static PAST_SUFFIXES: &[(&str, &str)] = &[
    ("am", "م"),
    ("im", "یم"),
    ("id", "ید"),
    ("in", "ین"),
    ("i", "ی"),
    ("and", "ند"),
    ("an", "ن"),
];

/// Endings that make a bare word look like a conjugated verb.
pub static PERSON_ENDINGS: &[&str] = &["am", "im", "id", "i", "e", "and", "an"];

/// Substrings that mark a word as past tense. Over-triggers on nouns.
pub static PAST_MARKERS: &[&str] = &["id", "ad", "od", "ast", "esht", "aft", "ord", "urd"];

/// Noun and adjective suffixes: plural, ezafe, comparative, possessive.
pub static NOUN_SUFFIXES: &[(&str, &str)] = &[
    ("haye", "های"),
    ("haaye", "های"),
    ("hayee", "هایی"),
    ("haa", "ها"),
    ("ha", "ها"),
    ("ye", "ی"),
    ("iye", "یه"),
    ("aye", "ای"),
    ("ee", "ی"),
    ("tar", "تر"),
    ("tarin", "ترین"),
    ("esh", "ش"),
    ("ash", "ش"),
    ("eshun", "شون"),
    ("ashun", "شون"),
    ("eman", "مان"),
    ("etan", "تان"),
    ("eshan", "شان"),
    ("emun", "مون"),
    ("etun", "تون"),
    ("am", "م"),
    ("at", "ت"),
    ("i", "ی"),
];

/// Present stems, plus a few nouns and infinitives that behave like stems.
///
/// No one-letter stems: "a" or "g" would match inside almost every word,
/// marking it as a verb and blocking noun-suffix stripping.
pub static PRESENT_STEMS: phf::Map<&'static str, &'static str> = phf_map! {

    // motion & movement
    "rav" => "رو",
    "ro" => "رو",
    "boro" => "رو",
    "ay" => "آی",
    "ya" => "یا",
    "bia" => "بیا",
    "bar" => "بر",
    "bor" => "بر",
    "pas" => "پس",
    "pasand" => "پسند",
    "gard" => "گرد",
    "oft" => "افت",
    "riz" => "ریز",
    "par" => "پر",
    "kiz" => "خیز",
    "khiz" => "خیز",
    "dav" => "دو",
    "dow" => "دو",
    "rand" => "راند",
    "ran" => "ران",

    // perception & cognition
    "bin" => "بین",
    "binad" => "بیند",
    "sheno" => "شنو",
    "shenav" => "شنو",
    "fahm" => "فهم",
    "dan" => "دان",
    "dun" => "دون",
    "don" => "دون",
    "fekr" => "فکر",
    "andish" => "اندیش",
    "yad" => "یاد",
    "yadgir" => "یادگیر",
    "shenas" => "شناس",

    // communication
    "gu" => "گو",
    "go" => "گو",
    "goo" => "گو",
    "khun" => "خون",
    "khan" => "خوان",
    "nevis" => "نویس",
    "nevisand" => "نویسند",
    "pors" => "پرس",
    "neshun" => "نشون",
    "neshan" => "نشان",
    "gush" => "گوش",

    // eating & drinking
    "khor" => "خور",
    "nush" => "نوش",
    "noosh" => "نوش",
    "paz" => "پز",
    "pazi" => "پزی",
    "chesh" => "چش",

    // handling & manipulation
    "kon" => "کن",
    "kar" => "کار",
    "kun" => "کن",
    "zan" => "زن",
    "gir" => "گیر",
    "gozar" => "گذار",
    "zar" => "ذار",
    "dar" => "دار",
    "daram" => "دارم",
    "de" => "ده",
    "deh" => "ده",
    "dadan" => "دادن",
    "kha" => "خوا",
    "band" => "بند",
    "chasb" => "چسب",
    "chasband" => "چسباند",
    "kash" => "کش",
    "feshar" => "فشار",
    "lez" => "لیز",
    "laghz" => "لغز",
    "tekun" => "تکون",
    "tekan" => "تکان",

    // being & becoming
    "sh" => "ش",
    "sho" => "شو",
    "shav" => "شو",
    "shodan" => "شدن",
    "bash" => "باش",
    "budan" => "بودن",
    "hast" => "هست",
    "nist" => "نیست",
    "ast" => "است",
    "mun" => "مون",
    "man" => "مان",
    "zist" => "زیست",
    "zindegi" => "زندگی",

    // ability & permission
    "tun" => "تون",
    "ton" => "تون",
    "tavan" => "توان",

    // sleep & rest
    "khab" => "خواب",
    "bidari" => "بیداری",
    "bidar" => "بیدار",
    "neshin" => "نشین",
    "shin" => "شین",
    "ist" => "ایست",
    "vaist" => "وایست",

    // emotions
    "tars" => "ترس",
    "gerye" => "گریه",
    "geri" => "گری",
    "ashegh" => "عاشق",
    "eshgh" => "عشق",
    "dard" => "درد",
    "kesh" => "کش",
    "khosh" => "خوش",
    "khoshhalam" => "خوشحالم",
    "narahat" => "ناراحت",
    "ajab" => "عجب",

    // work & production
    "saz" => "ساز",
    "kand" => "کند",
    "kandeh" => "کنده",
    "afarin" => "آفرین",
    "parvand" => "پرورد",
    "parvar" => "پرور",
    "gar" => "گر",
    "gari" => "گری",

    // opening & closing
    "baz" => "باز",
    "bastan" => "بستن",
    "bastand" => "بستند",
    "vaz" => "واز",

    // cleaning & appearance
    "shor" => "شور",
    "shuy" => "شوی",
    "pak" => "پاک",
    "pakkon" => "پاک‌کن",
    "range" => "رنگ",
    "rangkon" => "رنگ‌کن",
    "posh" => "پوش",
    "push" => "پوش",

    // searching & finding
    "gardesh" => "گردش",
    "juy" => "جو",
    "joy" => "جوی",
    "yab" => "یاب",
    "peyda" => "پیدا",

    // sending & receiving
    "ferest" => "فرست",
    "res" => "رس",
    "ras" => "رس",

    // living & life
    "zindigii" => "زندگی",
    "mir" => "میر",
    "mur" => "مور",
    "kosh" => "کش",

    // speaking
    "guy" => "گوی",
    "guftan" => "گفتن",
    "harf" => "حرف",
    "harfzan" => "حرف‌زن",
    "sohbat" => "صحبت",
    "sadaa" => "صدا",
    "seda" => "صدا",

    // colloquial stems
    "pich" => "پیچ",
    "pichund" => "پیچوند",
    "chin" => "چین",
    "kub" => "کوب",
    "doz" => "دوز",
    "kes" => "کس",
    "vel" => "ول",
    "volkon" => "ول‌کن",
    "doon" => "دون",
    "toon" => "تون",
};

/// Past stems. A word starting with one of these is treated as past tense.
pub static PAST_STEMS: phf::Map<&'static str, &'static str> = phf_map! {
    "omad" => "اومد",
    "raft" => "رفت",
    "amad" => "آمد",
    "bord" => "برد",
    "gardid" => "گردید",
    "gasht" => "گشت",
    "oftad" => "افتاد",
    "parid" => "پرید",
    "david" => "دوید",
    "did" => "دید",
    "shenid" => "شنید",
    "fahmid" => "فهمید",
    "danest" => "دانست",
    "andishid" => "اندیشید",
    "shenakh" => "شناخت",
    "goft" => "گفت",
    "khund" => "خوند",
    "khand" => "خواند",
    "nevesht" => "نوشت",
    "porsid" => "پرسید",
    "neshundad" => "نشونداد",
    "gushid" => "گوشید",
    "khord" => "خورد",
    "nushid" => "نوشید",
    "pokht" => "پخت",
    "cheshid" => "چشید",
    "kard" => "کرد",
    "zad" => "زد",
    "gereft" => "گرفت",
    "greft" => "گرفت",
    "gozasht" => "گذاشت",
    "zasht" => "ذاشت",
    "dasht" => "داشت",
    "dad" => "داد",
    "khast" => "خواست",
    "bast" => "بست",
    "chasbid" => "چسبید",
    "kashid" => "کشید",
    "feshord" => "فشرد",
    "laghzid" => "لغزید",
    "shod" => "شد",
    "bud" => "بود",
    "bood" => "بود",
    "mund" => "موند",
    "mand" => "ماند",
    "tunesht" => "تونست",
    "tavanest" => "توانست",
    "khabid" => "خوابید",
    "khoft" => "خفت",
    "neshast" => "نشست",
    "istad" => "ایستاد",
    "tarsid" => "ترسید",
    "khandid" => "خندید",
    "gerist" => "گریست",
    "sakht" => "ساخت",
    "barid" => "بارید",
    "afarid" => "آفرید",
    "shost" => "شست",
    "pushid" => "پوشید",
    "jost" => "جست",
    "yaft" => "یافت",
    "ferestad" => "فرستاد",
    "rasid" => "رسید",
    "mord" => "مرد",
    "kushit" => "کشت",
    "pichid" => "پیچید",
    "chid" => "چید",
    "kubid" => "کوبید",
    "borid" => "برید",
    "burid" => "برید",
    "dukht" => "دوخت",
    "dookht" => "دوخت",
    "kesid" => "کسید",
};

/// Every present and past stem key, sorted, for substring scans.
pub static VERB_STEM_KEYS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    let mut keys: Vec<&'static str> = PRESENT_STEMS
        .keys()
        .chain(PAST_STEMS.keys())
        .copied()
        .collect();
    keys.sort_unstable();
    keys.dedup();
    keys
});

/// Compound words as `(first, second, farsi)`. Matched in order.
pub static COMPOUND_PARTS: &[(&str, &str, &str)] = &[
    // question words
    ("che", "tor", "چطور"),
    ("che", "tori", "چطوری"),
    ("che", "gune", "چگونه"),
    ("che", "goneh", "چگونه"),
    ("chi", "kar", "چیکار"),
    ("che", "kar", "چکار"),
    ("ko", "ja", "کجا"),
    ("ko", "jast", "کجاست"),
    ("ki", "ja", "کی"),
    ("che", "ra", "چرا"),
    ("che", "ghad", "چقدر"),
    ("che", "ghadr", "چقدر"),
    // nouns
    ("kho", "daa", "خدا"),
    ("kho", "da", "خدا"),
    ("ha", "me", "همه"),
    ("hame", "chi", "همه‌چی"),
    ("ham", "in", "همین"),
    ("ham", "un", "همون"),
    ("ham", "on", "همون"),
    ("ham", "inja", "همینجا"),
    ("ham", "unja", "همونجا"),
    // time
    ("em", "ruz", "امروز"),
    ("em", "rooz", "امروز"),
    ("em", "shab", "امشب"),
    ("far", "da", "فردا"),
    ("di", "ruz", "دیروز"),
    ("di", "rooz", "دیروز"),
    ("pari", "ruz", "پریروز"),
    ("pas", "farda", "پس‌فردا"),
    ("sob", "haa", "صبحا"),
    ("shab", "haa", "شبا"),
    ("ye", "dafe", "یه‌دفعه"),
    ("yek", "dafe", "یکدفعه"),
    ("dobare", "h", "دوباره"),
    ("har", "ruz", "هرروز"),
    ("har", "shab", "هرشب"),
    ("har", "ja", "هرجا"),
    ("har", "ki", "هرکی"),
    ("har", "chi", "هرچی"),
    ("har", "chand", "هرچند"),
    // demonstratives
    ("in", "ja", "اینجا"),
    ("un", "ja", "اونجا"),
    ("oo", "n", "اون"),
    ("ii", "n", "این"),
    ("in", "ha", "اینها"),
    ("un", "ha", "اونها"),
    ("in", "tor", "اینطور"),
    ("un", "tor", "اونطور"),
    ("in", "joori", "اینجوری"),
    ("un", "joori", "اونجوری"),
    // verbs with a half-space
    ("mi", "kham", "می‌خوام"),
    ("mi", "ram", "می‌رم"),
    ("ne", "mi", "نمی"),
    ("be", "zan", "بزن"),
    // family
    ("pesar", "am", "پسرم"),
    ("dokhtar", "am", "دخترم"),
    ("madar", "am", "مادرم"),
    ("pedar", "am", "پدرم"),
    ("khaharam", "", "خواهرم"),
    ("baradaram", "", "برادرم"),
    // expressions
    ("kho", "sh", "خوش"),
    ("kho", "b", "خوب"),
    ("be", "htarin", "بهترین"),
    ("bad", "tarin", "بدترین"),
    ("bi", "shtar", "بیشتر"),
    ("kam", "tar", "کمتر"),
    ("asan", "tar", "آسان‌تر"),
    ("sakht", "tar", "سخت‌تر"),
    // location
    ("bir", "un", "بیرون"),
    ("tu", "ye", "توی"),
    ("da", "khel", "داخل"),
    ("ba", "la", "بالا"),
    ("paa", "yin", "پایین"),
    ("ru", "ye", "روی"),
    ("zi", "re", "زیر"),
    ("po", "shte", "پشت"),
    ("ja", "lo", "جلو"),
    ("kan", "ar", "کنار"),
];

/// High-frequency verbs as `(colloquial, formal, farsi)`. Either Latin
/// spelling produces the colloquial Farsi form.
pub static COLLOQUIAL_FORMS: &[(&str, &str, &str)] = &[
    ("mikham", "mikhaham", "می‌خوام"),
    ("nemikham", "nemikhaham", "نمی‌خوام"),
    ("miram", "miravam", "می‌رم"),
    ("nemiram", "nemiravam", "نمی‌رم"),
    ("miam", "miayam", "میام"),
    ("migam", "miguyam", "می‌گم"),
    ("nemigam", "nemiguyam", "نمی‌گم"),
    ("midoonam", "midanam", "می‌دونم"),
    ("nemidoonam", "nemidanam", "نمی‌دونم"),
    ("mitoonam", "mitavanam", "می‌تونم"),
    ("nemitoonam", "nemitavanam", "نمی‌تونم"),
    ("mikonam", "mikonam", "می‌کنم"),
    ("misham", "mishavam", "می‌شم"),
    ("mibinam", "mibinam", "می‌بینم"),
    ("mishnevam", "mishenavam", "می‌شنوم"),
];

/// Loanword endings, tried in order.
pub static LOANWORD_ENDINGS: &[(&str, &str)] = &[
    ("tion", "شن"),
    ("sion", "ژن"),
    ("ism", "یسم"),
    ("ist", "یست"),
    ("ity", "یتی"),
    ("ness", "نس"),
    ("ment", "منت"),
    ("able", "یبل"),
    ("ible", "یبل"),
];

/// Digraphs and trigraphs. Scanning tries a 3-char window, then a 2-char one,
/// and takes the first entry equal to that window.
pub static MULTI_CHAR: &[(&str, &str)] = &[
    ("sch", "ش"),
    ("tch", "چ"),
    ("kh", "خ"),
    ("ch", "چ"),
    ("sh", "ش"),
    ("zh", "ژ"),
    ("gh", "غ"),
    ("ph", "ف"),
    ("th", "ت"),
    ("aa", "ا"),
    ("oo", "و"),
    ("ee", "ی"),
    ("ou", "و"),
    ("ei", "ی"),
    ("ey", "ی"),
    ("ay", "ای"),
    ("ai", "ای"),
    ("ao", "او"),
    ("ow", "و"),
    ("ie", "یه"),
];

/// Look up a multi-character window.
pub fn multi_char(window: &str) -> Option<&'static str> {
    MULTI_CHAR
        .iter()
        .find(|(pattern, _)| *pattern == window)
        .map(|(_, farsi)| *farsi)
}

/// Vowel renderings by position in the word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Positional {
    pub start: &'static str,
    pub middle: &'static str,
    pub end: &'static str,
    pub standalone: &'static str,
}

const fn pos(
    start: &'static str,
    middle: &'static str,
    end: &'static str,
    standalone: &'static str,
) -> Positional {
    Positional {
        start,
        middle,
        end,
        standalone,
    }
}

// The middle forms of e and o are bare diacritics; cleanup strips them.
static VOWEL_A: Positional = pos("آ", "ا", "ه", "ا");
static VOWEL_E: Positional = pos("ا", "\u{0650}", "ه", "ه");
static VOWEL_O: Positional = pos("ا", "\u{064F}", "و", "و");
static VOWEL_I: Positional = pos("ای", "ی", "ی", "ی");
static VOWEL_U: Positional = pos("او", "و", "و", "و");

pub fn positional(c: char) -> Option<&'static Positional> {
    match c {
        'a' => Some(&VOWEL_A),
        'e' => Some(&VOWEL_E),
        'o' => Some(&VOWEL_O),
        'i' => Some(&VOWEL_I),
        'u' => Some(&VOWEL_U),
        _ => None,
    }
}

pub fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Any letter that is not one of the five vowels, `y` included.
pub fn is_consonant(c: char) -> bool {
    c.is_alphabetic() && !is_vowel(c)
}

pub static CONSONANTS: phf::Map<char, &'static str> = phf_map! {
    'b' => "ب",
    'p' => "پ",
    't' => "ت",
    's' => "س",
    'j' => "ج",
    'd' => "د",
    'r' => "ر",
    'z' => "ز",
    'f' => "ف",
    'q' => "ق",
    'k' => "ک",
    'g' => "گ",
    'l' => "ل",
    'm' => "م",
    'n' => "ن",
    'v' => "و",
    'w' => "و",
    'h' => "ه",
    'y' => "ی",
    'x' => "خ",
    'c' => "ک",
    '\'' => "ع",
};

/// Letters with more than one plausible Farsi rendering, in the order the
/// variant generator visits them.
pub static AMBIGUOUS_LETTERS: &[(char, &[&str])] = &[
    ('a', &["ا", "آ", "ع", "ه"]),
    ('e', &["ه", "ی", "ع", "ا"]),
    ('o', &["و", "ا"]),
    ('s', &["س", "ص", "ث"]),
    ('z', &["ز", "ض", "ظ", "ذ"]),
    ('t', &["ت", "ط"]),
    ('h', &["ه", "ح"]),
    ('g', &["گ", "غ"]),
    ('c', &["ک", "س"]),
];

pub static PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

/// Persian numeral for an ASCII digit.
pub fn persian_digit(c: char) -> Option<char> {
    c.to_digit(10).map(|d| PERSIAN_DIGITS[d as usize])
}

/// Common misspellings and chat abbreviations -> canonical Finglish.
pub static TYPO_CORRECTIONS: phf::Map<&'static str, &'static str> = phf_map! {

    // greetings
    "slm" => "salam",
    "slaam" => "salam",
    "salma" => "salam",
    "slaaam" => "salam",
    "salm" => "salam",
    "slam" => "salam",
    "mrc" => "merci",
    "mrsi" => "mersi",
    "mers" => "mersi",
    "merc" => "merci",
    "mersy" => "mersi",
    "mercy" => "merci",
    "marsi" => "mersi",
    "mmnon" => "mamnoon",
    "mamnon" => "mamnoon",
    "mamno" => "mamnoon",
    "mamnun" => "mamnoon",
    "mamnu" => "mamnoon",
    "mamnoun" => "mamnoon",
    "khdahfz" => "khodahafez",
    "khdhfz" => "khodahafez",
    "khodaafez" => "khodahafez",
    "khdafez" => "khodahafez",
    "khodahfez" => "khodahafez",
    "khodahaez" => "khodahafez",
    "bbkhshid" => "bebakhshid",
    "bebkhshid" => "bebakhshid",
    "bebakhshd" => "bebakhshid",
    "bebbakhshid" => "bebakhshid",
    "bbakhshid" => "bebakhshid",
    "tshkr" => "tashakor",
    "tashkor" => "tashakor",
    "tashakr" => "tashakor",
    "tashakkor" => "tashakor",
    "tshakur" => "tashakor",
    "lotfn" => "lotfan",
    "ltfan" => "lotfan",
    "lotfa" => "lotfan",
    "loftan" => "lotfan",
    "ltfa" => "lotfan",

    // questions
    "chetri" => "chetori",
    "chtori" => "chetori",
    "chetory" => "chetori",
    "chetooori" => "chetori",
    "chtoori" => "chetori",
    "chetoor" => "chetor",
    "chtoor" => "chetor",
    "chtory" => "chetori",
    "khbi" => "khobi",
    "khoobi" => "khobi",
    "khub" => "khob",
    "khb" => "khob",
    "khoob" => "khob",
    "chra" => "chera",
    "cheraaa" => "chera",
    "chr" => "chera",
    "keii" => "key",
    "kii" => "key",
    "kay" => "key",
    "koj" => "koja",
    "kojaaa" => "koja",
    "kji" => "koji",
    "chii" => "chi",
    "chiii" => "chi",
    "chishe" => "chisheh",
    "kiist" => "kist",
    "kiaa" => "kia",

    // common verbs - present
    "mikahm" => "mikham",
    "mikhm" => "mikham",
    "mkhm" => "mikham",
    "mikha" => "mikham",
    "mikhaam" => "mikham",
    "mirm" => "miram",
    "miraam" => "miram",
    "mknm" => "mikonam",
    "miknam" => "mikonam",
    "mikonm" => "mikonam",
    "mkunam" => "mikonam",
    "mkonm" => "mikonam",
    "midunm" => "midoonam",
    "midunam" => "midoonam",
    "midnom" => "midoonam",
    "midoonm" => "midoonam",
    "mdoonam" => "midoonam",
    "mtunm" => "mitoonam",
    "mtnm" => "mitoonam",
    "mitunam" => "mitoonam",
    "mitoonm" => "mitoonam",
    "mtoonam" => "mitoonam",
    "miyam" => "miam",
    "miyaam" => "miam",
    "myam" => "miam",
    "miaam" => "miam",
    "migm" => "migam",
    "mygam" => "migam",
    "mibinm" => "mibinam",
    "mibinaam" => "mibinam",
    "mishnvam" => "mishnevam",
    "mishnavm" => "mishnevam",
    "mifhmm" => "mifahmam",
    "mifahmm" => "mifahmam",
    "mikhorm" => "mikhoram",
    "mkhoram" => "mikhoram",
    "minvisam" => "minevisam",
    "minvisaam" => "minevisam",
    "migirm" => "migiram",
    "miresm" => "miresam",
    "mishm" => "misham",
    "mishaam" => "misham",

    // common verbs - past
    "raftm" => "raftam",
    "rafta" => "raftam",
    "rftam" => "raftam",
    "omadm" => "omadam",
    "oomadm" => "omadam",
    "amaadm" => "amadam",
    "krdm" => "kardam",
    "karda" => "kardam",
    "krdam" => "kardam",
    "gftm" => "goftam",
    "gooftam" => "goftam",
    "goftm" => "goftam",
    "diidm" => "didam",
    "didaam" => "didam",
    "deedm" => "didam",
    "khordm" => "khordam",
    "khurdam" => "khordam",
    "shndidm" => "shenidam",
    "sheniidm" => "shenidam",
    "fahmiidm" => "fahmidam",
    "fahmidm" => "fahmidam",
    "grftm" => "gereftam",
    "gereftm" => "gereftam",
    "griftam" => "gereftam",
    "nevshtm" => "neveshtam",
    "neveshta" => "neveshtam",
    "rsidm" => "residam",
    "residm" => "residam",
    "shodm" => "shodam",
    "shudm" => "shodam",
    "shdm" => "shodam",
    "mundom" => "mundam",
    "mandom" => "mandam",

    // common verbs - negative
    "nmidunam" => "nemidoonam",
    "nmidunm" => "nemidoonam",
    "nemidonam" => "nemidoonam",
    "nmidoonam" => "nemidoonam",
    "nemidunm" => "nemidoonam",
    "nmitunm" => "nemitoonam",
    "nemitunm" => "nemitoonam",
    "nemitnam" => "nemitoonam",
    "nmitoonam" => "nemitoonam",
    "nmiram" => "nemiram",
    "nemiraam" => "nemiram",
    "nmirm" => "nemiram",
    "nmikham" => "nemikham",
    "nemikhaam" => "nemikham",
    "nmkhm" => "nemikham",
    "nmikonm" => "nemikonam",
    "nemikonm" => "nemikonam",
    "nmigam" => "nemigam",
    "nemigaam" => "nemigam",
    "nmibinam" => "nemibinam",
    "nemibinm" => "nemibinam",
    "nmishm" => "nemisham",
    "nemishaam" => "nemisham",

    // common words
    "inj" => "inja",
    "injaa" => "inja",
    "unjaa" => "unja",
    "unj" => "unja",
    "onja" => "unja",
    "alaan" => "alan",
    "aln" => "alan",
    "farad" => "farda",
    "fardaa" => "farda",
    "frda" => "farda",
    "diiruz" => "diruz",
    "diroz" => "diruz",
    "druz" => "diruz",
    "imruz" => "emruz",
    "emrooz" => "emruz",
    "imrooz" => "emruz",
    "insha" => "inshallah",
    "inshaallah" => "inshallah",
    "inshala" => "inshallah",
    "mashaalla" => "mashallah",
    "mashaallah" => "mashallah",
    "yarb" => "yarabb",
    "yarab" => "yarabb",
    "yaraab" => "yarabb",
    "khudaam" => "khodam",
    "khdam" => "khodam",
    "oonaa" => "oona",
    "unaa" => "oona",
    "inaa" => "ina",
    "inhaa" => "inha",
    "khane" => "khaneh",
    "khoone" => "khuneh",
    "ketaab" => "ketab",
    "ktab" => "ketab",
    "kitab" => "ketab",
    "madrse" => "madrese",
    "madrseh" => "madrese",
    "madreseh" => "madrese",

    // adjectives
    "khoshgl" => "khoshgel",
    "khoshgeel" => "khoshgel",
    "khoshgol" => "khoshgel",
    "ghashng" => "ghashang",
    "qashang" => "ghashang",
    "zaleem" => "zaalim",
    "zaalm" => "zaalim",
    "zalim" => "zaalim",
    "bade" => "bad",
    "badd" => "bad",
    "khube" => "khub",
    "khoobe" => "khub",
    "khob" => "khub",
    "aalie" => "aali",
    "aly" => "aali",
    "kucik" => "kuchik",
    "kuchek" => "kuchik",
    "koochik" => "kuchik",
    "bzrg" => "bozorg",
    "bozrg" => "bozorg",
    "bozarg" => "bozorg",
    "jadeed" => "jadid",
    "jdid" => "jadid",
    "qadim" => "ghadim",
    "ghadeem" => "ghadim",
    "qdim" => "ghadim",
    "raahat" => "rahat",
    "raht" => "rahat",
    "sakhtt" => "sakht",
    "skht" => "sakht",
    "asun" => "asoon",
    "asaan" => "asoon",
    "ason" => "asoon",

    // pronouns
    "mn" => "man",
    "maan" => "man",
    "too" => "to",
    "tou" => "to",
    "ooo" => "oo",
    "ou" => "oo",
    "un" => "oon",
    "maa" => "ma",
    "mah" => "ma",
    "shomaa" => "shoma",
    "shma" => "shoma",
    "unha" => "oona",
    "onhaa" => "oona",

    // numbers
    "yeki" => "yek",
    "yekk" => "yek",
    "doo" => "do",
    "dou" => "do",
    "sre" => "se",
    "seh" => "se",
    "chhar" => "chahar",
    "chaar" => "chahar",
    "4ta" => "chaharta",
    "pnj" => "panj",
    "shish" => "shesh",
    "haftt" => "haft",
    "haff" => "haft",
    "hasth" => "hasht",
    "nooh" => "noh",
    "nuh" => "noh",
    "dahh" => "dah",
    "deh" => "dah",

    // colloquial
    "bba" => "baba",
    "babaa" => "baba",
    "mma" => "mama",
    "mamaan" => "maman",
    "dadsh" => "dadash",
    "daadash" => "dadash",
    "dadaash" => "dadash",
    "abii" => "abi",
    "aabji" => "abji",
    "azizm" => "azizam",
    "aziizm" => "azizam",
    "azzzam" => "azizam",
    "jonm" => "jonam",
    "junam" => "jonam",
    "joonam" => "jonam",
    "dusset" => "duset",
    "dooset" => "duset",
    "doset" => "duset",
    "asheghtm" => "asheghetam",
    "ashegheetm" => "asheghetam",
    "delm" => "delam",
    "dlm" => "delam",
    "dellam" => "delam",
    "tangt" => "tangat",
    "tengit" => "tangit",
    "khstm" => "khastam",
    "bisho" => "besho",
    "bsho" => "besho",
    "bro" => "boro",
    "borro" => "boro",
    "biya" => "bia",
    "byia" => "bia",
    "biaa" => "bia",
    "bzar" => "bezar",
    "bozar" => "bezar",
    "nagoo" => "nagu",
    "nago" => "nagu",
    "ngu" => "nagu",
    "bbin" => "bebin",
    "bbiin" => "bebin",
    "chkar" => "chikar",
    "chikaar" => "chikar",
    "kojii" => "koji",
    "kojaayi" => "kojayi",
    "kojay" => "kojayi",
    "kosh" => "kojayi",

    // internet/text slang
    "tnx" => "mamnoon",
    "tx" => "mamnoon",
    "thx" => "mamnoon",
    "plz" => "lotfan",
    "pls" => "lotfan",
    "sry" => "bebakhshid",
    "sorry" => "bebakhshid",
    "np" => "khahesh",
    "nprob" => "khahesh mikonam",
    "omg" => "vaay",
    "vay" => "vaay",
    "vaaay" => "vaay",
    "lol" => "khandeh",
    "xd" => "khandeh",
    "k" => "ok",
    "kk" => "ok",
    "okk" => "ok",
    "hm" => "hmm",
    "hmmm" => "hmm",
    "ahaa" => "aha",
    "brb" => "miram miam",
    "bbl" => "baadan miam",
    "gtg" => "bayad beram",
    "g2g" => "bayad beram",
    "idk" => "nemidoonam",
    "dk" => "nemidoonam",
    "idc" => "baraam mohem nist",
    "tbh" => "rast begi",
    "btw" => "rasti",
    "ily" => "duset daram",
    "ilysm" => "kheyli duset daram",
    "asap" => "harchezotar",

    // common mistakes (keyboard adjacency)
    "sakam" => "salam",
    "mwrsi" => "mersi",
    "nersi" => "mersi",
    "khobu" => "khobi",
    "khonu" => "khobi",
    "chetoru" => "chetori",
    "chetoei" => "chetori",
    "mikhan" => "mikham",
    "mukhsm" => "mikham",
    "mukonam" => "mikonam",
    "mukinam" => "mikonam",
    "mudoonam" => "midoonam",
    "midoimam" => "midoonam",

    // religious phrases
    "alhamd" => "alhamdulillah",
    "alhamdolellah" => "alhamdulillah",
    "subhan" => "subhanallah",
    "sobhanallah" => "subhanallah",
    "astaghfr" => "astaghfurullah",
    "astaghfor" => "astaghfurullah",
    "bismilla" => "bismillah",
    "besmellah" => "bismillah",
    "jazak" => "jazakallah",
    "jazakalla" => "jazakallah",
    "aamiin" => "amin",
    "aameen" => "amin",
    "amiin" => "amin",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_order_prefers_longer_negation() {
        let first = VERB_PREFIXES
            .iter()
            .find(|(p, _)| "nemiram".starts_with(p))
            .map(|(_, f)| *f);
        assert_eq!(first, Some("نمی"));
    }

    #[test]
    fn test_stem_tables_are_disjoint() {
        for key in PAST_STEMS.keys() {
            assert!(!PRESENT_STEMS.contains_key(*key), "{key} in both tables");
        }
        assert_eq!(VERB_STEM_KEYS.len(), PRESENT_STEMS.len() + PAST_STEMS.len());
    }

    #[test]
    fn test_no_single_letter_stems() {
        for key in VERB_STEM_KEYS.iter() {
            assert!(key.chars().count() >= 2, "{key}");
        }
    }

    #[test]
    fn test_typo_table_has_no_identity_entries() {
        for (k, v) in TYPO_CORRECTIONS.entries() {
            assert_ne!(k, v);
        }
    }

    #[test]
    fn test_multi_char_lookup() {
        assert_eq!(multi_char("kh"), Some("خ"));
        assert_eq!(multi_char("sch"), Some("ش"));
        assert_eq!(multi_char("xy"), None);
    }

    #[test]
    fn test_persian_digit() {
        assert_eq!(persian_digit('0'), Some('۰'));
        assert_eq!(persian_digit('9'), Some('۹'));
        assert_eq!(persian_digit('a'), None);
        assert_eq!(persian_digit('٣'), None);
    }

    #[test]
    fn test_consonant_classification() {
        assert!(is_consonant('y'));
        assert!(is_consonant('k'));
        assert!(!is_consonant('a'));
        assert!(!is_consonant('\''));
        assert!(!is_consonant('3'));
    }
}
