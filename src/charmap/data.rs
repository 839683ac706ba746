//! Bundled transliteration table.
//!
//! Keys are single scalar values, values are plain ASCII. Both cases of every
//! cased letter are present, so lower-casing a slug never exposes a key that
//! would transliterate differently on a second pass.
use phf::{Map, phf_map};

pub static CHARMAP: Map<char, &'static str> = phf_map! {
    // Latin-1 Supplement
    'À' => "A", 'Á' => "A", 'Â' => "A", 'Ã' => "A",
    'Ä' => "A", 'Å' => "A", 'Æ' => "AE", 'Ç' => "C",
    'È' => "E", 'É' => "E", 'Ê' => "E", 'Ë' => "E",
    'Ì' => "I", 'Í' => "I", 'Î' => "I", 'Ï' => "I",
    'Ð' => "D", 'Ñ' => "N", 'Ò' => "O", 'Ó' => "O",
    'Ô' => "O", 'Õ' => "O", 'Ö' => "O", 'Ő' => "O",
    'Ø' => "O", 'Ù' => "U", 'Ú' => "U", 'Û' => "U",
    'Ü' => "U", 'Ű' => "U", 'Ý' => "Y", 'Þ' => "TH",
    'ß' => "ss", 'à' => "a", 'á' => "a", 'â' => "a",
    'ã' => "a", 'ä' => "a", 'å' => "a", 'æ' => "ae",
    'ç' => "c", 'è' => "e", 'é' => "e", 'ê' => "e",
    'ë' => "e", 'ì' => "i", 'í' => "i", 'î' => "i",
    'ï' => "i", 'ð' => "d", 'ñ' => "n", 'ò' => "o",
    'ó' => "o", 'ô' => "o", 'õ' => "o", 'ö' => "o",
    'ő' => "o", 'ø' => "o", 'ù' => "u", 'ú' => "u",
    'û' => "u", 'ü' => "u", 'ű' => "u", 'ý' => "y",
    'þ' => "th", 'ÿ' => "y", 'ẞ' => "SS",
    // Greek
    'α' => "a", 'β' => "b", 'γ' => "g", 'δ' => "d",
    'ε' => "e", 'ζ' => "z", 'η' => "h", 'θ' => "8",
    'ι' => "i", 'κ' => "k", 'λ' => "l", 'μ' => "m",
    'ν' => "n", 'ξ' => "3", 'ο' => "o", 'π' => "p",
    'ρ' => "r", 'σ' => "s", 'τ' => "t", 'υ' => "y",
    'φ' => "f", 'χ' => "x", 'ψ' => "ps", 'ω' => "w",
    'ά' => "a", 'έ' => "e", 'ί' => "i", 'ό' => "o",
    'ύ' => "y", 'ή' => "h", 'ώ' => "w", 'ς' => "s",
    'ϊ' => "i", 'ΰ' => "y", 'ϋ' => "y", 'ΐ' => "i",
    'Α' => "A", 'Β' => "B", 'Γ' => "G", 'Δ' => "D",
    'Ε' => "E", 'Ζ' => "Z", 'Η' => "H", 'Θ' => "8",
    'Ι' => "I", 'Κ' => "K", 'Λ' => "L", 'Μ' => "M",
    'Ν' => "N", 'Ξ' => "3", 'Ο' => "O", 'Π' => "P",
    'Ρ' => "R", 'Σ' => "S", 'Τ' => "T", 'Υ' => "Y",
    'Φ' => "F", 'Χ' => "X", 'Ψ' => "PS", 'Ω' => "W",
    'Ά' => "A", 'Έ' => "E", 'Ί' => "I", 'Ό' => "O",
    'Ύ' => "Y", 'Ή' => "H", 'Ώ' => "W", 'Ϊ' => "I",
    'Ϋ' => "Y",
    // Turkish
    'ş' => "s", 'Ş' => "S", 'ı' => "i", 'İ' => "I",
    'ğ' => "g", 'Ğ' => "G",
    // Russian
    'а' => "a", 'б' => "b", 'в' => "v", 'г' => "g",
    'д' => "d", 'е' => "e", 'ё' => "yo", 'ж' => "zh",
    'з' => "z", 'и' => "i", 'й' => "j", 'к' => "k",
    'л' => "l", 'м' => "m", 'н' => "n", 'о' => "o",
    'п' => "p", 'р' => "r", 'с' => "s", 'т' => "t",
    'у' => "u", 'ф' => "f", 'х' => "h", 'ц' => "c",
    'ч' => "ch", 'ш' => "sh", 'щ' => "sh", 'ъ' => "u",
    'ы' => "y", 'э' => "e", 'ю' => "yu", 'я' => "ya",
    'А' => "A", 'Б' => "B", 'В' => "V", 'Г' => "G",
    'Д' => "D", 'Е' => "E", 'Ё' => "Yo", 'Ж' => "Zh",
    'З' => "Z", 'И' => "I", 'Й' => "J", 'К' => "K",
    'Л' => "L", 'М' => "M", 'Н' => "N", 'О' => "O",
    'П' => "P", 'Р' => "R", 'С' => "S", 'Т' => "T",
    'У' => "U", 'Ф' => "F", 'Х' => "H", 'Ц' => "C",
    'Ч' => "Ch", 'Ш' => "Sh", 'Щ' => "Sh", 'Ъ' => "U",
    'Ы' => "Y", 'Э' => "E", 'Ю' => "Yu", 'Я' => "Ya",
    // Ukrainian
    'Є' => "Ye", 'І' => "I", 'Ї' => "Yi", 'Ґ' => "G",
    'є' => "ye", 'і' => "i", 'ї' => "yi", 'ґ' => "g",
    // Czech
    'č' => "c", 'ď' => "d", 'ě' => "e", 'ň' => "n",
    'ř' => "r", 'š' => "s", 'ť' => "t", 'ů' => "u",
    'ž' => "z", 'Č' => "C", 'Ď' => "D", 'Ě' => "E",
    'Ň' => "N", 'Ř' => "R", 'Š' => "S", 'Ť' => "T",
    'Ů' => "U", 'Ž' => "Z",
    // Slovak
    'ĺ' => "l", 'ľ' => "l", 'ŕ' => "r", 'Ĺ' => "L",
    'Ľ' => "L", 'Ŕ' => "R",
    // Polish
    'ą' => "a", 'ć' => "c", 'ę' => "e", 'ł' => "l",
    'ń' => "n", 'ś' => "s", 'ź' => "z", 'ż' => "z",
    'Ą' => "A", 'Ć' => "C", 'Ę' => "E", 'Ł' => "L",
    'Ń' => "N", 'Ś' => "S", 'Ź' => "Z", 'Ż' => "Z",
    // Latvian
    'ā' => "a", 'ē' => "e", 'ģ' => "g", 'ī' => "i",
    'ķ' => "k", 'ļ' => "l", 'ņ' => "n", 'ū' => "u",
    'Ā' => "A", 'Ē' => "E", 'Ģ' => "G", 'Ī' => "I",
    'Ķ' => "K", 'Ļ' => "L", 'Ņ' => "N", 'Ū' => "U",
    // Lithuanian
    'ė' => "e", 'į' => "i", 'ų' => "u", 'Ė' => "E",
    'Į' => "I", 'Ų' => "U",
    // Romanian
    'ă' => "a", 'ș' => "s", 'ț' => "t", 'Ă' => "A",
    'Ș' => "S", 'Ț' => "T", 'ţ' => "t", 'Ţ' => "T",
    // Esperanto and other Latin
    'ĉ' => "c", 'ĝ' => "g", 'ĥ' => "h", 'ĵ' => "j",
    'ŝ' => "s", 'ŭ' => "u", 'Ĉ' => "C", 'Ĝ' => "G",
    'Ĥ' => "H", 'Ĵ' => "J", 'Ŝ' => "S", 'Ŭ' => "U",
    'đ' => "d", 'Đ' => "D", 'ħ' => "h", 'Ħ' => "H",
    'ŀ' => "l", 'Ŀ' => "L", 'ŋ' => "n", 'Ŋ' => "N",
    'ŧ' => "t", 'Ŧ' => "T", 'ĩ' => "i", 'Ĩ' => "I",
    'ũ' => "u", 'Ũ' => "U",
    // Vietnamese
    'Ạ' => "A", 'Ả' => "A", 'Ầ' => "A", 'Ấ' => "A",
    'Ậ' => "A", 'Ẩ' => "A", 'Ẫ' => "A", 'Ằ' => "A",
    'Ắ' => "A", 'Ặ' => "A", 'Ẳ' => "A", 'Ẵ' => "A",
    'Ẹ' => "E", 'Ẻ' => "E", 'Ẽ' => "E", 'Ề' => "E",
    'Ế' => "E", 'Ệ' => "E", 'Ể' => "E", 'Ễ' => "E",
    'Ị' => "I", 'Ỉ' => "I", 'Ọ' => "O", 'Ỏ' => "O",
    'Ồ' => "O", 'Ố' => "O", 'Ộ' => "O", 'Ổ' => "O",
    'Ỗ' => "O", 'Ơ' => "O", 'Ờ' => "O", 'Ớ' => "O",
    'Ợ' => "O", 'Ở' => "O", 'Ỡ' => "O", 'Ụ' => "U",
    'Ủ' => "U", 'Ư' => "U", 'Ừ' => "U", 'Ứ' => "U",
    'Ự' => "U", 'Ử' => "U", 'Ữ' => "U", 'Ỳ' => "Y",
    'Ỵ' => "Y", 'Ỷ' => "Y", 'Ỹ' => "Y", 'ạ' => "a",
    'ả' => "a", 'ầ' => "a", 'ấ' => "a", 'ậ' => "a",
    'ẩ' => "a", 'ẫ' => "a", 'ằ' => "a", 'ắ' => "a",
    'ặ' => "a", 'ẳ' => "a", 'ẵ' => "a", 'ẹ' => "e",
    'ẻ' => "e", 'ẽ' => "e", 'ề' => "e", 'ế' => "e",
    'ệ' => "e", 'ể' => "e", 'ễ' => "e", 'ị' => "i",
    'ỉ' => "i", 'ọ' => "o", 'ỏ' => "o", 'ồ' => "o",
    'ố' => "o", 'ộ' => "o", 'ổ' => "o", 'ỗ' => "o",
    'ơ' => "o", 'ờ' => "o", 'ớ' => "o", 'ợ' => "o",
    'ở' => "o", 'ỡ' => "o", 'ụ' => "u", 'ủ' => "u",
    'ư' => "u", 'ừ' => "u", 'ứ' => "u", 'ự' => "u",
    'ử' => "u", 'ữ' => "u", 'ỳ' => "y", 'ỵ' => "y",
    'ỷ' => "y", 'ỹ' => "y",
    // Arabic
    'ء' => "e", 'آ' => "a", 'أ' => "a", 'ؤ' => "w",
    'إ' => "i", 'ئ' => "y", 'ا' => "a", 'ب' => "b",
    'ة' => "t", 'ت' => "t", 'ث' => "th", 'ج' => "j",
    'ح' => "h", 'خ' => "kh", 'د' => "d", 'ذ' => "th",
    'ر' => "r", 'ز' => "z", 'س' => "s", 'ش' => "sh",
    'ص' => "s", 'ض' => "d", 'ط' => "t", 'ظ' => "th",
    'ع' => "aa", 'غ' => "gh", 'ف' => "f", 'ق' => "k",
    'ك' => "k", 'ل' => "l", 'م' => "m", 'ن' => "n",
    'ه' => "h", 'و' => "o", 'ى' => "y", 'ي' => "y",
    // Georgian
    'ა' => "a", 'ბ' => "b", 'გ' => "g", 'დ' => "d",
    'ე' => "e", 'ვ' => "v", 'ზ' => "z", 'თ' => "t",
    'ი' => "i", 'კ' => "k", 'ლ' => "l", 'მ' => "m",
    'ნ' => "n", 'ო' => "o", 'პ' => "p", 'ჟ' => "zh",
    'რ' => "r", 'ს' => "s", 'ტ' => "t", 'უ' => "u",
    'ფ' => "p", 'ქ' => "k", 'ღ' => "gh", 'ყ' => "q",
    'შ' => "sh", 'ჩ' => "ch", 'ც' => "ts", 'ძ' => "dz",
    'წ' => "ts", 'ჭ' => "ch", 'ხ' => "kh", 'ჯ' => "j",
    'ჰ' => "h",
    // Currency
    '€' => "euro", '₢' => "cruzeiro", '₣' => "french franc", '£' => "pound",
    '₤' => "lira", '₥' => "mill", '₦' => "naira", '₧' => "peseta",
    '₨' => "rupee", '₹' => "indian rupee", '₩' => "won", '₪' => "new shequel",
    '₫' => "dong", '₭' => "kip", '₮' => "tugrik", '₯' => "drachma",
    '₰' => "penny", '₱' => "peso", '₲' => "guarani", '₳' => "austral",
    '₴' => "hryvnia", '₵' => "cedi", '¢' => "cent", '¥' => "yen",
    '元' => "yuan", '円' => "yen", '﷼' => "rial", '₠' => "ecu",
    '¤' => "currency", '฿' => "baht", '$' => "dollar", '₽' => "russian ruble",
    '₿' => "bitcoin", '₸' => "tenge", '₺' => "turkish lira",
    // Symbols
    '©' => "(c)", 'œ' => "oe", 'Œ' => "OE", '∑' => "sum",
    '®' => "(r)", '†' => "+", '“' => "\"", '”' => "\"",
    '‘' => "'", '’' => "'", '∂' => "d", 'ƒ' => "f",
    '™' => "tm", '℠' => "sm", '…' => "...", '˚' => "o",
    'º' => "o", 'ª' => "a", '•' => "*", '∆' => "delta",
    '∞' => "infinity", '♥' => "love", '&' => "and", '|' => "or",
    '<' => "less", '>' => "greater", '%' => "percent",
    // Case partners
    'Ÿ' => "Y", 'Ƒ' => "F", 'ϴ' => "8", 'Ა' => "A",
    'Ბ' => "B", 'Გ' => "G", 'Დ' => "D", 'Ე' => "E",
    'Ვ' => "V", 'Ზ' => "Z", 'Თ' => "T", 'Ი' => "I",
    'Კ' => "K", 'Ლ' => "L", 'Მ' => "M", 'Ნ' => "N",
    'Ო' => "O", 'Პ' => "P", 'Ჟ' => "Zh", 'Რ' => "R",
    'Ს' => "S", 'Ტ' => "T", 'Უ' => "U", 'Ფ' => "P",
    'Ქ' => "K", 'Ღ' => "Gh", 'Ყ' => "Q", 'Შ' => "Sh",
    'Ჩ' => "Ch", 'Ც' => "Ts", 'Ძ' => "Dz", 'Წ' => "Ts",
    'Ჭ' => "Ch", 'Ხ' => "Kh", 'Ჯ' => "J", 'Ჰ' => "H",
    'Ω' => "W", 'Å' => "A",
};
