//! The built-in glyph table.
//!
//! One row per word: `(word, codepoint, has_variant, is_longable)`, in the
//! order suggestions are offered. Codepoints follow the UCSUR allocation for
//! sitelen pona (U+F1900..U+F19FF).

pub(crate) const GLYPHS: &[(&str, char, bool, bool)] = &[
    ("a", '\u{F1900}', false, true),
    ("akesi", '\u{F1901}', true, false),
    ("ala", '\u{F1902}', false, false),
    ("alasa", '\u{F1903}', false, true),
    ("ale", '\u{F1904}', false, false),
    ("anpa", '\u{F1905}', false, false),
    ("ante", '\u{F1906}', false, false),
    ("anu", '\u{F1907}', false, true),
    ("awen", '\u{F1908}', false, true),
    ("e", '\u{F1909}', false, false),
    ("en", '\u{F190A}', false, false),
    ("esun", '\u{F190B}', false, false),
    ("ijo", '\u{F190C}', false, false),
    ("ike", '\u{F190D}', false, false),
    ("ilo", '\u{F190E}', false, false),
    ("insa", '\u{F190F}', false, false),
    ("jaki", '\u{F1910}', false, false),
    ("jan", '\u{F1911}', false, false),
    ("jelo", '\u{F1912}', false, false),
    ("jo", '\u{F1913}', false, false),
    ("kala", '\u{F1914}', true, false),
    ("kalama", '\u{F1915}', false, false),
    ("kama", '\u{F1916}', false, true),
    ("kasi", '\u{F1917}', false, false),
    ("ken", '\u{F1918}', false, true),
    ("kepeken", '\u{F1919}', false, true),
    ("kili", '\u{F191A}', false, false),
    ("kiwen", '\u{F191B}', false, false),
    ("ko", '\u{F191C}', false, false),
    ("kon", '\u{F191D}', false, false),
    ("kule", '\u{F191E}', false, false),
    ("kulupu", '\u{F191F}', false, false),
    ("kute", '\u{F1920}', false, false),
    ("la", '\u{F1921}', false, false),
    ("lape", '\u{F1922}', false, false),
    ("laso", '\u{F1923}', false, false),
    ("lawa", '\u{F1924}', false, false),
    ("len", '\u{F1925}', false, false),
    ("lete", '\u{F1926}', false, false),
    ("li", '\u{F1927}', false, false),
    ("lili", '\u{F1928}', false, false),
    ("linja", '\u{F1929}', false, false),
    ("lipu", '\u{F192A}', false, false),
    ("loje", '\u{F192B}', false, false),
    ("lon", '\u{F192C}', false, true),
    ("luka", '\u{F192D}', false, false),
    ("lukin", '\u{F192E}', false, false),
    ("lupa", '\u{F192F}', false, false),
    ("ma", '\u{F1930}', false, false),
    ("mama", '\u{F1931}', false, false),
    ("mani", '\u{F1932}', false, false),
    ("meli", '\u{F1933}', true, false),
    ("mi", '\u{F1934}', false, false),
    ("mije", '\u{F1935}', true, false),
    ("moku", '\u{F1936}', false, false),
    ("moli", '\u{F1937}', false, false),
    ("monsi", '\u{F1938}', false, false),
    ("mu", '\u{F1939}', true, false),
    ("mun", '\u{F193A}', false, false),
    ("musi", '\u{F193B}', false, false),
    ("mute", '\u{F193C}', true, false),
    ("nanpa", '\u{F193D}', false, true),
    ("nasa", '\u{F193E}', false, false),
    ("nasin", '\u{F193F}', false, false),
    ("nena", '\u{F1940}', false, false),
    ("ni", '\u{F1941}', false, false),
    ("nimi", '\u{F1942}', false, false),
    ("noka", '\u{F1943}', false, false),
    ("o", '\u{F1944}', false, false),
    ("olin", '\u{F1945}', true, false),
    ("ona", '\u{F1946}', false, false),
    ("open", '\u{F1947}', false, true),
    ("pakala", '\u{F1948}', false, false),
    ("pali", '\u{F1949}', false, false),
    ("palisa", '\u{F194A}', false, false),
    ("pan", '\u{F194B}', false, false),
    ("pana", '\u{F194C}', true, false),
    ("pi", '\u{F194D}', false, true),
    ("pilin", '\u{F194E}', false, false),
    ("pimeja", '\u{F194F}', false, false),
    ("pini", '\u{F1950}', false, true),
    ("pipi", '\u{F1951}', false, false),
    ("poka", '\u{F1952}', false, false),
    ("poki", '\u{F1953}', false, false),
    ("pona", '\u{F1954}', false, false),
    ("pu", '\u{F1955}', false, false),
    ("sama", '\u{F1956}', false, false),
    ("seli", '\u{F1957}', false, false),
    ("selo", '\u{F1958}', false, false),
    ("seme", '\u{F1959}', false, false),
    ("sewi", '\u{F195A}', true, false),
    ("sijelo", '\u{F195B}', false, false),
    ("sike", '\u{F195C}', false, false),
    ("sin", '\u{F195D}', false, false),
    ("sina", '\u{F195E}', false, false),
    ("sinpin", '\u{F195F}', false, false),
    ("sitelen", '\u{F1960}', false, false),
    ("sona", '\u{F1961}', false, true),
    ("soweli", '\u{F1962}', false, false),
    ("suli", '\u{F1963}', false, false),
    ("suno", '\u{F1964}', false, false),
    ("supa", '\u{F1965}', false, false),
    ("suwi", '\u{F1966}', false, false),
    ("tan", '\u{F1967}', false, false),
    ("taso", '\u{F1968}', false, false),
    ("tawa", '\u{F1969}', false, true),
    ("telo", '\u{F196A}', false, false),
    ("tenpo", '\u{F196B}', true, false),
    ("toki", '\u{F196C}', false, false),
    ("tomo", '\u{F196D}', false, false),
    ("tu", '\u{F196E}', false, false),
    ("unpa", '\u{F196F}', false, false),
    ("uta", '\u{F1970}', true, false),
    ("utala", '\u{F1971}', false, false),
    ("walo", '\u{F1972}', false, false),
    ("wan", '\u{F1973}', false, false),
    ("waso", '\u{F1974}', false, false),
    ("wawa", '\u{F1975}', false, false),
    ("weka", '\u{F1976}', false, false),
    ("wile", '\u{F1977}', true, true),
    ("namako", '\u{F1978}', true, false),
    ("kin", '\u{F1979}', false, false),
    ("oko", '\u{F197A}', false, false),
    ("kipisi", '\u{F197B}', false, false),
    ("leko", '\u{F197C}', false, false),
    ("monsuta", '\u{F197D}', false, false),
    ("tonsi", '\u{F197E}', false, false),
    ("jasima", '\u{F197F}', false, false),
    ("kijetesantakalu", '\u{F1980}', false, false),
    ("soko", '\u{F1981}', false, false),
    ("meso", '\u{F1982}', false, false),
    ("epiku", '\u{F1983}', false, false),
    ("kokosila", '\u{F1984}', false, false),
    ("lanpan", '\u{F1985}', true, false),
    ("n", '\u{F1986}', false, true),
    ("misikeke", '\u{F1987}', true, false),
    ("ku", '\u{F1988}', false, false),
    ("pake", '\u{F19A0}', false, false),
    ("apeja", '\u{F19A1}', false, false),
    ("majuna", '\u{F19A2}', false, false),
    ("powe", '\u{F19A3}', false, false),
    ("linluwi", '\u{F19A4}', true, false),
    ("kiki", '\u{F19A5}', false, false),
    ("su", '\u{F19A6}', false, false),
    ("wa", '\u{F19C0}', false, true),
    ("owe", '\u{F19AE}', false, false),
];
