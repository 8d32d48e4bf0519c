//! Lexicon entry parsing
//!
//! Entries follow the WordNet Prolog synset layout:
//! `s(<synset_id>,<w_num>,'<headword>',<pos>,<sense>,<tag_count>).`

/// Part of speech of a lexicon entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    /// Adjective satellite (`s` in WordNet)
    AdjectiveSatellite,
    Adverb,
}

impl PartOfSpeech {
    pub fn from_tag(tag: char) -> Option<Self> {
        match tag {
            'n' => Some(PartOfSpeech::Noun),
            'v' => Some(PartOfSpeech::Verb),
            'a' => Some(PartOfSpeech::Adjective),
            's' => Some(PartOfSpeech::AdjectiveSatellite),
            'r' => Some(PartOfSpeech::Adverb),
            _ => None,
        }
    }

    pub fn tag(&self) -> char {
        match self {
            PartOfSpeech::Noun => 'n',
            PartOfSpeech::Verb => 'v',
            PartOfSpeech::Adjective => 'a',
            PartOfSpeech::AdjectiveSatellite => 's',
            PartOfSpeech::Adverb => 'r',
        }
    }
}

/// A parsed lexicon line. Only the fields the dictionary needs are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconEntry<'a> {
    /// Headword exactly as written, before any case folding
    pub headword: &'a str,
    pub part_of_speech: PartOfSpeech,
}

impl<'a> LexiconEntry<'a> {
    /// Parses one line, returning `None` when it does not match the entry layout.
    ///
    /// The entry has to start the (trimmed) line; anything after the closing
    /// parenthesis is ignored.
    pub fn parse(line: &'a str) -> Option<Self> {
        let rest = line.trim().strip_prefix("s(")?;
        let rest = skip_number(rest)?.strip_prefix(',')?;
        let rest = skip_number(rest)?.strip_prefix(",'")?;

        let end = rest.find('\'')?;
        if end == 0 {
            return None;
        }
        let headword = &rest[..end];
        let rest = rest[end..].strip_prefix("',")?;

        let mut chars = rest.chars();
        let part_of_speech = PartOfSpeech::from_tag(chars.next()?)?;
        let rest = chars.as_str().strip_prefix(',')?;

        let rest = skip_number(rest)?.strip_prefix(',')?;
        skip_number(rest)?.strip_prefix(')')?;

        Some(Self {
            headword,
            part_of_speech,
        })
    }

    /// Proper nouns are written with a leading capital in the lexicon
    pub fn is_proper_noun(&self) -> bool {
        self.headword
            .chars()
            .next()
            .map(|c| c.is_uppercase())
            .unwrap_or(false)
    }
}

/// Consumes one or more ASCII digits
fn skip_number(s: &str) -> Option<&str> {
    let digits = s.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        None
    } else {
        Some(&s[digits..])
    }
}
