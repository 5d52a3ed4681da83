use crate::error::VocabularyError;
use rand::Rng;

const BUILTIN_WORDS: [(&str, &str); 15] = [
    ("apple", "蘋果"),
    ("banana", "香蕉"),
    ("orange", "橘子"),
    ("computer", "電腦"),
    ("keyboard", "鍵盤"),
    ("mouse", "滑鼠"),
    ("program", "程式"),
    ("developer", "開發者"),
    ("algorithm", "演算法"),
    ("university", "大學"),
    ("student", "學生"),
    ("library", "圖書館"),
    ("adventure", "冒險"),
    ("warrior", "戰士"),
    ("dragon", "龍"),
];

/// A question shown to the player and the answer they must type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub prompt: String,
    pub answer: String,
}

impl Word {
    pub fn new(answer: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            prompt: prompt.into(),
        }
    }

    pub fn letter_count(&self) -> usize {
        self.answer.chars().count()
    }
}

/// Non-empty pool of words the session draws targets from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    words: Vec<Word>,
}

impl Vocabulary {
    pub fn new(words: Vec<Word>) -> Result<Self, VocabularyError> {
        if words.is_empty() {
            return Err(VocabularyError::Empty);
        }
        Ok(Self { words })
    }

    /// The 15-word English/Chinese starter list.
    pub fn builtin() -> Self {
        Self {
            words: BUILTIN_WORDS
                .iter()
                .map(|&(answer, prompt)| Word::new(answer, prompt))
                .collect(),
        }
    }

    pub fn count(&self) -> usize {
        self.words.len()
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Pick a word uniformly at random.
    pub fn next_word(&self, rng: &mut impl Rng) -> Word {
        self.words[rng.gen_range(0..self.words.len())].clone()
    }
}
