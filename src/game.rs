use std::fmt;

pub const MAX_SETUP_WORD_LEN: usize = 8;
pub const MAX_CHAIN_WORD_LEN: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Playing,
    Solved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidMove;

impl fmt::Display for InvalidMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("word does not connect to the end of the chain")
    }
}

impl std::error::Error for InvalidMove {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlapSpan {
    pub start: usize,
    pub end: usize,
    pub word_index: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChainDisplay {
    pub word: String,
    pub spans: Vec<OverlapSpan>,
}

pub fn normalize_word(input: &str, max_len: usize) -> String {
    input
        .trim()
        .chars()
        .flat_map(char::to_uppercase)
        .take(max_len)
        .collect()
}

pub fn overlap(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();
    let max = a.len().min(b.len());
    for i in (1..=max).rev() {
        if a[a.len() - i..] == b[..i] {
            return i;
        }
    }
    0
}

pub fn build_display(chain: &[String]) -> ChainDisplay {
    let Some(first) = chain.first() else {
        return ChainDisplay::default();
    };
    let mut word = first.clone();
    let mut len = first.chars().count();
    let mut spans = Vec::new();

    for (i, next) in chain.iter().enumerate().skip(1) {
        // Recomputed against the previous chain word, not the accumulator,
        // so span indices follow directly from the accumulator length.
        let k = overlap(&chain[i - 1], next);
        spans.push(OverlapSpan {
            start: len - k,
            end: len,
            word_index: i,
        });
        word.extend(next.chars().skip(k));
        len += next.chars().count() - k;
    }

    ChainDisplay { word, spans }
}

#[derive(Debug, Clone)]
pub struct Game {
    chain: Vec<String>,
    target: String,
    status: Status,
}

impl Game {
    pub fn new(start: &str, target: &str) -> Self {
        Self {
            chain: vec![normalize_word(start, MAX_SETUP_WORD_LEN)],
            target: normalize_word(target, MAX_SETUP_WORD_LEN),
            status: Status::Playing,
        }
    }

    pub fn submit(&mut self, candidate: &str) -> Result<Status, InvalidMove> {
        if self.status == Status::Solved {
            return Ok(self.status);
        }
        let word = normalize_word(candidate, MAX_CHAIN_WORD_LEN);
        if word.is_empty() {
            return Ok(self.status);
        }
        let last = self.chain.last().map(String::as_str).unwrap_or("");
        if overlap(last, &word) == 0 {
            return Err(InvalidMove);
        }
        let solved = word == self.target;
        self.chain.push(word);
        if solved {
            self.status = Status::Solved;
        }
        Ok(self.status)
    }

    pub fn reset(&mut self, start: &str) {
        self.chain = vec![normalize_word(start, MAX_SETUP_WORD_LEN)];
        self.status = Status::Playing;
    }

    pub fn set_target(&mut self, word: &str) {
        // Only applies to future submissions; an already-appended word
        // equal to the new target does not solve the game retroactively.
        self.target = normalize_word(word, MAX_SETUP_WORD_LEN);
    }

    pub fn chain(&self) -> &[String] {
        &self.chain
    }

    pub fn last_word(&self) -> &str {
        self.chain.last().map(String::as_str).unwrap_or("")
    }

    pub fn start_word(&self) -> &str {
        self.chain.first().map(String::as_str).unwrap_or("")
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn steps(&self) -> usize {
        self.chain.len().saturating_sub(1)
    }

    pub fn display(&self) -> ChainDisplay {
        build_display(&self.chain)
    }
}

#[cfg(test)]
mod tests {
    use super::{
        build_display, normalize_word, overlap, Game, InvalidMove, OverlapSpan, Status,
        MAX_CHAIN_WORD_LEN,
    };

    fn chain(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn overlap_word_order_is_three() {
        assert_eq!(overlap("WORD", "ORDER"), 3);
    }

    #[test]
    fn overlap_disjoint_words_is_zero() {
        assert_eq!(overlap("CAT", "DOG"), 0);
    }

    #[test]
    fn overlap_is_case_insensitive() {
        assert_eq!(overlap("word", "ORDER"), 3);
        assert_eq!(overlap("WORD", "order"), 3);
    }

    #[test]
    fn overlap_identical_words_matches_full_length() {
        assert_eq!(overlap("DENSE", "DENSE"), 5);
    }

    #[test]
    fn overlap_of_empty_string_is_zero() {
        assert_eq!(overlap("", "WORD"), 0);
        assert_eq!(overlap("WORD", ""), 0);
    }

    #[test]
    fn overlap_is_bounded_and_maximal() {
        let cases = [
            ("WORD", "ORDER"),
            ("banana", "NANTES"),
            ("CAT", "CATALOG"),
            ("AA", "AAAA"),
            ("START", "ARTS"),
        ];
        for (a, b) in cases {
            let k = overlap(a, b);
            let a_chars: Vec<char> = a.to_lowercase().chars().collect();
            let b_chars: Vec<char> = b.to_lowercase().chars().collect();
            let max = a_chars.len().min(b_chars.len());
            assert!(k <= max, "overlap({a}, {b}) exceeded min length");
            if k > 0 {
                assert_eq!(&a_chars[a_chars.len() - k..], &b_chars[..k]);
            }
            for bigger in k + 1..=max {
                assert_ne!(&a_chars[a_chars.len() - bigger..], &b_chars[..bigger]);
            }
        }
    }

    #[test]
    fn build_display_single_word_is_verbatim() {
        let display = build_display(&chain(&["START"]));
        assert_eq!(display.word, "START");
        assert!(display.spans.is_empty());
    }

    #[test]
    fn build_display_two_words_splices_overlap() {
        let display = build_display(&chain(&["WORD", "ORDER"]));
        assert_eq!(display.word, "WORDER");
        assert_eq!(
            display.spans,
            vec![OverlapSpan {
                start: 1,
                end: 4,
                word_index: 1,
            }]
        );
    }

    #[test]
    fn build_display_span_ends_are_monotonic() {
        let display = build_display(&chain(&["WORD", "ORDEN", "DENSE"]));
        assert_eq!(display.word, "WORDENSE");
        assert_eq!(display.spans.len(), 2);
        assert_eq!(display.spans[0], OverlapSpan { start: 1, end: 4, word_index: 1 });
        assert_eq!(display.spans[1], OverlapSpan { start: 3, end: 6, word_index: 2 });
        assert!(display.spans.windows(2).all(|w| w[0].end <= w[1].end));
    }

    #[test]
    fn build_display_empty_chain_is_empty() {
        let display = build_display(&[]);
        assert_eq!(display.word, "");
        assert!(display.spans.is_empty());
    }

    #[test]
    fn submit_appends_and_normalizes() {
        let mut game = Game::new("WORD", "END");
        game.submit("orden").expect("orden connects to word");
        assert_eq!(game.chain(), ["WORD", "ORDEN"]);
        assert_eq!(game.status(), Status::Playing);
        assert_eq!(game.steps(), 1);
    }

    #[test]
    fn submit_without_overlap_is_rejected() {
        let mut game = Game::new("WORD", "END");
        assert_eq!(game.submit("DOG"), Err(InvalidMove));
        assert_eq!(game.chain(), ["WORD"]);
        assert_eq!(game.status(), Status::Playing);
    }

    #[test]
    fn submit_blank_input_is_a_noop() {
        let mut game = Game::new("WORD", "END");
        assert_eq!(game.submit("   "), Ok(Status::Playing));
        assert_eq!(game.chain(), ["WORD"]);
    }

    #[test]
    fn submit_caps_word_length() {
        let mut game = Game::new("WORD", "END");
        game.submit("ordinarinesses").expect("prefix still connects");
        assert_eq!(game.last_word().chars().count(), MAX_CHAIN_WORD_LEN);
        assert_eq!(game.last_word(), "ORDINARINESS");
    }

    #[test]
    fn submit_reaching_target_solves() {
        let mut game = Game::new("WORD", "DENSE");
        game.submit("ORDEN").expect("orden connects");
        let status = game.submit("dense").expect("dense connects");
        assert_eq!(status, Status::Solved);
        assert_eq!(game.status(), Status::Solved);
        assert_eq!(game.steps(), 2);
    }

    #[test]
    fn submit_while_solved_leaves_chain_untouched() {
        let mut game = Game::new("WORD", "DENSE");
        game.submit("ORDEN").expect("orden connects");
        game.submit("DENSE").expect("dense connects");
        assert_eq!(game.submit("SEVEN"), Ok(Status::Solved));
        assert_eq!(game.chain(), ["WORD", "ORDEN", "DENSE"]);
    }

    #[test]
    fn reset_returns_to_playing_from_any_state() {
        let mut game = Game::new("WORD", "DENSE");
        game.submit("ORDEN").expect("orden connects");
        game.submit("DENSE").expect("dense connects");
        assert_eq!(game.status(), Status::Solved);

        game.reset("start");
        assert_eq!(game.chain(), ["START"]);
        assert_eq!(game.status(), Status::Playing);
        assert_eq!(game.steps(), 0);
    }

    #[test]
    fn set_target_is_not_retroactive() {
        let mut game = Game::new("START", "END");
        game.submit("ARTS").expect("arts connects");
        game.set_target("ARTS");
        assert_eq!(game.status(), Status::Playing);

        game.submit("tsar").expect("tsar connects");
        assert_eq!(game.status(), Status::Playing);
        game.submit("arts").expect("arts connects");
        assert_eq!(game.status(), Status::Solved);
    }

    #[test]
    fn new_game_normalizes_setup_words() {
        let game = Game::new(" word ", "endpoints");
        assert_eq!(game.start_word(), "WORD");
        assert_eq!(game.target(), "ENDPOINT");
    }

    #[test]
    fn normalize_word_uppercases_and_caps() {
        assert_eq!(normalize_word("  hello  ", 8), "HELLO");
        assert_eq!(normalize_word("abcdefghij", 8), "ABCDEFGH");
    }
}
