//! English stop words.
//!
//! Very common words that carry little meaning on their own. Frequency
//! displays drop them to surface the "interesting" vocabulary of a text.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Common English words excluded from filtered frequency tables.
pub static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        // Articles, determiners, quantifiers
        "a", "an", "the", "this", "that", "these", "those", "some", "any", "each", "every",
        "either", "neither", "all", "both", "few", "many", "much", "more", "most", "less",
        "least", "several", "such", "no", "nor", "not", "only", "own", "same", "other",
        "another", "enough", "whole",
        // Pronouns
        "i", "me", "my", "mine", "myself", "we", "us", "our", "ours", "ourselves", "you",
        "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself", "she", "her",
        "hers", "herself", "it", "its", "itself", "they", "them", "their", "theirs",
        "themselves", "one", "ones", "someone", "somebody", "something", "anyone", "anybody",
        "anything", "everyone", "everybody", "everything", "nobody", "nothing", "none",
        "who", "whom", "whose", "which", "what", "whatever", "whichever", "whoever",
        // Prepositions
        "about", "above", "across", "after", "against", "along", "among", "around", "at",
        "before", "behind", "below", "beneath", "beside", "besides", "between", "beyond", "by",
        "down", "during", "except", "for", "from", "in", "inside", "into", "near", "of", "off",
        "on", "onto", "out", "outside", "over", "past", "since", "through", "throughout",
        "till", "to", "toward", "towards", "under", "underneath", "until", "up", "upon", "via",
        "with", "within", "without",
        // Conjunctions
        "and", "but", "or", "so", "yet", "if", "because", "although", "though", "while",
        "whereas", "unless", "whether", "as", "than", "then", "once", "when", "whenever",
        "where", "wherever", "why", "how", "however",
        // Auxiliary and modal verbs
        "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
        "having", "do", "does", "did", "doing", "done", "will", "would", "shall", "should",
        "can", "could", "may", "might", "must", "ought",
        // Contractions
        "i'm", "i've", "i'll", "i'd", "you're", "you've", "you'll", "you'd", "he's", "he'll",
        "he'd", "she's", "she'll", "she'd", "it's", "it'll", "we're", "we've", "we'll", "we'd",
        "they're", "they've", "they'll", "they'd", "that's", "there's", "here's", "what's",
        "who's", "let's", "isn't", "aren't", "wasn't", "weren't", "hasn't", "haven't",
        "hadn't", "doesn't", "don't", "didn't", "won't", "wouldn't", "shan't", "shouldn't",
        "can't", "cannot", "couldn't", "mustn't", "mightn't",
        // Common adverbs
        "again", "almost", "already", "also", "always", "anyway", "else", "ever", "here",
        "hence", "just", "maybe", "never", "now", "often", "perhaps", "quite", "rather",
        "really", "seldom", "sometimes", "soon", "still", "there", "therefore", "thus", "too",
        "very", "well", "yes",
        // Common light verbs
        "get", "gets", "got", "gotten", "getting", "go", "goes", "went", "gone", "going",
        "make", "makes", "made", "making", "take", "takes", "took", "taken", "come", "comes",
        "came", "say", "says", "said", "see", "sees", "saw", "seen", "know", "knows", "knew",
        "known", "let", "lets", "put", "puts", "seem", "seems", "seemed", "use", "used",
        "uses", "want", "wants", "wanted", "like", "need", "needs", "give", "gives", "gave",
        "given", "keep", "keeps", "kept", "tell", "told", "think", "thought", "look", "looks",
        // Misc function words
        "like", "unlike", "per", "upon", "whom", "whose", "thereby", "herein", "therein",
        "thereof", "whereby", "ok", "okay", "oh", "etc", "eg", "ie",
        // Numbers spelled out
        "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "first",
        "second", "third", "last", "next",
    ]
    .into_iter()
    .collect()
});

/// Check if a word is a stop word (case-insensitive).
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word.to_lowercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_stop_words() {
        assert!(is_stop_word("the"));
        assert!(is_stop_word("The"));
        assert!(is_stop_word("AND"));
        assert!(is_stop_word("don't"));
    }

    #[test]
    fn content_words_are_kept() {
        assert!(!is_stop_word("elephant"));
        assert!(!is_stop_word("algorithm"));
        assert!(!is_stop_word("reading"));
    }

    #[test]
    fn table_size_is_in_expected_range() {
        assert!((280..=400).contains(&STOP_WORDS.len()));
    }
}
