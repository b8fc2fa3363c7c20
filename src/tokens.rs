//! Approximate token counting.
//!
//! Not a model tokenizer. Text is split on whitespace and at every transition
//! between alphanumeric and other characters; each remaining fragment counts once.

#[derive(Clone, Copy, PartialEq, Eq)]
enum FragmentKind {
    Word,
    Symbol,
}

fn kind_of(c: char) -> Option<FragmentKind> {
    if c.is_whitespace() {
        None
    } else if c.is_alphanumeric() {
        Some(FragmentKind::Word)
    } else {
        Some(FragmentKind::Symbol)
    }
}

/// Count fragments in `text`. `count_tokens("Hello, world!")` is 4.
pub fn count_tokens(text: &str) -> usize {
    let mut count = 0;
    let mut previous: Option<FragmentKind> = None;

    for c in text.chars() {
        let current = kind_of(c);
        if current.is_some() && current != previous {
            count += 1;
        }
        previous = current;
    }

    count
}
