use unidecode::unidecode;

#[cfg(test)]
mod tests;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Verdict {
    Exact,
    Fuzzy,
    NoMatch,
}

fn normalize(text: &str) -> String {
    unidecode(text.trim()).to_lowercase()
}

pub fn compare(typed: &str, expected: &str) -> Verdict {
    let typed = normalize(typed);
    let expected = normalize(expected);
    if typed == expected {
        Verdict::Exact
    } else if within_one_edit(&typed, &expected) {
        Verdict::Fuzzy
    } else {
        Verdict::NoMatch
    }
}

// Only distance 1 is ever accepted, which a linear scan can decide without
// computing full Levenshtein distance.
fn within_one_edit(a: &str, b: &str) -> bool {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.len() == b.len() {
        let mismatches = a.iter().zip(b.iter()).filter(|(x, y)| x != y).count();
        return mismatches == 1;
    }
    let (short, long) = if a.len() < b.len() { (&a, &b) } else { (&b, &a) };
    if long.len() - short.len() != 1 {
        return false;
    }
    one_char_inserted(short, long)
}

fn one_char_inserted(short: &[char], long: &[char]) -> bool {
    let mut skipped = false;
    let mut cursor = 0;
    for character in long {
        if cursor < short.len() && short[cursor] == *character {
            cursor += 1;
        } else if skipped {
            return false;
        } else {
            skipped = true;
        }
    }
    cursor == short.len()
}
