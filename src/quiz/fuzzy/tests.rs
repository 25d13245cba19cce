use super::*;

#[test]
fn exact_match() {
    assert_eq!(compare("Zebra", "Zebra"), Verdict::Exact);
}

#[test]
fn normalization_ignores_case_whitespace_and_accents() {
    assert_eq!(compare("  zèbra ", "Zebra"), Verdict::Exact);
    assert_eq!(compare("PINGUIN", "pinguïn"), Verdict::Exact);
}

#[test]
fn single_deletion_is_fuzzy() {
    assert_eq!(compare("Zebr", "Zebra"), Verdict::Fuzzy);
    assert_eq!(compare("Zbra", "Zebra"), Verdict::Fuzzy);
}

#[test]
fn single_insertion_is_fuzzy() {
    assert_eq!(compare("Zebraa", "Zebra"), Verdict::Fuzzy);
    assert_eq!(compare("Zeebra", "Zebra"), Verdict::Fuzzy);
}

#[test]
fn single_substitution_is_fuzzy() {
    assert_eq!(compare("Zebrx", "Zebra"), Verdict::Fuzzy);
}

#[test]
fn transposition_is_two_edits() {
    assert_eq!(compare("Zerba", "Zebra"), Verdict::NoMatch);
}

#[test]
fn unrelated_words_do_not_match() {
    assert_eq!(compare("Giraffe", "Zebra"), Verdict::NoMatch);
}

#[test]
fn length_gap_over_one_is_rejected() {
    assert_eq!(compare("Zeb", "Zebra"), Verdict::NoMatch);
    assert_eq!(compare("Zebraaa", "Zebra"), Verdict::NoMatch);
}
