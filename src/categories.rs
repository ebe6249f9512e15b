use std::collections::BTreeSet;

/// Union of all labels across the given per-record lists, sorted ascending
/// by byte-wise lexicographic order.
///
/// Re-inserting a label already seen is a no-op. Empty and whitespace-only
/// strings are labels like any other; comparison is case-sensitive.
pub fn extract_unique_categories<I, L, S>(subject_lists: I) -> Vec<String>
where
    I: IntoIterator<Item = L>,
    L: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut unique = BTreeSet::new();
    for labels in subject_lists {
        for label in labels {
            unique.insert(label.into());
        }
    }
    unique.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unions_and_deduplicates_labels() {
        let got = extract_unique_categories(vec![
            vec!["Fiction", "History"],
            vec!["History"],
            vec![],
        ]);
        assert_eq!(got, vec!["Fiction", "History"]);
    }

    #[test]
    fn sorts_across_records() {
        let got = extract_unique_categories(vec![vec!["b"], vec!["a"], vec!["a", "b", "c"]]);
        assert_eq!(got, vec!["a", "b", "c"]);
    }

    #[test]
    fn empty_inputs_yield_empty_output() {
        assert!(extract_unique_categories(Vec::<Vec<String>>::new()).is_empty());
        assert!(extract_unique_categories(vec![Vec::<String>::new(), Vec::new()]).is_empty());
    }

    #[test]
    fn extraction_is_idempotent() {
        let input = vec![vec!["History", "Art"], vec!["art", ""], vec!["History"]];
        assert_eq!(
            extract_unique_categories(input.clone()),
            extract_unique_categories(input)
        );
    }

    #[test]
    fn output_is_strictly_ascending() {
        let got = extract_unique_categories(vec![
            vec!["zoology", "Art", "zoology"],
            vec!["", "  ", "Art"],
        ]);
        assert!(got.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(got, vec!["", "  ", "Art", "zoology"]);
    }

    #[test]
    fn every_input_label_appears_exactly_once() {
        let input = vec![vec!["a", "b"], vec!["c", "a"], vec!["b"]];
        let got = extract_unique_categories(input.clone());
        for label in input.into_iter().flatten() {
            assert_eq!(got.iter().filter(|c| c.as_str() == label).count(), 1);
        }
    }

    #[test]
    fn case_sensitive_labels_stay_distinct() {
        let got = extract_unique_categories(vec![vec!["History", "history"]]);
        assert_eq!(got, vec!["History", "history"]);
    }
}
