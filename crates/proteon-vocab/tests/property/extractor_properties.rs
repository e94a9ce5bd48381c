use proptest::prelude::*;
use proteon_vocab::{EntityExtractor, Vocabulary};

fn extractor() -> EntityExtractor {
    EntityExtractor::new(&Vocabulary::builtin()).unwrap()
}

proptest! {
    #[test]
    fn extraction_never_panics(s in ".*") {
        let ex = extractor();
        let _ = ex.extract(&s);
        let _ = ex.distinct_keywords(&s);
    }

    #[test]
    fn extracted_proteins_are_canonical_vocabulary_symbols(s in ".{0,300}") {
        let vocabulary = Vocabulary::builtin();
        let ex = EntityExtractor::new(&vocabulary).unwrap();
        for symbol in ex.extract_proteins(&s) {
            prop_assert_eq!(
                vocabulary.proteins.canonical(&symbol),
                Some(symbol.as_str())
            );
        }
    }

    #[test]
    fn hits_are_deduplicated(s in ".{0,300}") {
        let ex = extractor();
        let hits = ex.extract(&s);
        let mut proteins = hits.proteins.clone();
        proteins.sort();
        proteins.dedup();
        prop_assert_eq!(proteins.len(), hits.proteins.len());
    }

    #[test]
    fn embedding_symbol_in_longer_word_never_matches(word in "[a-z]{1,8}") {
        let ex = extractor();
        // Glue a known symbol inside a longer word on both sides.
        let text = format!("x{}sirt1{}x", word, word);
        prop_assert!(ex.extract_proteins(&text).is_empty());
    }

    #[test]
    fn surrounding_whitespace_matches(symbol in prop::sample::select(vec!["SIRT1", "TP53", "APOE", "FOXO3"])) {
        let ex = extractor();
        let text = format!("the {} gene", symbol);
        prop_assert_eq!(ex.extract_proteins(&text), vec![symbol.to_string()]);
    }
}
