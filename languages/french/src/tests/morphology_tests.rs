use std::sync::Arc;

use parole_core::normalize;

use crate::lexicon::{Gender, Lexicon};
use crate::morphology::{ConjugationClass, FrenchMorphology, WordInfo, WordType, regular_forms};
use crate::validity::is_valid_french_word;

fn morphology() -> FrenchMorphology {
    FrenchMorphology::new()
}

#[test]
fn base_form_of_regular_er_verb() {
    assert_eq!(morphology().base_form("mangent"), "manger");
    assert_eq!(morphology().base_form("parle"), "parler");
    assert_eq!(morphology().base_form("parles"), "parler");
}

#[test]
fn base_form_of_irregular_verb() {
    assert_eq!(morphology().base_form("suis"), "être");
    assert_eq!(morphology().base_form("Sont"), "être");
    assert_eq!(morphology().base_form("vont"), "aller");
    assert_eq!(morphology().base_form("été"), "être");
}

#[test]
fn infinitives_come_back_unchanged() {
    assert_eq!(morphology().base_form("manger"), "manger");
    assert_eq!(morphology().base_form("Finir"), "Finir");
    assert_eq!(morphology().base_form("vendre"), "vendre");
}

#[test]
fn base_form_always_guesses_er_class() {
    // -ir and -re verbs get an -er lemma
    assert_eq!(morphology().base_form("finissent"), "finisser");
    assert_eq!(morphology().base_form("vendent"), "vender");
}

#[test]
fn base_form_follows_suffix_table_order() {
    // "e" is checked before "ant"
    assert_eq!(morphology().base_form("mangée"), "mangeer");
    assert_eq!(morphology().base_form("parlant"), "parler");
}

#[test]
fn base_form_without_known_pattern_is_identity() {
    assert_eq!(morphology().base_form("Paris"), "Paris");
    assert_eq!(morphology().base_form(""), "");
}

#[test]
fn word_info_for_irregular_verb() {
    match morphology().word_info("suis") {
        Some(WordInfo::Verb {
            base_form,
            is_irregular,
            conjugations,
        }) => {
            assert_eq!(base_form, "être");
            assert!(is_irregular);
            assert!(conjugations.contains(&"sommes".to_string()));
        }
        other => panic!("expected irregular verb, got {other:?}"),
    }
}

#[test]
fn word_info_for_noun() {
    match morphology().word_info("chat") {
        Some(WordInfo::Noun {
            base_form,
            gender,
            related,
        }) => {
            assert_eq!(base_form, "chat");
            assert_eq!(gender, Gender::Masculine);
            assert_eq!(related, vec!["chatte", "chaton", "félin"]);
        }
        other => panic!("expected noun, got {other:?}"),
    }
}

#[test]
fn word_info_for_adjective_includes_lemma() {
    match morphology().word_info("belle") {
        Some(WordInfo::Adjective { base_form, forms }) => {
            assert_eq!(base_form, "beau");
            assert_eq!(forms, vec!["beau", "belle", "beaux", "belles"]);
        }
        other => panic!("expected adjective, got {other:?}"),
    }
}

#[test]
fn word_info_for_expression() {
    let info = morphology().word_info("lieu").unwrap();
    assert_eq!(info.word_type(), WordType::Expression);
    assert_eq!(info.base_form(), "avoir lieu");
}

#[test]
fn irregular_verb_wins_over_expression() {
    // "avoir" is inside "avoir lieu" but the verb table is consulted first
    let info = morphology().word_info("avoir").unwrap();
    assert_eq!(info.word_type(), WordType::Verb);
}

#[test]
fn word_info_for_regular_verb() {
    match morphology().word_info("mangent") {
        Some(WordInfo::Verb {
            base_form,
            is_irregular,
            conjugations,
        }) => {
            assert_eq!(base_form, "manger");
            assert!(!is_irregular);
            assert!(conjugations.contains(&"mange".to_string()));
        }
        other => panic!("expected regular verb, got {other:?}"),
    }
}

#[test]
fn word_info_unknown_and_invalid() {
    let info = morphology().word_info("Paris").unwrap();
    assert_eq!(info.word_type(), WordType::Unknown);
    assert_eq!(info.base_form(), "Paris");

    assert!(morphology().word_info("le").is_none());
    assert!(morphology().word_info("2024").is_none());
}

#[test]
fn er_variations() {
    let variations = morphology().variations("parler");
    for form in ["parler", "parle", "parles", "parlent", "parlee", "parlees", "parlant"] {
        assert!(variations.contains(form), "missing {form}");
    }
}

#[test]
fn ir_variations_cover_both_patterns() {
    let variations = morphology().variations("finir");
    for form in ["finis", "finit", "finissons", "finissez", "finissent", "fini", "finie", "finissant"] {
        assert!(variations.contains(form), "missing {form}");
    }

    let variations = morphology().variations("partir");
    for form in ["partons", "partez", "partent", "parti", "partant"] {
        assert!(variations.contains(form), "missing {form}");
    }
}

#[test]
fn re_variations() {
    let variations = morphology().variations("vendre");
    for form in ["vends", "vend", "vendons", "vendez", "vendent", "vendu", "vendue", "vendant"] {
        assert!(variations.contains(form), "missing {form}");
    }
}

#[test]
fn irregular_variations_are_normalized() {
    let variations = morphology().variations("être");
    assert!(variations.contains("etre"));
    assert!(variations.contains("suis"));
    assert!(variations.contains("etes"));
    assert!(variations.contains("ete"));
    assert!(!variations.contains("été"));
}

#[test]
fn noun_variations_include_related() {
    let variations = morphology().variations("chat");
    assert!(variations.contains("chat"));
    assert!(variations.contains("chaton"));
    assert!(variations.contains("felin"));
}

#[test]
fn variations_always_contain_normalized_word() {
    for word in ["maison", "Étudiant", "belles", "suis", "mangent", "aujourd'hui", "lieu", "x", ""] {
        let variations = morphology().variations(word);
        assert!(variations.contains(&normalize(word)), "missing seed for {word:?}");
    }
}

#[test]
fn variations_for_valid_words_never_contain_empty() {
    for word in ["vendre", "re", "ir", "manger"] {
        if is_valid_french_word(word) {
            assert!(!morphology().variations(word).contains(""));
        }
    }
}

#[test]
fn related_words_by_type() {
    let m = morphology();
    assert!(m.related_words("suis").contains(&"sommes".to_string()));
    assert_eq!(m.related_words("maison"), vec!["appartement", "logement", "habitation"]);
    assert!(m.related_words("grandes").contains(&"grand".to_string()));
    assert!(m.related_words("lieu").is_empty());
    assert!(m.related_words("Paris").is_empty());
    assert!(m.related_words("les").is_empty());
}

#[test]
fn conjugation_classes() {
    assert_eq!(ConjugationClass::for_infinitive("parler"), &[ConjugationClass::Er]);
    assert_eq!(
        ConjugationClass::for_infinitive("finir"),
        &[ConjugationClass::IrIss, ConjugationClass::Ir]
    );
    assert_eq!(ConjugationClass::for_infinitive("prendre"), &[ConjugationClass::Re]);
    assert!(ConjugationClass::for_infinitive("maison").is_empty());
    assert!(regular_forms("maison").is_empty());
}

#[test]
fn regular_forms_have_no_duplicates() {
    let forms = regular_forms("finir");
    let mut deduped = forms.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(forms.len(), deduped.len());
}

#[test]
fn injected_lexicon_replaces_global_tables() {
    let mut lexicon = Lexicon::new();
    lexicon.add_verb("suivre", &["suis", "suit", "suivons"]);
    let lexicon = Arc::new(lexicon);

    let morphology = FrenchMorphology::with_lexicon(Arc::clone(&lexicon));
    assert_eq!(morphology.base_form("suis"), "suivre");
    assert_eq!(morphology.lexicon().verb_count(), 1);
    assert_eq!(morphology.lexicon().noun_count(), 0);

    // Clones share the same tables
    let copy = morphology.clone();
    assert_eq!(copy.base_form("suivons"), "suivre");
    assert_eq!(Arc::strong_count(&lexicon), 3);

    assert_eq!(FrenchMorphology::new().base_form("suis"), "être");
}
