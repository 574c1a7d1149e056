use std::path::{Path, PathBuf};

use profile_ir::{
    loader, presenter, rank, Error, Profile, RankConfig, Recommender, Vectorizer, Vocabulary,
};

fn data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}

fn reference_recommender(config: RankConfig) -> Recommender {
    let vocabulary = loader::load_dictionary(&data_dir().join("dictionary")).unwrap();
    let mut recommender = Recommender::new(vocabulary, config).unwrap();
    let documents = loader::load_corpus(&data_dir().join("corpus")).unwrap();
    recommender.add_docs(&documents);
    recommender
}

fn profile(id: &str) -> Profile {
    loader::load_profiles(&data_dir().join("profiles"))
        .unwrap()
        .into_iter()
        .find(|p| p.id == id)
        .unwrap()
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn corpus_loads_in_lexical_order() {
    let documents = loader::load_corpus(&data_dir().join("corpus")).unwrap();
    let ids: Vec<&str> = documents.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "blade-runner",
            "chelsea",
            "film-quiz",
            "labour-activist",
            "poetry-prize",
            "sevilla-coach",
            "voters-ID-plan",
        ]
    );
}

#[test]
fn dictionary_file_matches_bundled_vocabulary() {
    let from_file = loader::load_dictionary(&data_dir().join("dictionary")).unwrap();
    let bundled = Vocabulary::reference().unwrap();
    assert_eq!(
        from_file.stems().collect::<Vec<_>>(),
        bundled.stems().collect::<Vec<_>>()
    );
    assert_eq!(from_file.variant_num(), bundled.variant_num());
}

#[test]
fn reference_term_frequencies() {
    let r = reference_recommender(RankConfig::default());
    let vocab = r.vocabulary();
    let blade = r.corpus().get("blade-runner").unwrap();
    assert_eq!(blade.tf.get_by_stem(vocab, "movi"), Some(8));
    assert_eq!(blade.tf.get_by_stem(vocab, "politic"), Some(0));
    assert_eq!(blade.token_sum, 34);

    let voters = r.corpus().get("voters-ID-plan").unwrap();
    assert_eq!(voters.tf.as_slice(), &[0, 8, 0, 0]);
    assert_eq!(voters.token_sum, 64);

    let labour = r.corpus().get("labour-activist").unwrap();
    assert_eq!(labour.tf.as_slice(), &[0, 5, 0, 0]);
    assert_eq!(labour.token_sum, 58);
}

#[test]
fn user3_politics_only() {
    let r = reference_recommender(RankConfig::default());
    let hits = r.recommend(&profile("User3")).unwrap();
    assert_eq!(hits.keys(), vec!["voters-ID-plan", "labour-activist"]);
    assert_close(hits.list[0].score, 0.625);
    assert_close(hits.list[1].score, 0.431034482759);
    assert_eq!(presenter::format_score(hits.list[1].score), "0.431034482759");
}

#[test]
fn user1_movies_and_politics() {
    let r = reference_recommender(RankConfig::default());
    let hits = r.recommend(&profile("User1")).unwrap();
    assert_eq!(
        hits.keys(),
        vec!["blade-runner", "film-quiz", "voters-ID-plan", "labour-activist"]
    );
    assert_close(hits.list[0].score, 0.831890330808);
    assert_close(hits.list[1].score, 0.471404520791);
    assert_close(hits.list[2].score, 0.441941738242);
    assert_close(hits.list[3].score, 0.304787405684);
    assert!(!hits.keys().contains(&"chelsea"));
    assert!(!hits.keys().contains(&"sevilla-coach"));
}

#[test]
fn user2_politics_and_soccer_skips_films() {
    let r = reference_recommender(RankConfig::default());
    let hits = r.recommend(&profile("User2")).unwrap();
    assert_eq!(
        hits.keys(),
        vec!["chelsea", "sevilla-coach", "voters-ID-plan", "labour-activist"]
    );
}

#[test]
fn plain_cosine_ties_break_on_id() {
    let r = reference_recommender(RankConfig::cosine(0.1));
    let hits = r.recommend(&profile("User3")).unwrap();
    // both politics documents point the same way
    assert_eq!(hits.keys(), vec!["labour-activist", "voters-ID-plan"]);
    assert_eq!(hits.list[0].score, 1.0);
    assert_eq!(hits.list[1].score, 1.0);
}

#[test]
fn rank_agrees_with_recommender_for_cosine() {
    let r = reference_recommender(RankConfig::cosine(0.1));
    let vectorizer: &Vectorizer = r.vectorizer();
    let user1 = vectorizer.build_profile(&profile("User1")).unwrap();
    let direct = rank(&user1, r.corpus(), 0.1);
    assert_eq!(direct, r.recommend(&profile("User1")).unwrap());
}

#[test]
fn every_profile_of_the_reference_set_ranks() {
    let r = reference_recommender(RankConfig::default());
    let profiles = loader::load_profiles(&data_dir().join("profiles")).unwrap();
    let outcomes = r.recommend_all(&profiles);
    assert_eq!(outcomes.len(), 4);
    assert!(outcomes.iter().all(|o| o.result.is_ok()));
    let user4 = outcomes[3].result.as_ref().unwrap();
    assert_eq!(user4.keys(), vec!["poetry-prize"]);
}

#[test]
fn bad_profile_is_isolated() {
    let r = reference_recommender(RankConfig::default());
    let profiles = loader::parse_profiles("User1#movies#politics\nUser5#moviez\nUser3#politics\n", "inline").unwrap();
    let outcomes = r.recommend_all(&profiles);
    assert!(outcomes[0].result.is_ok());
    assert!(matches!(outcomes[1].result, Err(Error::UnknownInterest { .. })));
    assert_eq!(outcomes[2].result.as_ref().unwrap().len(), 2);
}
