use criterion::{criterion_group, criterion_main, Criterion};
use profile_ir::{rank_with, Document, Profile, RankConfig, Recommender, SimilarityAlgorithm, Vocabulary};

const WORDS: [&str; 16] = [
    "film", "actor", "the", "election", "of", "vote", "goal", "league",
    "and", "novel", "library", "a", "cinema", "minister", "striker", "rain",
];

fn synthetic_corpus(docs: usize, words_per_doc: usize) -> Vec<Document> {
    // deterministic LCG
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    (0..docs)
        .map(|i| {
            let mut text = String::with_capacity(words_per_doc * 8);
            for _ in 0..words_per_doc {
                state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                text.push_str(WORDS[(state >> 33) as usize % WORDS.len()]);
                text.push(' ');
            }
            Document::new(format!("doc{:05}", i + 1), text)
        })
        .collect()
}

fn vectorize_and_rank_benchmark(c: &mut Criterion) {
    let documents = synthetic_corpus(2_000, 400);

    c.bench_function("build_corpus", |b| {
        b.iter(|| {
            let mut recommender =
                Recommender::new(Vocabulary::reference().unwrap(), RankConfig::default()).unwrap();
            recommender.add_docs(&documents);
            recommender.corpus().doc_num()
        });
    });

    let mut recommender = Recommender::new(Vocabulary::reference().unwrap(), RankConfig::default()).unwrap();
    recommender.add_docs(&documents);
    let profile = Profile::new("User1", ["movies", "politics"]);
    let profile_vec = recommender.vectorizer().build_profile(&profile).unwrap();

    c.bench_function("rank_cosine", |b| {
        b.iter(|| {
            rank_with(
                &profile_vec,
                recommender.corpus(),
                0.1,
                &SimilarityAlgorithm::CosineSimilarity,
            )
        });
    });

    c.bench_function("recommend_weighted", |b| {
        b.iter(|| recommender.recommend(&profile).unwrap());
    });
}

criterion_group!(benches, vectorize_and_rank_benchmark);
criterion_main!(benches);
