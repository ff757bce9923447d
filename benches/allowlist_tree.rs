use criterion::{criterion_group, criterion_main, Criterion};
use genesis_pass::allowlist_tree::utils::generate_dummy_entries;
use genesis_pass::allowlist_tree::AllowlistMerkleTree;

const MAX_POWER: u32 = 12;
const SAMPLE_SIZE: usize = 10;

fn build_tree_benchmark(_c: &mut Criterion) {
    let mut criterion = Criterion::default().sample_size(SAMPLE_SIZE);

    for i in 4..=MAX_POWER {
        let num_entries = 2usize.pow(i);
        let entries = generate_dummy_entries(num_entries);

        let bench_name = format!("build allowlist tree for 2 power of {} addresses", i);
        criterion.bench_function(&bench_name, |b| {
            b.iter(|| {
                AllowlistMerkleTree::from_entries(entries.clone()).unwrap();
            })
        });
    }
}

fn generate_proof_benchmark(_c: &mut Criterion) {
    let mut criterion = Criterion::default().sample_size(SAMPLE_SIZE);

    let num_entries = 2usize.pow(MAX_POWER);
    let tree = AllowlistMerkleTree::from_entries(generate_dummy_entries(num_entries)).unwrap();

    let bench_name = format!(
        "generate inclusion proof in a tree of 2 power of {} addresses",
        MAX_POWER
    );
    criterion.bench_function(&bench_name, |b| {
        b.iter(|| {
            tree.generate_proof(0).unwrap();
        })
    });

    let proof = tree.generate_proof(0).unwrap();
    let bench_name = format!(
        "verify inclusion proof in a tree of 2 power of {} addresses",
        MAX_POWER
    );
    criterion.bench_function(&bench_name, |b| {
        b.iter(|| {
            assert!(tree.verify_proof(&proof));
        })
    });
}

criterion_group!(benches, build_tree_benchmark, generate_proof_benchmark);
criterion_main!(benches);
