use bitvec::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hamming_fec::ecc::{Codec, ExtendedHammingCode, HammingCode};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

fn random_word(rng: &mut ChaCha20Rng, len: usize) -> BitVec {
    (0..len).map(|_| rng.gen::<bool>()).collect()
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("hamming_encode");
    let mut rng = ChaCha20Rng::seed_from_u64(1);
    for m in [3, 5, 7] {
        let code = HammingCode::new(m).unwrap();
        let source = random_word(&mut rng, code.data_length());
        group.bench_with_input(BenchmarkId::from_parameter(m), &source, |b, source| {
            b.iter(|| code.encode(black_box(source)).unwrap())
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("hamming_decode");
    let mut rng = ChaCha20Rng::seed_from_u64(2);
    for m in [3, 5, 7] {
        let code = HammingCode::new(m).unwrap();
        let source = random_word(&mut rng, code.data_length());
        let mut word = code.encode(&source).unwrap();
        let position = rng.gen_range(0..word.len());
        let bit = word[position];
        word.set(position, !bit);
        group.bench_with_input(BenchmarkId::from_parameter(m), &word, |b, word| {
            b.iter(|| code.decode(black_box(word)).unwrap())
        });
    }
    group.finish();
}

fn bench_extended_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("extended_hamming_decode");
    let mut rng = ChaCha20Rng::seed_from_u64(3);
    for m in [3, 5, 7] {
        let code = ExtendedHammingCode::new(m).unwrap();
        let source = random_word(&mut rng, code.data_length());
        let mut word = code.encode(&source).unwrap();
        for position in [0, word.len() - 1] {
            let bit = word[position];
            word.set(position, !bit);
        }
        group.bench_with_input(BenchmarkId::from_parameter(m), &word, |b, word| {
            b.iter(|| code.decode(black_box(word)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode, bench_extended_decode);
criterion_main!(benches);
