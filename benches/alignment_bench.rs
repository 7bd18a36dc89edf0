use aligna::bio::alignment::{
    align_batch, build, reconstruct, AlignmentRequest, NeedlemanWunsch, ScoringParameters,
};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

fn create_dna_sequence(length: usize) -> Vec<u8> {
    let bases = b"ATGC";
    (0..length).map(|i| bases[i % 4]).collect()
}

fn create_sequence_with_mutations(base: &[u8], mutation_rate: f64) -> Vec<u8> {
    base.iter()
        .map(|&b| {
            if rand::random::<f64>() < mutation_rate {
                match b {
                    b'A' => b'T',
                    b'T' => b'G',
                    b'G' => b'C',
                    b'C' => b'A',
                    _ => b,
                }
            } else {
                b
            }
        })
        .collect()
}

fn bench_global_alignment(c: &mut Criterion) {
    let mut group = c.benchmark_group("global_alignment");
    let scoring = ScoringParameters::new(-2, 1, -1);

    for length in &[50, 100, 500, 1000] {
        let seq1 = create_dna_sequence(*length);
        let seq2 = create_sequence_with_mutations(&seq1, 0.05);

        group.throughput(Throughput::Elements((*length * *length) as u64));

        group.bench_with_input(
            BenchmarkId::new("needleman_wunsch", length),
            &(seq1.clone(), seq2.clone()),
            |b, (seq1, seq2)| {
                let aligner = NeedlemanWunsch::new(scoring);
                b.iter(|| aligner.align(black_box(seq1), black_box(seq2)));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("matrix_build", length),
            &(seq1.clone(), seq2.clone()),
            |b, (seq1, seq2)| {
                b.iter(|| build(black_box(seq1), black_box(seq2), &scoring));
            },
        );

        let (_, directions) = build(&seq1, &seq2, &scoring);
        group.bench_with_input(
            BenchmarkId::new("traceback", length),
            &(seq1, seq2),
            |b, (seq1, seq2)| {
                b.iter(|| reconstruct(black_box(seq1), black_box(seq2), &directions));
            },
        );
    }

    group.finish();
}

fn bench_batch_alignment(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_alignment");
    let scoring = ScoringParameters::new(-2, 1, -1);

    for count in &[8, 32] {
        let requests: Vec<_> = (0..*count)
            .map(|_| {
                let seq1 = create_dna_sequence(200);
                let seq2 = create_sequence_with_mutations(&seq1, 0.1);
                AlignmentRequest::new(
                    String::from_utf8_lossy(&seq1),
                    String::from_utf8_lossy(&seq2),
                    scoring,
                )
            })
            .collect();

        group.throughput(Throughput::Elements(*count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &requests, |b, requests| {
            b.iter(|| align_batch(black_box(requests)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_global_alignment, bench_batch_alignment);
criterion_main!(benches);
