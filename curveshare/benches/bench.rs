use criterion::{black_box, criterion_group, criterion_main, Criterion};
use curveshare::shamir::Shamir;
use curveshare_traits::randomness::GeneralRng;
use curveshare_traits::secret_sharing::TOfNSecretSharing;
use curveshare_traits::security::BitsOfSecurity;
use rand_core::OsRng;

fn shamir_benchmark(c: &mut Criterion) {
    // Ignore noise up to 5%
    let mut group = c.benchmark_group("shamir");
    group.noise_threshold(0.05);

    let mut rng = GeneralRng::new(OsRng);
    let shamir = Shamir::setup(&BitsOfSecurity::AES128);

    group.bench_function("split 3-of-5", |b| {
        b.iter(|| {
            black_box(shamir.split(b"ReaganIsDumbledore", 3, 5, &mut rng));
        })
    });

    let shares = shamir.split(b"ReaganIsDumbledore", 3, 5, &mut rng);

    group.bench_function("combine 3-of-5", |b| {
        b.iter(|| black_box(shamir.combine(&shares[..3]).unwrap()))
    });
}

criterion_group!(benches, shamir_benchmark);
criterion_main!(benches);
