use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kundali_vedic::{
    ALL_AMSHAS, ALL_HOUSE_SYSTEMS, HouseFrame, Rashi, ShadbalaInputs, all_shadbalas, amsha_position,
    calculate_ashtakavarga, compute_bhavas, vimshottari_hierarchy,
};

fn bhava_bench(c: &mut Criterion) {
    let frame = HouseFrame {
        ramc_deg: 211.3,
        latitude_deg: 28.6,
        obliquity_deg: 23.44,
        ayanamsa_deg: 23.7,
    };
    let mut group = c.benchmark_group("bhava");
    for system in ALL_HOUSE_SYSTEMS {
        group.bench_function(system.name(), |b| {
            b.iter(|| compute_bhavas(system, black_box(&frame)))
        });
    }
    group.finish();
}

fn amsha_bench(c: &mut Criterion) {
    c.bench_function("shodashavarga_one_longitude", |b| {
        b.iter(|| {
            ALL_AMSHAS
                .iter()
                .map(|&a| amsha_position(black_box(123.456), a).longitude)
                .sum::<f64>()
        })
    });
}

fn dasha_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("vimshottari");
    for depth in [1u8, 2, 3] {
        group.bench_function(format!("hierarchy_depth_{depth}"), |b| {
            b.iter(|| vimshottari_hierarchy(2_451_545.0, black_box(123.4), depth))
        });
    }
    group.finish();
}

fn strength_bench(c: &mut Criterion) {
    let inputs = ShadbalaInputs {
        sidereal_lons: [280.1, 45.2, 310.0, 265.5, 70.3, 300.9, 290.2, 310.4, 130.4],
        speeds: [1.01, 12.5, 0.7, -0.4, -0.1, 1.2, 0.11],
        bhava_numbers: [6, 11, 7, 5, 12, 7, 6],
        lagna_deg: 100.0,
    };
    let rashis = [9, 1, 10, 8, 2, 10, 9].map(Rashi::from_index);

    let mut group = c.benchmark_group("strength");
    group.bench_function("shadbala", |b| b.iter(|| all_shadbalas(black_box(&inputs))));
    group.bench_function("ashtakavarga", |b| {
        b.iter(|| calculate_ashtakavarga(black_box(&rashis), Rashi::Karka))
    });
    group.finish();
}

criterion_group!(benches, bhava_bench, amsha_bench, dasha_bench, strength_bench);
criterion_main!(benches);
