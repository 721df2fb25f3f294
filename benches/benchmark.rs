//! Benchmarks for the Enigma machine.
//!
//! Measures machine assembly time, encoding throughput for a fixed
//! message, and how throughput scales with the number of rotor slots.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use enigma::{Enigma, EnigmaSettings};

/// Settings used consistently across all benchmarks.
fn bench_settings() -> EnigmaSettings {
    EnigmaSettings::new(
        &["I", "IV", "III"],
        "WXC",
        "KDO",
        "AV BS CG DL FU HZ IN KM OW RX",
        "B",
    )
}

/// Benchmarks `Enigma::new()` assembly time.
///
/// Covers settings validation, plugboard parsing, and wiring table
/// expansion for all three rotors and the reflector.
fn bench_machine_assembly(c: &mut Criterion) {
    let settings = bench_settings();
    c.bench_function("machine_assembly", |b| {
        b.iter(|| Enigma::new(black_box(&settings)).unwrap());
    });
}

/// Benchmarks `encode()` throughput over a 260-letter message.
///
/// The machine is assembled once and rotor state advances naturally
/// between iterations, reflecting real streaming behavior.
fn bench_encode(c: &mut Criterion) {
    let mut machine = Enigma::new(&bench_settings()).unwrap();
    let message = "THEQUICKBROWNFOXJUMPSOVERTHELAZYDOG".repeat(8);

    let mut group = c.benchmark_group("encode");
    group.throughput(Throughput::Bytes(message.len() as u64));

    group.bench_function("3_rotors", |b| {
        b.iter(|| machine.encode(black_box(&message)));
    });

    group.finish();
}

/// Benchmarks `encode()` throughput across rotor-bank sizes.
///
/// Compares 3, 4, and 8 rotor slots to show the per-character cost of a
/// longer substitution chain.
fn bench_encode_rotor_scaling(c: &mut Criterion) {
    let configurations: &[(usize, &[&str])] = &[
        (3, &["I", "II", "III"]),
        (4, &["I", "II", "III", "IV"]),
        (8, &["I", "II", "III", "IV", "V", "VI", "VII", "VIII"]),
    ];
    let message = "THEQUICKBROWNFOXJUMPSOVERTHELAZYDOG".repeat(8);

    let mut group = c.benchmark_group("encode_rotor_scaling");
    group.throughput(Throughput::Bytes(message.len() as u64));

    for &(slots, rotor_types) in configurations {
        let positions = "A".repeat(slots);
        let settings = EnigmaSettings::new(rotor_types, &positions, &positions, "", "B");
        let mut machine = Enigma::new(&settings).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(slots), &slots, |b, _| {
            b.iter(|| machine.encode(black_box(&message)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_machine_assembly,
    bench_encode,
    bench_encode_rotor_scaling,
);
criterion_main!(benches);
