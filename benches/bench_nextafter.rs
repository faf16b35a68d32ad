use criterion::Criterion;
use fastnext::fastlibm;

use bench_util::{
    bench_enabled, bench_inputs2, configure_criterion, gen_bit_pairs, gen_pairs,
    glibc_nextafter, special_pairs, std_nextafter,
};

fn bench_nextafter(c: &mut Criterion) {
    if !bench_enabled("nextafter") {
        return;
    }
    let smoke = [
        (0.0, 1.0),
        (0.0, -1.0),
        (1.0, 2.0),
        (1.0, 0.0),
        (-1.0, -2.0),
    ];
    let common = gen_pairs(1024, -100.0, 100.0, 0x1701);
    let bits = gen_bit_pairs(1024, 0x6e65_7874);
    let special = special_pairs();

    for (name, inputs) in [
        ("nextafter/smoke", &smoke[..]),
        ("nextafter/common", &common[..]),
        ("nextafter/bits", &bits[..]),
        ("nextafter/special", &special[..]),
    ] {
        let mut group = c.benchmark_group(name);
        bench_inputs2(
            &mut group,
            inputs,
            ("fastlibm", "glibc"),
            fastlibm::nextafter,
            glibc_nextafter,
        );
        group.finish();
    }
}

fn bench_nextafter_portable(c: &mut Criterion) {
    if !bench_enabled("portable") {
        return;
    }
    let common = gen_pairs(1024, -100.0, 100.0, 0x1701);
    let special = special_pairs();

    for (name, inputs) in [
        ("portable/common", &common[..]),
        ("portable/special", &special[..]),
    ] {
        let mut group = c.benchmark_group(name);
        bench_inputs2(
            &mut group,
            inputs,
            ("bits", "frexp"),
            fastlibm::nextafter,
            fastlibm::nextafter_portable,
        );
        group.finish();
    }
}

fn bench_nextafter_std(c: &mut Criterion) {
    if !bench_enabled("std") {
        return;
    }
    let bits = gen_bit_pairs(1024, 0x7374_64);
    let mut group = c.benchmark_group("std/bits");
    bench_inputs2(
        &mut group,
        &bits,
        ("fastlibm", "next_up"),
        fastlibm::nextafter,
        std_nextafter,
    );
    group.finish();
}

fn main() {
    let mut c = configure_criterion();
    bench_nextafter(&mut c);
    bench_nextafter_portable(&mut c);
    bench_nextafter_std(&mut c);
    c.final_summary();
}
