use criterion::{black_box, criterion_group, criterion_main, Criterion};

use carcoach_core::loan::{format_money, monthly_payment, LoanQuote};

fn bench_monthly_payment(c: &mut Criterion) {
    let mut group = c.benchmark_group("monthly_payment");

    group.bench_function("6%/5y", |b| {
        b.iter(|| monthly_payment(black_box(20_000.0), black_box(6.0), black_box(5)))
    });

    group.bench_function("0%/4y", |b| {
        b.iter(|| monthly_payment(black_box(12_000.0), black_box(0.0), black_box(4)))
    });

    group.bench_function("quote", |b| {
        b.iter(|| LoanQuote::from_price(black_box(35_000.0), black_box(5_000.0), 7.9, 6))
    });

    group.finish();
}

fn bench_format_money(c: &mut Criterion) {
    c.bench_function("format_money", |b| {
        b.iter(|| format_money(black_box(1_234_567.891)))
    });
}

criterion_group!(benches, bench_monthly_payment, bench_format_money);
criterion_main!(benches);
