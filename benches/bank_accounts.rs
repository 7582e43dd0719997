use bank_accounts::bank::account::Account;
use bank_accounts::run::run;
use criterion::{criterion_group, criterion_main, Criterion};
use rust_decimal_macros::dec;

pub fn bench_scenario(c: &mut Criterion) {
    c.bench_function("scenario", |b| b.iter(|| run(std::io::sink())));
}

pub fn bench_withdrawals_10000(c: &mut Criterion) {
    c.bench_function("withdrawals_10_000", |b| {
        b.iter(|| {
            let mut savings = Account::savings("S1", "John Doe", dec!(10000), dec!(0.02));
            let mut current = Account::current("C1", "Jane Doe", dec!(0), dec!(500));

            // The overdraft runs out after 2000 withdrawals, the rest get refused.
            for _ in 0..5_000 {
                let _ = savings.withdraw(dec!(1.5));
                let _ = current.withdraw(dec!(0.25));
            }
        })
    });
}

criterion_group!(benches, bench_scenario, bench_withdrawals_10000);
criterion_main!(benches);
