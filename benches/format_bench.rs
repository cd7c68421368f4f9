use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rphonecanon::{
    iban_format_with_pos, PhoneNumberFormat, PhoneNumberRecord, PositionedValue,
    PositionedValueWithCountry, PHONE_NUMBER_UTIL,
};
use strum::IntoEnumIterator;

fn setup_numbers() -> Vec<PhoneNumberRecord> {
    [
        ("030 1234567", "DE"),
        ("+49 30 1234567 ext. 89", "DE"),
        ("+43 1 5880", "AT"),
        ("+1 212 555 1234", "US"),
        ("01 23 45 67 89", "FR"),
    ]
    .iter()
    .map(|(number, region)| PHONE_NUMBER_UTIL.parse(number, region, "en"))
    .collect()
}

fn formatting_benchmark(c: &mut Criterion) {
    let numbers = setup_numbers();
    let mut group = c.benchmark_group("Formatting");

    for format in PhoneNumberFormat::iter() {
        group.bench_function(format!("format({:?})", format), |b| {
            b.iter(|| {
                for number in &numbers {
                    PHONE_NUMBER_UTIL.format(black_box(Some(number)), black_box(format));
                }
            })
        });
    }

    let typed = PositionedValueWithCountry::new("+49 (0)30 12345".to_owned(), 8, "DE", "de");
    group.bench_function("format_with_pos(E123National)", |b| {
        b.iter(|| PHONE_NUMBER_UTIL.format_with_pos(black_box(&typed), PhoneNumberFormat::E123National))
    });

    let iban = PositionedValue::new("DE167016000000005554".to_owned(), 7);
    group.bench_function("iban_format_with_pos", |b| {
        b.iter(|| iban_format_with_pos(black_box(&iban)))
    });

    group.finish();
}

criterion_group!(benches, formatting_benchmark);
criterion_main!(benches);
