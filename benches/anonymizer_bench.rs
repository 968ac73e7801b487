use criterion::{black_box, criterion_group, criterion_main, Criterion};
use place_anonymizer::anonymizer::Anonymizer;

const DOCUMENT: &str = "杭州市西湖区人民政府关于印发《西湖区促进产业高质量发展若干政策》的通知。\
对在本区注册、纳税的企业给予奖励，良渚街道、瓶窑镇、塘栖村的企业优先。\
宁波市、温州市龙湾区，以及临海市参照执行。";

fn bench_anonymize(c: &mut Criterion) {
    let anonymizer = Anonymizer::new();

    c.bench_function("anonymize_text", |b| {
        b.iter(|| anonymizer.anonymize_text(black_box(DOCUMENT)))
    });

    c.bench_function("anonymize_text_unchanged", |b| {
        b.iter(|| anonymizer.anonymize_text(black_box("浙江省发展和改革委员会")))
    });
}

criterion_group!(benches, bench_anonymize);
criterion_main!(benches);
