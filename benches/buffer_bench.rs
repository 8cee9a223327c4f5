use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use wordwright::transform::{to_sentence_case, to_title_case};
use wordwright::TextBuffer;

const SENTENCE: &str = "the quick brown fox jumps over the lazy dog. it was 3.14 metres away! ";

// WHY: Compare in-place buffer edits against rebuilding a String per edit
fn bench_buffer_edits(c: &mut Criterion) {
    let text = SENTENCE.repeat(64);
    let len = text.chars().count();

    let mut group = c.benchmark_group("buffer_edits");
    group.throughput(Throughput::Elements(len as u64));

    group.bench_function("text_buffer_replace", |b| {
        b.iter(|| {
            let mut buffer = TextBuffer::from(text.as_str());
            for index in (0..len).step_by(97) {
                buffer.replace(index, "GEESE", 3);
            }
            black_box(buffer.len())
        });
    });

    group.bench_function("string_rebuild", |b| {
        b.iter(|| {
            let mut chars: Vec<char> = text.chars().collect();
            for index in (0..len).step_by(97) {
                let end = (index + 3).min(chars.len());
                chars.splice(index..end, "GEESE".chars());
            }
            black_box(chars.into_iter().collect::<String>().len())
        });
    });

    group.finish();
}

fn bench_case_transforms(c: &mut Criterion) {
    let text = SENTENCE.repeat(64);

    let mut group = c.benchmark_group("case_transforms");
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("title_case", |b| b.iter(|| black_box(to_title_case(&text))));
    group.bench_function("sentence_case", |b| b.iter(|| black_box(to_sentence_case(&text))));
    group.finish();
}

criterion_group!(benches, bench_buffer_edits, bench_case_transforms);
criterion_main!(benches);
