use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use spellfeat::{Config, Message, Pipeline, SymSpellCorrector, split_words};
use std::hint::black_box;
use std::sync::Arc;

const DICTIONARY: &str = "\
the 23135851162
of 13151942776
and 12997637966
to 12136980858
a 9081174698
in 8469404971
for 5933321709
is 4705743816
on 3750423199
that 3400031103
by 3350048871
this 3228469771
with 3183110675
i 3086225277
you 2996181025
it 2813163874
not 2633487141
or 2590739907
be 2398724162
are 2393614870
want 800000000
buy 300000000
pizza 90000000
hello 100000000
world 500000000
please 450000000
order 400000000
large 350000000
cheese 60000000
";

/// Utterances with a typo roughly every third word.
fn utterances(count: usize) -> Vec<String> {
    let samples = [
        "helo i wnat to buy a pizza",
        "pleese order a large cheeze pizza",
        "is this the werld of pizza",
        "you are not in the wrld",
        "buy it for me and that is it",
    ];
    (0..count)
        .map(|i| samples[i % samples.len()].to_string())
        .collect()
}

fn pipeline(workers: usize) -> Pipeline {
    let corrector = SymSpellCorrector::from_dictionary(DICTIONARY, "en");
    let mut config = Config::default();
    config.pipeline.workers = workers;
    Pipeline::new(&config, Arc::new(corrector)).expect("pipeline should build")
}

fn bench_split(c: &mut Criterion) {
    let text = "hallo chatbot, i wanna buy a #pizza @joe's for 10'000.00 -- ok?";
    c.bench_function("split_words", |b| b.iter(|| split_words(black_box(text))));
}

fn bench_process(c: &mut Criterion) {
    let pipeline = pipeline(1);
    c.bench_function("process_single_message", |b| {
        b.iter(|| {
            let mut message = Message::new("pleese order a large cheeze pizza");
            pipeline
                .process(black_box(&mut message))
                .expect("processing should succeed");
            message
        })
    });
}

fn bench_train(c: &mut Criterion) {
    let mut group = c.benchmark_group("train_batch");
    let batch = utterances(512);

    for workers in [1, 2, 4] {
        let pipeline = pipeline(workers);
        group.bench_with_input(BenchmarkId::from_parameter(workers), &batch, |b, batch| {
            b.iter(|| {
                let mut messages: Vec<Message> = batch.iter().map(Message::new).collect();
                pipeline
                    .train(black_box(&mut messages))
                    .expect("training should succeed");
                messages
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_split, bench_process, bench_train);
criterion_main!(benches);
