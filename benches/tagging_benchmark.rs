#[macro_use]
extern crate criterion;

use criterion::Criterion;
use pos_colorizer::pipelines::pos_coloring::POSColoringPipeline;
use pos_colorizer::pipelines::pos_tagging::POSModel;
use std::time::{Duration, Instant};

static PARAGRAPH: &str = "The quick brown fox jumps over the lazy dog. \
    She didn't know whether the old house, which stood near the river, had ever been sold!\n\
    In 2021, Amy moved to Paris because her company opened a new office there. \
    They're running late... but we can still catch the 7:45 train if we hurry.\n\n";

fn create_inputs(paragraphs: usize) -> Vec<String> {
    (0..paragraphs).map(|_| PARAGRAPH.to_string()).collect()
}

fn tagging_forward_pass(iters: u64, model: &POSModel, inputs: &[String]) -> Duration {
    let mut duration = Duration::new(0, 0);
    for _i in 0..iters {
        let start = Instant::now();
        let _ = model.predict(inputs).unwrap();
        duration = duration.checked_add(start.elapsed()).unwrap();
    }
    duration
}

fn coloring_forward_pass(iters: u64, pipeline: &POSColoringPipeline, text: &str) -> Duration {
    let mut duration = Duration::new(0, 0);
    for _i in 0..iters {
        let start = Instant::now();
        let _ = pipeline.predict(text).unwrap();
        duration = duration.checked_add(start.elapsed()).unwrap();
    }
    duration
}

fn tagging_load_model(iters: u64) -> Duration {
    let mut duration = Duration::new(0, 0);
    for _i in 0..iters {
        let start = Instant::now();
        let _ = POSModel::new(Default::default()).unwrap();
        duration = duration.checked_add(start.elapsed()).unwrap();
    }
    duration
}

fn bench_tagging(c: &mut Criterion) {
    //    Set-up models
    let model = POSModel::new(Default::default()).unwrap();
    let pipeline = POSColoringPipeline::new(Default::default()).unwrap();

    //    Define input
    let inputs = create_inputs(64);
    let document = inputs.concat();

    c.bench_function("Tagging forward pass", |b| {
        b.iter_custom(|iters| tagging_forward_pass(iters, &model, &inputs))
    });

    c.bench_function("Coloring forward pass", |b| {
        b.iter_custom(|iters| coloring_forward_pass(iters, &pipeline, &document))
    });

    c.bench_function("Load model", |b| b.iter_custom(tagging_load_model));
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = bench_tagging
}

criterion_main!(benches);
