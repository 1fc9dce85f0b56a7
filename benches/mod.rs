use criterion::{criterion_group, criterion_main};

mod network;

criterion_group!(
    benches,
    network::http::client::bench_form_encode,
    network::http::client::bench_body_append,
    network::http::client::bench_dispatch
);
criterion_main!(benches);
