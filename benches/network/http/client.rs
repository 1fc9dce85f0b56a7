use std::hint::black_box;

use criterion::{Criterion, Throughput};
use librequests::network::error::Error;
use librequests::network::http::{Body, Client, Exchange, Options, encode};
use librequests::network::{Envelope, Sink, Transport};
use librequests::system::platform::StaticPlatform;

/// Transport that delivers the same chunk a fixed number of times.
struct ChunkTransport {
    chunk: Vec<u8>,
    count: usize,
}

impl Transport for ChunkTransport {
    fn execute(&mut self, _envelope: &Envelope<'_>, sink: &mut Sink<'_>) -> Result<u16, Error> {
        for _ in 0..self.count {
            sink(&self.chunk)?;
        }
        Ok(200)
    }

    fn close(self) -> Result<(), Error> {
        Ok(())
    }
}

pub fn bench_form_encode(c: &mut Criterion) {
    let pairs = [
        ("device", "sensor-01"),
        ("firmware", "1.4.2"),
        ("reading", "23.5 C / 48% RH"),
        ("location", "lab & field"),
    ];
    let payload_len = encode::form(&pairs).unwrap().len();

    let mut group = c.benchmark_group("form_encode");
    group.throughput(Throughput::Bytes(payload_len as u64));
    group.bench_function("form_encode", |b| {
        b.iter(|| encode::form(black_box(&pairs)).unwrap())
    });
    group.finish();
}

pub fn bench_body_append(c: &mut Criterion) {
    let chunk = vec![0xA5u8; 1024];
    let count = 64;

    let mut group = c.benchmark_group("body_append");
    group.throughput(Throughput::Bytes((chunk.len() * count) as u64));
    group.bench_function("body_append", |b| {
        b.iter(|| {
            let mut body = Body::new();
            for _ in 0..count {
                body.append(black_box(&chunk)).unwrap();
            }
            body
        })
    });
    group.finish();
}

pub fn bench_dispatch(c: &mut Criterion) {
    let chunk_len = 1024;
    let count = 16;

    let mut group = c.benchmark_group("dispatch");
    group.throughput(Throughput::Bytes((chunk_len * count) as u64));
    group.bench_function("get", |b| {
        b.iter_batched_ref(
            || {
                let transport = ChunkTransport {
                    chunk: vec![0x5Au8; chunk_len],
                    count,
                };
                let platform = StaticPlatform {
                    name: "linux",
                    release: "6.1.0",
                };
                let options = Options {
                    product: "librequests",
                    version: "0.1",
                };
                (
                    Client::new(transport, platform, options),
                    Exchange::new("http://bench.local/get"),
                )
            },
            |(client, exchange)| {
                client.get(exchange).expect("dispatch failed");
            },
            criterion::BatchSize::SmallInput,
        )
    });
    group.finish();
}
