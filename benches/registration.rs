use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use openapi_paths::method::HttpMethod;
use openapi_paths::operation::Operation;
use openapi_paths::paths::{ApiArgs, OperationDeclaration, PathTrie, PathsBuilder};
use std::hint::black_box;

fn resources(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("/zoo/section{i}/animals")).collect()
}

fn register(resources: &[String]) -> PathsBuilder {
    let mut paths = PathsBuilder::new();
    for resource in resources {
        paths
            .declare_path(&ApiArgs::new(resource.as_str()))
            .expect("resource should register");
        for method in [HttpMethod::Get, HttpMethod::Post] {
            paths
                .declare_operation(OperationDeclaration::new(
                    resource.as_str(),
                    method,
                    Operation::new(),
                ))
                .expect("operation should register");
        }
        paths
            .declare_operation(
                OperationDeclaration::new(resource.as_str(), HttpMethod::Get, Operation::new())
                    .with_path("/{id}/toys/{toy_id}"),
            )
            .expect("sub-resource should register");
    }
    paths
}

fn bench_registration(c: &mut Criterion) {
    let mut group = c.benchmark_group("registration");
    for count in [10, 100, 500] {
        let resources = resources(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &resources, |b, r| {
            b.iter(|| black_box(register(r).build()))
        });
    }
    group.finish();
}

fn bench_ambiguity_check(c: &mut Criterion) {
    let mut trie = PathTrie::new();
    for resource in resources(500) {
        trie.insert(&resource);
        trie.insert(&format!("{resource}/{{id}}/toys/{{toy_id}}"));
    }
    c.bench_function("trie_check", |b| {
        let candidates = [
            "/zoo/section250/animals/{id}/toys/{toy_id}",
            "/zoo/section499/animals/{id}/habitats",
            "/zoo/{category}/animals",
            "/inventory/{warehouse_id}/feeds",
        ];
        b.iter(|| {
            for candidate in candidates.iter() {
                black_box(trie.find_conflict(candidate));
            }
        })
    });
}

criterion_group!(benches, bench_registration, bench_ambiguity_check);
criterion_main!(benches);
