use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gantt_core::{prepare, read_tasks_csv, CompletionCell, Palette, TaskRow};

fn build_rows(n: usize) -> Vec<TaskRow> {
    let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let categories = ["Phase", "Task", "Deadline"];
    (0..n)
        .map(|i| {
            let start = base + Duration::days((i * 7 % 365) as i64);
            let end = start + Duration::days((i % 30) as i64 + 1);
            let completion = (i % 4 != 0).then(|| (i % 11) as f64 / 10.0);
            TaskRow::new(format!("task {i}"), categories[i % 3], start, end, completion)
        })
        .collect()
}

fn build_csv(n: usize) -> String {
    let mut s = String::from("Task,Category,Start,End,Completion\n");
    for row in build_rows(n) {
        s.push_str(&format!(
            "{},{},{},{},{}\n",
            row.task.unwrap(),
            row.category.unwrap(),
            row.start.unwrap().format("%d/%m/%Y"),
            row.end.unwrap().format("%d/%m/%Y"),
            match row.completion {
                CompletionCell::Value(c) => c.to_string(),
                _ => String::new(),
            },
        ));
    }
    s
}

fn bench_prepare(c: &mut Criterion) {
    let mut group = c.benchmark_group("prepare");
    let palette = Palette::default();
    for &n in &[100usize, 10_000usize] {
        let rows = build_rows(n);
        group.bench_function(format!("rows_{n}"), |b| {
            b.iter(|| black_box(prepare(&rows, &palette).unwrap()))
        });
        let csv = build_csv(n);
        group.bench_function(format!("csv_{n}"), |b| {
            b.iter(|| black_box(read_tasks_csv(csv.as_bytes()).unwrap()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_prepare);
criterion_main!(benches);
