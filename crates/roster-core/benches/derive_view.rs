//! Benchmarks for the derived employee view.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use roster_core::{Employee, EmployeeId, FieldFilter, SortKey, ViewQuery, derive_view};

const DIVISIONS: [&str; 4] = ["HR", "Engineering", "Finance", "Operations"];
const STATUSES: [&str; 3] = ["Tetap", "Kontrak", "Magang"];

fn employee_dataset(size: usize) -> Vec<Employee> {
    (0..size)
        .map(|index| Employee {
            id: EmployeeId::new(),
            nik: format!("EMP-{index:05}"),
            name: format!("Employee {index}"),
            division: DIVISIONS[index % DIVISIONS.len()].to_owned(),
            position: format!("Position {}", index % 17),
            status: STATUSES[index % STATUSES.len()].to_owned(),
            email: format!("employee{index}@contoh.co"),
            hire_date: format!("20{:02}-{:02}-{:02}", 10 + index % 15, 1 + index % 12, 1 + index % 28),
            ..Employee::default()
        })
        .collect()
}

fn bench_derive_view(c: &mut Criterion) {
    let dataset = employee_dataset(2_000);

    let by_name = ViewQuery {
        search: "employee 1".into(),
        division: FieldFilter::parse("Engineering"),
        status: FieldFilter::All,
        sort: SortKey::Name,
    };
    c.bench_function("derive_view_search_by_name", |b| {
        b.iter(|| black_box(derive_view(&dataset, &by_name)).len());
    });

    let by_hire_date = ViewQuery {
        sort: SortKey::HireDate,
        ..ViewQuery::default()
    };
    c.bench_function("derive_view_sort_hire_date", |b| {
        b.iter(|| black_box(derive_view(&dataset, &by_hire_date)).len());
    });
}

criterion_group!(view_benches, bench_derive_view);
criterion_main!(view_benches);
