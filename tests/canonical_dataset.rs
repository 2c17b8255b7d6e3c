use blooming_insights::stats::{
    correlation_matrix, extremum, measurement_precision, summarize_by_group,
};
use blooming_insights::{load_dataset, report, Attribute, Extremum, Group, Species};

fn close(actual: f64, expected: f64, tolerance: f64) -> bool {
    (actual - expected).abs() <= tolerance
}

#[test]
fn setosa_summary() {
    let ds = load_dataset().unwrap();
    let groups = summarize_by_group(&ds, &Attribute::ALL);
    let setosa = &groups[&Species::Setosa];
    assert_eq!(setosa.count, 50);
    let petal = setosa.get(Attribute::PetalLength).unwrap();
    assert!(close(petal.mean, 1.46, 0.01));
    assert!(close(petal.std_dev, 0.1737, 1e-3));
    assert!(close(setosa.get(Attribute::SepalLength).unwrap().mean, 5.006, 1e-9));
}

#[test]
fn group_counts_cover_dataset() {
    let ds = load_dataset().unwrap();
    let groups = summarize_by_group(&ds, &Attribute::ALL);
    assert_eq!(groups.len(), 3);
    assert_eq!(groups.values().map(|g| g.count).sum::<usize>(), ds.len());
    assert_eq!(
        groups.keys().copied().collect::<Vec<_>>(),
        Species::ALL.to_vec()
    );
}

#[test]
fn canonical_correlations() {
    let ds = load_dataset().unwrap();
    let m = correlation_matrix(&ds, &Attribute::ALL);
    let petal = m
        .coefficient(Attribute::PetalLength, Attribute::PetalWidth)
        .unwrap();
    assert!(close(petal, 0.96, 0.02));
    let sepal_petal = m
        .coefficient(Attribute::SepalLength, Attribute::PetalLength)
        .unwrap();
    assert!(close(sepal_petal, 0.87, 0.01));

    for &a in &Attribute::ALL {
        assert_eq!(m.get(a, a), Some(1.0));
        for &b in &Attribute::ALL {
            let r = m.get(a, b).unwrap();
            assert_eq!(r.to_bits(), m.get(b, a).unwrap().to_bits());
            assert!((-1.0 - 1e-9..=1.0 + 1e-9).contains(&r));
        }
    }
}

#[test]
fn canonical_extrema() {
    let ds = load_dataset().unwrap();
    let max_petal = extremum(&ds, Group::All, Attribute::PetalLength, Extremum::Max).unwrap();
    assert!(close(max_petal, 6.9, 1e-9));
    let min_sepal_width =
        extremum(&ds, Group::All, Attribute::SepalWidth, Extremum::Min).unwrap();
    assert!(close(min_sepal_width, 2.0, 1e-9));
    let virginica_max = extremum(
        &ds,
        Group::Species(Species::Virginica),
        Attribute::PetalLength,
        Extremum::Max,
    )
    .unwrap();
    assert!(close(virginica_max, 6.9, 1e-9));
}

#[test]
fn repeated_computation_is_identical() {
    let ds = load_dataset().unwrap();
    assert_eq!(
        summarize_by_group(&ds, &Attribute::ALL),
        summarize_by_group(&ds, &Attribute::ALL)
    );
    let a = correlation_matrix(&ds, &Attribute::ALL);
    let b = correlation_matrix(&ds, &Attribute::ALL);
    for &x in &Attribute::ALL {
        for &y in &Attribute::ALL {
            assert_eq!(a.get(x, y).unwrap().to_bits(), b.get(x, y).unwrap().to_bits());
        }
    }
}

#[test]
fn average_variation() {
    let ds = load_dataset().unwrap();
    assert!(close(measurement_precision(&ds), 0.9479, 1e-3));
}

#[test]
fn report_narrates_the_garden() {
    let ds = load_dataset().unwrap();
    let text = report::render(&ds).unwrap();
    assert!(text.contains("Iris Setosa: 50 specimens"));
    assert!(text.contains("Our garden journal contains 150 detailed observations"));
    assert!(text.contains("Iris Setosa has the most compact petals, averaging only 1.5cm"));
    assert!(text.contains("Iris Virginica boasts the largest petals, reaching 6.9cm"));
    assert!(text.contains("sepal width: 2.0cm to 4.4cm"));
    assert!(text.contains("Petal length and width dance together (r = 0.96)"));
    assert!(text.contains("Sepals and petals grow in coordination (r = 0.87)"));
    assert!(text.contains("Measurement precision: 0.95 cm average variation"));
    assert!(text.contains("no missing data found"));
}
