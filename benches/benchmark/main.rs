use criterion::criterion_main;



#[cfg(feature = "serde")]
criterion_main!(
    construction::construction_benches,
    search::search_benches,
    rendering::rendering_benches,
    features::serde_benches,
);

#[cfg(not(feature = "serde"))]
criterion_main!(
    construction::construction_benches,
    search::search_benches,
    rendering::rendering_benches,
);
