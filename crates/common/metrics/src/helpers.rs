use prometheus_exporter::prometheus::{
    IntCounter, IntCounterVec, IntGauge, IntGaugeVec, default_registry,
    register_int_counter_vec_with_registry, register_int_counter_with_registry,
    register_int_gauge_vec_with_registry, register_int_gauge_with_registry,
};

pub fn create_int_counter(name: &str, help: &str) -> IntCounter {
    let registry = default_registry();
    register_int_counter_with_registry!(name, help, registry).expect("failed to create int counter")
}

pub fn create_int_counter_vec(name: &str, help: &str, label_names: &[&str]) -> IntCounterVec {
    let registry = default_registry();
    register_int_counter_vec_with_registry!(name, help, label_names, registry)
        .expect("failed to create int counter vec")
}

pub fn create_int_gauge(name: &str, help: &str) -> IntGauge {
    let registry = default_registry();
    register_int_gauge_with_registry!(name, help, registry).expect("failed to create int gauge")
}

pub fn create_int_gauge_vec(name: &str, help: &str, label_names: &[&str]) -> IntGaugeVec {
    let registry = default_registry();
    register_int_gauge_vec_with_registry!(name, help, label_names, registry)
        .expect("failed to create int gauge vec")
}

pub fn inc_int_counter_vec(counter_vec: &IntCounterVec, label_values: &[&str]) {
    counter_vec.with_label_values(label_values).inc();
}

pub fn set_int_gauge_vec(gauge_vec: &IntGaugeVec, value: i64, label_values: &[&str]) {
    gauge_vec.with_label_values(label_values).set(value);
}
