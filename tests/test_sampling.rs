//! Integration test: Seeded sampling across the catalog

use tunebot::catalog::{available_spaces, search_space};
use tunebot::sampler::{sample, RandomSampler};
use tunebot::space::ParamValue;

#[test]
fn test_sampling_is_deterministic_per_seed() {
    for name in available_spaces(false) {
        let mut wrapper = search_space(name, None).unwrap();
        wrapper.wrap_in_fixed_pipeline().unwrap();
        let space = wrapper.assemble().unwrap();

        let a = sample(&space, 42).unwrap();
        let b = sample(&space, 42).unwrap();
        assert_eq!(a, b, "family '{name}' is not reproducible under seed 42");
    }
}

#[test]
fn test_sampled_values_stay_in_their_domains() {
    for name in available_spaces(false) {
        let wrapper = search_space(name, None).unwrap();
        let space = wrapper.assemble().unwrap();
        let mut sampler = RandomSampler::new(Some(1));
        for _ in 0..100 {
            let config = sampler.sample(&space).unwrap();
            for (param, value) in config.iter() {
                let hp = space.get(param).unwrap();
                assert!(
                    hp.contains(value),
                    "family '{name}': '{param}' sampled {value} outside its domain"
                );
            }
        }
    }
}

#[test]
fn test_inactive_conditionals_are_absent() {
    let wrapper = search_space("svc", None).unwrap();
    let space = wrapper.assemble().unwrap();
    let mut sampler = RandomSampler::new(Some(5));
    for _ in 0..200 {
        let config = sampler.sample(&space).unwrap();
        let kernel = config.get("kernel").and_then(ParamValue::as_str).unwrap();
        assert_eq!(config.contains("degree"), kernel == "poly");
        assert_eq!(
            config.contains("coef0"),
            kernel == "poly" || kernel == "sigmoid"
        );
    }
}

#[test]
fn test_configurations_flatten_and_serialize() {
    let mut wrapper = search_space("random_forest", None).unwrap();
    wrapper.wrap_in_fixed_pipeline().unwrap();
    let space = wrapper.assemble().unwrap();
    let config = sample(&space, 9).unwrap();

    let flat = config.to_flat_map();
    assert_eq!(flat.len(), config.len());
    for (name, _) in config.iter() {
        assert!(flat.contains_key(name));
    }

    let json = serde_json::to_string(&config).unwrap();
    let back: tunebot::space::Configuration = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}
