use kp_challenges::knapsack::*;
use kp_utils::u8s_from_str;

fn track(num_items: usize, correlation: Correlation) -> Track {
    Track::new(num_items, correlation)
}

#[test]
fn test_generate_instance_is_deterministic_per_seed() {
    let seed = u8s_from_str("deterministic");
    let track = track(50, Correlation::Uncorrelated);
    let a = Instance::generate_instance(&seed, &track).unwrap();
    let b = Instance::generate_instance(&seed, &track).unwrap();
    assert_eq!(a, b);

    let other = Instance::generate_instance(&u8s_from_str("other"), &track).unwrap();
    assert_ne!(a, other);
}

#[test]
fn test_uncorrelated_bounds_and_capacity() {
    let seed = u8s_from_str("uncorrelated");
    let instance = Instance::generate_instance(&seed, &track(200, Correlation::Uncorrelated)).unwrap();
    assert_eq!(instance.weights.len(), 200);
    assert_eq!(instance.values.len(), 200);
    assert!(instance.weights.iter().all(|&w| (1..=1000).contains(&w)));
    assert!(instance.values.iter().all(|&v| (1..=1000).contains(&v)));
    assert_eq!(instance.capacity, instance.weights.iter().sum::<u32>() / 2);
}

#[test]
fn test_strongly_correlated_values_offset_weights() {
    let seed = u8s_from_str("strong");
    let instance =
        Instance::generate_instance(&seed, &track(100, Correlation::StronglyCorrelated)).unwrap();
    for (w, v) in instance.weights.iter().zip(&instance.values) {
        assert_eq!(*v, *w + 200);
    }
}

#[test]
fn test_strongly_correlated_offset_follows_value_range() {
    let seed = u8s_from_str("range");
    let track = Track {
        num_items: 30,
        value_range: 57,
        correlation: Correlation::StronglyCorrelated,
    };
    let instance = Instance::generate_instance(&seed, &track).unwrap();
    for (w, v) in instance.weights.iter().zip(&instance.values) {
        assert!((1..=57).contains(w));
        assert_eq!(*v, *w + 11);
    }
}

#[test]
fn test_zero_value_range_is_rejected() {
    let track = Track {
        num_items: 3,
        value_range: 0,
        correlation: Correlation::Uncorrelated,
    };
    assert!(Instance::generate_instance(&[0; 32], &track).is_err());
}

#[test]
fn test_value_range_overflowing_values_is_rejected() {
    let track = Track {
        num_items: 3,
        value_range: 4_000_000_000,
        correlation: Correlation::StronglyCorrelated,
    };
    assert!(track.validate().is_err());
    assert!(Instance::generate_instance(&[0; 32], &track).is_err());
}

#[test]
fn test_total_weight_overflow_is_rejected() {
    let track = Track {
        num_items: 200,
        value_range: 100_000_000,
        correlation: Correlation::Uncorrelated,
    };
    assert!(track.validate().is_err());
    assert!(Instance::generate_instance(&[1; 32], &track).is_err());
}

#[test]
fn test_largest_safe_track_is_accepted() {
    let track = Track {
        num_items: 4,
        value_range: u32::MAX / 4,
        correlation: Correlation::StronglyCorrelated,
    };
    assert!(track.validate().is_ok());
    let instance = Instance::generate_instance(&[2; 32], &track).unwrap();
    assert_eq!(instance.capacity, instance.weights.iter().sum::<u32>() / 2);
}

#[test]
fn test_empty_instance() {
    let instance = Instance::generate_instance(&[7; 32], &track(0, Correlation::Uncorrelated)).unwrap();
    assert_eq!(instance.num_items(), 0);
    assert_eq!(instance.capacity, 0);
}

#[test]
fn test_correlation_parsing() {
    assert_eq!(
        "strongly_correlated".parse::<Correlation>().unwrap(),
        Correlation::StronglyCorrelated
    );
    assert_eq!(
        "uncorrelated".parse::<Correlation>().unwrap(),
        Correlation::Uncorrelated
    );
    assert!("weakly_correlated".parse::<Correlation>().is_err());
    assert_eq!(
        Correlation::from_name("weakly_correlated"),
        Correlation::Uncorrelated
    );
    assert_eq!(
        Correlation::from_name("strongly_correlated"),
        Correlation::StronglyCorrelated
    );
    assert_eq!(format!("{:<22}|", Correlation::Uncorrelated), "uncorrelated          |");
}

#[test]
fn test_track_json_defaults() {
    let track: Track = serde_json::from_str(r#"{"num_items": 12}"#).unwrap();
    assert_eq!(track, Track::new(12, Correlation::Uncorrelated));
    let track: Track =
        serde_json::from_str(r#"{"num_items": 5, "correlation": "strongly_correlated"}"#).unwrap();
    assert_eq!(track.correlation, Correlation::StronglyCorrelated);
}

#[test]
fn test_item_ratio() {
    assert_eq!(Item::new(0, 2, 3).ratio, 1.5);
    assert_eq!(Item::new(1, 0, 10).ratio, 0.0);
}

#[test]
fn test_instance_new_rejects_mismatched_lengths() {
    assert!(Instance::new(vec![1, 2], vec![1], 3).is_err());
    assert!(Instance::new(vec![1, 2], vec![1, 2], 3).is_ok());
}

#[test]
fn test_verify_solution() {
    let instance = Instance::new(vec![2, 3, 4, 5], vec![3, 4, 5, 6], 5).unwrap();
    assert_eq!(
        instance
            .verify_solution(&Solution { items: vec![0, 1] })
            .unwrap(),
        7
    );
    assert_eq!(instance.verify_solution(&Solution::new()).unwrap(), 0);
    assert!(instance
        .verify_solution(&Solution { items: vec![0, 0] })
        .is_err());
    assert!(instance
        .verify_solution(&Solution { items: vec![4] })
        .is_err());
    assert!(instance
        .verify_solution(&Solution { items: vec![1, 2] })
        .is_err());
}
