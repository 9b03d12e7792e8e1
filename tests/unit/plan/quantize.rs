use super::*;

#[test]
fn zero_inputs_produce_nothing() {
    assert_eq!(quantize_rings(0, 4, 16), None);
    assert_eq!(quantize_rings(100, 0, 16), None);
    assert_eq!(quantize_rings(100, 4, 0), None);
}

#[test]
fn small_intervals_force_minimum_block() {
    assert_eq!(
        quantize_rings(40, 10, 16),
        Some(RingInterval {
            interval: 16,
            steps: 2
        })
    );
    // Radius below one block still yields a single ring.
    assert_eq!(
        quantize_rings(10, 3, 16),
        Some(RingInterval {
            interval: 16,
            steps: 1
        })
    );
}

#[test]
fn unaligned_intervals_round_to_nearest_block() {
    assert_eq!(
        quantize_rings(100, 2, 16),
        Some(RingInterval {
            interval: 48,
            steps: 2
        })
    );
    assert_eq!(
        quantize_rings(300, 5, 16),
        Some(RingInterval {
            interval: 64,
            steps: 4
        })
    );
}

#[test]
fn aligned_intervals_are_untouched() {
    assert_eq!(
        quantize_rings(128, 4, 16),
        Some(RingInterval {
            interval: 32,
            steps: 4
        })
    );
}

#[test]
fn interval_is_always_block_aligned() {
    for min_block in [16u32, 32, 64] {
        for radius in 1..=600u32 {
            for steps in 1..=12u32 {
                let q = quantize_rings(radius, steps, min_block).unwrap();
                assert!(q.steps >= 1);
                assert_eq!(q.interval % min_block, 0, "r={radius} s={steps}");
                assert!(q.interval >= min_block);
            }
        }
    }
}
