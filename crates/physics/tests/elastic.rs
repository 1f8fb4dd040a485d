use physics::resolve_elastic;

fn momentum(m1: f32, v1: f32, m2: f32, v2: f32) -> f32 {
    m1 * v1 + m2 * v2
}

fn energy(m1: f32, v1: f32, m2: f32, v2: f32) -> f32 {
    0.5 * m1 * v1 * v1 + 0.5 * m2 * v2 * v2
}

fn assert_close(expected: f32, actual: f32, rel: f32) {
    let scale = expected.abs().max(1.0);
    assert!(
        (expected - actual).abs() <= rel * scale,
        "expected {expected}, got {actual}"
    );
}

const CASES: [(f32, f32, f32, f32); 6] = [
    (1.0, 0.0, 100.0, -100.0),
    (1.0, 5.0, 1.0, -3.0),
    (2.5, -7.0, 0.5, 12.0),
    (10_000.0, -1.0, 1.0, 0.0),
    (3.0, 4.0, 3.0, 4.0),
    (0.25, 250.0, 64.0, -0.5),
];

#[test]
fn elastic_response_conserves_momentum() {
    for (m1, u1, m2, u2) in CASES {
        let (v1, v2) = resolve_elastic(m1, u1, m2, u2);
        assert_close(momentum(m1, u1, m2, u2), momentum(m1, v1, m2, v2), 1e-4);
    }
}

#[test]
fn elastic_response_conserves_kinetic_energy() {
    for (m1, u1, m2, u2) in CASES {
        let (v1, v2) = resolve_elastic(m1, u1, m2, u2);
        assert_close(energy(m1, u1, m2, u2), energy(m1, v1, m2, v2), 1e-4);
    }
}

#[test]
fn equal_masses_swap_velocities() {
    let (v1, v2) = resolve_elastic(2.0, 3.0, 2.0, -1.0);
    assert_close(-1.0, v1, 1e-6);
    assert_close(3.0, v2, 1e-6);
}

#[test]
fn heavy_block_launches_light_block_backwards() {
    let (v1, v2) = resolve_elastic(1.0, 0.0, 100.0, -100.0);

    // v1 = 2*m2/(m1+m2) * u2, v2 = (m2-m1)/(m1+m2) * u2
    assert_close(-20_000.0 / 101.0, v1, 1e-5);
    assert_close(-9_900.0 / 101.0, v2, 1e-5);

    assert!(v1 < -100.0, "light block should leave faster than 100, got {v1}");
    assert!(v2 > -100.0 && v2 < -95.0, "heavy block should barely slow, got {v2}");
}
