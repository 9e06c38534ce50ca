//! Upper-tower tests: Fp6, Fp12, and the alternate Fp4-basis
//! representation.

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::super::field::fp::Fp;
use super::super::field::fp12::Fp12;
use super::super::field::fp12alt::{Fp12Alt, LineValue};
use super::super::field::fp2::Fp2;
use super::super::field::fp6::Fp6;

const SAMPLES: usize = 128;

fn rng() -> StdRng {
    StdRng::seed_from_u64(0x6477_4b84_f385_12bf)
}

// ============================================================================
// Fp6
// ============================================================================

#[test]
fn fp6_field_laws() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let a = Fp6::random(&mut rng);
        let b = Fp6::random(&mut rng);
        let c = Fp6::random(&mut rng);

        assert_eq!((a + b) + c, a + (b + c));
        assert_eq!(a + b, b + a);
        assert_eq!(a + Fp6::zero(), a);
        assert_eq!(a + (-a), Fp6::zero());

        assert_eq!(a * b, b * a);
        assert_eq!((a * b) * c, a * (b * c));
        assert_eq!(a * (b + c), a * b + a * c);
        assert_eq!(a * Fp6::one(), a);
        assert_eq!(a.square(), a * a);

        if !bool::from(a.is_zero()) {
            assert_eq!(a * a.invert().unwrap(), Fp6::one());
        }
    }
}

#[test]
fn fp6_mul_beta_matches_mul_by_v() {
    let v = Fp6 {
        c0: Fp2::zero(),
        c1: Fp2::one(),
        c2: Fp2::zero(),
    };
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let a = Fp6::random(&mut rng);
        assert_eq!(a.mul_beta(), a * v);
    }
}

#[test]
fn fp6_v_cubes_to_nonresidue() {
    let v = Fp6 {
        c0: Fp2::zero(),
        c1: Fp2::one(),
        c2: Fp2::zero(),
    };
    let xi = Fp6::from(Fp2 {
        c0: Fp::one(),
        c1: Fp::one(),
    });
    assert_eq!(v * v * v, xi);
}

#[test]
fn fp6_frobenius_is_multiplicative() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let a = Fp6::random(&mut rng);
        let b = Fp6::random(&mut rng);
        assert_eq!(
            (a * b).frobenius_map(),
            a.frobenius_map() * b.frobenius_map()
        );
    }
}

#[test]
fn fp6_frobenius_order_divides_six() {
    let mut rng = rng();
    for _ in 0..4 {
        let a = Fp6::random(&mut rng);
        let mut f = a;
        for _ in 0..6 {
            f = f.frobenius_map();
        }
        assert_eq!(f, a);
    }
}

// ============================================================================
// Fp12
// ============================================================================

#[test]
fn fp12_field_laws() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let a = Fp12::random(&mut rng);
        let b = Fp12::random(&mut rng);
        let c = Fp12::random(&mut rng);

        assert_eq!((a + b) + c, a + (b + c));
        assert_eq!(a + b, b + a);
        assert_eq!(a + Fp12::zero(), a);
        assert_eq!(a + (-a), Fp12::zero());

        assert_eq!(a * b, b * a);
        assert_eq!((a * b) * c, a * (b * c));
        assert_eq!(a * (b + c), a * b + a * c);
        assert_eq!(a * Fp12::one(), a);
        assert_eq!(a.square(), a * a);

        if !bool::from(a.is_zero()) {
            assert_eq!(a * a.invert().unwrap(), Fp12::one());
        }
    }
}

#[test]
fn fp12_inverse_of_product() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let a = Fp12::random(&mut rng);
        let b = Fp12::random(&mut rng);
        if bool::from(a.is_zero()) || bool::from(b.is_zero()) {
            continue;
        }
        assert_eq!(
            (a * b).invert().unwrap(),
            a.invert().unwrap() * b.invert().unwrap()
        );
    }
}

#[test]
fn fp12_conjugation_law() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let x = Fp12::random(&mut rng);
        let n = x.cjg() * x;

        // cjg(x)·x = c0² − c1²·v lies in Fp6.
        assert_eq!(n.c1, Fp6::zero());
        assert_eq!(n.c0, x.c0.square() - x.c1.square().mul_beta());
    }
}

#[test]
fn fp12_frobenius_is_multiplicative() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let a = Fp12::random(&mut rng);
        let b = Fp12::random(&mut rng);
        assert_eq!(
            (a * b).frobenius_map(),
            a.frobenius_map() * b.frobenius_map()
        );
    }
}

#[test]
fn fp12_frobenius_order_divides_twelve() {
    let mut rng = rng();
    for _ in 0..4 {
        let a = Fp12::random(&mut rng);
        let mut f = a;
        for _ in 0..12 {
            f = f.frobenius_map();
        }
        assert_eq!(f, a);
    }
}

#[test]
fn fp12_frobenius_is_p_power() {
    // The base-field characteristic, big-endian.
    let p = hex::decode(
        "1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f624\
         1eabfffeb153ffffb9feffffffffaaab",
    )
    .unwrap();

    let mut rng = rng();
    for _ in 0..4 {
        let a = Fp12::random(&mut rng);
        assert_eq!(a.frobenius_map(), a.exp_vartime(&p));
    }
}

#[test]
fn fp12_exp_vartime_edge_cases() {
    let mut rng = rng();
    let x = Fp12::random(&mut rng);

    // Empty and all-zero exponents give one.
    assert_eq!(x.exp_vartime(&[]), Fp12::one());
    assert_eq!(x.exp_vartime(&[0, 0, 0]), Fp12::one());

    assert_eq!(x.exp_vartime(&[1]), x);
    assert_eq!(x.exp_vartime(&[2]), x.square());
    assert_eq!(x.exp_vartime(&[5]), x.square().square() * x);
    // Leading zero bytes do not change the result.
    assert_eq!(x.exp_vartime(&[0, 0, 5]), x.exp_vartime(&[5]));
    // x^256 via a two-byte exponent.
    assert_eq!(x.exp_vartime(&[1, 0]), x.exp_vartime(&[16]).exp_vartime(&[16]));
}

#[test]
fn fp12_mul_beta_is_basis_change_map() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let x = Fp12::random(&mut rng);
        let y = x.mul_beta();
        assert_eq!(y.c0, x.c0 - x.c1);
        assert_eq!(y.c1, x.c0 + x.c1);
    }
}

// ============================================================================
// Fp12Alt and LineValue
// ============================================================================

#[test]
fn fp12alt_round_trip() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let x = Fp12::random(&mut rng);
        let alt = Fp12Alt::from_fp12(&x);
        assert_eq!(alt.to_fp12(), x);
    }
    assert_eq!(Fp12Alt::from_fp12(&Fp12::one()), Fp12Alt::one());
    assert_eq!(Fp12Alt::one().to_fp12(), Fp12::one());
}

#[test]
fn fp12alt_arithmetic_matches_fp12() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let x = Fp12::random(&mut rng);
        let y = Fp12::random(&mut rng);
        let xa = Fp12Alt::from_fp12(&x);
        let ya = Fp12Alt::from_fp12(&y);

        assert_eq!((xa + ya).to_fp12(), x + y);
        assert_eq!((xa * ya).to_fp12(), x * y);
        assert_eq!(xa.square().to_fp12(), x.square());
        assert_eq!(xa.square(), xa * xa);
    }
}

fn random_line(rng: &mut StdRng) -> LineValue {
    LineValue {
        l0: Fp2::random(&mut *rng),
        l1: Fp2::random(&mut *rng),
        l2: Fp2::random(&mut *rng),
    }
}

/// The dense Fp12Alt element a line value stands for.
fn line_to_dense(line: &LineValue) -> Fp12Alt {
    use super::super::field::fp4::Fp4;
    Fp12Alt {
        c0: Fp4 {
            c0: line.l0,
            c1: line.l2,
        },
        c1: Fp4::zero(),
        c2: Fp4 {
            c0: line.l1,
            c1: Fp2::zero(),
        },
    }
}

#[test]
fn mul_line_matches_dense_multiplication() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let x = Fp12Alt::from_fp12(&Fp12::random(&mut rng));
        let line = random_line(&mut rng);
        assert_eq!(x.mul_line(&line), x * line_to_dense(&line));
    }
}

#[test]
fn mul_line_by_zero_line_is_zero() {
    let zero_line = LineValue {
        l0: Fp2::zero(),
        l1: Fp2::zero(),
        l2: Fp2::zero(),
    };
    assert!(bool::from(zero_line.is_zero()));

    let mut rng = rng();
    for _ in 0..SAMPLES {
        let x = Fp12Alt::from_fp12(&Fp12::random(&mut rng));
        assert_eq!(x.mul_line(&zero_line).to_fp12(), Fp12::zero());
    }
}

#[test]
fn mul_line_by_one_is_identity() {
    let one = LineValue::one();
    assert!(!bool::from(one.is_zero()));

    let mut rng = rng();
    for _ in 0..SAMPLES {
        let x = Fp12Alt::from_fp12(&Fp12::random(&mut rng));
        assert_eq!(x.mul_line(&one), x);
    }
}
