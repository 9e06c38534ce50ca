//! Base and low-tower field tests for BLS12-381.

use rand::rngs::StdRng;
use rand::SeedableRng;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use super::super::field::fp::Fp;
use super::super::field::fp2::Fp2;
use super::super::field::fp4::Fp4;

const SAMPLES: usize = 128;

fn rng() -> StdRng {
    StdRng::seed_from_u64(0x1a01_11ea_397f_e69a)
}

// ============================================================================
// Fp
// ============================================================================

#[test]
fn fp_conditional_selection() {
    let a = Fp::from_raw_unchecked([1, 2, 3, 4, 5, 6]);
    let b = Fp::from_raw_unchecked([7, 8, 9, 10, 11, 12]);

    assert_eq!(
        Fp::conditional_select(&a, &b, Choice::from(0u8)),
        a
    );
    assert_eq!(
        Fp::conditional_select(&a, &b, Choice::from(1u8)),
        b
    );
}

#[test]
fn fp_equality_is_per_limb() {
    fn is_equal(a: &Fp, b: &Fp) -> bool {
        let eq = a == b;
        assert_eq!(eq, bool::from(a.ct_eq(b)));
        eq
    }

    let base = Fp::from_raw_unchecked([1, 2, 3, 4, 5, 6]);
    assert!(is_equal(&base, &Fp::from_raw_unchecked([1, 2, 3, 4, 5, 6])));
    for i in 0..6 {
        let mut limbs = [1, 2, 3, 4, 5, 6];
        limbs[i] = 7;
        assert!(!is_equal(&Fp::from_raw_unchecked(limbs), &base));
    }
}

#[test]
fn fp_multiplication() {
    let a = Fp::from_raw_unchecked([
        0x0397_a383_2017_0cd4,
        0x734c_1b2c_9e76_1d30,
        0x5ed2_55ad_9a48_beb5,
        0x095a_3c6b_22a7_fcfc,
        0x2294_ce75_d4e2_6a27,
        0x1333_8bd8_7001_1ebb,
    ]);
    let b = Fp::from_raw_unchecked([
        0xb9c3_c7c5_b119_6af7,
        0x2580_e208_6ce3_35c1,
        0xf49a_ed3d_8a57_ef42,
        0x41f2_81e4_9846_e878,
        0xe076_2346_c384_52ce,
        0x0652_e893_26e5_7dc0,
    ]);
    let c = Fp::from_raw_unchecked([
        0xf96e_f3d7_11ab_5355,
        0xe8d4_59ea_00f1_48dd,
        0x53f7_354a_5f00_fa78,
        0x9e34_a4f3_125c_5f83,
        0x3fbe_0c47_ca74_c19e,
        0x01b0_6a8b_bd4a_dfe4,
    ]);

    assert_eq!(a * b, c);
}

#[test]
fn fp_squaring() {
    let a = Fp::from_raw_unchecked([
        0xd215_d276_8e83_191b,
        0x5085_d80f_8fb2_8261,
        0xce9a_032d_df39_3a56,
        0x3e9c_4fff_2ca0_c4bb,
        0x6436_b6f7_f4d9_5dfb,
        0x1060_6628_ad4a_4d90,
    ]);
    let b = Fp::from_raw_unchecked([
        0x33d9_c42a_3cb3_e235,
        0xdad1_1a09_4c4c_d455,
        0xa2f1_44bd_729a_aeba,
        0xd415_0932_be9f_feac,
        0xe27b_c7c4_7d44_ee50,
        0x14b6_a78d_3ec7_a560,
    ]);

    assert_eq!(a.square(), b);
    assert_eq!(a.square(), a * a);
}

#[test]
fn fp_addition() {
    let a = Fp::from_raw_unchecked([
        0x5360_bb59_7867_8032,
        0x7dd2_75ae_799e_128e,
        0x5c5b_5071_ce4f_4dcf,
        0xcdb2_1f93_078d_bb3e,
        0xc323_65c5_e73f_474a,
        0x115a_2a54_89ba_be5b,
    ]);
    let b = Fp::from_raw_unchecked([
        0x9fd2_8773_3d23_dda0,
        0xb16b_f2af_738b_3554,
        0x3e57_a75b_d3cc_6d1d,
        0x900b_c0bd_627f_d6d6,
        0xd319_a080_efb2_45fe,
        0x15fd_caa4_e4bb_2091,
    ]);
    let c = Fp::from_raw_unchecked([
        0x3934_42cc_b58b_b327,
        0x1092_685f_3bd5_47e3,
        0x3382_252c_ab6a_c4c9,
        0xf946_94cb_7688_7f55,
        0x4b21_5e90_93a5_e071,
        0x0d56_e30f_34f5_f853,
    ]);

    assert_eq!(a + b, c);
}

#[test]
fn fp_subtraction() {
    let a = Fp::from_raw_unchecked([
        0x5360_bb59_7867_8032,
        0x7dd2_75ae_799e_128e,
        0x5c5b_5071_ce4f_4dcf,
        0xcdb2_1f93_078d_bb3e,
        0xc323_65c5_e73f_474a,
        0x115a_2a54_89ba_be5b,
    ]);
    let b = Fp::from_raw_unchecked([
        0x9fd2_8773_3d23_dda0,
        0xb16b_f2af_738b_3554,
        0x3e57_a75b_d3cc_6d1d,
        0x900b_c0bd_627f_d6d6,
        0xd319_a080_efb2_45fe,
        0x15fd_caa4_e4bb_2091,
    ]);
    let c = Fp::from_raw_unchecked([
        0x6d8d_33e6_3b43_4d3d,
        0xeb12_82fd_b766_dd39,
        0x8534_7bb6_f133_d6d5,
        0xa21d_aa5a_9892_f727,
        0x3b25_6cfb_3ad8_ae23,
        0x155d_7199_de7f_8464,
    ]);

    assert_eq!(a - b, c);
}

#[test]
fn fp_negation() {
    let a = Fp::from_raw_unchecked([
        0x5360_bb59_7867_8032,
        0x7dd2_75ae_799e_128e,
        0x5c5b_5071_ce4f_4dcf,
        0xcdb2_1f93_078d_bb3e,
        0xc323_65c5_e73f_474a,
        0x115a_2a54_89ba_be5b,
    ]);
    let b = Fp::from_raw_unchecked([
        0x669e_44a6_8798_2a79,
        0xa0d9_8a50_37b5_ed71,
        0x0ad5_822f_2861_a854,
        0x96c5_2bf1_ebf7_5781,
        0x87f8_41f0_5c0c_658c,
        0x08a6_e795_afc5_283e,
    ]);

    assert_eq!(-a, b);
    assert_eq!(-Fp::zero(), Fp::zero());
}

#[test]
fn fp_inversion() {
    let a = Fp::from_raw_unchecked([
        0x43b4_3a50_78ac_2076,
        0x1ce0_7630_46f8_962b,
        0x724a_5276_486d_735c,
        0x6f05_c2a6_282d_48fd,
        0x2095_bd5b_b4ca_9331,
        0x03b3_5b38_94b0_f7da,
    ]);
    let b = Fp::from_raw_unchecked([
        0x69ec_d704_0952_148f,
        0x985c_cc20_2219_0f55,
        0xe19b_ba36_a9ad_2f41,
        0x19bb_16c9_5219_dbd8,
        0x14dc_acfd_fb47_8693,
        0x115f_f58a_fff9_a8e1,
    ]);

    assert_eq!(a.invert().unwrap(), b);
    assert!(bool::from(Fp::zero().invert().is_none()));
}

#[test]
fn fp_field_laws() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let a = Fp::random(&mut rng);
        let b = Fp::random(&mut rng);
        let c = Fp::random(&mut rng);

        assert_eq!((a + b) + c, a + (b + c));
        assert_eq!(a + b, b + a);
        assert_eq!(a + Fp::zero(), a);
        assert_eq!(a + (-a), Fp::zero());

        assert_eq!(a * (b + c), a * b + a * c);
        assert_eq!(a * Fp::one(), a);
        assert_eq!(a * Fp::zero(), Fp::zero());
        assert_eq!((a * b) * c, a * (b * c));

        if !bool::from(a.is_zero()) {
            assert_eq!(a * a.invert().unwrap(), Fp::one());
        }
    }
}

// ============================================================================
// Fp2
// ============================================================================

#[test]
fn fp2_squaring_matches_fixed_vector() {
    let a = Fp2 {
        c0: Fp::from_raw_unchecked([
            0xc9a2_1831_63ee_70d4,
            0xbc37_70a7_196b_5c91,
            0xa247_f8c1_304c_5f44,
            0xb01f_c2a3_726c_80b5,
            0xe1d2_93e5_bbd9_19c9,
            0x04b7_8e80_020e_f2ca,
        ]),
        c1: Fp::from_raw_unchecked([
            0x952e_a446_0462_618f,
            0x238d_5edd_f025_c62f,
            0xf6c9_4b01_2ea9_2e72,
            0x03ce_24ea_c1c9_3808,
            0x0559_50f9_45da_483c,
            0x010a_768d_0df4_eabc,
        ]),
    };
    let b = Fp2 {
        c0: Fp::from_raw_unchecked([
            0xa1e0_9175_a4d2_c1fe,
            0x8b33_acfc_204e_ff12,
            0xe244_15a1_1b45_6e42,
            0x61d9_96b1_b6ee_1936,
            0x1164_dbe8_667c_853c,
            0x0788_557a_cc7d_9c79,
        ]),
        c1: Fp::from_raw_unchecked([
            0xda6a_87cc_6f48_fa36,
            0x0fc7_b488_277c_1903,
            0x9445_ac4a_dc44_8187,
            0x0261_6d5b_c909_9209,
            0xdbed_4677_2db5_8d48,
            0x11b9_4d50_76c7_b7b1,
        ]),
    };

    assert_eq!(a.square(), b);
}

#[test]
fn fp2_field_laws() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let a = Fp2::random(&mut rng);
        let b = Fp2::random(&mut rng);
        let c = Fp2::random(&mut rng);

        assert_eq!((a + b) + c, a + (b + c));
        assert_eq!(a + b, b + a);
        assert_eq!(a + Fp2::zero(), a);
        assert_eq!(a + (-a), Fp2::zero());

        assert_eq!(a * b, b * a);
        assert_eq!((a * b) * c, a * (b * c));
        assert_eq!(a * (b + c), a * b + a * c);
        assert_eq!(a * Fp2::one(), a);
        assert_eq!(a.square(), a * a);

        if !bool::from(a.is_zero()) {
            assert_eq!(a * a.invert().unwrap(), Fp2::one());
        }
    }
}

#[test]
fn fp2_u_squares_to_minus_one() {
    let u = Fp2 {
        c0: Fp::zero(),
        c1: Fp::one(),
    };
    assert_eq!(u.square(), -Fp2::one());
}

#[test]
fn fp2_mul_by_nonresidue_matches_mul() {
    let xi = Fp2 {
        c0: Fp::one(),
        c1: Fp::one(),
    };
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let a = Fp2::random(&mut rng);
        assert_eq!(a.mul_by_nonresidue(), a * xi);
    }
}

#[test]
fn fp2_frobenius_is_conjugation() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let a = Fp2::random(&mut rng);
        // x^p has order dividing 2 on Fp2.
        assert_eq!(a.frobenius_map().frobenius_map(), a);
        // Conjugation fixes the subfield.
        assert_eq!(Fp2::from(Fp::random(&mut rng)).frobenius_map().c1, Fp::zero());
        assert_eq!(a.frobenius_map() * a, Fp2::from(a.c0.square() + a.c1.square()));
    }
}

// ============================================================================
// Fp4
// ============================================================================

fn random_fp4(rng: &mut StdRng) -> Fp4 {
    Fp4 {
        c0: Fp2::random(&mut *rng),
        c1: Fp2::random(&mut *rng),
    }
}

#[test]
fn fp4_field_laws() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let a = random_fp4(&mut rng);
        let b = random_fp4(&mut rng);
        let c = random_fp4(&mut rng);

        assert_eq!((a + b) + c, a + (b + c));
        assert_eq!(a + b, b + a);
        assert_eq!(a + Fp4::zero(), a);
        assert_eq!(a + (-a), Fp4::zero());

        assert_eq!(a * b, b * a);
        assert_eq!((a * b) * c, a * (b * c));
        assert_eq!(a * (b + c), a * b + a * c);
        assert_eq!(a * Fp4::one(), a);
        assert_eq!(a.square(), a * a);

        if !bool::from(a.is_zero()) {
            assert_eq!(a * a.invert().unwrap(), Fp4::one());
        }
    }
}

#[test]
fn fp4_s_squares_to_nonresidue() {
    let s = Fp4 {
        c0: Fp2::zero(),
        c1: Fp2::one(),
    };
    let xi = Fp4::from(Fp2 {
        c0: Fp::one(),
        c1: Fp::one(),
    });
    assert_eq!(s.square(), xi);
}

#[test]
fn fp4_mul_by_t_matches_mul_by_s() {
    let s = Fp4 {
        c0: Fp2::zero(),
        c1: Fp2::one(),
    };
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let a = random_fp4(&mut rng);
        assert_eq!(a.mul_by_t(), a * s);
    }
}

#[test]
fn fp4_mul_by_fp2_matches_embedded_mul() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let a = random_fp4(&mut rng);
        let k = Fp2::random(&mut rng);
        assert_eq!(a.mul_by_fp2(&k), a * Fp4::from(k));
    }
}

#[cfg(feature = "zeroize")]
#[test]
fn fp_zeroize() {
    use zeroize::Zeroize;

    let mut a = Fp::one();
    a.zeroize();
    assert!(bool::from(a.is_zero()));
}
