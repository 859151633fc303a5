use proptest::collection::vec;
use proptest::prelude::*;
use proptest::sample::subsequence;

use gf256_interpolate::field::gf256::{mult, poly_eval, GF256};
use gf256_interpolate::sss::reconstruct::{extend_shares, reconstruct_secret};
use gf256_interpolate::{
    Backend, BitslicedInterpolator, DirectInterpolator, InterpolationError, Interpolator, SharePoint,
};

const BACKENDS: [Backend; 2] = [Backend::Direct, Backend::Bitsliced];

/// Pairwise distinct coordinates in random order.
fn distinct_xs(count: std::ops::RangeInclusive<usize>) -> impl Strategy<Value = Vec<u8>> {
    subsequence((0..=255u8).collect::<Vec<u8>>(), count).prop_shuffle()
}

/// Distinct coordinates plus one y-vector of `yl` bytes per coordinate. Zero bytes are
/// over-represented so the zero-term paths get exercised.
fn points(
    count: std::ops::RangeInclusive<usize>,
    max_len: usize,
) -> impl Strategy<Value = (Vec<u8>, Vec<Vec<u8>>)> {
    (distinct_xs(count), 0..=max_len).prop_flat_map(|(xs, yl)| {
        let n = xs.len();
        let byte = prop_oneof![Just(0u8), any::<u8>()];
        (Just(xs), vec(vec(byte, yl), n))
    })
}

fn rows(ys: &[Vec<u8>]) -> Vec<&[u8]> {
    ys.iter().map(|y| y.as_slice()).collect()
}

/// Evaluates, byte by byte, the polynomial with constant terms `secret` and higher
/// coefficients `coeffs[k]` at `x`.
fn eval_at(secret: &[u8], coeffs: &[Vec<u8>], x: u8) -> Vec<u8> {
    (0..secret.len())
        .map(|j| {
            let poly: Vec<GF256> = std::iter::once(secret[j])
                .chain(coeffs.iter().map(|c| c[j]))
                .map(GF256)
                .collect();
            poly_eval(&poly, GF256(x)).0
        })
        .collect()
}

/// A secret, `threshold - 1` random coefficient rows, and `threshold + 1` distinct
/// nonzero share indices (one spare for substitution tests).
fn dealing() -> impl Strategy<Value = (Vec<u8>, Vec<Vec<u8>>, Vec<u8>)> {
    (1usize..=8, 0usize..=32).prop_flat_map(|(threshold, yl)| {
        (
            vec(any::<u8>(), yl),
            vec(vec(any::<u8>(), yl), threshold - 1),
            subsequence((1..=255u8).collect::<Vec<u8>>(), threshold + 1).prop_shuffle(),
        )
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn basis_is_one_at_own_coordinate_zero_elsewhere(xs in distinct_xs(1..=40)) {
        for backend in BACKENDS {
            let interp = backend.interpolator();
            for m in 0..xs.len() {
                for k in 0..xs.len() {
                    let expected = if k == m { 1 } else { 0 };
                    prop_assert_eq!(interp.basis(&xs, m, xs[k]), Ok(expected));
                }
            }
        }
    }

    #[test]
    fn interpolation_reproduces_each_point((xs, ys) in points(1..=16, 32)) {
        let yij = rows(&ys);
        let yl = ys[0].len();
        for backend in BACKENDS {
            for (k, &xk) in xs.iter().enumerate() {
                let out = backend.interpolator().interpolate(&xs, yl, &yij, xk).unwrap();
                prop_assert_eq!(&out[..], ys[k].as_slice());
            }
        }
    }

    #[test]
    fn duplicate_coordinates_are_rejected(
        xs in distinct_xs(1..=40),
        pick in any::<prop::sample::Index>(),
        at in any::<prop::sample::Index>(),
    ) {
        let dup = xs[pick.index(xs.len())];
        let mut with_dup = xs.clone();
        with_dup.insert(at.index(xs.len() + 1), dup);
        let first = with_dup.iter().position(|&x| x == dup).unwrap();

        let y: Vec<u8> = vec![1, 2, 3];
        let yij: Vec<&[u8]> = with_dup.iter().map(|_| y.as_slice()).collect();
        let err = InterpolationError::DuplicateCoordinate { x: dup };

        for backend in BACKENDS {
            let interp = backend.interpolator();
            prop_assert_eq!(interp.basis(&with_dup, first, 0), Err(err));
            let mut out = [0x5Au8; 3];
            prop_assert_eq!(interp.interpolate_into(&with_dup, &yij, 0, &mut out), Err(err));
            prop_assert_eq!(out, [0x5A; 3]);
        }
    }

    #[test]
    fn reconstruction_recovers_the_constant_term((secret, coeffs, xs) in dealing()) {
        let threshold = coeffs.len() + 1;
        let shares: Vec<SharePoint> = xs
            .iter()
            .map(|&x| SharePoint::new(x, eval_at(&secret, &coeffs, x)))
            .collect();

        for backend in BACKENDS {
            let interp = backend.interpolator();
            let head = reconstruct_secret(interp, &shares[..threshold], 0).unwrap();
            prop_assert_eq!(&head[..], secret.as_slice());
            let tail = reconstruct_secret(interp, &shares[1..], 0).unwrap();
            prop_assert_eq!(&tail[..], secret.as_slice());
        }
    }

    #[test]
    fn extended_share_substitutes_for_any_original(
        (secret, coeffs, xs) in dealing(),
        replace in any::<prop::sample::Index>(),
    ) {
        let threshold = coeffs.len() + 1;
        let shares: Vec<SharePoint> = xs[..threshold]
            .iter()
            .map(|&x| SharePoint::new(x, eval_at(&secret, &coeffs, x)))
            .collect();
        let fresh_x = xs[threshold];

        for backend in BACKENDS {
            let interp = backend.interpolator();
            let expected = eval_at(&secret, &coeffs, fresh_x);
            let minted = extend_shares(interp, &shares, fresh_x, 0).unwrap();
            prop_assert_eq!(minted.value(), expected.as_slice());

            let mut swapped = shares.clone();
            swapped[replace.index(threshold)] = minted;
            let recovered = reconstruct_secret(interp, &swapped, 0).unwrap();
            prop_assert_eq!(&recovered[..], secret.as_slice());
        }
    }

    #[test]
    fn zero_length_vectors_interpolate_to_empty(xs in distinct_xs(1..=40), x in any::<u8>()) {
        let empty: &[u8] = &[];
        let yij: Vec<&[u8]> = xs.iter().map(|_| empty).collect();
        for backend in BACKENDS {
            let out = backend.interpolator().interpolate(&xs, 0, &yij, x).unwrap();
            prop_assert!(out.is_empty());
        }
    }

    #[test]
    fn repeated_calls_agree((xs, ys) in points(1..=16, 32), x in any::<u8>()) {
        let yij = rows(&ys);
        let yl = ys[0].len();
        for backend in BACKENDS {
            let interp = backend.interpolator();
            let first = interp.interpolate(&xs, yl, &yij, x).unwrap();
            let second = interp.interpolate(&xs, yl, &yij, x).unwrap();
            prop_assert_eq!(&first[..], &second[..]);
        }
    }

    #[test]
    fn backends_agree_bit_exactly((xs, ys) in points(1..=70, 32), x in any::<u8>()) {
        let yij = rows(&ys);
        let yl = ys[0].len();
        for m in 0..xs.len() {
            prop_assert_eq!(
                DirectInterpolator.basis(&xs, m, x),
                BitslicedInterpolator.basis(&xs, m, x)
            );
        }
        let direct = DirectInterpolator.interpolate(&xs, yl, &yij, x).unwrap();
        let sliced = BitslicedInterpolator.interpolate(&xs, yl, &yij, x).unwrap();
        prop_assert_eq!(&direct[..], &sliced[..]);
    }

    #[test]
    fn skipping_zero_terms_matches_dense_sum((xs, ys) in points(1..=16, 32), x in any::<u8>()) {
        let yij = rows(&ys);
        let yl = ys[0].len();
        let lags: Vec<u8> = (0..xs.len())
            .map(|m| DirectInterpolator.basis(&xs, m, x).unwrap())
            .collect();
        let dense: Vec<u8> = (0..yl)
            .map(|j| lags.iter().zip(&ys).fold(0u8, |acc, (&l, y)| acc ^ mult(l, y[j])))
            .collect();

        let out = DirectInterpolator.interpolate(&xs, yl, &yij, x).unwrap();
        prop_assert_eq!(&out[..], dense.as_slice());
    }
}

#[test]
fn known_vector_through_three_points() {
    let y: [&[u8]; 3] = [&[5], &[9], &[13]];
    for backend in BACKENDS {
        let out = backend.interpolator().interpolate(&[1, 2, 3], 1, &y, 0).unwrap();
        assert_eq!(&out[..], &[0x01]);
    }
}

#[test]
fn known_shares_recover_secret() {
    // f(x) = s + c1 x + c2 x^2, s = 4299ab, c1 = 101112, c2 = 202122
    let ys = [
        hex::decode("72a99b").unwrap(),
        hex::decode("e23f07").unwrap(),
        hex::decode("d20f37").unwrap(),
    ];
    let yij = rows(&ys);
    for backend in BACKENDS {
        let interp = backend.interpolator();
        let secret = interp.interpolate(&[1, 2, 3], 3, &yij, 0).unwrap();
        assert_eq!(hex::encode(&secret[..]), "4299ab");
        let minted = interp.interpolate(&[1, 2, 3], 3, &yij, 7).unwrap();
        assert_eq!(hex::encode(&minted[..]), "a46d69");
    }
}

#[test]
fn block_backend_rejects_wide_secrets() {
    let ys = [vec![1u8; 33], vec![2u8; 33]];
    let yij = rows(&ys);
    assert_eq!(
        BitslicedInterpolator.interpolate(&[1, 2], 33, &yij, 0).map(|v| v.len()),
        Err(InterpolationError::VectorTooLong { len: 33, max: 32 })
    );
    assert_eq!(DirectInterpolator.interpolate(&[1, 2], 33, &yij, 0).map(|v| v.len()), Ok(33));
}
