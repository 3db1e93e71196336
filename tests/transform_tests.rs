mod support;

use approx::assert_relative_eq;
use ndarray::{Array1, Array2, Array3, ArrayD, IxDyn, array};
use parabolic_edt::{
    DistanceError, DistanceTransform, distance_transform, float_types::Real,
    float_types::sentinel, squared_distance_transform,
};

#[test]
fn single_object_pixel_5x5() {
    let mut mask = Array2::from_elem((5, 5), false);
    mask[[2, 2]] = true;

    let mut squared = Array2::<Real>::zeros((5, 5));
    squared_distance_transform(&mask, &mut squared, true, None).unwrap();
    assert_eq!(squared[[0, 0]], 8.0);

    let mut dist = Array2::<Real>::zeros((5, 5));
    distance_transform(&mask, &mut dist, true, None).unwrap();
    assert_relative_eq!(dist[[0, 0]], 8.0f64.sqrt());
    assert_eq!(dist[[2, 4]], 2.0);
}

#[test]
fn line_of_seeds_and_true_distance() {
    let mask = array![0u8, 1, 1, 1, 1];
    let mut squared = Array1::<Real>::zeros(5);
    squared_distance_transform(&mask, &mut squared, false, None).unwrap();
    assert_eq!(squared, array![0.0, 1.0, 4.0, 9.0, 16.0]);

    let mut dist = Array1::<Real>::zeros(5);
    distance_transform(&mask, &mut dist, false, None).unwrap();
    assert_eq!(dist, array![0.0, 1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn matches_brute_force_3d_anisotropic() {
    let shape = [4, 5, 3];
    let pitch = [1.0, 0.5, 2.0];
    let mask = ArrayD::from_shape_fn(IxDyn(&shape), |idx| {
        (idx[0] * 7 + idx[1] * 3 + idx[2] * 5) % 11 == 0
    });

    let mut dist = ArrayD::<Real>::zeros(IxDyn(&shape));
    squared_distance_transform(&mask, &mut dist, true, Some(&pitch)).unwrap();

    let reference = support::brute_force_nd(&mask, &pitch);
    for (got, want) in dist.iter().zip(reference.iter()) {
        let want = want.expect("mask has seeds");
        assert!(support::approx_eq(*got, want, 1e-9), "{got} != {want}");
    }
}

#[test]
fn all_one_class() {
    let objects = Array3::from_elem((2, 3, 4), 1i16);

    // every element is a seed
    let mut dist = Array3::<u8>::from_elem((2, 3, 4), 9);
    squared_distance_transform(&objects, &mut dist, true, None).unwrap();
    assert!(dist.iter().all(|&v| v == 0));

    // no element is a seed: everything resolves to the sentinel
    let mut far = Array3::<Real>::zeros((2, 3, 4));
    squared_distance_transform(&objects, &mut far, false, None).unwrap();
    let inf = sentinel(&[2, 3, 4], &[1.0, 1.0, 1.0]);
    assert_eq!(inf, 30.0);
    assert!(far.iter().all(|&v| v == inf));
}

#[test]
fn u8_output_saturates_far_from_seeds() {
    let mut mask = Array2::<u8>::zeros((40, 40));
    mask[[0, 0]] = 1;

    let mut squared = Array2::<u8>::zeros((40, 40));
    squared_distance_transform(&mask, &mut squared, true, None).unwrap();
    assert_eq!(squared[[0, 0]], 0);
    assert_eq!(squared[[5, 10]], 125);
    assert_eq!(squared[[20, 20]], 255);
    assert_eq!(squared[[39, 39]], 255);

    // the integer part of the square root of the saturated values
    let mut dist = Array2::<u8>::zeros((40, 40));
    distance_transform(&mask, &mut dist, true, None).unwrap();
    for (s, d) in squared.iter().zip(dist.iter()) {
        assert_eq!(*d, (*s as Real).sqrt().trunc() as u8);
    }
    assert_eq!(dist[[5, 10]], 11);
    assert_eq!(dist[[39, 39]], 15);
}

#[test]
fn euclidean_is_root_of_squared_on_every_path() {
    let mut mask = Array2::<i32>::zeros((12, 9));
    mask[[3, 4]] = 5;
    mask[[11, 0]] = -2;

    for pitch in [None, Some(vec![1.0, 3.0]), Some(vec![0.75, 1.25])] {
        let transform = match &pitch {
            Some(p) => DistanceTransform::new().background(true).pixel_pitch(p.clone()),
            None => DistanceTransform::new().background(true),
        };

        let squared = transform.squared(&mask).unwrap();
        let euclidean = transform.euclidean(&mask).unwrap();
        for (s, e) in squared.iter().zip(euclidean.iter()) {
            assert_relative_eq!(s.sqrt(), *e, max_relative = 1e-12);
        }

        // integral outputs, including the real-valued fallback for fractional pitch
        let mut squared_u16 = Array2::<u16>::zeros((12, 9));
        let mut euclidean_u16 = Array2::<u16>::zeros((12, 9));
        transform.squared_into(&mask, &mut squared_u16).unwrap();
        transform.euclidean_into(&mask, &mut euclidean_u16).unwrap();
        for (s, e) in squared_u16.iter().zip(euclidean_u16.iter()) {
            assert_eq!(*e, (*s as Real).sqrt().trunc() as u16);
        }
    }
}

#[test]
fn shape_mismatch_is_reported() {
    let mask = Array2::<u8>::zeros((3, 4));
    let mut dist = Array2::<Real>::zeros((4, 3));
    assert_eq!(
        squared_distance_transform(&mask, &mut dist, true, None),
        Err(DistanceError::ShapeMismatch {
            input: vec![3, 4],
            output: vec![4, 3],
        })
    );
}

#[test]
fn invalid_pitch_is_reported() {
    let mask = Array2::<u8>::zeros((3, 4));
    let mut dist = Array2::<Real>::zeros((3, 4));
    let err = DistanceTransform::new()
        .pixel_pitch([1.0, -1.0])
        .squared_into(&mask, &mut dist)
        .unwrap_err();
    assert_eq!(err, DistanceError::InvalidPitch { axis: 1, pitch: -1.0 });
}

#[test]
fn empty_arrays() {
    let mask = Array2::<u8>::zeros((0, 7));
    let mut dist = Array2::<Real>::zeros((0, 7));
    squared_distance_transform(&mask, &mut dist, true, None).unwrap();
    assert!(dist.is_empty());
}
