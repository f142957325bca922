use rand::{Rng,SeedableRng,rngs::SmallRng};

use scale_space::ScaleSpaceError;
use scale_space::image::{Image,image_encoding::ImageEncoding};
use scale_space::image::resample::{downsample,upsample,downsample_half,upsample_double};

#[test]
fn downsample_takes_odd_pixels() {
    let from = Image::from_vec(4, 4, (0..16).map(|v| v as f64).collect()).expect("valid image");
    let mut to = Image::zeros(2, 2, ImageEncoding::F64);
    downsample(&from, &mut to).expect("downsample");

    let expected = Image::from_vec(2, 2, vec![5.0, 7.0, 13.0, 15.0]).expect("valid image");
    assert_eq!(to, expected);
}

#[test]
fn downsample_requires_half_size_target() {
    let from = Image::zeros(5, 5, ImageEncoding::F64);

    let mut wrong = Image::zeros(3, 2, ImageEncoding::F64);
    match downsample(&from, &mut wrong) {
        Err(ScaleSpaceError::SizeMismatch{expected: (2,2), actual: (3,2)}) => (),
        other => panic!("expected size mismatch, got: {:?}", other)
    }

    let mut right = Image::zeros(2, 2, ImageEncoding::F64);
    downsample(&from, &mut right).expect("odd width drops the last column");
}

#[test]
fn upsample_replicates_blocks() {
    let from = Image::from_vec(2, 1, vec![1.0, 2.0]).expect("valid image");
    let mut to = Image::zeros(4, 2, ImageEncoding::F64);
    upsample(&from, &mut to).expect("upsample");

    let expected = Image::from_vec(4, 2, vec![
        1.0, 1.0, 2.0, 2.0,
        1.0, 1.0, 2.0, 2.0
    ]).expect("valid image");
    assert_eq!(to, expected);

    let mut wrong = Image::zeros(4, 1, ImageEncoding::F64);
    assert!(matches!(upsample(&from, &mut wrong), Err(ScaleSpaceError::SizeMismatch{..})));
}

#[test]
fn upsample_then_downsample_preserves_uniform_image() {
    let mut uniform = Image::zeros(5, 3, ImageEncoding::F64);
    uniform.fill(17.5);

    let up = upsample_double(&uniform);
    assert_eq!(up.dimensions(), (10, 6));
    let down = downsample_half(&up);
    assert_eq!(down.dimensions(), (5, 3));
    assert!(down.buffer.iter().all(|&v| v == 17.5));
}

#[test]
fn downsample_inverts_upsample() {
    let mut rng = SmallRng::seed_from_u64(7);
    let data = (0..6*7).map(|_| rng.gen_range(-10.0..10.0)).collect();
    let image = Image::from_vec(6, 7, data).expect("valid image");

    assert_eq!(downsample_half(&upsample_double(&image)), image);
}
