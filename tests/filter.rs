use scale_space::{Float,GradientDirection,ScaleSpaceError};
use scale_space::image::{Image,image_encoding::ImageEncoding};
use scale_space::filter::{BorderMode,filter_1d_convolution};
use scale_space::filter::{kernel::Kernel,gauss_kernel::GaussKernel1D};
use scale_space::filter::gaussian_blur::{Blur,GaussianBlur};

#[test]
fn gauss_kernel_is_normalized_and_symmetric() {
    let kernel = GaussKernel1D::new(1.6);
    assert_eq!(kernel.radius(), 5);
    assert_eq!(kernel.kernel().len(), 11);
    assert_eq!(kernel.sigma(), 1.6);

    let sum: Float = kernel.kernel().iter().sum();
    assert!((sum - 1.0).abs() < 1e-12);

    let radius = kernel.radius();
    for i in 1..=radius {
        assert!((kernel.kernel()[radius+i] - kernel.kernel()[radius-i]).abs() < 1e-15);
        assert!(kernel.kernel()[radius+i] < kernel.kernel()[radius+i-1]);
    }
}

#[test]
fn small_sigma_keeps_radius_one() {
    assert_eq!(GaussKernel1D::radius_for_sigma(0.1), 1);
    assert_eq!(GaussKernel1D::radius_for_sigma(1.0), 3);
    assert_eq!(GaussKernel1D::new(0.1).kernel().len(), 3);
}

#[test]
fn horizontal_pass_leaves_row_constant_image() {
    let data: Vec<Float> = (0..5).flat_map(|y| vec![y as Float * 10.0; 6]).collect();
    let source = Image::from_vec(6, 5, data).expect("valid image");
    let mut target = Image::zeros(6, 5, ImageEncoding::F64);
    let kernel = GaussKernel1D::new(2.0);

    for &border in &[BorderMode::Clamp, BorderMode::Normalized] {
        filter_1d_convolution(&source, GradientDirection::HORIZONTAL, &kernel, border, &mut target).expect("convolution");
        for y in 0..5 {
            for x in 0..6 {
                assert!((target.value(x, y) - source.value(x, y)).abs() < 1e-9);
            }
        }
    }
}

#[test]
fn border_modes_differ_only_near_edges() {
    let data: Vec<Float> = (0..15).map(|x| if x < 3 { 100.0 } else { 0.0 }).collect();
    let source = Image::from_vec(15, 1, data).expect("valid image");
    let kernel = GaussKernel1D::new(1.0);
    let mut clamp = Image::zeros(15, 1, ImageEncoding::F64);
    let mut normalized = Image::zeros(15, 1, ImageEncoding::F64);

    filter_1d_convolution(&source, GradientDirection::HORIZONTAL, &kernel, BorderMode::Clamp, &mut clamp).expect("convolution");
    filter_1d_convolution(&source, GradientDirection::HORIZONTAL, &kernel, BorderMode::Normalized, &mut normalized).expect("convolution");

    // left edge is bright in both modes, clamp repeats it and normalized ignores the outside
    assert!((clamp.value(0, 0) - normalized.value(0, 0)).abs() > 1e-6);
    for x in kernel.radius()..15-kernel.radius() {
        assert!((clamp.value(x, 0) - normalized.value(x, 0)).abs() < 1e-9);
    }
}

#[test]
fn blur_preserves_mass_of_centered_impulse() {
    let mut source = Image::zeros(21, 21, ImageEncoding::F64);
    source.set(10, 10, 1.0).expect("in bounds");
    let mut target = Image::zeros(21, 21, ImageEncoding::F64);

    let mut blur = GaussianBlur::new(BorderMode::Clamp);
    blur.blur(&source, &mut target, 1.0).expect("blur");

    let sum: Float = target.buffer.iter().sum();
    assert!((sum - 1.0).abs() < 1e-9);
    assert!(target.value(10, 10) > target.value(11, 10));
    assert!((target.value(9, 10) - target.value(11, 10)).abs() < 1e-12);
    assert!((target.value(10, 9) - target.value(10, 11)).abs() < 1e-12);
}

#[test]
fn blur_rejects_mismatched_buffers_and_bad_sigma() {
    let source = Image::zeros(5, 5, ImageEncoding::F64);
    let mut target = Image::zeros(4, 5, ImageEncoding::F64);
    let mut blur = GaussianBlur::default();
    assert_eq!(blur.border(), BorderMode::Normalized);

    assert!(matches!(blur.blur(&source, &mut target, 1.0), Err(ScaleSpaceError::SizeMismatch{..})));

    let mut target = Image::zeros(5, 5, ImageEncoding::F64);
    assert!(matches!(blur.blur(&source, &mut target, 0.0), Err(ScaleSpaceError::Configuration(_))));
    assert!(matches!(blur.blur(&source, &mut target, Float::NAN), Err(ScaleSpaceError::Configuration(_))));
}
