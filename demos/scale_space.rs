extern crate image as image_rs;

use std::{env,fs,path::Path};
use color_eyre::eyre::{eyre,Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use scale_space::image::Image;
use scale_space::pyramid::{ScaleSpacePyramid,ScaleSpaceRuntimeParameters};

// cargo run --example scale_space -- images/lenna.png [params.yaml]
fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = env::args().collect();
    let image_path = args.get(1).ok_or_else(|| eyre!("usage: scale_space <image> [params.yaml]"))?;
    let runtime_parameters = match args.get(2) {
        Some(yaml_path) => ScaleSpaceRuntimeParameters::load(yaml_path)?,
        None => ScaleSpaceRuntimeParameters::default()
    };
    info!(?runtime_parameters, "loaded parameters");

    let image_name = Path::new(image_path).file_stem().and_then(|s| s.to_str()).unwrap_or("image").to_string();
    let output_dir = Path::new("output");
    fs::create_dir_all(output_dir)?;

    let gray_image = image_rs::open(image_path)?.to_luma8();
    let frame = Image::from_gray_image(&gray_image, false);

    let mut pyramid = ScaleSpacePyramid::new(runtime_parameters)?;
    pyramid.process(&frame)?;

    loop {
        pyramid.compute_feature_intensity()?;
        let octave = pyramid.octave_index();
        info!(octave, width = pyramid.width(), height = pyramid.height(), pixel_scale = pyramid.pixel_scale(), "octave");

        for (i, scale) in pyramid.octave().scales().iter().enumerate() {
            info!(octave, level = i, sigma = pyramid.compute_scale_sigma(i), "scale");
            scale.to_image().save(output_dir.join(format!("{}_octave_{}_scale_{}.png", image_name, octave, i)))?;
        }
        for (i, dog) in pyramid.octave().difference_of_gaussians().iter().enumerate() {
            dog.to_image().save(output_dir.join(format!("{}_octave_{}_dog_{}.png", image_name, octave, i)))?;
        }

        if !pyramid.compute_next_octave()? {
            break;
        }
    }

    Ok(())
}
