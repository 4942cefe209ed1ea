use super::*;

#[test]
fn aspect_ratios_map_to_expected_dimensions() {
    assert_eq!(AspectRatio::Square.dimensions(), Canvas { width: 1024, height: 1024 });
    assert_eq!(
        AspectRatio::Landscape.dimensions(),
        Canvas { width: 1920, height: 1080 }
    );
    assert_eq!(
        AspectRatio::Portrait.dimensions(),
        Canvas { width: 1080, height: 1920 }
    );
    assert_eq!(
        AspectRatio::Classic.dimensions(),
        Canvas { width: 1600, height: 1200 }
    );
}

#[test]
fn city_skyline_at_night_landscape_is_1920_by_1080() {
    let options = ImageOptions {
        prompt: "a city skyline at night".to_owned(),
        style: ImageStyle::DigitalArt,
        aspect_ratio: AspectRatio::Landscape,
        seed: 3,
    };
    let frame = generate_image(&options);
    assert_eq!(frame.width, 1920);
    assert_eq!(frame.height, 1080);
    assert_eq!(frame.data.len(), frame.byte_len());
}

#[test]
fn generation_is_seed_deterministic() {
    let options = ImageOptions {
        prompt: "abstract geometric shapes".to_owned(),
        style: ImageStyle::Watercolor,
        aspect_ratio: AspectRatio::Square,
        seed: 9,
    };
    assert_eq!(generate_image(&options).data, generate_image(&options).data);

    let other_seed = ImageOptions { seed: 10, ..options };
    // Keyword branches draw with randomized placement, so a different
    // seed moves them.
    assert_ne!(generate_image(&other_seed).data, {
        let base = ImageOptions {
            seed: 9,
            ..other_seed.clone()
        };
        generate_image(&base).data
    });
}

#[test]
fn keyword_elements_alter_the_gradient() {
    let plain = ImageOptions {
        prompt: "nothing in particular".to_owned(),
        style: ImageStyle::OilPainting,
        aspect_ratio: AspectRatio::Square,
        seed: 1,
    };
    let nature = ImageOptions {
        prompt: "a nature landscape".to_owned(),
        ..plain.clone()
    };
    assert_ne!(generate_image(&plain).data, generate_image(&nature).data);
}

#[test]
fn titles_truncate_long_prompts() {
    assert_eq!(image_title("short"), "AI Generated: short");
    let long = "a".repeat(64);
    let title = image_title(&long);
    assert!(title.ends_with("..."));
}
