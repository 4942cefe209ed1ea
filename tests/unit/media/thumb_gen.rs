use super::*;

fn options(platform: Platform) -> ThumbnailOptions {
    ThumbnailOptions {
        prompt: "how to bake bread".to_owned(),
        platform,
        color_scheme: ColorScheme::BrightBold,
        text_overlay: Some("BAKE IT".to_owned()),
        seed: 5,
    }
}

#[test]
fn platform_dimensions_are_fixed() {
    assert_eq!(
        Platform::YouTube.dimensions(),
        Canvas { width: 1280, height: 720 }
    );
    assert_eq!(
        Platform::Instagram.dimensions(),
        Canvas { width: 1080, height: 1080 }
    );
    assert_eq!(
        Platform::TikTok.dimensions(),
        Canvas { width: 1080, height: 1920 }
    );
}

#[test]
fn youtube_thumbnail_carries_a_play_badge() {
    let frame = generate_thumbnail(&options(Platform::YouTube));
    assert_eq!(frame.width, 1280);
    // Center pixel sits inside the red play disc.
    let cx = frame.width / 2;
    let cy = frame.height / 2;
    let idx = ((cy * frame.width + cx) * 4) as usize;
    // Either the white triangle or the red disc, but not the gradient.
    let px = [frame.data[idx], frame.data[idx + 1], frame.data[idx + 2]];
    assert!(px == [255, 255, 255] || px[0] > 150);
}

#[test]
fn generation_is_seed_deterministic() {
    let a = generate_thumbnail(&options(Platform::TikTok));
    let b = generate_thumbnail(&options(Platform::TikTok));
    assert_eq!(a.data, b.data);
}

#[test]
fn schemes_produce_different_backgrounds() {
    let bright = generate_thumbnail(&options(Platform::Instagram));
    let dark = generate_thumbnail(&ThumbnailOptions {
        color_scheme: ColorScheme::DarkMoody,
        ..options(Platform::Instagram)
    });
    assert_ne!(bright.data, dark.data);
}

#[test]
fn titles_name_the_platform() {
    assert_eq!(
        thumbnail_title(&options(Platform::YouTube)),
        "YouTube Thumbnail: BAKE IT"
    );
    let untitled = ThumbnailOptions {
        text_overlay: None,
        ..options(Platform::TikTok)
    };
    assert_eq!(thumbnail_title(&untitled), "TikTok Thumbnail: how to bake bread");
}
