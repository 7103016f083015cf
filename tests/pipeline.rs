//! End-to-end pipeline tests: slice, clean, normalize, compose.

use framepack::{
    chroma_key, compose_flat, crop_sequence, remove_halo, slice, Colour, CropMode, CropPolicy,
    Direction, DirectionSet8, Frame, GridSpec, HorizontalAlign, PixelBuffer, SheetLayout,
    VerticalAlign,
};

#[test]
fn slice_then_compose_reproduces_sheet() {
    // A 128x48 sheet with per-cell colours, sliced 4x1 into 32x48 frames and
    // composed back, must come out pixel-identical.
    let mut sheet = PixelBuffer::new(128, 48);
    for cell in 0..4u32 {
        let colour = Colour::rgb((cell as u8 + 1) * 40, 10, 10);
        for y in 0..48 {
            for x in 0..32 {
                sheet.set(cell * 32 + x, y, colour);
            }
        }
    }

    let grid = GridSpec::new(4, 1).unwrap();
    let frames = slice(&sheet, &grid).unwrap();
    assert_eq!(frames.len(), 4);
    for frame in &frames {
        assert_eq!((frame.width(), frame.height()), (32, 48));
    }

    let recomposed = compose_flat(&frames, 4).unwrap();
    assert_eq!(recomposed.dimensions(), (128, 48));
    assert_eq!(recomposed.data(), sheet.data());
}

#[test]
fn chroma_key_clears_solid_background() {
    let green = Colour::rgb(0, 255, 0);
    let buffer = PixelBuffer::filled(32, 48, green);

    let keyed = chroma_key(&buffer, green, 0.0);
    for y in 0..48 {
        for x in 0..32 {
            assert_eq!(keyed.alpha(x, y), 0);
        }
    }
}

/// Key, clean, and normalize a two-frame capture, then sheet it. The 1px of
/// relative motion between the frames must survive the whole pipeline
/// (scaled with the content).
#[test]
fn keyed_capture_normalizes_with_motion_preserved() {
    let green = Colour::rgb(0, 255, 0);
    let subject = Colour::rgb(200, 40, 40);

    // Two 16x16 captures: a 6x6 subject, frame B shifted right by 1px.
    let mut capture_a = PixelBuffer::filled(16, 16, green);
    let mut capture_b = PixelBuffer::filled(16, 16, green);
    for y in 8..14 {
        for x in 4..10 {
            capture_a.set(x, y, subject);
            capture_b.set(x + 1, y, subject);
        }
    }

    let frames: Vec<Frame> = [capture_a, capture_b]
        .into_iter()
        .enumerate()
        .map(|(i, capture)| {
            let keyed = chroma_key(&capture, green, 0.0);
            let cleaned = remove_halo(&keyed, 1);
            Frame::new(cleaned, i as u32, 0)
        })
        .collect();

    // Halo cleanup ate the subject's 1px outer ring: 4x4 remains.
    assert_eq!(frames[0].content_bounds().width, 4);
    assert_eq!(frames[0].content_bounds().height, 4);
    assert_eq!(frames[0].content_bounds().x + 1, frames[1].content_bounds().x);

    let policy = CropPolicy {
        mode: CropMode::AnimationRelative,
        target_width: 8,
        target_height: 8,
        align_x: HorizontalAlign::Left,
        align_y: VerticalAlign::Top,
        reduction: 0,
    };
    let cropped = crop_sequence(&frames, &policy);

    // Reference frame fills the target at scale 2.
    let leftmost = |frame: &Frame| -> u32 {
        let pixels = frame.pixels();
        for x in 0..pixels.width() {
            for y in 0..pixels.height() {
                if pixels.alpha(x, y) > 0 {
                    return x;
                }
            }
        }
        pixels.width()
    };
    assert_eq!(leftmost(&cropped[0]), 0);
    // 1px of source motion at scale 2.
    assert_eq!(leftmost(&cropped[1]), 2);

    let sheet = compose_flat(&cropped, 2).unwrap();
    assert_eq!(sheet.dimensions(), (16, 8));
    assert!(sheet.alpha(0, 0) > 0); // frame A content at the left cell
    assert_eq!(sheet.alpha(8, 0), 0); // frame B's shifted column is blank
    assert!(sheet.alpha(10, 0) > 0);
}

#[test]
fn flat_layout_metadata_snapshot() {
    let layout = SheetLayout::flat("walk.png", "walk", 32, 48, 4, 4, 100, true);
    let json = serde_json::to_string_pretty(&layout).unwrap();
    insta::assert_snapshot!(json, @r#"
    {
      "image": "walk.png",
      "frame_width": 32,
      "frame_height": 48,
      "columns": 4,
      "animations": [
        {
          "name": "walk",
          "row": 0,
          "start_cell": 0,
          "frame_count": 4,
          "frame_duration_ms": 100,
          "loop": true
        }
      ]
    }
    "#);
}

#[test]
fn directional_layout_metadata_snapshot() {
    let mut set = DirectionSet8::new();
    for _ in 0..2 {
        set.push(Direction::South, Frame::new(PixelBuffer::new(4, 4), 0, 0));
    }
    set.push(Direction::North, Frame::new(PixelBuffer::new(4, 4), 0, 0));

    let layout = SheetLayout::directional("hero.png", "walk", 4, 4, 2, &set, 100, true);
    let json = serde_json::to_string_pretty(&layout).unwrap();
    insta::assert_snapshot!(json, @r#"
    {
      "image": "hero.png",
      "frame_width": 4,
      "frame_height": 4,
      "columns": 2,
      "animations": [
        {
          "name": "walk",
          "direction": "south",
          "row": 0,
          "start_cell": 0,
          "frame_count": 2,
          "frame_duration_ms": 100,
          "loop": true
        },
        {
          "name": "walk",
          "direction": "north",
          "row": 4,
          "start_cell": 8,
          "frame_count": 1,
          "frame_duration_ms": 100,
          "loop": true
        }
      ]
    }
    "#);
}
