use super::*;
use crate::GRID_SIDE;

fn checker(side: u32) -> BinaryGrid {
    let rows: Vec<Vec<u8>> = (0..side)
        .map(|y| (0..side).map(|x| ((x / 3 + y / 5) % 2) as u8).collect())
        .collect();
    BinaryGrid::from_rows(&rows[..]).unwrap()
}

#[test]
fn pad_grid_places_original_and_fills_ones() {
    let g = BinaryGrid::from_rows(&[vec![0u8, 1], vec![0, 0]]).unwrap();
    let p = PaddingSpec {
        total: 3,
        top: 1,
        bottom: 2,
        left: 3,
        right: 0,
    };
    let out = pad_grid(&g, &p);
    assert_eq!(out.width(), 5);
    assert_eq!(out.height(), 5);
    assert_eq!(out.get(3, 1), 0);
    assert_eq!(out.get(4, 1), 1);
    assert_eq!(out.get(3, 2), 0);
    assert_eq!(out.get(4, 2), 0);
    // Margins take the value 1.
    assert_eq!(out.get(0, 0), 1);
    assert_eq!(out.get(2, 4), 1);
    assert_eq!(out.count_ones(), 25 - 3);
}

#[test]
fn grid_to_image_maps_one_to_black_and_is_opaque() {
    let g = BinaryGrid::from_rows(&[vec![1u8, 0]]).unwrap();
    let img = grid_to_image(&g);
    assert_eq!(img.get_pixel(0, 0), &Rgba([0, 0, 0, 255]));
    assert_eq!(img.get_pixel(1, 0), &Rgba([255, 255, 255, 255]));
}

#[test]
fn binarize_threshold_is_strict() {
    let mut img = RgbaImage::new(3, 1);
    img.put_pixel(0, 0, Rgba([127, 127, 127, 255]));
    img.put_pixel(1, 0, Rgba([128, 127, 127, 255]));
    img.put_pixel(2, 0, Rgba([255, 0, 255, 255]));
    assert_eq!(binarize_image(&img).cells(), &[0, 1, 1]);
}

#[test]
fn black_white_image_roundtrips_at_native_size() {
    let g = checker(GRID_SIDE);
    let img: RgbaImage = RgbaImage::from_fn(GRID_SIDE, GRID_SIDE, |x, y| {
        if g.get(x, y) == 1 { PAPER } else { INK }
    });
    assert_eq!(binarize_image(&resample(&img, GRID_SIDE)), g);
}

#[test]
fn zero_padding_composite_is_the_cell_complement() {
    let g = checker(GRID_SIDE);
    let out = composite(&g, &PaddingSpec::zero(), GRID_SIDE);
    assert_eq!(out.width(), GRID_SIDE);
    for y in 0..GRID_SIDE {
        for x in 0..GRID_SIDE {
            assert_eq!(out.get(x, y), 1 - g.get(x, y));
        }
    }
}

#[test]
fn padded_composite_keeps_shape_and_darkens_margins() {
    let g = BinaryGrid::filled(GRID_SIDE, GRID_SIDE, 0);
    let p = PaddingSpec {
        total: 40,
        top: 20,
        bottom: 20,
        left: 20,
        right: 20,
    };
    let out = composite(&g, &p, GRID_SIDE);
    assert_eq!((out.width(), out.height()), (GRID_SIDE, GRID_SIDE));
    assert!(out.cells().iter().all(|&c| c <= 1));

    // Margins become 0; the blank interior becomes 1.
    assert_eq!(out.get(0, 0), 0);
    assert_eq!(out.get(GRID_SIDE - 1, GRID_SIDE - 1), 0);
    assert_eq!(out.get(GRID_SIDE / 2, GRID_SIDE / 2), 1);
}

#[test]
fn thin_stripe_survives_four_to_one_reduction() {
    let side = 128u32;
    let img = RgbaImage::from_fn(side, side, |x, _| if x == 40 || x == 41 { PAPER } else { INK });
    let out = binarize_image(&resample(&img, side / 2));
    assert_eq!(out.width(), side / 2);
    for y in 0..side / 2 {
        assert_eq!(out.get(20, y), 1, "stripe column lost at row {y}");
        assert_eq!(out.get(10, y), 0);
        assert_eq!(out.get(21, y), 0);
    }
}
